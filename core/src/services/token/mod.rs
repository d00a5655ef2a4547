//! Token service module for stateless JWT management
//!
//! This module handles token issuance and verification. Tokens are
//! self-contained: verifying one touches no storage, so there is no
//! revocation list and no refresh flow.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
