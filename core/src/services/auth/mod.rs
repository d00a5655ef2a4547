//! Authentication service module
//!
//! This module provides the account side of the system:
//! - Username/password signup with bcrypt hashing
//! - Login with credential verification and token issuance

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::AuthService;
