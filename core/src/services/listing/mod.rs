//! Listing catalog service module
//!
//! This module orchestrates the listing lifecycle:
//! - Creation and partial update, including gallery uploads
//! - Owner-scoped retrieval, enumeration, and search
//! - Deletion with best-effort asset cleanup

mod config;
mod service;


pub use config::ListingServiceConfig;
pub use service::ListingService;
