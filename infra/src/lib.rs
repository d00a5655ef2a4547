//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the CarVault application,
//! following Clean Architecture principles. It provides concrete implementations
//! for the persistence and storage ports defined in `cv_core`.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL implementations using SQLx
//! - **Storage**: Cloudinary-backed image hosting over HTTPS

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Storage module - external image hosting
pub mod storage;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
