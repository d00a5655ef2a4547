//! Shared utilities and common types for the CarVault server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Wire-level response structures
//! - Utility functions (username validation, etc.)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, ServerConfig, TokenConfig};
pub use types::{Confirmation, ErrorBody};
pub use utils::validation;
