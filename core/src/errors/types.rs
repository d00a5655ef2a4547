//! Error type definitions for authentication, tokens, image storage, and
//! input validation.
//!
//! The `#[error(...)]` strings here describe the failure for logs and
//! debugging; the messages sent over the wire are chosen by the
//! presentation layer when it maps these variants to responses.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Username already exists")]
    UsernameTaken,

    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Missing authorization token")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Image storage provider errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StorageError {
    #[error("Image upload failed: {message}")]
    UploadFailed { message: String },

    #[error("Image delete failed: {message}")]
    DeleteFailed { message: String },
}

/// Input validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },
}
