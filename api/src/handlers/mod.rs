//! Error mapping between the domain and the HTTP boundary

pub mod error;

pub use error::ApiError;
