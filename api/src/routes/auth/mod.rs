//! Authentication route handlers
//!
//! Endpoints for account registration and credential login.

pub mod login;
pub mod signup;

pub use login::login;
pub use signup::signup;
