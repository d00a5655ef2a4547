use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Desired username: 3-32 chars, letters/digits/underscore/dot/hyphen
    #[validate(length(min = 3, max = 32))]
    pub username: String,

    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// Login carries no format constraints: an unknown or malformed username
/// produces the same credentials error as a wrong password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
