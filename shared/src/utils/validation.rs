//! Input validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Usernames: letters, digits, and a few separators, 3 to 32 characters
static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.\-]{3,32}$").unwrap()
});

/// Check if a username is acceptable for account creation
pub fn is_valid_username(username: &str) -> bool {
    USERNAME_REGEX.is_match(username)
}

/// Check if a string carries any non-whitespace content
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}
