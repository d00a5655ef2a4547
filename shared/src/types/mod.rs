//! Wire-level type definitions
//!
//! - `response` - the two JSON envelopes the HTTP contract uses for
//!   non-entity bodies

pub mod response;

// Re-export commonly used types at module level
pub use response::{Confirmation, ErrorBody};
