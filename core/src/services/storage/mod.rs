//! Image storage port for the external object-storage provider
//!
//! The catalog never talks to the provider directly; it goes through the
//! [`ImageStore`] trait so the domain stays free of HTTP concerns and tests
//! can swap in a recording mock.

pub mod mock;
mod traits;

pub use mock::MockImageStore;
pub use traits::{ImageStore, UploadOptions};
