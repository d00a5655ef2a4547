//! Storage module - external image hosting
//!
//! Cloudinary-backed implementation of the core `ImageStore` port.

pub mod cloudinary;

pub use cloudinary::{CloudinaryConfig, CloudinaryStore};
