//! # CarVault API
//!
//! HTTP surface for the CarVault backend: application assembly, route
//! handlers, authentication middleware, and request/response DTOs.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
