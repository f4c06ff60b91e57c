//! Data Transfer Objects for API responses.
//!
//! Request bodies are taken as raw JSON objects and coerced field by field
//! in [`crate::application::services`].

pub mod advertisement;
pub mod health;
pub mod user;
