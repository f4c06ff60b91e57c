//! Request-level operations run inside a single unit-of-work.

pub mod advertisement_service;
pub mod user_service;
