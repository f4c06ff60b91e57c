//! Domain layer containing business entities and the storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`session`] - Unit-of-work traits implemented by the infrastructure layer
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Request handling logic lives in [`crate::application::services`].

pub mod entities;
pub mod session;
