//! Infrastructure layer for external integrations.
//!
//! Implements the storage contract defined in [`crate::domain::session`].
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL sessions and schema bootstrap

pub mod persistence;
