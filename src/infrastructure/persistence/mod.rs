//! PostgreSQL persistence.
//!
//! - [`PgSessionFactory`] / [`PgSession`] - per-request unit-of-work
//! - [`bootstrap`] - pool construction and create-if-absent schema setup

pub mod bootstrap;
pub mod pg_session;

pub use pg_session::{PgSession, PgSessionFactory};
