//! # Classifieds
//!
//! A minimal classifieds backend built with Axum and PostgreSQL: users post,
//! read, update and delete advertisements.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and the unit-of-work contract
//! - **Application Layer** ([`application`]) - Validation and entity mutation per request
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL sessions and schema bootstrap
//! - **API Layer** ([`api`]) - HTTP handlers, response DTOs, and middleware
//!
//! Every request that touches storage gets its own session
//! ([`api::extract::DbSession`]), released when the request ends.
//!
//! ## Quick Start
//!
//! ```bash
//! export POSTGRES_USER=app POSTGRES_PASSWORD=secret POSTGRES_DB=classifieds
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::entities::{Advertisement, NewAdvertisement, NewUser, User};
    pub use crate::domain::session::{SessionFactory, UnitOfWork};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
