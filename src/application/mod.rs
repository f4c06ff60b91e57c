//! Application layer implementing the request contract.
//!
//! Services take the request's [`crate::domain::session::UnitOfWork`],
//! validate the body, perform one persistence operation and commit.
//!
//! # Available Services
//!
//! - [`services::user_service`] - User creation and owner lookup
//! - [`services::advertisement_service`] - Advertisement CRUD

pub mod services;
