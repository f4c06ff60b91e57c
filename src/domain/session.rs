//! Unit-of-work contract between the HTTP layer and the store.
//!
//! A [`SessionFactory`] hands out one independent [`UnitOfWork`] per request.
//! Reads and writes made through a session are staged in that session only;
//! [`UnitOfWork::commit`] is the single point at which they become durable and
//! visible to other sessions. Dropping a session discards anything not yet
//! committed and releases its connection.
//!
//! # Implementations
//!
//! - [`crate::infrastructure::persistence::PgSessionFactory`] - PostgreSQL
//! - `MockUnitOfWork` - generated by `mockall` under `cfg(test)`

use crate::domain::entities::{Advertisement, NewAdvertisement, NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// A scoped handle to the store bound to a single request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UnitOfWork: Send {
    /// Fetches a user by primary key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn get_user(&mut self, id: i32) -> Result<Option<User>, AppError>;

    /// Fetches an advertisement by primary key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn get_advertisement(&mut self, id: i32) -> Result<Option<Advertisement>, AppError>;

    /// Inserts a user and returns it with its generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if the username is already taken or the
    /// store fails.
    async fn add_user(&mut self, new_user: NewUser) -> Result<User, AppError>;

    /// Inserts an advertisement and returns it with its generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on constraint violations or storage errors.
    async fn add_advertisement(
        &mut self,
        new_advertisement: NewAdvertisement,
    ) -> Result<Advertisement, AppError>;

    /// Writes every column of `advertisement` over the row currently keyed by
    /// `original_id`. The primary key itself may be part of the change.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on constraint violations or storage errors.
    async fn save_advertisement(
        &mut self,
        original_id: i32,
        advertisement: &Advertisement,
    ) -> Result<Advertisement, AppError>;

    /// Removes an advertisement by primary key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn delete_advertisement(&mut self, id: i32) -> Result<(), AppError>;

    /// Makes every staged change durable.
    ///
    /// The session stays usable afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if the store rejects the commit.
    async fn commit(&mut self) -> Result<(), AppError>;

    /// Round-trips a trivial statement to prove the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if the store cannot be reached.
    async fn ping(&mut self) -> Result<(), AppError>;
}

/// Opens independent sessions against the configured store.
pub trait SessionFactory: Send + Sync {
    fn open_session(&self) -> Box<dyn UnitOfWork>;
}
