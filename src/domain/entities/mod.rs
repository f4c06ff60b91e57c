//! Core domain entities representing the classifieds data model.
//!
//! # Entity Types
//!
//! - [`User`] - A registered user
//! - [`Advertisement`] - An advertisement owned by a user
//!
//! Creation uses separate `New*` structs because ids are generated by the
//! store; [`AdvertisementPatch`] carries partial updates.

pub mod advertisement;
pub mod user;

pub use advertisement::{
    Advertisement, AdvertisementField, AdvertisementPatch, NewAdvertisement, default_created_at,
};
pub use user::{NewUser, User};
