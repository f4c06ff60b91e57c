//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod advertisements;
pub mod health;
pub mod index;
pub mod users;

pub use advertisements::{
    create_advertisement_handler, delete_advertisement_handler, get_advertisement_handler,
    update_advertisement_handler,
};
pub use health::health_handler;
pub use index::index_handler;
pub use users::create_user_handler;
