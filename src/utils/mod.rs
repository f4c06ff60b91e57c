//! Utility functions shared by the request handlers.
//!
//! - [`json_value`] - Presence checks and loose coercion of JSON body values

pub mod json_value;
