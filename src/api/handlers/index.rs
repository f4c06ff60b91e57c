//! Handler for the root endpoint.

/// Plain-text greeting.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> &'static str {
    "Привет!"
}
