//! API route configuration.

use crate::api::handlers::{
    create_advertisement_handler, create_user_handler, delete_advertisement_handler,
    get_advertisement_handler, health_handler, index_handler, update_advertisement_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET    /`             - Plain-text greeting
/// - `GET    /health`       - Database health check
/// - `POST   /create_user`  - Create a user
/// - `POST   /ads`          - Create an advertisement (`/ads/` after path normalization)
/// - `GET    /ads/{id}`     - Read an advertisement
/// - `PATCH  /ads/{id}`     - Partially update an advertisement
/// - `DELETE /ads/{id}`     - Delete an advertisement
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/create_user", post(create_user_handler))
        .route("/ads", post(create_advertisement_handler))
        .route(
            "/ads/{id}",
            get(get_advertisement_handler)
                .patch(update_advertisement_handler)
                .delete(delete_advertisement_handler),
        )
}
