//! Handler for user creation.

use axum::{Json, http::StatusCode};
use serde_json::Value;

use crate::api::dto::user::{CreateUserResponse, USER_CREATED};
use crate::api::extract::DbSession;
use crate::application::services::user_service;
use crate::error::AppError;
use crate::utils::json_value::into_object;

/// Creates a user.
///
/// # Endpoint
///
/// `POST /create_user`
///
/// # Request Body
///
/// ```json
/// { "username": "alice" }
/// ```
///
/// # Errors
///
/// Returns 400 `{"error": "Пропущенное поле"}` if `username` is absent or empty.
/// A duplicate username is not translated and surfaces as 500.
pub async fn create_user_handler(
    mut session: DbSession,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<CreateUserResponse>), AppError> {
    let body = into_object(body)?;
    let user = user_service::create_user(&mut *session, &body).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            message: USER_CREATED,
            user: user.into(),
        }),
    ))
}
