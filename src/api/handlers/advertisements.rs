//! Handlers for advertisement endpoints (create, read, update, delete).

use axum::{Json, extract::Path, http::StatusCode};
use serde_json::Value;

use crate::api::dto::advertisement::{
    ADVERTISEMENT_CREATED, ADVERTISEMENT_DELETED, AdvertisementItem, AdvertisementView,
    CreateAdvertisementResponse, DeleteAdvertisementResponse,
};
use crate::api::extract::DbSession;
use crate::application::services::advertisement_service;
use crate::error::AppError;
use crate::utils::json_value::into_object;

/// Resolves the `{id}` segment of `/ads/{id}`.
///
/// Only unsigned decimal digits address an advertisement; anything else is
/// answered as an unknown route would be, with 404. A well-formed id that
/// does not fit the key column cannot name a row and yields `Ok(None)`.
fn parse_advertisement_id(raw: &str) -> Result<Option<i32>, AppError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::AdvertisementNotFound);
    }
    Ok(raw.parse().ok())
}

/// Returns the public view of an advertisement (without `owner_id`).
///
/// # Endpoint
///
/// `GET /ads/{id}`
///
/// # Errors
///
/// Returns 404 `{"error": "Объявление не найдено"}` if absent.
pub async fn get_advertisement_handler(
    Path(id): Path<String>,
    mut session: DbSession,
) -> Result<Json<AdvertisementView>, AppError> {
    let Some(id) = parse_advertisement_id(&id)? else {
        return Err(AppError::AdvertisementNotFound);
    };

    let advertisement = advertisement_service::get_advertisement(&mut *session, id).await?;
    Ok(Json(advertisement.into()))
}

/// Creates an advertisement for an existing user.
///
/// # Endpoint
///
/// `POST /ads/`
///
/// # Request Body
///
/// ```json
/// { "title": "Bike", "description": "Barely used", "owner_id": 1 }
/// ```
///
/// # Errors
///
/// Returns 400 `{"error": "Пропущенное поле"}` if a field is absent or empty.
/// Returns 400 `{"error": "Пользователь не найден"}` if the owner does not exist.
pub async fn create_advertisement_handler(
    mut session: DbSession,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<CreateAdvertisementResponse>), AppError> {
    let body = into_object(body)?;
    let advertisement = advertisement_service::create_advertisement(&mut *session, &body).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateAdvertisementResponse {
            message: ADVERTISEMENT_CREATED,
            ad: advertisement.into(),
        }),
    ))
}

/// Partially updates an advertisement.
///
/// # Endpoint
///
/// `PATCH /ads/{id}`
///
/// Every key naming a column (`id`, `title`, `description`, `created_at`,
/// `owner_id`) overwrites it. Other keys are ignored.
///
/// # Errors
///
/// Returns 404 `{"error": "Объявление не найдено"}` if absent.
pub async fn update_advertisement_handler(
    Path(id): Path<String>,
    mut session: DbSession,
    Json(body): Json<Value>,
) -> Result<Json<AdvertisementItem>, AppError> {
    let Some(id) = parse_advertisement_id(&id)? else {
        return Err(AppError::AdvertisementNotFound);
    };

    let body = into_object(body)?;
    let advertisement =
        advertisement_service::update_advertisement(&mut *session, id, &body).await?;

    Ok(Json(advertisement.into()))
}

/// Deletes an advertisement.
///
/// # Endpoint
///
/// `DELETE /ads/{id}`
///
/// # Errors
///
/// A missing advertisement is answered with 500, not 404. A non-numeric id
/// is still 404.
pub async fn delete_advertisement_handler(
    Path(id): Path<String>,
    mut session: DbSession,
) -> Result<Json<DeleteAdvertisementResponse>, AppError> {
    let Some(id) = parse_advertisement_id(&id)? else {
        return Err(AppError::AdvertisementNotFound.uncaught());
    };

    advertisement_service::delete_advertisement(&mut *session, id).await?;

    Ok(Json(DeleteAdvertisementResponse {
        status: ADVERTISEMENT_DELETED,
    }))
}
