//! Advertisement lifecycle: create, read, partial update, delete.

use serde_json::{Map, Value};

use crate::application::services::user_service::get_user;
use crate::domain::entities::{
    Advertisement, AdvertisementField, AdvertisementPatch, NewAdvertisement,
};
use crate::domain::session::UnitOfWork;
use crate::error::AppError;
use crate::utils::json_value::{required, to_integer, to_text, to_timestamp};

/// Fetches the advertisement with the given id.
///
/// # Errors
///
/// Returns [`AppError::AdvertisementNotFound`] (served as 404) if absent.
/// Returns [`AppError::Database`] on storage errors.
pub async fn get_advertisement(
    session: &mut dyn UnitOfWork,
    id: i32,
) -> Result<Advertisement, AppError> {
    session
        .get_advertisement(id)
        .await?
        .ok_or(AppError::AdvertisementNotFound)
}

/// Creates an advertisement for an existing owner and commits it.
///
/// `title`, `description` and `owner_id` must all be present and non-empty.
/// The owner is resolved before anything is written.
///
/// # Errors
///
/// Returns [`AppError::MissingField`] if a required field is absent or empty.
/// Returns [`AppError::UserNotFound`] if `owner_id` does not resolve.
/// Returns [`AppError::InvalidValue`] if a value cannot be stored in its column.
pub async fn create_advertisement(
    session: &mut dyn UnitOfWork,
    body: &Map<String, Value>,
) -> Result<Advertisement, AppError> {
    let (Some(title), Some(description), Some(owner_id)) = (
        required(body, "title"),
        required(body, "description"),
        required(body, "owner_id"),
    ) else {
        return Err(AppError::MissingField);
    };

    let owner = get_user(session, to_integer("owner_id", owner_id)?).await?;

    let new_advertisement = NewAdvertisement {
        title: to_text("title", title)?,
        description: to_text("description", description)?,
        owner_id: owner.id,
        created_at: None,
    };

    let advertisement = session.add_advertisement(new_advertisement).await?;
    session.commit().await?;

    tracing::info!(
        advertisement_id = advertisement.id,
        owner_id = advertisement.owner_id,
        "Advertisement created"
    );
    Ok(advertisement)
}

/// Builds a patch from every body key that names an advertisement column.
///
/// Keys that match no column are ignored.
///
/// # Errors
///
/// Returns [`AppError::InvalidValue`] if a value cannot be stored in its column.
pub fn patch_from_body(body: &Map<String, Value>) -> Result<AdvertisementPatch, AppError> {
    let mut patch = AdvertisementPatch::default();

    for (key, value) in body {
        let Some(field) = AdvertisementField::from_name(key) else {
            tracing::debug!(field = %key, "Ignoring unknown advertisement field");
            continue;
        };

        match field {
            AdvertisementField::Id => patch.id = Some(to_integer(key, value)?),
            AdvertisementField::Title => patch.title = Some(to_text(key, value)?),
            AdvertisementField::Description => patch.description = Some(to_text(key, value)?),
            AdvertisementField::CreatedAt => patch.created_at = Some(to_timestamp(key, value)?),
            AdvertisementField::OwnerId => patch.owner_id = Some(to_integer(key, value)?),
        }
    }

    Ok(patch)
}

/// Overwrites the addressed columns of an advertisement and commits.
///
/// No ownership check is made; pointing `owner_id` at a missing user fails
/// only when the store enforces its foreign key.
///
/// # Errors
///
/// Returns [`AppError::AdvertisementNotFound`] if the advertisement is absent.
/// Returns [`AppError::InvalidValue`] or [`AppError::Database`] if the change
/// cannot be stored.
pub async fn update_advertisement(
    session: &mut dyn UnitOfWork,
    id: i32,
    body: &Map<String, Value>,
) -> Result<Advertisement, AppError> {
    let mut advertisement = get_advertisement(session, id).await?;

    let patch = patch_from_body(body)?;
    if patch.is_empty() {
        session.commit().await?;
        return Ok(advertisement);
    }

    advertisement.apply(patch);
    let advertisement = session.save_advertisement(id, &advertisement).await?;
    session.commit().await?;

    tracing::info!(advertisement_id = advertisement.id, "Advertisement updated");
    Ok(advertisement)
}

/// Deletes an advertisement and commits.
///
/// A missing advertisement is not reported as 404: the lookup failure is
/// escalated with [`AppError::uncaught`] and served as a server error.
///
/// # Errors
///
/// Returns [`AppError::Uncaught`] if the advertisement is absent.
/// Returns [`AppError::Database`] on storage errors.
pub async fn delete_advertisement(session: &mut dyn UnitOfWork, id: i32) -> Result<(), AppError> {
    let advertisement = get_advertisement(session, id)
        .await
        .map_err(AppError::uncaught)?;

    session.delete_advertisement(advertisement.id).await?;
    session.commit().await?;

    tracing::info!(advertisement_id = id, "Advertisement deleted");
    Ok(())
}
