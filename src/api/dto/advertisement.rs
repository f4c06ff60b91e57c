//! DTOs for advertisement endpoints.
//!
//! The public read view omits `owner_id`; the create and update responses
//! carry the full row.

use chrono::{NaiveDateTime, Timelike};
use serde::{Serialize, Serializer};

use crate::domain::entities::Advertisement;

pub const ADVERTISEMENT_CREATED: &str = "Объявление создано";
pub const ADVERTISEMENT_DELETED: &str = "Удалено";

/// Writes `created_at` as `YYYY-MM-DDTHH:MM:SS`, with a six-digit fraction
/// only when the microseconds are non-zero.
fn serialize_created_at<S>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let format = if ts.nanosecond() / 1_000 == 0 {
        "%Y-%m-%dT%H:%M:%S"
    } else {
        "%Y-%m-%dT%H:%M:%S%.6f"
    };
    serializer.collect_str(&ts.format(format))
}

/// Representation returned by `GET /ads/{id}`.
#[derive(Debug, Serialize)]
pub struct AdvertisementView {
    pub id: i32,
    pub title: String,
    pub description: String,
    #[serde(serialize_with = "serialize_created_at")]
    pub created_at: NaiveDateTime,
}

impl From<Advertisement> for AdvertisementView {
    fn from(ad: Advertisement) -> Self {
        Self {
            id: ad.id,
            title: ad.title,
            description: ad.description,
            created_at: ad.created_at,
        }
    }
}

/// Full representation returned after create and update.
#[derive(Debug, Serialize)]
pub struct AdvertisementItem {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub owner_id: i32,
    #[serde(serialize_with = "serialize_created_at")]
    pub created_at: NaiveDateTime,
}

impl From<Advertisement> for AdvertisementItem {
    fn from(ad: Advertisement) -> Self {
        Self {
            id: ad.id,
            title: ad.title,
            description: ad.description,
            owner_id: ad.owner_id,
            created_at: ad.created_at,
        }
    }
}

/// Response body for `POST /ads/`.
#[derive(Debug, Serialize)]
pub struct CreateAdvertisementResponse {
    pub message: &'static str,
    pub ad: AdvertisementItem,
}

/// Response body for `DELETE /ads/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteAdvertisementResponse {
    pub status: &'static str,
}
