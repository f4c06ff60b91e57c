//! Advertisement entity and its partial-update model.

use chrono::{Local, NaiveDateTime, SubsecRound};

/// An advertisement posted by a user.
///
/// `owner_id` references [`super::User::id`]. `created_at` is a wall-clock
/// timestamp without time zone, stored with microsecond precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advertisement {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub owner_id: i32,
}

impl Advertisement {
    /// Creates a new Advertisement instance.
    pub fn new(
        id: i32,
        title: String,
        description: String,
        created_at: NaiveDateTime,
        owner_id: i32,
    ) -> Self {
        Self {
            id,
            title,
            description,
            created_at,
            owner_id,
        }
    }

    /// Overwrites every column present in `patch`, leaving the rest untouched.
    ///
    /// No ownership or referential checks happen here; a dangling `owner_id`
    /// is only rejected by the store when the change is written.
    pub fn apply(&mut self, patch: AdvertisementPatch) {
        if let Some(id) = patch.id {
            self.id = id;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(created_at) = patch.created_at {
            self.created_at = created_at;
        }
        if let Some(owner_id) = patch.owner_id {
            self.owner_id = owner_id;
        }
    }
}

/// Input data for creating a new advertisement.
///
/// When `created_at` is `None` the store stamps the row with
/// [`default_created_at`].
#[derive(Debug, Clone)]
pub struct NewAdvertisement {
    pub title: String,
    pub description: String,
    pub owner_id: i32,
    pub created_at: Option<NaiveDateTime>,
}

/// Columns of the `advertisements` table that a partial update may address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdvertisementField {
    Id,
    Title,
    Description,
    CreatedAt,
    OwnerId,
}

impl AdvertisementField {
    pub const ALL: [AdvertisementField; 5] = [
        AdvertisementField::Id,
        AdvertisementField::Title,
        AdvertisementField::Description,
        AdvertisementField::CreatedAt,
        AdvertisementField::OwnerId,
    ];

    /// Resolves a column by its wire name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            AdvertisementField::Id => "id",
            AdvertisementField::Title => "title",
            AdvertisementField::Description => "description",
            AdvertisementField::CreatedAt => "created_at",
            AdvertisementField::OwnerId => "owner_id",
        }
    }
}

/// Partial update for an existing advertisement.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvertisementPatch {
    pub id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub owner_id: Option<i32>,
}

impl AdvertisementPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Current local time truncated to the precision of a Postgres `TIMESTAMP`.
pub fn default_created_at() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(6)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn sample() -> Advertisement {
        let created_at = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        Advertisement::new(
            1,
            "Велосипед".to_string(),
            "Почти новый".to_string(),
            created_at,
            10,
        )
    }

    #[test]
    fn test_field_from_name() {
        assert_eq!(
            AdvertisementField::from_name("title"),
            Some(AdvertisementField::Title)
        );
        assert_eq!(
            AdvertisementField::from_name("owner_id"),
            Some(AdvertisementField::OwnerId)
        );
        assert_eq!(AdvertisementField::from_name("bogus"), None);
        assert_eq!(AdvertisementField::from_name("Title"), None);
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in AdvertisementField::ALL {
            assert_eq!(AdvertisementField::from_name(field.name()), Some(field));
        }
    }

    #[test]
    fn test_apply_only_touches_present_fields() {
        let mut ad = sample();
        let before = ad.clone();

        ad.apply(AdvertisementPatch {
            title: Some("new".to_string()),
            ..Default::default()
        });

        assert_eq!(ad.title, "new");
        assert_eq!(ad.id, before.id);
        assert_eq!(ad.description, before.description);
        assert_eq!(ad.created_at, before.created_at);
        assert_eq!(ad.owner_id, before.owner_id);
    }

    #[test]
    fn test_apply_can_rewrite_key_and_timestamp() {
        let mut ad = sample();
        let new_created_at = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        ad.apply(AdvertisementPatch {
            id: Some(99),
            created_at: Some(new_created_at),
            owner_id: Some(12345),
            ..Default::default()
        });

        assert_eq!(ad.id, 99);
        assert_eq!(ad.created_at, new_created_at);
        assert_eq!(ad.owner_id, 12345);
    }

    #[test]
    fn test_empty_patch() {
        assert!(AdvertisementPatch::default().is_empty());
        assert!(
            !AdvertisementPatch {
                owner_id: Some(1),
                ..Default::default()
            }
            .is_empty()
        );
    }

    #[test]
    fn test_default_created_at_has_microsecond_precision() {
        let ts = default_created_at();
        assert_eq!(ts.nanosecond() % 1_000, 0);
    }
}
