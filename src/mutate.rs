//! Partial updates of existing records.
//!
//! A [`PlayerPatch`] carries only the fields a client wants to change.
//! Every present field is validated before anything is applied, and the
//! result is a new record; the existing one is never touched.

use crate::error::{Field, ValidationError};
use crate::level::Progression;
use crate::player::{PlayerRecord, Profession, Race};
use crate::validate::{self, ensure, BirthdayWindow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sparse set of field values to merge into a record.
///
/// Derived fields and the id are not patchable; values sent for them are
/// ignored during deserialization.
///
/// # Examples
///
/// ```rust
/// use zzroster::PlayerPatch;
///
/// let patch: PlayerPatch = serde_json::from_str(r#"{"title":"Steward","level":40}"#).unwrap();
/// assert_eq!(patch.title.as_deref(), Some("Steward"));
/// assert!(patch.experience.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerPatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub birthday: Option<DateTime<Utc>>,
    pub banned: Option<bool>,
    pub experience: Option<i64>,
}

impl PlayerPatch {
    /// True when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check every present field, stopping at the first invalid one.
    ///
    /// Race and profession are accepted as-is.
    pub fn validate(&self, window: &BirthdayWindow) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            ensure(validate::is_name_valid(name), Field::Name)?;
        }
        if let Some(title) = &self.title {
            ensure(validate::is_title_valid(title), Field::Title)?;
        }
        if let Some(birthday) = self.birthday {
            ensure(window.contains(birthday), Field::Birthday)?;
        }
        if let Some(experience) = self.experience {
            ensure(validate::is_experience_valid(experience), Field::Experience)?;
        }
        Ok(())
    }
}

/// Merge `patch` into `existing` using the UTC birthday window.
///
/// See [`apply_partial_update_in`].
pub fn apply_partial_update(
    existing: &PlayerRecord,
    patch: &PlayerPatch,
) -> Result<PlayerRecord, ValidationError> {
    apply_partial_update_in(existing, patch, &BirthdayWindow::utc())
}

/// Merge `patch` into `existing`, returning the updated record.
///
/// Fields absent from the patch keep their current values. If any present
/// field is invalid the whole update is rejected. When experience is
/// patched, level and experience-to-next-level are derived again.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use zzroster::mutate::apply_partial_update;
/// use zzroster::{BirthdayWindow, NewPlayer, PlayerDraft, PlayerId, PlayerPatch, Profession, Race};
///
/// let record = PlayerDraft::from_new(
///     NewPlayer {
///         name: Some("Samwise".into()),
///         title: Some("Gardener".into()),
///         race: Some(Race::Hobbit),
///         profession: Some(Profession::Rogue),
///         birthday: Some(Utc.with_ymd_and_hms(2012, 4, 6, 0, 0, 0).unwrap()),
///         banned: None,
///         experience: Some(50),
///     },
///     &BirthdayWindow::utc(),
/// )
/// .unwrap()
/// .into_record(PlayerId::new(1).unwrap());
///
/// let patch = PlayerPatch { experience: Some(300), ..PlayerPatch::default() };
/// let updated = apply_partial_update(&record, &patch).unwrap();
/// assert_eq!(updated.level, 2);
/// assert_eq!(updated.name, "Samwise");
///
/// let bad = PlayerPatch { experience: Some(-5), ..PlayerPatch::default() };
/// assert!(apply_partial_update(&record, &bad).is_err());
/// ```
pub fn apply_partial_update_in(
    existing: &PlayerRecord,
    patch: &PlayerPatch,
    window: &BirthdayWindow,
) -> Result<PlayerRecord, ValidationError> {
    patch.validate(window)?;

    let mut updated = existing.clone();
    if let Some(name) = &patch.name {
        updated.name = name.clone();
    }
    if let Some(title) = &patch.title {
        updated.title = title.clone();
    }
    if let Some(race) = patch.race {
        updated.race = race;
    }
    if let Some(profession) = patch.profession {
        updated.profession = profession;
    }
    if let Some(birthday) = patch.birthday {
        updated.birthday = birthday;
    }
    if let Some(banned) = patch.banned {
        updated.banned = banned;
    }
    if let Some(experience) = patch.experience {
        let progression = Progression::from_experience(experience);
        updated.experience = experience;
        updated.level = progression.level;
        updated.until_next_level = progression.until_next_level;
    }
    Ok(updated)
}
