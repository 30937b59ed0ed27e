//! Player record types.
//!
//! [`PlayerRecord`] is the persisted entity. [`NewPlayer`] is what a client
//! sends on creation; it becomes a [`PlayerDraft`] once validated and its
//! derived fields are computed, and a record once storage assigns an id.

use crate::error::{Field, RosterError, ValidationError};
use crate::level::Progression;
use crate::validate::{self, required, BirthdayWindow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Unique, positive player identifier assigned by storage.
///
/// # Examples
///
/// ```rust
/// use zzroster::PlayerId;
///
/// let id = PlayerId::new(42).unwrap();
/// assert_eq!(id.get(), 42);
/// assert!(PlayerId::new(0).is_none());
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PlayerId(u64);

impl PlayerId {
    /// Create an id, rejecting zero.
    pub fn new(raw: u64) -> Option<Self> {
        (raw > 0).then_some(Self(raw))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl Serialize for PlayerId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PlayerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = u64::deserialize(deserializer)?;
        PlayerId::new(raw).ok_or_else(|| serde::de::Error::custom("player id must be positive"))
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Character race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Race {
    Human,
    Dwarf,
    Elf,
    Giant,
    Orc,
    Troll,
    Hobbit,
}

impl FromStr for Race {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HUMAN" => Ok(Race::Human),
            "DWARF" => Ok(Race::Dwarf),
            "ELF" => Ok(Race::Elf),
            "GIANT" => Ok(Race::Giant),
            "ORC" => Ok(Race::Orc),
            "TROLL" => Ok(Race::Troll),
            "HOBBIT" => Ok(Race::Hobbit),
            other => Err(RosterError::malformed(format!("unknown race: {other}"))),
        }
    }
}

/// Character profession.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Profession {
    Warrior,
    Rogue,
    Sorcerer,
    Cleric,
    Paladin,
    Nazgul,
    Warlock,
    Druid,
}

impl FromStr for Profession {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WARRIOR" => Ok(Profession::Warrior),
            "ROGUE" => Ok(Profession::Rogue),
            "SORCERER" => Ok(Profession::Sorcerer),
            "CLERIC" => Ok(Profession::Cleric),
            "PALADIN" => Ok(Profession::Paladin),
            "NAZGUL" => Ok(Profession::Nazgul),
            "WARLOCK" => Ok(Profession::Warlock),
            "DRUID" => Ok(Profession::Druid),
            other => Err(RosterError::malformed(format!("unknown profession: {other}"))),
        }
    }
}

/// A persisted player.
///
/// `level` and `until_next_level` are always derived from `experience`;
/// the only way to change them is through
/// [`apply_partial_update`](crate::mutate::apply_partial_update).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    /// Serialized as epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub birthday: DateTime<Utc>,
    pub banned: bool,
    pub experience: i64,
    pub level: u32,
    pub until_next_level: i64,
}

/// Creation request body. Every field may be omitted by the client.
///
/// Derived fields and the id are not part of this type, so any values a
/// client sends for them are ignored during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewPlayer {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub birthday: Option<DateTime<Utc>>,
    pub banned: Option<bool>,
    pub experience: Option<i64>,
}

/// A validated player with derived fields, waiting for storage to assign an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerDraft {
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    pub birthday: DateTime<Utc>,
    pub banned: bool,
    pub experience: i64,
    pub level: u32,
    pub until_next_level: i64,
}

impl PlayerDraft {
    /// Validate a creation request and derive its level fields.
    ///
    /// `banned` defaults to `false`. Name, title, birthday and experience
    /// are checked first with [`validate::check_record`], then race and
    /// profession must be present. The first failure aborts construction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use zzroster::{BirthdayWindow, NewPlayer, PlayerDraft, Profession, Race};
    ///
    /// let new = NewPlayer {
    ///     name: Some("Aragorn".into()),
    ///     title: Some("King".into()),
    ///     race: Some(Race::Human),
    ///     profession: Some(Profession::Warrior),
    ///     birthday: Some(Utc.with_ymd_and_hms(2010, 3, 1, 0, 0, 0).unwrap()),
    ///     banned: None,
    ///     experience: Some(0),
    /// };
    ///
    /// let draft = PlayerDraft::from_new(new, &BirthdayWindow::utc()).unwrap();
    /// assert!(!draft.banned);
    /// assert_eq!(draft.level, 0);
    /// assert_eq!(draft.until_next_level, 100);
    /// ```
    pub fn from_new(new: NewPlayer, window: &BirthdayWindow) -> Result<Self, ValidationError> {
        validate::check_record(&new, window)?;
        let name = required(new.name, Field::Name)?;
        let title = required(new.title, Field::Title)?;
        let birthday = required(new.birthday, Field::Birthday)?;
        let experience = required(new.experience, Field::Experience)?;
        let race = required(new.race, Field::Race)?;
        let profession = required(new.profession, Field::Profession)?;

        let progression = Progression::from_experience(experience);
        Ok(Self {
            name,
            title,
            race,
            profession,
            birthday,
            banned: new.banned.unwrap_or(false),
            experience,
            level: progression.level,
            until_next_level: progression.until_next_level,
        })
    }

    /// Attach the storage-assigned id.
    pub fn into_record(self, id: PlayerId) -> PlayerRecord {
        PlayerRecord {
            id,
            name: self.name,
            title: self.title,
            race: self.race,
            profession: self.profession,
            birthday: self.birthday,
            banned: self.banned,
            experience: self.experience,
            level: self.level,
            until_next_level: self.until_next_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn aragorn() -> NewPlayer {
        NewPlayer {
            name: Some("Aragorn".into()),
            title: Some("King".into()),
            race: Some(Race::Human),
            profession: Some(Profession::Warrior),
            birthday: Some(Utc.with_ymd_and_hms(2010, 6, 15, 12, 0, 0).unwrap()),
            banned: None,
            experience: Some(0),
        }
    }

    #[test]
    fn test_player_id_rejects_zero() {
        assert!(PlayerId::new(0).is_none());
        assert_eq!(PlayerId::new(3).map(PlayerId::get), Some(3));
    }

    #[test]
    fn test_player_id_deserialize_rejects_zero() {
        assert!(serde_json::from_str::<PlayerId>("0").is_err());
        assert_eq!(
            serde_json::from_str::<PlayerId>("12").unwrap(),
            PlayerId::new(12).unwrap()
        );
    }

    #[test]
    fn test_race_and_profession_parse() {
        assert_eq!("ELF".parse::<Race>().unwrap(), Race::Elf);
        assert_eq!("NAZGUL".parse::<Profession>().unwrap(), Profession::Nazgul);
        assert!("elf".parse::<Race>().is_err());
        assert!("BARD".parse::<Profession>().is_err());
    }

    #[test]
    fn test_creation_defaults_banned_and_derives_level() {
        let draft = PlayerDraft::from_new(aragorn(), &BirthdayWindow::utc()).unwrap();
        assert!(!draft.banned);
        assert_eq!(draft.level, 0);
        assert_eq!(draft.until_next_level, 100);
    }

    #[test]
    fn test_creation_keeps_explicit_banned() {
        let mut new = aragorn();
        new.banned = Some(true);
        let draft = PlayerDraft::from_new(new, &BirthdayWindow::utc()).unwrap();
        assert!(draft.banned);
    }

    #[test]
    fn test_creation_reports_first_failing_field() {
        let mut new = aragorn();
        new.name = Some("A much too long name".into());
        new.experience = Some(-1);
        let err = PlayerDraft::from_new(new, &BirthdayWindow::utc()).unwrap_err();
        assert_eq!(err, ValidationError::OutOfRange(Field::Name));
    }

    #[test]
    fn test_creation_agrees_with_record_validity() {
        let window = BirthdayWindow::utc();
        let mut old = aragorn();
        old.birthday = Some(Utc.with_ymd_and_hms(3001, 1, 1, 0, 0, 0).unwrap());
        assert!(!validate::is_record_valid(&old, &window));
        assert_eq!(
            PlayerDraft::from_new(old, &window).unwrap_err(),
            ValidationError::OutOfRange(Field::Birthday)
        );

        assert!(validate::is_record_valid(&aragorn(), &window));
        assert!(PlayerDraft::from_new(aragorn(), &window).is_ok());
    }

    #[test]
    fn test_creation_requires_race() {
        let mut new = aragorn();
        new.race = None;
        let err = PlayerDraft::from_new(new, &BirthdayWindow::utc()).unwrap_err();
        assert_eq!(err, ValidationError::Missing(Field::Race));
    }

    #[test]
    fn test_new_player_ignores_derived_fields_on_wire() {
        let json = r#"{"name":"Frodo","title":"Ringbearer","race":"HOBBIT",
            "profession":"ROGUE","birthday":1262304000000,"experience":1000,
            "level":99,"untilNextLevel":5,"id":77}"#;
        let new: NewPlayer = serde_json::from_str(json).unwrap();
        let draft = PlayerDraft::from_new(new, &BirthdayWindow::utc()).unwrap();
        assert_eq!(draft.level, 4);
        assert_eq!(draft.until_next_level, 500);
    }

    #[test]
    fn test_record_serializes_camel_case_millis() {
        let record = PlayerDraft::from_new(aragorn(), &BirthdayWindow::utc())
            .unwrap()
            .into_record(PlayerId::new(1).unwrap());
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["untilNextLevel"], 100);
        assert_eq!(value["race"], "HUMAN");
        assert_eq!(value["birthday"], record.birthday.timestamp_millis());
    }
}
