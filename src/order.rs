//! Record ordering.
//!
//! Each [`PlayerOrder`] maps to a key-extraction function through a fixed
//! table. Sorting is ascending and stable; there is no secondary key.

use crate::player::PlayerRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Attribute a listing is sorted by.
///
/// # Examples
///
/// ```rust
/// use zzroster::PlayerOrder;
///
/// assert_eq!(PlayerOrder::parse_or_default("LEVEL"), PlayerOrder::Level);
/// assert_eq!(PlayerOrder::parse_or_default("SHOE_SIZE"), PlayerOrder::Id);
/// assert_eq!(PlayerOrder::Birthday.field_name(), "birthday");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerOrder {
    #[default]
    Id,
    Name,
    Experience,
    Birthday,
    Level,
}

/// Comparable projection of one record attribute.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey<'a> {
    Id(u64),
    Number(i64),
    Text(&'a str),
    Time(DateTime<Utc>),
}

type KeyFn = for<'a> fn(&'a PlayerRecord) -> SortKey<'a>;

fn by_id(r: &PlayerRecord) -> SortKey<'_> {
    SortKey::Id(r.id.get())
}

fn by_name(r: &PlayerRecord) -> SortKey<'_> {
    SortKey::Text(&r.name)
}

fn by_experience(r: &PlayerRecord) -> SortKey<'_> {
    SortKey::Number(r.experience)
}

fn by_birthday(r: &PlayerRecord) -> SortKey<'_> {
    SortKey::Time(r.birthday)
}

fn by_level(r: &PlayerRecord) -> SortKey<'_> {
    SortKey::Number(i64::from(r.level))
}

const KEY_TABLE: [(PlayerOrder, KeyFn); 5] = [
    (PlayerOrder::Id, by_id),
    (PlayerOrder::Name, by_name),
    (PlayerOrder::Experience, by_experience),
    (PlayerOrder::Birthday, by_birthday),
    (PlayerOrder::Level, by_level),
];

impl PlayerOrder {
    /// All orders, in table order.
    pub const ALL: [PlayerOrder; 5] = [
        PlayerOrder::Id,
        PlayerOrder::Name,
        PlayerOrder::Experience,
        PlayerOrder::Birthday,
        PlayerOrder::Level,
    ];

    /// Parse the wire name (`"ID"`, `"NAME"`, ...), if recognized.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ID" => Some(PlayerOrder::Id),
            "NAME" => Some(PlayerOrder::Name),
            "EXPERIENCE" => Some(PlayerOrder::Experience),
            "BIRTHDAY" => Some(PlayerOrder::Birthday),
            "LEVEL" => Some(PlayerOrder::Level),
            _ => None,
        }
    }

    /// Parse the wire name, falling back to [`PlayerOrder::Id`].
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    /// The record attribute this order sorts by.
    pub fn field_name(self) -> &'static str {
        match self {
            PlayerOrder::Id => "id",
            PlayerOrder::Name => "name",
            PlayerOrder::Experience => "experience",
            PlayerOrder::Birthday => "birthday",
            PlayerOrder::Level => "level",
        }
    }

    fn key_fn(self) -> KeyFn {
        KEY_TABLE
            .iter()
            .find(|(order, _)| *order == self)
            .map_or(KEY_TABLE[0].1, |(_, key)| *key)
    }

    /// Compare two records by this order's key.
    pub fn compare(self, a: &PlayerRecord, b: &PlayerRecord) -> Ordering {
        let key = self.key_fn();
        key(a).cmp(&key(b))
    }
}

/// Sort ascending by `order` (default [`PlayerOrder::Id`]).
///
/// The sort is stable: records with equal keys keep their input order.
///
/// # Examples
///
/// ```rust
/// use zzroster::order;
///
/// let sorted = order::sort(Vec::new(), None);
/// assert!(sorted.is_empty());
/// ```
pub fn sort(mut records: Vec<PlayerRecord>, order: Option<PlayerOrder>) -> Vec<PlayerRecord> {
    let order = order.unwrap_or_default();
    records.sort_by(|a, b| order.compare(a, b));
    records
}
