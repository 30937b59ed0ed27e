//! Request parameter parsing for transport layers.
//!
//! These helpers turn raw path and query strings into the typed inputs the
//! service consumes. Anything that does not parse is reported as
//! [`RosterError::MalformedInput`] before reaching the core.

use crate::error::RosterError;
use crate::order::PlayerOrder;
use crate::page::PageRequest;
use crate::player::PlayerId;
use crate::query::PlayerCriteria;
use chrono::{DateTime, TimeZone, Utc};
use std::str::FromStr;

/// Parse a path identifier: a positive integer without a decimal point.
///
/// # Examples
///
/// ```rust
/// use zzroster::params::parse_player_id;
///
/// assert_eq!(parse_player_id("17").unwrap().get(), 17);
/// assert!(parse_player_id("0").is_err());
/// assert!(parse_player_id("-3").is_err());
/// assert!(parse_player_id("1.5").is_err());
/// assert!(parse_player_id("abc").is_err());
/// ```
pub fn parse_player_id(raw: &str) -> Result<PlayerId, RosterError> {
    if raw.contains('.') {
        return Err(RosterError::malformed(format!("player id has a decimal point: {raw}")));
    }
    raw.parse::<u64>()
        .ok()
        .and_then(PlayerId::new)
        .ok_or_else(|| RosterError::malformed(format!("invalid player id: {raw}")))
}

/// Everything a listing request can ask for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub criteria: PlayerCriteria,
    pub order: Option<PlayerOrder>,
    pub page: PageRequest,
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T, RosterError> {
    raw.parse()
        .map_err(|_| RosterError::malformed(format!("invalid value for {key}: {raw}")))
}

fn parse_millis(key: &str, raw: &str) -> Result<DateTime<Utc>, RosterError> {
    let millis: i64 = parse_value(key, raw)?;
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| RosterError::malformed(format!("timestamp out of range for {key}: {raw}")))
}

/// Parse a boolean flag the way form parameters are usually written:
/// `true`/`on`/`yes`/`1` or `false`/`off`/`no`/`0`, ignoring case.
fn parse_flag(key: &str, raw: &str) -> Result<bool, RosterError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(RosterError::malformed(format!("invalid value for {key}: {raw}"))),
    }
}

impl ListQuery {
    /// Build a query from `(key, value)` pairs using the camelCase names
    /// `name`, `title`, `race`, `profession`, `after`, `before`, `banned`,
    /// `minExperience`, `maxExperience`, `minLevel`, `maxLevel`, `order`,
    /// `pageNumber` and `pageSize`.
    ///
    /// Unknown keys are ignored. An unrecognized `order` falls back to
    /// sorting by id. Negative page numbers or sizes are rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zzroster::{ListQuery, PlayerOrder, Race};
    ///
    /// let query = ListQuery::from_params([
    ///     ("race", "ELF"),
    ///     ("minLevel", "2"),
    ///     ("order", "NAME"),
    ///     ("pageSize", "5"),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(query.criteria.race, Some(Race::Elf));
    /// assert_eq!(query.criteria.min_level, Some(2));
    /// assert_eq!(query.order, Some(PlayerOrder::Name));
    /// assert_eq!(query.page.page_size, Some(5));
    ///
    /// assert!(ListQuery::from_params([("pageNumber", "-1")]).is_err());
    /// ```
    pub fn from_params<I, K, V>(params: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = ListQuery::default();
        for (key, value) in params {
            let (key, raw) = (key.as_ref(), value.as_ref());
            let criteria = &mut query.criteria;
            match key {
                "name" => criteria.name = Some(raw.to_string()),
                "title" => criteria.title = Some(raw.to_string()),
                "race" => criteria.race = Some(raw.parse()?),
                "profession" => criteria.profession = Some(raw.parse()?),
                "after" => criteria.after = Some(parse_millis(key, raw)?),
                "before" => criteria.before = Some(parse_millis(key, raw)?),
                "banned" => criteria.banned = Some(parse_flag(key, raw)?),
                "minExperience" => criteria.min_experience = Some(parse_value(key, raw)?),
                "maxExperience" => criteria.max_experience = Some(parse_value(key, raw)?),
                "minLevel" => criteria.min_level = Some(parse_value(key, raw)?),
                "maxLevel" => criteria.max_level = Some(parse_value(key, raw)?),
                "order" => query.order = Some(PlayerOrder::parse_or_default(raw)),
                "pageNumber" => query.page.page_number = Some(parse_value(key, raw)?),
                "pageSize" => query.page.page_size = Some(parse_value(key, raw)?),
                _ => {}
            }
        }
        Ok(query)
    }
}
