//! Record filtering.
//!
//! [`PlayerCriteria`] holds one optional constraint per filterable attribute.
//! Absent constraints match everything; present ones are combined with AND.
//! Filtering is stable: matching records keep their relative order.

use crate::player::{PlayerRecord, Profession, Race};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Optional filter constraints for a player listing.
///
/// # Examples
///
/// ```rust
/// use zzroster::{PlayerCriteria, Race};
///
/// let criteria = PlayerCriteria::new()
///     .name("or")
///     .race(Race::Human)
///     .min_level(2);
///
/// assert_eq!(criteria.name.as_deref(), Some("or"));
/// assert!(!criteria.is_empty());
/// assert!(PlayerCriteria::new().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerCriteria {
    /// Case-sensitive substring of the name.
    pub name: Option<String>,
    /// Case-sensitive substring of the title.
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    /// Earliest birthday, inclusive.
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub after: Option<DateTime<Utc>>,
    /// Latest birthday, inclusive.
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub before: Option<DateTime<Utc>>,
    pub banned: Option<bool>,
    pub min_experience: Option<i64>,
    pub max_experience: Option<i64>,
    /// Signed; a negative lower bound matches every level.
    pub min_level: Option<i64>,
    pub max_level: Option<i64>,
}

impl PlayerCriteria {
    /// Criteria with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, fragment: impl Into<String>) -> Self {
        self.name = Some(fragment.into());
        self
    }

    pub fn title(mut self, fragment: impl Into<String>) -> Self {
        self.title = Some(fragment.into());
        self
    }

    pub fn race(mut self, race: Race) -> Self {
        self.race = Some(race);
        self
    }

    pub fn profession(mut self, profession: Profession) -> Self {
        self.profession = Some(profession);
        self
    }

    pub fn after(mut self, after: DateTime<Utc>) -> Self {
        self.after = Some(after);
        self
    }

    pub fn before(mut self, before: DateTime<Utc>) -> Self {
        self.before = Some(before);
        self
    }

    pub fn banned(mut self, banned: bool) -> Self {
        self.banned = Some(banned);
        self
    }

    pub fn min_experience(mut self, min: i64) -> Self {
        self.min_experience = Some(min);
        self
    }

    pub fn max_experience(mut self, max: i64) -> Self {
        self.max_experience = Some(max);
        self
    }

    pub fn min_level(mut self, min: i64) -> Self {
        self.min_level = Some(min);
        self
    }

    pub fn max_level(mut self, max: i64) -> Self {
        self.max_level = Some(max);
        self
    }

    /// True when no constraint is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check a single record against every present constraint.
    pub fn matches(&self, record: &PlayerRecord) -> bool {
        fn holds<T>(constraint: &Option<T>, check: impl FnOnce(&T) -> bool) -> bool {
            constraint.as_ref().map_or(true, check)
        }

        holds(&self.name, |n| record.name.contains(n.as_str()))
            && holds(&self.title, |t| record.title.contains(t.as_str()))
            && holds(&self.race, |r| record.race == *r)
            && holds(&self.profession, |p| record.profession == *p)
            && holds(&self.after, |after| record.birthday >= *after)
            && holds(&self.before, |before| record.birthday <= *before)
            && holds(&self.banned, |b| record.banned == *b)
            && holds(&self.min_experience, |min| record.experience >= *min)
            && holds(&self.max_experience, |max| record.experience <= *max)
            && holds(&self.min_level, |min| i64::from(record.level) >= *min)
            && holds(&self.max_level, |max| i64::from(record.level) <= *max)
    }
}

/// Keep the records matching `criteria`, preserving their order.
///
/// # Examples
///
/// ```rust
/// use zzroster::{query, PlayerCriteria};
///
/// let none = query::filter(Vec::new(), &PlayerCriteria::new().banned(true));
/// assert!(none.is_empty());
/// ```
pub fn filter(records: Vec<PlayerRecord>, criteria: &PlayerCriteria) -> Vec<PlayerRecord> {
    records
        .into_iter()
        .filter(|record| criteria.matches(record))
        .collect()
}

/// Number of records [`filter`] would keep.
pub fn count(records: &[PlayerRecord], criteria: &PlayerCriteria) -> usize {
    records.iter().filter(|record| criteria.matches(record)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Progression;
    use crate::player::PlayerId;
    use chrono::TimeZone;

    fn record(id: u64, name: &str, race: Race, year: i32, experience: i64, banned: bool) -> PlayerRecord {
        let progression = Progression::from_experience(experience);
        PlayerRecord {
            id: PlayerId::new(id).unwrap(),
            name: name.to_string(),
            title: format!("{name} the Bold"),
            race,
            profession: Profession::Warrior,
            birthday: Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap(),
            banned,
            experience,
            level: progression.level,
            until_next_level: progression.until_next_level,
        }
    }

    fn roster() -> Vec<PlayerRecord> {
        vec![
            record(1, "Boromir", Race::Human, 2005, 1000, false),
            record(2, "Legolas", Race::Elf, 2010, 50_000, false),
            record(3, "Gorbag", Race::Orc, 2015, 300, true),
            record(4, "Faramir", Race::Human, 2020, 600, false),
        ]
    }

    fn ids(records: &[PlayerRecord]) -> Vec<u64> {
        records.iter().map(|r| r.id.get()).collect()
    }

    #[test]
    fn test_empty_criteria_keeps_everything_in_order() {
        let filtered = filter(roster(), &PlayerCriteria::new());
        assert_eq!(filtered, roster());
    }

    #[test]
    fn test_name_is_case_sensitive_substring() {
        assert_eq!(ids(&filter(roster(), &PlayerCriteria::new().name("mir"))), vec![1, 4]);
        assert!(filter(roster(), &PlayerCriteria::new().name("MIR")).is_empty());
    }

    #[test]
    fn test_title_substring() {
        let filtered = filter(roster(), &PlayerCriteria::new().title("Legolas the"));
        assert_eq!(ids(&filtered), vec![2]);
    }

    #[test]
    fn test_birthday_bounds_are_inclusive() {
        let criteria = PlayerCriteria::new()
            .after(Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap())
            .before(Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(ids(&filter(roster(), &criteria)), vec![2, 3]);
    }

    #[test]
    fn test_experience_and_level_ranges() {
        let criteria = PlayerCriteria::new().min_experience(300).max_experience(1000);
        assert_eq!(ids(&filter(roster(), &criteria)), vec![1, 3, 4]);

        // levels: 4, 31, 2, 3
        let criteria = PlayerCriteria::new().min_level(3).max_level(4);
        assert_eq!(ids(&filter(roster(), &criteria)), vec![1, 4]);
    }

    #[test]
    fn test_negative_level_bounds() {
        let everyone = PlayerCriteria::new().min_level(-1);
        assert_eq!(ids(&filter(roster(), &everyone)), vec![1, 2, 3, 4]);

        let nobody = PlayerCriteria::new().max_level(-1);
        assert!(filter(roster(), &nobody).is_empty());
    }

    #[test]
    fn test_constraints_combine_with_and() {
        let criteria = PlayerCriteria::new().race(Race::Human).banned(false).min_level(4);
        assert_eq!(ids(&filter(roster(), &criteria)), vec![1]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let criteria = PlayerCriteria::new().banned(false).max_level(10);
        let once = filter(roster(), &criteria);
        let twice = filter(once.clone(), &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_count_matches_filter_len() {
        let all = roster();
        for criteria in [
            PlayerCriteria::new(),
            PlayerCriteria::new().race(Race::Orc),
            PlayerCriteria::new().profession(Profession::Druid),
            PlayerCriteria::new().name("o").min_experience(500),
        ] {
            assert_eq!(count(&all, &criteria), filter(all.clone(), &criteria).len());
        }
    }
}
