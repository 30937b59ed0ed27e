//! Field validation rules.
//!
//! All checks are pure predicates. The birthday window is bound to an
//! explicit calendar offset instead of the process's local time zone;
//! the free function [`is_birthday_valid`] uses UTC.

use crate::error::{Field, ValidationError};
use crate::player::NewPlayer;
use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};

/// Maximum name length, in characters.
pub const NAME_MAX_LEN: usize = 12;

/// Maximum title length, in characters.
pub const TITLE_MAX_LEN: usize = 30;

/// Largest accepted experience value.
pub const MAX_EXPERIENCE: i64 = 10_000_000;

/// First year of the birthday window (its start is inclusive).
pub const FIRST_BIRTH_YEAR: i32 = 2000;

/// Last year of the birthday window; only its first instant is accepted.
pub const LAST_BIRTH_YEAR: i32 = 3000;

fn is_text_valid(s: &str, max_len: usize) -> bool {
    !s.is_empty() && s.chars().count() <= max_len
}

/// Name must be non-empty and at most [`NAME_MAX_LEN`] characters.
///
/// # Examples
///
/// ```rust
/// use zzroster::validate::is_name_valid;
///
/// assert!(is_name_valid("Aragorn"));
/// assert!(!is_name_valid(""));
/// assert!(!is_name_valid("Aragorn II Elessar"));
/// ```
pub fn is_name_valid(name: &str) -> bool {
    is_text_valid(name, NAME_MAX_LEN)
}

/// Title must be non-empty and at most [`TITLE_MAX_LEN`] characters.
pub fn is_title_valid(title: &str) -> bool {
    is_text_valid(title, TITLE_MAX_LEN)
}

/// Experience must lie in `0..=MAX_EXPERIENCE`.
pub fn is_experience_valid(experience: i64) -> bool {
    (0..=MAX_EXPERIENCE).contains(&experience)
}

/// Birthday must fall in the UTC [`BirthdayWindow`].
pub fn is_birthday_valid(birthday: DateTime<Utc>) -> bool {
    BirthdayWindow::utc().contains(birthday)
}

/// Check name, title, birthday and experience in that order, reporting the
/// first one that is missing or out of range.
///
/// Race and profession are not checked here; their membership is enforced
/// when the request body is deserialized.
pub fn check_record(player: &NewPlayer, window: &BirthdayWindow) -> Result<(), ValidationError> {
    ensure(is_name_valid(required(player.name.as_deref(), Field::Name)?), Field::Name)?;
    ensure(is_title_valid(required(player.title.as_deref(), Field::Title)?), Field::Title)?;
    ensure(window.contains(required(player.birthday, Field::Birthday)?), Field::Birthday)?;
    ensure(
        is_experience_valid(required(player.experience, Field::Experience)?),
        Field::Experience,
    )
}

/// True when name, title, birthday and experience are all present and valid.
pub fn is_record_valid(player: &NewPlayer, window: &BirthdayWindow) -> bool {
    check_record(player, window).is_ok()
}

/// Inclusive range of accepted birthdays: from the start of
/// [`FIRST_BIRTH_YEAR`] to the start of [`LAST_BIRTH_YEAR`], with year
/// boundaries taken in a fixed calendar offset.
///
/// # Examples
///
/// ```rust
/// use chrono::{FixedOffset, TimeZone, Utc};
/// use zzroster::BirthdayWindow;
///
/// let utc = BirthdayWindow::utc();
/// assert!(utc.contains(Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()));
/// assert!(!utc.contains(Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 59).unwrap()));
///
/// // In UTC+3 the year 2000 starts three hours earlier.
/// let moscow = BirthdayWindow::with_offset(FixedOffset::east_opt(3 * 3600).unwrap());
/// assert!(moscow.contains(Utc.with_ymd_and_hms(1999, 12, 31, 21, 0, 0).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl BirthdayWindow {
    /// Window with year boundaries in UTC.
    pub fn utc() -> Self {
        Self::with_offset(Utc.fix())
    }

    /// Window with year boundaries in the given offset.
    pub fn with_offset(offset: FixedOffset) -> Self {
        Self {
            start: start_of_year(offset, FIRST_BIRTH_YEAR),
            end: start_of_year(offset, LAST_BIRTH_YEAR),
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn contains(&self, birthday: DateTime<Utc>) -> bool {
        self.start <= birthday && birthday <= self.end
    }
}

impl Default for BirthdayWindow {
    fn default() -> Self {
        Self::utc()
    }
}

fn start_of_year(offset: FixedOffset, year: i32) -> DateTime<Utc> {
    // Fixed offsets have no gaps, so midnight on January 1st always exists.
    offset
        .with_ymd_and_hms(year, 1, 1, 0, 0, 0)
        .single()
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

pub(crate) fn required<T>(value: Option<T>, field: Field) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Missing(field))
}

pub(crate) fn ensure(ok: bool, field: Field) -> Result<(), ValidationError> {
    if ok {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_bounds() {
        assert!(is_name_valid("A"));
        assert!(is_name_valid("Twelve_chars"));
        assert!(!is_name_valid("Thirteen_char"));
        assert!(!is_name_valid(""));
    }

    #[test]
    fn test_title_bounds() {
        assert!(is_title_valid(&"t".repeat(30)));
        assert!(!is_title_valid(&"t".repeat(31)));
        assert!(!is_title_valid(""));
    }

    #[test]
    fn test_name_counts_characters_not_bytes() {
        assert!(is_name_valid("Éowyn Éomund"));
    }

    #[test]
    fn test_experience_bounds() {
        assert!(is_experience_valid(0));
        assert!(is_experience_valid(MAX_EXPERIENCE));
        assert!(!is_experience_valid(-1));
        assert!(!is_experience_valid(MAX_EXPERIENCE + 1));
    }

    #[test]
    fn test_birthday_window_is_inclusive() {
        let start = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(3000, 1, 1, 0, 0, 0).unwrap();
        assert!(is_birthday_valid(start));
        assert!(is_birthday_valid(end));
        assert!(!is_birthday_valid(start - chrono::Duration::milliseconds(1)));
        assert!(!is_birthday_valid(end + chrono::Duration::milliseconds(1)));
    }

    #[test]
    fn test_offset_shifts_window() {
        let west = BirthdayWindow::with_offset(FixedOffset::west_opt(5 * 3600).unwrap());
        assert_eq!(west.start(), Utc.with_ymd_and_hms(2000, 1, 1, 5, 0, 0).unwrap());
        assert!(!west.contains(Utc.with_ymd_and_hms(2000, 1, 1, 1, 0, 0).unwrap()));
    }

    #[test]
    fn test_record_validity_ignores_race_and_profession() {
        let player = NewPlayer {
            name: Some("Gimli".into()),
            title: Some("Lord of the Glittering Caves".into()),
            birthday: Some(Utc.with_ymd_and_hms(2400, 5, 5, 0, 0, 0).unwrap()),
            experience: Some(5000),
            ..NewPlayer::default()
        };
        assert!(is_record_valid(&player, &BirthdayWindow::utc()));

        let missing_title = NewPlayer {
            title: None,
            ..player
        };
        assert!(!is_record_valid(&missing_title, &BirthdayWindow::utc()));
        assert_eq!(
            check_record(&missing_title, &BirthdayWindow::utc()),
            Err(ValidationError::Missing(Field::Title))
        );
    }

    #[test]
    fn test_check_record_reports_out_of_range_experience() {
        let player = NewPlayer {
            name: Some("Pippin".into()),
            title: Some("Guard of the Citadel".into()),
            birthday: Some(Utc.with_ymd_and_hms(2090, 1, 1, 0, 0, 0).unwrap()),
            experience: Some(MAX_EXPERIENCE + 1),
            ..NewPlayer::default()
        };
        assert_eq!(
            check_record(&player, &BirthdayWindow::utc()),
            Err(ValidationError::OutOfRange(Field::Experience))
        );
    }
}
