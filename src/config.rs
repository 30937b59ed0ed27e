//! Roster configuration.
//!
//! All fields have defaults, so an empty JSON object is a valid config.

use crate::page::DEFAULT_PAGE_SIZE;
use crate::validate::BirthdayWindow;
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a [`RosterConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse roster config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Offsets must be strictly within one day of UTC.
    #[error("UTC offset out of range: {0} seconds")]
    InvalidOffset(i32),
}

/// Settings shared by every request a [`PlayerService`](crate::PlayerService) handles.
///
/// # Examples
///
/// ```rust
/// use zzroster::RosterConfig;
///
/// let config = RosterConfig::from_json_str(r#"{"defaultPageSize": 10}"#).unwrap();
/// assert_eq!(config.default_page_size, 10);
/// assert_eq!(config.utc_offset_seconds, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RosterConfig {
    /// Page size for listings that do not specify one.
    pub default_page_size: usize,

    /// Offset east of UTC, in seconds, of the calendar whose year
    /// boundaries delimit valid birthdays.
    pub utc_offset_seconds: i32,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            utc_offset_seconds: 0,
        }
    }
}

impl RosterConfig {
    /// Parse a config from JSON, rejecting offsets chrono cannot represent.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: RosterConfig = serde_json::from_str(json)?;
        config.calendar_offset()?;
        Ok(config)
    }

    /// The configured calendar offset.
    pub fn calendar_offset(&self) -> Result<FixedOffset, ConfigError> {
        FixedOffset::east_opt(self.utc_offset_seconds)
            .ok_or(ConfigError::InvalidOffset(self.utc_offset_seconds))
    }

    /// Birthday window in the configured calendar.
    pub fn birthday_window(&self) -> Result<BirthdayWindow, ConfigError> {
        self.calendar_offset().map(BirthdayWindow::with_offset)
    }
}
