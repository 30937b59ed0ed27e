//! Level derivation from experience.
//!
//! Reaching level `L` takes `50 * L * (L + 1)` cumulative experience.
//! [`level`] inverts that polynomial and [`until_next_level`] measures the
//! distance to the next threshold.

use serde::{Deserialize, Serialize};

/// Level reached with the given experience.
///
/// Uses a floating-point square root and truncates toward zero.
/// Callers must pass non-negative experience.
///
/// # Examples
///
/// ```rust
/// use zzroster::level::level;
///
/// assert_eq!(level(0), 0);
/// assert_eq!(level(99), 0);
/// assert_eq!(level(100), 1);
/// assert_eq!(level(300), 2);
/// ```
pub fn level(experience: i64) -> u32 {
    let root = (2500.0 + 200.0 * experience as f64).sqrt();
    ((root - 50.0) / 100.0) as u32
}

/// Experience still needed to reach `level + 1`.
///
/// `level` must be the value [`level`] returned for this same `experience`,
/// otherwise the result may be negative.
///
/// # Examples
///
/// ```rust
/// use zzroster::level::until_next_level;
///
/// assert_eq!(until_next_level(0, 0), 100);
/// assert_eq!(until_next_level(1, 150), 150);
/// ```
pub fn until_next_level(level: u32, experience: i64) -> i64 {
    let level = i64::from(level);
    50 * (level + 1) * (level + 2) - experience
}

/// The derived fields of a player, computed together from one experience value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progression {
    pub level: u32,
    pub until_next_level: i64,
}

impl Progression {
    /// Compute level and remaining experience from one experience value.
    pub fn from_experience(experience: i64) -> Self {
        let level = level(experience);
        Self {
            level,
            until_next_level: until_next_level(level, experience),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::MAX_EXPERIENCE;

    #[test]
    fn test_level_thresholds() {
        // 50 * L * (L + 1)
        assert_eq!(level(100), 1);
        assert_eq!(level(299), 1);
        assert_eq!(level(300), 2);
        assert_eq!(level(599), 2);
        assert_eq!(level(600), 3);
        assert_eq!(level(1000), 4);
    }

    #[test]
    fn test_max_experience() {
        let progression = Progression::from_experience(MAX_EXPERIENCE);
        assert_eq!(progression.level, 446);
        assert!(progression.until_next_level > 0);
    }

    #[test]
    fn test_progression_never_negative_over_range() {
        let mut previous = 0;
        for experience in (0..=MAX_EXPERIENCE).step_by(997) {
            let progression = Progression::from_experience(experience);
            assert!(progression.level >= previous);
            assert!(progression.until_next_level > 0, "experience {experience}");
            previous = progression.level;
        }
    }

    #[test]
    fn test_stale_pair_can_go_negative() {
        assert!(until_next_level(0, 500) < 0);
    }
}
