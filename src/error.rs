//! Error types for roster operations.
//!
//! Field-level failures are represented by [`ValidationError`], storage
//! failures by [`StoreError`], and everything a caller of the service can
//! see is folded into [`RosterError`].

use crate::player::PlayerId;
use std::fmt;
use thiserror::Error;

/// A player attribute that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Title,
    Race,
    Profession,
    Birthday,
    Experience,
}

impl Field {
    /// The attribute name as it appears on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Title => "title",
            Field::Race => "race",
            Field::Profession => "profession",
            Field::Birthday => "birthday",
            Field::Experience => "experience",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field failed its range or format rule.
///
/// # Examples
///
/// ```rust
/// use zzroster::{Field, ValidationError};
///
/// let err = ValidationError::OutOfRange(Field::Experience);
/// assert_eq!(err.field(), Field::Experience);
/// assert_eq!(err.to_string(), "Field out of range: experience");
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was absent from a creation request.
    #[error("Missing required field: {0}")]
    Missing(Field),

    /// A field was present but outside its allowed range.
    #[error("Field out of range: {0}")]
    OutOfRange(Field),
}

impl ValidationError {
    /// The field that caused the failure.
    pub fn field(&self) -> Field {
        match *self {
            ValidationError::Missing(field) | ValidationError::OutOfRange(field) => field,
        }
    }
}

/// Failure reported by a storage collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store could not complete the operation.
    #[error("Storage backend failure: {0}")]
    Backend(String),
}

/// Errors surfaced by [`PlayerService`](crate::service::PlayerService) and
/// the parameter parsing helpers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// A create or update was rejected. Nothing was applied.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The identifier does not resolve to a record.
    #[error("Player not found: {0}")]
    NotFound(PlayerId),

    /// An identifier or request parameter could not be parsed.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl RosterError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }

    /// HTTP-style status code a transport layer should answer with.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zzroster::{PlayerId, RosterError};
    ///
    /// assert_eq!(RosterError::NotFound(PlayerId::new(7).unwrap()).status_code(), 404);
    /// assert_eq!(RosterError::malformed("id").status_code(), 400);
    /// ```
    pub fn status_code(&self) -> u16 {
        match self {
            RosterError::Validation(_) | RosterError::MalformedInput(_) => 400,
            RosterError::NotFound(_) => 404,
            RosterError::Store(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::Missing(Field::Race);
        assert_eq!(err.to_string(), "Missing required field: race");
        assert_eq!(err.field(), Field::Race);
    }

    #[test]
    fn test_validation_converts_into_roster_error() {
        let err: RosterError = ValidationError::OutOfRange(Field::Name).into();
        assert_eq!(err.status_code(), 400);
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_store_error_maps_to_server_error() {
        let err: RosterError = StoreError::Backend("disk full".into()).into();
        assert_eq!(err.status_code(), 500);
        assert!(err.to_string().contains("disk full"));
    }
}
