//! Branded competition ID newtype.
//!
//! Competition IDs are supplied by the host application and embedded verbatim
//! into the live-update endpoint path. Wrapping them in a newtype prevents
//! accidentally passing an arbitrary string where an ID is expected, and
//! validation at construction guarantees the value is a safe URL path segment
//! so no escaping is needed downstream.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a string is not usable as a [`CompetitionId`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidCompetitionId {
    /// The supplied value was empty.
    #[error("competition ID is empty")]
    Empty,
    /// The supplied value contained a character that would alter the URL
    /// path it is embedded into.
    #[error("competition ID contains unsafe character {0:?}")]
    UnsafeCharacter(char),
}

/// Identifier of one competition, usable as a URL path segment.
///
/// Construction rejects empty values and values containing `/`, `?`, `#`,
/// `%`, whitespace, or control characters. Everything else passes through
/// unchanged; no percent-escaping is applied.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct CompetitionId(String);

impl CompetitionId {
    /// Validate and wrap a competition ID.
    pub fn new(id: impl Into<String>) -> Result<Self, InvalidCompetitionId> {
        let id = id.into();
        if id.is_empty() {
            return Err(InvalidCompetitionId::Empty);
        }
        if let Some(c) = id
            .chars()
            .find(|c| matches!(c, '/' | '?' | '#' | '%') || c.is_whitespace() || c.is_control())
        {
            return Err(InvalidCompetitionId::UnsafeCharacter(c));
        }
        Ok(Self(id))
    }

    /// Return the inner string as a slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume self and return the inner `String`.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CompetitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CompetitionId {
    type Err = InvalidCompetitionId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CompetitionId {
    type Error = InvalidCompetitionId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl AsRef<str> for CompetitionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numeric_id() {
        let id = CompetitionId::new("42").unwrap();
        assert_eq!(id.as_str(), "42");
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn accepts_slug_id() {
        assert!(CompetitionId::new("gez-spring-2026").is_ok());
        assert!(CompetitionId::new("comp_7.beta").is_ok());
    }

    #[test]
    fn accepts_non_ascii_id() {
        // Path segments may carry non-ASCII; the server decides validity.
        assert!(CompetitionId::new("ግዕዝ").is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(CompetitionId::new(""), Err(InvalidCompetitionId::Empty));
    }

    #[test]
    fn rejects_path_separator() {
        assert_eq!(
            CompetitionId::new("42/live"),
            Err(InvalidCompetitionId::UnsafeCharacter('/'))
        );
    }

    #[test]
    fn rejects_query_and_fragment_chars() {
        assert!(CompetitionId::new("42?x=1").is_err());
        assert!(CompetitionId::new("42#top").is_err());
        assert!(CompetitionId::new("4%2F2").is_err());
    }

    #[test]
    fn rejects_whitespace_and_control() {
        assert!(CompetitionId::new("4 2").is_err());
        assert!(CompetitionId::new("42\n").is_err());
        assert!(CompetitionId::new("\t42").is_err());
    }

    #[test]
    fn from_str_roundtrip() {
        let id: CompetitionId = "abc".parse().unwrap();
        assert_eq!(id.into_inner(), "abc");
    }

    #[test]
    fn serde_transparent() {
        let id = CompetitionId::new("42").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"42\"");
        let back: CompetitionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn serde_rejects_invalid() {
        let result: Result<CompetitionId, _> = serde_json::from_str("\"a/b\"");
        assert!(result.is_err());
    }
}
