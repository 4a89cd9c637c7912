//! Identifier newtypes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid identifier: {reason}")]
pub struct InvalidId {
    reason: &'static str,
}

fn validate(s: &str) -> Result<(), InvalidId> {
    if s.is_empty() {
        return Err(InvalidId {
            reason: "must not be empty",
        });
    }

    if s.chars().any(char::is_whitespace) {
        return Err(InvalidId {
            reason: "must not contain whitespace",
        });
    }

    Ok(())
}

/// A validated train identifier (e.g. "T1", "IC-204").
///
/// Train ids are free-form but must be non-empty and contain no
/// whitespace. This type guarantees that any `TrainId` value is valid
/// by construction.
///
/// # Examples
///
/// ```
/// use rail_server::domain::TrainId;
///
/// let t1 = TrainId::parse("T1").unwrap();
/// assert_eq!(t1.as_str(), "T1");
///
/// assert!(TrainId::parse("").is_err());
/// assert!(TrainId::parse("T 1").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TrainId(String);

impl TrainId {
    /// Parse a train id from a string.
    pub fn parse(s: impl Into<String>) -> Result<Self, InvalidId> {
        let s = s.into();
        validate(&s)?;
        Ok(TrainId(s))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TrainId {
    type Error = InvalidId;

    fn try_from(s: String) -> Result<Self, InvalidId> {
        TrainId::parse(s)
    }
}

impl From<TrainId> for String {
    fn from(id: TrainId) -> String {
        id.0
    }
}

impl fmt::Debug for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrainId({})", self.0)
    }
}

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated track section identifier (e.g. "S1").
///
/// Same rules as [`TrainId`]: non-empty, no whitespace.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SectionId(String);

impl SectionId {
    /// Parse a section id from a string.
    pub fn parse(s: impl Into<String>) -> Result<Self, InvalidId> {
        let s = s.into();
        validate(&s)?;
        Ok(SectionId(s))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SectionId {
    type Error = InvalidId;

    fn try_from(s: String) -> Result<Self, InvalidId> {
        SectionId::parse(s)
    }
}

impl From<SectionId> for String {
    fn from(id: SectionId) -> String {
        id.0
    }
}

impl fmt::Debug for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SectionId({})", self.0)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any non-empty string without whitespace parses.
        #[test]
        fn valid_always_parses(s in "[A-Za-z0-9_-]{1,32}") {
            prop_assert!(TrainId::parse(s.as_str()).is_ok());
            prop_assert!(SectionId::parse(s.as_str()).is_ok());
        }

        /// Roundtrip: parse then as_str returns the original.
        #[test]
        fn roundtrip(s in "[A-Za-z0-9_-]{1,32}") {
            let id = SectionId::parse(s.as_str()).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// Strings containing whitespace are always rejected.
        #[test]
        fn whitespace_rejected(
            s in "[A-Za-z0-9]{0,8}[ \t][A-Za-z0-9]{0,8}",
        ) {
            prop_assert!(TrainId::parse(s.as_str()).is_err());
        }
    }
}
