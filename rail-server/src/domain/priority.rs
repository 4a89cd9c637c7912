//! Train priority.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned for an out-of-range priority value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("priority must be between 1 and 10, got {value}")]
pub struct InvalidPriority {
    value: u8,
}

/// A train's scheduling priority: 1 to 10, higher is more important.
///
/// Priority decides commitment order: higher-priority trains are
/// scheduled first and lower-priority trains yield headway to them.
///
/// # Examples
///
/// ```
/// use rail_server::domain::Priority;
///
/// let express = Priority::new(8).unwrap();
/// let freight = Priority::new(3).unwrap();
/// assert!(express > freight);
///
/// assert!(Priority::new(0).is_err());
/// assert!(Priority::new(11).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Priority(u8);

impl Priority {
    /// Lowest allowed priority.
    pub const MIN: Priority = Priority(1);

    /// Highest allowed priority.
    pub const MAX: Priority = Priority(10);

    /// Create a priority, validating the 1-10 range.
    pub fn new(value: u8) -> Result<Self, InvalidPriority> {
        if (1..=10).contains(&value) {
            Ok(Priority(value))
        } else {
            Err(InvalidPriority { value })
        }
    }

    /// Returns the numeric priority value.
    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority(5)
    }
}

impl TryFrom<u8> for Priority {
    type Error = InvalidPriority;

    fn try_from(value: u8) -> Result<Self, InvalidPriority> {
        Priority::new(value)
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> u8 {
        priority.0
    }
}

impl fmt::Debug for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Priority({})", self.0)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
