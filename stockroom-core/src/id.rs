use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Server-assigned identifier of a stored resource.
///
/// Ids are handed out by the store in increasing order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(i64);

impl ResourceId {
    /// Wraps a raw integer id.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the inner integer.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ResourceId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

/// Parses a path segment such as `"42"`.
///
/// Only plain base-10 integers are accepted; `"+1"`, `"1.0"`, `" 1"` and
/// `"abc"` are rejected with [`ValidationError::InvalidId`].
impl FromStr for ResourceId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('+') {
            return Err(ValidationError::InvalidId { raw: s.to_owned() });
        }
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidId { raw: s.to_owned() })
    }
}
