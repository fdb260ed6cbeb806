/// ID types for UserHub entities
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User identifier
///
/// Serialized as a bare JSON number so stored documents stay compatible with
/// plain `{"id": 7, ...}` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Create a user ID from its numeric value
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the numeric value
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The ID that follows this one, or `None` once `u64::MAX` is taken
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Assign the ID for a record about to be appended.
///
/// Returns one past the largest existing ID, or 1 for an empty list. Gaps
/// left by out-of-order IDs are never filled. `None` when the largest ID is
/// already `u64::MAX`.
pub fn next_user_id<I>(ids: I) -> Option<UserId>
where
    I: IntoIterator<Item = UserId>,
{
    match ids.into_iter().max() {
        Some(max) => max.next(),
        None => Some(UserId(1)),
    }
}
