//! ID types for NHL players.

use crate::error::{NhlError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for NHL player IDs.
///
/// The NHL web API hands these out as plain integers (e.g. `8478483`); the
/// intermediate document uses their decimal string form as map keys.
///
/// # Examples
///
/// ```rust
/// use nhl_stats::PlayerId;
///
/// let id = PlayerId::new(8478483);
/// assert_eq!(id.as_u64(), 8478483);
/// assert_eq!(id.to_string(), "8478483");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = NhlError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}
