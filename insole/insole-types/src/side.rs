//! Foot side.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{InsoleError, InsoleResult};

/// Which foot a reading belongs to.
///
/// Recorded sessions encode the side as a numeric foot indicator:
/// `0` for the left foot and `1` for the right foot.
///
/// # Example
///
/// ```
/// use insole_types::FootSide;
///
/// let side = FootSide::from_indicator(1).unwrap();
/// assert_eq!(side, FootSide::Right);
/// assert_eq!(side.indicator(), 1);
/// assert_eq!(side.opposite(), FootSide::Left);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FootSide {
    /// Left foot (indicator `0`).
    Left,
    /// Right foot (indicator `1`).
    Right,
}

impl FootSide {
    /// Both sides, left first.
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];

    /// Converts a recorded foot indicator into a side.
    ///
    /// # Errors
    ///
    /// Returns [`InsoleError::InvalidFootIndicator`] for anything other than
    /// `0` or `1`.
    pub fn from_indicator(indicator: i64) -> InsoleResult<Self> {
        match indicator {
            0 => Ok(Self::Left),
            1 => Ok(Self::Right),
            other => Err(InsoleError::invalid_foot(other.to_string())),
        }
    }

    /// Returns the recorded foot indicator for this side.
    #[must_use]
    pub const fn indicator(self) -> u8 {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }

    /// Returns the other foot.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the lowercase name of the side.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for FootSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FootSide {
    type Err = InsoleError;

    /// Accepts `left`/`right` (any case) or the indicators `0`/`1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("left") {
            return Ok(Self::Left);
        }
        if trimmed.eq_ignore_ascii_case("right") {
            return Ok(Self::Right);
        }
        trimmed
            .parse::<i64>()
            .map_err(|_| InsoleError::invalid_foot(trimmed))
            .and_then(Self::from_indicator)
    }
}
