//! Sensor identifiers.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{InsoleError, InsoleResult};
use crate::zone::Zone;

/// Number of pressure sensors in one insole.
pub const SENSOR_COUNT: usize = 16;

/// One of the sixteen pressure sensors of an insole.
///
/// Sensors are labelled `C1`..`C16`. Recorded pressure tables name the same
/// sensors `sensor1`..`sensor16`.
///
/// # Example
///
/// ```
/// use insole_types::{SensorId, Zone};
///
/// let id: SensorId = "sensor15".parse().unwrap();
/// assert_eq!(id, SensorId::C15);
/// assert_eq!(id.number(), 15);
/// assert_eq!(id.zone(), Zone::Backend);
/// assert_eq!(id.to_string(), "C15");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum SensorId {
    C1 = 1,
    C2 = 2,
    C3 = 3,
    C4 = 4,
    C5 = 5,
    C6 = 6,
    C7 = 7,
    C8 = 8,
    C9 = 9,
    C10 = 10,
    C11 = 11,
    C12 = 12,
    C13 = 13,
    C14 = 14,
    C15 = 15,
    C16 = 16,
}

impl SensorId {
    /// All sensors in ascending number order.
    pub const ALL: [Self; SENSOR_COUNT] = [
        Self::C1,
        Self::C2,
        Self::C3,
        Self::C4,
        Self::C5,
        Self::C6,
        Self::C7,
        Self::C8,
        Self::C9,
        Self::C10,
        Self::C11,
        Self::C12,
        Self::C13,
        Self::C14,
        Self::C15,
        Self::C16,
    ];

    /// Returns the sensor from its 1-based number.
    ///
    /// # Errors
    ///
    /// Returns [`InsoleError::InvalidSensorNumber`] outside `1..=16`.
    pub fn from_number(number: u8) -> InsoleResult<Self> {
        number
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(usize::from(idx)).copied())
            .ok_or(InsoleError::InvalidSensorNumber(number))
    }

    /// Returns the 1-based sensor number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the 0-based position of this sensor in [`SensorId::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// Returns the anatomical zone the sensor belongs to.
    #[must_use]
    pub const fn zone(self) -> Zone {
        match self {
            Self::C1 | Self::C2 | Self::C3 | Self::C9 | Self::C10 | Self::C11 => Zone::Frontend,
            Self::C4 | Self::C5 | Self::C6 | Self::C12 | Self::C13 | Self::C14 => Zone::Center,
            Self::C7 | Self::C8 | Self::C15 | Self::C16 => Zone::Backend,
        }
    }

    /// Returns the column name used by recorded pressure tables.
    #[must_use]
    pub fn column_name(self) -> String {
        format!("sensor{}", self.number())
    }
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.number())
    }
}

impl FromStr for SensorId {
    type Err = InsoleError;

    /// Accepts `C5`, `c5`, `sensor5` or a bare `5`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        let digits = lower
            .strip_prefix("sensor")
            .or_else(|| lower.strip_prefix('c'))
            .unwrap_or(lower.as_str());

        digits
            .parse::<u8>()
            .map_err(|_| InsoleError::InvalidSensorLabel(trimmed.to_string()))
            .and_then(|n| {
                Self::from_number(n).map_err(|_| InsoleError::InvalidSensorLabel(trimmed.to_string()))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensor_number_roundtrip() {
        for (idx, id) in SensorId::ALL.iter().enumerate() {
            assert_eq!(id.index(), idx);
            assert_eq!(SensorId::from_number(id.number()).ok(), Some(*id));
        }
    }

    #[test]
    fn sensor_number_out_of_range() {
        assert!(SensorId::from_number(0).is_err());
        assert!(SensorId::from_number(17).is_err());
    }

    #[test]
    fn sensor_zone_counts() {
        let count = |zone| SensorId::ALL.iter().filter(|s| s.zone() == zone).count();
        assert_eq!(count(Zone::Frontend), 6);
        assert_eq!(count(Zone::Center), 6);
        assert_eq!(count(Zone::Backend), 4);
    }

    #[test]
    fn sensor_parse_labels() {
        assert_eq!("C1".parse::<SensorId>().ok(), Some(SensorId::C1));
        assert_eq!("c12".parse::<SensorId>().ok(), Some(SensorId::C12));
        assert_eq!("sensor16".parse::<SensorId>().ok(), Some(SensorId::C16));
        assert_eq!("7".parse::<SensorId>().ok(), Some(SensorId::C7));
        assert!("C17".parse::<SensorId>().is_err());
        assert!("toe".parse::<SensorId>().is_err());
    }

    #[test]
    fn sensor_names() {
        assert_eq!(SensorId::C10.to_string(), "C10");
        assert_eq!(SensorId::C10.column_name(), "sensor10");
    }
}
