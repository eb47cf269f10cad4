//! Anatomical sensor zones.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::InsoleError;
use crate::sensor::SensorId;

/// One of the three anatomical groupings of insole sensors.
///
/// Zone membership is fixed by sensor number and never changes:
///
/// | Zone       | Sensors                    |
/// |------------|----------------------------|
/// | `Frontend` | 1, 2, 3, 9, 10, 11         |
/// | `Center`   | 4, 5, 6, 12, 13, 14        |
/// | `Backend`  | 7, 8, 15, 16               |
///
/// # Example
///
/// ```
/// use insole_types::{SensorId, Zone};
///
/// assert_eq!(Zone::Center.members()[3], SensorId::C12);
/// assert_eq!(Zone::ALL.iter().map(|z| z.sensor_count()).sum::<usize>(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Zone {
    /// Forefoot.
    Frontend,
    /// Midfoot.
    Center,
    /// Heel.
    Backend,
}

const FRONTEND: [SensorId; 6] = [
    SensorId::C1,
    SensorId::C2,
    SensorId::C3,
    SensorId::C9,
    SensorId::C10,
    SensorId::C11,
];

const CENTER: [SensorId; 6] = [
    SensorId::C4,
    SensorId::C5,
    SensorId::C6,
    SensorId::C12,
    SensorId::C13,
    SensorId::C14,
];

const BACKEND: [SensorId; 4] = [SensorId::C7, SensorId::C8, SensorId::C15, SensorId::C16];

impl Zone {
    /// All zones, toe to heel.
    pub const ALL: [Self; 3] = [Self::Frontend, Self::Center, Self::Backend];

    /// Returns the zone's sensors in ascending sensor-number order.
    #[must_use]
    pub const fn members(self) -> &'static [SensorId] {
        match self {
            Self::Frontend => &FRONTEND,
            Self::Center => &CENTER,
            Self::Backend => &BACKEND,
        }
    }

    /// Returns the number of sensors in this zone.
    #[must_use]
    pub const fn sensor_count(self) -> usize {
        self.members().len()
    }

    /// Returns the lowercase zone name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Center => "center",
            Self::Backend => "backend",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Zone {
    type Err = InsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "frontend" | "forefoot" => Ok(Self::Frontend),
            "center" | "midfoot" => Ok(Self::Center),
            "backend" | "heel" => Ok(Self::Backend),
            _ => Err(InsoleError::InvalidZone(s.to_string())),
        }
    }
}
