//! Declarative sensor tables for the left and right insoles.
//!
//! Offsets are in `interval` steps from the rectangle anchor (its top-left
//! corner). `dx` grows to the right, `dy` grows upward, so every sensor sits
//! below the anchor (`dy < 0`).
//!
//! Both tables start at the forefoot reference point [`FOREFOOT_OFFSET`]
//! `(3, -4)`. On the left insole `C3` sits there and `C1` is two steps to
//! the right; on the right insole `C1` sits there and `C3` is two steps to
//! the right.

use insole_types::{FootSide, SensorId, Zone};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Offset from the layout anchor, in grid steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridOffset {
    /// Steps to the right of the anchor.
    pub dx: i32,
    /// Steps above the anchor (negative is below).
    pub dy: i32,
}

impl GridOffset {
    /// Creates an offset.
    #[must_use]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// One row of a layout table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutEntry {
    /// Sensor placed by this row.
    pub sensor: SensorId,
    /// Zone list the sensor is emitted into.
    pub zone: Zone,
    /// Offset from the anchor.
    pub offset: GridOffset,
}

const fn entry(sensor: SensorId, zone: Zone, dx: i32, dy: i32) -> LayoutEntry {
    LayoutEntry {
        sensor,
        zone,
        offset: GridOffset::new(dx, dy),
    }
}

/// Forefoot reference point shared by both sides.
pub const FOREFOOT_OFFSET: GridOffset = GridOffset::new(3, -4);

/// Left insole, in emitted order.
///
/// | Zone     | Emitted order                    |
/// |----------|----------------------------------|
/// | frontend | C1, C2, C3, C9, C10, C11         |
/// | center   | C12, C4, C13, C5, C14, C6        |
/// | backend  | C15, C7, C16, C8                 |
///
/// The `C6` row holds `C5`'s offset, matching recorded data.
pub static LEFT_TABLE: [LayoutEntry; 16] = [
    entry(SensorId::C1, Zone::Frontend, 5, -4),
    entry(SensorId::C2, Zone::Frontend, 4, -4),
    entry(SensorId::C3, Zone::Frontend, 3, -4),
    entry(SensorId::C9, Zone::Frontend, 5, -5),
    entry(SensorId::C10, Zone::Frontend, 4, -5),
    entry(SensorId::C11, Zone::Frontend, 3, -5),
    entry(SensorId::C12, Zone::Center, 3, -6),
    entry(SensorId::C4, Zone::Center, 2, -6),
    entry(SensorId::C13, Zone::Center, 3, -7),
    entry(SensorId::C5, Zone::Center, 2, -7),
    entry(SensorId::C14, Zone::Center, 3, -8),
    entry(SensorId::C6, Zone::Center, 2, -7),
    entry(SensorId::C15, Zone::Backend, 4, -9),
    entry(SensorId::C7, Zone::Backend, 3, -9),
    entry(SensorId::C16, Zone::Backend, 4, -10),
    entry(SensorId::C8, Zone::Backend, 3, -10),
];

/// Right insole, in emitted order.
///
/// | Zone     | Emitted order                    |
/// |----------|----------------------------------|
/// | frontend | C1, C2, C3, C9, C10, C11         |
/// | center   | C12, C4, C13, C5, C14, C6        |
/// | backend  | C7, C15, C8, C16                 |
pub static RIGHT_TABLE: [LayoutEntry; 16] = [
    entry(SensorId::C1, Zone::Frontend, 3, -4),
    entry(SensorId::C2, Zone::Frontend, 4, -4),
    entry(SensorId::C3, Zone::Frontend, 5, -4),
    entry(SensorId::C9, Zone::Frontend, 3, -5),
    entry(SensorId::C10, Zone::Frontend, 4, -5),
    entry(SensorId::C11, Zone::Frontend, 5, -5),
    entry(SensorId::C12, Zone::Center, 5, -6),
    entry(SensorId::C4, Zone::Center, 6, -6),
    entry(SensorId::C13, Zone::Center, 5, -7),
    entry(SensorId::C5, Zone::Center, 6, -7),
    entry(SensorId::C14, Zone::Center, 5, -8),
    entry(SensorId::C6, Zone::Center, 6, -8),
    entry(SensorId::C7, Zone::Backend, 5, -9),
    entry(SensorId::C15, Zone::Backend, 4, -9),
    entry(SensorId::C8, Zone::Backend, 5, -10),
    entry(SensorId::C16, Zone::Backend, 4, -10),
];

/// A table row whose recorded offset differs from its computed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutAnomaly {
    /// Side whose table holds the row.
    pub side: FootSide,
    /// Zone list holding the row.
    pub zone: Zone,
    /// Position of the row within its zone list.
    pub slot: usize,
    /// Sensor the row is labelled with.
    pub sensor: SensorId,
    /// Sensor whose position the recorded row repeats.
    pub duplicates: SensorId,
    /// Offset emitted by recorded data.
    pub recorded: GridOffset,
    /// Offset the sensor geometry implies.
    pub corrected: GridOffset,
}

impl LayoutAnomaly {
    /// Returns true if `entry` on `side` is the anomalous row.
    #[must_use]
    pub fn matches(&self, side: FootSide, entry: &LayoutEntry) -> bool {
        self.side == side && self.zone == entry.zone && self.sensor == entry.sensor
    }
}

/// The left midfoot list ends in a second copy of `C5` instead of `C6`.
///
/// `C6` lies one step below `C5` (offset `(2, -8)`), but the recorded left
/// layout emits `C5`'s offset `(2, -7)` in the sixth center slot. The right
/// layout does not have this defect. Generation keeps the recorded offset
/// unless [`CenterZonePolicy::Corrected`](crate::CenterZonePolicy::Corrected)
/// is selected, so existing datasets stay index-aligned.
pub const KNOWN_LEFT_CENTER_ANOMALY: LayoutAnomaly = LayoutAnomaly {
    side: FootSide::Left,
    zone: Zone::Center,
    slot: 5,
    sensor: SensorId::C6,
    duplicates: SensorId::C5,
    recorded: GridOffset::new(2, -7),
    corrected: GridOffset::new(2, -8),
};
