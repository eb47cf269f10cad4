//! Sensor layouts for one foot.

use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sensor::SensorId;
use crate::side::FootSide;
use crate::zone::Zone;

/// The bounding rectangle an insole is placed in.
///
/// `anchor` is the rectangle's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InsoleRect {
    /// Top-left corner, in grid units.
    pub anchor: Point2<f64>,
    /// Rectangle width, in grid units.
    pub width: f64,
    /// Rectangle height, in grid units.
    pub height: f64,
}

impl InsoleRect {
    /// Creates a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(anchor: Point2<f64>, width: f64, height: f64) -> Self {
        Self {
            anchor,
            width,
            height,
        }
    }
}

/// A sensor and where it sits on the insole.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorPosition {
    /// Which sensor.
    pub sensor: SensorId,
    /// Position in grid units.
    pub position: Point2<f64>,
}

impl SensorPosition {
    /// Creates a sensor position.
    #[must_use]
    pub const fn new(sensor: SensorId, position: Point2<f64>) -> Self {
        Self { sensor, position }
    }
}

/// Sensor positions for one foot, grouped by zone.
///
/// The flat order (see [`FootLayout::points`]) is frontend, then center,
/// then backend. Pressure vectors paired with a layout are aligned to that
/// flat order.
///
/// # Example
///
/// ```
/// use insole_types::{FootLayout, FootSide, InsoleRect, Point2, SensorId, SensorPosition, Zone};
///
/// let rect = InsoleRect::new(Point2::new(0.0, 6.0), 12.0, 6.0);
/// let layout = FootLayout::new(
///     FootSide::Left,
///     rect,
///     vec![SensorPosition::new(SensorId::C1, Point2::new(5.0, 2.0))],
///     vec![SensorPosition::new(SensorId::C4, Point2::new(2.0, 0.0))],
///     vec![SensorPosition::new(SensorId::C7, Point2::new(3.0, -3.0))],
/// );
///
/// assert_eq!(layout.len(), 3);
/// assert_eq!(layout.zone(Zone::Center)[0].sensor, SensorId::C4);
/// assert_eq!(layout.points()[2], Point2::new(3.0, -3.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FootLayout {
    /// Foot this layout belongs to.
    pub side: FootSide,
    /// Rectangle the layout was generated from.
    pub rect: InsoleRect,
    /// Forefoot sensors, in emitted order.
    pub frontend: Vec<SensorPosition>,
    /// Midfoot sensors, in emitted order.
    pub center: Vec<SensorPosition>,
    /// Heel sensors, in emitted order.
    pub backend: Vec<SensorPosition>,
}

impl FootLayout {
    /// Creates a layout from its three zone lists.
    #[must_use]
    pub const fn new(
        side: FootSide,
        rect: InsoleRect,
        frontend: Vec<SensorPosition>,
        center: Vec<SensorPosition>,
        backend: Vec<SensorPosition>,
    ) -> Self {
        Self {
            side,
            rect,
            frontend,
            center,
            backend,
        }
    }

    /// Returns the sensors of one zone, in emitted order.
    #[must_use]
    pub fn zone(&self, zone: Zone) -> &[SensorPosition] {
        match zone {
            Zone::Frontend => &self.frontend,
            Zone::Center => &self.center,
            Zone::Backend => &self.backend,
        }
    }

    /// Iterates over all sensors in flat order.
    pub fn iter(&self) -> impl Iterator<Item = &SensorPosition> {
        self.frontend
            .iter()
            .chain(self.center.iter())
            .chain(self.backend.iter())
    }

    /// Returns all positions in flat order.
    #[must_use]
    pub fn points(&self) -> Vec<Point2<f64>> {
        self.iter().map(|s| s.position).collect()
    }

    /// Returns all sensor ids in flat order.
    #[must_use]
    pub fn sensors(&self) -> Vec<SensorId> {
        self.iter().map(|s| s.sensor).collect()
    }

    /// Returns the position of a sensor, if it is part of the layout.
    #[must_use]
    pub fn position_of(&self, sensor: SensorId) -> Option<Point2<f64>> {
        self.iter().find(|s| s.sensor == sensor).map(|s| s.position)
    }

    /// Returns the total number of sensors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frontend.len() + self.center.len() + self.backend.len()
    }

    /// Returns true if the layout holds no sensors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the per-axis minimum and maximum of the sensor positions.
    ///
    /// Returns `None` for an empty layout.
    #[must_use]
    pub fn bounds(&self) -> Option<(Point2<f64>, Point2<f64>)> {
        let mut iter = self.iter().map(|s| s.position);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), p| {
            (
                Point2::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point2::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }
}
