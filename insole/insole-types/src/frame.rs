//! One foot at one instant.

use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{InsoleError, InsoleResult};
use crate::layout::FootLayout;
use crate::sensor::SensorId;
use crate::side::FootSide;

/// A foot layout plus the pressures measured at one instant.
///
/// `pressures[i]` belongs to the `i`-th sensor of the layout's flat order.
/// Construction fails if the two lengths differ, so every frame is
/// index-aligned.
///
/// # Example
///
/// ```
/// use insole_types::{FootFrame, FootLayout, FootSide, InsoleRect, Point2, SensorId, SensorPosition};
///
/// let layout = FootLayout::new(
///     FootSide::Left,
///     InsoleRect::new(Point2::origin(), 12.0, 6.0),
///     vec![SensorPosition::new(SensorId::C1, Point2::new(1.0, 1.0))],
///     vec![SensorPosition::new(SensorId::C4, Point2::new(1.0, 0.0))],
///     Vec::new(),
/// );
///
/// let frame = FootFrame::new(layout.clone(), vec![3.0, 1.0]).unwrap();
/// assert!((frame.total_pressure() - 4.0).abs() < 1e-12);
///
/// // Lengths must agree
/// assert!(FootFrame::new(layout, vec![1.0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FootFrame {
    layout: FootLayout,
    pressures: Vec<f64>,
}

impl FootFrame {
    /// Pairs a layout with pressures in the layout's flat order.
    ///
    /// # Errors
    ///
    /// Returns [`InsoleError::ShapeMismatch`] if `pressures` does not have
    /// one value per layout sensor.
    pub fn new(layout: FootLayout, pressures: Vec<f64>) -> InsoleResult<Self> {
        if pressures.len() != layout.len() {
            return Err(InsoleError::shape_mismatch(pressures.len(), layout.len()));
        }
        Ok(Self { layout, pressures })
    }

    /// Returns the foot side.
    #[must_use]
    pub const fn side(&self) -> FootSide {
        self.layout.side
    }

    /// Returns the sensor layout.
    #[must_use]
    pub const fn layout(&self) -> &FootLayout {
        &self.layout
    }

    /// Returns the pressures, aligned to the layout's flat order.
    #[must_use]
    pub fn pressures(&self) -> &[f64] {
        &self.pressures
    }

    /// Returns the sensor coordinates in flat order.
    #[must_use]
    pub fn coordinates(&self) -> Vec<Point2<f64>> {
        self.layout.points()
    }

    /// Iterates over `(sensor, pressure, position)` triples in flat order.
    pub fn readings(&self) -> impl Iterator<Item = (SensorId, f64, Point2<f64>)> + '_ {
        self.layout
            .iter()
            .zip(self.pressures.iter())
            .map(|(s, &p)| (s.sensor, p, s.position))
    }

    /// Returns the sum of all pressures.
    #[must_use]
    pub fn total_pressure(&self) -> f64 {
        self.pressures.iter().sum()
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{InsoleRect, SensorPosition};
    use approx::assert_relative_eq;

    fn layout() -> FootLayout {
        FootLayout::new(
            FootSide::Left,
            InsoleRect::new(Point2::new(0.0, 6.0), 12.0, 6.0),
            vec![
                SensorPosition::new(SensorId::C1, Point2::new(5.0, 2.0)),
                SensorPosition::new(SensorId::C2, Point2::new(4.0, 2.0)),
            ],
            vec![SensorPosition::new(SensorId::C12, Point2::new(3.0, 0.0))],
            vec![SensorPosition::new(SensorId::C15, Point2::new(4.0, -3.0))],
        )
    }

    #[test]
    fn frame_shape_mismatch() {
        let err = FootFrame::new(layout(), vec![1.0; 3]);
        assert_eq!(err.err(), Some(InsoleError::shape_mismatch(3, 4)));
    }

    #[test]
    fn frame_total_pressure() {
        let frame = FootFrame::new(layout(), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_relative_eq!(frame.total_pressure(), 10.0);
    }

    #[test]
    fn frame_readings_aligned() {
        let frame = FootFrame::new(layout(), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let readings: Vec<_> = frame.readings().collect();
        assert_eq!(readings.len(), 4);
        assert_eq!(readings[2].0, SensorId::C12);
        assert_relative_eq!(readings[2].1, 3.0);
        assert_eq!(readings[2].2, Point2::new(3.0, 0.0));
        assert_eq!(frame.side(), FootSide::Left);
    }
}
