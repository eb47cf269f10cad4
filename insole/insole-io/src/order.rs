//! Projection of recorded sensor columns onto a layout.

use insole_layout::rule_for;
use insole_types::{FootSide, SensorId, Zone};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Order in which the sixteen sensor columns are read into a frame.
///
/// The frame pairs the i-th pressure with the i-th layout position, so the
/// order decides which column meets which position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ColumnOrder {
    /// Zone groups in label order: `sensor1,2,3,9,10,11`,
    /// `sensor4,5,6,12,13,14`, `sensor7,8,15,16`.
    ///
    /// This is how the existing recordings were processed; it does not line
    /// every column up with its own sensor position.
    #[default]
    Recorded,

    /// The layout's own sensor order for the foot, so each pressure is paired
    /// with the position of the sensor that measured it.
    LayoutAligned,
}

impl ColumnOrder {
    /// Sensors whose columns are read, in frame order.
    ///
    /// # Example
    ///
    /// ```
    /// use insole_io::ColumnOrder;
    /// use insole_types::{FootSide, SensorId};
    ///
    /// let recorded = ColumnOrder::Recorded.sensors(FootSide::Left);
    /// assert_eq!(recorded[6], SensorId::C4);
    ///
    /// let aligned = ColumnOrder::LayoutAligned.sensors(FootSide::Left);
    /// assert_eq!(aligned[6], SensorId::C12);
    /// ```
    #[must_use]
    pub fn sensors(self, side: FootSide) -> Vec<SensorId> {
        match self {
            Self::Recorded => Zone::ALL
                .iter()
                .flat_map(|zone| zone.members().iter().copied())
                .collect(),
            Self::LayoutAligned => rule_for(side).table().iter().map(|e| e.sensor).collect(),
        }
    }

    /// Lowercase name of the order.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Recorded => "recorded",
            Self::LayoutAligned => "layout-aligned",
        }
    }
}

impl std::fmt::Display for ColumnOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insole_types::SENSOR_COUNT;

    #[test]
    fn test_recorded_order() {
        let numbers: Vec<u8> = ColumnOrder::Recorded
            .sensors(FootSide::Right)
            .iter()
            .map(|s| s.number())
            .collect();
        assert_eq!(
            numbers,
            vec![1, 2, 3, 9, 10, 11, 4, 5, 6, 12, 13, 14, 7, 8, 15, 16]
        );
        assert_eq!(
            ColumnOrder::Recorded.sensors(FootSide::Left),
            ColumnOrder::Recorded.sensors(FootSide::Right)
        );
    }

    #[test]
    fn test_layout_aligned_order() {
        let left: Vec<u8> = ColumnOrder::LayoutAligned
            .sensors(FootSide::Left)
            .iter()
            .map(|s| s.number())
            .collect();
        assert_eq!(
            left,
            vec![1, 2, 3, 9, 10, 11, 12, 4, 13, 5, 14, 6, 15, 7, 16, 8]
        );

        let right: Vec<u8> = ColumnOrder::LayoutAligned
            .sensors(FootSide::Right)
            .iter()
            .map(|s| s.number())
            .collect();
        assert_eq!(
            right,
            vec![1, 2, 3, 9, 10, 11, 12, 4, 13, 5, 14, 6, 7, 15, 8, 16]
        );
    }

    #[test]
    fn test_every_sensor_once() {
        for order in [ColumnOrder::Recorded, ColumnOrder::LayoutAligned] {
            for side in FootSide::ALL {
                let mut sensors = order.sensors(side);
                assert_eq!(sensors.len(), SENSOR_COUNT);
                sensors.sort();
                sensors.dedup();
                assert_eq!(sensors.len(), SENSOR_COUNT, "{order} {side}");
            }
        }
    }
}
