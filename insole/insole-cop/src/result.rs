//! Result types for COP analysis.

use insole_types::{FootSide, Point2, Timestamp};
use nalgebra::distance;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cop::CenterOfPressure;
use crate::distance::DistanceSet;

/// Analysis of one foot at one instant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameAnalysis {
    /// Foot the frame belongs to.
    pub side: FootSide,
    /// Center of pressure.
    pub cop: CenterOfPressure,
    /// Distance of each sensor to the COP, in layout order.
    pub distances: DistanceSet,
    /// Equivalent force concentrated at the COP.
    pub equivalent_force: f64,
}

/// An analyzed frame on a trajectory.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrajectoryPoint {
    /// Timestamp of the frame.
    pub timestamp: Timestamp,
    /// Frame analysis.
    pub analysis: FrameAnalysis,
}

/// A frame that could not be analyzed or assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameFailure {
    /// Timestamp of the frame.
    pub timestamp: Timestamp,
    /// Foot the frame belongs to.
    pub side: FootSide,
    /// Why the frame failed.
    pub reason: String,
}

impl FrameFailure {
    /// Create a failure record.
    #[must_use]
    pub fn new(timestamp: Timestamp, side: FootSide, reason: impl Into<String>) -> Self {
        Self {
            timestamp,
            side,
            reason: reason.into(),
        }
    }
}

/// Result of analyzing a session.
///
/// Points and failures are sorted by timestamp, then left before right.
///
/// # Example
///
/// ```
/// use insole_cop::TrajectoryReport;
///
/// let report = TrajectoryReport::default();
/// assert!(report.is_empty());
/// assert_eq!(report.success_percent(), 100.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrajectoryReport {
    /// Successfully analyzed frames.
    pub points: Vec<TrajectoryPoint>,
    /// Frames that failed, with reasons.
    pub failures: Vec<FrameFailure>,
}

impl TrajectoryReport {
    /// Whether the report holds no points and no failures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.failures.is_empty()
    }

    /// Add failures recorded elsewhere, keeping timestamp then side order.
    pub fn record_failures(&mut self, failures: impl IntoIterator<Item = FrameFailure>) {
        self.failures.extend(failures);
        self.failures
            .sort_by(|a, b| (&a.timestamp, a.side).cmp(&(&b.timestamp, b.side)));
    }

    /// Whether any frame failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Points for one foot, in timestamp order.
    pub fn for_side(&self, side: FootSide) -> impl Iterator<Item = &TrajectoryPoint> {
        self.points.iter().filter(move |p| p.analysis.side == side)
    }

    /// COP positions of one foot's loaded frames, in timestamp order.
    ///
    /// Unloaded frames are skipped since their position is a sentinel.
    #[must_use]
    pub fn cop_path(&self, side: FootSide) -> Vec<Point2<f64>> {
        self.for_side(side)
            .filter(|p| !p.analysis.cop.is_unloaded())
            .map(|p| p.analysis.cop.position)
            .collect()
    }

    /// Total length of one foot's COP path.
    #[must_use]
    pub fn path_length(&self, side: FootSide) -> f64 {
        self.cop_path(side)
            .windows(2)
            .map(|w| distance(&w[0], &w[1]))
            .sum()
    }

    /// Peak equivalent force of one foot.
    #[must_use]
    pub fn peak_force(&self, side: FootSide) -> Option<f64> {
        self.for_side(side)
            .map(|p| p.analysis.equivalent_force)
            .max_by(f64::total_cmp)
    }

    /// Percentage of frames analyzed successfully.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn success_percent(&self) -> f64 {
        let total = self.points.len() + self.failures.len();
        if total == 0 {
            100.0
        } else {
            100.0 * (self.points.len() as f64) / (total as f64)
        }
    }
}

impl std::fmt::Display for TrajectoryReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "COP Trajectory:")?;
        writeln!(f, "  Frames analyzed: {}", self.points.len())?;
        writeln!(f, "  Frames failed: {}", self.failures.len())?;
        writeln!(f, "  Success: {:.1}%", self.success_percent())?;
        for side in FootSide::ALL {
            let count = self.for_side(side).count();
            if count == 0 {
                continue;
            }
            writeln!(
                f,
                "  {side}: {count} frames, path length {:.3}",
                self.path_length(side)
            )?;
            if let Some(peak) = self.peak_force(side) {
                writeln!(f, "    Peak F_COP: {peak:.3}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn point(ts: &str, side: FootSide, x: f64, y: f64, total: f64, force: f64) -> TrajectoryPoint {
        TrajectoryPoint {
            timestamp: Timestamp::new(ts),
            analysis: FrameAnalysis {
                side,
                cop: CenterOfPressure {
                    position: Point2::new(x, y),
                    total_pressure: total,
                },
                distances: DistanceSet::default(),
                equivalent_force: force,
            },
        }
    }

    fn sample() -> TrajectoryReport {
        TrajectoryReport {
            points: vec![
                point("1", FootSide::Left, 0.0, 0.0, 5.0, 2.0),
                point("1", FootSide::Right, 9.0, 9.0, 5.0, 1.0),
                point("2", FootSide::Left, 3.0, 4.0, 5.0, 6.0),
                point("3", FootSide::Left, 0.0, 0.0, 0.0, 0.0),
                point("4", FootSide::Left, 3.0, 0.0, 5.0, 3.0),
            ],
            failures: vec![FrameFailure::new(
                Timestamp::new("2"),
                FootSide::Right,
                "missing anchor",
            )],
        }
    }

    #[test]
    fn test_for_side() {
        let report = sample();
        assert_eq!(report.for_side(FootSide::Left).count(), 4);
        assert_eq!(report.for_side(FootSide::Right).count(), 1);
    }

    #[test]
    fn test_cop_path_skips_unloaded() {
        let report = sample();
        let path = report.cop_path(FootSide::Left);
        assert_eq!(
            path,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(3.0, 4.0),
                Point2::new(3.0, 0.0)
            ]
        );
        assert_relative_eq!(report.path_length(FootSide::Left), 9.0);
        assert_eq!(report.path_length(FootSide::Right), 0.0);
    }

    #[test]
    fn test_peak_force() {
        let report = sample();
        assert_eq!(report.peak_force(FootSide::Left), Some(6.0));
        assert_eq!(TrajectoryReport::default().peak_force(FootSide::Left), None);
    }

    #[test]
    fn test_success_percent() {
        let report = sample();
        assert!(report.has_failures());
        assert_relative_eq!(report.success_percent(), 100.0 * 5.0 / 6.0);
    }

    #[test]
    fn test_record_failures_sorted() {
        let mut report = sample();
        report.record_failures([
            FrameFailure::new(Timestamp::new("1"), FootSide::Right, "no pressure row"),
            FrameFailure::new(Timestamp::new("1"), FootSide::Left, "no pressure row"),
        ]);
        let keys: Vec<(&str, FootSide)> = report
            .failures
            .iter()
            .map(|f| (f.timestamp.as_str(), f.side))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("1", FootSide::Left),
                ("1", FootSide::Right),
                ("2", FootSide::Right)
            ]
        );
    }

    #[test]
    fn test_display() {
        let text = format!("{}", sample());
        assert!(text.contains("Frames analyzed: 5"));
        assert!(text.contains("Frames failed: 1"));
        assert!(text.contains("left: 4 frames"));
    }
}
