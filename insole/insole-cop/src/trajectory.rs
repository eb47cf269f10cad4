//! Session-wide COP trajectories.
//!
//! Every (timestamp, foot) frame is independent, so frames are analyzed in
//! parallel and the results sorted afterwards.

use insole_types::{FootFrame, Timestamp};
use rayon::prelude::*;
use tracing::{info, warn};

use crate::analysis::analyze_frame;
use crate::params::CopParams;
use crate::result::{FrameFailure, TrajectoryPoint, TrajectoryReport};

/// A foot frame tagged with its timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedFrame {
    /// Timestamp of the frame.
    pub timestamp: Timestamp,
    /// The frame.
    pub frame: FootFrame,
}

impl TimedFrame {
    /// Tag a frame with a timestamp.
    #[must_use]
    pub fn new(timestamp: impl Into<Timestamp>, frame: FootFrame) -> Self {
        Self {
            timestamp: timestamp.into(),
            frame,
        }
    }
}

/// Analyze every frame of a session.
///
/// A frame that fails is logged, recorded in
/// [`TrajectoryReport::failures`], and does not stop the run. Results are
/// sorted by timestamp, then left before right.
///
/// # Example
///
/// ```
/// use insole_cop::{analyze_trajectory, CopParams, TimedFrame};
/// use insole_layout::{generate_layout, LayoutParams};
/// use insole_types::{FootFrame, FootSide, Point2, SENSOR_COUNT};
///
/// let layout = generate_layout(FootSide::Right, Point2::new(0.0, 6.0), &LayoutParams::default()).unwrap();
/// let frame = FootFrame::new(layout, vec![1.0; SENSOR_COUNT]).unwrap();
///
/// let report = analyze_trajectory(&[TimedFrame::new("0", frame)], &CopParams::default());
/// assert_eq!(report.points.len(), 1);
/// assert!(report.failures.is_empty());
/// ```
#[must_use]
pub fn analyze_trajectory(frames: &[TimedFrame], params: &CopParams) -> TrajectoryReport {
    info!(frames = frames.len(), "Starting COP trajectory analysis");

    let results: Vec<Result<TrajectoryPoint, FrameFailure>> = frames
        .par_iter()
        .map(|timed| {
            analyze_frame(&timed.frame, params)
                .map(|analysis| TrajectoryPoint {
                    timestamp: timed.timestamp.clone(),
                    analysis,
                })
                .map_err(|e| {
                    warn!(
                        timestamp = %timed.timestamp,
                        side = %timed.frame.side(),
                        error = %e,
                        "Frame analysis failed"
                    );
                    FrameFailure::new(timed.timestamp.clone(), timed.frame.side(), e.to_string())
                })
        })
        .collect();

    let mut report = TrajectoryReport::default();
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(point) => report.points.push(point),
            Err(failure) => failures.push(failure),
        }
    }

    report
        .points
        .sort_by(|a, b| (&a.timestamp, a.analysis.side).cmp(&(&b.timestamp, b.analysis.side)));
    report.record_failures(failures);

    info!(
        analyzed = report.points.len(),
        failed = report.failures.len(),
        "COP trajectory analysis complete"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use insole_layout::{LayoutParams, generate_layout};
    use insole_types::{FootSide, Point2, SENSOR_COUNT};

    fn frame(side: FootSide, pressures: Vec<f64>) -> FootFrame {
        let layout = generate_layout(side, Point2::new(0.0, 6.0), &LayoutParams::default()).unwrap();
        FootFrame::new(layout, pressures).unwrap()
    }

    #[test]
    fn test_sorted_by_timestamp_then_side() {
        let frames = vec![
            TimedFrame::new("10", frame(FootSide::Right, vec![1.0; SENSOR_COUNT])),
            TimedFrame::new("2", frame(FootSide::Right, vec![1.0; SENSOR_COUNT])),
            TimedFrame::new("2", frame(FootSide::Left, vec![1.0; SENSOR_COUNT])),
        ];
        let report = analyze_trajectory(&frames, &CopParams::default());

        let order: Vec<(&str, FootSide)> = report
            .points
            .iter()
            .map(|p| (p.timestamp.as_str(), p.analysis.side))
            .collect();
        assert_eq!(
            order,
            vec![
                ("2", FootSide::Left),
                ("2", FootSide::Right),
                ("10", FootSide::Right)
            ]
        );
    }

    #[test]
    fn test_failing_frame_is_recorded() {
        let mut single = vec![0.0; SENSOR_COUNT];
        single[3] = 8.0;
        let frames = vec![
            TimedFrame::new("0", frame(FootSide::Left, vec![1.0; SENSOR_COUNT])),
            TimedFrame::new("1", frame(FootSide::Left, single)),
        ];
        let report = analyze_trajectory(&frames, &CopParams::default());

        assert_eq!(report.points.len(), 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].timestamp, Timestamp::new("1"));
        assert_eq!(report.failures[0].side, FootSide::Left);
        assert!(report.failures[0].reason.contains("zero distance"));
    }

    #[test]
    fn test_empty_session() {
        let report = analyze_trajectory(&[], &CopParams::default());
        assert!(report.is_empty());
    }
}
