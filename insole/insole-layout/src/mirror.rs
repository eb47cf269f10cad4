//! Left/right mirror relationship between layouts.

use insole_types::{FootLayout, Point2, SensorId};

/// Distance, in grid steps, from a layout anchor to its mirror axis.
///
/// The forefoot reference sits 3 steps right of the anchor and the forefoot
/// row spans 2 steps, so both tables are symmetric about `dx = 4`.
pub const MIRROR_AXIS_STEPS: i32 = 4;

/// Vertical line across which a left and a right layout mirror each other.
///
/// For a left layout anchored at `left_anchor` and a right layout anchored
/// at `right_anchor` on the same row, every sensor `s` satisfies
/// `left(s).x + right(s).x == 2 * axis` and `left(s).y == right(s).y`,
/// except the row named by
/// [`KNOWN_LEFT_CENTER_ANOMALY`](crate::KNOWN_LEFT_CENTER_ANOMALY) under the
/// recorded policy.
///
/// # Example
///
/// ```
/// use insole_layout::mirror_axis;
/// use insole_types::Point2;
///
/// let axis = mirror_axis(Point2::new(0.0, 6.0), Point2::new(14.0, 6.0), 1.0);
/// assert!((axis - 11.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn mirror_axis(left_anchor: Point2<f64>, right_anchor: Point2<f64>, interval: f64) -> f64 {
    f64::midpoint(left_anchor.x, right_anchor.x) + f64::from(MIRROR_AXIS_STEPS) * interval
}

/// Sensors whose left and right positions are not mirror images.
///
/// Each sensor of `left` is looked up in `right` and compared across `axis`
/// within `tolerance`. Sensors missing from `right` are reported too.
#[must_use]
pub fn mirror_mismatches(
    left: &FootLayout,
    right: &FootLayout,
    axis: f64,
    tolerance: f64,
) -> Vec<SensorId> {
    left.iter()
        .filter(|l| match right.position_of(l.sensor) {
            Some(r) => {
                let mirrored_x = 2.0 * axis - r.x;
                (l.position.x - mirrored_x).abs() > tolerance
                    || (l.position.y - r.y).abs() > tolerance
            }
            None => true,
        })
        .map(|l| l.sensor)
        .collect()
}
