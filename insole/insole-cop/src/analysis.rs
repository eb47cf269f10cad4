//! Per-frame COP analysis.
//!
//! Runs the three calculators in order for one foot at one instant:
//! center of pressure, then sensor distances, then equivalent force.

use insole_types::{FootFrame, FootSide, Point2};
use tracing::debug;

use crate::cop::center_of_pressure;
use crate::distance::sensor_distances;
use crate::error::{CopError, CopResult};
use crate::force::equivalent_force;
use crate::params::CopParams;
use crate::result::FrameAnalysis;

/// Analyze index-aligned pressures and sensor positions for one foot.
///
/// # Errors
///
/// Returns an error if the inputs differ in length, contain non-finite
/// values while [`CopParams::require_finite`] is set, or if the
/// equivalent force is undefined under the chosen zero-distance policy.
///
/// # Example
///
/// ```
/// use insole_cop::{analyze_readings, CopParams};
/// use insole_types::{FootSide, Point2};
///
/// let coords = [Point2::new(0.0, 0.0), Point2::new(3.0, 0.0)];
/// let analysis = analyze_readings(FootSide::Left, &[4.0, 4.0], &coords, &CopParams::default()).unwrap();
/// assert_eq!(analysis.cop.position, Point2::new(1.5, 0.0));
/// assert!((analysis.equivalent_force - 4.0).abs() < 1e-12);
/// ```
pub fn analyze_readings(
    side: FootSide,
    pressures: &[f64],
    coordinates: &[Point2<f64>],
    params: &CopParams,
) -> CopResult<FrameAnalysis> {
    if pressures.len() != coordinates.len() {
        return Err(CopError::coordinate_mismatch(
            pressures.len(),
            coordinates.len(),
        ));
    }

    if params.require_finite {
        check_finite(pressures, coordinates)?;
    }

    let cop = center_of_pressure(pressures, coordinates)?;
    let distances = sensor_distances(coordinates, &cop.position);
    let force = equivalent_force(pressures, distances.as_slice(), params.zero_distance)?;

    debug!(
        side = %side,
        total_pressure = cop.total_pressure,
        cop_x = cop.position.x,
        cop_y = cop.position.y,
        equivalent_force = force,
        "Frame analyzed"
    );

    Ok(FrameAnalysis {
        side,
        cop,
        distances,
        equivalent_force: force,
    })
}

/// Analyze one [`FootFrame`].
///
/// # Errors
///
/// Same as [`analyze_readings`].
pub fn analyze_frame(frame: &FootFrame, params: &CopParams) -> CopResult<FrameAnalysis> {
    analyze_readings(
        frame.side(),
        frame.pressures(),
        &frame.coordinates(),
        params,
    )
}

fn check_finite(pressures: &[f64], coordinates: &[Point2<f64>]) -> CopResult<()> {
    if let Some(index) = pressures.iter().position(|f| !f.is_finite()) {
        return Err(CopError::NonFiniteInput {
            index,
            what: "pressure",
        });
    }
    if let Some(index) = coordinates
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(CopError::NonFiniteInput {
            index,
            what: "coordinate",
        });
    }
    Ok(())
}
