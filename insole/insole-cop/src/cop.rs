//! Pressure-weighted center of pressure.

use insole_types::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{CopError, CopResult};

/// Center of pressure of one foot at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CenterOfPressure {
    /// COP position; `(0, 0)` when the foot is unloaded.
    pub position: Point2<f64>,
    /// Sum of all sensor pressures.
    pub total_pressure: f64,
}

impl CenterOfPressure {
    /// The sentinel result for an unloaded foot.
    #[must_use]
    pub fn unloaded() -> Self {
        Self {
            position: Point2::origin(),
            total_pressure: 0.0,
        }
    }

    /// Whether the foot carried no pressure.
    ///
    /// The position of an unloaded result is the `(0, 0)` sentinel, not a
    /// measured point.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_unloaded(&self) -> bool {
        self.total_pressure == 0.0
    }
}

/// Compute the center of pressure of index-aligned pressures and positions.
///
/// `cop = Σ F[i]·p[i] / Σ F[i]`. When the total pressure is exactly zero
/// (including an empty input) the `(0, 0)` sentinel is returned.
///
/// # Errors
///
/// Returns [`CopError::ShapeMismatch`] if the slices differ in length.
///
/// # Example
///
/// ```
/// use insole_cop::center_of_pressure;
/// use insole_types::Point2;
///
/// let coords = [Point2::new(0.0, 0.0), Point2::new(4.0, 0.0)];
/// let cop = center_of_pressure(&[1.0, 3.0], &coords).unwrap();
/// assert_eq!(cop.position, Point2::new(3.0, 0.0));
/// assert_eq!(cop.total_pressure, 4.0);
/// ```
#[allow(clippy::float_cmp)]
pub fn center_of_pressure(
    pressures: &[f64],
    coordinates: &[Point2<f64>],
) -> CopResult<CenterOfPressure> {
    if pressures.len() != coordinates.len() {
        return Err(CopError::coordinate_mismatch(
            pressures.len(),
            coordinates.len(),
        ));
    }

    let total: f64 = pressures.iter().sum();
    if total == 0.0 {
        return Ok(CenterOfPressure::unloaded());
    }

    let (sx, sy) = pressures
        .iter()
        .zip(coordinates)
        .fold((0.0, 0.0), |(sx, sy), (&f, p)| (f.mul_add(p.x, sx), f.mul_add(p.y, sy)));

    Ok(CenterOfPressure {
        position: Point2::new(sx / total, sy / total),
        total_pressure: total,
    })
}
