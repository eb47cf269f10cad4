//! Equivalent force concentrated at the COP.

use crate::error::{CopError, CopResult};
use crate::params::ZeroDistancePolicy;

/// Compute `F_COP = Σ(F[i]²/d[i]) / Σ(F[i]/d[i])`.
///
/// Sensors closer to the COP weigh more. A sensor with `d[i] == 0` and no
/// pressure contributes nothing. A loaded sensor with `d[i] == 0` is
/// handled per `policy`. When every pressure is zero the result is `0`.
///
/// # Errors
///
/// - [`CopError::ShapeMismatch`] if the slices differ in length.
/// - [`CopError::ZeroDistanceSingularity`] for a loaded coincident sensor
///   under [`ZeroDistancePolicy::Reject`].
/// - [`CopError::DegenerateWeights`] if the denominator is zero for a loaded
///   foot, e.g. every loaded sensor was excluded.
///
/// # Example
///
/// ```
/// use insole_cop::{equivalent_force, ZeroDistancePolicy};
///
/// // (16/1 + 16/2) / (4/1 + 4/2) = 24 / 6
/// let f = equivalent_force(&[4.0, 4.0], &[1.0, 2.0], ZeroDistancePolicy::Reject).unwrap();
/// assert!((f - 4.0).abs() < 1e-12);
/// ```
#[allow(clippy::float_cmp)]
pub fn equivalent_force(
    pressures: &[f64],
    distances: &[f64],
    policy: ZeroDistancePolicy,
) -> CopResult<f64> {
    if pressures.len() != distances.len() {
        return Err(CopError::distance_mismatch(pressures.len(), distances.len()));
    }

    if pressures.iter().all(|&f| f == 0.0) {
        return Ok(0.0);
    }

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    let mut coincident_sq = 0.0;
    let mut coincident_sum = 0.0;
    let mut coincident_loaded = false;

    for (index, (&f, &d)) in pressures.iter().zip(distances).enumerate() {
        if f == 0.0 {
            continue;
        }
        if d == 0.0 {
            match policy {
                ZeroDistancePolicy::Reject => {
                    return Err(CopError::ZeroDistanceSingularity { index });
                }
                ZeroDistancePolicy::ExcludeCoincident => {}
                ZeroDistancePolicy::Limit => {
                    coincident_loaded = true;
                    coincident_sq += f * f;
                    coincident_sum += f;
                }
            }
            continue;
        }
        numerator += f * f / d;
        denominator += f / d;
    }

    if coincident_loaded {
        if coincident_sum == 0.0 {
            return Err(CopError::degenerate_weights(
                "coincident sensor pressures cancel out",
            ));
        }
        return Ok(coincident_sq / coincident_sum);
    }

    if denominator == 0.0 || !denominator.is_finite() {
        return Err(CopError::degenerate_weights(format!(
            "weight sum is {denominator} for a loaded foot"
        )));
    }

    Ok(numerator / denominator)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_value() {
        let f = equivalent_force(&[4.0, 4.0], &[1.0, 2.0], ZeroDistancePolicy::Reject).unwrap();
        assert_relative_eq!(f, 4.0);
    }

    #[test]
    fn test_single_sensor_gives_its_pressure() {
        let f = equivalent_force(&[7.5], &[3.0], ZeroDistancePolicy::Reject).unwrap();
        assert_relative_eq!(f, 7.5);
    }

    #[test]
    fn test_weighted_toward_near_sensor() {
        // (4/1 + 1/4) / (2/1 + 1/4) = 4.25 / 2.25
        let f = equivalent_force(&[2.0, 1.0], &[1.0, 4.0], ZeroDistancePolicy::Reject).unwrap();
        assert_relative_eq!(f, 4.25 / 2.25);
    }

    #[test]
    fn test_all_zero_is_zero() {
        let f = equivalent_force(&[0.0, 0.0, 0.0], &[0.0, 1.0, 2.0], ZeroDistancePolicy::Reject)
            .unwrap();
        assert_eq!(f, 0.0);
    }

    #[test]
    fn test_shape_mismatch() {
        let err = equivalent_force(&[1.0], &[1.0, 2.0], ZeroDistancePolicy::Reject).unwrap_err();
        assert_eq!(err, CopError::distance_mismatch(1, 2));
    }

    #[test]
    fn test_reject_coincident() {
        let err = equivalent_force(&[1.0, 3.0], &[2.0, 0.0], ZeroDistancePolicy::Reject)
            .unwrap_err();
        assert_eq!(err, CopError::ZeroDistanceSingularity { index: 1 });
    }

    #[test]
    fn test_unloaded_coincident_is_ignored() {
        let f = equivalent_force(&[0.0, 4.0, 4.0], &[0.0, 1.0, 2.0], ZeroDistancePolicy::Reject)
            .unwrap();
        assert_relative_eq!(f, 4.0);
    }

    #[test]
    fn test_exclude_coincident() {
        let f = equivalent_force(
            &[9.0, 4.0, 4.0],
            &[0.0, 1.0, 2.0],
            ZeroDistancePolicy::ExcludeCoincident,
        )
        .unwrap();
        assert_relative_eq!(f, 4.0);
    }

    #[test]
    fn test_exclude_only_loaded_sensor_is_degenerate() {
        let err = equivalent_force(
            &[5.0, 0.0],
            &[0.0, 1.0],
            ZeroDistancePolicy::ExcludeCoincident,
        )
        .unwrap_err();
        assert!(matches!(err, CopError::DegenerateWeights(_)));
    }

    #[test]
    fn test_limit_uses_coincident_sensors() {
        let f = equivalent_force(&[10.0, 3.0], &[0.0, 1.0], ZeroDistancePolicy::Limit).unwrap();
        assert_relative_eq!(f, 10.0);

        // Two coincident sensors: (9 + 1) / (3 + 1)
        let f = equivalent_force(&[3.0, 1.0, 8.0], &[0.0, 0.0, 1.0], ZeroDistancePolicy::Limit)
            .unwrap();
        assert_relative_eq!(f, 2.5);
    }

    #[test]
    fn test_limit_approaches_formula() {
        let exact = equivalent_force(&[10.0, 3.0], &[0.0, 1.0], ZeroDistancePolicy::Limit).unwrap();
        let near = equivalent_force(&[10.0, 3.0], &[1e-9, 1.0], ZeroDistancePolicy::Reject).unwrap();
        assert_relative_eq!(exact, near, epsilon = 1e-6);
    }
}
