//! Parameters for layout generation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};

/// How to emit the sixth midfoot entry of the left layout.
///
/// Recorded datasets were processed with a left layout whose sixth center
/// entry repeats the position of `C5` instead of `C6`
/// (see [`KNOWN_LEFT_CENTER_ANOMALY`](crate::KNOWN_LEFT_CENTER_ANOMALY)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CenterZonePolicy {
    /// Reproduce the recorded layout, `C6` placed at `C5`'s position.
    #[default]
    Recorded,
    /// Place `C6` at its own computed position.
    Corrected,
}

/// Parameters for sensor layout generation.
///
/// The defaults are the fixed insole geometry: a 12 × 6 rectangle and a
/// one-unit sensor grid.
///
/// # Example
///
/// ```
/// use insole_layout::{CenterZonePolicy, LayoutParams};
///
/// let params = LayoutParams::default();
/// assert!((params.interval - 1.0).abs() < 1e-10);
/// assert!((params.width - 12.0).abs() < 1e-10);
/// assert!((params.height - 6.0).abs() < 1e-10);
/// assert_eq!(params.center_zone, CenterZonePolicy::Recorded);
///
/// let corrected = LayoutParams::default().center_zone(CenterZonePolicy::Corrected);
/// assert_eq!(corrected.center_zone, CenterZonePolicy::Corrected);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutParams {
    /// Spacing between adjacent sensor grid positions.
    pub interval: f64,

    /// Width of the insole's bounding rectangle.
    pub width: f64,

    /// Height of the insole's bounding rectangle.
    pub height: f64,

    /// Treatment of the left midfoot anomaly.
    pub center_zone: CenterZonePolicy,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            interval: 1.0,
            width: 12.0,
            height: 6.0,
            center_zone: CenterZonePolicy::Recorded,
        }
    }
}

impl LayoutParams {
    /// Set the grid interval.
    #[must_use]
    pub const fn interval(mut self, interval: f64) -> Self {
        self.interval = interval;
        self
    }

    /// Set the bounding rectangle size.
    #[must_use]
    pub const fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the midfoot anomaly policy.
    #[must_use]
    pub const fn center_zone(mut self, policy: CenterZonePolicy) -> Self {
        self.center_zone = policy;
        self
    }

    /// Check that size and interval are finite and positive.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidSize`] or [`LayoutError::InvalidInterval`].
    pub fn validate(&self) -> LayoutResult<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.width) || !positive(self.height) {
            return Err(LayoutError::invalid_size(self.width, self.height));
        }
        if !positive(self.interval) {
            return Err(LayoutError::InvalidInterval(self.interval));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = LayoutParams::default();
        assert!((params.interval - 1.0).abs() < f64::EPSILON);
        assert!((params.width - 12.0).abs() < f64::EPSILON);
        assert!((params.height - 6.0).abs() < f64::EPSILON);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let params = LayoutParams::default()
            .interval(0.5)
            .size(24.0, 12.0)
            .center_zone(CenterZonePolicy::Corrected);
        assert!((params.interval - 0.5).abs() < f64::EPSILON);
        assert!((params.width - 24.0).abs() < f64::EPSILON);
        assert!((params.height - 12.0).abs() < f64::EPSILON);
        assert_eq!(params.center_zone, CenterZonePolicy::Corrected);
    }

    #[test]
    fn test_invalid_size() {
        let params = LayoutParams::default().size(-12.0, 6.0);
        assert!(matches!(
            params.validate(),
            Err(LayoutError::InvalidSize { .. })
        ));

        let params = LayoutParams::default().size(12.0, f64::INFINITY);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_invalid_interval() {
        assert!(LayoutParams::default().interval(0.0).validate().is_err());
        assert!(LayoutParams::default().interval(f64::NAN).validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_deserialization() {
        let params: LayoutParams =
            serde_json::from_str(r#"{"center_zone": "corrected"}"#).unwrap();
        assert_eq!(params.center_zone, CenterZonePolicy::Corrected);
        assert!((params.width - 12.0).abs() < f64::EPSILON);
    }
}
