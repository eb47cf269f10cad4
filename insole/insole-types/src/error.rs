//! Error types for insole data.

use thiserror::Error;

/// Result type alias for insole type construction.
pub type InsoleResult<T> = Result<T, InsoleError>;

/// Errors that can occur when building insole values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InsoleError {
    /// Pressure and coordinate sequences have different lengths.
    #[error("shape mismatch: {pressures} pressures for {coordinates} coordinates")]
    ShapeMismatch {
        /// Number of pressure values supplied.
        pressures: usize,
        /// Number of sensor coordinates supplied.
        coordinates: usize,
    },

    /// Sensor number outside `1..=16`.
    #[error("invalid sensor number: {0} (expected 1..=16)")]
    InvalidSensorNumber(u8),

    /// Sensor label that names no known sensor.
    #[error("invalid sensor label: {0}")]
    InvalidSensorLabel(String),

    /// Foot indicator other than `0` (left) or `1` (right).
    #[error("invalid foot indicator: {0} (expected 0 for left or 1 for right)")]
    InvalidFootIndicator(String),

    /// Zone name that names no known zone.
    #[error("invalid zone: {0}")]
    InvalidZone(String),
}

impl InsoleError {
    /// Creates a shape mismatch error.
    #[must_use]
    pub const fn shape_mismatch(pressures: usize, coordinates: usize) -> Self {
        Self::ShapeMismatch {
            pressures,
            coordinates,
        }
    }

    /// Creates an invalid foot indicator error.
    #[must_use]
    pub fn invalid_foot(indicator: impl Into<String>) -> Self {
        Self::InvalidFootIndicator(indicator.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_shape_mismatch() {
        let err = InsoleError::shape_mismatch(16, 12);
        let msg = format!("{err}");
        assert!(msg.contains("16"));
        assert!(msg.contains("12"));
    }

    #[test]
    fn error_invalid_foot() {
        let err = InsoleError::invalid_foot("2");
        let msg = format!("{err}");
        assert!(msg.contains("foot indicator"));
        assert!(msg.contains('2'));
    }

    #[test]
    fn error_invalid_sensor() {
        let err = InsoleError::InvalidSensorNumber(17);
        assert!(err.to_string().contains("17"));

        let err = InsoleError::InvalidSensorLabel("C99".to_string());
        assert!(err.to_string().contains("C99"));
    }
}
