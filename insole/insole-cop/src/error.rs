//! Error types for COP analysis.

use thiserror::Error;

/// Result type alias for COP operations.
pub type CopResult<T> = Result<T, CopError>;

/// Errors that can occur during COP analysis.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CopError {
    /// Paired sequences have different lengths.
    #[error("shape mismatch: {pressures} pressures for {paired} {what}")]
    ShapeMismatch {
        /// Number of pressure values.
        pressures: usize,
        /// Number of paired values.
        paired: usize,
        /// What the pressures were paired with.
        what: &'static str,
    },

    /// A pressure or coordinate is `NaN` or infinite.
    #[error("non-finite {what} at sensor index {index}")]
    NonFiniteInput {
        /// Sensor index in flat order.
        index: usize,
        /// Which input was non-finite.
        what: &'static str,
    },

    /// A sensor lies exactly on the COP, so `F/d` is undefined.
    #[error("zero distance singularity: sensor index {index} coincides with the COP")]
    ZeroDistanceSingularity {
        /// Sensor index in flat order.
        index: usize,
    },

    /// The `Σ F/d` denominator vanished for a loaded foot.
    #[error("degenerate weights: {0}")]
    DegenerateWeights(String),
}

impl CopError {
    /// Create a shape mismatch between pressures and coordinates.
    #[must_use]
    pub const fn coordinate_mismatch(pressures: usize, coordinates: usize) -> Self {
        Self::ShapeMismatch {
            pressures,
            paired: coordinates,
            what: "coordinates",
        }
    }

    /// Create a shape mismatch between pressures and distances.
    #[must_use]
    pub const fn distance_mismatch(pressures: usize, distances: usize) -> Self {
        Self::ShapeMismatch {
            pressures,
            paired: distances,
            what: "distances",
        }
    }

    /// Create a degenerate weights error.
    #[must_use]
    pub fn degenerate_weights(details: impl Into<String>) -> Self {
        Self::DegenerateWeights(details.into())
    }
}
