//! Error types for layout generation.

use thiserror::Error;

/// Result type alias for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Errors that can occur while generating a sensor layout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// Anchor has a `NaN` or infinite coordinate.
    #[error("non-finite anchor: ({x}, {y})")]
    NonFiniteAnchor {
        /// Anchor x coordinate.
        x: f64,
        /// Anchor y coordinate.
        y: f64,
    },

    /// Rectangle size is non-finite or not positive.
    #[error("invalid rectangle size: {width} x {height}")]
    InvalidSize {
        /// Rectangle width.
        width: f64,
        /// Rectangle height.
        height: f64,
    },

    /// Grid interval is non-finite or not positive.
    #[error("invalid interval: {0}")]
    InvalidInterval(f64),
}

impl LayoutError {
    /// Creates a non-finite anchor error.
    #[must_use]
    pub const fn non_finite_anchor(x: f64, y: f64) -> Self {
        Self::NonFiniteAnchor { x, y }
    }

    /// Creates an invalid size error.
    #[must_use]
    pub const fn invalid_size(width: f64, height: f64) -> Self {
        Self::InvalidSize { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LayoutError::non_finite_anchor(f64::NAN, 1.0);
        assert!(format!("{err}").contains("non-finite anchor"));

        let err = LayoutError::invalid_size(-12.0, 6.0);
        assert!(format!("{err}").contains("-12"));

        let err = LayoutError::InvalidInterval(0.0);
        assert!(format!("{err}").contains("interval"));
    }
}
