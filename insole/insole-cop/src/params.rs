//! Parameters for COP analysis.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What to do when a sensor lies exactly on the COP while computing F_COP.
///
/// A zero distance makes the `F/d` terms undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ZeroDistancePolicy {
    /// Fail with [`CopError::ZeroDistanceSingularity`](crate::CopError::ZeroDistanceSingularity).
    #[default]
    Reject,

    /// Leave coincident sensors out of both sums.
    ExcludeCoincident,

    /// Use the limit as the coincident distances go to zero.
    ///
    /// The coincident sensors dominate both sums, so
    /// `F_COP → Σ F² / Σ F` over the coincident sensors. If they carry no
    /// pressure the regular formula over the other sensors is used.
    Limit,
}

/// Parameters for COP analysis.
///
/// # Example
///
/// ```
/// use insole_cop::{CopParams, ZeroDistancePolicy};
///
/// let params = CopParams::default();
/// assert_eq!(params.zero_distance, ZeroDistancePolicy::Reject);
/// assert!(params.require_finite);
///
/// let lenient = CopParams::default().zero_distance(ZeroDistancePolicy::Limit);
/// assert_eq!(lenient.zero_distance, ZeroDistancePolicy::Limit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CopParams {
    /// Treatment of sensors lying exactly on the COP.
    pub zero_distance: ZeroDistancePolicy,

    /// Reject frames with `NaN` or infinite pressures or coordinates.
    pub require_finite: bool,
}

impl Default for CopParams {
    fn default() -> Self {
        Self {
            zero_distance: ZeroDistancePolicy::Reject,
            require_finite: true,
        }
    }
}

impl CopParams {
    /// Set the zero-distance policy.
    #[must_use]
    pub const fn zero_distance(mut self, policy: ZeroDistancePolicy) -> Self {
        self.zero_distance = policy;
        self
    }

    /// Set whether non-finite inputs are rejected.
    #[must_use]
    pub const fn require_finite(mut self, require: bool) -> Self {
        self.require_finite = require;
        self
    }
}
