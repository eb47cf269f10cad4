//! Center-of-pressure analysis for pressure insoles.
//!
//! This crate turns one foot's sensor pressures and positions into the
//! quantities used for gait analysis:
//!
//! # Features
//!
//! - **Center of pressure**: pressure-weighted centroid of the sensors
//! - **Distances**: Euclidean distance from every sensor to the COP
//! - **Equivalent force**: `F_COP = Σ(F²/d) / Σ(F/d)`, the load concentrated
//!   at the COP, with an explicit [`ZeroDistancePolicy`]
//! - **Trajectories**: every frame of a session analyzed in parallel, with
//!   failing frames logged and reported instead of aborting the run
//!
//! # Algorithm
//!
//! For pressures `F[i]` at positions `p[i]`:
//!
//! 1. `cop = Σ F[i]·p[i] / Σ F[i]`, or `(0, 0)` when the foot is unloaded
//! 2. `d[i] = |p[i] - cop|`
//! 3. `F_COP = Σ F[i]²/d[i] / Σ F[i]/d[i]`
//!
//! # Layer 0 Crate
//!
//! This crate is pure computation with no I/O. It can be used in:
//! - CLI tools
//! - Offline gait analysis
//! - Servers
//!
//! # Example
//!
//! ```
//! use insole_cop::{center_of_pressure, equivalent_force, sensor_distances, ZeroDistancePolicy};
//! use insole_types::Point2;
//!
//! let pressures = [10.0, 0.0, 0.0, 0.0, 0.0, 0.0];
//! let coords: Vec<Point2<f64>> = (1..=6).map(|i| Point2::new(f64::from(i), f64::from(i))).collect();
//!
//! // All weight on the first sensor
//! let cop = center_of_pressure(&pressures, &coords).unwrap();
//! assert_eq!(cop.position, Point2::new(1.0, 1.0));
//!
//! let distances = sensor_distances(&coords, &cop.position);
//! assert_eq!(distances.coincident(), vec![0]);
//!
//! // The loaded sensor sits on the COP, so only the limit policy is defined
//! let f_cop = equivalent_force(&pressures, distances.as_slice(), ZeroDistancePolicy::Limit).unwrap();
//! assert!((f_cop - 10.0).abs() < 1e-12);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod analysis;
mod cop;
mod distance;
mod error;
mod force;
mod params;
mod result;
mod trajectory;

// Re-export main types and functions
pub use analysis::{analyze_frame, analyze_readings};
pub use cop::{CenterOfPressure, center_of_pressure};
pub use distance::{DistanceSet, sensor_distances};
pub use error::{CopError, CopResult};
pub use force::equivalent_force;
pub use params::{CopParams, ZeroDistancePolicy};
pub use result::{FrameAnalysis, FrameFailure, TrajectoryPoint, TrajectoryReport};
pub use trajectory::{TimedFrame, analyze_trajectory};
