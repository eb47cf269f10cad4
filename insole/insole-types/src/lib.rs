//! Shared types for pressure-insole analysis.
//!
//! This crate provides the value types passed between the insole crates:
//! - `insole-layout` (sensor placement from a rectangle anchor)
//! - `insole-cop` (center of pressure, distances, equivalent force)
//! - `insole-io` (CSV ingestion and frame assembly)
//!
//! # Layer 0 Crate
//!
//! This crate has no I/O and no global state. It can be used in:
//! - CLI tools
//! - Offline gait analysis
//! - Servers
//!
//! # Types
//!
//! - [`FootSide`] - Left or right foot
//! - [`Zone`] - Anatomical sensor zone (forefoot, midfoot, heel)
//! - [`SensorId`] - One of the sixteen insole sensors, `C1`..`C16`
//! - [`FootLayout`] - Sensor positions for one foot, grouped by zone
//! - [`FootFrame`] - One foot at one instant: a layout plus aligned pressures
//! - [`Timestamp`] - Shared timestamp of a group of recorded rows
//!
//! # Coordinates
//!
//! Positions are [`Point2`] values in grid units. The grid spacing is the
//! layout `interval`; larger `y` is further toward the toes.
//!
//! # Example
//!
//! ```
//! use insole_types::{SensorId, Zone};
//!
//! assert_eq!(SensorId::C9.zone(), Zone::Frontend);
//! assert_eq!(Zone::Backend.sensor_count(), 4);
//! assert_eq!(SensorId::C14.column_name(), "sensor14");
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod frame;
mod layout;
mod sensor;
mod side;
mod timestamp;
mod zone;

pub use error::{InsoleError, InsoleResult};
pub use frame::FootFrame;
pub use layout::{FootLayout, InsoleRect, SensorPosition};
pub use sensor::{SENSOR_COUNT, SensorId};
pub use side::FootSide;
pub use timestamp::Timestamp;
pub use zone::Zone;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Vector2};
