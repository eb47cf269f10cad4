//! Per-side layout rules and the generator entry point.

use insole_types::{FootLayout, FootSide, InsoleRect, Point2, SensorPosition, Vector2, Zone};
use tracing::trace;

use crate::error::{LayoutError, LayoutResult};
use crate::params::{CenterZonePolicy, LayoutParams};
use crate::table::{GridOffset, KNOWN_LEFT_CENTER_ANOMALY, LEFT_TABLE, LayoutEntry, RIGHT_TABLE};

/// A fixed sensor placement rule for one foot side.
///
/// Implementations only supply their table; [`LayoutRule::generate`] turns
/// any table into a [`FootLayout`].
pub trait LayoutRule: Send + Sync {
    /// Foot side this rule places sensors for.
    fn side(&self) -> FootSide;

    /// Table rows in emitted order.
    fn table(&self) -> &'static [LayoutEntry];

    /// Offset to use for a row under the given parameters.
    fn offset(&self, entry: &LayoutEntry, params: &LayoutParams) -> GridOffset {
        if params.center_zone == CenterZonePolicy::Corrected
            && KNOWN_LEFT_CENTER_ANOMALY.matches(self.side(), entry)
        {
            KNOWN_LEFT_CENTER_ANOMALY.corrected
        } else {
            entry.offset
        }
    }

    /// Place every sensor relative to `anchor`, the rectangle's top-left corner.
    ///
    /// # Errors
    ///
    /// Returns an error if the anchor is not finite or if `params` fails
    /// [`LayoutParams::validate`]. Any finite anchor is accepted, including
    /// negative coordinates.
    fn generate(&self, anchor: Point2<f64>, params: &LayoutParams) -> LayoutResult<FootLayout> {
        if !anchor.x.is_finite() || !anchor.y.is_finite() {
            return Err(LayoutError::non_finite_anchor(anchor.x, anchor.y));
        }
        params.validate()?;

        let mut frontend = Vec::with_capacity(Zone::Frontend.sensor_count());
        let mut center = Vec::with_capacity(Zone::Center.sensor_count());
        let mut backend = Vec::with_capacity(Zone::Backend.sensor_count());

        for entry in self.table() {
            let offset = self.offset(entry, params);
            let step = Vector2::new(f64::from(offset.dx), f64::from(offset.dy)) * params.interval;
            let placed = SensorPosition::new(entry.sensor, anchor + step);
            match entry.zone {
                Zone::Frontend => frontend.push(placed),
                Zone::Center => center.push(placed),
                Zone::Backend => backend.push(placed),
            }
        }

        trace!(
            side = %self.side(),
            x = anchor.x,
            y = anchor.y,
            "Generated sensor layout"
        );

        Ok(FootLayout::new(
            self.side(),
            InsoleRect::new(anchor, params.width, params.height),
            frontend,
            center,
            backend,
        ))
    }
}

/// Placement rule for the left insole.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeftLayout;

impl LayoutRule for LeftLayout {
    fn side(&self) -> FootSide {
        FootSide::Left
    }

    fn table(&self) -> &'static [LayoutEntry] {
        &LEFT_TABLE
    }
}

/// Placement rule for the right insole.
#[derive(Debug, Clone, Copy, Default)]
pub struct RightLayout;

impl LayoutRule for RightLayout {
    fn side(&self) -> FootSide {
        FootSide::Right
    }

    fn table(&self) -> &'static [LayoutEntry] {
        &RIGHT_TABLE
    }
}

/// Returns the placement rule for a foot side.
#[must_use]
pub fn rule_for(side: FootSide) -> &'static dyn LayoutRule {
    match side {
        FootSide::Left => &LeftLayout,
        FootSide::Right => &RightLayout,
    }
}

/// Generate the sensor layout for one foot.
///
/// # Arguments
///
/// * `side` - Which foot
/// * `anchor` - Top-left corner of the insole's bounding rectangle
/// * `params` - Grid interval, rectangle size and anomaly policy
///
/// # Errors
///
/// See [`LayoutRule::generate`].
///
/// # Example
///
/// ```
/// use insole_layout::{generate_layout, LayoutParams};
/// use insole_types::{FootSide, Point2, SensorId, Zone};
///
/// let right = generate_layout(FootSide::Right, Point2::new(0.0, 6.0), &LayoutParams::default())
///     .unwrap();
///
/// let heel: Vec<SensorId> = right.zone(Zone::Backend).iter().map(|s| s.sensor).collect();
/// assert_eq!(heel, vec![SensorId::C7, SensorId::C15, SensorId::C8, SensorId::C16]);
/// assert_eq!(right.position_of(SensorId::C1), Some(Point2::new(3.0, 2.0)));
/// ```
pub fn generate_layout(
    side: FootSide,
    anchor: Point2<f64>,
    params: &LayoutParams,
) -> LayoutResult<FootLayout> {
    rule_for(side).generate(anchor, params)
}
