//! Per-foot value pairs.

use insole_types::FootSide;

/// One optional value per foot.
///
/// The first value recorded for a foot is kept; later ones are ignored.
///
/// # Example
///
/// ```
/// use insole_io::FootPair;
/// use insole_types::FootSide;
///
/// let mut pair = FootPair::default();
/// assert!(pair.insert_first(FootSide::Left, 1));
/// assert!(!pair.insert_first(FootSide::Left, 2));
/// assert_eq!(pair.get(FootSide::Left), Some(&1));
/// assert_eq!(pair.get(FootSide::Right), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FootPair<T> {
    /// Left foot value.
    pub left: Option<T>,
    /// Right foot value.
    pub right: Option<T>,
}

impl<T> Default for FootPair<T> {
    fn default() -> Self {
        Self {
            left: None,
            right: None,
        }
    }
}

impl<T> FootPair<T> {
    /// Value for one foot.
    #[must_use]
    pub const fn get(&self, side: FootSide) -> Option<&T> {
        match side {
            FootSide::Left => self.left.as_ref(),
            FootSide::Right => self.right.as_ref(),
        }
    }

    /// Store a value for `side` unless one is already present.
    ///
    /// Returns `true` if the value was stored.
    pub fn insert_first(&mut self, side: FootSide, value: T) -> bool {
        let slot = match side {
            FootSide::Left => &mut self.left,
            FootSide::Right => &mut self.right,
        };
        if slot.is_some() {
            return false;
        }
        *slot = Some(value);
        true
    }
}
