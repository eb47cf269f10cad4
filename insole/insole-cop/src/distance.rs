//! Sensor-to-COP distances.

use insole_types::Point2;
use nalgebra::distance;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Distance from each sensor to the COP, in sensor order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DistanceSet(Vec<f64>);

impl DistanceSet {
    /// Distances as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of distances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Distance of the sensor at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Index and distance of the sensor closest to the COP.
    #[must_use]
    pub fn nearest(&self) -> Option<(usize, f64)> {
        self.0
            .iter()
            .copied()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
    }

    /// Indices of sensors lying exactly on the COP.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn coincident(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, d)| *d == 0.0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Consume the set into its distances.
    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

impl From<Vec<f64>> for DistanceSet {
    fn from(distances: Vec<f64>) -> Self {
        Self(distances)
    }
}

/// Euclidean distance from every sensor to `cop`, preserving input order.
///
/// # Example
///
/// ```
/// use insole_cop::sensor_distances;
/// use insole_types::Point2;
///
/// let coords = [Point2::new(3.0, 4.0), Point2::new(0.0, 0.0)];
/// let distances = sensor_distances(&coords, &Point2::origin());
/// assert_eq!(distances.as_slice(), &[5.0, 0.0]);
/// ```
#[must_use]
pub fn sensor_distances(coordinates: &[Point2<f64>], cop: &Point2<f64>) -> DistanceSet {
    DistanceSet(coordinates.iter().map(|p| distance(p, cop)).collect())
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distances_in_order() {
        let coords = [
            Point2::new(1.0, 1.0),
            Point2::new(4.0, 5.0),
            Point2::new(1.0, -2.0),
        ];
        let d = sensor_distances(&coords, &Point2::new(1.0, 1.0));
        assert_eq!(d.len(), 3);
        assert_eq!(d.get(0), Some(0.0));
        assert_relative_eq!(d.get(1).unwrap(), 5.0);
        assert_relative_eq!(d.get(2).unwrap(), 3.0);
        assert_eq!(d.get(3), None);
    }

    #[test]
    fn test_coincident_and_nearest() {
        let coords = [Point2::new(2.0, 0.0), Point2::new(0.0, 0.0), Point2::new(0.0, 1.0)];
        let d = sensor_distances(&coords, &Point2::origin());
        assert_eq!(d.coincident(), vec![1]);
        assert_eq!(d.nearest(), Some((1, 0.0)));
    }

    #[test]
    fn test_empty() {
        let d = sensor_distances(&[], &Point2::origin());
        assert!(d.is_empty());
        assert_eq!(d.nearest(), None);
        assert!(d.coincident().is_empty());
    }

    #[test]
    fn test_into_vec() {
        let d = DistanceSet::from(vec![1.0, 2.0]);
        assert_eq!(d.into_vec(), vec![1.0, 2.0]);
    }
}
