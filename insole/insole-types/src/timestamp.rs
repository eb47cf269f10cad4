//! Sample timestamps.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The timestamp a group of recorded rows shares.
///
/// Recorded tables do not agree on a timestamp format (epoch seconds,
/// sample counters, ISO date strings), so the original text is kept for
/// display. A timestamp whose text is a finite number is keyed by that
/// number: `0.10` and `0.1` are the same instant. Anything else is keyed
/// by its text. Numeric timestamps sort before textual ones.
///
/// # Example
///
/// ```
/// use insole_types::Timestamp;
///
/// let mut ts = vec![Timestamp::new("10"), Timestamp::new("9"), Timestamp::new("9.5")];
/// ts.sort();
/// assert_eq!(ts, vec![Timestamp::new("9"), Timestamp::new("9.5"), Timestamp::new("10")]);
///
/// assert!(Timestamp::new("2024-05-01T10:00:00") < Timestamp::new("2024-05-01T10:00:01"));
/// assert_eq!(Timestamp::new("0.10"), Timestamp::new("0.1"));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Timestamp(String);

impl Timestamp {
    /// Creates a timestamp; surrounding whitespace is trimmed.
    #[must_use]
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_string())
    }

    /// Returns the timestamp text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the timestamp as a number, if it is one.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.0.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    /// The numeric key, with `-0` folded into `0` (`-0 + 0` is `+0`).
    fn numeric_key(&self) -> Option<f64> {
        self.as_f64().map(|v| v + 0.0)
    }
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Timestamp {}

impl Hash for Timestamp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.numeric_key() {
            Some(v) => {
                0u8.hash(state);
                v.to_bits().hash(state);
            }
            None => {
                1u8.hash(state);
                self.0.hash(state);
            }
        }
    }
}

impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric_key(), other.numeric_key()) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Timestamp {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Timestamp {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(ts: &Timestamp) -> u64 {
        let mut hasher = DefaultHasher::new();
        ts.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn timestamp_numeric_order() {
        assert!(Timestamp::new("2") < Timestamp::new("10"));
        assert!(Timestamp::new("-1.5") < Timestamp::new("0"));
    }

    #[test]
    fn timestamp_text_order() {
        assert!(Timestamp::new("a") < Timestamp::new("b"));
        assert!(Timestamp::new("99") < Timestamp::new("a"));
    }

    #[test]
    fn timestamp_equal_values_same_key() {
        let a = Timestamp::new("0.10");
        let b = Timestamp::new("0.1");
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(a.as_str(), "0.10");

        assert_eq!(Timestamp::new("-0"), Timestamp::new("0"));
        assert_eq!(hash_of(&Timestamp::new("-0")), hash_of(&Timestamp::new("0")));
        assert_eq!(Timestamp::new("1e3"), Timestamp::new("1000"));
    }

    #[test]
    fn timestamp_text_keys_stay_distinct() {
        assert_ne!(Timestamp::new("NaN"), Timestamp::new("nan"));
        assert_ne!(Timestamp::new("1"), Timestamp::new("one"));
        assert_eq!(Timestamp::new("noon"), Timestamp::new("noon"));
    }

    #[test]
    fn timestamp_trimmed() {
        assert_eq!(Timestamp::new(" 12 "), Timestamp::from("12"));
        assert_eq!(Timestamp::new("12").as_f64(), Some(12.0));
        assert_eq!(Timestamp::new("noon").as_f64(), None);
    }
}
