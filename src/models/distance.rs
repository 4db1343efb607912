//! Distance lookup between named locations.
//!
//! Nested by origin: `from → (to → distance)`. Distances may be asymmetric:
//! recording `a → b` with a separate return distance stores both directions
//! independently. Serializes as a JSON object of objects.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Directed distances between locations.
///
/// # Example
///
/// ```
/// use u_fleet::models::DistanceMap;
///
/// let mut map = DistanceMap::new();
/// map.add_distance("Toronto", "Hamilton", 9);
/// map.add_asymmetric_distance("Toronto", "Windsor", 370, 365);
///
/// assert_eq!(map.distance("Hamilton", "Toronto"), 9);
/// assert_eq!(map.distance("Windsor", "Toronto"), 365);
/// assert_eq!(map.distance("Toronto", "Ottawa"), DistanceMap::UNKNOWN);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceMap {
    distances: HashMap<String, HashMap<String, u32>>,
}

impl DistanceMap {
    /// Returned by [`distance`](Self::distance) for a pair that was never recorded.
    pub const UNKNOWN: i64 = -1;

    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the same distance in both directions.
    pub fn add_distance(&mut self, a: impl Into<String>, b: impl Into<String>, distance: u32) {
        self.add_asymmetric_distance(a, b, distance, distance);
    }

    /// Records `a → b` and `b → a` separately.
    pub fn add_asymmetric_distance(
        &mut self,
        a: impl Into<String>,
        b: impl Into<String>,
        a_to_b: u32,
        b_to_a: u32,
    ) {
        let (a, b) = (a.into(), b.into());
        self.distances
            .entry(b.clone())
            .or_default()
            .insert(a.clone(), b_to_a);
        self.distances.entry(a).or_default().insert(b, a_to_b);
    }

    /// Builder: records a symmetric distance and returns self.
    pub fn with_distance(mut self, a: impl Into<String>, b: impl Into<String>, distance: u32) -> Self {
        self.add_distance(a, b, distance);
        self
    }

    /// Distance from `from` to `to`, if known.
    ///
    /// A location is at distance 0 from itself unless explicitly recorded.
    pub fn get(&self, from: &str, to: &str) -> Option<u32> {
        let recorded = self.distances.get(from).and_then(|row| row.get(to)).copied();
        if from == to {
            return Some(recorded.unwrap_or(0));
        }
        recorded
    }

    /// Distance from `from` to `to`, or [`UNKNOWN`](Self::UNKNOWN).
    pub fn distance(&self, from: &str, to: &str) -> i64 {
        self.get(from, to).map(i64::from).unwrap_or(Self::UNKNOWN)
    }

    /// Number of recorded directed pairs.
    pub fn len(&self) -> usize {
        self.distances.values().map(HashMap::len).sum()
    }

    /// Whether no distances are recorded.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}
