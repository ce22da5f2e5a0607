//! Greedy seed-radius clustering.
//!
//! # Algorithm
//!
//! ```text
//! for each item i in input order, unless already assigned:
//!     start cluster C = [i]; assign i
//!     for each other item j in input order, unless already assigned:
//!         if distance(i, j) <= max_distance: push j to C; assign j
//! ```
//!
//! Membership is tested against the **seed** only, so two items that are
//! each close to a third member are not chained together.  The result is
//! order-dependent but deterministic: the same input order always yields the
//! same assignment.
//!
//! O(n²) in item count.  Inputs are tens of map markers, so no spatial index.

use pf_core::{distance, Coordinate, Located};

/// A group of items rendered as one map marker.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cluster<T> {
    /// `cluster_<seed index>`, where the seed index is the input position of
    /// the item that started the cluster.  Not stable across recomputations.
    pub id: String,

    /// Members in discovery order; the seed is always first.
    pub items: Vec<T>,

    /// Arithmetic mean of member latitudes and longitudes.
    pub coordinate: Coordinate,
}

impl<T> Cluster<T> {
    /// Number of members.
    #[inline]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// The item that started this cluster.
    #[inline]
    pub fn seed(&self) -> &T {
        &self.items[0]
    }

    #[inline]
    pub fn is_singleton(&self) -> bool {
        self.items.len() == 1
    }
}

/// Group `items` into clusters of members within `max_distance_miles` of
/// their seed.  Every item lands in exactly one cluster.
///
/// Returns an empty `Vec` for empty input.
pub fn cluster<T: Located + Clone>(items: &[T], max_distance_miles: f64) -> Vec<Cluster<T>> {
    let mut assigned = vec![false; items.len()];
    let mut clusters = Vec::new();

    for (seed_idx, seed) in items.iter().enumerate() {
        if assigned[seed_idx] {
            continue;
        }
        assigned[seed_idx] = true;

        let seed_pos = seed.coordinate();
        let mut members = vec![seed.clone()];

        for (other_idx, other) in items.iter().enumerate() {
            if assigned[other_idx] {
                continue;
            }
            if distance(seed_pos, other.coordinate()) <= max_distance_miles {
                members.push(other.clone());
                assigned[other_idx] = true;
            }
        }

        clusters.push(Cluster {
            id:         format!("cluster_{seed_idx}"),
            coordinate: centroid(&members),
            items:      members,
        });
    }

    log::debug!("clustered {} items into {} clusters", items.len(), clusters.len());
    clusters
}

/// Mean latitude/longitude of a non-empty slice.
pub(crate) fn centroid<T: Located>(items: &[T]) -> Coordinate {
    let n = items.len() as f64;
    let (lat_sum, lon_sum) = items
        .iter()
        .map(Located::coordinate)
        .fold((0.0, 0.0), |(lat, lon), c| (lat + c.latitude, lon + c.longitude));
    Coordinate::new(lat_sum / n, lon_sum / n)
}
