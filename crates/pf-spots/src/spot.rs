//! The parking spot record.

use pf_core::{Coordinate, Located};
use pf_spatial::Cluster;

/// One bookable parking spot.
///
/// `distance_miles` and `is_nearest` are **not** intrinsic: they describe the
/// spot relative to whatever reference location was last passed to
/// [`annotate_distances`][crate::annotate_distances], and are stale as soon
/// as that location moves.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParkingSpot {
    /// Unique across a loaded spot set.
    pub id: String,

    pub coordinate: Coordinate,

    /// Price per booking, in the app's currency.  Never negative.
    pub price: f64,

    pub available: bool,

    /// Street name, e.g. `"17th St"`.
    pub address: String,

    pub block: String,

    pub house: String,

    /// Precomputed travel estimate in minutes; used as the duration of a
    /// straight-line fallback route.
    pub estimated_time_min: u32,

    /// Great-circle miles to the reference location.
    pub distance_miles: f64,

    /// Set on at most one spot per annotated set.
    pub is_nearest: bool,
}

impl ParkingSpot {
    /// A spot with no reference-relative data yet.
    pub fn new(id: impl Into<String>, coordinate: Coordinate, price: f64) -> Self {
        Self {
            id: id.into(),
            coordinate,
            price,
            available:          true,
            address:            String::new(),
            block:              String::new(),
            house:              String::new(),
            estimated_time_min: 0,
            distance_miles:     0.0,
            is_nearest:         false,
        }
    }

    /// `"House 12, Block J2"`, the label shown on arrival.
    pub fn label(&self) -> String {
        match (self.house.is_empty(), self.block.is_empty()) {
            (false, false) => format!("{}, {}", self.house, self.block),
            (false, true)  => self.house.clone(),
            (true, false)  => self.block.clone(),
            (true, true)   => self.id.clone(),
        }
    }
}

impl Located for ParkingSpot {
    #[inline]
    fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}

/// A cluster of spots collapsed into one map marker.
pub type ParkingCluster = Cluster<ParkingSpot>;

/// Cluster `spots` with the greedy seed-radius algorithm of
/// [`pf_spatial::cluster`].
#[inline]
pub fn cluster_spots(spots: &[ParkingSpot], max_distance_miles: f64) -> Vec<ParkingCluster> {
    pf_spatial::cluster(spots, max_distance_miles)
}
