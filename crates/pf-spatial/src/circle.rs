//! Bounding circles for the map overview.
//!
//! The centre is the plain centroid of the points, not a true minimum
//! enclosing circle; for the small, local point sets on a parking map the
//! difference is a few metres.  The radius uses the same haversine as every
//! other distance in the workspace, converted from miles to metres here.

use pf_core::{Coordinate, Located, METERS_PER_MILE};

use crate::cluster::centroid;

/// Multiplier map views conventionally apply to `radius_m` so the outermost
/// marker is not drawn on the circle's edge.
pub const DISPLAY_PADDING: f64 = 1.1;

/// A centre and a radius in metres enclosing a set of points.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingCircle {
    pub center:   Coordinate,
    pub radius_m: f64,
}

impl BoundingCircle {
    /// Radius scaled by `factor` (usually [`DISPLAY_PADDING`]) for rendering.
    #[inline]
    pub fn padded_radius_m(&self, factor: f64) -> f64 {
        self.radius_m * factor
    }

    /// `true` if `c` lies within the circle (boundary inclusive).
    pub fn contains(&self, c: Coordinate) -> bool {
        self.center.distance_m(c) <= self.radius_m
    }
}

/// Centroid of `points` plus the largest great-circle distance from it to
/// any point.
///
/// Returns `None` for an empty slice.
pub fn bounding_circle<T: Located>(points: &[T]) -> Option<BoundingCircle> {
    if points.is_empty() {
        return None;
    }

    let center = centroid(points);
    let radius_miles = points
        .iter()
        .map(|p| center.distance_miles(p.coordinate()))
        .fold(0.0_f64, f64::max);

    Some(BoundingCircle {
        center,
        radius_m: radius_miles * METERS_PER_MILE,
    })
}
