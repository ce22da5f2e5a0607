//! Route polylines and the "where am I on the route" lookup.

use pf_core::{bearing, distance, Coordinate, FEET_PER_MILE};

/// A route returned by the directions provider.
///
/// Immutable once received; a new origin/destination pair means a new route.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavigationRoute {
    /// Polyline vertices from origin to destination.
    pub coordinates: Vec<Coordinate>,

    /// Summary length in miles, as reported by the provider.
    pub distance_miles: f64,

    /// Summary travel time in minutes, as reported by the provider.
    pub duration_min: f64,
}

impl NavigationRoute {
    pub fn new(coordinates: Vec<Coordinate>, distance_miles: f64, duration_min: f64) -> Self {
        Self { coordinates, distance_miles, duration_min }
    }

    /// Build a route from a bare polyline, deriving the summary distance from
    /// the polyline length and the duration from `speed_mph`.
    pub fn from_polyline(coordinates: Vec<Coordinate>, speed_mph: f64) -> Self {
        let distance_miles = polyline_length_miles(&coordinates);
        let duration_min = if speed_mph > 0.0 { distance_miles / speed_mph * 60.0 } else { 0.0 };
        Self { coordinates, distance_miles, duration_min }
    }

    /// The two-point route used when the directions provider fails: a straight
    /// line, great-circle length, and the caller's own duration estimate.
    pub fn straight_line(origin: Coordinate, destination: Coordinate, duration_min: f64) -> Self {
        Self {
            coordinates:    vec![origin, destination],
            distance_miles: distance(origin, destination),
            duration_min,
        }
    }

    /// A route can be followed only if it has at least two vertices.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.coordinates.len() >= 2
    }

    #[inline]
    pub fn last_index(&self) -> Option<usize> {
        self.coordinates.len().checked_sub(1)
    }

    /// See [`compute_upcoming`].
    #[inline]
    pub fn upcoming(&self, current: Coordinate) -> Option<Upcoming> {
        compute_upcoming(current, &self.coordinates)
    }

    /// Unix time of arrival if the trip starts at `now_unix_secs`.
    pub fn arrival_unix_secs(&self, now_unix_secs: i64) -> i64 {
        now_unix_secs + (self.duration_min * 60.0).round() as i64
    }
}

/// Sum of great-circle segment lengths along `coords`, in miles.
pub fn polyline_length_miles(coords: &[Coordinate]) -> f64 {
    coords.windows(2).map(|w| distance(w[0], w[1])).sum()
}

// ── Upcoming segment ──────────────────────────────────────────────────────────

/// The route vertex nearest the device and the vertex after it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Upcoming {
    pub nearest_index: usize,

    /// `min(nearest_index + 1, last)`: at the final vertex the target holds.
    pub next_index: usize,

    pub next: Coordinate,

    /// Bearing from the nearest vertex to `next`, in `[0, 360)`.  Taken
    /// between two route vertices rather than from the device position so
    /// the heading follows the road and ignores GPS wobble.
    pub bearing: f64,
}

/// Locate `current` on the route polyline `coords`.
///
/// The nearest **vertex** is chosen by `|Δlat| + |Δlon|` (first minimum
/// wins); there is no projection onto segments.  Just after passing a vertex
/// the bearing therefore still describes the previous segment until the next
/// vertex becomes the nearer one.  At the final vertex `next` is the vertex
/// itself and the bearing is `0`.
///
/// Returns `None` when `coords` has fewer than two vertices.
pub fn compute_upcoming(current: Coordinate, coords: &[Coordinate]) -> Option<Upcoming> {
    if coords.len() < 2 {
        return None;
    }

    let mut nearest_index = 0;
    let mut min_proxy = f64::MAX;
    for (i, c) in coords.iter().enumerate() {
        let d = c.proxy_distance(current);
        if d < min_proxy {
            min_proxy = d;
            nearest_index = i;
        }
    }

    let next_index = (nearest_index + 1).min(coords.len() - 1);
    let next = coords[next_index];

    Some(Upcoming {
        nearest_index,
        next_index,
        next,
        bearing: bearing(coords[nearest_index], next),
    })
}

/// Human-readable remaining distance: feet below 0.1 mi, otherwise miles to
/// one decimal place.
pub fn format_distance(miles: f64) -> String {
    if miles < 0.1 {
        format!("{} ft", (miles * FEET_PER_MILE).round() as i64)
    } else {
        format!("{miles:.1} mi")
    }
}
