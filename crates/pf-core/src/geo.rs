//! Geographic coordinate type and great-circle utilities.
//!
//! Every distance in the parkfinder core is computed by one haversine
//! implementation with one Earth radius ([`EARTH_RADIUS_MILES`]).  Callers
//! that need metres (map circles, location-provider distance filters) convert
//! at the boundary with [`METERS_PER_MILE`].

use std::fmt;

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Exact length of one statute mile in metres.
pub const METERS_PER_MILE: f64 = 1609.344;

pub const FEET_PER_MILE: f64 = 5280.0;

// ── Coordinate ────────────────────────────────────────────────────────────────

/// A WGS-84 latitude/longitude pair in decimal degrees.
///
/// Plain value type: two coordinates are "the same place" only by numeric
/// proximity (see [`Coordinate::approx_eq`]), never by identity.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub latitude:  f64,
    pub longitude: f64,
}

impl Coordinate {
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Great-circle distance to `other` in miles.  See [`distance`].
    #[inline]
    pub fn distance_miles(self, other: Coordinate) -> f64 {
        distance(self, other)
    }

    /// Great-circle distance to `other` in metres.
    #[inline]
    pub fn distance_m(self, other: Coordinate) -> f64 {
        distance(self, other) * METERS_PER_MILE
    }

    /// Cheap "taxicab" distance in degrees: `|Δlat| + |Δlon|`.
    ///
    /// Not a geodesic measure.  Used only to rank route vertices by
    /// closeness, where the ordering is all that matters.
    #[inline]
    pub fn proxy_distance(self, other: Coordinate) -> f64 {
        (self.latitude - other.latitude).abs() + (self.longitude - other.longitude).abs()
    }

    /// Point a fraction `t` of the way from `self` to `other`, interpolated
    /// linearly in degree space.  Fine for the short hops between route
    /// vertices; not a great-circle interpolation.
    #[inline]
    pub fn lerp(self, other: Coordinate, t: f64) -> Coordinate {
        Coordinate {
            latitude:  self.latitude + (other.latitude - self.latitude) * t,
            longitude: self.longitude + (other.longitude - self.longitude) * t,
        }
    }

    /// `true` if both components differ by at most `eps` degrees.
    #[inline]
    pub fn approx_eq(self, other: Coordinate, eps: f64) -> bool {
        (self.latitude - other.latitude).abs() <= eps
            && (self.longitude - other.longitude).abs() <= eps
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

// ── Located ───────────────────────────────────────────────────────────────────

/// Anything that sits at a single coordinate on the map.
///
/// Clustering and bounding-circle code is generic over this trait so it works
/// on bare coordinates and on richer records (parking spots) alike.
pub trait Located {
    fn coordinate(&self) -> Coordinate;
}

impl Located for Coordinate {
    #[inline]
    fn coordinate(&self) -> Coordinate {
        *self
    }
}

impl<T: Located + ?Sized> Located for &T {
    #[inline]
    fn coordinate(&self) -> Coordinate {
        (**self).coordinate()
    }
}

// ── Distance & bearing ────────────────────────────────────────────────────────

/// Haversine great-circle distance between `a` and `b` in miles.
///
/// Symmetric, and exactly `0.0` for identical inputs.
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();

    let h = (d_lat * 0.5).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_MILES * c
}

/// Initial bearing in degrees (`0` = north, clockwise) when travelling from
/// `from` towards `to`.  Always in `[0, 360)`.
pub fn bearing(from: Coordinate, to: Coordinate) -> f64 {
    let d_lon = (to.longitude - from.longitude).to_radians();
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();

    let x = d_lon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    let deg = x.atan2(y).to_degrees();
    // `rem_euclid` can round 360 - ε up to exactly 360.0.
    let normalized = (deg + 360.0).rem_euclid(360.0);
    if normalized >= 360.0 { 0.0 } else { normalized }
}

/// Signed shortest rotation from `from` to `to`, in `[-180, 180)`.
#[inline]
pub fn shortest_angle_diff(from: f64, to: f64) -> f64 {
    (to - from + 540.0).rem_euclid(360.0) - 180.0
}

/// Move `previous` a fraction `factor` of the shortest way towards `target`.
///
/// Crossing north works as expected: from 350° towards 10° the result passes
/// through 0°, never through 180°.  Output is in `[0, 360)`.
pub fn smooth_heading(previous: f64, target: f64, factor: f64) -> f64 {
    let diff = shortest_angle_diff(previous, target);
    let h = (previous + diff * factor + 360.0).rem_euclid(360.0);
    if h >= 360.0 { 0.0 } else { h }
}

// ── Region ────────────────────────────────────────────────────────────────────

/// An axis-aligned map viewport: a centre plus latitude/longitude spans in
/// degrees (the shape map widgets call a "region").
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub center:    Coordinate,
    pub lat_delta: f64,
    pub lng_delta: f64,
}

impl Region {
    /// `true` if `c` lies inside the region's box.
    pub fn contains(&self, c: Coordinate) -> bool {
        (c.latitude - self.center.latitude).abs() <= self.lat_delta * 0.5
            && (c.longitude - self.center.longitude).abs() <= self.lng_delta * 0.5
    }
}

/// Fit a [`Region`] around `coords`, widening each span by `padding` degrees.
///
/// Returns `None` for an empty slice, meaning "nothing to display".
pub fn bounding_region<T: Located>(coords: &[T], padding: f64) -> Option<Region> {
    let first = coords.first()?.coordinate();

    let (mut min_lat, mut max_lat) = (first.latitude, first.latitude);
    let (mut min_lng, mut max_lng) = (first.longitude, first.longitude);

    for c in coords.iter().map(Located::coordinate) {
        min_lat = min_lat.min(c.latitude);
        max_lat = max_lat.max(c.latitude);
        min_lng = min_lng.min(c.longitude);
        max_lng = max_lng.max(c.longitude);
    }

    Some(Region {
        center:    Coordinate::new((min_lat + max_lat) / 2.0, (min_lng + max_lng) / 2.0),
        lat_delta: (max_lat - min_lat) + padding,
        lng_delta: (max_lng - min_lng) + padding,
    })
}
