//! The device location collaborator.

use pf_core::Coordinate;

use crate::LocationError;

/// One reading from a position watch.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationUpdate {
    pub coordinate: Coordinate,

    /// Device-reported course in degrees, when the platform provides one.
    /// The navigation tracker steers by the route instead and ignores it.
    pub heading: Option<f64>,
}

impl LocationUpdate {
    #[inline]
    pub fn at(coordinate: Coordinate) -> Self {
        Self { coordinate, heading: None }
    }
}

impl From<Coordinate> for LocationUpdate {
    fn from(c: Coordinate) -> Self {
        Self::at(c)
    }
}

/// Parameters for a position watch.  Timeout and retry policy belong to the
/// provider; the core only passes these through.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WatchOptions {
    pub high_accuracy: bool,

    /// Give up on a single fix after this long.
    pub timeout_ms: u32,

    /// Accept a cached fix no older than this.
    pub maximum_age_ms: u32,

    /// Only report movement of at least this many metres.
    pub distance_filter_m: f64,
}

impl WatchOptions {
    /// High-accuracy options for an active navigation session.
    pub fn navigation(distance_filter_m: f64) -> Self {
        Self {
            high_accuracy:  true,
            timeout_ms:     5_000,
            maximum_age_ms: 1_000,
            distance_filter_m,
        }
    }

    /// Battery-friendly options for the one-shot overview fix.
    pub fn overview() -> Self {
        Self {
            high_accuracy:  false,
            timeout_ms:     15_000,
            maximum_age_ms: 10_000,
            distance_filter_m: 0.0,
        }
    }
}

/// Handle for an active position watch.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct WatchId(pub u32);

/// Source of device positions.
///
/// A watch delivers readings one at a time through
/// [`next_update`][Self::next_update]; callers process each reading fully
/// before asking for the next, so implementations never see overlapping
/// calls for the same watch.
pub trait LocationProvider {
    /// One-shot current position.
    fn current_position(&mut self, options: &WatchOptions) -> Result<Coordinate, LocationError>;

    /// Subscribe to position updates.
    fn watch_position(&mut self, options: &WatchOptions) -> WatchId;

    /// The next reading for `watch`, or `None` once the watch is cleared or
    /// the provider has nothing more to deliver.
    fn next_update(&mut self, watch: WatchId) -> Option<Result<LocationUpdate, LocationError>>;

    /// Unsubscribe.  Callers invoke this at most once per watch.
    fn clear_watch(&mut self, watch: WatchId);
}

/// One-shot fix for the overview map, using [`WatchOptions::overview`].
///
/// When the provider fails (permission denied, no fix, timeout) the error is
/// logged and `fallback` is returned instead, normally
/// [`AppConfig::default_location`][pf_core::AppConfig::default_location].
pub fn position_or<P: LocationProvider + ?Sized>(provider: &mut P, fallback: Coordinate) -> Coordinate {
    match provider.current_position(&WatchOptions::overview()) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("current position unavailable ({e}); using {fallback}");
            fallback
        }
    }
}
