//! Application configuration.
//!
//! # Design
//!
//! All tunables live in one plain struct, [`AppConfig`], whose `Default`
//! reproduces the constants the mobile app ships with.  The application
//! crate typically loads an override from JSON (feature `serde`) and calls
//! [`AppConfig::validate`] before handing pieces of it to the clustering and
//! navigation code.

use crate::{Coordinate, PfError, PfResult};

// ── NavConfig ─────────────────────────────────────────────────────────────────

/// Camera and arrival tunables for an active navigation session.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Map zoom level used while navigating before distance adjustment.
    pub base_zoom: f64,

    /// Zoom used for the non-navigating overview.
    pub overview_zoom: f64,

    /// Camera pitch in degrees while navigating (3-D perspective).
    pub pitch: f64,

    /// Fraction of the shortest angular difference applied per update.
    /// Must lie strictly inside `(0, 1)`: higher is more responsive, lower
    /// is steadier.
    pub smoothing_factor: f64,

    /// Remaining distance (miles) below which the session counts as arrived.
    pub arrival_threshold_miles: f64,

    /// Animation duration for per-update camera moves.
    pub animation_ms: u32,

    /// Animation duration for the camera move issued when a session starts.
    pub start_animation_ms: u32,

    /// Minimum movement (metres) between location updates requested from
    /// the location provider.
    pub location_update_distance_m: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            base_zoom:                  18.0,
            overview_zoom:              15.0,
            pitch:                      65.0,
            smoothing_factor:           0.5,
            arrival_threshold_miles:    0.03, // ≈ 50 m
            animation_ms:               400,
            start_animation_ms:         1_000,
            location_update_distance_m: 5.0,
        }
    }
}

impl NavConfig {
    pub fn validate(&self) -> PfResult<()> {
        if !(self.smoothing_factor > 0.0 && self.smoothing_factor < 1.0) {
            return Err(PfError::Config(format!(
                "smoothing_factor must be in (0, 1), got {}",
                self.smoothing_factor
            )));
        }
        if !(self.arrival_threshold_miles >= 0.0) {
            return Err(PfError::Config(format!(
                "arrival_threshold_miles must be non-negative, got {}",
                self.arrival_threshold_miles
            )));
        }
        if !(self.location_update_distance_m >= 0.0) {
            return Err(PfError::Config(format!(
                "location_update_distance_m must be non-negative, got {}",
                self.location_update_distance_m
            )));
        }
        Ok(())
    }
}

// ── AppConfig ─────────────────────────────────────────────────────────────────

/// Top-level configuration for the parkfinder core.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AppConfig {
    /// Fallback reference location when the device position is unknown.
    pub default_location: Coordinate,

    /// Seed-radius (miles) for grouping spots into one map marker.
    pub cluster_distance_miles: f64,

    /// Lower bound of the price slider.
    pub min_price: f64,

    /// Upper bound of the price slider.
    pub max_price: f64,

    /// Degrees added to each span when fitting a region around spots.
    pub region_padding_deg: f64,

    pub nav: NavConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_location:       Coordinate::new(37.7749, -122.4194), // San Francisco
            cluster_distance_miles: 0.1,
            min_price:              0.0,
            max_price:              15.0,
            region_padding_deg:     0.01,
            nav:                    NavConfig::default(),
        }
    }
}

impl AppConfig {
    /// Check every field for out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`PfError::Config`] naming the first offending field.
    pub fn validate(&self) -> PfResult<()> {
        if !(self.cluster_distance_miles >= 0.0) {
            return Err(PfError::Config(format!(
                "cluster_distance_miles must be non-negative, got {}",
                self.cluster_distance_miles
            )));
        }
        if !(self.min_price >= 0.0) || self.min_price > self.max_price {
            return Err(PfError::Config(format!(
                "price bounds must satisfy 0 <= min <= max, got [{}, {}]",
                self.min_price, self.max_price
            )));
        }
        if !(self.region_padding_deg >= 0.0) {
            return Err(PfError::Config(format!(
                "region_padding_deg must be non-negative, got {}",
                self.region_padding_deg
            )));
        }
        self.nav.validate()
    }
}
