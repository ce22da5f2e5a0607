//! Navigation camera maths: heading smoothing, distance-banded zoom, and the
//! camera target handed to the map view.

use pf_core::Coordinate;

// ── Zoom bands ────────────────────────────────────────────────────────────────

/// Below this many miles to go the camera zooms in by [`NEAR_ZOOM_OFFSET`].
pub const NEAR_MILES: f64 = 0.05;
pub const NEAR_ZOOM_OFFSET: f64 = 1.5;

/// Below this many miles (and not near) the camera zooms in slightly.
pub const CLOSE_MILES: f64 = 0.1;
pub const CLOSE_ZOOM_OFFSET: f64 = 0.5;

/// Above this many miles the camera zooms out one level.
pub const FAR_MILES: f64 = 0.5;
pub const FAR_ZOOM_OFFSET: f64 = -1.0;

/// Interpolation factor for [`lookahead_center`].
pub const LOOKAHEAD_FACTOR: f64 = 0.12;

// ── Camera types ──────────────────────────────────────────────────────────────

/// Where the map camera should point.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraState {
    pub center: Coordinate,

    /// Compass heading the top of the screen faces, in `[0, 360)`.
    pub heading: f64,

    /// Tilt from straight-down, in degrees.
    pub pitch: f64,

    pub zoom: f64,
}

/// A camera target plus how long the map view should take to reach it.
///
/// Commands are fire-and-forget: a new command may arrive before the previous
/// animation ends, and only the latest target matters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraCommand {
    pub camera:      CameraState,
    pub duration_ms: u32,
}

// ── Heading ───────────────────────────────────────────────────────────────────

pub use pf_core::{shortest_angle_diff, smooth_heading};

// ── Zoom ──────────────────────────────────────────────────────────────────────

/// Step-function zoom by distance to destination.  Bands, not interpolation:
///
/// | remaining          | zoom         |
/// |--------------------|--------------|
/// | `< 0.05 mi`        | `base + 1.5` |
/// | `< 0.1 mi`         | `base + 0.5` |
/// | `> 0.5 mi`         | `base - 1`   |
/// | otherwise          | `base`       |
pub fn dynamic_zoom(base: f64, remaining_miles: f64) -> f64 {
    if remaining_miles < NEAR_MILES {
        base + NEAR_ZOOM_OFFSET
    } else if remaining_miles < CLOSE_MILES {
        base + CLOSE_ZOOM_OFFSET
    } else if remaining_miles > FAR_MILES {
        base + FAR_ZOOM_OFFSET
    } else {
        base
    }
}

/// A camera centre nudged from `current` towards `next` by `factor`, so more
/// of the road ahead is on screen.
#[inline]
pub fn lookahead_center(current: Coordinate, next: Coordinate, factor: f64) -> Coordinate {
    current.lerp(next, factor)
}
