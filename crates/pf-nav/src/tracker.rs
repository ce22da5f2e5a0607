//! The navigation tracker: a two-state machine that turns location readings
//! into camera targets and detects arrival.

use pf_core::{distance, Coordinate, NavConfig};

use crate::camera::{dynamic_zoom, smooth_heading};
use crate::{CameraCommand, CameraState, LocationError, LocationUpdate, NavigationRoute, Upcoming};

// ── Session state ─────────────────────────────────────────────────────────────

/// Everything one navigation session owns.
///
/// The smoothed heading lives here rather than anywhere global, so separate
/// sessions (and separate tests) never see each other's history.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub route: NavigationRoute,

    pub destination: Coordinate,

    /// Smoothed heading emitted by the last camera target.
    pub previous_heading: f64,

    /// Device position from the most recent reading (or the start fix).
    pub last_location: Coordinate,

    /// Great-circle miles from `last_location` to `destination`.
    pub remaining_miles: f64,

    /// Location readings processed so far.
    pub updates: u64,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub enum TrackerState {
    #[default]
    Idle,
    Navigating(Session),
}

/// The result of processing one reading while navigating.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackerUpdate {
    /// Camera target for the map view.
    pub camera: CameraCommand,

    pub upcoming: Upcoming,

    /// Unsmoothed route bearing for this reading.
    pub raw_heading: f64,

    pub remaining_miles: f64,

    pub destination: Coordinate,

    /// `true` on the single reading that ended the session by arrival.
    pub arrived: bool,
}

// ── NavigationTracker ─────────────────────────────────────────────────────────

/// Follows one route at a time.
///
/// ```text
///            start(valid route, known fix)
///   Idle ─────────────────────────────────▶ Navigating
///    ▲                                          │
///    └──────── stop()  or  remaining < threshold ┘
/// ```
///
/// Readings are processed one at a time; each [`update`](Self::update) runs
/// to completion before the next reading is accepted.
#[derive(Debug)]
pub struct NavigationTracker {
    config: NavConfig,
    state:  TrackerState,
}

impl NavigationTracker {
    pub fn new(config: NavConfig) -> Self {
        Self { config, state: TrackerState::Idle }
    }

    #[inline]
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    #[inline]
    pub fn is_navigating(&self) -> bool {
        matches!(self.state, TrackerState::Navigating(_))
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&Session> {
        match &self.state {
            TrackerState::Navigating(s) => Some(s),
            TrackerState::Idle => None,
        }
    }

    /// Begin following `route` towards `destination` from `current`.
    ///
    /// A no-op returning `None` when the route has fewer than two vertices or
    /// the current position is unknown.  Starting while already navigating
    /// replaces the previous session.
    ///
    /// On success returns the opening camera move: centred on `current`,
    /// facing the first route bearing, at the base zoom.
    pub fn start(
        &mut self,
        route:       NavigationRoute,
        destination: Coordinate,
        current:     Option<Coordinate>,
    ) -> Option<CameraCommand> {
        let Some(current) = current else {
            log::debug!("navigation start ignored: current location unknown");
            return None;
        };
        let Some(upcoming) = route.upcoming(current) else {
            log::debug!(
                "navigation start ignored: route has {} vertices",
                route.coordinates.len()
            );
            return None;
        };

        if self.is_navigating() {
            log::info!("replacing active navigation session");
        }

        let remaining_miles = distance(current, destination);
        log::info!(
            "navigation started towards {destination}: {} vertices, {:.2} mi route, {:.2} mi direct",
            route.coordinates.len(),
            route.distance_miles,
            remaining_miles,
        );

        self.state = TrackerState::Navigating(Session {
            route,
            destination,
            previous_heading: upcoming.bearing,
            last_location: current,
            remaining_miles,
            updates: 0,
        });

        Some(CameraCommand {
            camera: CameraState {
                center:  current,
                heading: upcoming.bearing,
                pitch:   self.config.pitch,
                zoom:    self.config.base_zoom,
            },
            duration_ms: self.config.start_animation_ms,
        })
    }

    /// Process one location reading.
    ///
    /// Returns `None` while idle.  The reading that brings the device within
    /// the arrival threshold returns `arrived = true` and leaves the tracker
    /// idle, so later readings return `None` and arrival is reported once.
    pub fn update(&mut self, reading: &LocationUpdate) -> Option<TrackerUpdate> {
        let TrackerState::Navigating(session) = &mut self.state else {
            return None;
        };
        let current = reading.coordinate;

        // `start` only accepts routes with two or more vertices.
        let upcoming = session.route.upcoming(current)?;

        let heading = smooth_heading(
            session.previous_heading,
            upcoming.bearing,
            self.config.smoothing_factor,
        );
        let remaining_miles = distance(current, session.destination);
        let zoom = dynamic_zoom(self.config.base_zoom, remaining_miles);

        session.previous_heading = heading;
        session.last_location = current;
        session.remaining_miles = remaining_miles;
        session.updates += 1;

        let destination = session.destination;
        let arrived = remaining_miles < self.config.arrival_threshold_miles;

        log::debug!(
            "nav update #{}: at {current}, vertex {}→{}, bearing {:.1}° → heading {:.1}°, {:.3} mi left, zoom {:.1}",
            session.updates,
            upcoming.nearest_index,
            upcoming.next_index,
            upcoming.bearing,
            heading,
            remaining_miles,
            zoom,
        );

        if arrived {
            log::info!("arrived at {destination} ({remaining_miles:.3} mi)");
            self.state = TrackerState::Idle;
        }

        Some(TrackerUpdate {
            camera: CameraCommand {
                camera: CameraState {
                    center: current,
                    heading,
                    pitch: self.config.pitch,
                    zoom,
                },
                duration_ms: self.config.animation_ms,
            },
            upcoming,
            raw_heading: upcoming.bearing,
            remaining_miles,
            destination,
            arrived,
        })
    }

    /// Note a location-stream error.  The session, if any, is untouched and
    /// keeps its last known position and heading.
    pub fn on_location_error(&mut self, error: &LocationError) {
        match self.session() {
            Some(s) => log::warn!(
                "location error during navigation ({error}); holding last fix {}",
                s.last_location
            ),
            None => log::warn!("location error while idle: {error}"),
        }
    }

    /// End the session.  Returns `false` (and does nothing) if already idle.
    pub fn stop(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            TrackerState::Navigating(s) => {
                log::info!("navigation stopped after {} updates", s.updates);
                true
            }
            TrackerState::Idle => false,
        }
    }
}
