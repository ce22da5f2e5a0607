//! A scripted location provider that drives a device along a polyline.
//!
//! Stands in for the platform geolocation service during demos and tests:
//! positions are interpolated along the route at a fixed spacing, optionally
//! perturbed with seeded jitter, and errors can be injected at chosen
//! reading indices.

use std::collections::BTreeSet;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use pf_core::{Coordinate, EARTH_RADIUS_MILES, METERS_PER_MILE};

use crate::{LocationError, LocationProvider, LocationUpdate, WatchId, WatchOptions};

/// Replays a fixed sequence of positions through the [`LocationProvider`]
/// interface.
#[derive(Debug)]
pub struct SimulatedLocationProvider {
    positions:  Vec<Coordinate>,
    cursor:     usize,
    errors_at:  BTreeSet<usize>,
    jitter:     Option<(SmallRng, f64)>, // (rng, max offset in degrees)
    has_fix:    bool,
    last_fix:   Option<Coordinate>,
    next_watch: u32,
    active:     Option<WatchId>,

    /// Options passed to the most recent `current_position` or
    /// `watch_position`.
    pub last_options: Option<WatchOptions>,

    /// Every `clear_watch` call, in order.
    pub cleared: Vec<WatchId>,
}

impl SimulatedLocationProvider {
    /// Replay `positions` verbatim.  The one-shot fix is the first position.
    pub fn from_positions(positions: Vec<Coordinate>) -> Self {
        Self {
            positions,
            cursor:       0,
            errors_at:    BTreeSet::new(),
            jitter:       None,
            has_fix:      true,
            last_fix:     None,
            next_watch:   1,
            active:       None,
            last_options: None,
            cleared:      Vec::new(),
        }
    }

    /// Walk `route` from its first to its last vertex, emitting a position
    /// roughly every `step_m` metres (each segment split into whole steps).
    pub fn along(route: &[Coordinate], step_m: f64) -> Self {
        Self::from_positions(densify(route, step_m))
    }

    /// Offset every replayed position by up to `jitter_m` metres in each axis,
    /// deterministically for a given `seed`.
    pub fn with_jitter(mut self, seed: u64, jitter_m: f64) -> Self {
        if jitter_m > 0.0 {
            let deg = (jitter_m / (EARTH_RADIUS_MILES * METERS_PER_MILE)).to_degrees();
            self.jitter = Some((SmallRng::seed_from_u64(seed), deg));
        }
        self
    }

    /// Report [`LocationError::PositionUnavailable`] once, just before the
    /// position at `index` is delivered.
    pub fn with_error_at(mut self, index: usize) -> Self {
        self.errors_at.insert(index);
        self
    }

    /// Make the one-shot `current_position` fail, as when permission is
    /// denied.
    pub fn without_fix(mut self) -> Self {
        self.has_fix = false;
        self
    }

    /// Positions not yet delivered.
    pub fn remaining(&self) -> usize {
        self.positions.len().saturating_sub(self.cursor)
    }

    pub fn active_watch(&self) -> Option<WatchId> {
        self.active
    }

    fn perturb(&mut self, c: Coordinate) -> Coordinate {
        match &mut self.jitter {
            Some((rng, deg)) => Coordinate::new(
                c.latitude + rng.gen_range(-*deg..=*deg),
                c.longitude + rng.gen_range(-*deg..=*deg),
            ),
            None => c,
        }
    }
}

impl LocationProvider for SimulatedLocationProvider {
    fn current_position(&mut self, options: &WatchOptions) -> Result<Coordinate, LocationError> {
        self.last_options = Some(*options);
        if !self.has_fix {
            return Err(LocationError::PermissionDenied);
        }
        self.last_fix
            .or_else(|| self.positions.first().copied())
            .ok_or(LocationError::PositionUnavailable)
    }

    fn watch_position(&mut self, options: &WatchOptions) -> WatchId {
        let id = WatchId(self.next_watch);
        self.next_watch += 1;
        self.active = Some(id);
        self.last_options = Some(*options);
        log::debug!("watch {} opened ({} positions queued)", id.0, self.remaining());
        id
    }

    fn next_update(&mut self, watch: WatchId) -> Option<Result<LocationUpdate, LocationError>> {
        if self.active != Some(watch) {
            return None;
        }
        if self.errors_at.remove(&self.cursor) {
            return Some(Err(LocationError::PositionUnavailable));
        }
        let pos = *self.positions.get(self.cursor)?;
        self.cursor += 1;

        let pos = self.perturb(pos);
        self.last_fix = Some(pos);
        Some(Ok(LocationUpdate::at(pos)))
    }

    fn clear_watch(&mut self, watch: WatchId) {
        if self.active == Some(watch) {
            self.active = None;
        }
        self.cleared.push(watch);
        log::debug!("watch {} cleared", watch.0);
    }
}

/// Split each segment of `route` into `ceil(len / step_m)` equal hops and
/// return every hop endpoint, starting with the first vertex and ending with
/// the last.
pub fn densify(route: &[Coordinate], step_m: f64) -> Vec<Coordinate> {
    let Some(&first) = route.first() else {
        return Vec::new();
    };
    let mut out = vec![first];
    for w in route.windows(2) {
        let (a, b) = (w[0], w[1]);
        let hops = if step_m > 0.0 {
            ((a.distance_m(b) / step_m).ceil() as usize).max(1)
        } else {
            1
        };
        for k in 1..=hops {
            out.push(a.lerp(b, k as f64 / hops as f64));
        }
    }
    out
}
