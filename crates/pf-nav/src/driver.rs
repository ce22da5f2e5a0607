//! High-level navigation driver: binds a location provider and a map view to
//! a [`NavigationTracker`].

use pf_core::{Coordinate, NavConfig};

use crate::{
    LocationProvider, MapView, NavResult, NavigationObserver, NavigationRoute, NavigationTracker,
    WatchId, WatchOptions,
};

/// What one [`NavigationDriver::step`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// No session is active; nothing was read.
    Idle,
    /// A reading was processed and the session continues.
    Updated,
    /// The reading reached the destination; the session is over.
    Arrived,
    /// The stream reported an error; state is unchanged.
    LocationError,
    /// The watch has no more readings.
    Exhausted,
}

/// Totals from [`NavigationDriver::run`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub updates: usize,
    pub errors:  usize,
    pub arrived: bool,
}

/// Wraps a [`LocationProvider`] and a [`MapView`] around a tracker.
///
/// # Type parameters
///
/// `P` and `M` are the platform collaborators.  Swap them at compile time
/// (e.g. [`SimulatedLocationProvider`][crate::SimulatedLocationProvider] and
/// [`RecordingMapView`][crate::RecordingMapView] in tests) with no runtime
/// overhead.
///
/// # Subscription lifecycle
///
/// [`start`](Self::start) opens one position watch; it is cleared exactly
/// once, by [`stop`](Self::stop), by arrival, or by a later `start`.
pub struct NavigationDriver<P: LocationProvider, M: MapView> {
    pub provider: P,
    pub map:      M,
    tracker:      NavigationTracker,
    options:      WatchOptions,
    watch:        Option<WatchId>,
}

impl<P: LocationProvider, M: MapView> NavigationDriver<P, M> {
    /// Validate `config` and build an idle driver.
    pub fn new(provider: P, map: M, config: NavConfig) -> NavResult<Self> {
        config.validate()?;
        Ok(Self {
            provider,
            map,
            options: WatchOptions::navigation(config.location_update_distance_m),
            tracker: NavigationTracker::new(config),
            watch:   None,
        })
    }

    #[inline]
    pub fn is_navigating(&self) -> bool {
        self.tracker.is_navigating()
    }

    #[inline]
    pub fn watch(&self) -> Option<WatchId> {
        self.watch
    }

    /// Read-only view of the tracker; the session lifecycle goes through
    /// [`start`](Self::start) and [`stop`](Self::stop).
    #[inline]
    pub fn tracker(&self) -> &NavigationTracker {
        &self.tracker
    }

    #[cfg(test)]
    pub(crate) fn tracker_mut(&mut self) -> &mut NavigationTracker {
        &mut self.tracker
    }

    /// Fetch a fix, start the tracker, animate the opening camera, and
    /// subscribe to position updates.
    ///
    /// Returns `Ok(false)` when the tracker declines the route (fewer than
    /// two vertices); no watch is opened in that case.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Location`][crate::NavError::Location] if the
    /// one-shot position request fails.
    pub fn start(&mut self, route: NavigationRoute, destination: Coordinate) -> NavResult<bool> {
        let current = self.provider.current_position(&self.options)?;

        let Some(opening) = self.tracker.start(route, destination, Some(current)) else {
            return Ok(false);
        };

        // A previous session's watch must not keep feeding the new one.
        self.release_watch();
        self.map.animate_camera(&opening);
        self.watch = Some(self.provider.watch_position(&self.options));
        Ok(true)
    }

    /// Pull and process one reading.
    pub fn step<O: NavigationObserver + ?Sized>(&mut self, observer: &mut O) -> StepOutcome {
        let Some(watch) = self.watch else {
            return StepOutcome::Idle;
        };

        match self.provider.next_update(watch) {
            None => StepOutcome::Exhausted,
            Some(Err(e)) => {
                self.tracker.on_location_error(&e);
                observer.on_location_error(&e);
                StepOutcome::LocationError
            }
            Some(Ok(reading)) => {
                let Some(update) = self.tracker.update(&reading) else {
                    // Session ended outside the driver; drop the orphaned watch.
                    self.release_watch();
                    return StepOutcome::Idle;
                };
                self.map.animate_camera(&update.camera);
                observer.on_update(&update);

                if update.arrived {
                    self.release_watch();
                    observer.on_arrival(update.destination);
                    StepOutcome::Arrived
                } else {
                    StepOutcome::Updated
                }
            }
        }
    }

    /// Step until arrival, an idle tracker, an exhausted stream, or
    /// `max_steps` readings/errors, whichever comes first.
    pub fn run<O: NavigationObserver + ?Sized>(
        &mut self,
        observer:  &mut O,
        max_steps: usize,
    ) -> RunSummary {
        let mut summary = RunSummary::default();
        for _ in 0..max_steps {
            match self.step(observer) {
                StepOutcome::Updated => summary.updates += 1,
                StepOutcome::LocationError => summary.errors += 1,
                StepOutcome::Arrived => {
                    summary.updates += 1;
                    summary.arrived = true;
                    break;
                }
                StepOutcome::Idle | StepOutcome::Exhausted => break,
            }
        }
        summary
    }

    /// End navigation and unsubscribe.  Safe to call repeatedly; only the
    /// first call after a start does anything.  Returns whether a session or
    /// watch was actually ended.
    pub fn stop(&mut self) -> bool {
        let released = self.release_watch();
        let stopped = self.tracker.stop();
        released || stopped
    }

    fn release_watch(&mut self) -> bool {
        match self.watch.take() {
            Some(w) => {
                self.provider.clear_watch(w);
                true
            }
            None => false,
        }
    }
}
