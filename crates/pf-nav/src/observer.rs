//! Navigation observer trait for arrival alerts and progress reporting.

use pf_core::Coordinate;

use crate::{LocationError, TrackerUpdate};

/// Callbacks invoked by [`NavigationDriver`][crate::NavigationDriver] while
/// it pumps location updates.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — arrival alert
///
/// ```rust,ignore
/// struct ArrivalAlert;
///
/// impl NavigationObserver for ArrivalAlert {
///     fn on_arrival(&mut self, destination: Coordinate) {
///         println!("You have arrived at {destination}");
///     }
/// }
/// ```
pub trait NavigationObserver {
    /// Called after every processed location reading.
    fn on_update(&mut self, _update: &TrackerUpdate) {}

    /// Called exactly once per session, on the reading that arrives.
    fn on_arrival(&mut self, _destination: Coordinate) {}

    /// Called when the location stream reports an error.  The session
    /// continues with its last known state.
    fn on_location_error(&mut self, _error: &LocationError) {}
}

/// A [`NavigationObserver`] that does nothing.
pub struct NoopObserver;

impl NavigationObserver for NoopObserver {}
