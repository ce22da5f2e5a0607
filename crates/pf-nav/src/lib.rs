//! `pf-nav` — route following and the navigation camera.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                          |
//! |----------------|-------------------------------------------------------------------|
//! | [`route`]      | `NavigationRoute`, `compute_upcoming`, `format_distance`          |
//! | [`camera`]     | `CameraState`, `CameraCommand`, `smooth_heading`, `dynamic_zoom`  |
//! | [`tracker`]    | `NavigationTracker` — Idle/Navigating state machine               |
//! | [`location`]   | `LocationProvider` trait, `LocationUpdate`, `WatchOptions`, `position_or` |
//! | [`directions`] | `DirectionsProvider` trait, `route_or_fallback`                   |
//! | [`map_view`]   | `MapView` trait, `EdgePadding`, `RecordingMapView`                |
//! | [`observer`]   | `NavigationObserver` trait, `NoopObserver`                        |
//! | [`driver`]     | `NavigationDriver<P, M>` — provider + map view + tracker          |
//! | [`simulate`]   | `SimulatedLocationProvider` — scripted position stream            |
//! | [`error`]      | `NavError`, `LocationError`, `DirectionsError`, `NavResult<T>`    |
//!
//! # Per-reading pipeline
//!
//! ```text
//! reading ─▶ nearest route vertex (|Δlat|+|Δlon|) ─▶ next = min(i+1, last)
//!         ─▶ bearing(vertex, next) ─▶ smooth towards it (shortest way round)
//!         ─▶ miles to destination ─▶ zoom band ─▶ CameraCommand
//!         ─▶ arrived?  → Idle, report once
//! ```
//!
//! Everything runs on the caller's thread, one reading at a time.  The
//! platform collaborators (location, directions, map) are traits; the
//! [`simulate`] and [`map_view`] modules provide headless implementations.

pub mod camera;
pub mod directions;
pub mod driver;
pub mod error;
pub mod location;
pub mod map_view;
pub mod observer;
pub mod route;
pub mod simulate;
pub mod tracker;


pub use camera::{
    dynamic_zoom, lookahead_center, shortest_angle_diff, smooth_heading, CameraCommand,
    CameraState, LOOKAHEAD_FACTOR,
};
pub use directions::{route_or_fallback, DirectionsProvider};
pub use driver::{NavigationDriver, RunSummary, StepOutcome};
pub use error::{DirectionsError, LocationError, NavError, NavResult};
pub use location::{position_or, LocationProvider, LocationUpdate, WatchId, WatchOptions};
pub use map_view::{EdgePadding, MapView, RecordingMapView};
pub use observer::{NavigationObserver, NoopObserver};
pub use route::{compute_upcoming, format_distance, polyline_length_miles, NavigationRoute, Upcoming};
pub use simulate::SimulatedLocationProvider;
pub use tracker::{NavigationTracker, Session, TrackerState, TrackerUpdate};
