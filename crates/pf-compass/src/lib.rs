//! `pf-compass` — device heading from raw motion sensors.
//!
//! A self-contained helper for the map's "which way am I facing" marker.  It
//! never feeds the navigation tracker, whose heading comes from the route.
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`tilt`]     | `CompassSample`, `tilt_compensated_heading`                |
//! | [`smoother`] | `TiltCompass` exponential smoother, `smoothed_headings`    |
//!
//! ```text
//! {mag, acc} ─▶ normalise acc ─▶ pitch, roll ─▶ de-tilt mag ─▶ atan2 ─▶ smooth
//! ```

pub mod smoother;
pub mod tilt;

#[cfg(test)]
mod tests;

pub use smoother::{smoothed_headings, TiltCompass, DEFAULT_SMOOTHING};
pub use tilt::{tilt_compensated_heading, CompassSample};
