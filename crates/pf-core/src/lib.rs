//! `pf-core` — foundational types for the parkfinder core.
//!
//! This crate is a dependency of every other `pf-*` crate.  It has no `pf-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`geo`]         | `Coordinate`, `Located`, haversine distance, bearing, heading smoothing, `Region` |
//! | [`config`]      | `AppConfig`, `NavConfig`                                  |
//! | [`error`]       | `PfError`, `PfResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AppConfig, NavConfig};
pub use error::{PfError, PfResult};
pub use geo::{
    bearing, bounding_region, distance, shortest_angle_diff, smooth_heading, Coordinate, Located,
    Region, EARTH_RADIUS_MILES, FEET_PER_MILE, METERS_PER_MILE,
};
