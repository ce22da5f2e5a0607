//! `pf-spatial` — map-marker geometry over sets of located items.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`cluster`] | `Cluster<T>`, greedy seed-radius `cluster`                  |
//! | [`circle`]  | `BoundingCircle`, `bounding_circle`                         |
//!
//! Everything here is a pure function of its arguments: no shared state, safe
//! to call from any thread, and recomputed from scratch whenever the input
//! set or reference location changes.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod circle;
pub mod cluster;

#[cfg(test)]
mod tests;

pub use circle::{bounding_circle, BoundingCircle, DISPLAY_PADDING};
pub use cluster::{cluster, Cluster};
