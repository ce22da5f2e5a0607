//! `pf-spots` — parking spot records and the list operations the map screens
//! run over them.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`spot`]    | `ParkingSpot`, `ParkingCluster`, `cluster_spots`                |
//! | [`filter`]  | `PriceRange`, `filter_by_price`                                 |
//! | [`nearest`] | `annotate_distances`, `nearest`, `overview_coordinates`         |
//! | [`loader`]  | `load_spots_csv`, `load_spots_reader`                           |
//! | [`error`]   | `SpotError`, `SpotResult<T>`                                    |
//!
//! # Pipeline
//!
//! ```text
//! load_spots_* ─▶ annotate_distances(reference) ─▶ filter_by_price ─▶ cluster_spots
//!                                                                 └─▶ bounding_circle
//! ```
//!
//! `distance` and `is_nearest` on a spot are relative to a reference
//! location; rerun [`annotate_distances`] whenever that location changes.

pub mod error;
pub mod filter;
pub mod loader;
pub mod nearest;
pub mod spot;

#[cfg(test)]
mod tests;

pub use error::{SpotError, SpotResult};
pub use filter::{filter_by_price, PriceRange};
pub use loader::{load_spots_csv, load_spots_reader};
pub use nearest::{annotate_distances, nearest, overview_coordinates};
pub use spot::{cluster_spots, ParkingCluster, ParkingSpot};
