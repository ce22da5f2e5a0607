//! Reference-relative annotation: distance to the user and the nearest spot.

use pf_core::{distance, Coordinate};

use crate::ParkingSpot;

/// Recompute `distance_miles` and `is_nearest` for every spot against
/// `reference`.
///
/// Exactly one spot (the first with the minimal distance, in slice order)
/// ends up with `is_nearest = true`; none if `spots` is empty.
pub fn annotate_distances(spots: &mut [ParkingSpot], reference: Coordinate) {
    let mut best: Option<(usize, f64)> = None;

    for (i, spot) in spots.iter_mut().enumerate() {
        spot.distance_miles = distance(reference, spot.coordinate);
        spot.is_nearest = false;
        // Strict `<` keeps the first of equally-near spots.
        if best.is_none_or(|(_, d)| spot.distance_miles < d) {
            best = Some((i, spot.distance_miles));
        }
    }

    if let Some((i, d)) = best {
        spots[i].is_nearest = true;
        log::debug!("nearest spot {} at {:.4} mi from {}", spots[i].id, d, reference);
    }
}

/// The spot nearest to `reference`, without mutating anything.
///
/// Ties resolve to the first spot in slice order.
pub fn nearest(spots: &[ParkingSpot], reference: Coordinate) -> Option<&ParkingSpot> {
    let mut best: Option<(&ParkingSpot, f64)> = None;
    for spot in spots {
        let d = distance(reference, spot.coordinate);
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((spot, d));
        }
    }
    best.map(|(s, _)| s)
}

/// The coordinate set a map view should fit to show the user and every spot:
/// the user's position first, then spots in order.
pub fn overview_coordinates(user: Coordinate, spots: &[ParkingSpot]) -> Vec<Coordinate> {
    std::iter::once(user)
        .chain(spots.iter().map(|s| s.coordinate))
        .collect()
}
