//! The directions collaborator and the straight-line fallback.

use pf_core::Coordinate;

use crate::{DirectionsError, NavigationRoute};

/// Produces a road route between two points.
pub trait DirectionsProvider {
    fn route(
        &mut self,
        origin:      Coordinate,
        destination: Coordinate,
    ) -> Result<NavigationRoute, DirectionsError>;
}

/// Ask `provider` for a route, falling back to a straight two-point line when
/// it fails or returns fewer than two vertices.
///
/// `fallback_duration_min` is usually the destination spot's precomputed
/// travel estimate.
pub fn route_or_fallback<D: DirectionsProvider + ?Sized>(
    provider:              &mut D,
    origin:                Coordinate,
    destination:           Coordinate,
    fallback_duration_min: f64,
) -> NavigationRoute {
    match provider.route(origin, destination) {
        Ok(route) if route.is_valid() => route,
        Ok(route) => {
            log::warn!(
                "directions returned {} vertices; using straight line to {destination}",
                route.coordinates.len()
            );
            NavigationRoute::straight_line(origin, destination, fallback_duration_min)
        }
        Err(e) => {
            log::warn!("directions failed ({e}); using straight line to {destination}");
            NavigationRoute::straight_line(origin, destination, fallback_duration_min)
        }
    }
}
