//! `drive_to_spot` — headless end-to-end run of the parkfinder core.
//!
//! Loads the bundled spot list, filters it by the configured price range,
//! groups nearby spots into markers, fits the map around them, then drives a
//! simulated device to the nearest spot and reports every camera move.
//!
//! Run with:
//!   cargo run -p drive-to-spot
//!   cargo run -p drive-to-spot -- path/to/config.json
//!
//! `RUST_LOG=debug` shows each navigation update.

use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};

use pf_core::{bounding_region, AppConfig, Coordinate};
use pf_nav::{
    format_distance, position_or, route_or_fallback, CameraCommand, DirectionsError,
    DirectionsProvider, EdgePadding, LocationError, MapView, NavigationDriver, NavigationObserver,
    NavigationRoute, SimulatedLocationProvider, TrackerUpdate,
};
use pf_spatial::{bounding_circle, DISPLAY_PADDING};
use pf_spots::{annotate_distances, cluster_spots, load_spots_reader, nearest, overview_coordinates, PriceRange};

// ── Constants ─────────────────────────────────────────────────────────────────

const SPOTS_CSV:      &str = include_str!("../data/spots.csv");
const SEED:           u64  = 42;
/// Average urban driving speed used to price the grid route.
const CITY_SPEED_MPH: f64  = 15.0;
/// Distance between simulated GPS fixes.
const STEP_M:         f64  = 12.0;
/// Simulated GPS noise per axis.
const JITTER_M:       f64  = 3.0;
const MAX_STEPS:      usize = 10_000;
/// Print a progress line every N updates.
const PRINT_EVERY:    usize = 5;

const OVERVIEW_PADDING: EdgePadding = EdgePadding::symmetric(100, 50);

// ── Directions ────────────────────────────────────────────────────────────────

/// Street-grid directions: drive along the origin's meridian to the
/// destination's latitude, then along that parallel to the destination.
struct GridDirections;

impl DirectionsProvider for GridDirections {
    fn route(
        &mut self,
        origin:      Coordinate,
        destination: Coordinate,
    ) -> Result<NavigationRoute, DirectionsError> {
        if origin == destination {
            return Err(DirectionsError::NoRoute { from: origin, to: destination });
        }
        let corner = Coordinate::new(destination.latitude, origin.longitude);
        Ok(NavigationRoute::from_polyline(vec![origin, corner, destination], CITY_SPEED_MPH))
    }
}

// ── Map view ──────────────────────────────────────────────────────────────────

/// Logs every command instead of rendering.
#[derive(Default)]
struct ConsoleMap {
    moves: usize,
    last:  Option<CameraCommand>,
}

impl MapView for ConsoleMap {
    fn animate_camera(&mut self, command: &CameraCommand) {
        let c = &command.camera;
        log::debug!(
            "camera → {} heading {:.1}° zoom {:.1} over {} ms",
            c.center, c.heading, c.zoom, command.duration_ms,
        );
        self.moves += 1;
        self.last = Some(*command);
    }

    fn fit_to_coordinates(&mut self, coords: &[Coordinate], padding: EdgePadding) {
        println!(
            "Map fit to {} coordinates (padding {}/{}/{}/{})",
            coords.len(), padding.top, padding.right, padding.bottom, padding.left,
        );
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct ProgressObserver {
    updates: usize,
    errors:  usize,
    arrived: Option<Coordinate>,
}

impl NavigationObserver for ProgressObserver {
    fn on_update(&mut self, update: &TrackerUpdate) {
        self.updates += 1;
        if self.updates % PRINT_EVERY == 0 || update.arrived {
            println!(
                "  #{:<4} heading {:>5.1}°  zoom {:>4.1}  {} to go",
                self.updates,
                update.camera.camera.heading,
                update.camera.camera.zoom,
                format_distance(update.remaining_miles),
            );
        }
    }

    fn on_arrival(&mut self, destination: Coordinate) {
        self.arrived = Some(destination);
    }

    fn on_location_error(&mut self, error: &LocationError) {
        self.errors += 1;
        println!("  location error: {error}");
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let config = match path {
        Some(p) => {
            let file = File::open(p).with_context(|| format!("opening {}", p.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing {}", p.display()))?
        }
        None => AppConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args().nth(1);
    let config = load_config(config_path.as_deref().map(Path::new))?;
    // Headless: no device fix, so the configured default location stands in.
    let user = position_or(
        &mut SimulatedLocationProvider::from_positions(Vec::new()),
        config.default_location,
    );

    println!("=== parkfinder  drive_to_spot ===");
    println!("User at {user}  |  price range ${}..=${}", config.min_price, config.max_price);
    println!();

    // 1. Spots, annotated with distance from the user.
    let mut spots = load_spots_reader(Cursor::new(SPOTS_CSV))?;
    annotate_distances(&mut spots, user);
    let visible = PriceRange::from(&config).filter(&spots);
    println!("Spots: {} loaded, {} in price range", spots.len(), visible.len());

    // 2. Map markers.
    let clusters = cluster_spots(&visible, config.cluster_distance_miles);
    for c in &clusters {
        println!(
            "  {:<10} {} spot(s) at {}  seed: {}",
            c.id,
            c.count(),
            c.coordinate,
            c.seed().label(),
        );
    }

    // 3. Viewport.
    let Some(circle) = bounding_circle(&visible) else {
        bail!("no spots in the configured price range");
    };
    let region = bounding_region(&visible, config.region_padding_deg);
    println!(
        "Bounding circle: centre {}  radius {:.0} m (display {:.0} m)",
        circle.center,
        circle.radius_m,
        circle.padded_radius_m(DISPLAY_PADDING),
    );

    let mut map = ConsoleMap::default();
    map.fit_to_coordinates(&overview_coordinates(user, &visible), OVERVIEW_PADDING);
    println!();

    // 4. Route to the nearest spot.
    let Some(target) = nearest(&visible, user).cloned() else {
        bail!("no nearest spot");
    };
    let route = route_or_fallback(
        &mut GridDirections,
        user,
        target.coordinate,
        f64::from(target.estimated_time_min),
    );
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64;
    println!(
        "Navigating to spot {} ({}): {} via {} vertices, ~{:.0} min, arrive at unix {}",
        target.id,
        target.label(),
        format_distance(route.distance_miles),
        route.coordinates.len(),
        route.duration_min,
        route.arrival_unix_secs(now),
    );

    // 5. Drive.
    let provider =
        SimulatedLocationProvider::along(&route.coordinates, STEP_M).with_jitter(SEED, JITTER_M);
    let mut driver = NavigationDriver::new(provider, map, config.nav.clone())?;
    if !driver.start(route, target.coordinate)? {
        bail!("navigation did not start");
    }

    let mut obs = ProgressObserver::default();
    let summary = driver.run(&mut obs, MAX_STEPS);
    driver.stop();
    println!();

    if obs.arrived.is_none() {
        log::warn!("simulated drive ended before arrival");
    }

    // 6. Summary.
    let last = driver.map.last.map(|c| c.camera);
    let report = serde_json::json!({
        "spots_loaded":  spots.len(),
        "spots_visible": visible.len(),
        "clusters":      clusters.len(),
        "circle": {
            "lat":      circle.center.latitude,
            "lng":      circle.center.longitude,
            "radius_m": circle.radius_m,
        },
        "region": region.map(|r| serde_json::json!({
            "lat":       r.center.latitude,
            "lng":       r.center.longitude,
            "lat_delta": r.lat_delta,
            "lng_delta": r.lng_delta,
        })),
        "target":         target.id,
        "updates":        summary.updates,
        "errors":         summary.errors,
        "arrived":        summary.arrived,
        "camera_moves":   driver.map.moves,
        "final_heading":  last.map(|c| c.heading),
        "final_zoom":     last.map(|c| c.zoom),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
