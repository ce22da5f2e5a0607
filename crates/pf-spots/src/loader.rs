//! CSV spot loader.
//!
//! # CSV format
//!
//! One row per spot.  `available` accepts `true`/`false`; `estimated_time`
//! is whole minutes.
//!
//! ```csv
//! id,latitude,longitude,price,available,address,block,house,estimated_time
//! 1,37.7849,-122.4094,8,true,17th St,Block J2,House 12,30
//! 2,37.7849,-122.4124,6,true,18th St,Block J2,House 14,25
//! ```
//!
//! Loaded spots have `distance_miles = 0` and `is_nearest = false`; run
//! [`annotate_distances`][crate::annotate_distances] against a reference
//! location before displaying them.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use pf_core::Coordinate;

use crate::{ParkingSpot, SpotError, SpotResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SpotRecord {
    id:             String,
    latitude:       f64,
    longitude:      f64,
    price:          f64,
    available:      bool,
    address:        String,
    block:          String,
    house:          String,
    estimated_time: u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load spots from a CSV file, preserving row order.
pub fn load_spots_csv(path: &Path) -> SpotResult<Vec<ParkingSpot>> {
    let file = std::fs::File::open(path)?;
    load_spots_reader(file)
}

/// Like [`load_spots_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for data sets embedded
/// in a binary.
///
/// # Errors
///
/// - [`SpotError::Parse`] for malformed rows,
/// - [`SpotError::InvalidPrice`] for negative or non-finite prices,
/// - [`SpotError::DuplicateId`] when an id repeats.
pub fn load_spots_reader<R: Read>(reader: R) -> SpotResult<Vec<ParkingSpot>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut seen: HashSet<String> = HashSet::new();
    let mut spots = Vec::new();

    for result in csv_reader.deserialize::<SpotRecord>() {
        let row = result.map_err(|e| SpotError::Parse(e.to_string()))?;

        if !row.price.is_finite() || row.price < 0.0 {
            return Err(SpotError::InvalidPrice { id: row.id, price: row.price });
        }
        if !seen.insert(row.id.clone()) {
            return Err(SpotError::DuplicateId(row.id));
        }

        spots.push(ParkingSpot {
            id:                 row.id,
            coordinate:         Coordinate::new(row.latitude, row.longitude),
            price:              row.price,
            available:          row.available,
            address:            row.address,
            block:              row.block,
            house:              row.house,
            estimated_time_min: row.estimated_time,
            distance_miles:     0.0,
            is_nearest:         false,
        });
    }

    log::info!("loaded {} parking spots", spots.len());
    Ok(spots)
}
