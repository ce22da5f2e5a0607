//! Unit tests for pf-spots.

use std::io::Cursor;

use pf_core::Coordinate;

use crate::{load_spots_reader, ParkingSpot};

// ── Helpers ───────────────────────────────────────────────────────────────────

const USER: Coordinate = Coordinate::new(37.7749, -122.4194);

/// The six demo spots around downtown San Francisco.
const DEMO_CSV: &str = "\
id,latitude,longitude,price,available,address,block,house,estimated_time\n\
1,37.7849,-122.4094,8,true,17th St,Block J2,House 12,30\n\
2,37.7849,-122.4124,6,true,18th St,Block J2,House 14,25\n\
3,37.7879,-122.4154,10,true,19th St,Block K1,House 16,35\n\
4,37.7819,-122.4164,4,true,16th St,Block H3,House 8,20\n\
5,37.7899,-122.4074,12,false,20th St,Block L5,House 20,40\n\
6,37.7809,-122.4134,7,true,15th St,Block G4,House 6,28\n\
";

fn demo_spots() -> Vec<ParkingSpot> {
    load_spots_reader(Cursor::new(DEMO_CSV)).unwrap()
}

fn spot(id: &str, lat: f64, lon: f64, price: f64) -> ParkingSpot {
    ParkingSpot::new(id, Coordinate::new(lat, lon), price)
}

fn ids(spots: &[ParkingSpot]) -> Vec<&str> {
    spots.iter().map(|s| s.id.as_str()).collect()
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;
    use crate::SpotError;

    #[test]
    fn loads_rows_in_order() {
        let spots = demo_spots();
        assert_eq!(ids(&spots), ["1", "2", "3", "4", "5", "6"]);
        let first = &spots[0];
        assert_eq!(first.coordinate, Coordinate::new(37.7849, -122.4094));
        assert_eq!(first.price, 8.0);
        assert_eq!(first.label(), "House 12, Block J2");
        assert_eq!(first.estimated_time_min, 30);
        assert!(!spots[4].available);
        assert!(spots.iter().all(|s| !s.is_nearest));
    }

    #[test]
    fn header_only_is_empty() {
        let csv = "id,latitude,longitude,price,available,address,block,house,estimated_time\n";
        assert!(load_spots_reader(Cursor::new(csv)).unwrap().is_empty());
    }

    #[test]
    fn rejects_negative_price() {
        let csv = "id,latitude,longitude,price,available,address,block,house,estimated_time\n\
                   x,1.0,2.0,-3,true,a,b,c,5\n";
        let err = load_spots_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, SpotError::InvalidPrice { ref id, .. } if id == "x"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let csv = "id,latitude,longitude,price,available,address,block,house,estimated_time\n\
                   a,1.0,2.0,3,true,a,b,c,5\n\
                   a,1.5,2.5,4,true,a,b,c,5\n";
        let err = load_spots_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, SpotError::DuplicateId(ref id) if id == "a"));
    }

    #[test]
    fn rejects_malformed_row() {
        let csv = "id,latitude,longitude,price,available,address,block,house,estimated_time\n\
                   a,north,2.0,3,true,a,b,c,5\n";
        assert!(matches!(load_spots_reader(Cursor::new(csv)), Err(SpotError::Parse(_))));
    }
}

// ── Price filter ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod filter {
    use super::*;
    use crate::{filter_by_price, PriceRange};

    #[test]
    fn exact_price_window() {
        let spots = vec![
            spot("a", 0.0, 0.0, 5.0),
            spot("b", 0.0, 0.0, 4.99),
            spot("c", 0.0, 0.0, 5.0),
            spot("d", 0.0, 0.0, 6.0),
        ];
        assert_eq!(ids(&filter_by_price(&spots, 5.0, 5.0)), ["a", "c"]);
    }

    #[test]
    fn preserves_order_and_bounds_are_inclusive() {
        let spots = demo_spots();
        let kept = filter_by_price(&spots, 6.0, 10.0);
        assert_eq!(ids(&kept), ["1", "2", "3", "6"]);
    }

    #[test]
    fn empty_and_disjoint() {
        assert!(filter_by_price(&[], 0.0, 15.0).is_empty());
        assert!(filter_by_price(&demo_spots(), 20.0, 30.0).is_empty());
    }

    #[test]
    fn full_config_range_keeps_everything() {
        let range = PriceRange::from(&pf_core::AppConfig::default());
        assert_eq!(range.filter(&demo_spots()).len(), 6);
    }
}

// ── Nearest / annotation ──────────────────────────────────────────────────────

#[cfg(test)]
mod nearest {
    use super::*;
    use crate::{annotate_distances, nearest, overview_coordinates};

    #[test]
    fn exactly_one_nearest() {
        let mut spots = demo_spots();
        annotate_distances(&mut spots, USER);

        let flagged: Vec<_> = spots.iter().filter(|s| s.is_nearest).collect();
        assert_eq!(flagged.len(), 1);

        let min = spots.iter().map(|s| s.distance_miles).fold(f64::INFINITY, f64::min);
        assert_eq!(flagged[0].distance_miles, min);
        assert_eq!(flagged[0].id, nearest(&spots, USER).unwrap().id);
    }

    #[test]
    fn ties_resolve_to_first() {
        let mut spots = vec![
            spot("far", 1.0, 1.0, 1.0),
            spot("tie_a", 0.0, 0.1, 1.0),
            spot("tie_b", 0.0, 0.1, 1.0),
        ];
        annotate_distances(&mut spots, Coordinate::new(0.0, 0.0));
        assert!(spots[1].is_nearest);
        assert!(!spots[2].is_nearest);
        assert_eq!(nearest(&spots, Coordinate::new(0.0, 0.0)).unwrap().id, "tie_a");
    }

    #[test]
    fn reannotation_moves_the_flag() {
        let mut spots = vec![spot("a", 0.0, 0.0, 1.0), spot("b", 1.0, 1.0, 1.0)];
        annotate_distances(&mut spots, Coordinate::new(0.0, 0.0));
        assert!(spots[0].is_nearest);

        annotate_distances(&mut spots, Coordinate::new(1.0, 1.0));
        assert!(!spots[0].is_nearest);
        assert!(spots[1].is_nearest);
        assert_eq!(spots[1].distance_miles, 0.0);
    }

    #[test]
    fn empty_set() {
        let mut spots: Vec<ParkingSpot> = Vec::new();
        annotate_distances(&mut spots, USER);
        assert!(nearest(&spots, USER).is_none());
    }

    #[test]
    fn overview_starts_with_user() {
        let spots = demo_spots();
        let coords = overview_coordinates(USER, &spots);
        assert_eq!(coords.len(), 7);
        assert_eq!(coords[0], USER);
        assert_eq!(coords[1], spots[0].coordinate);
    }
}

// ── Clustering spots ──────────────────────────────────────────────────────────

#[cfg(test)]
mod clusters {
    use super::*;
    use crate::cluster_spots;

    #[test]
    fn every_spot_in_exactly_one_cluster() {
        let spots = demo_spots();
        let clusters = cluster_spots(&spots, 0.1);

        let mut seen: Vec<&str> = clusters
            .iter()
            .flat_map(|c| c.items.iter().map(|s| s.id.as_str()))
            .collect();
        seen.sort();
        assert_eq!(seen, ["1", "2", "3", "4", "5", "6"]);
        assert!(clusters.iter().all(|c| c.count() >= 1));
    }

    #[test]
    fn wide_radius_collapses_all() {
        let clusters = cluster_spots(&demo_spots(), 5.0);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].count(), 6);
        assert_eq!(clusters[0].id, "cluster_0");
    }
}
