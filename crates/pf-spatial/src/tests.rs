//! Unit tests for pf-spatial.
//!
//! All tests use hand-placed coordinates around downtown San Francisco.

#[cfg(test)]
mod helpers {
    use pf_core::{Coordinate, EARTH_RADIUS_MILES, METERS_PER_MILE};

    /// A labelled point so tests can check which input went where.
    #[derive(Clone, Debug, PartialEq)]
    pub struct Pin {
        pub label: &'static str,
        pub at:    Coordinate,
    }

    impl pf_core::Located for Pin {
        fn coordinate(&self) -> Coordinate {
            self.at
        }
    }

    pub fn pin(label: &'static str, lat: f64, lon: f64) -> Pin {
        Pin { label, at: Coordinate::new(lat, lon) }
    }

    /// Degrees of latitude spanning `metres` along a meridian.
    pub fn lat_deg_for_m(metres: f64) -> f64 {
        (metres / (EARTH_RADIUS_MILES * METERS_PER_MILE)).to_degrees()
    }

    pub fn labels(items: &[Pin]) -> Vec<&'static str> {
        items.iter().map(|p| p.label).collect()
    }
}

// ── Clustering ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod clustering {
    use approx::assert_relative_eq;
    use pf_core::Coordinate;

    use super::helpers::{labels, lat_deg_for_m, pin};
    use crate::cluster;

    #[test]
    fn empty_input() {
        assert!(cluster::<Coordinate>(&[], 0.1).is_empty());
    }

    #[test]
    fn identical_points_form_one_cluster() {
        let pins: Vec<_> = ["a", "b", "c", "d"]
            .into_iter()
            .map(|l| pin(l, 37.7849, -122.4094))
            .collect();

        let clusters = cluster(&pins, 0.1);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].count(), 4);
        assert_eq!(labels(&clusters[0].items), ["a", "b", "c", "d"]);
        assert_eq!(clusters[0].coordinate, Coordinate::new(37.7849, -122.4094));
    }

    #[test]
    fn far_points_stay_singletons_in_input_order() {
        // ~1.1 km apart each, threshold 0.1 mi (~160 m).
        let pins = [
            pin("a", 37.70, -122.40),
            pin("b", 37.71, -122.40),
            pin("c", 37.72, -122.40),
        ];
        let clusters = cluster(&pins, 0.1);
        assert_eq!(clusters.len(), 3);
        for (c, expected) in clusters.iter().zip(["a", "b", "c"]) {
            assert!(c.is_singleton());
            assert_eq!(c.seed().label, expected);
        }
        let ids: Vec<_> = clusters.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["cluster_0", "cluster_1", "cluster_2"]);
    }

    #[test]
    fn no_transitive_chaining() {
        // a-b and b-c are each 120 m apart; a-c is 240 m.  Threshold 150 m.
        let step = lat_deg_for_m(120.0);
        let pins = [
            pin("a", 37.0, -122.0),
            pin("b", 37.0 + step, -122.0),
            pin("c", 37.0 + 2.0 * step, -122.0),
        ];
        let clusters = cluster(&pins, 150.0 / pf_core::METERS_PER_MILE);

        assert_eq!(clusters.len(), 2);
        assert_eq!(labels(&clusters[0].items), ["a", "b"]);
        assert_eq!(labels(&clusters[1].items), ["c"]);
        assert_eq!(clusters[1].id, "cluster_2");
    }

    #[test]
    fn order_changes_assignment_but_is_deterministic() {
        let step = lat_deg_for_m(120.0);
        let a = pin("a", 37.0, -122.0);
        let b = pin("b", 37.0 + step, -122.0);
        let c = pin("c", 37.0 + 2.0 * step, -122.0);
        let threshold = 150.0 / pf_core::METERS_PER_MILE;

        // Seeding from the middle captures both neighbours.
        let middle_first = [b.clone(), a.clone(), c.clone()];
        let clusters = cluster(&middle_first, threshold);
        assert_eq!(clusters.len(), 1);
        assert_eq!(labels(&clusters[0].items), ["b", "a", "c"]);

        let first = cluster(&middle_first, threshold);
        let second = cluster(&middle_first, threshold);
        assert_eq!(first, second);
    }

    #[test]
    fn threshold_is_inclusive() {
        let a = Coordinate::new(37.0, -122.0);
        let b = Coordinate::new(37.001, -122.0);
        let d = pf_core::distance(a, b);
        assert_eq!(cluster(&[a, b], d).len(), 1);
    }

    #[test]
    fn centroid_is_mean_of_members() {
        let pins = [pin("a", 37.0000, -122.0000), pin("b", 37.0010, -122.0010)];
        let clusters = cluster(&pins, 1.0);
        assert_eq!(clusters.len(), 1);
        assert_relative_eq!(clusters[0].coordinate.latitude, 37.0005, epsilon = 1e-12);
        assert_relative_eq!(clusters[0].coordinate.longitude, -122.0005, epsilon = 1e-12);
    }
}

// ── Bounding circle ───────────────────────────────────────────────────────────

#[cfg(test)]
mod circle {
    use approx::assert_relative_eq;
    use pf_core::Coordinate;

    use super::helpers::lat_deg_for_m;
    use crate::{bounding_circle, DISPLAY_PADDING};

    #[test]
    fn empty_is_none() {
        assert!(bounding_circle::<Coordinate>(&[]).is_none());
    }

    #[test]
    fn single_point() {
        let p = Coordinate::new(37.7749, -122.4194);
        let c = bounding_circle(&[p]).unwrap();
        assert_eq!(c.center, p);
        assert_eq!(c.radius_m, 0.0);
    }

    #[test]
    fn two_points_one_km_apart() {
        let a = Coordinate::new(37.0, -122.0);
        let b = Coordinate::new(37.0 + lat_deg_for_m(1_000.0), -122.0);
        let c = bounding_circle(&[a, b]).unwrap();

        assert!((c.radius_m - 500.0).abs() < 1.0, "got {}", c.radius_m);
        assert_relative_eq!(c.center.latitude, (a.latitude + b.latitude) / 2.0, epsilon = 1e-12);
        assert_relative_eq!(c.center.longitude, -122.0, epsilon = 1e-12);
    }

    #[test]
    fn encloses_every_point() {
        let pts = [
            Coordinate::new(37.7849, -122.4094),
            Coordinate::new(37.7849, -122.4124),
            Coordinate::new(37.7879, -122.4154),
            Coordinate::new(37.7819, -122.4164),
            Coordinate::new(37.7809, -122.4134),
        ];
        let c = bounding_circle(&pts).unwrap();
        assert!(pts.iter().all(|&p| c.contains(p)));
        assert!(c.padded_radius_m(DISPLAY_PADDING) > c.radius_m);
    }

    #[test]
    fn accepts_references() {
        let pts = [Coordinate::new(1.0, 1.0), Coordinate::new(1.0, 1.0)];
        let refs: Vec<&Coordinate> = pts.iter().collect();
        assert_eq!(bounding_circle(&refs).unwrap().radius_m, 0.0);
    }
}
