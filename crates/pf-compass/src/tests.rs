//! Unit tests for pf-compass.

use nalgebra::{Rotation3, Vector3};

use crate::CompassSample;

/// Earth's field in the level frame for a device facing `heading_deg`, with
/// the given dip below the horizon.
fn field(heading_deg: f64, dip_deg: f64) -> Vector3<f64> {
    let (h, d) = (heading_deg.to_radians(), dip_deg.to_radians());
    Vector3::new(h.cos() * d.cos(), h.sin() * d.cos(), d.sin())
}

fn level(heading_deg: f64) -> CompassSample {
    CompassSample::new(field(heading_deg, 60.0), Vector3::new(0.0, 0.0, 9.81))
}

/// The sample a device tilted by `rotation` (level frame → device frame)
/// would report.
fn tilted(rotation: Rotation3<f64>, heading_deg: f64) -> CompassSample {
    CompassSample::new(
        rotation * field(heading_deg, 60.0),
        rotation * Vector3::new(0.0, 0.0, 9.81),
    )
}

#[cfg(test)]
mod tilt {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::tilt_compensated_heading;

    #[test]
    fn level_cardinals() {
        for h in [0.0, 90.0, 180.0, 270.0] {
            let got = tilt_compensated_heading(&level(h)).unwrap();
            assert_abs_diff_eq!(got, h, epsilon = 1e-9);
        }
    }

    #[test]
    fn pitch_is_compensated() {
        let r = Rotation3::from_axis_angle(&Vector3::y_axis(), -30f64.to_radians());
        let got = tilt_compensated_heading(&tilted(r, 40.0)).unwrap();
        assert_abs_diff_eq!(got, 40.0, epsilon = 1e-9);
    }

    #[test]
    fn roll_is_compensated() {
        let r = Rotation3::from_axis_angle(&Vector3::x_axis(), 25f64.to_radians());
        let got = tilt_compensated_heading(&tilted(r, 300.0)).unwrap();
        assert_abs_diff_eq!(got, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn accelerometer_scale_is_irrelevant() {
        let mut s = level(123.0);
        let a = tilt_compensated_heading(&s).unwrap();
        s.acc *= 0.01;
        let b = tilt_compensated_heading(&s).unwrap();
        assert_abs_diff_eq!(a, b, epsilon = 1e-9);
    }

    #[test]
    fn zero_gravity_is_rejected() {
        let s = CompassSample::new(field(10.0, 60.0), Vector3::zeros());
        assert!(tilt_compensated_heading(&s).is_none());
    }
}

#[cfg(test)]
mod smoother {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{smoothed_headings, TiltCompass};

    #[test]
    fn first_sample_seeds() {
        let mut c = TiltCompass::default();
        assert!(c.heading().is_none());
        assert_abs_diff_eq!(c.push(&level(200.0)).unwrap(), 200.0, epsilon = 1e-9);
    }

    #[test]
    fn crosses_north_the_short_way() {
        let mut c = TiltCompass::default();
        c.push(&level(350.0));
        let h = c.push(&level(10.0)).unwrap();
        assert_abs_diff_eq!(h, 352.0, epsilon = 1e-9);
    }

    #[test]
    fn bad_samples_leave_heading_alone() {
        let mut c = TiltCompass::new(0.5);
        c.push(&level(90.0));
        let bad = CompassSample::new(field(0.0, 60.0), Vector3::zeros());
        assert!(c.push(&bad).is_none());
        assert_abs_diff_eq!(c.heading().unwrap(), 90.0, epsilon = 1e-9);

        c.reset();
        assert!(c.heading().is_none());
    }

    #[test]
    fn stream_converges_and_skips_gaps() {
        let bad = CompassSample::new(field(0.0, 60.0), Vector3::zeros());
        let samples = std::iter::once(level(0.0))
            .chain(std::iter::once(bad))
            .chain(std::iter::repeat(level(90.0)).take(60));
        let out: Vec<f64> = smoothed_headings(samples, 0.1).collect();

        assert_eq!(out.len(), 61);
        assert!(out.windows(2).all(|w| w[1] >= w[0] - 1e-9));
        assert_abs_diff_eq!(*out.last().unwrap(), 90.0, epsilon = 0.5);
    }
}
