//! Tilt compensation for a single sensor sample.

use nalgebra::Vector3;

/// One paired reading from the magnetometer and the accelerometer, both in
/// the device frame (any consistent units; only directions matter).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CompassSample {
    pub mag: Vector3<f64>,
    pub acc: Vector3<f64>,
}

impl CompassSample {
    pub fn new(mag: Vector3<f64>, acc: Vector3<f64>) -> Self {
        Self { mag, acc }
    }
}

/// Heading in degrees, `[0, 360)`, of the device's x axis after undoing the
/// pitch and roll implied by gravity.
///
/// Pitch is `asin(-aₓ)` and roll `asin(a_y / cos pitch)` on the normalised
/// accelerometer vector; the magnetometer is rotated back onto the
/// horizontal plane before taking `atan2(y_h, x_h)`.
///
/// Returns `None` for a zero accelerometer vector or a non-finite result.
pub fn tilt_compensated_heading(sample: &CompassSample) -> Option<f64> {
    let Some(acc) = sample.acc.try_normalize(f64::EPSILON) else {
        log::trace!("compass sample dropped: zero accelerometer vector");
        return None;
    };

    let pitch = (-acc.x).clamp(-1.0, 1.0).asin();
    let roll = (acc.y / pitch.cos()).clamp(-1.0, 1.0).asin();

    let (sp, cp) = pitch.sin_cos();
    let (sr, cr) = roll.sin_cos();
    let m = &sample.mag;

    let xh = m.x * cp + m.z * sp;
    let yh = m.x * sr * sp + m.y * cr - m.z * sr * cp;

    let deg = yh.atan2(xh).to_degrees();
    if !deg.is_finite() {
        return None;
    }
    let h = (deg + 360.0).rem_euclid(360.0);
    Some(if h >= 360.0 { 0.0 } else { h })
}
