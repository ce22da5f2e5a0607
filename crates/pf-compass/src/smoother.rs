//! Exponential smoothing of a compass heading stream.

use pf_core::smooth_heading;

use crate::{tilt_compensated_heading, CompassSample};

/// Fraction of the gap to each new reading that the smoothed heading covers.
pub const DEFAULT_SMOOTHING: f64 = 0.1;

/// Running smoothed heading over a stream of [`CompassSample`]s.
///
/// The first usable sample seeds the heading directly; later samples pull it
/// the shortest way round by `factor`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TiltCompass {
    factor:  f64,
    heading: Option<f64>,
}

impl Default for TiltCompass {
    fn default() -> Self {
        Self::new(DEFAULT_SMOOTHING)
    }
}

impl TiltCompass {
    /// `factor` should lie in `(0, 1]`; `1.0` disables smoothing.
    pub fn new(factor: f64) -> Self {
        Self { factor, heading: None }
    }

    /// Current smoothed heading, or `None` before the first usable sample.
    #[inline]
    pub fn heading(&self) -> Option<f64> {
        self.heading
    }

    /// Fold one sample in.  Unusable samples leave the heading unchanged and
    /// return `None`.
    pub fn push(&mut self, sample: &CompassSample) -> Option<f64> {
        let raw = tilt_compensated_heading(sample)?;
        let next = match self.heading {
            Some(prev) => smooth_heading(prev, raw, self.factor),
            None => raw,
        };
        self.heading = Some(next);
        Some(next)
    }

    pub fn reset(&mut self) {
        self.heading = None;
    }
}

/// Lazily map a sample stream to its smoothed heading stream, skipping
/// samples whose heading is undefined.
pub fn smoothed_headings<I>(samples: I, factor: f64) -> impl Iterator<Item = f64>
where
    I: IntoIterator<Item = CompassSample>,
{
    let mut compass = TiltCompass::new(factor);
    samples.into_iter().filter_map(move |s| compass.push(&s))
}
