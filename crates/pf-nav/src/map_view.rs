//! The map-rendering collaborator.

use pf_core::Coordinate;

use crate::CameraCommand;

/// Screen-space padding (points) kept clear when fitting coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgePadding {
    pub top:    u32,
    pub right:  u32,
    pub bottom: u32,
    pub left:   u32,
}

impl EdgePadding {
    /// Same padding top/bottom and left/right.
    pub const fn symmetric(vertical: u32, horizontal: u32) -> Self {
        Self { top: vertical, right: horizontal, bottom: vertical, left: horizontal }
    }
}

/// Accepts camera and viewport commands.  Both are fire-and-forget.
pub trait MapView {
    fn animate_camera(&mut self, command: &CameraCommand);

    /// Fit the viewport so every coordinate is visible.  Default: ignored.
    fn fit_to_coordinates(&mut self, _coords: &[Coordinate], _padding: EdgePadding) {}
}

/// A [`MapView`] that keeps every command it receives.  Useful for tests and
/// headless runs.
#[derive(Default, Debug)]
pub struct RecordingMapView {
    pub cameras: Vec<CameraCommand>,
    pub fits:    Vec<(Vec<Coordinate>, EdgePadding)>,
}

impl RecordingMapView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent camera target, the only one that matters on screen.
    pub fn latest(&self) -> Option<&CameraCommand> {
        self.cameras.last()
    }
}

impl MapView for RecordingMapView {
    fn animate_camera(&mut self, command: &CameraCommand) {
        self.cameras.push(*command);
    }

    fn fit_to_coordinates(&mut self, coords: &[Coordinate], padding: EdgePadding) {
        self.fits.push((coords.to_vec(), padding));
    }
}
