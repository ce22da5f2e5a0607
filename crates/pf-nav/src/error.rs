//! Navigation error types.

use thiserror::Error;

use pf_core::{Coordinate, PfError};

/// A failure reported by the device location provider.
///
/// Always recoverable from the tracker's point of view: the session keeps
/// its last known state and waits for the next reading.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("position unavailable")]
    PositionUnavailable,

    #[error("location request timed out")]
    Timeout,

    #[error("location provider error: {0}")]
    Provider(String),
}

/// A failure reported by the directions provider.
#[derive(Debug, Error)]
pub enum DirectionsError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: Coordinate, to: Coordinate },

    #[error("directions provider error: {0}")]
    Provider(String),
}

#[derive(Debug, Error)]
pub enum NavError {
    #[error("location error: {0}")]
    Location(#[from] LocationError),

    #[error("directions error: {0}")]
    Directions(#[from] DirectionsError),

    #[error(transparent)]
    Config(#[from] PfError),
}

pub type NavResult<T> = Result<T, NavError>;
