//! Error types for primitive and camera construction and light sampling.

use thiserror::Error;

/// Errors raised by geometric primitives.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("sphere center must be finite")]
    NonFiniteCenter,

    /// The solid-angle cone is undefined when the sampling origin is not
    /// strictly outside the sphere.
    #[error("sampling origin at distance {distance} is not outside sphere of radius {radius}")]
    OriginInsideSphere { distance: f32, radius: f32 },
}

/// Errors raised when a camera configuration cannot produce a valid basis.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CameraError {
    #[error("look_from, look_at and vup must be finite")]
    NonFiniteView,

    #[error("look_from and look_at coincide, view direction is undefined")]
    CoincidentEyeAndTarget,

    #[error("up vector is zero or parallel to the view direction")]
    DegenerateUpVector,

    #[error("vertical field of view must be in (0, 180) degrees, got {0}")]
    InvalidFieldOfView(f32),

    #[error("aspect ratio must be positive, got {0}")]
    InvalidAspectRatio(f32),

    #[error("aperture must be non-negative, got {0}")]
    InvalidAperture(f32),

    #[error("focus distance must be positive, got {0}")]
    InvalidFocusDistance(f32),

    #[error("shutter closes ({time1}) before it opens ({time0})")]
    InvalidShutter { time0: f32, time1: f32 },
}
