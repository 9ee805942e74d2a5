//! Lume math - shared geometric types for the sphere/camera core.
//!
//! Re-exports `glam` so downstream crates use a single vector type, and adds
//! the small value types the tracer needs: rays, parametric intervals,
//! axis-aligned boxes and orthonormal bases.

// Re-export glam for convenience
pub use glam::*;

mod aabb;
mod interval;
mod onb;
mod ray;

pub use aabb::Aabb;
pub use interval::Interval;
pub use onb::Onb;
pub use ray::Ray;
