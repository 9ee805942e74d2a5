//! Lume trace - geometric and sampling core of the Lume path tracer.
//!
//! Provides the pieces an integrator calls once per Monte Carlo sample:
//!
//! - **Camera**: thin-lens ray generation with depth of field and a shutter
//!   interval for motion blur ([`Camera`], [`CameraConfig`])
//! - **Sphere**: analytic intersection, exact bounds, UV parameterization and
//!   solid-angle light sampling ([`Sphere`])
//! - **Importance sampling**: direction densities that combine light and
//!   material sampling ([`pdf`])
//!
//! All types are immutable after construction and `Send + Sync`. Randomness
//! is always passed in as `&mut dyn RngCore`, so each worker thread owns its
//! generator and tests can use seeded ones.
//!
//! # Example
//!
//! ```ignore
//! use lume_trace::{CameraConfig, Hittable, Interval, Lambertian, Sphere, Vec3};
//! use rand::SeedableRng;
//! use std::sync::Arc;
//!
//! let camera = CameraConfig::default().with_lens(40.0, 0.1, 5.0).build()?;
//! let ball = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, Arc::new(Lambertian::new(Vec3::splat(0.5))))?;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! let ray = camera.get_ray(0.5, 0.5, &mut rng);
//! if let Some(rec) = ball.hit(&ray, Interval::from_min(0.001)) {
//!     println!("hit at t = {}", rec.t);
//! }
//! ```

mod camera;
mod error;
mod hittable;
mod material;
pub mod pdf;
pub mod sampling;
mod sphere;

pub use camera::{Camera, CameraConfig};
pub use error::{CameraError, GeometryError};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Color, DiffuseLight, Lambertian, Material, ScatterRecord};
pub use pdf::{CosinePdf, HittablePdf, MixturePdf, Pdf};
pub use sphere::Sphere;

/// Re-export the math types from lume_math
pub use lume_math::{Aabb, Interval, Onb, Ray, Vec3};
