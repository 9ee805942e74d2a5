//! Random sampling helpers.
//!
//! Every helper takes the random source explicitly so callers decide how
//! randomness is shared: one generator per worker thread, or a seeded
//! generator for reproducible tests.

use lume_math::Vec3;
use rand::{Rng, RngCore};
use std::f32::consts::PI;

/// Uniform `f32` in `[0, 1)`.
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Uniform `f32` in `[min, max)`. Returns `min` for an empty range.
#[inline]
pub fn gen_range_f32(rng: &mut dyn RngCore, min: f32, max: f32) -> f32 {
    min + (max - min) * gen_f32(rng)
}

/// Random point in the unit disk on the z = 0 plane.
pub fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(
            gen_range_f32(rng, -1.0, 1.0),
            gen_range_f32(rng, -1.0, 1.0),
            0.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Random unit vector, uniform over the sphere of directions.
pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let v = Vec3::new(
            gen_range_f32(rng, -1.0, 1.0),
            gen_range_f32(rng, -1.0, 1.0),
            gen_range_f32(rng, -1.0, 1.0),
        );
        let len_sq = v.length_squared();
        if len_sq > 1e-6 && len_sq <= 1.0 {
            return v / len_sq.sqrt();
        }
    }
}

/// Cosine-weighted direction about +Z.
pub fn random_cosine_direction(rng: &mut dyn RngCore) -> Vec3 {
    let r1 = gen_f32(rng);
    let r2 = gen_f32(rng);

    let phi = 2.0 * PI * r1;
    let x = phi.cos() * r2.sqrt();
    let y = phi.sin() * r2.sqrt();
    let z = (1.0 - r2).sqrt();

    Vec3::new(x, y, z)
}

/// Direction about +Z, uniform over the cone subtended by a sphere of
/// `radius` whose center lies `sqrt(distance_squared)` along +Z.
///
/// Requires `distance_squared > radius * radius`.
pub fn random_to_sphere(rng: &mut dyn RngCore, radius: f32, distance_squared: f32) -> Vec3 {
    let r1 = gen_f32(rng);
    let r2 = gen_f32(rng);

    // z = 1 + r2 * (cos_theta_max - 1), with 1 - cos_theta_max taken as
    // sin^2 / (1 + cos) so tiny cones keep their width. sin_theta comes from
    // 1 - z directly since z itself rounds to 1 for distant spheres.
    let sin2_theta_max = radius * radius / distance_squared;
    let cos_theta_max = (1.0 - sin2_theta_max).sqrt();
    let one_minus_z = r2 * sin2_theta_max / (1.0 + cos_theta_max);
    let z = 1.0 - one_minus_z;

    let phi = 2.0 * PI * r1;
    let sin_theta = (one_minus_z * (2.0 - one_minus_z)).max(0.0).sqrt();
    let x = phi.cos() * sin_theta;
    let y = phi.sin() * sin_theta;

    Vec3::new(x, y, z)
}
