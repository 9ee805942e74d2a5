//! Direction distributions for importance sampling.
//!
//! An integrator typically mixes a material's own distribution with one that
//! aims at the lights ([`MixturePdf`] of a [`CosinePdf`] and a
//! [`HittablePdf`]), draws a direction from the mixture and divides by the
//! mixture density. Occlusion between the sampling origin and the light is
//! not accounted for here; the integrator still has to trace the ray.

use crate::{sampling, Hittable};
use lume_math::{Onb, Vec3};
use rand::RngCore;
use std::f32::consts::PI;

/// A probability density over directions (solid-angle measure).
pub trait Pdf {
    fn value(&self, direction: Vec3) -> f32;

    fn generate(&self, rng: &mut dyn RngCore) -> Vec3;
}

/// Cosine-weighted hemisphere about a normal.
#[derive(Debug, Clone, Copy)]
pub struct CosinePdf {
    uvw: Onb,
}

impl CosinePdf {
    pub fn new(w: Vec3) -> Self {
        Self { uvw: Onb::from_w(w) }
    }
}

impl Pdf for CosinePdf {
    fn value(&self, direction: Vec3) -> f32 {
        let cosine_theta = direction.normalize().dot(self.uvw.w());
        (cosine_theta / PI).max(0.0)
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Vec3 {
        self.uvw.local(sampling::random_cosine_direction(rng))
    }
}

/// Directions from a fixed origin toward a sampleable object.
pub struct HittablePdf<'a> {
    object: &'a dyn Hittable,
    origin: Vec3,
}

impl<'a> HittablePdf<'a> {
    pub fn new(object: &'a dyn Hittable, origin: Vec3) -> Self {
        Self { object, origin }
    }
}

impl Pdf for HittablePdf<'_> {
    fn value(&self, direction: Vec3) -> f32 {
        self.object.pdf_value(self.origin, direction)
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Vec3 {
        self.object.random(self.origin, rng)
    }
}

/// Equal-weight mixture of two densities.
pub struct MixturePdf<'a> {
    p: [&'a dyn Pdf; 2],
}

impl<'a> MixturePdf<'a> {
    pub fn new(p0: &'a dyn Pdf, p1: &'a dyn Pdf) -> Self {
        Self { p: [p0, p1] }
    }
}

impl Pdf for MixturePdf<'_> {
    fn value(&self, direction: Vec3) -> f32 {
        0.5 * self.p[0].value(direction) + 0.5 * self.p[1].value(direction)
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Vec3 {
        if sampling::gen_f32(rng) < 0.5 {
            self.p[0].generate(rng)
        } else {
            self.p[1].generate(rng)
        }
    }
}
