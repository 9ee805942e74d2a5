//! Shading behaviors referenced by primitives.
//!
//! The core only needs the trait surface: primitives hold an
//! `Arc<dyn Material>` and hand it back in every [`HitRecord`]. The two
//! behaviors here are the minimum an importance-sampled integrator needs:
//! a diffuse reflector and an emitter.

use crate::{hittable::HitRecord, pdf::CosinePdf, Pdf, Ray};
use lume_math::Vec3;
use rand::RngCore;
use std::f32::consts::PI;

/// Color type alias (linear RGB)
pub type Color = Vec3;

/// Outcome of a scattering event.
pub struct ScatterRecord {
    /// Reflectance applied to the incoming radiance
    pub attenuation: Color,
    /// Distribution the material would sample the outgoing direction from
    pub pdf: Box<dyn Pdf>,
}

/// Trait for materials that describe how light interacts with surfaces.
pub trait Material: Send + Sync {
    /// Returns `None` if the ray is absorbed.
    fn scatter(&self, _ray_in: &Ray, _rec: &HitRecord, _rng: &mut dyn RngCore) -> Option<ScatterRecord> {
        None
    }

    /// Density, with respect to solid angle, of this material scattering
    /// `ray_in` into `scattered`.
    fn scattering_pdf(&self, _ray_in: &Ray, _rec: &HitRecord, _scattered: &Ray) -> f32 {
        0.0
    }

    /// Emitted radiance at the hit. Most materials return black.
    fn emitted(&self, _rec: &HitRecord, _u: f32, _v: f32, _p: Vec3) -> Color {
        Color::ZERO
    }
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }
}

impl Material for Lambertian {
    fn scatter(&self, _ray_in: &Ray, rec: &HitRecord, _rng: &mut dyn RngCore) -> Option<ScatterRecord> {
        Some(ScatterRecord {
            attenuation: self.albedo,
            pdf: Box::new(CosinePdf::new(rec.normal)),
        })
    }

    fn scattering_pdf(&self, _ray_in: &Ray, rec: &HitRecord, scattered: &Ray) -> f32 {
        let cosine = rec.normal.dot(scattered.direction().normalize());
        if cosine < 0.0 {
            0.0
        } else {
            cosine / PI
        }
    }
}

/// Diffuse light emitter. Emits from its front face only.
#[derive(Debug, Clone)]
pub struct DiffuseLight {
    emit: Color,
}

impl DiffuseLight {
    pub fn new(emit: Color) -> Self {
        Self { emit }
    }
}

impl Material for DiffuseLight {
    fn emitted(&self, rec: &HitRecord, _u: f32, _v: f32, _p: Vec3) -> Color {
        if rec.front_face {
            self.emit
        } else {
            Color::ZERO
        }
    }
}
