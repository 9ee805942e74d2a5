//! Sphere primitive for ray tracing.
//!
//! Besides intersection, a sphere can act as a light for next event
//! estimation: seen from an exterior point it subtends a cone of directions,
//! and [`Sphere::random`](Hittable::random) samples that cone uniformly with
//! the matching density from [`Sphere::pdf_value`](Hittable::pdf_value).

use crate::{
    error::GeometryError,
    hittable::{HitRecord, Hittable},
    sampling, Material, Ray,
};
use lume_math::{Aabb, Interval, Onb, Vec3};
use rand::RngCore;
use std::f32::consts::PI;
use std::sync::Arc;

/// Minimum ray parameter used when re-testing a sampled direction.
const PDF_T_MIN: f32 = 0.001;

/// A static sphere primitive.
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<dyn Material>,
    bbox: Aabb,
}

impl Sphere {
    /// Create a new sphere. The material handle is shared, not copied.
    pub fn new(center: Vec3, radius: f32, material: Arc<dyn Material>) -> Result<Self, GeometryError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(GeometryError::InvalidRadius(radius));
        }
        if !center.is_finite() {
            return Err(GeometryError::NonFiniteCenter);
        }

        let rvec = Vec3::splat(radius);
        let bbox = Aabb::from_points(center - rvec, center + rvec);

        Ok(Self {
            center,
            radius,
            material,
            bbox,
        })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &Arc<dyn Material> {
        &self.material
    }

    /// Get the UV coordinates for a point on the unit sphere.
    ///
    /// `u` runs around the Y axis starting at X = -1, `v` runs from Y = -1 to
    /// Y = +1.
    fn get_sphere_uv(p: Vec3) -> (f32, f32) {
        let theta = (-p.y).clamp(-1.0, 1.0).acos();
        let phi = (-p.z).atan2(p.x) + PI;

        (phi / (2.0 * PI), theta / PI)
    }

    /// Squared distance from `origin` to the center, or an error if `origin`
    /// is not strictly outside the sphere.
    fn exterior_distance_squared(&self, origin: Vec3) -> Result<f32, GeometryError> {
        let distance_squared = (self.center - origin).length_squared();
        if distance_squared <= self.radius * self.radius {
            return Err(GeometryError::OriginInsideSphere {
                distance: distance_squared.sqrt(),
                radius: self.radius,
            });
        }
        Ok(distance_squared)
    }

    /// Solid angle of the cone the sphere subtends from `origin`.
    pub fn solid_angle_from(&self, origin: Vec3) -> Result<f32, GeometryError> {
        let distance_squared = self.exterior_distance_squared(origin)?;

        // 1 - cos(theta_max) written as sin^2 / (1 + cos) to avoid
        // cancellation for small or distant spheres.
        let sin2_theta_max = self.radius * self.radius / distance_squared;
        let cos_theta_max = (1.0 - sin2_theta_max).sqrt();
        Ok(2.0 * PI * sin2_theta_max / (1.0 + cos_theta_max))
    }

    /// Checked form of [`Hittable::pdf_value`].
    pub fn try_pdf_value(&self, origin: Vec3, direction: Vec3) -> Result<f32, GeometryError> {
        let solid_angle = self.solid_angle_from(origin)?;

        if self
            .hit(&Ray::new_simple(origin, direction), Interval::from_min(PDF_T_MIN))
            .is_none()
        {
            return Ok(0.0);
        }

        Ok(1.0 / solid_angle)
    }

    /// Checked form of [`Hittable::random`].
    pub fn try_random(&self, origin: Vec3, rng: &mut dyn RngCore) -> Result<Vec3, GeometryError> {
        let distance_squared = self.exterior_distance_squared(origin)?;

        let uvw = Onb::from_w(self.center - origin);
        let local = sampling::random_to_sphere(rng, self.radius, distance_squared);
        Ok(uvw.local(local).normalize())
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let direction = ray.direction();
        let oc = ray.origin() - self.center;
        let a = direction.length_squared();
        let half_b = oc.dot(direction);

        // Same value as half_b^2 - a*c, without the cancellation near tangency.
        let discriminant = a * self.radius * self.radius - direction.cross(oc).length_squared();
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (-half_b - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (-half_b + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let p = ray.at(root);
        let outward_normal = (p - self.center) / self.radius;

        Some(HitRecord::new(
            ray,
            root,
            outward_normal,
            Self::get_sphere_uv(outward_normal),
            Arc::clone(&self.material),
        ))
    }

    fn bounding_box(&self, _time0: f32, _time1: f32) -> Option<Aabb> {
        Some(self.bbox)
    }

    fn pdf_value(&self, origin: Vec3, direction: Vec3) -> f32 {
        self.try_pdf_value(origin, direction).unwrap_or_else(|err| {
            log::trace!("sphere pdf_value: {err}");
            0.0
        })
    }

    fn random(&self, origin: Vec3, rng: &mut dyn RngCore) -> Vec3 {
        self.try_random(origin, rng).unwrap_or_else(|err| {
            log::trace!("sphere random: {err}");
            (self.center - origin).try_normalize().unwrap_or(Vec3::Z)
        })
    }
}
