//! Hittable trait and HitRecord for ray-object intersection.

use crate::{Material, Ray};
use lume_math::{Aabb, Interval, Vec3};
use rand::{Rng, RngCore};
use std::sync::Arc;

/// Record of a ray-object intersection.
#[derive(Clone)]
pub struct HitRecord {
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal, always pointing against the incoming ray
    pub normal: Vec3,
    /// Shading behavior of the surface that was hit
    pub material: Arc<dyn Material>,
    /// Surface parameters in [0, 1]
    pub u: f32,
    pub v: f32,
    /// Ray parameter of the intersection
    pub t: f32,
    /// Whether the ray hit the outer side of the surface
    pub front_face: bool,
}

impl HitRecord {
    /// Build a record for `ray` at parameter `t`, orienting `outward_normal`
    /// against the ray.
    pub fn new(
        ray: &Ray,
        t: f32,
        outward_normal: Vec3,
        (u, v): (f32, f32),
        material: Arc<dyn Material>,
    ) -> Self {
        let mut rec = Self {
            p: ray.at(t),
            normal: outward_normal,
            material,
            u,
            v,
            t,
            front_face: true,
        };
        rec.set_face_normal(ray, outward_normal);
        rec
    }

    /// Set the face normal based on ray direction and outward normal.
    ///
    /// `outward_normal` is assumed to have unit length.
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3) {
        // If the ray and normal point in the same direction, we're inside
        self.front_face = ray.direction().dot(outward_normal) < 0.0;

        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

impl std::fmt::Debug for HitRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HitRecord")
            .field("p", &self.p)
            .field("normal", &self.normal)
            .field("u", &self.u)
            .field("v", &self.v)
            .field("t", &self.t)
            .field("front_face", &self.front_face)
            .finish_non_exhaustive()
    }
}

/// Capabilities shared by every primitive and aggregate.
pub trait Hittable: Send + Sync {
    /// Nearest intersection with parameter strictly inside `ray_t`.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord>;

    /// Box enclosing the object over the shutter interval `[time0, time1]`.
    ///
    /// Returns `None` for objects with no extent (an empty aggregate).
    fn bounding_box(&self, time0: f32, time1: f32) -> Option<Aabb>;

    /// Solid-angle density of [`Hittable::random`] producing `direction`
    /// from `origin`. Objects that cannot be sampled return 0.
    fn pdf_value(&self, _origin: Vec3, _direction: Vec3) -> f32 {
        0.0
    }

    /// Sample a direction from `origin` toward this object.
    fn random(&self, _origin: Vec3, _rng: &mut dyn RngCore) -> Vec3 {
        Vec3::X
    }
}

/// A list of hittable objects.
///
/// Also usable as a composite light: sampling picks a member uniformly and
/// the density is the average of the members' densities.
pub struct HittableList {
    objects: Vec<Arc<dyn Hittable>>,
    bbox: Aabb,
}

impl HittableList {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            bbox: Aabb::EMPTY,
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: Arc<dyn Hittable>) {
        if let Some(object_box) = object.bounding_box(0.0, 0.0) {
            self.bbox = Aabb::surrounding(&self.bbox, &object_box);
        }
        self.objects.push(object);
    }

    pub fn clear(&mut self) {
        self.objects.clear();
        self.bbox = Aabb::EMPTY;
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn objects(&self) -> &[Arc<dyn Hittable>] {
        &self.objects
    }
}

impl Default for HittableList {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        if !self.bbox.hit(ray, ray_t) {
            return None;
        }

        let mut closest: Option<HitRecord> = None;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            if let Some(rec) = object.hit(ray, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }

    fn bounding_box(&self, time0: f32, time1: f32) -> Option<Aabb> {
        self.objects
            .iter()
            .filter_map(|o| o.bounding_box(time0, time1))
            .reduce(|acc, b| Aabb::surrounding(&acc, &b))
    }

    fn pdf_value(&self, origin: Vec3, direction: Vec3) -> f32 {
        if self.objects.is_empty() {
            return 0.0;
        }

        let weight = 1.0 / self.objects.len() as f32;
        self.objects
            .iter()
            .map(|o| weight * o.pdf_value(origin, direction))
            .sum()
    }

    fn random(&self, origin: Vec3, rng: &mut dyn RngCore) -> Vec3 {
        if self.objects.is_empty() {
            return Vec3::X;
        }

        let index = rng.gen_range(0..self.objects.len());
        self.objects[index].random(origin, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Lambertian, Sphere};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn gray() -> Arc<dyn Material> {
        Arc::new(Lambertian::new(Vec3::splat(0.5)))
    }

    fn sphere(center: Vec3, radius: f32) -> Arc<dyn Hittable> {
        Arc::new(Sphere::new(center, radius, gray()).unwrap())
    }

    #[test]
    fn test_set_face_normal() {
        let ray = Ray::new_simple(Vec3::ZERO, -Vec3::Z);

        let front = HitRecord::new(&ray, 1.0, Vec3::Z, (0.0, 0.0), gray());
        assert!(front.front_face);
        assert_eq!(front.normal, Vec3::Z);
        assert_eq!(front.p, -Vec3::Z);

        let back = HitRecord::new(&ray, 1.0, -Vec3::Z, (0.0, 0.0), gray());
        assert!(!back.front_face);
        assert_eq!(back.normal, Vec3::Z);
    }

    #[test]
    fn test_list_returns_closest() {
        let mut world = HittableList::new();
        world.add(sphere(Vec3::new(0.0, 0.0, -10.0), 1.0));
        world.add(sphere(Vec3::new(0.0, 0.0, -4.0), 1.0));
        assert_eq!(world.len(), 2);

        let ray = Ray::new_simple(Vec3::ZERO, -Vec3::Z);
        let rec = world.hit(&ray, Interval::from_min(0.001)).expect("should hit");
        assert!((rec.t - 3.0).abs() < 1e-4);

        // Window that excludes the nearer sphere
        let rec = world.hit(&ray, Interval::new(6.0, 100.0)).expect("should hit far sphere");
        assert!((rec.t - 9.0).abs() < 1e-4);
    }

    #[test]
    fn test_list_bounding_box() {
        let mut world = HittableList::default();
        assert!(world.is_empty());
        assert!(world.bounding_box(0.0, 1.0).is_none());

        world.add(sphere(Vec3::new(-2.0, 0.0, 0.0), 1.0));
        world.add(sphere(Vec3::new(3.0, 1.0, 0.0), 0.5));

        let bbox = world.bounding_box(0.0, 1.0).unwrap();
        assert_eq!(bbox.min(), Vec3::new(-3.0, -1.0, -1.0));
        assert_eq!(bbox.max(), Vec3::new(3.5, 1.5, 1.0));

        world.clear();
        assert!(world.hit(&Ray::default(), Interval::UNIVERSE).is_none());
    }

    #[test]
    fn test_list_pdf_is_average_of_members() {
        let near = sphere(Vec3::new(0.0, 0.0, -5.0), 1.0);
        let far = sphere(Vec3::new(0.0, 5.0, 0.0), 1.0);

        let mut lights = HittableList::new();
        lights.add(near.clone());
        lights.add(far.clone());

        let origin = Vec3::ZERO;
        let toward_near = -Vec3::Z;
        let expected = 0.5 * near.pdf_value(origin, toward_near);
        assert!(expected > 0.0);
        assert!((lights.pdf_value(origin, toward_near) - expected).abs() < 1e-6);

        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            let d = lights.random(origin, &mut rng);
            assert!(lights.hit(&Ray::new_simple(origin, d), Interval::from_min(0.001)).is_some());
        }
    }
}
