//! Thin-lens camera for ray generation.
//!
//! Rays start on a lens disk of radius `aperture / 2` and pass through a fixed
//! point on the focal plane, so geometry at `focus_dist` stays sharp while
//! everything else blurs. Each ray also carries an instant drawn uniformly
//! from the shutter interval for motion blur.

use crate::{error::CameraError, sampling, Ray};
use lume_math::{Interval, Onb, Vec3};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Framing parameters a camera is built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub look_from: Vec3,
    pub look_at: Vec3,
    pub vup: Vec3,
    /// Vertical field of view in degrees
    pub vfov: f32,
    pub aspect_ratio: f32,
    /// Lens diameter; 0 gives a pinhole camera
    pub aperture: f32,
    /// Distance from the eye to the plane of perfect focus
    pub focus_dist: f32,
    /// Shutter open time
    pub time0: f32,
    /// Shutter close time
    pub time1: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            look_from: Vec3::ZERO,
            look_at: Vec3::NEG_Z,
            vup: Vec3::Y,
            vfov: 90.0,
            aspect_ratio: 16.0 / 9.0,
            aperture: 0.0,
            focus_dist: 1.0,
            time0: 0.0,
            time1: 0.0,
        }
    }
}

impl CameraConfig {
    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f32, aperture: f32, focus_dist: f32) -> Self {
        self.vfov = vfov;
        self.aperture = aperture;
        self.focus_dist = focus_dist;
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: f32) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Set shutter open/close times.
    pub fn with_shutter(mut self, time0: f32, time1: f32) -> Self {
        self.time0 = time0;
        self.time1 = time1;
        self
    }

    /// Validate and build the camera.
    pub fn build(&self) -> Result<Camera, CameraError> {
        Camera::new(self)
    }
}

/// Camera for generating rays into the scene.
#[derive(Debug, Clone)]
pub struct Camera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    basis: Onb,
    lens_radius: f32,
    shutter: Interval,
}

impl Camera {
    pub fn new(config: &CameraConfig) -> Result<Self, CameraError> {
        let CameraConfig {
            look_from,
            look_at,
            vup,
            vfov,
            aspect_ratio,
            aperture,
            focus_dist,
            time0,
            time1,
        } = *config;

        if !(look_from.is_finite() && look_at.is_finite() && vup.is_finite()) {
            return Err(CameraError::NonFiniteView);
        }
        if !(vfov > 0.0 && vfov < 180.0) {
            return Err(CameraError::InvalidFieldOfView(vfov));
        }
        if !(aspect_ratio.is_finite() && aspect_ratio > 0.0) {
            return Err(CameraError::InvalidAspectRatio(aspect_ratio));
        }
        if !(aperture.is_finite() && aperture >= 0.0) {
            return Err(CameraError::InvalidAperture(aperture));
        }
        if !(focus_dist.is_finite() && focus_dist > 0.0) {
            return Err(CameraError::InvalidFocusDistance(focus_dist));
        }
        if !(time0.is_finite() && time1.is_finite() && time0 <= time1) {
            return Err(CameraError::InvalidShutter { time0, time1 });
        }

        // Calculate viewport dimensions
        let h = (vfov.to_radians() / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = aspect_ratio * viewport_height;

        // Calculate camera basis vectors
        let w = (look_from - look_at)
            .try_normalize()
            .ok_or(CameraError::CoincidentEyeAndTarget)?;
        let side = vup.cross(w);
        if side.length_squared() <= 1e-12 * vup.length_squared() {
            return Err(CameraError::DegenerateUpVector);
        }
        let u = side.try_normalize().ok_or(CameraError::DegenerateUpVector)?;
        let v = w.cross(u);

        let origin = look_from;
        let horizontal = focus_dist * viewport_width * u;
        let vertical = focus_dist * viewport_height * v;
        let lower_left_corner = origin - horizontal / 2.0 - vertical / 2.0 - focus_dist * w;

        log::debug!(
            "camera: from {look_from} to {look_at}, vfov {vfov}, aspect {aspect_ratio}, \
             aperture {aperture}, focus {focus_dist}, shutter [{time0}, {time1}]"
        );

        Ok(Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
            basis: Onb::from_uvw(u, v, w),
            lens_radius: aperture / 2.0,
            shutter: Interval::new(time0, time1),
        })
    }

    /// Generate a ray through normalized image-plane coordinates `(s, t)`,
    /// `(0, 0)` at the lower-left corner and `(1, 1)` at the upper-right.
    pub fn get_ray(&self, s: f32, t: f32, rng: &mut dyn RngCore) -> Ray {
        let offset = if self.lens_radius > 0.0 {
            let rd = self.lens_radius * sampling::random_in_unit_disk(rng);
            self.basis.u() * rd.x + self.basis.v() * rd.y
        } else {
            Vec3::ZERO
        };

        let ray_time = self.shutter.lerp(sampling::gen_f32(rng));

        Ray::new(
            self.origin + offset,
            self.focus_point(s, t) - self.origin - offset,
            ray_time,
        )
    }

    /// Point on the focal plane that `(s, t)` maps to.
    pub fn focus_point(&self, s: f32, t: f32) -> Vec3 {
        self.lower_left_corner + s * self.horizontal + t * self.vertical
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Viewing basis; `w` points from the target back toward the eye.
    pub fn basis(&self) -> Onb {
        self.basis
    }

    pub fn lens_radius(&self) -> f32 {
        self.lens_radius
    }

    pub fn shutter(&self) -> Interval {
        self.shutter
    }
}
