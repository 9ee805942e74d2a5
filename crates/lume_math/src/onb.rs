use crate::Vec3;

/// Orthonormal basis `(u, v, w)`.
///
/// Used to move sampled directions from a local frame, where `w` is the
/// "up" axis of the distribution, into world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Onb {
    u: Vec3,
    v: Vec3,
    w: Vec3,
}

impl Onb {
    /// Build a right-handed basis whose `w` axis is `n` normalized.
    ///
    /// `n` must be non-zero.
    pub fn from_w(n: Vec3) -> Self {
        let w = n.normalize();
        // Helper axis must not be (nearly) parallel to w.
        let a = if w.x.abs() > 0.9 { Vec3::Y } else { Vec3::X };
        let v = w.cross(a).normalize();
        let u = v.cross(w);
        Self { u, v, w }
    }

    /// Wrap three axes that are already orthonormal.
    pub fn from_uvw(u: Vec3, v: Vec3, w: Vec3) -> Self {
        Self { u, v, w }
    }

    #[inline]
    pub fn u(&self) -> Vec3 {
        self.u
    }

    #[inline]
    pub fn v(&self) -> Vec3 {
        self.v
    }

    #[inline]
    pub fn w(&self) -> Vec3 {
        self.w
    }

    /// Transform local coordinates into world space.
    #[inline]
    pub fn local_xyz(&self, x: f32, y: f32, z: f32) -> Vec3 {
        x * self.u + y * self.v + z * self.w
    }

    /// Transform a local-frame vector into world space.
    #[inline]
    pub fn local(&self, a: Vec3) -> Vec3 {
        self.local_xyz(a.x, a.y, a.z)
    }
}
