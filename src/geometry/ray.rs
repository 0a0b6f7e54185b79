use ultraviolet::Vec3;

/// Bias subtracted from a ray parameter before evaluating a hit point, so the
/// next ray spawned from that point does not re-hit the same surface.
pub const RAY_EPSILON: f32 = 1e-4;

#[derive(Clone, Debug, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    /// Sample time in `[0, 1]`, used to place moving geometry.
    pub time: f32,
}

impl Ray {
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self::with_time(origin, direction, 0.0)
    }

    #[inline]
    pub fn with_time(origin: Vec3, direction: Vec3, time: f32) -> Self {
        Self {
            origin,
            direction: direction.normalized(),
            time,
        }
    }

    /// Builds a ray from an already transformed origin/direction pair without
    /// re-normalizing, keeping the sample time of `self`.
    #[inline]
    pub(crate) fn retarget(&self, origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            time: self.time,
        }
    }

    #[inline(always)]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }

    /// Point at parameter `t`, pulled back towards the origin by [`RAY_EPSILON`].
    #[inline(always)]
    pub fn point_on_ray(&self, t: f32) -> Vec3 {
        point_on_ray(self, t)
    }
}

/// `origin + (t - RAY_EPSILON) * normalize(direction)`
#[inline(always)]
pub fn point_on_ray(ray: &Ray, t: f32) -> Vec3 {
    ray.origin + (t - RAY_EPSILON) * ray.direction.normalized()
}
