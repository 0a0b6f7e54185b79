use crate::geometry::{GeometryInstance, Ray};
use crate::raytracing::SurfaceInteraction;

/// Radius of the untransformed sphere.
pub const SPHERE_RADIUS: f32 = 0.5;

/// Sphere of radius 0.5 centered at the origin of its local space.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SphereData;

/// Intersects `ray` with the instance's sphere.
///
/// Solves `|o + t * d|^2 = r^2` in local space. With both roots in front of
/// the origin the nearer one is taken; with only one in front the ray started
/// inside the sphere and leaves through it.
pub fn intersect_sphere(instance: &GeometryInstance, ray: &Ray) -> Option<SurfaceInteraction> {
    let local = instance.local_ray(ray);

    let b = local.origin.dot(local.direction);
    let radicand = b * b - (local.origin.dot(local.origin) - SPHERE_RADIUS * SPHERE_RADIUS);
    if radicand < 0.0 {
        return None;
    }

    let square_root = radicand.sqrt();
    let t1 = -b + square_root;
    let t2 = -b - square_root;

    let (t, outside) = if t1 < 0.0 && t2 < 0.0 {
        return None;
    } else if t1 > 0.0 && t2 > 0.0 {
        (t1.min(t2), true)
    } else {
        (t1.max(t2), false)
    };

    // centered at the origin, so the local point doubles as the local normal
    let local_point = local.point_on_ray(t);

    Some(instance.to_world(ray, local_point, local_point, outside))
}
