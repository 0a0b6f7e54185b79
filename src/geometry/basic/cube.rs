use crate::geometry::bounds::{SLAB_INFINITY, slab_far, slab_near};
use crate::geometry::{GeometryInstance, Ray};
use crate::raytracing::SurfaceInteraction;
use ultraviolet::Vec3;

/// Half the edge length of the untransformed cube.
pub const CUBE_HALF_EXTENT: f32 = 0.5;

/// Axis-aligned cube spanning `[-0.5, 0.5]` on every axis of its local space.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CubeData;

/// Slab test against the instance's unit cube.
///
/// The entry bound and its face normal only move for slabs entered in front
/// of the origin. If the origin lies inside the cube, the exit face is
/// reported instead, with `outside == false`. Axes the local ray is parallel
/// to are not special-cased: their slab values are infinite or NaN and fail
/// every comparison.
pub fn intersect_box(instance: &GeometryInstance, ray: &Ray) -> Option<SurfaceInteraction> {
    let local = instance.local_ray(ray);
    let origin = local.origin.as_array();
    let direction = local.direction.as_array();

    let mut tmin = -SLAB_INFINITY;
    let mut tmax = SLAB_INFINITY;
    let mut tmin_n = Vec3::zero();
    let mut tmax_n = Vec3::zero();

    for axis in 0..3 {
        let t1 = (-CUBE_HALF_EXTENT - origin[axis]) / direction[axis];
        let t2 = (CUBE_HALF_EXTENT - origin[axis]) / direction[axis];
        let ta = slab_near(t1, t2);
        let tb = slab_far(t1, t2);

        let mut n = [0.0; 3];
        n[axis] = if t2 < t1 { 1.0 } else { -1.0 };

        if ta > 0.0 && ta > tmin {
            tmin = ta;
            tmin_n = Vec3::from(n);
        }
        if tb < tmax {
            tmax = tb;
            n[axis] = -n[axis];
            tmax_n = Vec3::from(n);
        }
    }

    if !(tmax >= tmin && tmax > 0.0) {
        return None;
    }

    let outside = tmin > 0.0;
    let (t, local_normal) = if outside {
        (tmin, tmin_n)
    } else {
        (tmax, tmax_n)
    };

    Some(instance.to_world(ray, local.point_on_ray(t), local_normal, outside))
}
