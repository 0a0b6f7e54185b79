use crate::geometry::basic::{
    CubeData, MeshData, SphereData, TriangleData, intersect_box, intersect_mesh, intersect_sphere,
};
use crate::geometry::motion::{self, Motion};
use crate::geometry::{InstanceTransform, Ray};
use crate::raytracing::{Intersectable, SurfaceInteraction};

use enumcapsulate::{Encapsulate, VariantDiscriminant};
use ultraviolet::Vec3;

/// Enum that represents all primitive kinds a geometry instance can carry
#[derive(Debug, Clone, PartialEq, Encapsulate, VariantDiscriminant)]
#[enumcapsulate(discriminant(name = ShapeKind))]
pub enum Shape {
    Cube(CubeData),
    Sphere(SphereData),
    Mesh(MeshData),
}

/// A primitive placed in the world by an affine transform, optionally moving
/// linearly over the shutter interval.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryInstance {
    pub shape: Shape,
    transform: InstanceTransform,
    motion: Option<Motion>,
}

impl GeometryInstance {
    pub fn new(shape: impl Into<Shape>, transform: InstanceTransform) -> Self {
        Self {
            shape: shape.into(),
            transform,
            motion: None,
        }
    }

    pub fn cube(transform: InstanceTransform) -> Self {
        Self::new(CubeData, transform)
    }

    pub fn sphere(transform: InstanceTransform) -> Self {
        Self::new(SphereData, transform)
    }

    pub fn mesh(mesh: MeshData, transform: InstanceTransform) -> Self {
        Self::new(mesh, transform)
    }

    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motion = Some(motion);
        self
    }

    pub fn set_motion(&mut self, motion: Option<Motion>) {
        self.motion = motion;
    }

    #[inline]
    pub fn transform(&self) -> &InstanceTransform {
        &self.transform
    }

    #[inline]
    pub fn motion(&self) -> Option<&Motion> {
        self.motion.as_ref()
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.shape.variant_discriminant()
    }

    #[inline(always)]
    fn displacement(&self, time: f32) -> Vec3 {
        motion::displacement(self.motion.as_ref(), time)
    }

    /// `ray` in the instance's local space, direction re-normalized.
    ///
    /// Moving instances are handled by moving the ray origin back by the
    /// displacement at the ray's time.
    #[inline]
    pub(crate) fn local_ray(&self, ray: &Ray) -> Ray {
        let origin = ray.origin - self.displacement(ray.time);

        ray.retarget(
            self.transform.point_to_local(origin),
            self.transform.direction_to_local(ray.direction).normalized(),
        )
    }

    /// Maps a local hit back to world space and measures its distance from the
    /// original (world-space) ray origin.
    #[inline]
    pub(crate) fn to_world(
        &self,
        ray: &Ray,
        local_point: Vec3,
        local_normal: Vec3,
        outside: bool,
    ) -> SurfaceInteraction {
        let point = self.transform.point_to_world(local_point) + self.displacement(ray.time);

        SurfaceInteraction::new(
            (ray.origin - point).mag(),
            point,
            self.transform.normal_to_world(local_normal),
            outside,
        )
    }
}

impl Intersectable for GeometryInstance {
    fn intersect(&self, ray: &Ray, triangles: &[TriangleData]) -> Option<SurfaceInteraction> {
        match &self.shape {
            Shape::Cube(_) => intersect_box(self, ray),
            Shape::Sphere(_) => intersect_sphere(self, ray),
            Shape::Mesh(_) => intersect_mesh(self, ray, triangles),
        }
    }
}
