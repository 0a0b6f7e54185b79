use crate::geometry::Ray;
use crate::geometry::basic::TriangleData;
use crate::raytracing::surface_interaction::SurfaceInteraction;

/// Trait for objects that can be intersected by rays
pub trait Intersectable {
    /// Nearest hit of `ray` in world space, if any.
    ///
    /// `triangles` is the shared, read-only triangle buffer mesh geometry
    /// indexes into; other shapes ignore it.
    fn intersect(&self, ray: &Ray, triangles: &[TriangleData]) -> Option<SurfaceInteraction>;
}
