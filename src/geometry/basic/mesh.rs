use crate::error::GeometryError;
use crate::geometry::basic::{TriangleData, intersect_triangle_parametric};
use crate::geometry::{BoundingBox, GeometryInstance, Ray, Shape};
use crate::raytracing::SurfaceInteraction;
use std::ops::Range;

/// A mesh instance's slice of the shared triangle buffer plus the local-space
/// box enclosing it.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    /// Half-open index range into the triangle buffer.
    pub triangles: Range<usize>,
    pub bounds: BoundingBox,
}

impl MeshData {
    pub fn new(triangles: Range<usize>, bounds: BoundingBox) -> Self {
        Self { triangles, bounds }
    }

    /// Takes the range from `buffer` and computes its bounding box.
    pub fn from_buffer(
        triangles: Range<usize>,
        buffer: &[TriangleData],
    ) -> Result<Self, GeometryError> {
        let slice = buffer.get(triangles.clone()).ok_or_else(|| {
            GeometryError::TriangleRangeOutOfBounds {
                range: triangles.clone(),
                len: buffer.len(),
            }
        })?;
        let bounds = BoundingBox::from_triangles(slice).ok_or(GeometryError::EmptyMesh)?;

        Ok(Self::new(triangles, bounds))
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

/// Whether a mesh test first rejects rays against the mesh's bounding box.
///
/// Only the cost of a miss depends on this, never the result.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MeshCulling {
    None,
    BoundingBox,
}

impl Default for MeshCulling {
    fn default() -> Self {
        if cfg!(feature = "bounding_box_culling") {
            MeshCulling::BoundingBox
        } else {
            MeshCulling::None
        }
    }
}

/// Intersects `ray` with a mesh instance using the default [`MeshCulling`].
pub fn intersect_mesh(
    instance: &GeometryInstance,
    ray: &Ray,
    triangles: &[TriangleData],
) -> Option<SurfaceInteraction> {
    intersect_mesh_with(instance, ray, triangles, MeshCulling::default())
}

/// Intersects `ray` with every triangle of a mesh instance and keeps the
/// nearest hit.
///
/// The reported normal is the interpolated vertex normal, flipped to face the
/// incoming ray; `outside` is `false` when it had to be flipped. Instances
/// that are not meshes, or whose range does not fit `triangles`, never hit.
pub fn intersect_mesh_with(
    instance: &GeometryInstance,
    ray: &Ray,
    triangles: &[TriangleData],
    culling: MeshCulling,
) -> Option<SurfaceInteraction> {
    let Shape::Mesh(mesh) = &instance.shape else {
        return None;
    };

    let local = instance.local_ray(ray);

    if culling == MeshCulling::BoundingBox && !mesh.bounds.intersects(&local) {
        return None;
    }

    let hit = triangles
        .get(mesh.triangles.clone())?
        .iter()
        .filter_map(|triangle| intersect_triangle_parametric(&local, triangle))
        .min_by(|a, b| a.t.total_cmp(&b.t))?;

    let outside = hit.normal.dot(local.direction) <= 0.0;
    let normal = if outside { hit.normal } else { -hit.normal };

    Some(instance.to_world(ray, local.point_on_ray(hit.t), normal, outside))
}
