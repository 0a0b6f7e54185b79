use crate::error::GeometryError;
use crate::geometry::basic::{MeshData, TriangleData};
use crate::geometry::{GeometryInstance, InstanceTransform, Motion, Ray, Shape, ShapeKind};
use crate::raytracing::{Intersectable, SurfaceInteraction};

use itertools::Itertools;
use log::{debug, warn};
use rayon::prelude::*;
use std::collections::HashMap;
use std::ops::Range;
use ultraviolet::Vec3;

/// Nearest hit of a ray against a whole scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneHit {
    /// Index of the geometry instance that was hit.
    pub geometry: usize,
    pub interaction: SurfaceInteraction,
}

/// Geometry instances together with the triangle buffer their meshes index
/// into. Intersection only ever borrows the scene immutably, so a batch of
/// rays can be traced in parallel while nothing is able to modify it.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    geometries: Vec<GeometryInstance>,
    triangles: Vec<TriangleData>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacities(geometries: usize, triangles: usize) -> Self {
        Self {
            geometries: Vec::with_capacity(geometries),
            triangles: Vec::with_capacity(triangles),
        }
    }

    pub fn geometries(&self) -> &[GeometryInstance] {
        &self.geometries
    }

    pub fn triangles(&self) -> &[TriangleData] {
        &self.triangles
    }

    pub fn add_cube(&mut self, transform: InstanceTransform) -> usize {
        self.push(GeometryInstance::cube(transform))
    }

    pub fn add_sphere(&mut self, transform: InstanceTransform) -> usize {
        self.push(GeometryInstance::sphere(transform))
    }

    /// Appends `triangles` to the shared buffer as one new mesh instance.
    pub fn add_mesh(
        &mut self,
        transform: InstanceTransform,
        triangles: impl IntoIterator<Item = TriangleData>,
    ) -> Result<usize, GeometryError> {
        let start = self.triangles.len();
        self.triangles.extend(triangles);
        let range = start..self.triangles.len();

        let mesh = match MeshData::from_buffer(range, &self.triangles) {
            Ok(mesh) => mesh,
            Err(err) => {
                warn!("Rejecting mesh: {err}");
                self.triangles.truncate(start);
                return Err(err);
            }
        };

        debug!(
            "Mesh with {} triangles, local bounds {:?}..{:?}",
            mesh.len(),
            mesh.bounds.left_bottom,
            mesh.bounds.right_top
        );

        Ok(self.push(GeometryInstance::mesh(mesh, transform)))
    }

    /// Builds a mesh from a flat triangle list: every three positions form a
    /// triangle. Without `normals`, each triangle gets its face normal.
    pub fn add_mesh_from_soup(
        &mut self,
        transform: InstanceTransform,
        positions: &[Vec3],
        normals: Option<&[Vec3]>,
    ) -> Result<usize, GeometryError> {
        if positions.len() % 3 != 0 {
            warn!("Triangle soup with {} vertices", positions.len());
            return Err(GeometryError::UnmatchedVertexCount {
                count: positions.len(),
            });
        }

        let triangles: Vec<TriangleData> = match normals {
            Some(normals) if normals.len() != positions.len() => {
                warn!(
                    "Triangle soup with {} positions but {} normals",
                    positions.len(),
                    normals.len()
                );
                return Err(GeometryError::NormalCountMismatch {
                    positions: positions.len(),
                    normals: normals.len(),
                });
            }
            Some(normals) => positions
                .iter()
                .zip(normals)
                .tuples()
                .map(|((p1, n1), (p2, n2), (p3, n3))| {
                    TriangleData::new([*p1, *p2, *p3], [*n1, *n2, *n3])
                })
                .collect(),
            None => positions
                .iter()
                .tuples()
                .map(|(p1, p2, p3)| TriangleData::flat(*p1, *p2, *p3))
                .collect(),
        };

        self.add_mesh(transform, triangles)
    }

    /// Adds a caller-built instance. Mesh instances must reference triangles
    /// already in the buffer, and no other mesh may claim them.
    pub fn add_instance(&mut self, instance: GeometryInstance) -> Result<usize, GeometryError> {
        if let Shape::Mesh(mesh) = &instance.shape {
            self.check_mesh_range(&mesh.triangles).inspect_err(|err| {
                warn!("Rejecting mesh instance: {err}");
            })?;
        }

        Ok(self.push(instance))
    }

    pub fn set_motion(
        &mut self,
        geometry: usize,
        motion: Option<Motion>,
    ) -> Result<(), GeometryError> {
        self.geometries
            .get_mut(geometry)
            .ok_or(GeometryError::UnknownGeometry(geometry))?
            .set_motion(motion);

        Ok(())
    }

    /// Number of instances per primitive kind.
    pub fn count_by_kind(&self) -> HashMap<ShapeKind, usize> {
        self.geometries
            .iter()
            .map(GeometryInstance::kind)
            .counts()
    }

    /// Nearest hit of `ray` over all instances.
    pub fn intersect(&self, ray: &Ray) -> Option<SceneHit> {
        self.geometries
            .iter()
            .enumerate()
            .filter_map(|(geometry, instance)| {
                instance
                    .intersect(ray, &self.triangles)
                    .map(|interaction| SceneHit {
                        geometry,
                        interaction,
                    })
            })
            .min_by(|a, b| a.interaction.distance.total_cmp(&b.interaction.distance))
    }

    /// Traces every ray in parallel; the result at index `i` belongs to `rays[i]`.
    pub fn intersect_batch(&self, rays: &[Ray]) -> Vec<Option<SceneHit>> {
        let hits: Vec<_> = rays.par_iter().map(|ray| self.intersect(ray)).collect();

        debug!(
            "Traced {} rays against {} instances, {} hits",
            rays.len(),
            self.geometries.len(),
            hits.iter().flatten().count()
        );

        hits
    }

    fn push(&mut self, instance: GeometryInstance) -> usize {
        debug!(
            "Adding {:?} instance #{}",
            instance.kind(),
            self.geometries.len()
        );
        self.geometries.push(instance);
        self.geometries.len() - 1
    }

    fn check_mesh_range(&self, range: &Range<usize>) -> Result<(), GeometryError> {
        if range.is_empty() {
            return Err(GeometryError::EmptyMesh);
        }
        if range.end > self.triangles.len() {
            return Err(GeometryError::TriangleRangeOutOfBounds {
                range: range.clone(),
                len: self.triangles.len(),
            });
        }

        let overlapping = self
            .geometries
            .iter()
            .enumerate()
            .find_map(|(geometry, instance)| match &instance.shape {
                Shape::Mesh(other)
                    if range.start < other.triangles.end && other.triangles.start < range.end =>
                {
                    Some((geometry, other.triangles.clone()))
                }
                _ => None,
            });

        match overlapping {
            Some((geometry, existing)) => Err(GeometryError::OverlappingTriangleRange {
                range: range.clone(),
                existing,
                geometry,
            }),
            None => Ok(()),
        }
    }
}
