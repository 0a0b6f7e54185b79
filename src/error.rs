use std::ops::Range;
use thiserror::Error;

/// Errors raised while building geometry. Intersection itself never fails:
/// a ray that hits nothing is reported as `None`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("transform is not invertible (determinant {determinant})")]
    SingularTransform { determinant: f32 },

    #[error("mesh has no triangles")]
    EmptyMesh,

    #[error("triangle range {range:?} exceeds a buffer of {len} triangles")]
    TriangleRangeOutOfBounds { range: Range<usize>, len: usize },

    #[error("triangle range {range:?} overlaps the range {existing:?} of geometry {geometry}")]
    OverlappingTriangleRange {
        range: Range<usize>,
        existing: Range<usize>,
        geometry: usize,
    },

    #[error("{count} vertices cannot be grouped into triangles")]
    UnmatchedVertexCount { count: usize },

    #[error("got {normals} normals for {positions} vertex positions")]
    NormalCountMismatch { positions: usize, normals: usize },

    #[error("no geometry with index {0}")]
    UnknownGeometry(usize),
}
