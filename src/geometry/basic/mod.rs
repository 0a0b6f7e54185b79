pub mod cube;
pub mod mesh;
pub mod sphere;
pub mod triangle;

pub use cube::{CUBE_HALF_EXTENT, CubeData, intersect_box};
pub use mesh::{MeshCulling, MeshData, intersect_mesh, intersect_mesh_with};
pub use sphere::{SPHERE_RADIUS, SphereData, intersect_sphere};
pub use triangle::{
    BARYCENTRIC_TOLERANCE, TriangleData, TriangleHit, intersect_triangle,
    intersect_triangle_parametric,
};
