//! Ray/primitive intersection for a path tracer.
//!
//! Every primitive lives in its own local space: a unit cube spanning
//! `[-0.5, 0.5]`, a sphere of radius 0.5 at the origin, or a mesh given as a
//! range of a shared triangle buffer. A [`GeometryInstance`] places a
//! primitive in the world with an affine transform and may move linearly over
//! the shutter interval for motion blur.
//!
//! Intersection routines are pure functions of `(instance, ray, triangles)`
//! returning `Option<SurfaceInteraction>`, with distances, points and normals
//! in world space. They never allocate and can be called from as many threads
//! as there are rays; [`Scene::intersect_batch`] does exactly that.
//!
//! ```
//! use intersections::{GeometryInstance, InstanceTransform, Intersectable, Ray};
//! use ultraviolet::Vec3;
//!
//! let sphere = GeometryInstance::sphere(InstanceTransform::identity());
//! let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
//!
//! let hit = sphere.intersect(&ray, &[]).unwrap();
//! assert!((hit.distance - 4.5).abs() < 1e-3);
//! ```

pub mod error;
pub mod geometry;
pub mod random;
pub mod raytracing;
pub mod scene;

pub use error::GeometryError;
pub use geometry::basic::{
    MeshCulling, MeshData, TriangleData, TriangleHit, intersect_box, intersect_mesh,
    intersect_mesh_with, intersect_sphere, intersect_triangle,
};
pub use geometry::{
    BoundingBox, GeometryInstance, InstanceTransform, Motion, Ray, Shape, ShapeKind,
    intersect_bounding_box, point_on_ray,
};
pub use raytracing::{Intersectable, MISS_DISTANCE, SurfaceInteraction};
pub use scene::{Scene, SceneHit};
