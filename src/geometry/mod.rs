pub mod basic;
mod bounds;
mod instance;
mod motion;
mod ray;
mod transform;

pub use bounds::{BoundingBox, intersect_bounding_box};
pub use instance::{GeometryInstance, Shape, ShapeKind};
pub use motion::Motion;
pub use ray::{RAY_EPSILON, Ray, point_on_ray};
pub use transform::{InstanceTransform, apply_transform};
