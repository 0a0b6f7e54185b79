mod intersectable;
mod surface_interaction;

pub use intersectable::Intersectable;
pub use surface_interaction::{MISS_DISTANCE, SurfaceInteraction};
