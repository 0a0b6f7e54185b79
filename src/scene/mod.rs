mod scene;

pub use scene::{Scene, SceneHit};
