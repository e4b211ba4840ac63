// MODEL: scene and input data
pub mod camera;
pub mod pointer;
pub mod scene;
pub mod starfield;

pub use camera::OrbitCamera;
pub use pointer::PointerState;
pub use scene::SceneState;
