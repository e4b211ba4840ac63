// VIEW: rendering and graphics
pub mod gpu_init;
pub mod render;
pub mod texture;

pub use gpu_init::GpuContext;
pub use render::SceneRenderer;
