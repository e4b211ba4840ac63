// CONTROLLER: input handling and the per-frame update
pub mod input;
pub mod orbit;
pub mod smoother;
pub mod frame_loop;

pub use frame_loop::FrameLoop;
pub use input::InputState;
pub use orbit::OrbitController;
pub use smoother::OrientationSmoother;
