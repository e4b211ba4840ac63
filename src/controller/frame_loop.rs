use crate::model::{PointerState, SceneState};

use super::OrientationSmoother;

/// Per-frame scene update: advance the globe's self-spin, then ease the group
/// tilt toward the pointer. Rendering happens afterwards in the view layer.
pub struct FrameLoop {
    smoother: OrientationSmoother,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            smoother: OrientationSmoother::new(),
        }
    }

    pub fn tick(&mut self, scene: &mut SceneState, pointer: &PointerState, dt: f32) {
        scene.advance_spin();
        self.smoother.step(scene, pointer, dt);
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::scene::SPIN_PER_FRAME;
    use glam::Vec3;

    #[test]
    fn test_spin_accumulates_per_frame() {
        let mut frame_loop = FrameLoop::new();
        let mut scene = SceneState::new();
        let pointer = PointerState::new();

        for k in 1..=240 {
            frame_loop.tick(&mut scene, &pointer, 1.0 / 60.0);
            assert!((scene.spin - k as f32 * SPIN_PER_FRAME).abs() < 1e-4);
        }
    }

    #[test]
    fn test_group_untouched_without_pointer() {
        let mut frame_loop = FrameLoop::new();
        let mut scene = SceneState::new();
        let pointer = PointerState::new();

        for _ in 0..240 {
            frame_loop.tick(&mut scene, &pointer, 1.0 / 60.0);
        }
        assert_eq!(scene.group_rotation, Vec3::ZERO);
    }

    #[test]
    fn test_pointer_moves_group() {
        let mut frame_loop = FrameLoop::new();
        let mut scene = SceneState::new();
        let mut pointer = PointerState::new();
        pointer.set_from_pixels(800.0, 0.0, 800.0, 600.0);

        for _ in 0..240 {
            frame_loop.tick(&mut scene, &pointer, 1.0 / 60.0);
        }
        assert!(scene.group_rotation.y > 0.0);
        assert!(scene.group_rotation.x < 0.0);
    }
}
