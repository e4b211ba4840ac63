use glam::Vec2;

use crate::model::{PointerState, SceneState};

/// Tilt applied per unit of normalized pointer travel.
pub const TILT_X_FACTOR: f32 = 0.3;
pub const TILT_Y_FACTOR: f32 = 0.5;

/// Smoothing time constant in seconds. Tuned so the tilt lags the pointer
/// about as much as a two-second re-targeted tween.
const TAU: f32 = 0.6;

/// Eases the globe group's rotation toward a rotation derived from the
/// pointer. Re-targeted every frame: each step blends away a dt-sized
/// fraction of the remaining distance, so the motion trails the pointer
/// smoothly instead of jumping.
pub struct OrientationSmoother {
    tau: f32,
}

impl OrientationSmoother {
    pub fn new() -> Self {
        Self { tau: TAU }
    }

    /// The rotation the group is easing toward for a pointer position.
    /// Tilt up/down follows the pointer's y, left/right its x; z is never
    /// touched.
    pub fn target(pointer: Vec2) -> Vec2 {
        Vec2::new(-pointer.y * TILT_X_FACTOR, pointer.x * TILT_Y_FACTOR)
    }

    /// Move the group rotation toward the current target. A no-op until the
    /// first pointer event, which leaves the group exactly where it started.
    pub fn step(&self, scene: &mut SceneState, pointer: &PointerState, dt: f32) {
        let Some(p) = pointer.get() else {
            return;
        };

        let target = Self::target(p);
        let blend = 1.0 - (-dt / self.tau).exp();
        scene.group_rotation.x += (target.x - scene.group_rotation.x) * blend;
        scene.group_rotation.y += (target.y - scene.group_rotation.y) * blend;
    }
}

impl Default for OrientationSmoother {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_target_mapping() {
        let t = OrientationSmoother::target(Vec2::new(1.0, -1.0));
        assert!((t.x - 0.3).abs() < 1e-6);
        assert!((t.y - 0.5).abs() < 1e-6);

        let t = OrientationSmoother::target(Vec2::new(0.0, 0.0));
        assert_eq!(t, Vec2::ZERO);
    }

    #[test]
    fn test_unset_pointer_is_a_noop() {
        let smoother = OrientationSmoother::new();
        let mut scene = SceneState::new();
        scene.group_rotation = Vec3::new(0.1, -0.2, 0.05);
        let before = scene.group_rotation;

        for _ in 0..1000 {
            smoother.step(&mut scene, &PointerState::new(), DT);
        }
        assert_eq!(scene.group_rotation, before);
    }

    #[test]
    fn test_converges_to_target() {
        let smoother = OrientationSmoother::new();
        let mut scene = SceneState::new();
        let mut pointer = PointerState::new();
        // Bottom-right corner: target (0.3, 0.5)
        pointer.set_from_pixels(800.0, 600.0, 800.0, 600.0);

        // Ten seconds of frames is many time constants
        for _ in 0..600 {
            smoother.step(&mut scene, &pointer, DT);
        }
        assert!((scene.group_rotation.x - 0.3).abs() < 1e-3);
        assert!((scene.group_rotation.y - 0.5).abs() < 1e-3);
        assert_eq!(scene.group_rotation.z, 0.0);
    }

    #[test]
    fn test_no_overshoot() {
        let smoother = OrientationSmoother::new();
        let mut scene = SceneState::new();
        let mut pointer = PointerState::new();
        pointer.set_from_pixels(800.0, 600.0, 800.0, 600.0);

        let mut previous = scene.group_rotation.y;
        for _ in 0..600 {
            smoother.step(&mut scene, &pointer, DT);
            assert!(scene.group_rotation.y >= previous);
            assert!(scene.group_rotation.y <= 0.5 + 1e-6);
            previous = scene.group_rotation.y;
        }
    }

    #[test]
    fn test_retargeting_mid_flight() {
        let smoother = OrientationSmoother::new();
        let mut scene = SceneState::new();
        let mut pointer = PointerState::new();

        pointer.set_from_pixels(800.0, 300.0, 800.0, 600.0);
        for _ in 0..30 {
            smoother.step(&mut scene, &pointer, DT);
        }
        let partway = scene.group_rotation.y;
        assert!(partway > 0.0 && partway < 0.5);

        // Pointer swings to the other side; the rotation turns around from
        // wherever it was, no completion of the old ease required.
        pointer.set_from_pixels(0.0, 300.0, 800.0, 600.0);
        for _ in 0..600 {
            smoother.step(&mut scene, &pointer, DT);
        }
        assert!((scene.group_rotation.y + 0.5).abs() < 1e-3);
    }
}
