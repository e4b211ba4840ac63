use crate::model::OrbitCamera;

/// Converts pointer-drag deltas into camera orbit angles.
pub struct OrbitController {
    pub sensitivity: f32,
}

impl OrbitController {
    pub fn new() -> Self {
        Self { sensitivity: 0.005 }
    }

    /// Apply a drag delta in pixels to the camera's orbit.
    pub fn apply_drag(&self, camera: &mut OrbitCamera, dx: f32, dy: f32) {
        camera.yaw -= dx * self.sensitivity;
        let pi_half = std::f32::consts::PI / 2.0;
        camera.pitch = (camera.pitch + dy * self.sensitivity).clamp(-pi_half, pi_half);
    }
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_changes_angles() {
        let controller = OrbitController::new();
        let mut cam = OrbitCamera::new(800, 600);

        controller.apply_drag(&mut cam, 100.0, -40.0);
        assert!(cam.yaw < 0.0);
        assert!(cam.pitch < 0.0);
        assert!((cam.eye().length() - cam.distance).abs() < 1e-3);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let controller = OrbitController::new();
        let mut cam = OrbitCamera::new(800, 600);

        for _ in 0..100 {
            controller.apply_drag(&mut cam, 0.0, 10_000.0);
        }
        assert!(cam.pitch <= std::f32::consts::PI / 2.0 + 1e-6);
    }
}
