use glam::{Mat4, Vec3};

/// Perspective camera orbiting the origin at a fixed distance.
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub up: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl OrbitCamera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: 15.0,
            up: Vec3::Y,
            fov_y: 75f32.to_radians(),
            aspect: width as f32 / height as f32,
            z_near: 0.1,
            z_far: 1000.0,
        }
    }

    /// Camera position on the orbit sphere. yaw = pitch = 0 puts the eye on
    /// the positive z axis, looking back at the origin.
    pub fn eye(&self) -> Vec3 {
        let cp = self.pitch.clamp(-1.5533, 1.5533); // Slightly less than π/2 to avoid gimbal lock
        Vec3::new(
            self.yaw.sin() * cp.cos(),
            cp.sin(),
            self.yaw.cos() * cp.cos(),
        ) * self.distance
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    pub fn view_proj(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye(), Vec3::ZERO, self.up);
        let proj = Mat4::perspective_rh(self.fov_y, self.aspect, self.z_near, self.z_far);
        proj * view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position() {
        let cam = OrbitCamera::new(800, 600);
        let eye = cam.eye();
        assert!((eye - Vec3::new(0.0, 0.0, 15.0)).length() < 1e-4);
        assert!((cam.fov_y - 75f32.to_radians()).abs() < 1e-6);
        assert_eq!(cam.z_near, 0.1);
        assert_eq!(cam.z_far, 1000.0);
    }

    #[test]
    fn test_set_aspect() {
        let mut cam = OrbitCamera::new(800, 600);
        cam.set_aspect(1920, 1080);
        assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);

        // Repeated identical resizes are idempotent
        cam.set_aspect(1920, 1080);
        assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    }

    #[test]
    fn test_orbit_keeps_distance() {
        let mut cam = OrbitCamera::new(800, 600);
        cam.yaw = 1.3;
        cam.pitch = -0.7;
        assert!((cam.eye().length() - 15.0).abs() < 1e-3);
    }

    #[test]
    fn test_view_proj_is_finite() {
        let cam = OrbitCamera::new(1280, 720);
        let m = cam.view_proj();
        assert!(m.to_cols_array().iter().all(|v| v.is_finite()));
    }
}
