use glam::{EulerRot, Mat4, Vec3};

/// Radius of the globe sphere.
pub const GLOBE_RADIUS: f32 = 5.0;

/// Sphere tessellation, segments around the equator and rings pole to pole.
pub const SPHERE_SEGMENTS: u32 = 50;
pub const SPHERE_RINGS: u32 = 50;

/// Uniform scale of the atmosphere shell relative to the globe.
pub const ATMOSPHERE_SCALE: f32 = 1.1;

/// Self-rotation added to the globe every frame, in radians. Per frame, not
/// per second: the spin rate follows the display refresh.
pub const SPIN_PER_FRAME: f32 = 0.002;

/// Mutable scene-graph state: the tilt of the group containing the globe and
/// the globe mesh's own spin around its y axis.
///
/// The group rotation is the target of pointer smoothing; the spin is
/// monotonic and unbounded.
pub struct SceneState {
    pub group_rotation: Vec3,
    pub spin: f32,
}

impl SceneState {
    pub fn new() -> Self {
        Self {
            group_rotation: Vec3::ZERO,
            spin: 0.0,
        }
    }

    /// Advance the globe's self-rotation by the fixed per-frame increment.
    pub fn advance_spin(&mut self) {
        self.spin += SPIN_PER_FRAME;
    }

    /// World transform of the globe mesh: the group tilt applied on top of
    /// the mesh's own y spin.
    pub fn globe_model(&self) -> Mat4 {
        let group = Mat4::from_euler(
            EulerRot::XYZ,
            self.group_rotation.x,
            self.group_rotation.y,
            self.group_rotation.z,
        );
        group * Mat4::from_rotation_y(self.spin)
    }

    /// World transform of the atmosphere shell. It sits at the scene root,
    /// not inside the group, so pointer tilt leaves the glow fixed in place.
    pub fn atmosphere_model(&self) -> Mat4 {
        Mat4::from_scale(Vec3::splat(ATMOSPHERE_SCALE))
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_is_monotonic() {
        let mut scene = SceneState::new();
        let mut previous = scene.spin;

        for k in 1..=500 {
            scene.advance_spin();
            assert!(scene.spin > previous);
            assert!((scene.spin - k as f32 * SPIN_PER_FRAME).abs() < 1e-4);
            previous = scene.spin;
        }
    }

    #[test]
    fn test_atmosphere_scale_is_fixed() {
        let mut scene = SceneState::new();
        for _ in 0..100 {
            scene.advance_spin();
            scene.group_rotation += Vec3::new(0.01, 0.02, 0.0);

            let m = scene.atmosphere_model();
            let x_axis = m.x_axis.truncate().length();
            let y_axis = m.y_axis.truncate().length();
            let z_axis = m.z_axis.truncate().length();
            assert!((x_axis - ATMOSPHERE_SCALE).abs() < 1e-6);
            assert!((y_axis - ATMOSPHERE_SCALE).abs() < 1e-6);
            assert!((z_axis - ATMOSPHERE_SCALE).abs() < 1e-6);
        }
    }

    #[test]
    fn test_globe_model_is_pure_rotation() {
        let mut scene = SceneState::new();
        scene.spin = 1.7;
        scene.group_rotation = Vec3::new(0.2, -0.4, 0.0);

        // A rotation matrix preserves length
        let m = scene.globe_model();
        let v = m.transform_vector3(Vec3::new(0.0, 0.0, GLOBE_RADIUS));
        assert!((v.length() - GLOBE_RADIUS).abs() < 1e-3);
    }

    #[test]
    fn test_identity_at_rest() {
        let scene = SceneState::new();
        let diff = (scene.globe_model() - Mat4::IDENTITY).to_cols_array();
        assert!(diff.iter().all(|v| v.abs() < 1e-6));
    }
}
