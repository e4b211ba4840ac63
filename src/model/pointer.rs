use glam::Vec2;

/// Latest pointer position in normalized coordinates, x and y each spanning
/// [-1, 1] across the viewport with y pointing up.
///
/// Unset until the first pointer event, then set for the rest of the process
/// lifetime. Both axes are stored together, so they are never half-updated.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    pos: Option<Vec2>,
}

impl PointerState {
    pub fn new() -> Self {
        Self { pos: None }
    }

    /// Record a pointer position given pixel coordinates and the viewport
    /// size. Coordinates outside the viewport extrapolate past [-1, 1];
    /// that is accepted, not clamped.
    pub fn set_from_pixels(&mut self, px: f32, py: f32, width: f32, height: f32) {
        let x = (px / width) * 2.0 - 1.0;
        let y = -((py / height) * 2.0 - 1.0);
        self.pos = Some(Vec2::new(x, y));
    }

    pub fn get(&self) -> Option<Vec2> {
        self.pos
    }

    pub fn is_set(&self) -> bool {
        self.pos.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initially_unset() {
        let pointer = PointerState::new();
        assert!(!pointer.is_set());
        assert!(pointer.get().is_none());
    }

    #[test]
    fn test_corner_normalization() {
        let mut pointer = PointerState::new();

        pointer.set_from_pixels(0.0, 0.0, 800.0, 600.0);
        assert_eq!(pointer.get(), Some(Vec2::new(-1.0, 1.0)));

        pointer.set_from_pixels(800.0, 600.0, 800.0, 600.0);
        assert_eq!(pointer.get(), Some(Vec2::new(1.0, -1.0)));

        pointer.set_from_pixels(400.0, 300.0, 800.0, 600.0);
        assert_eq!(pointer.get(), Some(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_out_of_viewport_extrapolates() {
        let mut pointer = PointerState::new();
        pointer.set_from_pixels(1200.0, -300.0, 800.0, 600.0);
        let p = pointer.get().unwrap();
        assert!(p.x > 1.0);
        assert!(p.y > 1.0);
    }
}
