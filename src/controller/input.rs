use winit::event::{ElementState, MouseButton, WindowEvent};

use crate::model::PointerState;

/// Tracks the latest normalized pointer position and the orbit-drag gesture.
///
/// Every cursor move updates the pointer, dragging or not; the parallax tilt
/// and the orbit control are independent, so both can react to the same
/// motion.
pub struct InputState {
    pub pointer: PointerState,
    pub dragging: bool,
    last_cursor: Option<(f64, f64)>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            pointer: PointerState::new(),
            dragging: false,
            last_cursor: None,
        }
    }

    /// Process a window event against the current viewport size. Returns the
    /// drag delta in pixels when the cursor moved with the left button held.
    pub fn process_event(
        &mut self,
        event: &WindowEvent,
        width: u32,
        height: u32,
    ) -> Option<(f32, f32)> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer.set_from_pixels(
                    position.x as f32,
                    position.y as f32,
                    width as f32,
                    height as f32,
                );

                let delta = if self.dragging {
                    self.last_cursor
                        .map(|(lx, ly)| ((position.x - lx) as f32, (position.y - ly) as f32))
                } else {
                    None
                };
                self.last_cursor = Some((position.x, position.y));
                delta
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.dragging = *state == ElementState::Pressed;
                if !self.dragging {
                    self.last_cursor = None;
                }
                None
            }
            _ => None,
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
