use egui::Context;

use crate::model::{PointerState, SceneState};

/// Debug overlay: frame rate and the current scene orientation.
pub fn draw_debug_window(ctx: &Context, fps: f32, pointer: &PointerState, scene: &SceneState) {
    egui::Window::new("Debug")
        .default_pos([8.0, 8.0])
        .default_size([160.0, 100.0])
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(format!("FPS: {:.0}", fps)).small());
            match pointer.get() {
                Some(p) => {
                    ui.label(egui::RichText::new(format!("Pointer: {:.2}, {:.2}", p.x, p.y)).small());
                }
                None => {
                    ui.label(egui::RichText::new("Pointer: (none yet)").small());
                }
            }
            ui.label(egui::RichText::new(format!("Spin: {:.3} rad", scene.spin)).small());
            ui.label(
                egui::RichText::new(format!(
                    "Tilt: x {:.3} y {:.3}",
                    scene.group_rotation.x, scene.group_rotation.y
                ))
                .small(),
            );
            ui.separator();
            ui.label(egui::RichText::new("Drag - Orbit camera").small());
            ui.label(egui::RichText::new("Move - Tilt globe").small());
        });
}
