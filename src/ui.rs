/*
 * UI Module
 *
 * This module builds the "CameraPersp" panel with nannou_egui and draws the
 * text overlay listing the bird count and the first bird's position.
 */

use nannou::prelude::*;
use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::{ViewParams, PLANE_STEP, POSITION_STEP};

// What the panel asked for this frame
#[derive(Default)]
pub struct PanelResponse {
    pub reset_requested: bool,
    pub camera_changed: bool,
}

// Update the camera panel
pub fn update_panel(egui: &mut Egui, params: &mut ViewParams, debug_info: &DebugInfo) -> PanelResponse {
    let mut response = PanelResponse::default();

    // Take a snapshot of the camera for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("CameraPersp")
        .default_pos([10.0, 60.0])
        .default_width(200.0)
        .show(&ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("NBirds");
                ui.add(egui::DragValue::new(&mut params.num_birds));
            });
            ui.separator();

            let camera = &mut params.camera;
            drag_row(ui, "Eye Point X", &mut camera.eye_point.x, POSITION_STEP);
            drag_row(ui, "Eye Point Y", &mut camera.eye_point.y, POSITION_STEP);
            drag_row(ui, "Eye Point Z", &mut camera.eye_point.z, POSITION_STEP);
            ui.separator();

            drag_row(ui, "Look At X", &mut camera.look_at.x, POSITION_STEP);
            drag_row(ui, "Look At Y", &mut camera.look_at.y, POSITION_STEP);
            drag_row(ui, "Look At Z", &mut camera.look_at.z, POSITION_STEP);
            ui.separator();

            ui.add(egui::Slider::new(&mut camera.fov, ViewParams::get_fov_range()).text("FOV"));
            ui.horizontal(|ui| {
                ui.label("Near Plane");
                ui.add(
                    egui::DragValue::new(&mut camera.near_plane)
                        .speed(PLANE_STEP)
                        .clamp_range(ViewParams::get_plane_range()),
                );
            });
            ui.horizontal(|ui| {
                ui.label("Far Plane");
                ui.add(
                    egui::DragValue::new(&mut camera.far_plane)
                        .speed(PLANE_STEP)
                        .clamp_range(ViewParams::get_plane_range()),
                );
            });
            drag_row(ui, "Lens Shift X", &mut camera.lens_shift.x, POSITION_STEP);
            drag_row(ui, "Lens Shift Y", &mut camera.lens_shift.y, POSITION_STEP);
            ui.separator();

            if ui.button("Reset Defaults").clicked() {
                response.reset_requested = true;
            }

            ui.collapsing("Debug", |ui| {
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time_ms()));
                ui.label(format!("Visible Birds: {}", debug_info.visible_birds));
            });
        });

    response.camera_changed = params.camera_changed();
    response
}

fn drag_row(ui: &mut egui::Ui, label: &str, value: &mut f32, step: f32) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value).speed(step));
    });
}

// Overlay lines: the bird count, then the first bird's position if any
pub fn overlay_lines(positions: &[Vec3]) -> Vec<String> {
    let mut lines = vec![format!("NBirds:{}", positions.len())];
    if let Some(first) = positions.first() {
        lines.push(format!("Bird1:{:.6} {:.6} {:.6}", first.x, first.y, first.z));
    }
    lines
}

// Draw the overlay text in the top-left corner
pub fn draw_overlay(draw: &Draw, positions: &[Vec3], window_rect: Rect) {
    let margin = 10.0;
    let line_height = 20.0;
    let text_width = 400.0;

    for (i, text) in overlay_lines(positions).iter().enumerate() {
        let y = window_rect.top() - margin - line_height * (i as f32 * 2.0 + 0.5);

        draw.text(text)
            .x_y(window_rect.left() + margin + text_width / 2.0, y)
            .w_h(text_width, line_height)
            .left_justify()
            .color(WHITE)
            .font_size(22);
    }
}
