/*
 * Input Module
 *
 * This module handles user input events for the flock.
 *
 * Features:
 * - Spawning a bird with a left click
 * - Nudging the camera look-at target with the arrow keys
 * - Quitting with Escape
 * - Forwarding raw window events to egui
 */

use nannou::prelude::*;

use crate::app::Model;

// Depth at which clicked birds are spawned
pub const CLICK_SPAWN_Z: f32 = 5.0;

// Map a nannou cursor position (centre origin, y up) to the spawn point:
// window pixel coordinates with a top-left origin, divided by the window size
pub fn click_spawn_position(cursor: Vec2, window_size: Vec2) -> Vec3 {
    let pixel_x = cursor.x + window_size.x / 2.0;
    let pixel_y = window_size.y / 2.0 - cursor.y;
    vec3(pixel_x / window_size.x, pixel_y / window_size.y, CLICK_SPAWN_Z)
}

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    model.mouse_position = pos;
}

// Mouse pressed event handler
pub fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }

    // Clicks on the panel belong to egui
    if model.egui.ctx().is_pointer_over_area() {
        return;
    }

    let window_size = app.window_rect().wh();
    let position = click_spawn_position(model.mouse_position, window_size);
    model.flock.spawn(position);
    model.params.num_birds += 1;
}

// Key pressed event handler
pub fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Escape => app.quit(),
        Key::Up => model.params.nudge_look_at(vec2(0.0, 1.0)),
        Key::Down => model.params.nudge_look_at(vec2(0.0, -1.0)),
        Key::Left => model.params.nudge_look_at(vec2(-1.0, 0.0)),
        Key::Right => model.params.nudge_look_at(vec2(1.0, 0.0)),
        _ => {}
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
