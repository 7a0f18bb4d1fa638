/*
 * View Parameters Module
 *
 * This module defines the ViewParams struct holding everything the camera
 * panel edits: the perspective camera and the displayed bird counter. It also
 * provides the slider ranges and step sizes used by the UI and change
 * detection between frames.
 *
 * The bird counter is tracked separately from the flock. Resetting to
 * defaults zeroes it without removing any birds; the next frame resyncs it to
 * the flock size.
 */

use nannou::prelude::*;

use crate::camera::CameraPersp;

// Step used by drag values for eye point, look-at and lens shift
pub const POSITION_STEP: f32 = 0.01;
// Step used by drag values for the clipping planes
pub const PLANE_STEP: f32 = 0.02;
// Smallest allowed near or far plane distance
pub const MIN_PLANE_DISTANCE: f32 = 0.1;
// Look-at nudge applied per arrow key press
pub const LOOK_AT_NUDGE: f32 = 0.01;

pub struct ViewParams {
    pub num_birds: usize,
    pub camera: CameraPersp,

    // Camera as it was before the panel ran this frame
    previous_camera: Option<CameraPersp>,
}

impl ViewParams {
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            num_birds: 0,
            camera: CameraPersp::new(aspect_ratio),
            previous_camera: None,
        }
    }

    // Restore the default camera and zero the counter; the flock is untouched
    pub fn reset_defaults(&mut self, aspect_ratio: f32) {
        self.num_birds = 0;
        self.camera = CameraPersp::new(aspect_ratio);
    }

    pub fn take_snapshot(&mut self) {
        self.previous_camera = Some(self.camera);
    }

    // Whether the camera was edited since the last snapshot
    pub fn camera_changed(&self) -> bool {
        match &self.previous_camera {
            Some(previous) => *previous != self.camera,
            None => false,
        }
    }

    pub fn nudge_look_at(&mut self, direction: Vec2) {
        self.camera.look_at.x += direction.x * LOOK_AT_NUDGE;
        self.camera.look_at.y += direction.y * LOOK_AT_NUDGE;
    }

    // Ranges for UI widgets
    pub fn get_fov_range() -> std::ops::RangeInclusive<f32> {
        1.0..=179.0
    }

    pub fn get_plane_range() -> std::ops::RangeInclusive<f32> {
        MIN_PLANE_DISTANCE..=f32::MAX
    }
}
