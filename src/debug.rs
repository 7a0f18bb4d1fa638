/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains frame timing and
 * visibility metrics shown in the overlay and the camera panel.
 */

use std::time::Duration;

// Debug information to display
#[derive(Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    // Birds inside the frustum after the last update
    pub visible_birds: usize,
}

impl DebugInfo {
    pub fn frame_time_ms(&self) -> f64 {
        self.frame_time.as_secs_f64() * 1000.0
    }
}
