/*
 * Flocking Cones
 *
 * A flock of birds drifts toward the centre of the camera's view frustum
 * under random forces. Each bird is drawn as a cone pointing along its
 * velocity, and a panel exposes the camera parameters.
 *
 * Controls:
 * - Left click: spawn a bird
 * - Arrow keys: nudge the look-at target
 * - Escape: quit
 */

use flocking_cones::app;

fn main() {
    nannou::app(app::model)
        .update(app::update)
        .run();
}
