/*
 * Renderer Module
 *
 * This module draws the flock. Every bird becomes a cone from its position to
 * position + velocity. Cone facets are projected through the camera on the
 * CPU, back faces are dropped, the rest are sorted far to near and shaded with
 * a Lambert term lit from the eye, then drawn as flat polygons.
 */

use log::error;
use nannou::prelude::*;

use crate::app::Model;
use crate::camera::CameraPersp;
use crate::cone::{ConeMesh, Triangle};
use crate::ui;

// A projected facet ready to draw
pub struct ScreenTriangle {
    pub depth: f32,
    pub points: [Vec2; 3],
    pub shade: f32,
}

// Project one facet, or None when it faces away or crosses the near plane
pub fn project_triangle(triangle: &Triangle, camera: &CameraPersp, window_size: Vec2) -> Option<ScreenTriangle> {
    let center = triangle.centroid();
    let to_eye = camera.eye_point - center;

    // Back-face culling
    if triangle.normal.dot(to_eye) <= 0.0 {
        return None;
    }

    let mut points = [Vec2::ZERO; 3];
    for (point, vertex) in points.iter_mut().zip(triangle.vertices.iter()) {
        let projected = camera.world_to_screen(*vertex, window_size)?;
        if !projected.is_finite() {
            return None;
        }
        *point = projected;
    }

    let shade = triangle.normal.dot(to_eye.normalize_or_zero()).max(0.0);

    Some(ScreenTriangle {
        depth: camera.depth_of(center),
        points,
        shade,
    })
}

// Projected facets for every bird, sorted far to near
pub fn build_scene(birds: impl Iterator<Item = (Vec3, Vec3)>, camera: &CameraPersp, window_size: Vec2) -> Vec<ScreenTriangle> {
    let mut scene: Vec<ScreenTriangle> = birds
        .flat_map(|(position, velocity)| ConeMesh::for_bird(position, velocity).triangles)
        .filter_map(|triangle| project_triangle(&triangle, camera, window_size))
        .collect();

    scene.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    scene
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let window_rect = app.window_rect();
    let scene = build_scene(model.flock.iter(), &model.params.camera, window_rect.wh());

    for triangle in &scene {
        draw.polygon()
            .color(rgba(triangle.shade, triangle.shade, triangle.shade, 1.0))
            .points(triangle.points.iter().cloned());
    }

    ui::draw_overlay(&draw, model.flock.positions(), window_rect);

    if let Err(e) = draw.to_frame(app, &frame) {
        error!("Failed to draw frame: {:?}", e);
    }

    // Draw the egui UI
    if let Err(e) = model.egui.draw_to_frame(&frame) {
        error!("Failed to draw panel: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_camera() -> CameraPersp {
        let mut camera = CameraPersp::new(1.0);
        camera.look_at = vec3(0.0, 0.0, -1.0);
        camera.fov = 90.0;
        camera.near_plane = 1.0;
        camera.far_plane = 100.0;
        camera
    }

    #[test]
    fn test_back_faces_are_dropped() {
        let camera = straight_camera();
        let window = vec2(800.0, 800.0);

        let facing = Triangle {
            vertices: [vec3(-1.0, -1.0, -5.0), vec3(1.0, -1.0, -5.0), vec3(0.0, 2.0, -5.0)],
            normal: Vec3::Z,
        };
        let away = Triangle { normal: -Vec3::Z, ..facing };

        let projected = project_triangle(&facing, &camera, window).unwrap();
        assert!((projected.shade - 1.0).abs() < 1.0e-4);
        assert!((projected.depth - 5.0).abs() < 1.0e-4);
        assert!(project_triangle(&away, &camera, window).is_none());
    }

    #[test]
    fn test_triangles_behind_camera_are_dropped() {
        let camera = straight_camera();
        let behind = Triangle {
            vertices: [vec3(-1.0, -1.0, 5.0), vec3(1.0, -1.0, 5.0), vec3(0.0, 1.0, 5.0)],
            normal: -Vec3::Z,
        };
        assert!(project_triangle(&behind, &camera, vec2(800.0, 800.0)).is_none());
    }

    #[test]
    fn test_scene_is_sorted_far_to_near() {
        let camera = straight_camera();
        let birds = vec![
            (vec3(0.0, 0.0, -4.0), vec3(0.0, 1.0, 0.0)),
            (vec3(0.5, 0.0, -20.0), vec3(0.0, 1.0, 0.0)),
            (vec3(-0.5, 0.0, -10.0), vec3(0.0, 1.0, 0.0)),
        ];

        let scene = build_scene(birds.into_iter(), &camera, vec2(800.0, 800.0));

        assert!(!scene.is_empty());
        for pair in scene.windows(2) {
            assert!(pair[0].depth >= pair[1].depth);
        }
    }

    #[test]
    fn test_bird_without_velocity_draws_nothing() {
        let camera = straight_camera();
        let scene = build_scene(std::iter::once((vec3(0.0, 0.0, -5.0), Vec3::ZERO)), &camera, vec2(800.0, 800.0));
        assert!(scene.is_empty());
    }
}
