/*
 * Camera Module
 *
 * This module defines the CameraPersp struct, a perspective camera described
 * by an eye point, a look-at target, a vertical field of view, near and far
 * clipping distances, a lens shift and an aspect ratio. It provides the
 * clip-plane corner points that make up the frustum snapshot, the view and
 * projection matrices, and projection from world space to window space.
 */

use nannou::prelude::*;

use crate::frustum::{FrustumCorners, BOTTOM_LEFT, BOTTOM_RIGHT, TOP_LEFT, TOP_RIGHT};

pub const DEFAULT_FOV: f32 = 40.0;
pub const DEFAULT_NEAR_PLANE: f32 = 2.5;
pub const DEFAULT_FAR_PLANE: f32 = 15.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPersp {
    pub eye_point: Vec3,
    pub look_at: Vec3,
    pub world_up: Vec3,
    // Vertical field of view in degrees
    pub fov: f32,
    pub aspect_ratio: f32,
    pub near_plane: f32,
    pub far_plane: f32,
    pub lens_shift: Vec2,
}

// Extents of the near clipping plane in view space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrustumExtents {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl CameraPersp {
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            eye_point: Vec3::ZERO,
            look_at: vec3(1.0, 1.0, 4.0),
            world_up: Vec3::Y,
            fov: DEFAULT_FOV,
            aspect_ratio,
            near_plane: DEFAULT_NEAR_PLANE,
            far_plane: DEFAULT_FAR_PLANE,
            lens_shift: Vec2::ZERO,
        }
    }

    // Unit view direction; looking at the eye itself falls back to -Z
    pub fn forward(&self) -> Vec3 {
        let direction = self.look_at - self.eye_point;
        if direction.length_squared() > f32::EPSILON {
            direction.normalize()
        } else {
            -Vec3::Z
        }
    }

    // Orthonormal (right, up, forward) basis of the camera
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = self.forward();
        let mut right = forward.cross(self.world_up);
        if right.length_squared() <= f32::EPSILON {
            // Looking straight along the up axis
            right = forward.cross(Vec3::Z);
        }
        let right = right.normalize();
        let up = right.cross(forward);
        (right, up, forward)
    }

    /// Near-plane extents, including the lens shift.
    ///
    /// A lens shift of 1 along an axis moves the frustum a full half-height
    /// (or half-width) in that direction without changing its size.
    pub fn frustum_extents(&self) -> FrustumExtents {
        let mut top = self.near_plane * (self.fov.to_radians() * 0.5).tan();
        let mut bottom = -top;
        let mut right = top * self.aspect_ratio;
        let mut left = -right;

        if self.lens_shift.y != 0.0 {
            let t = 0.5 + 0.5 * self.lens_shift.y;
            let (shifted_top, shifted_bottom) = (lerp(0.0, 2.0 * top, t), lerp(2.0 * bottom, 0.0, t));
            top = shifted_top;
            bottom = shifted_bottom;
        }

        if self.lens_shift.x != 0.0 {
            let t = 0.5 - 0.5 * self.lens_shift.x;
            let (shifted_right, shifted_left) = (lerp(2.0 * right, 0.0, t), lerp(0.0, 2.0 * left, t));
            right = shifted_right;
            left = shifted_left;
        }

        FrustumExtents { top, bottom, left, right }
    }

    // Corners of the clip rectangle at `distance` along the view direction,
    // with the near-plane extents scaled by `ratio`
    fn clip_coordinates(&self, distance: f32, ratio: f32) -> [Vec3; 4] {
        let (right_axis, up_axis, forward) = self.basis();
        let extents = self.frustum_extents();
        let center = self.eye_point + forward * distance;

        let corner = |vertical: f32, horizontal: f32| {
            center + ratio * (vertical * up_axis) + ratio * (horizontal * right_axis)
        };

        let mut corners = [Vec3::ZERO; 4];
        corners[TOP_LEFT] = corner(extents.top, extents.left);
        corners[TOP_RIGHT] = corner(extents.top, extents.right);
        corners[BOTTOM_LEFT] = corner(extents.bottom, extents.left);
        corners[BOTTOM_RIGHT] = corner(extents.bottom, extents.right);
        corners
    }

    pub fn near_clip_coordinates(&self) -> [Vec3; 4] {
        self.clip_coordinates(self.near_plane, 1.0)
    }

    pub fn far_clip_coordinates(&self) -> [Vec3; 4] {
        self.clip_coordinates(self.far_plane, self.far_plane / self.near_plane)
    }

    // Snapshot of the visible volume for the current configuration
    pub fn frustum_corners(&self) -> FrustumCorners {
        FrustumCorners::new(self.near_clip_coordinates(), self.far_clip_coordinates())
    }

    pub fn view_matrix(&self) -> Mat4 {
        let (_, up, forward) = self.basis();
        Mat4::look_at_rh(self.eye_point, self.eye_point + forward, up)
    }

    // Off-centre perspective projection matching the frustum extents
    pub fn projection_matrix(&self) -> Mat4 {
        let FrustumExtents { top, bottom, left, right } = self.frustum_extents();
        let near = self.near_plane;
        let far = self.far_plane;

        Mat4::from_cols(
            vec4(2.0 * near / (right - left), 0.0, 0.0, 0.0),
            vec4(0.0, 2.0 * near / (top - bottom), 0.0, 0.0),
            vec4(
                (right + left) / (right - left),
                (top + bottom) / (top - bottom),
                -(far + near) / (far - near),
                -1.0,
            ),
            vec4(0.0, 0.0, -2.0 * far * near / (far - near), 0.0),
        )
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    // Distance of a point in front of the eye along the view direction
    pub fn depth_of(&self, point: Vec3) -> f32 {
        (point - self.eye_point).dot(self.forward())
    }

    /// Project a world-space point into nannou window coordinates (origin at
    /// the window centre, y up).
    ///
    /// Returns `None` for points at or behind the near plane.
    pub fn world_to_screen(&self, point: Vec3, window_size: Vec2) -> Option<Vec2> {
        if self.depth_of(point) < self.near_plane {
            return None;
        }
        let ndc = self.view_projection().project_point3(point);
        Some(vec2(ndc.x * window_size.x * 0.5, ndc.y * window_size.y * 0.5))
    }
}

impl Default for CameraPersp {
    fn default() -> Self {
        Self::new(4.0 / 3.0)
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
