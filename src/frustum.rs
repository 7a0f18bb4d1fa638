/*
 * Frustum Module
 *
 * This module defines the per-frame snapshot of the camera's visible volume:
 * four corners on the near clipping plane and four on the far clipping plane.
 * The flock is pulled toward the centroid of these eight points, and the
 * renderer uses the bounding planes to skip birds that are out of view.
 */

use nannou::prelude::*;

// Corners are stored top-left, top-right, bottom-left, bottom-right
pub const TOP_LEFT: usize = 0;
pub const TOP_RIGHT: usize = 1;
pub const BOTTOM_LEFT: usize = 2;
pub const BOTTOM_RIGHT: usize = 3;

// Tolerance for points lying exactly on a bounding plane
const PLANE_EPSILON: f32 = 1.0e-4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrustumCorners {
    pub near: [Vec3; 4],
    pub far: [Vec3; 4],
}

impl FrustumCorners {
    pub fn new(near: [Vec3; 4], far: [Vec3; 4]) -> Self {
        Self { near, far }
    }

    // Every corner collapsed onto a single point
    pub fn collapsed(point: Vec3) -> Self {
        Self {
            near: [point; 4],
            far: [point; 4],
        }
    }

    // All eight corners, near plane first
    pub fn points(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.near.iter().chain(self.far.iter()).copied()
    }

    // Arithmetic mean of the eight corners
    pub fn centroid(&self) -> Vec3 {
        let sum = self.points().fold(Vec3::ZERO, |acc, p| acc + p);
        sum * (1.0 / 8.0)
    }

    // Check whether a point lies inside the six planes bounding the volume
    pub fn contains_point(&self, point: Vec3) -> bool {
        let center = self.centroid();

        self.faces().iter().all(|&(a, b, c)| {
            let mut normal = (b - a).cross(c - a);

            // Orient every normal toward the interior
            if normal.dot(center - a) < 0.0 {
                normal = -normal;
            }

            normal.dot(point - a) >= -PLANE_EPSILON * normal.length().max(1.0)
        })
    }

    // Three corners spanning each of the six faces
    fn faces(&self) -> [(Vec3, Vec3, Vec3); 6] {
        let n = &self.near;
        let f = &self.far;
        [
            (n[TOP_LEFT], n[TOP_RIGHT], n[BOTTOM_LEFT]),
            (f[TOP_LEFT], f[TOP_RIGHT], f[BOTTOM_LEFT]),
            (n[TOP_LEFT], n[BOTTOM_LEFT], f[TOP_LEFT]),
            (n[TOP_RIGHT], n[BOTTOM_RIGHT], f[TOP_RIGHT]),
            (n[TOP_LEFT], n[TOP_RIGHT], f[TOP_LEFT]),
            (n[BOTTOM_LEFT], n[BOTTOM_RIGHT], f[BOTTOM_LEFT]),
        ]
    }
}
