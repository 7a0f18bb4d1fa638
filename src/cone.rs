/*
 * Cone Module
 *
 * Builds the faceted cone drawn for each bird. The base sits at the bird's
 * position and the apex at position + velocity, so the cone points along the
 * direction of travel and its length shows the speed.
 */

use nannou::prelude::*;

pub const CONE_BASE_RADIUS: f32 = 0.2;
pub const CONE_SUBDIVISIONS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [Vec3; 3],
    // Unit normal pointing out of the cone
    pub normal: Vec3,
}

impl Triangle {
    pub fn centroid(&self) -> Vec3 {
        (self.vertices[0] + self.vertices[1] + self.vertices[2]) / 3.0
    }
}

pub struct ConeMesh {
    pub triangles: Vec<Triangle>,
}

impl ConeMesh {
    pub fn new(base: Vec3, apex: Vec3, radius: f32, subdivisions: usize) -> Self {
        let axis = apex - base;
        if axis.length_squared() <= f32::EPSILON || subdivisions < 3 {
            return Self { triangles: Vec::new() };
        }

        let direction = axis.normalize();
        let (u, v) = perpendicular_basis(direction);

        // Ring of points around the base
        let ring: Vec<Vec3> = (0..subdivisions)
            .map(|i| {
                let angle = std::f32::consts::TAU * i as f32 / subdivisions as f32;
                base + radius * (angle.cos() * u + angle.sin() * v)
            })
            .collect();

        let mut triangles = Vec::with_capacity(subdivisions * 2);

        for i in 0..subdivisions {
            let a = ring[i];
            let b = ring[(i + 1) % subdivisions];

            // Side facet
            triangles.push(Triangle {
                vertices: [a, b, apex],
                normal: outward_normal(a, b, apex, base),
            });

            // Base cap facet
            triangles.push(Triangle {
                vertices: [base, b, a],
                normal: -direction,
            });
        }

        Self { triangles }
    }

    // Cone with the radius and subdivision count used for birds
    pub fn for_bird(position: Vec3, velocity: Vec3) -> Self {
        Self::new(position, position + velocity, CONE_BASE_RADIUS, CONE_SUBDIVISIONS)
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

// Two unit vectors perpendicular to `direction` and to each other
fn perpendicular_basis(direction: Vec3) -> (Vec3, Vec3) {
    let helper = if direction.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
    let u = direction.cross(helper).normalize();
    let v = direction.cross(u);
    (u, v)
}

// Facet normal flipped away from `inside`
fn outward_normal(a: Vec3, b: Vec3, c: Vec3, inside: Vec3) -> Vec3 {
    let normal = (b - a).cross(c - a).normalize_or_zero();
    if normal.dot(a - inside) < 0.0 {
        -normal
    } else {
        normal
    }
}
