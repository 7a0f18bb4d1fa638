/*
 * Flock Module
 *
 * This module defines the Flock struct, the simulation state for every bird.
 * Birds are stored as a structure of arrays: positions, orientations and
 * velocities are index-aligned and always have the same length, and a bird's
 * index is its only identity.
 *
 * Each frame every bird receives a small random force plus an attraction
 * toward the centroid of the camera frustum. Velocity is an undamped
 * accumulator, so the flock oscillates around the centroid with growing
 * amplitude over long runs.
 */

use log::{debug, trace, warn};
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::frustum::FrustumCorners;

// Scale applied to the per-frame random force
pub const NOISE_SCALE: f32 = 0.1;
// Strength of the pull toward the frustum centroid
pub const CENTERING_STRENGTH: f32 = 0.05;
// Fixed z component of a freshly spawned bird's orientation and velocity
pub const SPAWN_Z: f32 = 0.5;

pub struct Flock<R: Rng = StdRng> {
    positions: Vec<Vec3>,
    orientations: Vec<Vec3>,
    velocities: Vec<Vec3>,
    rng: R,
    // Set once a velocity stops being finite, so the warning fires only once
    diverged: bool,
}

impl Flock<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Flock<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Flock<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            positions: Vec::new(),
            orientations: Vec::new(),
            velocities: Vec::new(),
            rng,
            diverged: false,
        }
    }

    /// Append a bird at `position` and return its index.
    ///
    /// Orientation and velocity get independent uniform draws in [0, 1) for
    /// x and y, with z fixed at [`SPAWN_Z`].
    pub fn spawn(&mut self, position: Vec3) -> usize {
        let orientation = vec3(self.rng.gen(), self.rng.gen(), SPAWN_Z);
        let velocity = vec3(self.rng.gen(), self.rng.gen(), SPAWN_Z);

        self.positions.push(position);
        self.orientations.push(orientation);
        self.velocities.push(velocity);

        let index = self.positions.len() - 1;
        debug!("Spawned bird {} at ({:.3}, {:.3}, {:.3})", index, position.x, position.y, position.z);
        index
    }

    /// Advance every bird by `delta_time` seconds, pulling it toward the
    /// centroid of `frustum`.
    ///
    /// A zero `delta_time` leaves positions untouched while velocities still
    /// pick up the random and centring forces.
    pub fn update(&mut self, delta_time: f32, frustum: &FrustumCorners) {
        let center = frustum.centroid();
        trace!("Frustum centroid ({:.3}, {:.3}, {:.3})", center.x, center.y, center.z);

        for (position, velocity) in self.positions.iter_mut().zip(self.velocities.iter_mut()) {
            let force = NOISE_SCALE * random_force(&mut self.rng) - CENTERING_STRENGTH * (*position - center);
            *velocity += force;
            *position += *velocity * delta_time;
        }

        if !self.diverged {
            if let Some(index) = self.velocities.iter().position(|v| !v.is_finite()) {
                warn!("Velocity of bird {} is no longer finite", index);
                self.diverged = true;
            }
        }
    }

    /// Overwrite the velocity of bird `index`.
    ///
    /// Indices outside `0..len()` are ignored.
    pub fn set_velocity(&mut self, index: usize, velocity: Vec3) {
        if let Some(v) = self.velocities.get_mut(index) {
            *v = velocity;
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn orientations(&self) -> &[Vec3] {
        &self.orientations
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    // (position, velocity) pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.positions.iter().copied().zip(self.velocities.iter().copied())
    }
}

// Random vector with components independently uniform in [-1, 1)
pub fn random_force<R: Rng>(rng: &mut R) -> Vec3 {
    vec3(
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    const EPSILON: f32 = 1.0e-5;

    fn origin_frustum() -> FrustumCorners {
        FrustumCorners::collapsed(Vec3::ZERO)
    }

    #[test]
    fn test_spawn_is_additive() {
        let mut flock = Flock::seeded(1);
        assert!(flock.is_empty());

        let position = vec3(2.0, 2.0, 4.0);
        let index = flock.spawn(position);

        assert_eq!(index, 0);
        assert_eq!(flock.len(), 1);
        assert_eq!(flock.positions()[0], position);
    }

    #[test]
    fn test_spawn_n_times_counts_n() {
        let mut flock = Flock::seeded(2);
        for i in 0..25 {
            let index = flock.spawn(vec3(i as f32, 0.0, 0.0));
            assert_eq!(index, i);
        }

        assert_eq!(flock.len(), 25);
        assert_eq!(flock.orientations().len(), 25);
        assert_eq!(flock.velocities().len(), 25);
        for (i, position) in flock.positions().iter().enumerate() {
            assert_eq!(position.x, i as f32);
        }
    }

    #[test]
    fn test_spawn_draws_orientation_then_velocity() {
        let mut flock = Flock::seeded(7);
        let mut reference = StdRng::seed_from_u64(7);

        flock.spawn(Vec3::ZERO);

        let orientation = vec3(reference.gen(), reference.gen(), SPAWN_Z);
        let velocity = vec3(reference.gen(), reference.gen(), SPAWN_Z);
        assert_eq!(flock.orientations()[0], orientation);
        assert_eq!(flock.velocities()[0], velocity);
    }

    #[test]
    fn test_spawn_draws_stay_in_unit_interval() {
        let mut flock = Flock::seeded(99);
        for _ in 0..200 {
            flock.spawn(Vec3::ZERO);
        }

        for v in flock.orientations().iter().chain(flock.velocities()) {
            assert!((0.0..1.0).contains(&v.x));
            assert!((0.0..1.0).contains(&v.y));
            assert_eq!(v.z, SPAWN_Z);
        }
    }

    #[test]
    fn test_zero_delta_time_keeps_positions() {
        let mut flock = Flock::seeded(3);
        flock.spawn(vec3(2.0, 2.0, 4.0));
        flock.spawn(vec3(-1.0, 5.0, 0.5));
        let before_positions = flock.positions().to_vec();
        let before_velocities = flock.velocities().to_vec();

        flock.update(0.0, &origin_frustum());

        assert_eq!(flock.positions(), &before_positions[..]);
        assert_ne!(flock.velocities(), &before_velocities[..]);
    }

    #[test]
    fn test_update_matches_formula() {
        let mut flock = Flock::with_rng(StepRng::new(0, 0));
        let start = vec3(2.0, 2.0, 4.0);
        flock.spawn(start);
        flock.set_velocity(0, Vec3::ZERO);

        flock.update(1.0, &origin_frustum());

        // An all-zero generator draws r = (-1, -1, -1)
        let expected_velocity = vec3(-0.2, -0.2, -0.3);
        let expected_position = vec3(1.8, 1.8, 3.7);

        assert!(flock.velocities()[0].abs_diff_eq(expected_velocity, EPSILON));
        assert!(flock.positions()[0].abs_diff_eq(expected_position, EPSILON));
    }

    #[test]
    fn test_all_zero_generator_draws_lower_bound() {
        assert_eq!(random_force(&mut StepRng::new(0, 0)), vec3(-1.0, -1.0, -1.0));
    }

    #[test]
    fn test_set_velocity_out_of_range_is_ignored() {
        let mut flock = Flock::seeded(12);
        flock.spawn(Vec3::ZERO);
        let before = flock.velocities().to_vec();

        flock.set_velocity(1, Vec3::ONE);
        flock.set_velocity(usize::MAX, Vec3::ONE);

        assert_eq!(flock.velocities(), &before[..]);
        assert_eq!(flock.len(), 1);

        flock.set_velocity(0, Vec3::ONE);
        assert_eq!(flock.velocities()[0], Vec3::ONE);
    }

    #[test]
    fn test_update_mirrors_seeded_draws() {
        let center = vec3(1.0, -3.0, 6.0);
        let mut flock = Flock::seeded(11);
        let mut reference = StdRng::seed_from_u64(11);

        let starts = [vec3(2.0, 2.0, 4.0), vec3(-4.0, 0.0, 9.0)];
        let mut velocities = Vec::new();
        for &start in &starts {
            flock.spawn(start);
            let _orientation: (f32, f32) = (reference.gen(), reference.gen());
            velocities.push(vec3(reference.gen(), reference.gen(), SPAWN_Z));
        }

        let dt = 0.25;
        flock.update(dt, &FrustumCorners::collapsed(center));

        for (i, &start) in starts.iter().enumerate() {
            let force = NOISE_SCALE * random_force(&mut reference) - CENTERING_STRENGTH * (start - center);
            let velocity = velocities[i] + force;
            let position = start + velocity * dt;
            assert!(flock.velocities()[i].abs_diff_eq(velocity, EPSILON));
            assert!(flock.positions()[i].abs_diff_eq(position, EPSILON));
        }
    }

    #[test]
    fn test_orientation_never_changes() {
        let mut flock = Flock::seeded(5);
        for i in 0..10 {
            flock.spawn(vec3(i as f32, -(i as f32), 1.0));
        }
        let orientations = flock.orientations().to_vec();

        for _ in 0..50 {
            flock.update(1.0 / 60.0, &origin_frustum());
        }

        assert_eq!(flock.orientations(), &orientations[..]);
    }

    #[test]
    fn test_update_on_empty_flock() {
        let mut flock = Flock::seeded(0);
        flock.update(1.0, &origin_frustum());
        assert!(flock.is_empty());
    }

    #[test]
    fn test_update_preserves_lengths() {
        let mut flock = Flock::seeded(8);
        for _ in 0..5 {
            flock.spawn(Vec3::ONE);
        }
        for _ in 0..10 {
            flock.update(0.016, &origin_frustum());
        }
        assert_eq!(flock.len(), 5);
        assert_eq!(flock.orientations().len(), 5);
        assert_eq!(flock.velocities().len(), 5);
        assert_eq!(flock.iter().count(), 5);
    }

    #[test]
    fn test_random_force_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let r = random_force(&mut rng);
            for c in [r.x, r.y, r.z] {
                assert!((-1.0..1.0).contains(&c));
            }
        }
    }
}
