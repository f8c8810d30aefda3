use nalgebra::Point2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::consts::{
    BELT_ANGULAR_SPEED, BELT_INNER_RADIUS, BELT_OUTER_RADIUS, BELT_PARTICLE_COUNT,
};
use crate::math::polar_offset;

/// A single belt asteroid. Unlike bodies, every particle advances by the
/// shared [`BELT_ANGULAR_SPEED`] rather than carrying its own speed.
#[derive(Debug, Clone, PartialEq)]
pub struct BeltParticle {
    pub distance: f32,
    pub angle: f32,
    pub radius: f32,
}

impl BeltParticle {
    pub fn position(&self, center: Point2<f32>) -> Point2<f32> {
        polar_offset(center, self.distance, self.angle)
    }

    /// Whether the particle lies inside the drawable annulus. Both bounds are
    /// inclusive.
    pub fn in_band(&self) -> bool {
        (BELT_INNER_RADIUS..=BELT_OUTER_RADIUS).contains(&self.distance)
    }
}

/// The asteroid belt, generated once at startup. Identical seeds produce
/// identical belts.
#[derive(Debug, Clone, PartialEq)]
pub struct Belt {
    particles: Vec<BeltParticle>,
}

impl Belt {
    pub fn generate(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let particles = (0..BELT_PARTICLE_COUNT)
            .map(|_| BeltParticle {
                distance: rng.gen_range(BELT_INNER_RADIUS..=BELT_OUTER_RADIUS),
                angle: rng.gen_range(0.0..std::f32::consts::TAU),
                radius: rng.gen_range(1..=3) as f32,
            })
            .collect();
        Belt { particles }
    }

    pub fn particles(&self) -> &[BeltParticle] {
        &self.particles
    }

    /// Advance every particle by the shared belt speed.
    pub fn advance(&mut self) {
        for particle in &mut self.particles {
            particle.angle += BELT_ANGULAR_SPEED;
        }
    }
}

/// True if a disk at `position` overlaps any of the `(center, radius)` disks
/// in `others`. Touching counts as overlapping. No spatial index; the scene
/// is hundreds of particles against a handful of bodies.
pub fn overlaps_any(position: Point2<f32>, radius: f32, others: &[(Point2<f32>, f32)]) -> bool {
    others
        .iter()
        .any(|&(center, other_radius)| nalgebra::distance(&position, &center) <= radius + other_radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(Belt::generate(42), Belt::generate(42));
        assert_ne!(Belt::generate(42), Belt::generate(43));
    }

    #[test]
    fn test_generated_particles_start_in_band() {
        let belt = Belt::generate(7);
        assert_eq!(belt.particles().len(), BELT_PARTICLE_COUNT);
        assert!(belt.particles().iter().all(BeltParticle::in_band));
    }

    #[test]
    fn test_band_bounds_are_inclusive() {
        let at = |distance| BeltParticle {
            distance,
            angle: 0.0,
            radius: 1.0,
        };
        assert!(at(BELT_INNER_RADIUS).in_band());
        assert!(at(BELT_OUTER_RADIUS).in_band());
        assert!(!at(BELT_INNER_RADIUS - 0.1).in_band());
        assert!(!at(BELT_OUTER_RADIUS + 0.1).in_band());
    }

    #[test]
    fn test_particle_at_body_center_is_suppressed() {
        // Even a zero-radius particle sitting exactly on a body overlaps it
        let disks = vec![(Point2::new(100.0, 0.0), 20.0)];
        assert!(overlaps_any(Point2::new(100.0, 0.0), 0.0, &disks));
    }

    #[test]
    fn test_clear_particle_is_not_suppressed() {
        let disks = vec![(Point2::new(100.0, 0.0), 20.0)];
        // Farther away than the sum of radii
        assert!(!overlaps_any(Point2::new(140.0, 0.0), 3.0, &disks));
    }

    #[test]
    fn test_touching_counts_as_overlap() {
        let disks = vec![(Point2::new(0.0, 0.0), 20.0)];
        assert!(overlaps_any(Point2::new(23.0, 0.0), 3.0, &disks));
        assert!(!overlaps_any(Point2::new(23.1, 0.0), 3.0, &disks));
    }

    #[test]
    fn test_advance_uses_shared_speed() {
        let mut belt = Belt::generate(7);
        let before: Vec<f32> = belt.particles().iter().map(|p| p.angle).collect();
        belt.advance();
        for (particle, old) in belt.particles().iter().zip(before) {
            approx::assert_abs_diff_eq!(particle.angle, old + BELT_ANGULAR_SPEED);
        }
    }
}
