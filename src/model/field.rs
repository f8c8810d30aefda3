use nalgebra::{Point2, Point3};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::consts::{FIELD_ROCK_COUNT, FIELD_STAR_COUNT, HALF_EXTENT};

/// A decorative static particle: a dim background rock or a tinted star.
/// Fixed for the lifetime of the program.
#[derive(Debug, Clone, PartialEq)]
pub struct Speck {
    pub position: Point2<f32>,
    pub radius: f32,
    pub color: Point3<f32>,
}

/// The static backdrop, generated once at startup. Identical seeds produce
/// identical backdrops.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    specks: Vec<Speck>,
}

impl Field {
    pub fn generate(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut specks = Vec::with_capacity(FIELD_ROCK_COUNT + FIELD_STAR_COUNT);

        for _ in 0..FIELD_ROCK_COUNT {
            specks.push(Speck {
                position: random_position(&mut rng),
                radius: rng.gen_range(1..=2) as f32,
                color: Point3::new(0.5, 0.5, 0.5),
            });
        }
        for _ in 0..FIELD_STAR_COUNT {
            specks.push(Speck {
                position: random_position(&mut rng),
                radius: rng.gen_range(1..=2) as f32,
                color: Point3::new(rng.gen(), rng.gen(), rng.gen()),
            });
        }

        Field { specks }
    }

    pub fn specks(&self) -> &[Speck] {
        &self.specks
    }
}

fn random_position(rng: &mut ChaCha8Rng) -> Point2<f32> {
    Point2::new(
        rng.gen_range(-HALF_EXTENT..HALF_EXTENT),
        rng.gen_range(-HALF_EXTENT..HALF_EXTENT),
    )
}
