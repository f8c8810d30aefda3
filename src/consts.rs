//! Tuning constants shared between the model and the window code.

pub const WINDOW_TITLE: &str = "2D Solar System";
pub const WINDOW_SIZE: u32 = 1600;

/// Furthest visible coordinate from the sun, which sits at the origin.
pub const HALF_EXTENT: f32 = WINDOW_SIZE as f32 / 2.0;

pub const FRAMERATE_LIMIT: u64 = 60;

/// Body table read at startup.
pub const BODY_FILE: &str = "planets.txt";

// The asteroid belt occupies the annulus between the Mars and Jupiter
// orbits. Generation and the draw filter share these bounds; both ends
// are inclusive.
pub const BELT_INNER_RADIUS: f32 = 250.0;
pub const BELT_OUTER_RADIUS: f32 = 400.0;
pub const BELT_PARTICLE_COUNT: usize = 1000;

/// Radians per frame, shared by every belt particle.
pub const BELT_ANGULAR_SPEED: f32 = 0.001;

// Decorative backdrop.
pub const FIELD_ROCK_COUNT: usize = 1000;
pub const FIELD_STAR_COUNT: usize = 500;

// Fixed seeds, so consecutive runs produce the same particle sets.
pub const BELT_SEED: u64 = 0xA57E;
pub const FIELD_SEED: u64 = 0x57A8;

/// Segments used when stroking orbit guide-lines and rings.
pub const GUIDE_SEGMENTS: u32 = 100;
