mod belt;
mod body;
mod field;
mod system;

pub use belt::{overlaps_any, Belt, BeltParticle};
pub use body::{Body, BodyID, BodyInfo, FillStyle, OrbitState};
pub use field::{Field, Speck};
pub use system::System;
