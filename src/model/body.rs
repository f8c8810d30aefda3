use std::path::PathBuf;

use nalgebra::Point3;

/// Index of a body in its owning `System`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BodyID(pub usize);

/// How a body's disk is filled.
#[derive(Debug, Clone, PartialEq)]
pub enum FillStyle {
    Flat(Point3<f32>),
    /// Texture-mapped disk. `fallback` is the flat color used when the file
    /// is missing or does not decode.
    Textured { path: PathBuf, fallback: Point3<f32> },
}

impl FillStyle {
    /// The flat color for this style (the fallback, for textured bodies).
    pub fn color(&self) -> Point3<f32> {
        match self {
            FillStyle::Flat(color) => *color,
            FillStyle::Textured { fallback, .. } => *fallback,
        }
    }
}

// All the immutable info about a body
#[derive(Debug, Clone)]
pub struct BodyInfo {
    pub name: String,
    pub radius: f32,
    pub fill: FillStyle,
    /// Draw concentric ring guide-lines around the body.
    pub ring: bool,
}

/// Orbital parameters, plus the angle that advances every frame.
///
/// `parent` is re-resolved to a position each frame, so a body orbiting a
/// moving planet follows it automatically.
#[derive(Debug, Clone)]
pub struct OrbitState {
    pub parent: BodyID,
    pub distance: f32,
    pub angular_speed: f32,
    pub angle: f32,
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyID,
    pub info: BodyInfo,
    /// `None` for the fixed central body.
    pub orbit: Option<OrbitState>,
}
