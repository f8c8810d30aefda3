//! Loads the body table that defines the solar system.
//!
//! One whitespace-separated row per body, header skipped:
//!
//! ```text
//! name    radius color  parent distance speed   extras
//! Sun     50     ffff00 -
//! Earth   20     338033 Sun    200      0.0015  texture=assets/earth.png
//! Moon    8      cccccc Earth  30       0.005
//! Saturn  23     ccb380 Sun    450      0.00045 ring
//! ```
//!
//! `parent` is `-` for the single fixed body, otherwise the name of an
//! earlier row. Recognized extras: `ring`, `texture=<path>`.

use std::collections::HashMap;
use std::fs;
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};

use nalgebra::Point3;
use thiserror::Error;

use crate::model::{BodyInfo, FillStyle, System};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: missing {field} field")]
    MissingField { line: usize, field: &'static str },
    #[error("line {line}: bad number {value:?}: {source}")]
    BadNumber {
        line: usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("line {line}: bad color {value:?} (expected 6 hex digits)")]
    BadColor { line: usize, value: String },
    #[error("line {line}: unknown parent body {name:?}")]
    UnknownParent { line: usize, name: String },
    #[error("line {line}: duplicate body {name:?}")]
    DuplicateName { line: usize, name: String },
    #[error("line {line}: unrecognized extra {value:?}")]
    UnknownExtra { line: usize, value: String },
}

pub fn read_file(path: &Path) -> Result<System, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })?;
    parse_str(&contents)
}

macro_rules! next_field {
    ($fields:ident, $line:ident, $name:literal) => {
        $fields.next().ok_or(LoadError::MissingField {
            line: $line,
            field: $name,
        })?
    };
}

macro_rules! next_f32 {
    ($fields:ident, $line:ident, $name:literal) => {{
        let raw = next_field!($fields, $line, $name);
        raw.parse::<f32>().map_err(|source| LoadError::BadNumber {
            line: $line,
            value: raw.to_owned(),
            source,
        })?
    }};
}

pub fn parse_str(contents: &str) -> Result<System, LoadError> {
    let mut system = System::new();
    let mut name_to_id = HashMap::new();

    // Read lines, skipping header
    for (idx, text) in contents.lines().enumerate().skip(1) {
        let line = idx + 1;
        if text.trim().is_empty() {
            continue;
        }
        let mut fields = text.split_ascii_whitespace();

        let name = next_field!(fields, line, "name");
        if name_to_id.contains_key(name) {
            return Err(LoadError::DuplicateName {
                line,
                name: name.to_owned(),
            });
        }
        let radius = next_f32!(fields, line, "radius");
        let color = parse_color(line, next_field!(fields, line, "color"))?;

        // Figure out what our orbit is
        let parent = next_field!(fields, line, "parent");
        let orbit = if parent == "-" {
            None
        } else {
            let parent_id = *name_to_id
                .get(parent)
                .ok_or_else(|| LoadError::UnknownParent {
                    line,
                    name: parent.to_owned(),
                })?;
            let distance = next_f32!(fields, line, "distance");
            let speed = next_f32!(fields, line, "speed");
            Some((parent_id, distance, speed))
        };

        let mut ring = false;
        let mut texture = None;
        for extra in fields {
            if extra == "ring" {
                ring = true;
            } else if let Some(path) = extra.strip_prefix("texture=") {
                texture = Some(PathBuf::from(path));
            } else {
                return Err(LoadError::UnknownExtra {
                    line,
                    value: extra.to_owned(),
                });
            }
        }

        let fill = match texture {
            None => FillStyle::Flat(color),
            Some(path) => FillStyle::Textured {
                path,
                fallback: color,
            },
        };
        let info = BodyInfo {
            name: name.to_owned(),
            radius,
            fill,
            ring,
        };

        let id = match orbit {
            None => system.add_fixed_body(info),
            Some((parent_id, distance, speed)) => system.add_body(info, distance, speed, parent_id),
        };
        name_to_id.insert(name.to_owned(), id);
    }

    Ok(system)
}

fn parse_color(line: usize, s: &str) -> Result<Point3<f32>, LoadError> {
    let bad = || LoadError::BadColor {
        line,
        value: s.to_owned(),
    };
    if s.len() != 6 || !s.is_ascii() {
        return Err(bad());
    }
    let r = u8::from_str_radix(&s[0..2], 16).map_err(|_| bad())?;
    let g = u8::from_str_radix(&s[2..4], 16).map_err(|_| bad())?;
    let b = u8::from_str_radix(&s[4..6], 16).map_err(|_| bad())?;

    Ok(Point3::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
    ))
}
