//! Polar-coordinate placement, the one piece of geometry everything shares.

use nalgebra::{Point2, Vector2};

/// Position of a point `distance` away from `center`, at `angle` radians
/// counterclockwise from the positive x-axis.
///
/// Angles are unbounded; cosine and sine wrap them, so callers never need to
/// normalize. Accumulated float error over very long runs is accepted.
pub fn polar_offset(center: Point2<f32>, distance: f32, angle: f32) -> Point2<f32> {
    center + distance * Vector2::new(angle.cos(), angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_quarter_turns() {
        let center = Point2::new(800.0, 800.0);
        approx::assert_relative_eq!(
            polar_offset(center, 100.0, 0.0),
            Point2::new(900.0, 800.0),
            epsilon = 1e-3
        );
        approx::assert_relative_eq!(
            polar_offset(center, 100.0, FRAC_PI_2),
            Point2::new(800.0, 900.0),
            epsilon = 1e-3
        );
        approx::assert_relative_eq!(
            polar_offset(center, 100.0, PI),
            Point2::new(700.0, 800.0),
            epsilon = 1e-3
        );
    }

    #[test]
    fn test_periodicity() {
        // position(angle + 2pi) == position(angle), no normalization needed
        for angle in [0.0f32, 0.3, 2.0, 5.5, 123.456] {
            approx::assert_relative_eq!(
                polar_offset(Point2::origin(), 250.0, angle),
                polar_offset(Point2::origin(), 250.0, angle + TAU),
                epsilon = 1e-3
            );
        }
    }

    #[test]
    fn test_zero_distance_stays_at_center() {
        let center = Point2::new(-3.0, 7.0);
        for angle in [0.0f32, 1.0, 4.0] {
            approx::assert_relative_eq!(polar_offset(center, 0.0, angle), center);
        }
    }
}
