use nalgebra::Point2;

use super::body::{Body, BodyID, BodyInfo, OrbitState};
use crate::math::polar_offset;

/// The owned collection of bodies. A parent always precedes its children, so
/// one forward pass over the vector resolves every position.
#[derive(Debug, Clone, Default)]
pub struct System {
    bodies: Vec<Body>,
}

impl System {
    pub fn new() -> Self {
        System { bodies: vec![] }
    }

    /// Add the body everything else ultimately orbits. It sits at the origin.
    pub fn add_fixed_body(&mut self, info: BodyInfo) -> BodyID {
        self.push_body(info, None)
    }

    /// Add a body circling `parent` at `distance`, advancing by
    /// `angular_speed` radians per frame. The parent must already be in the
    /// system.
    pub fn add_body(
        &mut self,
        info: BodyInfo,
        distance: f32,
        angular_speed: f32,
        parent: BodyID,
    ) -> BodyID {
        assert!(parent.0 < self.bodies.len(), "parent body not yet added");
        let orbit = OrbitState {
            parent,
            distance,
            angular_speed,
            angle: 0.0,
        };
        self.push_body(info, Some(orbit))
    }

    fn push_body(&mut self, info: BodyInfo, orbit: Option<OrbitState>) -> BodyID {
        let id = BodyID(self.bodies.len());
        self.bodies.push(Body { id, info, orbit });
        id
    }

    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn get_body(&self, id: BodyID) -> &Body {
        &self.bodies[id.0]
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Current position of every body, indexed by `BodyID`. A child is placed
    /// around the position its parent takes this same frame.
    pub fn positions(&self) -> Vec<Point2<f32>> {
        let mut positions: Vec<Point2<f32>> = Vec::with_capacity(self.bodies.len());
        for body in &self.bodies {
            let position = match &body.orbit {
                None => Point2::origin(),
                Some(orbit) => polar_offset(positions[orbit.parent.0], orbit.distance, orbit.angle),
            };
            positions.push(position);
        }
        positions
    }

    /// Advance every orbit by one frame. Called after the frame has been laid
    /// out, so each frame draws the angles it read.
    pub fn advance(&mut self) {
        for body in &mut self.bodies {
            if let Some(orbit) = &mut body.orbit {
                orbit.angle += orbit.angular_speed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FillStyle;
    use nalgebra::Point3;

    fn flat_info(name: &str, radius: f32) -> BodyInfo {
        BodyInfo {
            name: name.to_owned(),
            radius,
            fill: FillStyle::Flat(Point3::new(1.0, 1.0, 1.0)),
            ring: false,
        }
    }

    fn angle_of(system: &System, id: BodyID) -> f32 {
        system.get_body(id).orbit.as_ref().unwrap().angle
    }

    /// Sun, one planet, one moon around the planet.
    fn small_system(planet_speed: f32, moon_speed: f32) -> (System, BodyID, BodyID, BodyID) {
        let mut system = System::new();
        let sun = system.add_fixed_body(flat_info("sun", 50.0));
        let planet = system.add_body(flat_info("planet", 20.0), 200.0, planet_speed, sun);
        let moon = system.add_body(flat_info("moon", 8.0), 30.0, moon_speed, planet);
        (system, sun, planet, moon)
    }

    #[test]
    fn test_angle_accumulation() {
        let (mut system, _, planet, _) = small_system(0.0015, 0.005);

        // N = 0 and N = 1 are exact
        assert_eq!(angle_of(&system, planet), 0.0);
        system.advance();
        assert_eq!(angle_of(&system, planet), 0.0015);

        // N = 1000 accumulates only float error
        for _ in 1..1000 {
            system.advance();
        }
        approx::assert_abs_diff_eq!(angle_of(&system, planet), 1000.0 * 0.0015, epsilon = 1e-3);
    }

    #[test]
    fn test_fixed_body_stays_at_origin() {
        let (mut system, sun, _, _) = small_system(0.0015, 0.005);
        for _ in 0..10 {
            system.advance();
        }
        approx::assert_relative_eq!(system.positions()[sun.0], Point2::origin());
    }

    #[test]
    fn test_moon_centered_on_planet() {
        let (mut system, _, planet, moon) = small_system(0.0015, 0.005);
        for _ in 0..500 {
            system.advance();
        }
        let positions = system.positions();
        let expected = polar_offset(positions[planet.0], 30.0, angle_of(&system, moon));
        approx::assert_relative_eq!(positions[moon.0], expected, epsilon = 1e-3);
    }

    #[test]
    fn test_moon_moves_around_stationary_planet() {
        // Freezing the planet must not freeze its moon
        let (mut system, _, planet, moon) = small_system(0.0, 0.005);
        let before = system.positions();
        for _ in 0..100 {
            system.advance();
        }
        let after = system.positions();

        approx::assert_relative_eq!(before[planet.0], after[planet.0]);
        let moved = nalgebra::distance(&before[moon.0], &after[moon.0]);
        assert!(moved > 1.0, "moon only moved {moved}");
    }

    #[test]
    #[should_panic(expected = "parent body not yet added")]
    fn test_parent_must_exist() {
        let mut system = System::new();
        system.add_body(flat_info("stray", 1.0), 10.0, 0.001, BodyID(3));
    }
}
