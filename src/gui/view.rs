use kiss3d::planar_camera::Sidescroll;
use kiss3d::scene::PlanarSceneNode;
use kiss3d::window::Window;

use log::warn;
use nalgebra::{Point2, Point3, Translation2};

use crate::consts::GUIDE_SEGMENTS;
use crate::math::polar_offset;
use crate::model::{overlaps_any, Belt, Body, Field, FillStyle, System};

/// Ring guide-lines, as multiples of the ringed body's radius.
const RING_SCALES: [f32; 3] = [1.4, 1.45, 1.5];

/// Owns the model and the scene nodes that depict it.
///
/// Disks are retained planar nodes moved every frame; orbit guide-lines and
/// rings are redrawn immediate-mode. Node creation order is draw order, so
/// the backdrop goes in first and the belt last.
pub struct View {
    system: System,
    belt: Belt,
    body_nodes: Vec<PlanarSceneNode>,
    belt_nodes: Vec<PlanarSceneNode>,
    // Never repositioned, but dropping the handles would orphan the nodes.
    #[allow(dead_code)]
    field_nodes: Vec<PlanarSceneNode>,
    camera: Sidescroll,
}

impl View {
    pub fn new(system: System, belt: Belt, field: Field, window: &mut Window) -> Self {
        let field_nodes = field
            .specks()
            .iter()
            .map(|speck| {
                let mut node = window.add_circle(speck.radius);
                node.set_color(speck.color.x, speck.color.y, speck.color.z);
                node.set_local_translation(Translation2::new(speck.position.x, speck.position.y));
                node
            })
            .collect();

        let body_nodes = system
            .bodies()
            .map(|body| create_body_node(window, body))
            .collect();

        let belt_nodes = belt
            .particles()
            .iter()
            .map(|particle| {
                let mut node = window.add_circle(particle.radius);
                node.set_color(0.5, 0.5, 0.5);
                node
            })
            .collect();

        View {
            system,
            belt,
            body_nodes,
            belt_nodes,
            field_nodes,
            camera: Sidescroll::new(),
        }
    }

    pub fn camera_mut(&mut self) -> &mut Sidescroll {
        &mut self.camera
    }

    /// Lay the scene out at the current angles, then advance them, so the
    /// frame about to be rendered shows the angles that were read.
    pub fn prerender(&mut self, window: &mut Window) {
        let positions = self.system.positions();
        let guide_color = Point3::new(1.0, 1.0, 1.0);
        let ring_color = Point3::new(0.7, 0.7, 0.7);

        for (body, node) in self.system.bodies().zip(self.body_nodes.iter_mut()) {
            let position = positions[body.id.0];
            node.set_local_translation(Translation2::new(position.x, position.y));

            if let Some(orbit) = &body.orbit {
                stroke_circle(window, positions[orbit.parent.0], orbit.distance, &guide_color);
            }
            if body.info.ring {
                for scale in RING_SCALES {
                    stroke_circle(window, position, body.info.radius * scale, &ring_color);
                }
            }
        }

        // Hide any belt particle that strayed onto a body's disk this frame.
        let disks: Vec<_> = self
            .system
            .bodies()
            .map(|body| (positions[body.id.0], body.info.radius))
            .collect();
        for (particle, node) in self.belt.particles().iter().zip(self.belt_nodes.iter_mut()) {
            let position = particle.position(Point2::origin());
            let visible = particle.in_band() && !overlaps_any(position, particle.radius, &disks);
            node.set_visible(visible);
            if visible {
                node.set_local_translation(Translation2::new(position.x, position.y));
            }
        }

        self.system.advance();
        self.belt.advance();
    }
}

fn create_body_node(window: &mut Window, body: &Body) -> PlanarSceneNode {
    let mut node = window.add_circle(body.info.radius);
    match &body.info.fill {
        FillStyle::Flat(color) => node.set_color(color.x, color.y, color.z),
        FillStyle::Textured { path, fallback } => match image::image_dimensions(path) {
            Ok(_) => {
                // Leave the material white so the texture shows unmodulated
                node.set_color(1.0, 1.0, 1.0);
                node.set_texture_from_file(path, &body.info.name);
            }
            Err(err) => {
                warn!(
                    "texture {} for {} is unusable ({}), falling back to flat color",
                    path.display(),
                    body.info.name,
                    err
                );
                node.set_color(fallback.x, fallback.y, fallback.z);
            }
        },
    }
    node
}

/// Stroke a closed polygon approximating a circle, one segment at a time.
fn stroke_circle(window: &mut Window, center: Point2<f32>, radius: f32, color: &Point3<f32>) {
    let mut prev = polar_offset(center, radius, 0.0);
    for i in 1..=GUIDE_SEGMENTS {
        let theta = std::f32::consts::TAU * i as f32 / GUIDE_SEGMENTS as f32;
        let next = polar_offset(center, radius, theta);
        window.draw_planar_line(&prev, &next, color);
        prev = next;
    }
}
