//! Wires the model to kiss3d's render loop.

use std::time::Instant;

use kiss3d::camera::Camera;
use kiss3d::event::{Action, Key, WindowEvent};
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::window::{State, Window};

use nalgebra::{Point2, Point3};

use self::view::View;
use crate::model::{Belt, Field, System};

mod view;

// Key config, all in one place
const KEY_QUIT: Key = Key::Escape;

pub struct Simulation {
    view: View,
    frame_counter: FrameCounter,
}

impl Simulation {
    pub fn new(system: System, belt: Belt, field: Field, window: &mut Window) -> Self {
        Simulation {
            view: View::new(system, belt, field, window),
            frame_counter: FrameCounter::new(),
        }
    }

    fn process_user_input(&mut self, window: &mut Window) {
        let mut events = window.events();
        for event in events.iter() {
            if let WindowEvent::Key(KEY_QUIT, Action::Press, _) = event.value {
                window.close();
            }
        }
    }
}

impl State for Simulation {
    fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn Renderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        (None, Some(self.view.camera_mut()), None, None)
    }

    fn step(&mut self, window: &mut Window) {
        self.process_user_input(window);
        self.view.prerender(window);
        self.frame_counter.tick();

        window.draw_text(
            &format!("FPS: {:.0}", self.frame_counter.fps()),
            &Point2::origin(),
            60.0,
            &kiss3d::text::Font::default(),
            &Point3::new(1.0, 1.0, 1.0),
        );
    }
}

/// Frames-per-second estimate, refreshed about once a second.
struct FrameCounter {
    since: Instant,
    frames: u32,
    fps: f64,
}

impl FrameCounter {
    fn new() -> Self {
        FrameCounter {
            since: Instant::now(),
            frames: 0,
            fps: 0.0,
        }
    }

    fn tick(&mut self) {
        self.frames += 1;
        let elapsed = self.since.elapsed();
        if elapsed.as_secs() >= 1 {
            self.fps = self.frames as f64 / elapsed.as_secs_f64();
            self.since = Instant::now();
            self.frames = 0;
        }
    }

    fn fps(&self) -> f64 {
        self.fps
    }
}
