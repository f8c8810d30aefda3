use std::path::Path;
use std::process;

use kiss3d::window::Window;
use log::{error, info};

use solar2d::consts::{BELT_SEED, BODY_FILE, FIELD_SEED, FRAMERATE_LIMIT, WINDOW_SIZE, WINDOW_TITLE};
use solar2d::file::read_file;
use solar2d::gui::Simulation;
use solar2d::model::{Belt, Field};

fn main() {
    env_logger::init();

    // Resolve the whole body table before opening a window; a bad table is
    // fatal and should not flash an empty frame first.
    let system = match read_file(Path::new(BODY_FILE)) {
        Ok(system) => system,
        Err(err) => {
            error!("failed to load {}: {}", BODY_FILE, err);
            process::exit(-1);
        }
    };
    info!("loaded {} bodies from {}", system.len(), BODY_FILE);

    let belt = Belt::generate(BELT_SEED);
    let field = Field::generate(FIELD_SEED);

    let mut window = Window::new_with_size(WINDOW_TITLE, WINDOW_SIZE, WINDOW_SIZE);
    window.set_framerate_limit(Some(FRAMERATE_LIMIT));
    window.set_background_color(0.0, 0.0, 0.0);

    let simulation = Simulation::new(system, belt, field, &mut window);
    window.render_loop(simulation);
}
