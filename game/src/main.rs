use backend::system::System;

mod config;
mod frame;
mod logging;
mod scene;

fn main() {
    logging::init_logging(logging::LoggingConfig::default());

    let mut system = match System::new(config::WINDOW_TITLE, config::DISPLAY) {
        Ok(s) => s,
        Err(_) => {
            log::error!("Failed to initialize!");
            return;
        }
    };

    let texture_creator = system.texture_creator();
    let scene = match scene::load_media(&texture_creator, system.window.w) {
        Ok(scene) => scene,
        Err(_) => {
            log::error!("Failed to load media!");
            return;
        }
    };

    let frames = frame::run(&mut system.event_pump, &mut system.canvas, &scene);
    log::info!("closing after {frames} frames");
}
