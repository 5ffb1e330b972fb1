use backend::render::Canvas2D;
use backend::system::EventSource;

use crate::config;
use crate::scene::Scene;

/// Polls, draws and presents until a quit event has been seen. The frame in
/// which the quit arrives is still drawn. Returns the number of frames drawn.
pub fn run<T, E, C>(events: &mut E, canvas: &mut C, scene: &Scene<T>) -> u64
where
    E: EventSource,
    C: Canvas2D<T>,
{
    let mut quit = false;
    let mut frames = 0;

    while !quit {
        if events.drain_quit() {
            log::debug!("quit requested");
            quit = true;
        }

        draw_frame(canvas, scene);
        frames += 1;
    }

    frames
}

pub fn draw_frame<T, C: Canvas2D<T>>(canvas: &mut C, scene: &Scene<T>) {
    canvas.set_draw_rgba(config::CLEAR_COLOR);
    canvas.clear_frame();

    canvas.set_view(Some(scene.logo_rect));
    if let Err(e) = scene.logo.render_stretched(canvas) {
        log::trace!("logo: {e}");
    }

    canvas.set_view(Some(scene.tri_rect));
    if let Err(e) = scene.tri.render_stretched(canvas) {
        log::trace!("tri: {e}");
    }

    canvas.present_frame();
}
