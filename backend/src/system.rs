use sdl2::event::Event;
use sdl2::render::{TextureCreator, WindowCanvas};
use sdl2::ttf::Sdl2TtfContext;
use sdl2::video::WindowContext;
use sdl2::EventPump;

use crate::config::{DisplayProfile, WindowConfig};
use crate::error::BootstrapError;
use crate::imageutils::ImageCodec;
use crate::math::Rgba;

pub trait EventSource {
    /// Drains every pending event without blocking and reports whether any
    /// of them asked the application to quit.
    fn drain_quit(&mut self) -> bool;
}

impl EventSource for EventPump {
    fn drain_quit(&mut self) -> bool {
        let mut quit = false;
        for event in self.poll_iter() {
            if let Event::Quit { .. } = event {
                quit = true;
            }
        }
        quit
    }
}

// Fields drop top to bottom, i.e. in reverse bootstrap order.
pub struct System {
    pub window: WindowConfig,
    pub event_pump: EventPump,
    pub ttf_context: Sdl2TtfContext,
    pub image_codec: ImageCodec,
    pub canvas: WindowCanvas,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub sdl_context: sdl2::Sdl,
}

impl System {
    pub fn new(title: &str, profile: DisplayProfile) -> Result<System, BootstrapError> {
        let system = Self::bootstrap(title, profile).inspect_err(|e| log::error!("{e}"))?;
        log::info!(
            "window {}x{} at ({}, {}) ready",
            system.window.w,
            system.window.h,
            system.window.x,
            system.window.y
        );
        Ok(system)
    }

    fn bootstrap(title: &str, profile: DisplayProfile) -> Result<System, BootstrapError> {
        let sdl_context = sdl2::init().map_err(BootstrapError::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(BootstrapError::Video)?;

        if !sdl2::hint::set("SDL_RENDER_SCALE_QUALITY", "1") {
            log::warn!("Warning: Linear texture filtering not enabled!");
        }

        let window = profile
            .window_config()
            .ok_or(BootstrapError::UnconfiguredDisplay(profile))?;
        log::debug!("display profile {profile:?}: {window:?}");

        let sdl_window = video_subsystem
            .window(title, window.w, window.h)
            .position(window.x, window.y)
            .build()
            .map_err(|e| BootstrapError::Window(e.to_string()))?;

        let mut canvas = sdl_window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| BootstrapError::Renderer(e.to_string()))?;
        canvas.set_draw_color(Rgba::WHITE);

        let image_codec = ImageCodec::init().map_err(BootstrapError::ImageCodec)?;

        // Held for text rendering; nothing loads a font yet.
        let ttf_context = sdl2::ttf::init().map_err(|e| BootstrapError::Font(e.to_string()))?;

        let event_pump = sdl_context.event_pump().map_err(BootstrapError::EventPump)?;

        Ok(System {
            window,
            event_pump,
            ttf_context,
            image_codec,
            canvas,
            video_subsystem,
            sdl_context,
        })
    }

    pub fn texture_creator(&self) -> TextureCreator<WindowContext> {
        self.canvas.texture_creator()
    }
}
