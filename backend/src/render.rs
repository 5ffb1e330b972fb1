//! Seams between the menu code and the SDL2 renderer.
//!
//! `TextureUpload` turns decoded pixels into a GPU texture and `Canvas2D`
//! covers the handful of draw calls the menu needs. The SDL2 implementations
//! live here; tests substitute recording fakes.

use sdl2::render::{BlendMode, Canvas, Texture, TextureCreator};
use sdl2::surface::Surface;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;
use sdl2::video::{Window, WindowContext};

use crate::imageutils::Pixels;
use crate::math::{Rgba, Viewport};

pub trait TextureUpload {
    type Texture<'a>
    where
        Self: 'a;

    fn upload<'a>(&'a self, pixels: &mut Pixels) -> Result<Self::Texture<'a>, String>;
}

pub trait Canvas2D<T> {
    fn set_draw_rgba(&mut self, color: Rgba);

    fn clear_frame(&mut self);

    /// `None` resets the viewport to the whole target.
    fn set_view(&mut self, viewport: Option<Viewport>);

    /// `None` for `src` means the whole texture, `None` for `dst` the whole
    /// viewport.
    fn copy_texture(
        &mut self,
        texture: &T,
        src: Option<Viewport>,
        dst: Option<Viewport>,
    ) -> Result<(), String>;

    fn present_frame(&mut self);
}

impl TextureUpload for TextureCreator<WindowContext> {
    type Texture<'a> = Texture<'a>;

    fn upload<'a>(&'a self, pixels: &mut Pixels) -> Result<Texture<'a>, String> {
        let (w, h, pitch) = (pixels.width, pixels.height, pixels.pitch());
        let surface = Surface::from_data(&mut pixels.data, w, h, pitch, PixelFormatEnum::RGBA32)?;
        let mut texture = self
            .create_texture_from_surface(&surface)
            .map_err(|e| e.to_string())?;
        texture.set_blend_mode(BlendMode::Blend);
        Ok(texture)
    }
}

impl<'r> Canvas2D<Texture<'r>> for Canvas<Window> {
    fn set_draw_rgba(&mut self, color: Rgba) {
        self.set_draw_color(color);
    }

    fn clear_frame(&mut self) {
        Canvas::clear(self);
    }

    fn set_view(&mut self, viewport: Option<Viewport>) {
        self.set_viewport(viewport.map(Rect::from));
    }

    fn copy_texture(
        &mut self,
        texture: &Texture<'r>,
        src: Option<Viewport>,
        dst: Option<Viewport>,
    ) -> Result<(), String> {
        self.copy(texture, src.map(Rect::from), dst.map(Rect::from))
    }

    fn present_frame(&mut self) {
        Canvas::present(self);
    }
}
