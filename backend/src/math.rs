use sdl2::pixels::Color;
use sdl2::rect::Rect;

/// Rectangular region of the render target, in window pixels.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Viewport {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Viewport {
        Viewport { x, y, w, h }
    }

    /// Same origin, width and height taken from `other`.
    pub fn with_size_of(self, other: Viewport) -> Viewport {
        Viewport {
            w: other.w,
            h: other.h,
            ..self
        }
    }
}

impl From<Viewport> for Rect {
    fn from(v: Viewport) -> Rect {
        Rect::new(v.x, v.y, v.w, v.h)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(0xFF, 0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Rgba {
        Rgba { r, g, b, a }
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Color {
        Color::RGBA(c.r, c.g, c.b, c.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_converts_to_sdl_rect() {
        let rect: Rect = Viewport::new(30, 500, 100, 100).into();
        assert_eq!(rect.x(), 30);
        assert_eq!(rect.y(), 500);
        assert_eq!(rect.width(), 100);
        assert_eq!(rect.height(), 100);
    }

    #[test]
    fn with_size_of_keeps_origin() {
        let v = Viewport::new(5, 7, 64, 64).with_size_of(Viewport::new(99, 99, 10, 20));
        assert_eq!(v, Viewport::new(5, 7, 10, 20));
    }

    #[test]
    fn rgba_converts_to_sdl_color() {
        let c: Color = Rgba::new(0x50, 0x50, 0x50, 0xFF).into();
        assert_eq!(c, Color::RGBA(0x50, 0x50, 0x50, 0xFF));
    }
}
