use std::path::Path;

use crate::error::{LoadError, RenderError};
use crate::imageutils::{apply_color_key, decode_file, COLOR_KEY};
use crate::math::Viewport;
use crate::render::{Canvas2D, TextureUpload};

/// GPU texture together with the pixel size it was decoded at.
///
/// `width`/`height` are only meaningful while a texture is held; an empty
/// `MenuTexture` reports 0x0.
pub struct MenuTexture<T> {
    texture: Option<T>,
    width: u32,
    height: u32,
}

impl<T> Default for MenuTexture<T> {
    fn default() -> Self {
        MenuTexture {
            texture: None,
            width: 0,
            height: 0,
        }
    }
}

impl<T> MenuTexture<T> {
    pub fn new() -> MenuTexture<T> {
        Self::default()
    }

    /// Loads the image at `path`, keys out `COLOR_KEY` and uploads it.
    /// Any previously held texture is released first, so on error the
    /// resource is left empty.
    pub fn load_from_file<'a, U>(
        &mut self,
        uploader: &'a U,
        path: impl AsRef<Path>,
    ) -> Result<(), LoadError>
    where
        U: TextureUpload<Texture<'a> = T>,
    {
        self.free();
        let path = path.as_ref();

        let mut pixels = decode_file(path).inspect_err(|e| log::error!("{e}"))?;
        apply_color_key(&mut pixels, COLOR_KEY);

        let texture = uploader.upload(&mut pixels).map_err(|reason| {
            let e = LoadError::Upload {
                path: path.to_path_buf(),
                reason,
            };
            log::error!("{e}");
            e
        })?;

        log::debug!("loaded {} ({}x{})", path.display(), pixels.width, pixels.height);
        self.texture = Some(texture);
        self.width = pixels.width;
        self.height = pixels.height;
        Ok(())
    }

    pub fn free(&mut self) {
        if self.texture.take().is_some() {
            self.width = 0;
            self.height = 0;
        }
    }

    /// Draws at `(x, y)`. With a clip, only that part of the texture is drawn
    /// and the destination takes the clip's size; the position still comes
    /// from `x` and `y`.
    pub fn render<C: Canvas2D<T>>(
        &self,
        canvas: &mut C,
        x: i32,
        y: i32,
        clip: Option<Viewport>,
    ) -> Result<(), RenderError> {
        let texture = self.texture.as_ref().ok_or(RenderError::Empty)?;

        let mut quad = Viewport::new(x, y, self.width, self.height);
        if let Some(clip) = clip {
            quad = quad.with_size_of(clip);
        }

        canvas
            .copy_texture(texture, clip, Some(quad))
            .map_err(RenderError::Copy)
    }

    /// Copies the whole texture over the whole active viewport.
    pub fn render_stretched<C: Canvas2D<T>>(&self, canvas: &mut C) -> Result<(), RenderError> {
        let texture = self.texture.as_ref().ok_or(RenderError::Empty)?;
        canvas
            .copy_texture(texture, None, None)
            .map_err(RenderError::Copy)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_width(&mut self, w: u32) {
        self.width = w;
    }

    pub fn set_height(&mut self, h: u32) {
        self.height = h;
    }

    pub fn texture(&self) -> Option<&T> {
        self.texture.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.texture.is_some()
    }
}

impl<T> Drop for MenuTexture<T> {
    fn drop(&mut self) {
        self.free();
    }
}

/// Decodes and uploads `path` as-is, without color keying.
pub fn load_texture<'a, U: TextureUpload>(
    uploader: &'a U,
    path: impl AsRef<Path>,
) -> Result<U::Texture<'a>, LoadError> {
    let path = path.as_ref();
    let mut pixels = decode_file(path).inspect_err(|e| log::error!("{e}"))?;
    uploader.upload(&mut pixels).map_err(|reason| {
        let e = LoadError::Upload {
            path: path.to_path_buf(),
            reason,
        };
        log::error!("{e}");
        e
    })
}
