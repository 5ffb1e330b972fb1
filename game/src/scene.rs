use std::path::Path;

use backend::error::LoadError;
use backend::math::Viewport;
use backend::render::TextureUpload;
use backend::texture::MenuTexture;

use crate::config;

pub struct Scene<T> {
    pub tri: MenuTexture<T>,
    pub logo: MenuTexture<T>,
    pub tri_rect: Viewport,
    pub logo_rect: Viewport,
}

pub fn tri_viewport() -> Viewport {
    Viewport::new(30, 500, 100, 100)
}

/// Banner across the top of the window, 20px short of the right edge.
pub fn logo_viewport(window_width: u32) -> Viewport {
    Viewport::new(0, 0, window_width.saturating_sub(20), 200)
}

pub fn load_media<'a, U: TextureUpload>(
    uploader: &'a U,
    window_width: u32,
) -> Result<Scene<U::Texture<'a>>, LoadError> {
    load_media_from(uploader, Path::new(config::RES_DIR), window_width)
}

/// Loads the tri image, then the logo; stops at the first failure.
pub fn load_media_from<'a, U: TextureUpload>(
    uploader: &'a U,
    root: &Path,
    window_width: u32,
) -> Result<Scene<U::Texture<'a>>, LoadError> {
    let mut tri = MenuTexture::new();
    tri.load_from_file(uploader, root.join(config::TRI_IMAGE))?;

    let mut logo = MenuTexture::new();
    logo.load_from_file(uploader, root.join(config::LOGO_IMAGE))?;

    Ok(Scene {
        tri,
        logo,
        tri_rect: tri_viewport(),
        logo_rect: logo_viewport(window_width),
    })
}
