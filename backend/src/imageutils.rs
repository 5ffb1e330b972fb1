use std::fs;
use std::path::Path;

use crate::error::LoadError;
use crate::math::Rgb;

/// Pixels matching this color are made fully transparent before upload.
pub const COLOR_KEY: Rgb = Rgb::new(0xFE, 0x52, 0xE9);

const BYTES_PER_PIXEL: usize = 4;

// 1x1 RGBA PNG used to check the decoder at startup.
const PNG_PROBE: &[u8] = include_bytes!("../assets/probe.png");

/// Decoded image, tightly packed RGBA8 rows.
#[derive(Debug, Clone)]
pub struct Pixels {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Pixels {
    pub fn pitch(&self) -> u32 {
        self.width * BYTES_PER_PIXEL as u32
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }
}

/// Scoped handle on the image decoder. Holding one means PNG decoding was
/// configured and verified.
#[derive(Debug)]
pub struct ImageCodec {
    _private: (),
}

impl ImageCodec {
    pub fn init() -> Result<ImageCodec, String> {
        unsafe {
            stb_image::stb_image::stbi_set_flip_vertically_on_load(0);
        }
        let probe = decode_memory(PNG_PROBE).map_err(|e| format!("PNG support unavailable: {e}"))?;
        if (probe.width, probe.height) != (1, 1) {
            return Err(format!(
                "PNG probe decoded to {}x{}, expected 1x1",
                probe.width, probe.height
            ));
        }
        log::debug!("image codec ready (png)");
        Ok(ImageCodec { _private: () })
    }
}

pub fn decode_memory(bytes: &[u8]) -> Result<Pixels, String> {
    let img = match stb_image::image::load_from_memory_with_depth(bytes, BYTES_PER_PIXEL, false) {
        stb_image::image::LoadResult::ImageF32(_) => {
            return Err("32-bit images not supported here".to_string());
        }
        stb_image::image::LoadResult::ImageU8(img) => img,
        stb_image::image::LoadResult::Error(e) => return Err(e),
    };

    if img.data.len() != img.width * img.height * BYTES_PER_PIXEL {
        return Err(format!(
            "unexpected pixel buffer of {} bytes for {}x{} image",
            img.data.len(),
            img.width,
            img.height
        ));
    }

    Ok(Pixels {
        width: img.width as u32,
        height: img.height as u32,
        data: img.data,
    })
}

pub fn decode_file(path: &Path) -> Result<Pixels, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    decode_memory(&bytes).map_err(|reason| LoadError::Decode {
        path: path.to_path_buf(),
        reason,
    })
}

/// Clears alpha on every pixel whose color equals `key`. Returns how many
/// pixels were keyed out.
pub fn apply_color_key(pixels: &mut Pixels, key: Rgb) -> usize {
    let mut keyed = 0;
    for px in pixels.data.chunks_exact_mut(BYTES_PER_PIXEL) {
        if px[0] == key.r && px[1] == key.g && px[2] == key.b {
            px[3] = 0;
            keyed += 1;
        }
    }
    keyed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn res(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../res").join(name)
    }

    #[test]
    fn codec_init_decodes_probe() {
        assert!(ImageCodec::init().is_ok());
    }

    #[test]
    fn decode_probe_is_key_colored() {
        let px = decode_memory(PNG_PROBE).unwrap();
        assert_eq!((px.width, px.height), (1, 1));
        assert_eq!(px.pixel(0, 0), [0xFE, 0x52, 0xE9, 0xFF]);
    }

    #[test]
    fn decode_garbage_fails() {
        assert!(decode_memory(b"definitely not a png").is_err());
    }

    #[test]
    fn decode_file_reports_dimensions() {
        let px = decode_file(&res("tri.png")).unwrap();
        assert_eq!((px.width, px.height), (100, 100));
        assert_eq!(px.data.len(), 100 * 100 * 4);
        assert_eq!(px.pitch(), 400);
    }

    #[test]
    fn decode_missing_file_is_read_error() {
        let err = decode_file(&res("missing.png")).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert!(err.to_string().starts_with("Unable to load image"));
    }

    #[test]
    fn color_key_only_touches_matching_pixels() {
        let mut px = Pixels {
            width: 3,
            height: 1,
            data: vec![
                0xFE, 0x52, 0xE9, 0xFF, // key
                0xFE, 0x52, 0xE8, 0xFF, // off by one
                0x10, 0x20, 0x30, 0x80,
            ],
        };
        assert_eq!(apply_color_key(&mut px, COLOR_KEY), 1);
        assert_eq!(px.pixel(0, 0)[3], 0);
        assert_eq!(px.pixel(1, 0)[3], 0xFF);
        assert_eq!(px.pixel(2, 0), [0x10, 0x20, 0x30, 0x80]);
    }

    #[test]
    fn color_key_clears_tri_background() {
        let mut px = decode_file(&res("tri.png")).unwrap();
        let keyed = apply_color_key(&mut px, COLOR_KEY);
        assert!(keyed > 0);
        assert_eq!(px.pixel(0, 0)[3], 0);
        // inside the triangle
        assert_eq!(px.pixel(50, 50)[3], 0xFF);
    }
}
