use backend::config::DisplayProfile;
use backend::math::Rgba;

pub const WINDOW_TITLE: &str = "SDL Tutorial";

pub const DISPLAY: DisplayProfile = DisplayProfile::Primary;

/// Asset directory, relative to the working directory.
pub const RES_DIR: &str = "res";
pub const TRI_IMAGE: &str = "tri.png";
pub const LOGO_IMAGE: &str = "logo.png";

pub const CLEAR_COLOR: Rgba = Rgba::new(0x50, 0x50, 0x50, 0xFF);
