/// Window geometry: size and top-left screen position.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub w: u32,
    pub h: u32,
    pub x: i32,
    pub y: i32,
}

/// Which monitor preset the window is placed on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DisplayProfile {
    Primary,
    /// No geometry has been measured for this monitor yet.
    Secondary,
}

impl DisplayProfile {
    pub fn window_config(self) -> Option<WindowConfig> {
        match self {
            DisplayProfile::Primary => Some(WindowConfig {
                w: 900,
                h: 797,
                x: 636,
                y: 26,
            }),
            DisplayProfile::Secondary => None,
        }
    }
}
