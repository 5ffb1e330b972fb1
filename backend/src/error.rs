use std::io;
use std::path::PathBuf;

use crate::config::DisplayProfile;

/// Failure while bringing up the platform. Each variant carries the
/// underlying subsystem's error text.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("SDL could not initialize! SDL_Error: {0}")]
    Sdl(String),
    #[error("SDL video subsystem could not initialize! SDL_Error: {0}")]
    Video(String),
    #[error("no window geometry configured for display profile {0:?}")]
    UnconfiguredDisplay(DisplayProfile),
    #[error("Window could not be created! SDL_Error: {0}")]
    Window(String),
    #[error("Renderer could not be created! SDL Error: {0}")]
    Renderer(String),
    #[error("image codec could not initialize! Error: {0}")]
    ImageCodec(String),
    #[error("SDL_ttf could not initialize! SDL_ttf Error: {0}")]
    Font(String),
    #[error("event pump could not be created! SDL_Error: {0}")]
    EventPump(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Unable to load image {}! {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Unable to load image {}! Decode error: {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },
    #[error("Unable to create texture from {}! SDL Error: {reason}", .path.display())]
    Upload { path: PathBuf, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("no texture loaded")]
    Empty,
    #[error("render copy failed: {0}")]
    Copy(String),
}
