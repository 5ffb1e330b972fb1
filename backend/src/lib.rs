pub mod config;
pub mod error;
pub mod imageutils;
pub mod math;
pub mod render;
pub mod system;
pub mod texture;
