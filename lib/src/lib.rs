//! Chromascii - colorized image to ASCII art converter
//!
//! This library turns a raster image into text art: each pixel of the resized
//! image becomes one character picked by perceived brightness, wrapped in a
//! true-color ANSI escape carrying the pixel's original color.
//!
//! # Example
//! ```no_run
//! use chromascii::{RenderConfig, render_file};
//!
//! let config = RenderConfig::default();
//! let art = render_file("input.png", &config).unwrap();
//! println!("{art}");
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod ramp;
pub mod rasterizer;

// Re-export main types for convenience
pub use config::RenderConfig;
pub use error::RenderError;
pub use pipeline::{render_bytes, render_file, render_image, save_to_file};
