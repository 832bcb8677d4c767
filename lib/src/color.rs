//! True-color terminal escapes
//!
//! Each output cell is a single character wrapped in an SGR true-color
//! foreground sequence followed by a reset, so the document renders
//! correctly regardless of what precedes it.

use std::fmt;

use image::Rgba;

/// SGR reset, appended after every colored cell
pub const RESET: &str = "\x1b[0m";

/// An 8-bit-per-channel foreground color for one output cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// The color as a lowercase `#rrggbb` literal
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Wrap a character in a true-color foreground escape for this color
    pub fn paint(&self, ch: char) -> String {
        format!("\x1b[38;2;{};{};{}m{}{}", self.r, self.g, self.b, ch, RESET)
    }
}

impl From<&Rgba<u8>> for Rgb {
    /// Takes the color channels of a pixel; alpha is read but discarded, so
    /// fully transparent pixels keep their full-intensity color.
    fn from(pixel: &Rgba<u8>) -> Self {
        let Rgba([r, g, b, _]) = *pixel;
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}
