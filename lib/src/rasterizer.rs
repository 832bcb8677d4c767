//! Pixel grid to colorized text
//!
//! The one piece of original logic: walk the resized image in row-major
//! order, pick a ramp character per pixel by perceived brightness, and color
//! it with the pixel's own RGB. Pure and deterministic, no error paths.

use crate::color::Rgb;
use crate::ramp::char_for_brightness;
use image::{Rgba, RgbaImage};

/// Perceived brightness of a pixel
///
/// Rec. 601 luma weights: `0.299*R + 0.587*G + 0.114*B`. The weighted sum is
/// truncated (not rounded) to u8. Alpha does not contribute.
pub fn brightness(pixel: &Rgba<u8>) -> u8 {
    let Rgba([r, g, b, _]) = *pixel;

    (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) as u8
}

/// Render a pixel grid as colorized ASCII art
///
/// Rows come out top first, pixels left-to-right, each row terminated by
/// `\n`. Every cell is the ramp character for the pixel's brightness wrapped
/// in a true-color escape for the pixel's RGB.
///
/// # Arguments
/// * `img` - The resized RGBA image, one pixel per output cell
///
/// # Returns
/// The full document as one string with embedded ANSI escapes
pub fn rasterize(img: &RgbaImage) -> String {
    let (width, height) = img.dimensions();
    // ~20 bytes per cell covers the escape, the character and the reset
    let mut out = String::with_capacity((width as usize * 20 + 1) * height as usize);

    for y in 0..height {
        for x in 0..width {
            let pixel = img.get_pixel(x, y);
            let ch = char_for_brightness(brightness(pixel));
            out.push_str(&Rgb::from(pixel).paint(ch));
        }
        out.push('\n');
    }

    out
}
