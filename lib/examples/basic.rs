/// Basic example: render a synthesized gradient as colorized ASCII art
///
/// No input file needed; the image is built in memory.
use chromascii::{RenderConfig, render_image};
use image::{DynamicImage, Rgba, RgbaImage};

fn main() {
    // Horizontal hue sweep, vertical brightness sweep
    let width = 256;
    let height = 128;
    let img = RgbaImage::from_fn(width, height, |x, y| {
        let level = 255 - (y * 2) as u8;
        let r = level.saturating_sub(x as u8 / 2);
        let g = level / 2;
        let b = x as u8;
        Rgba([r, g, b, 255])
    });

    let config = RenderConfig {
        columns: 72,
        ..Default::default()
    };

    let art = render_image(&DynamicImage::ImageRgba8(img), &config);
    println!("{art}");
}
