//! Decode, resize and sink plumbing around the rasterizer

use std::fs;
use std::path::Path;

use image::{DynamicImage, imageops};

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::rasterizer::rasterize;

/// Output height in rows for a source image rendered at `columns` wide
///
/// `round(h0 / w0 * columns * char_aspect)`; the 0.5 default aspect factor
/// compensates for character cells being about twice as tall as wide. A very
/// flat image can legitimately round to zero rows.
pub fn target_height(width0: u32, height0: u32, columns: u32, char_aspect: f32) -> u32 {
    (height0 as f64 / width0 as f64 * columns as f64 * char_aspect as f64).round() as u32
}

/// Convert a decoded image to colorized ASCII art
///
/// Resizes to the configured width (height from the aspect-ratio formula)
/// with Lanczos3 filtering, then rasterizes. The result serves both the file
/// and the stdout sink; rasterization is pure so there is no need to run it
/// twice.
pub fn render_image(img: &DynamicImage, config: &RenderConfig) -> String {
    let rgba = img.to_rgba8();
    let (width0, height0) = rgba.dimensions();
    let rows = target_height(width0, height0, config.columns, config.char_aspect);

    let resized = imageops::resize(&rgba, config.columns, rows, imageops::FilterType::Lanczos3);
    rasterize(&resized)
}

/// Decode raw image bytes (format auto-detected) and render them
///
/// # Errors
/// [`RenderError::Decode`] if the bytes are not a supported image.
pub fn render_bytes(bytes: &[u8], config: &RenderConfig) -> Result<String, RenderError> {
    let img = image::load_from_memory(bytes)?;
    Ok(render_image(&img, config))
}

/// Read an image file and render it
///
/// # Errors
/// [`RenderError::Read`] if the file cannot be read,
/// [`RenderError::Decode`] if its contents cannot be decoded.
pub fn render_file<P: AsRef<Path>>(path: P, config: &RenderConfig) -> Result<String, RenderError> {
    let bytes = fs::read(path).map_err(RenderError::Read)?;
    render_bytes(&bytes, config)
}

/// Write the rendered document to a file, overwriting any existing one
///
/// # Errors
/// [`RenderError::Write`] if the file cannot be written.
pub fn save_to_file<P: AsRef<Path>>(path: P, art: &str) -> Result<(), RenderError> {
    fs::write(path, art).map_err(RenderError::Write)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(img: RgbaImage) -> Vec<u8> {
        let mut buf = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn test_target_height_formula() {
        // square image: height = columns / 2
        assert_eq!(target_height(100, 100, 50, 0.5), 25);
        // 2:1 portrait at width 40: 200/100 * 40 * 0.5 = 40
        assert_eq!(target_height(100, 200, 40, 0.5), 40);
        // rounds to nearest: 100/300 * 50 * 0.5 = 8.33 -> 8
        assert_eq!(target_height(300, 100, 50, 0.5), 8);
        // 2x2 at width 2: 2/2 * 2 * 0.5 = 1
        assert_eq!(target_height(2, 2, 2, 0.5), 1);
        // very flat images may produce no rows at all
        assert_eq!(target_height(100, 1, 2, 0.5), 0);
    }

    #[test]
    fn test_render_image_dimensions() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            64,
            64,
            Rgba([128, 128, 128, 255]),
        ));
        let config = RenderConfig {
            columns: 20,
            ..Default::default()
        };
        let art = render_image(&img, &config);

        let rows: Vec<&str> = art.split_terminator('\n').collect();
        assert_eq!(rows.len(), 10); // 64/64 * 20 * 0.5
    }

    #[test]
    fn test_black_square_scenario() {
        // 2x2 all-black PNG at width 2 -> one row of two '@' in #000000
        let bytes = png_bytes(RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255])));
        let config = RenderConfig {
            columns: 2,
            ..Default::default()
        };
        let art = render_bytes(&bytes, &config).unwrap();

        assert_eq!(art, "\x1b[38;2;0;0;0m@\x1b[0m\x1b[38;2;0;0;0m@\x1b[0m\n");
    }

    #[test]
    fn test_render_is_deterministic() {
        let bytes = png_bytes(RgbaImage::from_fn(16, 16, |x, y| {
            Rgba([(x * 15) as u8, (y * 15) as u8, 99, 255])
        }));
        let config = RenderConfig::default();

        let first = render_bytes(&bytes, &config).unwrap();
        let second = render_bytes(&bytes, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_undecodable_bytes() {
        let config = RenderConfig::default();
        let err = render_bytes(b"definitely not an image", &config).unwrap_err();
        assert!(matches!(err, RenderError::Decode(_)));
    }

    #[test]
    fn test_missing_file() {
        let config = RenderConfig::default();
        let err = render_file("does-not-exist.png", &config).unwrap_err();
        assert!(matches!(err, RenderError::Read(_)));
        assert!(err.to_string().contains("Error reading file"));
    }

    #[test]
    fn test_save_overwrites() {
        let dir = std::env::temp_dir().join("chromascii-save-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("ascii_output.txt");

        save_to_file(&path, "first\n").unwrap();
        save_to_file(&path, "second\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_to_unwritable_path() {
        let err = save_to_file("no-such-dir/ascii_output.txt", "art\n").unwrap_err();
        assert!(matches!(err, RenderError::Write(_)));
    }
}
