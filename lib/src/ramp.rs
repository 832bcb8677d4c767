//! Brightness ramp lookup
//!
//! Maps an 8-bit brightness value to one character of a fixed ramp ordered
//! from densest/darkest to sparsest/lightest.

/// The fixed character ramp, darkest first
pub const RAMP: [char; 7] = ['@', '#', 'S', 's', ':', '.', ' '];

/// Get the ramp character for a brightness value
///
/// Quantization: `index = floor(brightness / 255 * (len - 1))`, clamped into
/// the ramp. Brightness 0 always yields `'@'`, 255 always yields `' '`.
///
/// # Arguments
/// * `brightness` - Perceived brightness, 0 (dark) to 255 (light)
///
/// # Returns
/// The ramp character for this brightness
pub fn char_for_brightness(brightness: u8) -> char {
    let scale = brightness as f64 / 255.0;
    let index = (scale * (RAMP.len() - 1) as f64) as usize;

    RAMP[index.min(RAMP.len() - 1)]
}
