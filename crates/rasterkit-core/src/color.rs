//! Packed 32-bit color values
//!
//! # Pixel format
//!
//! Colors are stored as `0xRRGGBBAA` (red in the MSB, alpha in the LSB).
//! Every channel is an 8-bit value; functions taking wider integers clamp
//! each channel to `[0, 255]` before packing, so [`unpack`] always inverts
//! [`pack`] exactly for in-range input.

use crate::error::{Error, Result};

/// Shift amounts for extracting color channels
pub const RED_SHIFT: u32 = 24;
pub const GREEN_SHIFT: u32 = 16;
pub const BLUE_SHIFT: u32 = 8;
pub const ALPHA_SHIFT: u32 = 0;

/// Alpha of a fully opaque color
pub const ALPHA_OPAQUE: u8 = 255;
/// Alpha of a fully transparent color
pub const ALPHA_TRANSPARENT: u8 = 0;

/// Opaque white
pub const WHITE: u32 = 0xFFFF_FFFF;
/// Opaque black
pub const BLACK: u32 = 0x0000_00FF;
/// Fully transparent black; the content of a freshly allocated image
pub const CLEAR_BLACK: u32 = 0x0000_0000;

/// Clamp an integer channel value into `[0, 255]`.
#[inline]
pub fn clamp_channel(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

/// Pack alpha, red, green and blue into one color value.
///
/// Each channel is clamped to `[0, 255]` first.
#[inline]
pub fn pack(a: i32, r: i32, g: i32, b: i32) -> u32 {
    compose_rgba(
        clamp_channel(r),
        clamp_channel(g),
        clamp_channel(b),
        clamp_channel(a),
    )
}

/// Unpack a color value into `(a, r, g, b)`.
#[inline]
pub fn unpack(value: u32) -> (u8, u8, u8, u8) {
    (alpha(value), red(value), green(value), blue(value))
}

/// Compose a 32-bit RGBA color.
#[inline]
pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((r as u32) << RED_SHIFT)
        | ((g as u32) << GREEN_SHIFT)
        | ((b as u32) << BLUE_SHIFT)
        | ((a as u32) << ALPHA_SHIFT)
}

/// Compose an opaque 32-bit color.
#[inline]
pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
    compose_rgba(r, g, b, ALPHA_OPAQUE)
}

/// Extract the red component.
#[inline]
pub fn red(value: u32) -> u8 {
    ((value >> RED_SHIFT) & 0xff) as u8
}

/// Extract the green component.
#[inline]
pub fn green(value: u32) -> u8 {
    ((value >> GREEN_SHIFT) & 0xff) as u8
}

/// Extract the blue component.
#[inline]
pub fn blue(value: u32) -> u8 {
    ((value >> BLUE_SHIFT) & 0xff) as u8
}

/// Extract the alpha component.
#[inline]
pub fn alpha(value: u32) -> u8 {
    ((value >> ALPHA_SHIFT) & 0xff) as u8
}

/// Extract `(r, g, b, a)` in memory order.
#[inline]
pub fn extract_rgba(value: u32) -> (u8, u8, u8, u8) {
    (red(value), green(value), blue(value), alpha(value))
}

/// Replace the alpha channel of a color.
#[inline]
pub fn with_alpha(value: u32, a: u8) -> u32 {
    (value & !(0xff << ALPHA_SHIFT)) | ((a as u32) << ALPHA_SHIFT)
}

/// Invert every channel, alpha included (`255 - c` for each of the four).
///
/// Per-byte complement against 255 is the bitwise complement of the whole
/// word, so the operation is its own inverse.
#[inline]
pub fn invert(value: u32) -> u32 {
    !value
}

/// Composite `src` over `dst` (straight alpha, source-over).
pub fn blend_over(src: u32, dst: u32) -> u32 {
    let sa = alpha(src) as f32 / 255.0;
    if sa >= 1.0 {
        return src;
    }
    let da = alpha(dst) as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return CLEAR_BLACK;
    }
    let mix = |s: u8, d: u8| -> i32 {
        ((s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a).round() as i32
    };
    pack(
        (out_a * 255.0).round() as i32,
        mix(red(src), red(dst)),
        mix(green(src), green(dst)),
        mix(blue(src), blue(dst)),
    )
}

/// Build a color from 3 or 4 decimal strings: `r, g, b[, a]`.
///
/// With three parts the color is opaque. Values are clamped to `[0, 255]`.
///
/// # Errors
///
/// Returns [`Error::InvalidColorFormat`] if the number of parts is not 3 or
/// 4, or if a part is not a decimal integer.
///
/// # Examples
///
/// ```
/// use rasterkit_core::color::{self, parse_color};
///
/// assert_eq!(parse_color(&["255", "0", "0"]).unwrap(), color::compose_rgb(255, 0, 0));
/// assert_eq!(parse_color(&["0", "0", "0", "0"]).unwrap(), color::CLEAR_BLACK);
/// assert!(parse_color(&["1", "2"]).is_err());
/// ```
pub fn parse_color<S: AsRef<str>>(parts: &[S]) -> Result<u32> {
    if parts.len() != 3 && parts.len() != 4 {
        return Err(Error::InvalidColorFormat(format!(
            "expected 3 or 4 components, got {}",
            parts.len()
        )));
    }

    let mut channels = [ALPHA_OPAQUE as i32; 4];
    for (slot, part) in channels.iter_mut().zip(parts) {
        let text = part.as_ref().trim();
        *slot = text.parse::<i32>().map_err(|_| {
            Error::InvalidColorFormat(format!("component {text:?} is not a decimal integer"))
        })?;
    }

    let [r, g, b, a] = channels;
    Ok(pack(a, r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_unpack_roundtrip() {
        for &(a, r, g, b) in &[
            (0u8, 0u8, 0u8, 0u8),
            (255, 255, 255, 255),
            (128, 1, 254, 77),
            (17, 200, 3, 99),
        ] {
            let v = pack(a as i32, r as i32, g as i32, b as i32);
            assert_eq!(unpack(v), (a, r, g, b));
        }
    }

    #[test]
    fn test_pack_clamps() {
        let v = pack(300, -5, 256, 12);
        assert_eq!(unpack(v), (255, 0, 255, 12));
    }

    #[test]
    fn test_layout_is_rgba() {
        assert_eq!(pack(0x44, 0x11, 0x22, 0x33), 0x1122_3344);
        assert_eq!(compose_rgb(1, 2, 3), 0x0102_03FF);
    }

    #[test]
    fn test_invert_all_channels() {
        let v = compose_rgba(10, 20, 30, 255);
        let inv = invert(v);
        assert_eq!(extract_rgba(inv), (245, 235, 225, 0));
        assert_eq!(invert(inv), v);
    }

    #[test]
    fn test_with_alpha() {
        let v = with_alpha(WHITE, 0x80);
        assert_eq!(extract_rgba(v), (255, 255, 255, 0x80));
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color(&["1", "2", "3"]).unwrap(), compose_rgba(1, 2, 3, 255));
        assert_eq!(
            parse_color(&["1", "2", "3", "4"]).unwrap(),
            compose_rgba(1, 2, 3, 4)
        );
        assert_eq!(
            parse_color(&[" 300", "-1", "3"]).unwrap(),
            compose_rgba(255, 0, 3, 255)
        );
    }

    #[test]
    fn test_parse_color_errors() {
        let empty: [&str; 0] = [];
        assert!(matches!(parse_color(&empty), Err(Error::InvalidColorFormat(_))));
        assert!(matches!(
            parse_color(&["1", "2"]),
            Err(Error::InvalidColorFormat(_))
        ));
        assert!(matches!(
            parse_color(&["1", "2", "3", "4", "5"]),
            Err(Error::InvalidColorFormat(_))
        ));
        assert!(matches!(
            parse_color(&["1", "x", "3"]),
            Err(Error::InvalidColorFormat(_))
        ));
    }

    #[test]
    fn test_blend_over() {
        assert_eq!(blend_over(BLACK, WHITE), BLACK);
        assert_eq!(blend_over(CLEAR_BLACK, WHITE), WHITE);
        let src = compose_rgba(200, 100, 50, 128);
        assert_eq!(blend_over(src, CLEAR_BLACK), src);
    }
}
