//! Pixel - a single packed color cell
//!
//! A `Pixel` is a plain value: it owns one `0xRRGGBBAA` color and nothing
//! else. Mutable access into a [`Raster`](super::Raster) is a short-lived
//! `&mut Pixel` borrow, so a handle can never outlive the grid it points into.
//!
//! Every setter clamps to `[0, 255]`, and the `add_*` / `mul_*` variants
//! read-modify-write through those setters.

use crate::color::{self, ALPHA_OPAQUE, ALPHA_TRANSPARENT};
use std::fmt;

/// One packed color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Pixel {
    value: u32,
}

impl Pixel {
    /// Wrap a packed `0xRRGGBBAA` value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self { value }
    }

    /// Build a pixel from clamped `(a, r, g, b)` channels.
    #[inline]
    pub fn from_argb(a: i32, r: i32, g: i32, b: i32) -> Self {
        Self::new(color::pack(a, r, g, b))
    }

    /// The packed color value.
    #[inline]
    pub fn value(self) -> u32 {
        self.value
    }

    #[inline]
    pub fn a(self) -> u8 {
        color::alpha(self.value)
    }

    #[inline]
    pub fn r(self) -> u8 {
        color::red(self.value)
    }

    #[inline]
    pub fn g(self) -> u8 {
        color::green(self.value)
    }

    #[inline]
    pub fn b(self) -> u8 {
        color::blue(self.value)
    }

    #[inline]
    fn set_channel(&mut self, shift: u32, v: i32) -> &mut Self {
        let byte = color::clamp_channel(v) as u32;
        self.value = (self.value & !(0xff << shift)) | (byte << shift);
        self
    }

    /// Set alpha, clamped to `[0, 255]`.
    pub fn set_a(&mut self, v: i32) -> &mut Self {
        self.set_channel(color::ALPHA_SHIFT, v)
    }

    /// Set red, clamped to `[0, 255]`.
    pub fn set_r(&mut self, v: i32) -> &mut Self {
        self.set_channel(color::RED_SHIFT, v)
    }

    /// Set green, clamped to `[0, 255]`.
    pub fn set_g(&mut self, v: i32) -> &mut Self {
        self.set_channel(color::GREEN_SHIFT, v)
    }

    /// Set blue, clamped to `[0, 255]`.
    pub fn set_b(&mut self, v: i32) -> &mut Self {
        self.set_channel(color::BLUE_SHIFT, v)
    }

    pub fn add_a(&mut self, delta: i32) -> &mut Self {
        self.set_a((self.a() as i32).saturating_add(delta))
    }

    pub fn add_r(&mut self, delta: i32) -> &mut Self {
        self.set_r((self.r() as i32).saturating_add(delta))
    }

    pub fn add_g(&mut self, delta: i32) -> &mut Self {
        self.set_g((self.g() as i32).saturating_add(delta))
    }

    pub fn add_b(&mut self, delta: i32) -> &mut Self {
        self.set_b((self.b() as i32).saturating_add(delta))
    }

    /// Multiply alpha by `factor`; the product is truncated toward zero
    /// before clamping.
    pub fn mul_a(&mut self, factor: f32) -> &mut Self {
        self.set_a(scaled(self.a(), factor))
    }

    pub fn mul_r(&mut self, factor: f32) -> &mut Self {
        self.set_r(scaled(self.r(), factor))
    }

    pub fn mul_g(&mut self, factor: f32) -> &mut Self {
        self.set_g(scaled(self.g(), factor))
    }

    pub fn mul_b(&mut self, factor: f32) -> &mut Self {
        self.set_b(scaled(self.b(), factor))
    }

    /// Overwrite with a packed value.
    pub fn set_value(&mut self, value: u32) -> &mut Self {
        self.value = value;
        self
    }

    pub fn set_argb(&mut self, a: i32, r: i32, g: i32, b: i32) -> &mut Self {
        self.value = color::pack(a, r, g, b);
        self
    }

    /// Overwrite with clamped channels.
    pub fn set_rgba(&mut self, r: i32, g: i32, b: i32, a: i32) -> &mut Self {
        self.value = color::pack(a, r, g, b);
        self
    }

    /// Copy the color of another pixel.
    pub fn set_pixel(&mut self, other: Pixel) -> &mut Self {
        self.value = other.value;
        self
    }

    /// A new pixel with every channel (alpha included) inverted.
    ///
    /// The receiver is not modified.
    #[must_use]
    pub fn reverse(self) -> Pixel {
        Pixel::new(color::invert(self.value))
    }

    /// Set R, G and B to `R + G + B / 3`, keeping alpha.
    ///
    /// Only blue is divided; the sum saturates at 255 through the clamped
    /// setters. This grouping is kept for parity with existing images.
    pub fn average(&mut self) -> &mut Self {
        let v = self.r() as i32 + self.g() as i32 + self.b() as i32 / 3;
        let a = self.a() as i32;
        self.set_rgba(v, v, v, a)
    }

    /// Make fully transparent, keeping the color channels.
    pub fn to_transparent(&mut self) -> &mut Self {
        self.set_a(ALPHA_TRANSPARENT as i32)
    }

    /// Make fully opaque, keeping the color channels.
    pub fn to_opaque(&mut self) -> &mut Self {
        self.set_a(ALPHA_OPAQUE as i32)
    }

    /// `true` if alpha is 0.
    #[inline]
    pub fn is_fully_transparent(self) -> bool {
        self.a() == ALPHA_TRANSPARENT
    }

    /// `true` if alpha is 255.
    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a() == ALPHA_OPAQUE
    }

    /// `true` if alpha is anything but 255.
    #[inline]
    pub fn has_transparency(self) -> bool {
        self.a() != ALPHA_OPAQUE
    }
}

#[inline]
fn scaled(channel: u8, factor: f32) -> i32 {
    (channel as f32 * factor) as i32
}

impl From<u32> for Pixel {
    fn from(value: u32) -> Self {
        Pixel::new(value)
    }
}

impl From<Pixel> for u32 {
    fn from(pixel: Pixel) -> Self {
        pixel.value
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.value)
    }
}
