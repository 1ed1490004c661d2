//! `0x00RRGGBB`, `0xAARRGGBB` and `0xRRGGBBAA` encodings.
//!
//! None of these premultiply, the bytes are taken as they are.

use core::fmt;

use super::Pixel;

impl Pixel {
    /// Packs the color as `0x00RRGGBB`.
    ///
    /// There is no variant with alpha, premultiplied components would lose
    /// a lot of precision once taken out of the pixel.
    pub const fn rgb_hex(&self) -> u32 {
        (self.red as u32) << 16 | (self.green as u32) << 8 | self.blue as u32
    }

    /// Construct an opaque Pixel from `0x00RRGGBB`, the top byte is ignored
    pub const fn from_rgb_hex(rgb: u32) -> Self {
        let [_, r, g, b] = rgb.to_be_bytes();
        Self::from_rgb(r, g, b)
    }

    /// Construct a Pixel from `0xAARRGGBB`
    pub const fn from_argb_hex(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::from_rgba(r, g, b, a)
    }

    /// Construct a Pixel from `0xRRGGBBAA`
    pub const fn from_rgba_hex(rgba: u32) -> Self {
        let [r, g, b, a] = rgba.to_be_bytes();
        Self::from_rgba(r, g, b, a)
    }
}

impl fmt::LowerHex for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.rgb_hex(), f)
    }
}

impl fmt::UpperHex for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.rgb_hex(), f)
    }
}
