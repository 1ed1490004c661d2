use zerocopy_derive::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

/// Packed hex integer encodings
pub mod hex;
mod unit;

pub use unit::UnitColor;

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    FromBytes,
    IntoBytes,
    Immutable,
    KnownLayout,
    Unaligned,
)]
/// Represents a single pixel
///
/// The color components are premultiplied with the alpha, so none of them is
/// ever greater than [`Pixel::alpha`] as long as the pixel was built through
/// one of the unit constructors. The byte constructors trust the caller.
#[repr(C)]
pub struct Pixel {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

const _: () = assert!(size_of::<Pixel>() == 4);

impl Pixel {
    /// Fully transparent
    pub const CLEAR: Pixel = Pixel::from_rgba(0, 0, 0, 0);

    pub const BLACK: Pixel = Pixel::from_rgb(0, 0, 0);
    pub const WHITE: Pixel = Pixel::from_rgb(0xFF, 0xFF, 0xFF);

    pub const RED: Pixel = Pixel::from_rgb(0xFF, 0, 0);
    pub const YELLOW: Pixel = Pixel::from_rgb(0xFF, 0xFF, 0);
    pub const GREEN: Pixel = Pixel::from_rgb(0, 0xFF, 0);
    pub const CYAN: Pixel = Pixel::from_rgb(0, 0xFF, 0xFF);
    pub const BLUE: Pixel = Pixel::from_rgb(0, 0, 0xFF);
    pub const MAGENTA: Pixel = Pixel::from_rgb(0xFF, 0, 0xFF);

    /// Construct a Pixel from already premultiplied RGBA components
    pub const fn from_rgba(r: u8, g: u8, b: u8, alpha: u8) -> Self {
        Self {
            red: r,
            green: g,
            blue: b,
            alpha,
        }
    }

    /// Construct an opaque Pixel from RGB components
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(r, g, b, 0xFF)
    }

    /// Construct a Pixel from straight (not premultiplied) RGBA components,
    /// multiplying each color component by `alpha / 255` rounded to the nearest byte.
    pub const fn premultiply_straight(r: u8, g: u8, b: u8, alpha: u8) -> Self {
        const fn mul(c: u8, alpha: u8) -> u8 {
            // c * alpha / 255 never lands exactly on .5, so this rounds to nearest
            ((c as u16 * alpha as u16 + 127) / 255) as u8
        }

        Self::from_rgba(mul(r, alpha), mul(g, alpha), mul(b, alpha), alpha)
    }

    pub const fn red(&self) -> u8 {
        self.red
    }

    pub const fn green(&self) -> u8 {
        self.green
    }

    pub const fn blue(&self) -> u8 {
        self.blue
    }

    pub const fn alpha(&self) -> u8 {
        self.alpha
    }

    pub const fn is_opaque(&self) -> bool {
        self.alpha == 0xFF
    }

    pub const fn is_transparent(&self) -> bool {
        self.alpha == 0
    }

    /// Returns the stored (premultiplied) components scaled down to `0.0..=1.0`
    pub fn components(self) -> UnitColor {
        UnitColor::new(
            self.red as f64 / 255.0,
            self.green as f64 / 255.0,
            self.blue as f64 / 255.0,
            self.alpha as f64 / 255.0,
        )
    }

    /// Composites `self` over `dst` (source-over, premultiplied)
    pub const fn over(self, dst: Pixel) -> Pixel {
        const fn blend(src: u8, dst: u8, inv_alpha: u16) -> u8 {
            let dst = (dst as u16 * inv_alpha + 127) / 255;
            let sum = src as u16 + dst;
            if sum > 0xFF { 0xFF } else { sum as u8 }
        }

        let inv_alpha = 0xFF - self.alpha as u16;
        Pixel {
            red: blend(self.red, dst.red, inv_alpha),
            green: blend(self.green, dst.green, inv_alpha),
            blue: blend(self.blue, dst.blue, inv_alpha),
            alpha: blend(self.alpha, dst.alpha, inv_alpha),
        }
    }
}
