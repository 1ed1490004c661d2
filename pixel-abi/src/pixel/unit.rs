use super::Pixel;

/// A color with floating-point components ranging from 0 to 1, not premultiplied
///
/// This is the neutral representation host color types convert through.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct UnitColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl UnitColor {
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

/// Clamps to `0.0..=1.0`, NaN saturates to 0
fn clamp_unit(value: f64) -> f64 {
    value.max(0.0).min(1.0)
}

fn unit_to_byte(value: f64) -> u8 {
    (255.0 * clamp_unit(value)).round() as u8
}

impl Pixel {
    /// Construct a Pixel from **premultiplied** floating-point components.
    ///
    /// Every component is clamped to `0.0..=1.0` before being scaled to a byte,
    /// so out of range values saturate instead of wrapping.
    pub fn from_premultiplied_unit(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        Self::from_rgba(
            unit_to_byte(r),
            unit_to_byte(g),
            unit_to_byte(b),
            unit_to_byte(alpha),
        )
    }

    /// Construct an opaque Pixel from floating-point components
    pub fn from_premultiplied_unit_rgb(r: f64, g: f64, b: f64) -> Self {
        Self::from_premultiplied_unit(r, g, b, 1.0)
    }

    /// Construct a Pixel from floating-point components that are **not** premultiplied.
    ///
    /// All components are clamped to `0.0..=1.0`, then the color components are
    /// multiplied with the alpha, so the resulting pixel never has a color
    /// component greater than its alpha.
    pub fn from_unpremultiplied_unit(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        let alpha = clamp_unit(alpha);
        Self::from_rgba(
            unit_to_byte(alpha * clamp_unit(r)),
            unit_to_byte(alpha * clamp_unit(g)),
            unit_to_byte(alpha * clamp_unit(b)),
            unit_to_byte(alpha),
        )
    }

    /// Recovers the straight color of this pixel.
    ///
    /// A fully transparent pixel has lost its color, it converts to `(0, 0, 0, 0)`.
    pub fn to_unpremultiplied(self) -> UnitColor {
        if self.alpha == 0 {
            return UnitColor::default();
        }

        let alpha = self.alpha as f64;
        UnitColor::new(
            (self.red as f64 / alpha).min(1.0),
            (self.green as f64 / alpha).min(1.0),
            (self.blue as f64 / alpha).min(1.0),
            alpha / 255.0,
        )
    }
}

impl From<UnitColor> for Pixel {
    fn from(color: UnitColor) -> Self {
        Pixel::from_unpremultiplied_unit(color.red, color.green, color.blue, color.alpha)
    }
}

impl From<Pixel> for UnitColor {
    fn from(pixel: Pixel) -> Self {
        pixel.to_unpremultiplied()
    }
}
