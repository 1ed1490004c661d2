use core::ops::Range;

use thiserror::Error;

use crate::Pixel;

/// How the alpha byte of each pixel in a buffer is to be interpreted
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlphaMode {
    /// RGB is already multiplied with the alpha, the native format
    #[default]
    Premultiplied,
    /// RGB is independent of the alpha and has to be premultiplied when drawn
    Straight,
    /// The alpha byte is padding, every pixel is opaque
    Ignored,
}

impl AlphaMode {
    /// Converts a pixel read from a buffer in this mode to a premultiplied pixel
    pub const fn premultiply(self, pixel: Pixel) -> Pixel {
        let (r, g, b, a) = (pixel.red(), pixel.green(), pixel.blue(), pixel.alpha());
        match self {
            AlphaMode::Premultiplied => pixel,
            AlphaMode::Straight => Pixel::premultiply_straight(r, g, b, a),
            AlphaMode::Ignored => Pixel::from_rgb(r, g, b),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("Row stride of {bytes_per_row} bytes can't hold {width} pixels")]
    StrideTooSmall { width: usize, bytes_per_row: usize },
    #[error("A {width}x{height} buffer doesn't fit in memory")]
    Overflow { width: usize, height: usize },
}

/// Describes a pixel buffer
///
/// Components are always 8 bits and pixels always 4 bytes in the order
/// red, green, blue, alpha. Rows follow each other from top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferLayout {
    width: usize,
    height: usize,
    bytes_per_row: usize,
}

impl BufferLayout {
    pub const BITS_PER_COMPONENT: usize = 8;
    pub const BYTES_PER_PIXEL: usize = size_of::<Pixel>();

    /// A layout without any padding between rows.
    ///
    /// # Panics
    /// If the buffer size overflows a `usize`.
    pub const fn packed(width: usize, height: usize) -> Self {
        match Self::try_packed(width, height) {
            Ok(layout) => layout,
            Err(_) => panic!("pixel buffer size overflows usize"),
        }
    }

    /// Like [`BufferLayout::packed`] but fails instead of panicking on overflow
    pub const fn try_packed(width: usize, height: usize) -> Result<Self, LayoutError> {
        match width.checked_mul(Self::BYTES_PER_PIXEL) {
            Some(bytes_per_row) => Self::with_stride(width, height, bytes_per_row),
            None => Err(LayoutError::Overflow { width, height }),
        }
    }

    /// A layout with `bytes_per_row` bytes between the start of two rows
    pub const fn with_stride(
        width: usize,
        height: usize,
        bytes_per_row: usize,
    ) -> Result<Self, LayoutError> {
        let Some(min_stride) = width.checked_mul(Self::BYTES_PER_PIXEL) else {
            return Err(LayoutError::Overflow { width, height });
        };

        if bytes_per_row < min_stride {
            return Err(LayoutError::StrideTooSmall {
                width,
                bytes_per_row,
            });
        }

        if bytes_per_row.checked_mul(height).is_none() {
            return Err(LayoutError::Overflow { width, height });
        }

        Ok(Self {
            width,
            height,
            bytes_per_row,
        })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn bytes_per_row(&self) -> usize {
        self.bytes_per_row
    }

    /// Whether or not rows follow each other without padding
    pub const fn is_packed(&self) -> bool {
        self.bytes_per_row == self.width * Self::BYTES_PER_PIXEL
    }

    /// The amount of bytes a buffer with this layout takes
    pub const fn byte_len(&self) -> usize {
        self.bytes_per_row * self.height
    }

    /// The bytes holding the pixels of row `y`, padding excluded
    pub const fn row_range(&self, y: usize) -> Range<usize> {
        let start = y * self.bytes_per_row;
        start..start + self.width * Self::BYTES_PER_PIXEL
    }
}
