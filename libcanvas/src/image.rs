use std::{fmt, sync::Arc};

use pixel_abi::{AlphaMode, BufferLayout, Pixel};
use zerocopy::{FromBytes, IntoBytes};

use crate::ImageError;

/// An immutable image, a copy of a pixel buffer at some point in time
///
/// Cloning is cheap, clones share the same bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct SnapshotImage {
    layout: BufferLayout,
    alpha_mode: AlphaMode,
    bytes: Arc<[u8]>,
}

impl SnapshotImage {
    /// Wraps `bytes` laid out as described by `layout`
    pub fn from_bytes(
        layout: BufferLayout,
        alpha_mode: AlphaMode,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Result<Self, ImageError> {
        let bytes = bytes.into();
        if bytes.len() != layout.byte_len() {
            return Err(ImageError::ByteLength {
                expected: layout.byte_len(),
                len: bytes.len(),
            });
        }

        Ok(Self {
            layout,
            alpha_mode,
            bytes,
        })
    }

    /// Copies premultiplied `pixels` into a new image
    pub fn from_pixels(width: usize, height: usize, pixels: &[Pixel]) -> Result<Self, ImageError> {
        let layout = BufferLayout::try_packed(width, height)?;
        Self::from_bytes(layout, AlphaMode::Premultiplied, pixels.as_bytes())
    }

    pub const fn width(&self) -> usize {
        self.layout.width()
    }

    pub const fn height(&self) -> usize {
        self.layout.height()
    }

    pub const fn layout(&self) -> BufferLayout {
        self.layout
    }

    pub const fn alpha_mode(&self) -> AlphaMode {
        self.alpha_mode
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the pixels of row `y` exactly as stored, see [`SnapshotImage::alpha_mode`]
    pub fn row(&self, y: usize) -> Option<&[Pixel]> {
        if y >= self.height() {
            return None;
        }

        let bytes = &self.bytes[self.layout.row_range(y)];
        <[Pixel]>::ref_from_bytes(bytes).ok()
    }

    /// Returns the pixel at (x, y) exactly as stored
    pub fn pixel(&self, x: usize, y: usize) -> Option<Pixel> {
        self.row(y)?.get(x).copied()
    }

    /// Returns the premultiplied pixel at (x, y), converting from the image's alpha mode
    pub fn premultiplied_pixel(&self, x: usize, y: usize) -> Option<Pixel> {
        self.pixel(x, y).map(|p| self.alpha_mode.premultiply(p))
    }
}

impl fmt::Debug for SnapshotImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapshotImage")
            .field("layout", &self.layout)
            .field("alpha_mode", &self.alpha_mode)
            .finish_non_exhaustive()
    }
}
