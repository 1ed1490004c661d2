//! Defines the layout of a single pixel and of the pixel buffers exchanged
//! with a rendering surface.

/// The fixed buffer format: 8 bits per component, 4 bytes per pixel, alpha last
pub mod format;
/// A single premultiplied RGBA pixel and its conversions
pub mod pixel;

pub use format::{AlphaMode, BufferLayout, LayoutError};
pub use pixel::{Pixel, UnitColor};
