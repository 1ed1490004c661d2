//! A software rendering surface over premultiplied RGBA pixel buffers.
//!
//! A [`Surface`] borrows a buffer it doesn't own and draws into it in place,
//! a [`SnapshotImage`] is an immutable copy of a buffer at some point in time.

mod canvas;
mod error;
mod image;
mod surface;

pub use canvas::DrawingCanvas;
pub use error::{ImageError, SurfaceError};
pub use image::SnapshotImage;
pub use pixel_abi;
pub use pixel_abi::{AlphaMode, BufferLayout, Pixel};
pub use surface::Surface;
