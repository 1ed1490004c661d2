//! An in-memory RGBA bitmap with premultiplied alpha.
//!
//! A [`Bitmap`] owns a row-major grid of [`Pixel`]s. Drawing is done by
//! borrowing the buffer as a [`Surface`] through [`Bitmap::with_surface`],
//! and [`SnapshotImage`]s carry its contents to and from other surfaces.

mod bitmap;
mod error;
mod interop;
pub mod logging;

pub use bitmap::Bitmap;
pub use error::{BitmapError, ParseLogLevelError};
pub use libcanvas::{DrawingCanvas, ImageError, SnapshotImage, Surface, SurfaceError};
pub use pixel_abi::{AlphaMode, BufferLayout, LayoutError, Pixel, UnitColor};

pub use libcanvas;
pub use pixel_abi;
