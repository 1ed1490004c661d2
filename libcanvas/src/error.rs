use pixel_abi::LayoutError;
use thiserror::Error;

/// An Error while creating a [`crate::Surface`] over a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("A {width}x{height} surface can't draw into {len} pixels")]
    BufferSize {
        width: usize,
        height: usize,
        len: usize,
    },
    #[error("Expected a buffer of {expected} bytes, got {len}")]
    ByteLength { expected: usize, len: usize },
    #[error("Surfaces can only draw into buffers without row padding")]
    NotPacked,
}

/// An Error while creating a [`crate::SnapshotImage`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ImageError {
    #[error("Expected an image of {expected} bytes, got {len}")]
    ByteLength { expected: usize, len: usize },
    #[error(transparent)]
    Layout(#[from] LayoutError),
}
