use thiserror::Error;

/// An Error while creating a [`crate::Bitmap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BitmapError {
    #[error("A {width}x{height} bitmap can't be made out of {len} pixels")]
    SizeMismatch {
        width: usize,
        height: usize,
        len: usize,
    },
    #[error("A {width}x{height} bitmap doesn't fit in memory")]
    DimensionsOverflow { width: usize, height: usize },
}

/// Returned when parsing an unknown [`crate::logging::LogLevel`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown log level {0:?}, expected one of off, info, debug")]
pub struct ParseLogLevelError(pub String);
