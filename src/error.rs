use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("Image dimensions must be positive, but are {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Buffer holds {received} pixels, but {expected} were expected")]
    BufferSizeMismatch { expected: usize, received: usize },

    #[error("Mask has dimensions {received:?}, but the distance field has {expected:?}")]
    DimensionMismatch { expected: (u32, u32), received: (u32, u32) },

    #[error("Pixel ({x}, {y}) is outside of the {width}x{height} grid")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },
}

/// Returns the pixel count of a `width` by `height` image,
/// or an error if either side is zero or the count overflows.
pub(crate) fn pixel_count(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }

    (width as usize)
        .checked_mul(height as usize)
        .ok_or(Error::InvalidDimensions { width, height })
}
