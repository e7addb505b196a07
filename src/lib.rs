//! This crate computes a signed
//! distance field, given a binary image,
//! and quantizes it to one byte per pixel.
//! The algorithm used is called "dead reckoning",
//! as described in `The "dead reckoning" signed distance transform`
//! by George J. Grevara (2004).
//!
//! ```
//! use signed_distance_field::prelude::*;
//!
//! let mask = BinaryMask::from_fn(5, 5, |x, y| x == 2 && y == 2).unwrap();
//! let field = compute_signed_byte_field(&mask, false).unwrap();
//!
//! assert_eq!(field.get(2, 2), 128);
//! assert_eq!(field.get(1, 2), 127);
//! ```

pub mod binary_image;
pub mod boundary;
pub mod distance_field;
pub mod error;
pub mod raster;

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::{
        compute_signed_byte_field,
        compute_distance_field,
        compute_f16_distance_field,
        compute_f32_distance_field
    };

    pub use crate::binary_image::{
        BinaryImage, BinaryByteImage, BinaryMask, Inverted
    };

    pub use crate::boundary::{
        Boundary, classify, is_immediate_exterior, is_immediate_interior
    };

    pub use crate::distance_field::{
        DeadReckoning, DistanceField, DistanceStorage, EdgeColumns,
        ByteDistanceStorage, F16DistanceStorage, F32DistanceStorage
    };

    pub use crate::raster::RasterGrid;
    pub use crate::error::{Error, Result};

    #[cfg(feature = "piston_image")]
    pub use crate::binary_image::piston_image as binary_piston_image;
}


use prelude::*;

/// Compute the byte-quantized signed distance field of the specified binary image.
/// The outline is at 128, inside pixels are brighter, outside pixels are darker.
/// If `symmetric`, the outside pixels directly at the outline are also at 128.
pub fn compute_signed_byte_field(image: &impl BinaryImage, symmetric: bool) -> Result<RasterGrid<u8>> {
    DeadReckoning::new().symmetric(symmetric).build::<F32DistanceStorage>(image)
}

/// Compute the distance field with the specified distance storage of the specified binary image.
pub fn compute_distance_field<D: DistanceStorage>(image: &impl BinaryImage) -> Result<DistanceField<D>> {
    DeadReckoning::new().symmetric(true).distances(image)
}

/// Compute the distance field with an `f16` distance storage of the specified binary image.
pub fn compute_f16_distance_field(image: &impl BinaryImage) -> Result<DistanceField<F16DistanceStorage>> {
    compute_distance_field(image)
}

/// Compute the distance field with an `f32` distance storage of the specified binary image.
pub fn compute_f32_distance_field(image: &impl BinaryImage) -> Result<DistanceField<F32DistanceStorage>> {
    compute_distance_field(image)
}
