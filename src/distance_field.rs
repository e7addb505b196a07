
use crate::binary_image::BinaryImage;
use crate::boundary::{is_immediate_exterior, is_immediate_interior};
use crate::error::{pixel_count, Error, Result};
use crate::raster::RasterGrid;


/// The unsigned distance of every pixel to its nearest seed pixel,
/// along with the coordinates of that seed.
#[derive(Clone, PartialEq, Debug)]
pub struct DistanceField<D: DistanceStorage> {
    pub width: u32,
    pub height: u32,
    pub distances: D,

    /// `None` until the pixel has found a seed.
    pub nearest_points: Vec<Option<(u32, u32)>>,
}

/// Needs less storage with sufficient precision, but takes about
/// twice as long because of conversions between f16 and f32.
pub type F16DistanceStorage = Vec<half::f16>;

/// Needs more storage with high precision, but takes about
/// half as long because no conversions between f16 and f32 must be made.
pub type F32DistanceStorage = Vec<f32>;

/// Truncates every distance to a whole number in `[0, 255]`,
/// with 255 doubling as infinity. Reproduces the output
/// of transforms which keep their intermediate distances in an 8-bit channel.
pub type ByteDistanceStorage = Vec<u8>;

pub trait DistanceStorage {
    /// Create storage for `length` pixels, all at the largest representable distance.
    fn new(length: usize) -> Self;

    fn get(&self, index: usize) -> f32;

    fn set(&mut self, index: usize, distance: f32);
}

/// Which columns the two propagation passes update.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EdgeColumns {
    /// Both passes skip the leftmost and the rightmost column,
    /// which keep the distance they were seeded with.
    Reference,

    /// Both passes update every column.
    Full,
}

impl Default for EdgeColumns {
    fn default() -> Self {
        EdgeColumns::Full
    }
}

/// Options of the dead reckoning transform.
///
/// ```
/// use signed_distance_field::prelude::*;
///
/// let mask = BinaryMask::from_fn(16, 16, |x, y| x > 4 && y > 4).unwrap();
/// let field = DeadReckoning::new().symmetric(true).build::<F32DistanceStorage>(&mask).unwrap();
/// assert_eq!(field.get(5, 5), 128);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct DeadReckoning {
    symmetric: bool,
    columns: EdgeColumns,
}

impl DeadReckoning {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also seed the outside pixels directly at the outline with a distance of zero.
    pub fn symmetric(self, symmetric: bool) -> Self {
        DeadReckoning { symmetric, ..self }
    }

    pub fn edge_columns(self, columns: EdgeColumns) -> Self {
        DeadReckoning { columns, ..self }
    }

    pub fn is_symmetric(&self) -> bool {
        self.symmetric
    }

    pub fn columns(&self) -> EdgeColumns {
        self.columns
    }

    /// Compute the signed distance field of the image, quantized to one byte per pixel.
    /// All intermediate distances are kept in `D`.
    pub fn build<D: DistanceStorage>(&self, binary_image: &impl BinaryImage) -> Result<RasterGrid<u8>> {
        self.distances::<D>(binary_image)?.to_signed_bytes(binary_image)
    }

    /// Approximates the unsigned distance of every pixel to the outline of the image.
    /// The algorithm used is based on the paper `The "dead reckoning" signed distance transform`
    /// by George J. Grevara, 2004.
    pub fn distances<D: DistanceStorage>(&self, binary_image: &impl BinaryImage) -> Result<DistanceField<D>> {
        let width = binary_image.width();
        let height = binary_image.height();
        let length = pixel_count(width, height)?;

        let mut distance_field = DistanceField {
            width, height,
            distances: D::new(length),
            nearest_points: vec![None; length],
        };

        // for every pixel directly at an edge, set its distance to zero
        let mut seeds = 0_usize;
        for y in 0..height {
            for x in 0..width {
                if is_immediate_interior(binary_image, x, y)
                    || (self.symmetric && is_immediate_exterior(binary_image, x, y))
                {
                    distance_field.set_nearest_and_distance(x, y, x, y, 0.0);
                    seeds += 1;
                }
            }
        }

        log::debug!(
            "dead reckoning on {}x{} pixels ({}, symmetric: {}, columns: {:?}), {} seeds",
            width, height, std::any::type_name::<D>(), self.symmetric, self.columns, seeds
        );

        if seeds == 0 {
            log::warn!("binary image has no outline, all distances stay infinite");
        }

        let (first_column, last_column) = match self.columns {
            EdgeColumns::Full => (0, width - 1),
            EdgeColumns::Reference if width > 2 => (1, width - 2),
            EdgeColumns::Reference => {
                log::trace!("image is too narrow to be propagated");
                return Ok(distance_field);
            }
        };

        // perform forwards iteration
        for y in 0..height {
            for x in first_column ..= last_column {
                distance_field.update_distance(x, y, -1, -1);
                distance_field.update_distance(x, y,  0, -1);
                distance_field.update_distance(x, y,  1, -1);
                distance_field.update_distance(x, y, -1,  0);
            }
        }

        log::trace!("forward pass done");

        // perform backwards iteration, mirroring the forward neighbourhood
        for y in (0..height).rev() {
            for x in (first_column ..= last_column).rev() {
                distance_field.update_distance(x, y,  1,  1);
                distance_field.update_distance(x, y,  0,  1);
                distance_field.update_distance(x, y, -1,  1);
                distance_field.update_distance(x, y,  1,  0);
            }
        }

        log::trace!("backward pass done");
        Ok(distance_field)
    }
}


impl<D> DistanceField<D> where D: DistanceStorage {

    /// Adopts the nearest point of the neighbour if the neighbour
    /// promises a shorter distance than the current one.
    /// The new distance is measured to the adopted point directly
    /// instead of summing up the steps between the pixels.
    #[inline(always)]
    fn update_distance(&mut self, x: u32, y: u32, neighbour_x: i64, neighbour_y: i64) {
        // this should be const per function call, as `neighbour` is const per function call
        let distance_to_neighbour = length(neighbour_x, neighbour_y);

        let neighbour_x = x as i64 + neighbour_x;
        let neighbour_y = y as i64 + neighbour_y;

        // if neighbour exists, update ourselves according to the neighbour
        if check_coordinates(neighbour_x, neighbour_y, self.width, self.height) {
            let neighbour_x = neighbour_x as u32;
            let neighbour_y = neighbour_y as u32;
            let neighbour_distance = self.get_distance(neighbour_x, neighbour_y);

            if neighbour_distance + distance_to_neighbour < self.get_distance(x, y) {
                if let Some((target_x, target_y)) = self.get_nearest_point(neighbour_x, neighbour_y) {
                    let distance = distance(x, y, target_x, target_y);
                    self.set_nearest_and_distance(x, y, target_x, target_y, distance);
                }
            }
        }
    }

    /// The unsigned distance to the nearest seed,
    /// or the largest representable distance if there is none.
    #[inline(always)]
    pub fn get_distance(&self, x: u32, y: u32) -> f32 {
        self.distances.get(self.flatten_index(x, y))
    }

    /// The distance, positive inside the shape and negative outside of it.
    pub fn get_signed_distance(&self, binary_image: &impl BinaryImage, x: u32, y: u32) -> f32 {
        let distance = self.get_distance(x, y);
        if binary_image.is_inside(x, y) { distance } else { -distance }
    }

    #[inline(always)]
    pub fn get_nearest_point(&self, x: u32, y: u32) -> Option<(u32, u32)> {
        self.nearest_points[self.flatten_index(x, y)]
    }

    #[inline(always)]
    fn set_nearest_and_distance(&mut self, x: u32, y: u32, target_x: u32, target_y: u32, distance: f32) {
        let index = self.flatten_index(x, y);
        self.distances.set(index, distance);
        self.nearest_points[index] = Some((target_x, target_y));
    }

    #[inline]
    pub fn flatten_index(&self, x: u32, y: u32) -> usize {
        self.width as usize * y as usize + x as usize
    }

    /// Map the distances into bytes, with the outline at 128.
    /// Inside pixels count up to 255, outside pixels count down to 0.
    /// The image must be the one this field was computed from.
    pub fn to_signed_bytes(&self, binary_image: &impl BinaryImage) -> Result<RasterGrid<u8>> {
        let image_size = (binary_image.width(), binary_image.height());
        if image_size != (self.width, self.height) {
            return Err(Error::DimensionMismatch {
                expected: (self.width, self.height),
                received: image_size,
            });
        }

        RasterGrid::from_fn(self.width, self.height, |x, y| {
            quantize(self.get_distance(x, y), binary_image.is_inside(x, y))
        })
    }
}

/// Truncates the magnitude, saturating inside at 255 and outside at 0.
#[inline]
fn quantize(distance: f32, inside: bool) -> u8 {
    // also maps NaN to zero
    let magnitude = distance.max(0.0);

    if inside {
        128 + magnitude.min(127.0) as u8
    }
    else {
        128 - magnitude.min(128.0) as u8
    }
}

#[inline]
fn length(x: i64, y: i64) -> f32 {
    let sqr_distance = x * x + y * y;
    (sqr_distance as f32).sqrt()
}

#[inline]
fn distance(x: u32, y: u32, target_x: u32, target_y: u32) -> f32 {
    length(x as i64 - target_x as i64, y as i64 - target_y as i64)
}

#[inline]
fn check_coordinates(x: i64, y: i64, width: u32, height: u32) -> bool {
    x >= 0 && y >= 0 && x < width as i64 && y < height as i64
}


impl DistanceStorage for F16DistanceStorage {
    fn new(length: usize) -> Self {
        vec![half::f16::INFINITY; length]
    }

    #[inline]
    fn get(&self, index: usize) -> f32 {
        self[index].to_f32()
    }

    #[inline]
    fn set(&mut self, index: usize, distance: f32) {
        self[index] = half::f16::from_f32(distance)
    }
}

impl DistanceStorage for F32DistanceStorage {
    fn new(length: usize) -> Self {
        vec![f32::INFINITY; length]
    }

    #[inline]
    fn get(&self, index: usize) -> f32 {
        self[index]
    }

    #[inline]
    fn set(&mut self, index: usize, distance: f32) {
        self[index] = distance
    }
}

impl DistanceStorage for ByteDistanceStorage {
    fn new(length: usize) -> Self {
        vec![u8::MAX; length]
    }

    #[inline]
    fn get(&self, index: usize) -> f32 {
        self[index] as f32
    }

    #[inline]
    fn set(&mut self, index: usize, distance: f32) {
        // float to int casts truncate and saturate
        self[index] = distance as u8
    }
}
