
use crate::error::{pixel_count, Error, Result};

/// A fixed-size, row-major grid with one value per pixel.
/// `RasterGrid<bool>` serves as a binary mask,
/// `RasterGrid<u8>` holds the quantized signed distance field.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RasterGrid<T> {
    width: u32,
    height: u32,
    pixels: Vec<T>,
}

impl<T> RasterGrid<T> {

    /// Wrap a row-major vector with exactly `width * height` pixels.
    pub fn from_vec(width: u32, height: u32, pixels: Vec<T>) -> Result<Self> {
        let expected = pixel_count(width, height)?;

        if pixels.len() != expected {
            return Err(Error::BufferSizeMismatch { expected, received: pixels.len() });
        }

        Ok(RasterGrid { width, height, pixels })
    }

    /// Create a grid by evaluating the function for every pixel.
    pub fn from_fn(width: u32, height: u32, mut pixel: impl FnMut(u32, u32) -> T) -> Result<Self> {
        let mut pixels = Vec::with_capacity(pixel_count(width, height)?);

        for y in 0..height {
            for x in 0..width {
                pixels.push(pixel(x, y));
            }
        }

        Ok(RasterGrid { width, height, pixels })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The row-major pixels of this grid.
    pub fn as_slice(&self) -> &[T] {
        &self.pixels
    }

    pub fn into_vec(self) -> Vec<T> {
        self.pixels
    }

    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Replace the pixel at the coordinates.
    ///
    /// # Panics
    /// Panics if the coordinates are outside of the grid.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: T) {
        let index = self.checked_index(x, y);
        self.pixels[index] = value;
    }

    pub fn try_set(&mut self, x: u32, y: u32, value: T) -> Result<()> {
        let index = self.try_index(x, y)?;
        self.pixels[index] = value;
        Ok(())
    }

    #[inline]
    pub fn flatten_index(&self, x: u32, y: u32) -> usize {
        self.width as usize * y as usize + x as usize
    }

    #[inline]
    fn try_index(&self, x: u32, y: u32) -> Result<usize> {
        if self.contains(x, y) {
            Ok(self.flatten_index(x, y))
        }
        else {
            Err(Error::OutOfBounds { x, y, width: self.width, height: self.height })
        }
    }

    #[inline]
    fn checked_index(&self, x: u32, y: u32) -> usize {
        assert!(
            self.contains(x, y),
            "pixel ({}, {}) is outside of the {}x{} grid", x, y, self.width, self.height
        );

        self.flatten_index(x, y)
    }
}

impl<T: Clone> RasterGrid<T> {
    /// Create a grid with every pixel set to the value.
    pub fn new(width: u32, height: u32, value: T) -> Result<Self> {
        Ok(RasterGrid { width, height, pixels: vec![value; pixel_count(width, height)?] })
    }
}

impl<T: Copy> RasterGrid<T> {
    /// Return the pixel at the coordinates.
    ///
    /// # Panics
    /// Panics if the coordinates are outside of the grid.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> T {
        self.pixels[self.checked_index(x, y)]
    }

    pub fn try_get(&self, x: u32, y: u32) -> Result<T> {
        Ok(self.pixels[self.try_index(x, y)?])
    }
}

/// Exchange grids with grey-scale piston images.
#[cfg(feature = "piston_image")]
mod piston_image {
    use image::GrayImage;
    use super::RasterGrid;
    use crate::error::Result;

    impl RasterGrid<u8> {
        /// Copy this grid into a grey-scale image, ready to be encoded.
        pub fn to_gray_image(&self) -> GrayImage {
            GrayImage::from_fn(self.width, self.height, |x, y| image::Luma([self.get(x, y)]))
        }

        pub fn from_gray_image(image: &GrayImage) -> Result<Self> {
            RasterGrid::from_vec(image.width(), image.height(), image.as_raw().clone())
        }
    }

}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions(){
        assert_eq!(
            RasterGrid::new(0, 4, 0_u8),
            Err(Error::InvalidDimensions { width: 0, height: 4 })
        );

        assert_eq!(
            RasterGrid::from_fn(4, 0, |_, _| false),
            Err(Error::InvalidDimensions { width: 4, height: 0 })
        );
    }

    #[test]
    fn rejects_wrong_buffer_length(){
        assert_eq!(
            RasterGrid::from_vec(3, 3, vec![0_u8; 8]),
            Err(Error::BufferSizeMismatch { expected: 9, received: 8 })
        );
    }

    #[test]
    fn stores_row_major(){
        let mut grid = RasterGrid::from_fn(3, 2, |x, y| (y * 3 + x) as u8).unwrap();
        assert_eq!(grid.as_slice(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(grid.get(2, 1), 5);

        grid.set(1, 1, 42);
        assert_eq!(grid.get(1, 1), 42);
        assert_eq!(grid.into_vec(), vec![0, 1, 2, 3, 42, 5]);
    }

    #[test]
    fn fallible_access_reports_coordinates(){
        let mut grid = RasterGrid::new(2, 2, 7_u8).unwrap();
        assert_eq!(grid.try_get(1, 1), Ok(7));
        assert_eq!(grid.try_get(2, 1), Err(Error::OutOfBounds { x: 2, y: 1, width: 2, height: 2 }));
        assert_eq!(grid.try_set(0, 2, 1), Err(Error::OutOfBounds { x: 0, y: 2, width: 2, height: 2 }));
        assert_eq!(grid.try_set(0, 1, 1), Ok(()));
        assert_eq!(grid.get(0, 1), 1);
    }

    #[test]
    #[should_panic(expected = "outside of the 2x2 grid")]
    fn out_of_bounds_read_panics(){
        let grid = RasterGrid::new(2, 2, 0_u8).unwrap();
        grid.get(0, 2);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_write_panics(){
        let mut grid = RasterGrid::new(2, 2, 0_u8).unwrap();
        grid.set(5, 0, 1);
    }
}
