
use crate::error::{pixel_count, Error, Result};
use crate::raster::RasterGrid;

/// Represents an image with each pixel being either true or false,
/// corresponding to inside-the-shape and outside-of-the-shape respectively.
/// BinaryImages can be created from byte slices, boolean raster grids,
/// or piston images if the feature `piston_image` is activated.
pub trait BinaryImage {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Must only be called with coordinates inside the image.
    fn is_inside(&self, x: u32, y: u32) -> bool;
}

/// The canonical binary mask.
pub type BinaryMask = RasterGrid<bool>;

impl BinaryImage for RasterGrid<bool> {
    #[inline]
    fn width(&self) -> u32 {
        RasterGrid::width(self)
    }

    #[inline]
    fn height(&self) -> u32 {
        RasterGrid::height(self)
    }

    #[inline]
    fn is_inside(&self, x: u32, y: u32) -> bool {
        self.get(x, y)
    }
}

impl<I: BinaryImage + ?Sized> BinaryImage for &I {
    #[inline]
    fn width(&self) -> u32 {
        (**self).width()
    }

    #[inline]
    fn height(&self) -> u32 {
        (**self).height()
    }

    #[inline]
    fn is_inside(&self, x: u32, y: u32) -> bool {
        (**self).is_inside(x, y)
    }
}

/// Swaps inside and outside of the wrapped image.
#[derive(Clone, Copy, Debug)]
pub struct Inverted<I>(pub I);

impl<I: BinaryImage> BinaryImage for Inverted<I> {
    #[inline]
    fn width(&self) -> u32 {
        self.0.width()
    }

    #[inline]
    fn height(&self) -> u32 {
        self.0.height()
    }

    #[inline]
    fn is_inside(&self, x: u32, y: u32) -> bool {
        !self.0.is_inside(x, y)
    }
}

/// An image which is described by a slice of bytes with one byte per pixel.
/// To determine if a byte is inside or outside,
/// it is compared to a threshold. The default threshold is 127.
#[derive(Clone, Copy, Debug)]
pub struct BinaryByteImage<'b> {
    width: u32,
    height: u32,

    /// A row-major image vector with one byte per pixel.
    buffer: &'b [u8],

    /// A pixel must be brighter than this value
    /// in order to be inside the shape.
    threshold: u8,
}


impl<'b> BinaryByteImage<'b> {
    /// Create a binary byte image with a threshold of 127
    pub fn from_slice(width: u32, height: u32, buffer: &'b [u8]) -> Result<Self> {
        Self::from_slice_with_threshold(width, height, buffer, 127)
    }

    /// Create a binary byte image from the buffer
    /// with all pixels brighter than the threshold being inside-the-shape.
    pub fn from_slice_with_threshold(width: u32, height: u32, buffer: &'b [u8], threshold: u8) -> Result<Self> {
        let expected = pixel_count(width, height)?;

        if buffer.len() != expected {
            return Err(Error::BufferSizeMismatch { expected, received: buffer.len() });
        }

        Ok(BinaryByteImage { width, height, buffer, threshold })
    }

    /// Copy the thresholded pixels into an owned mask.
    pub fn to_mask(&self) -> Result<BinaryMask> {
        let pixels = self.buffer.iter().map(|&byte| byte > self.threshold).collect();
        RasterGrid::from_vec(self.width, self.height, pixels)
    }
}

impl BinaryImage for BinaryByteImage<'_> {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn is_inside(&self, x: u32, y: u32) -> bool {
        self.buffer[self.width as usize * y as usize + x as usize] > self.threshold
    }
}

/// Create binary images from piston images.
#[cfg(feature = "piston_image")]
pub mod piston_image {
    use image::*;
    use super::BinaryImage;

    /// Create a binary image from a grey-scale piston image
    /// with all pixels brighter than 127 being inside-the-shape.
    pub fn of_gray_u8_image(image: &GrayImage) -> WithThreshold<'_, u8, Vec<u8>> {
        of_gray_u8_image_with_threshold(image, 127)
    }

    /// Create a binary image from a grey-scale piston image
    /// with all pixels brighter than the threshold being inside-the-shape.
    pub fn of_gray_u8_image_with_threshold(image: &GrayImage, threshold: u8)
        -> WithThreshold<'_, u8, Vec<u8>>
    {
        WithThreshold::of(image, threshold)
    }


    /// A binary image constructed from a grey-scale piston image
    pub struct WithThreshold<'i, P: 'static + Primitive, Container> {
        image: &'i ImageBuffer<Luma<P>, Container>,
        threshold: P,
    }

    impl<'i, P, C> WithThreshold<'i, P, C> where P: 'static + Primitive {
        /// Create a binary image from a grey-scale piston image
        /// with all pixels brighter than the threshold being inside-the-shape.
        pub fn of(image: &'i ImageBuffer<Luma<P>, C>, threshold: P) -> Self {
            WithThreshold { image, threshold }
        }
    }

    impl<'i, P, C> BinaryImage for WithThreshold<'i, P, C>
        where P: 'static + Primitive, C: std::ops::Deref<Target = [P]>
    {
        fn width(&self) -> u32 {
            self.image.width()
        }

        fn height(&self) -> u32 {
            self.image.height()
        }

        fn is_inside(&self, x: u32, y: u32) -> bool {
            self.image.get_pixel(x, y).0[0] > self.threshold
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn thresholds_gray_pixels(){
            let image = GrayImage::from_raw(3, 1, vec![0, 80, 200]).unwrap();
            let binary = of_gray_u8_image_with_threshold(&image, 79);

            assert_eq!(binary.width(), 3);
            assert!(!binary.is_inside(0, 0));
            assert!(binary.is_inside(1, 0));
            assert!(of_gray_u8_image(&image).is_inside(2, 0));
            assert!(!of_gray_u8_image(&image).is_inside(1, 0));
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_image_compares_against_threshold(){
        let bytes = [0, 127, 128, 255];
        let image = BinaryByteImage::from_slice(2, 2, &bytes).unwrap();

        assert!(!image.is_inside(0, 0));
        assert!(!image.is_inside(1, 0));
        assert!(image.is_inside(0, 1));
        assert!(image.is_inside(1, 1));

        let strict = BinaryByteImage::from_slice_with_threshold(2, 2, &bytes, 200).unwrap();
        assert!(!strict.is_inside(0, 1));
        assert!(strict.is_inside(1, 1));
    }

    #[test]
    fn byte_image_rejects_mismatched_buffer(){
        assert_eq!(
            BinaryByteImage::from_slice(3, 3, &[0; 10]).unwrap_err(),
            Error::BufferSizeMismatch { expected: 9, received: 10 }
        );

        assert_eq!(
            BinaryByteImage::from_slice(0, 3, &[]).unwrap_err(),
            Error::InvalidDimensions { width: 0, height: 3 }
        );
    }

    #[test]
    fn byte_image_converts_to_mask(){
        let bytes = [255, 0, 0, 255];
        let mask = BinaryByteImage::from_slice(2, 2, &bytes).unwrap().to_mask().unwrap();
        assert_eq!(mask.as_slice(), &[true, false, false, true]);
    }

    #[test]
    fn inverted_swaps_inside_and_outside(){
        let mask = BinaryMask::from_vec(2, 1, vec![true, false]).unwrap();
        let inverted = Inverted(&mask);

        assert_eq!(inverted.width(), 2);
        assert!(!inverted.is_inside(0, 0));
        assert!(inverted.is_inside(1, 0));
    }
}
