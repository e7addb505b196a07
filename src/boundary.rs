//! Classifies the pixels directly at the shape outline.
//! These pixels seed the distance transform with a distance of zero.

use crate::binary_image::BinaryImage;

/// The side of the outline a boundary pixel lies on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Boundary {
    /// Inside the shape, touching at least one outside pixel.
    Interior,

    /// Outside of the shape, touching at least one inside pixel.
    Exterior,
}

const AXIS_NEIGHBOURS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Whether the pixel is inside the shape and at least one of its
/// four axis neighbours is outside. Pixels beyond the image border count as inside,
/// so the border alone never produces an interior boundary.
#[inline]
pub fn is_immediate_interior(image: &impl BinaryImage, x: u32, y: u32) -> bool {
    image.is_inside(x, y) && AXIS_NEIGHBOURS.iter()
        .any(|&(neighbour_x, neighbour_y)| !is_inside_or(image, x, y, neighbour_x, neighbour_y, true))
}

/// Whether the pixel is outside of the shape and at least one of its
/// four axis neighbours is inside. Pixels beyond the image border count as outside,
/// so the border alone never produces an exterior boundary.
#[inline]
pub fn is_immediate_exterior(image: &impl BinaryImage, x: u32, y: u32) -> bool {
    !image.is_inside(x, y) && AXIS_NEIGHBOURS.iter()
        .any(|&(neighbour_x, neighbour_y)| is_inside_or(image, x, y, neighbour_x, neighbour_y, false))
}

pub fn classify(image: &impl BinaryImage, x: u32, y: u32) -> Option<Boundary> {
    if is_immediate_interior(image, x, y) {
        Some(Boundary::Interior)
    }
    else if is_immediate_exterior(image, x, y) {
        Some(Boundary::Exterior)
    }
    else {
        None
    }
}

#[inline(always)]
fn is_inside_or(
    image: &impl BinaryImage, x: u32, y: u32,
    neighbour_x: i64, neighbour_y: i64, off_canvas: bool
) -> bool {
    let neighbour_x = x as i64 + neighbour_x;
    let neighbour_y = y as i64 + neighbour_y;

    if neighbour_x >= 0 && neighbour_y >= 0
        && neighbour_x < image.width() as i64 && neighbour_y < image.height() as i64
    {
        image.is_inside(neighbour_x as u32, neighbour_y as u32)
    }
    else {
        off_canvas
    }
}
