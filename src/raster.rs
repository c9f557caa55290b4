/// Raster adapter between decoded images and integer pixel grids
/// Each cell is one packed 0xAARRGGBB word, so the permutation core moves
/// whole pixels without ever touching channel semantics

use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

use crate::error::CatMapError;
use crate::grid::PixelGrid;

#[inline]
fn pack(pixel: Rgba<u8>) -> u32 {
    let [r, g, b, a] = pixel.0;
    (u32::from(a) << 24) | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

#[inline]
fn unpack(value: u32) -> Rgba<u8> {
    let a = (value >> 24) as u8;
    let r = (value >> 16) as u8;
    let g = (value >> 8) as u8;
    let b = value as u8;
    Rgba([r, g, b, a])
}

/// Convert a decoded image into a grid of packed pixels
///
/// The map is only defined on squares, so non-square images are rejected
/// here at the boundary rather than deep in the engine.
pub fn grid_from_image(image: &DynamicImage) -> Result<PixelGrid<u32>, CatMapError> {
    let (width, height) = image.dimensions();
    if width != height {
        return Err(CatMapError::InvalidGrid { width, height });
    }
    let rgba = image.to_rgba8();
    Ok(PixelGrid::from_fn(width, height, |x, y| {
        pack(*rgba.get_pixel(x, y))
    }))
}

/// Convert a grid of packed pixels back into an image buffer
pub fn image_from_grid(grid: &PixelGrid<u32>) -> RgbaImage {
    RgbaImage::from_fn(grid.width(), grid.height(), |x, y| unpack(grid.get(x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(side: u32) -> DynamicImage {
        let img = RgbaImage::from_fn(side, side, |x, y| {
            Rgba([x as u8, y as u8, (x + y) as u8, 255])
        });
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn test_pack_unpack_is_lossless() {
        for pixel in [
            Rgba([0, 0, 0, 0]),
            Rgba([255, 255, 255, 255]),
            Rgba([1, 2, 3, 4]),
            Rgba([200, 100, 50, 25]),
        ] {
            assert_eq!(unpack(pack(pixel)), pixel);
        }
    }

    #[test]
    fn test_image_grid_round_trip() {
        let image = gradient(16);
        let grid = grid_from_image(&image).unwrap();
        assert_eq!(grid.width(), 16);
        assert_eq!(grid.height(), 16);
        let back = image_from_grid(&grid);
        assert_eq!(back, image.to_rgba8());
    }

    #[test]
    fn test_non_square_image_is_rejected() {
        let img = RgbaImage::new(8, 6);
        let err = grid_from_image(&DynamicImage::ImageRgba8(img)).unwrap_err();
        assert_eq!(err, CatMapError::InvalidGrid { width: 8, height: 6 });
    }
}
