//! Pixel extraction and resampling
//!
//! Copies a region out of a decoded image into a new buffer of the same
//! pixel format, enlarging it by the segment's scale factor when one is set.

use image::{DynamicImage, GenericImageView};
use log::debug;

use crate::geometry::{BoundingBox, Scaling};
use crate::template::errors::{SnipError, SnipResult};

/// Extract a region of an image, scaled by an integer factor
///
/// # Arguments
/// * `image` - The decoded source image
/// * `region` - The area to copy, which must lie inside the image
/// * `scaling` - Scale factor and resampling mode
///
/// # Returns
/// A new image of `region.width * factor` by `region.height * factor` pixels
/// with the source's pixel format
pub fn extract(image: &DynamicImage, region: BoundingBox, scaling: &Scaling) -> SnipResult<DynamicImage> {
    let (image_width, image_height) = image.dimensions();
    if !region.fits_within(image_width, image_height)? {
        return Err(SnipError::RegionOutOfBounds { region, image_width, image_height });
    }

    let (output_width, output_height) = scaling.scaled_dimensions(region.width, region.height)?;
    check_buffer_size(image, output_width, output_height)?;

    let cropped = image.crop_imm(region.x, region.y, region.width, region.height);
    if scaling.factor() == 1 {
        return Ok(cropped);
    }

    let mode = scaling.effective_mode();
    debug!("Resampling {} to {}x{} with {} interpolation",
           region, output_width, output_height, mode.name());

    Ok(cropped.resize_exact(output_width, output_height, mode.filter_type()))
}

/// Make sure the output buffer's byte length is representable
fn check_buffer_size(image: &DynamicImage, width: u32, height: u32) -> SnipResult<()> {
    let bytes_per_pixel = usize::from(image.color().bytes_per_pixel());
    usize::try_from(width).ok()
        .and_then(|w| usize::try_from(height).ok().and_then(|h| w.checked_mul(h)))
        .and_then(|pixels| pixels.checked_mul(bytes_per_pixel))
        .map(|_| ())
        .ok_or_else(|| SnipError::ArithmeticOverflow(
            format!("buffer size for a {}x{} output", width, height)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::InterpolationMode;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([x as u8, y as u8, (x * 7 + y * 13) as u8])
        }))
    }

    #[test]
    fn test_identity_scale_is_a_plain_crop() {
        let image = gradient(20, 10);
        let region = BoundingBox::new(3, 2, 8, 5);
        let output = extract(&image, region, &Scaling::identity()).unwrap();

        assert_eq!(output.dimensions(), (8, 5));
        let expected = image.crop_imm(3, 2, 8, 5);
        assert_eq!(output.as_bytes(), expected.as_bytes());
        assert_eq!(output.get_pixel(0, 0), image.get_pixel(3, 2));
    }

    #[test]
    fn test_pixel_format_is_preserved() {
        let image = DynamicImage::ImageLuma8(GrayImage::new(4, 4));
        let output = extract(&image, BoundingBox::new(0, 0, 2, 2), &Scaling::new(2, None).unwrap()).unwrap();
        assert!(matches!(output, DynamicImage::ImageLuma8(_)));
    }

    #[test]
    fn test_nearest_neighbour_replicates_pixels() {
        let image = gradient(4, 4);
        let scaling = Scaling::new(3, Some(InterpolationMode::NearestNeighbour)).unwrap();
        let output = extract(&image, BoundingBox::new(1, 1, 2, 2), &scaling).unwrap();

        assert_eq!(output.dimensions(), (6, 6));
        for y in 0..6 {
            for x in 0..6 {
                assert_eq!(output.get_pixel(x, y), image.get_pixel(1 + x / 3, 1 + y / 3));
            }
        }
    }

    #[test]
    fn test_bilinear_and_bicubic_blend() {
        let image = DynamicImage::ImageLuma8(GrayImage::from_fn(2, 1, |x, _| Luma([if x == 0 { 0 } else { 255 }])));

        for mode in [InterpolationMode::Bilinear, InterpolationMode::Bicubic] {
            let scaling = Scaling::new(4, Some(mode)).unwrap();
            let output = extract(&image, BoundingBox::new(0, 0, 2, 1), &scaling).unwrap();
            let luma = output.to_luma8();

            assert_eq!(luma.dimensions(), (8, 4));
            assert!(luma.pixels().any(|p| p[0] > 0 && p[0] < 255),
                    "{} produced no intermediate values", mode.name());
        }
    }

    #[test]
    fn test_region_outside_image_rejected() {
        let image = gradient(10, 10);
        let result = extract(&image, BoundingBox::new(5, 5, 6, 5), &Scaling::identity());
        assert!(matches!(result, Err(SnipError::RegionOutOfBounds { image_width: 10, image_height: 10, .. })));
    }

    #[test]
    fn test_scaled_size_overflow_rejected() {
        let image = gradient(10, 10);
        let scaling = Scaling::new(u32::MAX / 2, None).unwrap();
        let result = extract(&image, BoundingBox::new(0, 0, 10, 10), &scaling);
        assert!(matches!(result, Err(SnipError::ArithmeticOverflow(_))));
    }
}
