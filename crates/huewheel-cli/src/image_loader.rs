//! Image loading into the flat channel buffers the core scans.

use std::path::Path;

use crate::error::CliError;

/// Interleaved 8-bit pixels plus their stride.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePixels {
    pub width: u32,
    pub height: u32,
    /// Channels per pixel: 3 for RGB, 4 for RGBA.
    pub pixel_size: usize,
    pub data: Vec<u8>,
}

/// Load an image from disk.
///
/// Supports the formats enabled on the `image` crate (PNG, JPEG, TIFF, BMP).
/// Images with an alpha channel load as RGBA8, everything else as RGB8.
/// Deeper bit depths are narrowed to 8 bits.
pub fn load_pixels(path: &Path) -> Result<SourcePixels, CliError> {
    let img = image::open(path)?;
    let source = from_dynamic(img);
    tracing::info!(
        "Collecting colour info on \"{}\" ({}x{}, {} channels)",
        path.display(),
        source.width,
        source.height,
        source.pixel_size
    );
    Ok(source)
}

/// Flatten a decoded image.
pub fn from_dynamic(img: image::DynamicImage) -> SourcePixels {
    let (width, height) = (img.width(), img.height());
    if img.color().has_alpha() {
        SourcePixels {
            width,
            height,
            pixel_size: 4,
            data: img.into_rgba8().into_raw(),
        }
    } else {
        SourcePixels {
            width,
            height,
            pixel_size: 3,
            data: img.into_rgb8().into_raw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};

    use super::*;

    #[test]
    fn test_rgb_image_has_three_channels() {
        let img = RgbImage::from_pixel(2, 3, Rgb([10, 20, 30]));
        let px = from_dynamic(DynamicImage::ImageRgb8(img));
        assert_eq!((px.width, px.height, px.pixel_size), (2, 3, 3));
        assert_eq!(px.data.len(), 18);
        assert_eq!(&px.data[..3], &[10, 20, 30]);
    }

    #[test]
    fn test_rgba_image_keeps_alpha_stride() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 4]));
        let px = from_dynamic(DynamicImage::ImageRgba8(img));
        assert_eq!(px.pixel_size, 4);
        assert_eq!(&px.data[..4], &[1, 2, 3, 4]);
    }

    #[test]
    fn test_gray_image_expands_to_rgb() {
        let img = GrayImage::from_pixel(1, 1, Luma([77]));
        let px = from_dynamic(DynamicImage::ImageLuma8(img));
        assert_eq!(px.pixel_size, 3);
        assert_eq!(px.data, vec![77, 77, 77]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_pixels(Path::new("/nonexistent/huewheel.png")).is_err());
    }
}
