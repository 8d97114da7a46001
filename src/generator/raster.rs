//! Source image loading, resizing, and PNG encoding.

use crate::generator::error::{Error, ErrorExt, Result};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Opens and decodes the user-supplied source image.
///
/// Any format the `image` crate can decode is accepted. Failure here is
/// the pipeline's one fatal input error.
pub fn load_source(path: &Path) -> Result<DynamicImage> {
    let img = image::open(path).map_err(|error| Error::SourceImage {
        path: path.to_path_buf(),
        error,
    })?;
    log::debug!(
        "loaded source image {}: {}x{}",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(img)
}

/// Produces a square RGBA8 copy of `image` at `size`×`size`.
///
/// Lanczos3 keeps edges sharp when downscaling, which matters most for
/// the small menu bar and taskbar sizes.
pub fn resize_to(image: &DynamicImage, size: u32) -> RgbaImage {
    image.resize_exact(size, size, FilterType::Lanczos3).to_rgba8()
}

/// Encodes `image` as PNG at `path`.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path).fs_context("creating PNG output file", path)?;
    let mut writer = BufWriter::new(file);
    image.write_to(&mut writer, ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_resize_is_exact_and_square() {
        let source = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            100,
            40,
            Rgba([10, 20, 30, 255]),
        ));
        for size in [16, 48, 256] {
            assert_eq!(resize_to(&source, size).dimensions(), (size, size));
        }
    }

    #[test]
    fn test_load_source_missing_path() {
        let err = load_source(Path::new("does-not-exist.png")).unwrap_err();
        assert!(err.to_string().contains("failed to load source image"));
    }
}
