//! Image decoding and encoding
//!
//! This module defines the seam between the snipping engine and the image
//! codecs, so the runner can be driven by in-memory images in tests.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use log::{debug, error};

use crate::io::SourceFile;
use crate::template::errors::{SnipError, SnipResult};

/// Strategy for reading source images and writing snipped outputs
pub trait ImageCodec {
    /// Decode a source image
    ///
    /// # Arguments
    /// * `source` - The file to decode, whose extension names its format
    ///
    /// # Returns
    /// The decoded image or an error
    fn decode(&self, source: &SourceFile) -> SnipResult<DynamicImage>;

    /// Read only the dimensions of a source image
    fn dimensions(&self, source: &SourceFile) -> SnipResult<(u32, u32)> {
        Ok(self.decode(source)?.dimensions())
    }

    /// Encode an image to a new file
    ///
    /// # Arguments
    /// * `image` - The image to write
    /// * `path` - Output path, which must not exist yet
    /// * `format` - Container format to encode with
    fn encode(&self, image: &DynamicImage, path: &Path, format: ImageFormat) -> SnipResult<()>;
}

/// Codec backed by the `image` crate and the local file system
///
/// Formats are taken from file extensions; file contents are never sniffed.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileCodec;

impl ImageCodec for FileCodec {
    fn decode(&self, source: &SourceFile) -> SnipResult<DynamicImage> {
        let format = source.image_format()
            .ok_or_else(|| SnipError::GenericError(
                format!("Unsupported image format: {}", source.path().display())))?;

        debug!("Decoding {} as {:?}", source.path().display(), format);
        let mut reader = ImageReader::open(source.path())?;
        reader.set_format(format);
        Ok(reader.decode()?)
    }

    fn dimensions(&self, source: &SourceFile) -> SnipResult<(u32, u32)> {
        let format = source.image_format()
            .ok_or_else(|| SnipError::GenericError(
                format!("Unsupported image format: {}", source.path().display())))?;

        let mut reader = ImageReader::open(source.path())?;
        reader.set_format(format);
        Ok(reader.into_dimensions()?)
    }

    fn encode(&self, image: &DynamicImage, path: &Path, format: ImageFormat) -> SnipResult<()> {
        // create_new so a file appearing after naming is never clobbered
        let file = OpenOptions::new().write(true).create_new(true).open(path)?;
        let mut writer = BufWriter::new(file);

        if let Err(e) = image.write_to(&mut writer, format) {
            error!("Failed to encode {}: {}", path.display(), e);
            return Err(e.into());
        }
        writer.flush()?;

        debug!("Encoded {} as {:?}", path.display(), format);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_png_round_trip_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("square.png");
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(3, 2, Rgb([10, 20, 30])));

        FileCodec.encode(&image, &path, ImageFormat::Png).unwrap();
        let decoded = FileCodec.decode(&SourceFile::new(&path)).unwrap();

        assert_eq!(decoded.as_bytes(), image.as_bytes());
        assert_eq!(FileCodec.dimensions(&SourceFile::new(&path)).unwrap(), (3, 2));
    }

    #[test]
    fn test_encode_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("taken.png");
        std::fs::write(&path, b"keep me").unwrap();

        let image = DynamicImage::ImageRgb8(RgbImage::new(1, 1));
        assert!(matches!(FileCodec.encode(&image, &path, ImageFormat::Png), Err(SnipError::IoError(_))));
        assert_eq!(std::fs::read(&path).unwrap(), b"keep me");
    }
}
