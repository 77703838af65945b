use std::fs;
use std::path::Path;

use restyle_application::{ApplicationError, PreviewDecoder};
use restyle_domain::{PreviewImage, SourceImage};

/// Decodes selected files and response bodies with the `image` crate.
/// The format is sniffed from the bytes, so the advisory file-picker
/// filter stays advisory.
#[derive(Debug, Default)]
pub struct ImageCratePreviewDecoder;

impl PreviewDecoder for ImageCratePreviewDecoder {
    fn load_from_path(
        &self,
        path: &Path,
    ) -> Result<(SourceImage, PreviewImage), ApplicationError> {
        let bytes = fs::read(path).map_err(|error| ApplicationError::Io(error.to_string()))?;
        let preview = self.decode_bytes(&bytes)?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("image")
            .to_string();

        Ok((SourceImage { file_name, bytes }, preview))
    }

    fn decode_bytes(&self, bytes: &[u8]) -> Result<PreviewImage, ApplicationError> {
        let decoded = image::load_from_memory(bytes)
            .map_err(|error| ApplicationError::Decode(error.to_string()))?;

        Ok(PreviewImage {
            width: decoded.width(),
            height: decoded.height(),
            rgba: decoded.to_rgba8().into_raw(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
    use tempfile::TempDir;

    use super::*;

    fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
        let pixels = ImageBuffer::from_fn(width, height, |_x, _y| Rgb([200_u8, 80, 40]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(pixels)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)
            .expect("encode");
        bytes
    }

    #[test]
    fn decodes_jpeg_bytes_to_rgba() {
        let decoder = ImageCratePreviewDecoder;
        let preview = decoder.decode_bytes(&jpeg_bytes(20, 10)).expect("decode");

        assert_eq!(preview.width, 20);
        assert_eq!(preview.height, 10);
        assert_eq!(preview.rgba.len(), 20 * 10 * 4);
        assert!(!preview.is_empty());
    }

    #[test]
    fn loads_a_selected_file_with_its_name() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("photo.png");
        let pixels = ImageBuffer::from_fn(8, 8, |_x, _y| Rgb([10_u8, 20, 30]));
        pixels.save(&path).expect("save");

        let decoder = ImageCratePreviewDecoder;
        let (source, preview) = decoder.load_from_path(&path).expect("load");

        assert_eq!(source.file_name, "photo.png");
        assert!(!source.bytes.is_empty());
        assert_eq!(preview.width, 8);
        assert_eq!(preview.height, 8);
    }

    #[test]
    fn garbage_bytes_fail_with_a_decode_error() {
        let decoder = ImageCratePreviewDecoder;
        let error = decoder
            .decode_bytes(b"not an image at all")
            .expect_err("should fail");
        assert!(matches!(error, ApplicationError::Decode(_)));
    }

    #[test]
    fn missing_file_fails_with_an_io_error() {
        let decoder = ImageCratePreviewDecoder;
        let error = decoder
            .load_from_path(Path::new("/nonexistent/photo.jpg"))
            .expect_err("should fail");
        assert!(matches!(error, ApplicationError::Io(_)));
    }
}
