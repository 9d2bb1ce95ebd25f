use std::{
    io::{BufWriter, Write},
    path::Path,
};

use image::codecs::jpeg::JpegEncoder;
use image::ImageEncoder;
use tracing::debug;

use crate::{
    error::{FileError, WriteFailure},
    image::Image,
};

/// Writes `image` to `path` as a JPEG of the given quality (1-100).
///
/// The data goes to a temporary file next to `path` first and replaces `path` only once it is
/// completely written, so a failure never leaves a truncated image behind.
pub fn encode_jpeg(image: &Image, path: &Path, quality: u8) -> Result<(), FileError> {
    encode_inner(image, path, quality).map_err(|source| FileError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn encode_inner(image: &Image, path: &Path, quality: u8) -> Result<(), WriteFailure> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file = temp_file_builder().tempfile_in(dir)?;
    // Wrap in BufWriter for performance
    let mut writer = BufWriter::new(file);

    write_jpeg(image, &mut writer, quality)?;

    // Dropping the BufWriter would flush too, but silently discard any error.
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;

    debug!(path = %path.display(), quality, "wrote JPEG");
    Ok(())
}

/// Temporary files are private (0600) by default. Ask for 0666 instead so that after the
/// umask the output ends up with the same mode `File::create` would give it.
fn temp_file_builder() -> tempfile::Builder<'static, 'static> {
    #[allow(unused_mut)]
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    builder
}

fn write_jpeg<W: Write>(image: &Image, writer: &mut W, quality: u8) -> Result<(), WriteFailure> {
    let mut encoder = JpegEncoder::new_with_quality(writer, quality);
    if let Some(icc) = image.icc.clone() {
        let _ = encoder.set_icc_profile(icc); // ignore UnsupportedError
    };
    image.pixels.write_with_encoder(encoder)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use image::{DynamicImage, ImageFormat, ImageReader};

    fn sample() -> Image {
        Image {
            icc: None,
            pixels: DynamicImage::new_rgb8(64, 36),
        }
    }

    #[test]
    fn test_writes_decodable_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        encode_jpeg(&sample(), &path, 95).unwrap();

        let reader = ImageReader::open(&path).unwrap().with_guessed_format().unwrap();
        assert_eq!(reader.format(), Some(ImageFormat::Jpeg));
        let decoded = reader.decode().unwrap();
        assert_eq!((decoded.width(), decoded.height()), (64, 36));
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        std::fs::write(&path, b"stale").unwrap();
        encode_jpeg(&sample(), &path, 95).unwrap();
        assert!(image::open(&path).is_ok());
    }

    #[test]
    fn test_leaves_no_temporary_files() {
        let dir = tempfile::tempdir().unwrap();
        encode_jpeg(&sample(), &dir.path().join("out.jpg"), 95).unwrap();
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_output_mode_matches_file_create() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.jpg");
        encode_jpeg(&sample(), &output, 95).unwrap();
        let reference = dir.path().join("reference.jpg");
        std::fs::write(&reference, b"").unwrap();

        let mode = |path: &Path| std::fs::metadata(path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&output), mode(&reference));
    }

    #[test]
    fn test_missing_directory_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist").join("out.jpg");
        let err = encode_jpeg(&sample(), &path, 95).unwrap_err();
        assert!(matches!(
            err,
            FileError::Write {
                source: WriteFailure::Io(_),
                ..
            }
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_quality_changes_output() {
        let image = Image {
            icc: None,
            pixels: DynamicImage::ImageRgb8(image::RgbImage::from_fn(64, 64, |x, y| {
                image::Rgb([(x * 4) as u8, (y * 4) as u8, ((x ^ y) * 4) as u8])
            })),
        };
        let mut low = Vec::new();
        let mut high = Vec::new();
        write_jpeg(&image, &mut low, 10).unwrap();
        write_jpeg(&image, &mut high, 95).unwrap();
        assert!(low.len() < high.len());
    }
}
