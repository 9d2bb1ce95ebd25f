use std::path::Path;

use image::{DynamicImage, ImageDecoder, ImageReader, ImageResult};
use tracing::debug;

use crate::{error::FileError, image::Image};

/// Loads the image at `path`, guessing the format from the file contents.
pub fn decode(path: &Path) -> Result<Image, FileError> {
    decode_inner(path).map_err(|source| FileError::Load {
        path: path.to_path_buf(),
        source,
    })
}

fn decode_inner(path: &Path) -> ImageResult<Image> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader.format();
    let mut decoder = reader.into_decoder()?;
    // a broken profile is not worth failing the whole file over
    let icc = decoder.icc_profile().unwrap_or(None);
    let pixels = DynamicImage::from_decoder(decoder)?;
    debug!(
        path = %path.display(),
        ?format,
        width = pixels.width(),
        height = pixels.height(),
        has_icc = icc.is_some(),
        "decoded image"
    );
    Ok(Image { icc, pixels })
}
