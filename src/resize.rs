//! Exact resizing to the target resolution.

use std::path::Path;

use image::{DynamicImage, RgbImage};
use pic_scale_safe::ImageSize;
use tracing::debug;

use crate::{error::FileError, filter::Filter, geometry::Dimensions, image::Image};

/// Returns a copy of `image` scaled to exactly `target`, ignoring aspect ratio.
///
/// The output is always 8-bit RGB because that is all a baseline JPEG can hold.
/// `path` is only used for error reporting.
pub fn resize(
    image: &Image,
    target: Dimensions,
    filter: Filter,
    path: &Path,
) -> Result<Image, FileError> {
    if target.is_empty() {
        return Err(FileError::Resize {
            path: path.to_path_buf(),
            reason: format!("target size {target} has no pixels"),
        });
    }

    let src = image.pixels.to_rgb8();
    let src_dims = Dimensions::new(src.width(), src.height());
    if src_dims == target {
        debug!(%target, "already at target size, skipping resampling");
        return Ok(Image {
            icc: image.icc.clone(),
            pixels: DynamicImage::ImageRgb8(src),
        });
    }

    let pixels = resize_rgb8(&src, target, filter).map_err(|reason| FileError::Resize {
        path: path.to_path_buf(),
        reason,
    })?;
    debug!(from = %src_dims, to = %target, %filter, "resampled image");

    Ok(Image {
        icc: image.icc.clone(),
        pixels: DynamicImage::ImageRgb8(pixels),
    })
}

fn resize_rgb8(src: &RgbImage, target: Dimensions, filter: Filter) -> Result<RgbImage, String> {
    let src_size = ImageSize::new(src.width() as usize, src.height() as usize);
    let dst_size = ImageSize::new(target.width as usize, target.height as usize);
    let resized = pic_scale_safe::resize_rgb8(
        src.as_raw(),
        src_size,
        dst_size,
        filter.into_resampling(),
    )
    .map_err(|e| e.to_string())?;
    RgbImage::from_raw(target.width, target.height, resized)
        .ok_or_else(|| format!("resampler returned a buffer that does not fit {target}"))
}
