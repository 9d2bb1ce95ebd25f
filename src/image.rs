use image::DynamicImage;

use crate::geometry::Dimensions;

/// A decoded image together with the metadata that is carried over to the output.
#[derive(Debug, Clone)]
pub struct Image {
    pub icc: Option<Vec<u8>>,
    pub pixels: DynamicImage,
}

impl Image {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::of(&self.pixels)
    }
}
