//! Settings for a batch run.
//!
//! [`BatchConfig::default`] holds the values the `resize-screenshots` binary runs with.
//! Tests and library users swap any of them out through the `with_*` setters.

use std::path::PathBuf;

use crate::{filter::Filter, geometry::Dimensions};

pub const DEFAULT_INPUT_DIR: &str = "screenshots";
pub const DEFAULT_OUTPUT_DIR: &str = "screenshots-resized";
pub const DEFAULT_TARGET: Dimensions = Dimensions::new(1600, 900);
pub const DEFAULT_QUALITY: u8 = 95;

/// The screenshots processed by default, in reporting order.
pub const DEFAULT_FILES: [&str; 5] = [
    "1-dashboard.jpg",
    "2-settings-complete.jpg",
    "3-invoices-list.jpg",
    "4-order-picker-modal.jpg",
    "5-pdf-korean.jpg",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub target: Dimensions,
    /// JPEG quality, kept within 1-100 by `with_quality`
    quality: u8,
    pub filter: Filter,
    pub files: Vec<String>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            target: DEFAULT_TARGET,
            quality: DEFAULT_QUALITY,
            filter: Filter::default(),
            files: DEFAULT_FILES.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl BatchConfig {
    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_target(mut self, target: Dimensions) -> Self {
        self.target = target;
        self
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }

    /// Values outside 1-100 are clamped.
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality.clamp(1, 100);
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = files.into_iter().map(Into::into).collect();
        self
    }

    pub fn input_path(&self, filename: &str) -> PathBuf {
        self.input_dir.join(filename)
    }

    pub fn output_path(&self, filename: &str) -> PathBuf {
        self.output_dir.join(filename)
    }
}
