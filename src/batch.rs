//! The batch loop: load, resize and write every configured file, one after another.
//!
//! A failure on one file is reported and recorded, then the loop moves on.
//! Only problems outside the per-file work, like being unable to create the output
//! directory, abort the run.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{error, info, instrument};

use crate::{
    batch_err, batch_try,
    config::BatchConfig,
    decode::decode,
    encode::encode_jpeg,
    error::{BatchError, FileError},
    geometry::Dimensions,
    image::Image,
    resize::resize,
};

/// What happened to a single file.
#[derive(Debug)]
pub struct FileOutcome {
    pub filename: String,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Size of the input, if it could be loaded
    pub original: Option<Dimensions>,
    /// Size of the written output on success
    pub result: Result<Dimensions, FileError>,
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-file outcomes of a run, in the order the files were listed.
#[derive(Debug)]
pub struct BatchReport {
    pub output_dir: PathBuf,
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn is_complete_success(&self) -> bool {
        self.outcomes.iter().all(FileOutcome::is_success)
    }
}

/// Runs the batch, printing progress to stdout.
pub fn run(config: &BatchConfig) -> Result<BatchReport, BatchError> {
    let mut stdout = std::io::stdout().lock();
    run_with_output(config, &mut stdout)
}

/// Runs the batch, printing progress to `out`.
pub fn run_with_output<W: Write>(
    config: &BatchConfig,
    out: &mut W,
) -> Result<BatchReport, BatchError> {
    // create_dir_all succeeds if the directory is already there
    std::fs::create_dir_all(&config.output_dir).map_err(|e| {
        batch_err!(
            "unable to create output directory '{}': {e}",
            config.output_dir.display()
        )
    })?;

    batch_try!(writeln!(out, "Resizing screenshots to {}...", config.target));

    let mut outcomes = Vec::with_capacity(config.files.len());
    for filename in &config.files {
        outcomes.push(process_file(config, filename, out)?);
    }

    let report = BatchReport {
        output_dir: config.output_dir.clone(),
        outcomes,
    };

    batch_try!(writeln!(out));
    if report.is_complete_success() {
        batch_try!(writeln!(out, "All screenshots resized!"));
    } else {
        batch_try!(writeln!(
            out,
            "Resized {} of {} screenshots",
            report.succeeded().count(),
            report.outcomes.len()
        ));
    }
    batch_try!(writeln!(out, "Output folder: {}", report.output_dir.display()));
    batch_try!(out.flush());

    Ok(report)
}

#[instrument(skip(config, out), fields(target = %config.target))]
fn process_file<W: Write>(
    config: &BatchConfig,
    filename: &str,
    out: &mut W,
) -> Result<FileOutcome, BatchError> {
    let input_path = config.input_path(filename);
    let output_path = config.output_path(filename);

    let mut original = None;
    let result = match decode(&input_path) {
        Ok(image) => {
            let dims = image.dimensions();
            original = Some(dims);
            batch_try!(writeln!(out, "Original {filename}: {dims}"));
            resize_and_write(&image, config, &input_path, &output_path)
        }
        Err(err) => Err(err),
    };

    match &result {
        Ok(dims) => {
            info!(output = %output_path.display(), size = %dims, "resized");
            batch_try!(writeln!(out, "Resized {filename} to {dims}"));
        }
        Err(err) => {
            error!(error = %err, "failed to resize");
            batch_try!(writeln!(out, "Error resizing {filename}: {err}"));
        }
    }

    Ok(FileOutcome {
        filename: filename.to_owned(),
        input_path,
        output_path,
        original,
        result,
    })
}

fn resize_and_write(
    image: &Image,
    config: &BatchConfig,
    input_path: &Path,
    output_path: &Path,
) -> Result<Dimensions, FileError> {
    let resized = resize(image, config.target, config.filter, input_path)?;
    encode_jpeg(&resized, output_path, config.quality())?;
    Ok(resized.dimensions())
}
