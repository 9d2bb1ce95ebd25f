use std::fmt::{Debug, Display};
use std::path::PathBuf;

/// Error that aborts the whole batch, such as failing to create the output directory.
pub struct BatchError(pub String);

impl Display for BatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Debug for BatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("BatchError").field(&self.0).finish()
    }
}

impl std::error::Error for BatchError {}

#[macro_export]
macro_rules! batch_err {
    ($($arg:tt)*) => {
        $crate::error::BatchError(format!(
            "shotsize: {} @ {}:{}:{}",
            format_args!($($arg)*),
            file!(),
            line!(),
            column!()
        ))
    };
}

#[macro_export]
macro_rules! batch_try {
    ($expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::batch_err!("{}", err));
            }
        }
    };
}

/// Failure to process a single file. The batch records it and moves on to the next file.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("unable to load '{}': {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("unable to resize '{}': {reason}", path.display())]
    Resize { path: PathBuf, reason: String },

    #[error("unable to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: WriteFailure,
    },
}

/// What went wrong while producing an output file.
#[derive(Debug, thiserror::Error)]
pub enum WriteFailure {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Encode(#[from] image::ImageError),
}
