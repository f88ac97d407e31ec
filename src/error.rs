use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures of the copy pipeline.
#[derive(Error, Debug)]
pub enum PclipError {
    /// The directory walk could not proceed.
    #[error("failed to find files")]
    Walk(#[from] ignore::Error),

    /// A located file could not be read.
    #[error("failed to read file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The clipboard rejected the document.
    #[error("failed to copy to clipboard: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, PclipError>;
