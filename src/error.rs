use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort asset generation
#[derive(Error, Debug)]
pub enum GenerateError {
    /// A shape could not be drawn with the requested parameters
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// PNG encoding failed
    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    /// The directory an asset should be written into does not exist
    #[error("Output directory does not exist: {}", .0.display())]
    MissingOutputDir(PathBuf),

    #[error("I/O error for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Progress output could not be written
    #[error("Failed to write progress: {0}")]
    Progress(#[from] io::Error),

    /// Renaming the finished temp file onto the target failed
    #[error("Failed to persist {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenerateError {
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::InvalidGeometry(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, GenerateError>;
