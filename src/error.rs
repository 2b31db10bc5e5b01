//! Error types for the png-whiteout crate.

use std::path::PathBuf;

/// Errors that can occur while loading, recoloring or saving images.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error occurred while reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error occurred while decoding or encoding an image.
    #[error("image processing error: {0}")]
    Image(#[from] image::ImageError),

    /// A directory was expected but the path is something else.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
