//! Error types for the mdreflow library.

use std::io;
use thiserror::Error;

/// Result type alias for mdreflow operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading fragments or rendering output.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The fragment dump could not be deserialized.
    #[error("Fragment input error: {0}")]
    Input(#[from] serde_json::Error),

    /// Error during rendering (Markdown, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Invalid page range specification.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),
}
