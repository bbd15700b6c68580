//! Error types for QR Studio operations

use thiserror::Error;

/// Result type alias using QR Studio's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for generate and export operations
#[derive(Error, Debug)]
pub enum Error {
    /// Nothing to encode
    #[error("Please enter text to generate a QR code")]
    EmptyInput,

    /// QR code encoding failed (capacity exceeded etc.)
    #[error("Failed to encode QR code: {0}")]
    QrEncode(String),

    /// Image encoding/writing error
    #[error("Image error: {0}")]
    Image(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e.to_string())
    }
}
