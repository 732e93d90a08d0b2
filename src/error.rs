use thiserror::Error;

/// Errors produced when reading a hex color string
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color {0:?} must start with '#'")]
    MissingPrefix(String),

    #[error("expected 3 or 6 hex digits, got {0}")]
    InvalidLength(usize),

    #[error("color {0:?} contains a non-hex digit")]
    InvalidDigit(String),
}

/// Errors that can occur while exporting the canvas
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write image: {0}")]
    Write(#[from] std::io::Error),

    /// The browser refused to hand the file to the user
    #[cfg(target_arch = "wasm32")]
    #[error("Browser download failed: {0}")]
    Browser(String),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
