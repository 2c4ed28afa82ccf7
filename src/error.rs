//! Error types for ytthumb

use thiserror::Error;

/// Main error type for ytthumb operations
#[derive(Debug, Error)]
pub enum ThumbError {
    #[error("No video URL provided")]
    EmptyInput,

    #[error("Unrecognized video URL: {0}")]
    UnrecognizedUrl(String),

    #[error("Metadata lookup failed: {0}")]
    MetadataFetch(String),

    #[error("Image conversion failed: {0}")]
    ImageConversion(#[from] image::ImageError),

    #[error("Download failed: {0}")]
    DownloadFailed(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    UrlError(#[from] url::ParseError),
}

impl ThumbError {
    /// Check if the error is recovered locally (title fallback, JPEG
    /// fallback) rather than aborting the lookup
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ThumbError::MetadataFetch(_)
                | ThumbError::ImageConversion(_)
                | ThumbError::DownloadFailed(_)
        )
    }

    /// Check if the error comes from user input rather than the network
    pub fn is_input_error(&self) -> bool {
        matches!(self, ThumbError::EmptyInput | ThumbError::UnrecognizedUrl(_))
    }
}
