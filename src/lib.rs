//! # ytthumb - YouTube Thumbnail Downloader
//!
//! Fetch YouTube video thumbnails at multiple quality tiers and convert
//! them to JPG, PNG or WEBP.
//!
//! ## Features
//!
//! - Video ID extraction from all common YouTube URL shapes
//! - Five fixed thumbnail quality tiers (450p through 4K)
//! - Video title lookup via the oEmbed API with graceful fallback
//! - Local PNG/WEBP re-encoding of the fetched JPEG bytes
//! - Persistent dark/light terminal theme
//!
//! ## Example
//!
//! ```rust,no_run
//! use ytthumb::{extract_video_id, resolve_thumbnails, ThumbnailView};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let id = extract_video_id("https://youtu.be/dQw4w9WgXcQ")?;
//! let candidates = resolve_thumbnails(&id);
//! let view = ThumbnailView::build("My Video", &candidates);
//! println!("{}", view.preview.image_url);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod convert;
pub mod core;
pub mod error;
pub mod prefs;
pub mod utils;

// Re-export main types
pub use convert::{DownloadOutcome, FormatConverter};
pub use error::ThumbError;
pub use prefs::Preferences;
pub use self::core::{
    estimated_file_size, resolve_thumbnails, MetadataFetcher, QualityTier, ThumbnailCandidate,
    ThumbnailFormat, ThumbnailView,
};
pub use utils::url::extract_video_id;

/// Result type alias for ytthumb operations
pub type Result<T> = std::result::Result<T, ThumbError>;
