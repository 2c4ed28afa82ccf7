//! Command line argument parsing

use crate::core::thumbnail::ThumbnailFormat;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

/// YouTube Thumbnail Downloader - fetch and convert video thumbnails
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// YouTube video URL (watch, embed, /v/, user, youtu.be or shorts)
    #[arg(value_name = "URL", default_value = "")]
    pub url: String,

    /// Quality tier (450p, 760p, 1080p, 2K, 4K)
    #[arg(long, value_name = "TIER", default_value = "1080p")]
    pub quality: String,

    /// Output image format
    #[arg(short, long, value_enum, default_value = "jpg")]
    pub format: FormatArg,

    /// Output directory
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Print the preview and format matrix without downloading
    #[arg(short, long)]
    pub list: bool,

    /// HTTP timeout (e.g., 30s, 1m)
    #[arg(long, value_name = "DURATION", default_value = "30s")]
    pub timeout: humantime::Duration,

    /// Disable the lookup spinner
    #[arg(long)]
    pub no_progress: bool,

    /// Flip the persisted dark/light terminal theme
    #[arg(long)]
    pub toggle_theme: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet output (only errors)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format choice
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum FormatArg {
    /// JPEG as served by the image host (no re-encode)
    Jpg,
    /// PNG re-encode
    Png,
    /// WEBP re-encode
    Webp,
    /// All three formats
    All,
}

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbosityLevel {
    /// Quiet (only errors)
    Quiet,
    /// Normal
    Normal,
    /// Verbose (debug info)
    Verbose,
}

impl Args {
    /// Get HTTP timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        self.timeout.into()
    }

    /// Formats to download for the selected tier
    pub fn formats(&self) -> Vec<ThumbnailFormat> {
        match self.format {
            FormatArg::Jpg => vec![ThumbnailFormat::Jpg],
            FormatArg::Png => vec![ThumbnailFormat::Png],
            FormatArg::Webp => vec![ThumbnailFormat::Webp],
            FormatArg::All => ThumbnailFormat::ALL.to_vec(),
        }
    }

    /// Get output verbosity level
    pub fn verbosity_level(&self) -> VerbosityLevel {
        if self.quiet {
            VerbosityLevel::Quiet
        } else if self.verbose {
            VerbosityLevel::Verbose
        } else {
            VerbosityLevel::Normal
        }
    }
}


// Implement Default for Args to make tests work
impl Default for Args {
    fn default() -> Self {
        Self {
            url: String::new(),
            quality: "1080p".to_string(),
            format: FormatArg::Jpg,
            output: None,
            list: false,
            timeout: humantime::Duration::from(Duration::from_secs(30)),
            no_progress: false,
            toggle_theme: false,
            verbose: false,
            quiet: false,
        }
    }
}
