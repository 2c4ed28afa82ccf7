//! Output formatting and terminal rendering

use crate::cli::args::VerbosityLevel;
use crate::core::view::ThumbnailView;
use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Output formatter for ytthumb.
///
/// Notices are transient and non-blocking; errors always go to stderr.
pub struct OutputFormatter {
    verbosity: VerbosityLevel,
    dark_mode: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(verbosity: VerbosityLevel, dark_mode: bool) -> Self {
        Self {
            verbosity,
            dark_mode,
        }
    }

    /// Create the cosmetic lookup spinner
    pub fn create_spinner(&self, message: &str) -> Option<ProgressBar> {
        if self.verbosity == VerbosityLevel::Quiet {
            return None;
        }

        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        Some(spinner)
    }

    fn accent(&self, text: &str) -> ColoredString {
        if self.dark_mode {
            text.bright_cyan()
        } else {
            text.blue()
        }
    }

    fn heading(&self, text: &str) -> ColoredString {
        if self.dark_mode {
            text.bright_white().bold()
        } else {
            text.bold()
        }
    }

    /// Print info message
    pub fn info(&self, message: &str) {
        if self.verbosity != VerbosityLevel::Quiet {
            println!("ℹ️  {}", message);
        }
    }

    /// Print success message
    pub fn success(&self, message: &str) {
        if self.verbosity != VerbosityLevel::Quiet {
            println!("✅ {}", message);
        }
    }

    /// Print warning message
    pub fn warning(&self, message: &str) {
        if self.verbosity != VerbosityLevel::Quiet {
            eprintln!("⚠️  {}", message);
        }
    }

    /// Print error message
    pub fn error(&self, message: &str) {
        eprintln!("❌ {}", message);
    }

    /// Print debug message
    pub fn debug(&self, message: &str) {
        if self.verbosity == VerbosityLevel::Verbose {
            println!("🐛 {}", message);
        }
    }

    /// Print the large preview pane
    pub fn print_preview(&self, view: &ThumbnailView) {
        if self.verbosity == VerbosityLevel::Quiet {
            return;
        }

        println!();
        println!("{}", self.heading("Thumbnail Preview"));
        println!("🖼  {}", view.preview.image_url);
        println!(
            "📹 {} ({})",
            self.accent(&view.preview.title),
            view.preview.quality_name
        );
    }

    /// Print the quality tab bar and the selected tab's format cards
    pub fn print_download_options(&self, view: &ThumbnailView) {
        if self.verbosity == VerbosityLevel::Quiet {
            return;
        }

        println!();
        println!("{}", self.heading("Download Options"));

        let tab_bar: Vec<String> = view
            .tabs
            .iter()
            .enumerate()
            .map(|(index, tab)| {
                if index == view.selected_index() {
                    format!("[{}]", tab.tier.label())
                } else {
                    format!(" {} ", tab.tier.label())
                }
            })
            .collect();
        println!("  {}", self.accent(&tab_bar.join(" ")));

        if let Some(tab) = view.selected_tab() {
            for variant in &tab.variants {
                println!(
                    "  📥 {:<4} | ~{:<7} | {}",
                    variant.format.label(),
                    variant.estimated_size,
                    variant.filename
                );
            }
        }
        println!();
    }

    /// Print download complete message
    pub fn print_download_complete(&self, path: &Path, duration: Duration) {
        if self.verbosity == VerbosityLevel::Quiet {
            return;
        }

        println!(
            "✅ Saved {} ({})",
            self.accent(&path.display().to_string()),
            format_duration(duration)
        );
    }
}

/// Format duration as human-readable string
fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    if total_seconds == 0 {
        format!("{}ms", duration.as_millis())
    } else if total_seconds < 60 {
        format!("{}s", total_seconds)
    } else {
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;
        if seconds == 0 {
            format!("{}m", minutes)
        } else {
            format!("{}m {}s", minutes, seconds)
        }
    }
}
