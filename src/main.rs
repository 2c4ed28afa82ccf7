//! Main entry point for ytthumb CLI

use clap::Parser;
use std::time::Instant;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ytthumb::cli::args::Args;
use ytthumb::cli::output::OutputFormatter;
use ytthumb::convert::FormatConverter;
use ytthumb::core::{resolve_thumbnails, MetadataFetcher, QualityTier, ThumbnailView};
use ytthumb::prefs::Preferences;
use ytthumb::utils::filename::thumbnail_filename;
use ytthumb::utils::url::{extract_video_id, is_video_url};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    // Parse command line arguments
    let args = Args::parse();

    info!("Starting ytthumb with args: {:?}", args);

    // Load persisted preferences and apply the theme toggle first
    let mut prefs = Preferences::load();
    if args.toggle_theme {
        prefs.toggle_dark_mode();
        if let Err(e) = prefs.save() {
            warn!("Failed to persist theme preference: {}", e);
        }
    }

    let formatter = OutputFormatter::new(args.verbosity_level(), prefs.dark_mode);

    if args.toggle_theme {
        formatter.info(if prefs.dark_mode {
            "Dark mode enabled"
        } else {
            "Light mode enabled"
        });
        if args.url.trim().is_empty() {
            return Ok(());
        }
    }

    handle_lookup(&args, &formatter).await
}

/// Run the lookup pipeline: parse, resolve, fetch title, render, download
async fn handle_lookup(args: &Args, formatter: &OutputFormatter) -> anyhow::Result<()> {
    let url = args.url.trim();
    if url.is_empty() {
        formatter.error("Please enter a YouTube video URL");
        std::process::exit(1);
    }

    let video_id = match extract_video_id(url) {
        Ok(id) => id,
        Err(e) => {
            debug!("Video ID extraction failed: {} (youtube host: {})", e, is_video_url(url));
            formatter.error("Invalid YouTube URL. Please enter a valid YouTube video URL");
            std::process::exit(1);
        }
    };
    info!("Extracted video ID: {}", video_id);

    let Some(tier) = QualityTier::from_label(&args.quality) else {
        formatter.error(&format!(
            "Unknown quality tier '{}'. Choose one of: 450p, 760p, 1080p, 2K, 4K",
            args.quality
        ));
        std::process::exit(1);
    };

    let client = reqwest::Client::builder()
        .timeout(args.timeout_duration())
        .build()?;

    let spinner = if args.no_progress {
        None
    } else {
        formatter.create_spinner("Fetching thumbnails...")
    };

    let candidates = resolve_thumbnails(&video_id);
    let fetcher = MetadataFetcher::new(client.clone());
    let (title, title_fetched) = fetcher.fetch_title_or_default(&video_id).await;

    let mut view = ThumbnailView::build(&title, &candidates);
    view.select(tier);

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    if title_fetched {
        formatter.success("Thumbnails loaded successfully!");
    } else {
        formatter.info("Thumbnails loaded, but video title could not be fetched.");
    }

    formatter.print_preview(&view);
    formatter.print_download_options(&view);

    if args.list {
        return Ok(());
    }

    let Some(tab) = view.selected_tab() else {
        return Ok(());
    };

    let output_dir = match &args.output {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let converter = FormatConverter::new(client, output_dir);

    for format in args.formats() {
        let filename = thumbnail_filename(tab.tier, format);
        formatter.info(&format!("Preparing {} download...", format.label()));

        let start = Instant::now();
        match converter.download_as(&tab.source_url, &filename, format).await {
            Ok(outcome) => {
                if outcome.fell_back() {
                    formatter.warning(&format!(
                        "Failed to convert to {}. Downloaded as JPG instead.",
                        format.label()
                    ));
                }
                formatter.print_download_complete(outcome.path(), start.elapsed());
            }
            Err(e) => {
                formatter.error(&format!("{} download failed: {}", format.label(), e));
                return Err(e.into());
            }
        }
    }

    Ok(())
}

/// Initialize logging system
fn init_logging() -> anyhow::Result<()> {
    // Get log level from environment or default to info
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    // Parse log level
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .init();

    Ok(())
}
