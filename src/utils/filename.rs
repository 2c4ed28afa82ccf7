//! Safe filename generation utilities

use crate::core::thumbnail::{QualityTier, ThumbnailFormat};
use regex::Regex;
use std::path::Path;

/// Default stem for synthesized thumbnail filenames
pub const DEFAULT_FILENAME_STEM: &str = "RAO RAMZAN YT DOWNLOADER";

/// Build the download filename for a quality tier and format,
/// e.g. `RAO RAMZAN YT DOWNLOADER - 1080p.png`
pub fn thumbnail_filename(tier: QualityTier, format: ThumbnailFormat) -> String {
    format!(
        "{} - {}.{}",
        DEFAULT_FILENAME_STEM,
        tier.label(),
        format.extension()
    )
}

/// Convert a title to a safe filename by removing/replacing invalid characters
pub fn to_safe_filename(title: &str, extension: &str) -> String {
    let invalid_chars = Regex::new(r#"[<>:"/\\|?*\x00-\x1f]"#).unwrap();
    let mut safe_title = invalid_chars.replace_all(title, "_").to_string();

    // Remove leading/trailing dots and spaces
    safe_title = safe_title
        .trim_matches(|c: char| c == '.' || c == ' ')
        .to_string();

    // Limit length (Windows has 255 char limit, be conservative)
    if safe_title.len() > 200 {
        safe_title.truncate(200);
        safe_title = safe_title.trim_end().to_string();
    }

    if safe_title.is_empty() {
        safe_title = "thumbnail".to_string();
    }

    if !extension.is_empty() {
        let ext = if extension.starts_with('.') {
            extension.to_string()
        } else {
            format!(".{}", extension)
        };
        format!("{}{}", safe_title, ext)
    } else {
        safe_title
    }
}

/// Generate a unique filename by appending a number if the file already exists
pub fn generate_unique_filename(base_path: &Path, filename: &str) -> std::io::Result<String> {
    let mut counter = 1;
    let mut final_filename = filename.to_string();

    while base_path.join(&final_filename).exists() {
        let path = Path::new(filename);
        let stem = path.file_stem().unwrap_or_default();
        let extension = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        final_filename = format!("{} ({}){}", stem.to_string_lossy(), counter, extension);
        counter += 1;

        // Prevent infinite loop
        if counter > 10000 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "Too many files with similar names",
            ));
        }
    }

    Ok(final_filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbnail_filename() {
        assert_eq!(
            thumbnail_filename(QualityTier::FullHd1080, ThumbnailFormat::Png),
            "RAO RAMZAN YT DOWNLOADER - 1080p.png"
        );
        assert_eq!(
            thumbnail_filename(QualityTier::Uhd4k, ThumbnailFormat::Jpg),
            "RAO RAMZAN YT DOWNLOADER - 4K.jpg"
        );
        assert_eq!(
            thumbnail_filename(QualityTier::Sd450, ThumbnailFormat::Webp),
            "RAO RAMZAN YT DOWNLOADER - 450p.webp"
        );
    }

    #[test]
    fn test_to_safe_filename() {
        assert_eq!(
            to_safe_filename("Test Video: Title", "jpg"),
            "Test Video_ Title.jpg"
        );
        assert_eq!(
            to_safe_filename("Video with <invalid> chars", "png"),
            "Video with _invalid_ chars.png"
        );
        assert_eq!(to_safe_filename("", "jpg"), "thumbnail.jpg");
        assert_eq!(
            to_safe_filename("RAO RAMZAN YT DOWNLOADER - 2K", "webp"),
            "RAO RAMZAN YT DOWNLOADER - 2K.webp"
        );
    }

    #[test]
    fn test_generate_unique_filename() {
        let temp_dir = tempfile::tempdir().unwrap();
        let base_path = temp_dir.path();

        let first = generate_unique_filename(base_path, "thumb.jpg").unwrap();
        assert_eq!(first, "thumb.jpg");

        std::fs::write(base_path.join("thumb.jpg"), b"x").unwrap();
        let second = generate_unique_filename(base_path, "thumb.jpg").unwrap();
        assert_eq!(second, "thumb (1).jpg");
    }
}
