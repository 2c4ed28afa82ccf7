//! URL utilities for extracting video IDs from YouTube URL shapes

use crate::error::ThumbError;
use regex::Regex;
use url::Url;

/// Extract a video ID from the supported YouTube URL shapes.
///
/// The shapes are tried in fixed priority order: `watch?v=`, `/embed/`,
/// `/v/`, `/user/.../?v=`, `youtu.be/`, `/shorts/`. The first capturing
/// group of the first matching shape wins; each shape stops capturing at
/// its own delimiter (`&` for query-style shapes, `?` for path-style
/// shapes). The captured token is not validated further, so partial URLs
/// with unexpected separators can yield odd substrings.
pub fn extract_video_id(input: &str) -> Result<String, ThumbError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ThumbError::EmptyInput);
    }

    let shapes = [
        r"(?i)(?:https?://)?(?:www\.)?youtube\.com/watch\?v=([^&]+)",
        r"(?i)(?:https?://)?(?:www\.)?youtube\.com/embed/([^?]+)",
        r"(?i)(?:https?://)?(?:www\.)?youtube\.com/v/([^?]+)",
        r"(?i)(?:https?://)?(?:www\.)?youtube\.com/user/[^/]+/?\?v=([^&]+)",
        r"(?i)(?:https?://)?(?:www\.)?youtu\.be/([^?]+)",
        r"(?i)(?:https?://)?(?:www\.)?youtube\.com/shorts/([^?]+)",
    ];

    for shape in shapes {
        let re = Regex::new(shape).unwrap();
        if let Some(captures) = re.captures(input) {
            if let Some(id) = captures.get(1) {
                return Ok(id.as_str().to_string());
            }
        }
    }

    Err(ThumbError::UnrecognizedUrl(input.to_string()))
}

/// Check if a string parses as a URL on a YouTube host
pub fn is_video_url(url: &str) -> bool {
    if let Ok(parsed) = Url::parse(url) {
        matches!(
            parsed.host_str().map(|h| h.to_ascii_lowercase()).as_deref(),
            Some("youtube.com") | Some("www.youtube.com") | Some("youtu.be")
        )
    } else {
        false
    }
}
