//! Video title lookup via the oEmbed API

use crate::error::ThumbError;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

/// Default title-lookup endpoint
pub const OEMBED_ENDPOINT: &str = "https://www.youtube.com/oembed";

/// Title substituted when the lookup fails
pub const FALLBACK_TITLE: &str = "YouTube Video";

/// Fetches video metadata from the oEmbed endpoint.
///
/// Only the `title` field of the response is consumed.
pub struct MetadataFetcher {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct OEmbedResponse {
    title: String,
}

impl MetadataFetcher {
    /// Create a fetcher against the default endpoint
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            endpoint: OEMBED_ENDPOINT.to_string(),
        }
    }

    /// Override the lookup endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Fetch the video title. One request, no retries.
    pub async fn fetch_title(&self, video_id: &str) -> Result<String, ThumbError> {
        let watch_url = format!("https://www.youtube.com/watch?v={}", video_id);
        let url = Url::parse_with_params(
            &self.endpoint,
            &[("url", watch_url.as_str()), ("format", "json")],
        )?;
        debug!("Fetching video title from {}", url);

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ThumbError::MetadataFetch(format!(
                "status {}",
                response.status()
            )));
        }

        let body: OEmbedResponse = response.json().await?;
        Ok(body.title)
    }

    /// Fetch the title, substituting [`FALLBACK_TITLE`] on any failure.
    ///
    /// Metadata failure never blocks thumbnail presentation. The second
    /// tuple element reports whether the lookup succeeded so callers can
    /// surface a notice.
    pub async fn fetch_title_or_default(&self, video_id: &str) -> (String, bool) {
        match self.fetch_title(video_id).await {
            Ok(title) => (title, true),
            Err(e) => {
                warn!("Title lookup failed ({}), using fallback title", e);
                (FALLBACK_TITLE.to_string(), false)
            }
        }
    }
}
