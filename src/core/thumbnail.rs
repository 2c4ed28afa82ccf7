//! Thumbnail quality tiers, candidate resolution and size estimation

use serde::{Deserialize, Serialize};

/// Image host serving public video thumbnails
pub const THUMBNAIL_HOST: &str = "https://img.youtube.com/vi";

/// Named quality tier for a thumbnail.
///
/// Tiers are presentational buckets used for labeling and size estimation;
/// they are not guaranteed to reflect the source image's true pixel
/// dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityTier {
    /// Standard quality (450p)
    Sd450,
    /// HD quality (760p)
    Hd760,
    /// Full HD (1080p)
    FullHd1080,
    /// 2K quality
    Qhd2k,
    /// 4K quality
    Uhd4k,
}

impl QualityTier {
    /// All tiers in fixed presentation order
    pub const ALL: [QualityTier; 5] = [
        QualityTier::Sd450,
        QualityTier::Hd760,
        QualityTier::FullHd1080,
        QualityTier::Qhd2k,
        QualityTier::Uhd4k,
    ];

    /// Short tier label used in tabs and filenames
    pub fn label(&self) -> &'static str {
        match self {
            QualityTier::Sd450 => "450p",
            QualityTier::Hd760 => "760p",
            QualityTier::FullHd1080 => "1080p",
            QualityTier::Qhd2k => "2K",
            QualityTier::Uhd4k => "4K",
        }
    }

    /// Human-readable tier name shown next to the preview
    pub fn display_name(&self) -> &'static str {
        match self {
            QualityTier::Sd450 => "Standard Quality (450p)",
            QualityTier::Hd760 => "HD Quality (760p)",
            QualityTier::FullHd1080 => "Full HD (1080p)",
            QualityTier::Qhd2k => "2K Quality",
            QualityTier::Uhd4k => "4K Quality",
        }
    }

    /// Image-host asset name backing this tier.
    ///
    /// The host only serves three distinct assets; the 2K and 4K tiers
    /// both resolve to `maxresdefault`, same as 1080p.
    pub fn asset_name(&self) -> &'static str {
        match self {
            QualityTier::Sd450 => "hqdefault",
            QualityTier::Hd760 => "sddefault",
            QualityTier::FullHd1080 | QualityTier::Qhd2k | QualityTier::Uhd4k => "maxresdefault",
        }
    }

    /// Estimated base size in KB for a JPG at this tier
    pub fn base_kb(&self) -> f64 {
        match self {
            QualityTier::Sd450 => 45.0,
            QualityTier::Hd760 => 100.0,
            QualityTier::FullHd1080 => 200.0,
            QualityTier::Qhd2k => 400.0,
            QualityTier::Uhd4k => 800.0,
        }
    }

    /// Parse a tier from its label, case-insensitively
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.label().eq_ignore_ascii_case(label.trim()))
    }
}

/// Target encoding for a downloaded thumbnail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThumbnailFormat {
    /// JPEG, the format the image host serves natively
    Jpg,
    /// PNG (lossless re-encode)
    Png,
    /// WEBP re-encode
    Webp,
}

impl ThumbnailFormat {
    /// All formats in fixed card order
    pub const ALL: [ThumbnailFormat; 3] = [
        ThumbnailFormat::Jpg,
        ThumbnailFormat::Png,
        ThumbnailFormat::Webp,
    ];

    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ThumbnailFormat::Jpg => "jpg",
            ThumbnailFormat::Png => "png",
            ThumbnailFormat::Webp => "webp",
        }
    }

    /// MIME type for this format
    pub fn mime_type(&self) -> &'static str {
        match self {
            ThumbnailFormat::Jpg => "image/jpeg",
            ThumbnailFormat::Png => "image/png",
            ThumbnailFormat::Webp => "image/webp",
        }
    }

    /// Upper-case label shown on format cards
    pub fn label(&self) -> &'static str {
        match self {
            ThumbnailFormat::Jpg => "JPG",
            ThumbnailFormat::Png => "PNG",
            ThumbnailFormat::Webp => "WEBP",
        }
    }

    /// Size multiplier relative to the JPG baseline
    pub fn size_factor(&self) -> f64 {
        match self {
            ThumbnailFormat::Jpg => 1.0,
            // PNG is typically 2-3x larger than JPG
            ThumbnailFormat::Png => 2.5,
            // WebP is typically 25-35% smaller than JPG
            ThumbnailFormat::Webp => 0.7,
        }
    }
}

/// A single thumbnail candidate resolved for a video ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailCandidate {
    /// Human-readable quality name
    pub name: String,
    /// Source URL on the image host
    pub url: String,
    /// Quality tier backing this candidate
    pub tier: QualityTier,
}

/// Resolve the fixed thumbnail candidate list for a video ID.
///
/// Pure string templating over the image host's asset names; no network
/// call and no check that the assets actually exist for this video.
/// Always returns exactly five entries in tier order.
pub fn resolve_thumbnails(video_id: &str) -> Vec<ThumbnailCandidate> {
    QualityTier::ALL
        .into_iter()
        .map(|tier| ThumbnailCandidate {
            name: tier.display_name().to_string(),
            url: format!("{}/{}/{}.jpg", THUMBNAIL_HOST, video_id, tier.asset_name()),
            tier,
        })
        .collect()
}

/// Estimate the file size for a tier/format pair, formatted as KB below
/// 1000 and one-decimal MB at or above it.
///
/// Derived from a static table, never measured from actual bytes.
pub fn estimated_file_size(tier: QualityTier, format: ThumbnailFormat) -> String {
    let kb = tier.base_kb() * format.size_factor();
    if kb >= 1000.0 {
        format!("{:.1} MB", kb / 1000.0)
    } else {
        format!("{} KB", kb.round() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_thumbnails_fixed_list() {
        let candidates = resolve_thumbnails("dQw4w9WgXcQ");
        assert_eq!(candidates.len(), 5);

        let tiers: Vec<QualityTier> = candidates.iter().map(|c| c.tier).collect();
        assert_eq!(tiers, QualityTier::ALL);

        assert_eq!(
            candidates[0].url,
            "https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg"
        );
        assert_eq!(
            candidates[1].url,
            "https://img.youtube.com/vi/dQw4w9WgXcQ/sddefault.jpg"
        );
        assert_eq!(
            candidates[2].url,
            "https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg"
        );
    }

    #[test]
    fn test_resolve_thumbnails_2k_4k_share_asset() {
        let candidates = resolve_thumbnails("abc");
        assert_eq!(candidates[3].url, candidates[4].url);
        assert_eq!(candidates[3].url, candidates[2].url);
    }

    #[test]
    fn test_tier_labels() {
        let labels: Vec<&str> = QualityTier::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["450p", "760p", "1080p", "2K", "4K"]);
    }

    #[test]
    fn test_tier_from_label() {
        assert_eq!(QualityTier::from_label("1080p"), Some(QualityTier::FullHd1080));
        assert_eq!(QualityTier::from_label("2k"), Some(QualityTier::Qhd2k));
        assert_eq!(QualityTier::from_label(" 4K "), Some(QualityTier::Uhd4k));
        assert_eq!(QualityTier::from_label("8K"), None);
        assert_eq!(QualityTier::from_label(""), None);
    }

    #[test]
    fn test_estimated_file_size_png_ratio() {
        assert_eq!(
            estimated_file_size(QualityTier::FullHd1080, ThumbnailFormat::Png),
            "500 KB"
        );
        assert_eq!(
            estimated_file_size(QualityTier::FullHd1080, ThumbnailFormat::Jpg),
            "200 KB"
        );
    }

    #[test]
    fn test_estimated_file_size_kb_and_mb_thresholds() {
        assert_eq!(
            estimated_file_size(QualityTier::Uhd4k, ThumbnailFormat::Jpg),
            "800 KB"
        );
        assert_eq!(
            estimated_file_size(QualityTier::Qhd2k, ThumbnailFormat::Png),
            "1.0 MB"
        );
        assert_eq!(
            estimated_file_size(QualityTier::Uhd4k, ThumbnailFormat::Png),
            "2.0 MB"
        );
        assert_eq!(
            estimated_file_size(QualityTier::Sd450, ThumbnailFormat::Webp),
            "32 KB"
        );
    }

    #[test]
    fn test_format_accessors() {
        assert_eq!(ThumbnailFormat::Jpg.extension(), "jpg");
        assert_eq!(ThumbnailFormat::Png.extension(), "png");
        assert_eq!(ThumbnailFormat::Webp.extension(), "webp");
        assert_eq!(ThumbnailFormat::Jpg.mime_type(), "image/jpeg");
        assert_eq!(ThumbnailFormat::Png.mime_type(), "image/png");
        assert_eq!(ThumbnailFormat::Webp.mime_type(), "image/webp");
    }
}
