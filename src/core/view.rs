//! Pure view model for the thumbnail preview and format matrix.
//!
//! Nothing here touches the terminal or the network; rendering lives in
//! `cli::output` and consumes these structures as-is.

use crate::core::thumbnail::{
    estimated_file_size, QualityTier, ThumbnailCandidate, ThumbnailFormat,
};
use crate::utils::filename::thumbnail_filename;

/// One downloadable format card inside a quality tab
#[derive(Debug, Clone, PartialEq)]
pub struct FormatVariant {
    pub format: ThumbnailFormat,
    /// Synthesized download filename
    pub filename: String,
    /// Estimated size label from the static table
    pub estimated_size: String,
}

/// One quality tab holding the three format cards for its tier
#[derive(Debug, Clone, PartialEq)]
pub struct QualityTab {
    pub tier: QualityTier,
    pub source_url: String,
    pub variants: Vec<FormatVariant>,
}

/// The large preview bound to the highest-resolution candidate
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewPane {
    pub title: String,
    pub image_url: String,
    pub quality_name: String,
}

/// Complete result view: preview plus the tabbed quality/format matrix.
///
/// Tab selection is single-select and mutually exclusive; exactly one
/// tab is selected at any time, the first by default on (re)build.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailView {
    pub preview: PreviewPane,
    pub tabs: Vec<QualityTab>,
    selected: usize,
}

impl ThumbnailView {
    /// Build the view from a title and the resolved candidate list
    pub fn build(title: &str, candidates: &[ThumbnailCandidate]) -> Self {
        let preview_candidate = candidates
            .iter()
            .find(|c| c.tier == QualityTier::FullHd1080)
            .or_else(|| candidates.last());

        let preview = PreviewPane {
            title: title.to_string(),
            image_url: preview_candidate.map(|c| c.url.clone()).unwrap_or_default(),
            quality_name: preview_candidate.map(|c| c.name.clone()).unwrap_or_default(),
        };

        let tabs = candidates
            .iter()
            .map(|candidate| QualityTab {
                tier: candidate.tier,
                source_url: candidate.url.clone(),
                variants: ThumbnailFormat::ALL
                    .into_iter()
                    .map(|format| FormatVariant {
                        format,
                        filename: thumbnail_filename(candidate.tier, format),
                        estimated_size: estimated_file_size(candidate.tier, format),
                    })
                    .collect(),
            })
            .collect();

        Self {
            preview,
            tabs,
            selected: 0,
        }
    }

    /// Select the tab for a tier. Returns false and leaves the selection
    /// unchanged when the tier has no tab.
    pub fn select(&mut self, tier: QualityTier) -> bool {
        match self.tabs.iter().position(|tab| tab.tier == tier) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    /// Currently selected tab
    pub fn selected_tab(&self) -> Option<&QualityTab> {
        self.tabs.get(self.selected)
    }

    /// Index of the currently selected tab
    pub fn selected_index(&self) -> usize {
        self.selected
    }
}
