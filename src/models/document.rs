//! SlidesDocument aggregate matching the frontend SlidesData interface.

use serde::{Deserialize, Serialize};

use super::Slide;

/// Background music settings for the whole presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BgmConfig {
    pub enabled: bool,
    /// External URL or inline data: payload.
    pub url: String,
    /// Display name shown in the admin dashboard.
    pub filename: String,
    /// Playback volume, 0-100.
    pub volume: u8,
    #[serde(default)]
    pub auto_play: bool,
}

/// The full persisted aggregate: slide deck plus presentation metadata.
///
/// `slides` is the only field required on import; everything else defaults
/// so that documents written by older versions still load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlidesDocument {
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    /// RFC 3339 timestamp, rewritten on every persisted mutation.
    #[serde(default)]
    pub last_updated: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bgm_config: Option<BgmConfig>,
}

impl SlidesDocument {
    /// Slides sorted ascending by `order`. The display sequence is always
    /// derived here, never stored separately.
    pub fn sorted_slides(&self) -> Vec<Slide> {
        let mut slides = self.slides.clone();
        slides.sort_by_key(|s| s.order);
        slides
    }
}

/// Request body for replacing the presentation title and subtitle.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMetaRequest {
    pub title: String,
    pub subtitle: String,
}
