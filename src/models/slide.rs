//! Slide model matching the frontend Slide interface.

use serde::{Deserialize, Serialize};

use super::{BackgroundSettings, MediaBlock, Sticker};

/// Content kind of a slide, deciding which content fields are rendered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Article,
    Image,
    Video,
    Mixed,
}

/// Background effect identifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundType {
    GradientRomantic,
    GradientTeal,
    GradientPink,
    Particles,
    Hearts,
    Stars,
    Solid,
}

/// Cross-slide animation. Purely a rendering hint for the viewer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransitionType {
    Fade,
    Slide,
    Scale,
}

/// One unit of presented content, with its own background and overlays.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: String,
    pub title: String,
    pub content_type: ContentType,
    /// HTML-ish body for `article`/`mixed` slides, or an image caption.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rich_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos: Option<Vec<String>>,
    /// Interleaved text/media layout for `mixed` slides. Newer documents
    /// only; absent in older exports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_blocks: Option<Vec<MediaBlock>>,
    pub background: BackgroundType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_settings: Option<BackgroundSettings>,
    #[serde(default)]
    pub overlays: Vec<Sticker>,
    pub transition: TransitionType,
    /// Zero-based position in the deck. The store keeps order values a
    /// dense permutation of 0..n-1 across every mutation.
    pub order: i64,
}

/// Request body for creating a new slide. `id` and `order` are assigned by
/// the store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSlideRequest {
    pub title: String,
    pub content_type: ContentType,
    #[serde(default)]
    pub rich_text: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub videos: Option<Vec<String>>,
    #[serde(default)]
    pub media_blocks: Option<Vec<MediaBlock>>,
    pub background: BackgroundType,
    #[serde(default)]
    pub background_settings: Option<BackgroundSettings>,
    #[serde(default)]
    pub overlays: Vec<Sticker>,
    pub transition: TransitionType,
}

/// Request body for partially updating a slide. Absent fields are left
/// untouched; `id` and `order` are never patchable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSlideRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content_type: Option<ContentType>,
    #[serde(default)]
    pub rich_text: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub videos: Option<Vec<String>>,
    #[serde(default)]
    pub media_blocks: Option<Vec<MediaBlock>>,
    #[serde(default)]
    pub background: Option<BackgroundType>,
    #[serde(default)]
    pub background_settings: Option<BackgroundSettings>,
    #[serde(default)]
    pub overlays: Option<Vec<Sticker>>,
    #[serde(default)]
    pub transition: Option<TransitionType>,
}

/// Request body for moving a slide within the sorted sequence.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderSlidesRequest {
    pub from_index: usize,
    pub to_index: usize,
}
