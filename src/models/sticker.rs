//! Sticker overlay and background tuning models.

use serde::{Deserialize, Serialize};

/// Decorative overlay kind. `none` is a sentinel meaning "render nothing".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OverlayType {
    Hearts,
    Stars,
    Sparkles,
    Confetti,
    None,
}

/// Anchor point for a sticker on the slide.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StickerPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StickerSize {
    Sm,
    Md,
    Lg,
}

/// A decorative, non-interactive element anchored to a slide.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sticker {
    #[serde(rename = "type")]
    pub sticker_type: OverlayType,
    pub position: StickerPosition,
    pub size: StickerSize,
    /// 0.0 (invisible) to 1.0 (opaque). Absent means fully opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
}

fn default_knob() -> u8 {
    50
}

/// Tuning knobs for animated backgrounds, each 0-100. Every knob defaults
/// to 50 when a document predates it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundSettings {
    #[serde(default = "default_knob")]
    pub intensity: u8,
    #[serde(default = "default_knob")]
    pub speed: u8,
    #[serde(default = "default_knob")]
    pub density: u8,
}

impl Default for BackgroundSettings {
    fn default() -> Self {
        Self {
            intensity: 50,
            speed: 50,
            density: 50,
        }
    }
}

impl BackgroundSettings {
    /// True when all knobs sit inside the 0-100 range.
    pub fn is_valid(&self) -> bool {
        self.intensity <= 100 && self.speed <= 100 && self.density <= 100
    }
}
