//! Built-in default document used on first load and after a reset.

use chrono::Utc;

use crate::models::{
    BackgroundType, ContentType, OverlayType, Slide, SlidesDocument, Sticker, StickerPosition,
    StickerSize, TransitionType,
};

fn sticker(sticker_type: OverlayType, position: StickerPosition, size: StickerSize) -> Sticker {
    Sticker {
        sticker_type,
        position,
        size,
        opacity: None,
    }
}

/// The five-slide sample deck shipped with the app. Covers every content
/// type the editor offers except video, all three transitions, and a mix of
/// background and overlay effects.
pub fn default_document() -> SlidesDocument {
    SlidesDocument {
        title: "Our Year in Slides".to_string(),
        subtitle: "A little deck for a big night".to_string(),
        last_updated: Utc::now().to_rfc3339(),
        bgm_config: None,
        slides: vec![
            Slide {
                id: "1".to_string(),
                title: "Welcome".to_string(),
                content_type: ContentType::Article,
                rich_text: Some(
                    "<div class=\"text-center\">\
                     <h2>Welcome</h2>\
                     <p>When you open this page, the countdown has already begun.</p>\
                     <p>Swipe right to start the tour.</p>\
                     </div>"
                        .to_string(),
                ),
                images: None,
                videos: None,
                media_blocks: None,
                background: BackgroundType::GradientRomantic,
                background_settings: None,
                overlays: vec![sticker(
                    OverlayType::Hearts,
                    StickerPosition::Center,
                    StickerSize::Md,
                )],
                transition: TransitionType::Fade,
                order: 0,
            },
            Slide {
                id: "2".to_string(),
                title: "How It Started".to_string(),
                content_type: ContentType::Mixed,
                rich_text: Some(
                    "<div><h2>How It Started</h2>\
                     <p>Remember the first day? This is where the story begins.</p></div>"
                        .to_string(),
                ),
                images: Some(vec![
                    "https://images.unsplash.com/photo-1518199266791-5375a83190b7?w=800&q=80"
                        .to_string(),
                ]),
                videos: None,
                media_blocks: None,
                background: BackgroundType::GradientTeal,
                background_settings: None,
                overlays: vec![sticker(
                    OverlayType::Sparkles,
                    StickerPosition::TopRight,
                    StickerSize::Sm,
                )],
                transition: TransitionType::Slide,
                order: 1,
            },
            Slide {
                id: "3".to_string(),
                title: "Best Moments".to_string(),
                content_type: ContentType::Image,
                rich_text: Some(
                    "<p class=\"text-center\">Every day together is a highlight reel.</p>"
                        .to_string(),
                ),
                images: Some(vec![
                    "https://images.unsplash.com/photo-1529333166437-7750a6dd5a70?w=800&q=80"
                        .to_string(),
                    "https://images.unsplash.com/photo-1516589178581-6cd7833ae3b2?w=800&q=80"
                        .to_string(),
                ]),
                videos: None,
                media_blocks: None,
                background: BackgroundType::GradientPink,
                background_settings: None,
                overlays: vec![sticker(
                    OverlayType::Stars,
                    StickerPosition::Center,
                    StickerSize::Lg,
                )],
                transition: TransitionType::Scale,
                order: 2,
            },
            Slide {
                id: "4".to_string(),
                title: "Wishes".to_string(),
                content_type: ContentType::Article,
                rich_text: Some(
                    "<div class=\"text-center\"><h2>Wishes for the New Year</h2>\
                     <p>More laughter. More road trips. More of this.</p></div>"
                        .to_string(),
                ),
                images: None,
                videos: None,
                media_blocks: None,
                background: BackgroundType::Hearts,
                background_settings: None,
                overlays: vec![sticker(
                    OverlayType::Confetti,
                    StickerPosition::Center,
                    StickerSize::Lg,
                )],
                transition: TransitionType::Fade,
                order: 3,
            },
            Slide {
                id: "5".to_string(),
                title: "The Last Word".to_string(),
                content_type: ContentType::Article,
                rich_text: Some(
                    "<div class=\"text-center\"><h2>The Last Word</h2>\
                     <p>Past, present, future: you are the whole deck.</p>\
                     <p>Happy New Year.</p></div>"
                        .to_string(),
                ),
                images: None,
                videos: None,
                media_blocks: None,
                background: BackgroundType::GradientRomantic,
                background_settings: None,
                overlays: vec![
                    sticker(OverlayType::Hearts, StickerPosition::TopLeft, StickerSize::Sm),
                    sticker(OverlayType::Hearts, StickerPosition::TopRight, StickerSize::Sm),
                    sticker(
                        OverlayType::Sparkles,
                        StickerPosition::BottomLeft,
                        StickerSize::Md,
                    ),
                    sticker(
                        OverlayType::Sparkles,
                        StickerPosition::BottomRight,
                        StickerSize::Md,
                    ),
                ],
                transition: TransitionType::Scale,
                order: 4,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_is_well_formed() {
        let doc = default_document();
        assert_eq!(doc.slides.len(), 5);

        // Dense 0..n-1 order and unique ids
        let mut orders: Vec<i64> = doc.slides.iter().map(|s| s.order).collect();
        orders.sort_unstable();
        assert_eq!(orders, (0..5).collect::<Vec<i64>>());

        let mut ids: Vec<&str> = doc.slides.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }
}
