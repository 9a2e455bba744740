//! Document store: the in-memory slides document plus its persistence slot.
//!
//! All structural operations over the deck live here. Every mutation is a
//! read-modify-write under one write lock, stamps `lastUpdated`, and then
//! persists the full serialized document. In-memory state is the source of
//! truth: a failed write to the kv slot is logged but does not roll the
//! mutation back; the next successful save rewrites the whole document.

mod defaults;
mod media;

pub use defaults::default_document;
pub use media::VIDEO_MAX_BYTES;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::db::{KvStore, DOCUMENT_KEY};
use crate::errors::AppError;
use crate::models::{
    BgmConfig, CreateSlideRequest, Slide, SlidesDocument, UpdateSlideRequest,
};

/// Holds the current slides document and writes it through to the kv slot.
pub struct DocumentStore {
    kv: KvStore,
    doc: RwLock<SlidesDocument>,
}

impl DocumentStore {
    /// Load the persisted document, falling back to the built-in default
    /// when the slot is empty or unparseable. Never fatal.
    pub async fn load(kv: KvStore) -> Result<Self, AppError> {
        let doc = match kv.get(DOCUMENT_KEY).await? {
            Some(blob) => match serde_json::from_str::<SlidesDocument>(&blob) {
                Ok(doc) => doc,
                Err(err) => {
                    tracing::warn!("Stored document is unreadable, using default: {}", err);
                    default_document()
                }
            },
            None => default_document(),
        };

        Ok(Self {
            kv,
            doc: RwLock::new(doc),
        })
    }

    /// Current document.
    pub async fn document(&self) -> SlidesDocument {
        self.doc.read().await.clone()
    }

    /// Timestamp of the last persisted mutation.
    pub async fn last_updated(&self) -> String {
        self.doc.read().await.last_updated.clone()
    }

    /// Slides sorted ascending by `order`, derived on every read.
    pub async fn sorted_slides(&self) -> Vec<Slide> {
        self.doc.read().await.sorted_slides()
    }

    /// Append a new slide with a fresh id and `order = current count`.
    pub async fn add_slide(&self, request: CreateSlideRequest) -> Result<Slide, AppError> {
        validate_slide_content(
            request.videos.as_deref(),
            request.media_blocks.as_deref(),
            request.background_settings.as_ref(),
        )?;

        self.commit(|doc| {
            let slide = Slide {
                id: uuid::Uuid::new_v4().to_string(),
                title: request.title,
                content_type: request.content_type,
                rich_text: request.rich_text,
                images: request.images,
                videos: request.videos,
                media_blocks: request.media_blocks,
                background: request.background,
                background_settings: request.background_settings,
                overlays: request.overlays,
                transition: request.transition,
                order: doc.slides.len() as i64,
            };
            doc.slides.push(slide.clone());
            Ok(slide)
        })
        .await
    }

    /// Shallow-merge a patch into the slide with the given id.
    pub async fn update_slide(
        &self,
        id: &str,
        patch: UpdateSlideRequest,
    ) -> Result<Slide, AppError> {
        validate_slide_content(
            patch.videos.as_deref(),
            patch.media_blocks.as_deref(),
            patch.background_settings.as_ref(),
        )?;

        self.commit(|doc| {
            let slide = doc
                .slides
                .iter_mut()
                .find(|s| s.id == id)
                .ok_or_else(|| AppError::NotFound(format!("Slide {} not found", id)))?;

            if let Some(title) = patch.title {
                slide.title = title;
            }
            if let Some(content_type) = patch.content_type {
                slide.content_type = content_type;
            }
            if let Some(rich_text) = patch.rich_text {
                slide.rich_text = Some(rich_text);
            }
            if let Some(images) = patch.images {
                slide.images = Some(images);
            }
            if let Some(videos) = patch.videos {
                slide.videos = Some(videos);
            }
            if let Some(media_blocks) = patch.media_blocks {
                slide.media_blocks = Some(media_blocks);
            }
            if let Some(background) = patch.background {
                slide.background = background;
            }
            if let Some(background_settings) = patch.background_settings {
                slide.background_settings = Some(background_settings);
            }
            if let Some(overlays) = patch.overlays {
                slide.overlays = overlays;
            }
            if let Some(transition) = patch.transition {
                slide.transition = transition;
            }

            Ok(slide.clone())
        })
        .await
    }

    /// Remove a slide and renumber the survivors to a dense 0..n-1 order.
    /// Refuses to empty the deck.
    pub async fn delete_slide(&self, id: &str) -> Result<(), AppError> {
        self.commit(|doc| {
            if !doc.slides.iter().any(|s| s.id == id) {
                return Err(AppError::NotFound(format!("Slide {} not found", id)));
            }
            if doc.slides.len() == 1 {
                return Err(AppError::Validation(
                    "Cannot delete the last remaining slide".to_string(),
                ));
            }

            doc.slides.retain(|s| s.id != id);
            renumber(&mut doc.slides);
            Ok(())
        })
        .await
    }

    /// Move the slide at `from_index` in the sorted sequence to `to_index`,
    /// then renumber. Indices are positions in the sorted sequence, not ids.
    pub async fn reorder_slides(
        &self,
        from_index: usize,
        to_index: usize,
    ) -> Result<Vec<Slide>, AppError> {
        self.commit(|doc| {
            let count = doc.slides.len();
            if from_index >= count || to_index >= count {
                return Err(AppError::Validation(format!(
                    "Reorder indices out of range: {} -> {} with {} slides",
                    from_index, to_index, count
                )));
            }

            let mut sequence = doc.sorted_slides();
            let moved = sequence.remove(from_index);
            sequence.insert(to_index, moved);
            for (index, slide) in sequence.iter_mut().enumerate() {
                slide.order = index as i64;
            }
            doc.slides = sequence;
            Ok(doc.slides.clone())
        })
        .await
    }

    /// Replace the presentation title and subtitle.
    pub async fn update_meta(
        &self,
        title: String,
        subtitle: String,
    ) -> Result<SlidesDocument, AppError> {
        self.commit(|doc| {
            doc.title = title;
            doc.subtitle = subtitle;
            Ok(doc.clone())
        })
        .await
    }

    /// Replace the background-music settings wholesale.
    pub async fn update_bgm(&self, config: BgmConfig) -> Result<SlidesDocument, AppError> {
        media::validate_bgm(&config)?;

        self.commit(|doc| {
            doc.bgm_config = Some(config);
            Ok(doc.clone())
        })
        .await
    }

    /// Replace the whole document with the built-in default.
    pub async fn reset_to_default(&self) -> Result<SlidesDocument, AppError> {
        self.commit(|doc| {
            *doc = default_document();
            Ok(doc.clone())
        })
        .await
    }

    /// Pretty-printed serialization of the current document.
    pub async fn export_json(&self) -> Result<String, AppError> {
        let doc = self.doc.read().await;
        serde_json::to_string_pretty(&*doc)
            .map_err(|e| AppError::Internal(format!("Failed to serialize document: {}", e)))
    }

    /// Parse `text` as a full document and replace the current one. The
    /// top-level `slides` array is required; all optional fields default.
    /// On failure nothing is mutated.
    pub async fn import_json(&self, text: &str) -> Result<SlidesDocument, AppError> {
        let imported: SlidesDocument = serde_json::from_str(text)
            .map_err(|e| AppError::Validation(format!("Invalid document: {}", e)))?;

        self.commit(|doc| {
            *doc = imported;
            Ok(doc.clone())
        })
        .await
    }

    /// Apply a mutation under the write lock, stamp `lastUpdated`, and
    /// persist the resulting document. The mutation's error leaves both
    /// memory and storage untouched.
    async fn commit<T>(
        &self,
        mutate: impl FnOnce(&mut SlidesDocument) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let (result, snapshot) = {
            let mut doc = self.doc.write().await;
            let result = mutate(&mut doc)?;
            doc.last_updated = Utc::now().to_rfc3339();
            (result, doc.clone())
        };

        self.persist(&snapshot).await;
        Ok(result)
    }

    /// Full-document overwrite of the kv slot. Failures are logged only:
    /// the in-memory document stays authoritative and the next successful
    /// save reconverges storage.
    async fn persist(&self, doc: &SlidesDocument) {
        let blob = match serde_json::to_string(doc) {
            Ok(blob) => blob,
            Err(err) => {
                tracing::error!("Failed to serialize document for persistence: {}", err);
                return;
            }
        };

        if let Err(err) = self.kv.put(DOCUMENT_KEY, &blob).await {
            tracing::error!("Failed to persist document: {}", err);
        }
    }
}

/// Name for a downloaded export, stamped with the current date.
pub fn export_filename() -> String {
    format!("slides-{}.json", Utc::now().format("%Y-%m-%d"))
}

fn validate_slide_content(
    videos: Option<&[String]>,
    media_blocks: Option<&[crate::models::MediaBlock]>,
    background_settings: Option<&crate::models::BackgroundSettings>,
) -> Result<(), AppError> {
    if let Some(videos) = videos {
        media::validate_videos(videos)?;
    }
    if let Some(blocks) = media_blocks {
        media::validate_media_blocks(blocks)?;
    }
    if let Some(settings) = background_settings {
        if !settings.is_valid() {
            return Err(AppError::Validation(
                "Background settings must be in the 0-100 range".to_string(),
            ));
        }
    }
    Ok(())
}

fn renumber(slides: &mut [Slide]) {
    let mut by_order: Vec<&mut Slide> = slides.iter_mut().collect();
    by_order.sort_by_key(|s| s.order);
    for (index, slide) in by_order.into_iter().enumerate() {
        slide.order = index as i64;
    }
}
