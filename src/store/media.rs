//! Admission control for inline media payloads.
//!
//! Media references are either external URLs (not size-checked) or inline
//! `data:` payloads stored directly in the document. Inline payloads are
//! capped before any mutation is accepted: videos at 50 MB, background audio
//! at 10 MB. Images are not capped.

use crate::errors::AppError;
use crate::models::{BgmConfig, MediaBlock, MediaBlockType};

pub const VIDEO_MAX_BYTES: usize = 50 * 1024 * 1024;
pub const AUDIO_MAX_BYTES: usize = 10 * 1024 * 1024;

/// Decoded size of an inline `data:` payload, estimated from the base64
/// length. Returns `None` for external references.
fn inline_payload_size(reference: &str) -> Option<usize> {
    if !reference.starts_with("data:") {
        return None;
    }
    let encoded = reference.split_once(',').map(|(_, body)| body.len())?;
    // Base64 encodes 3 bytes into 4 characters
    Some(encoded / 4 * 3)
}

fn check_limit(reference: &str, limit: usize, kind: &str) -> Result<(), AppError> {
    if let Some(size) = inline_payload_size(reference) {
        if size > limit {
            return Err(AppError::Validation(format!(
                "Inline {} payload is {} bytes, limit is {}",
                kind, size, limit
            )));
        }
    }
    Ok(())
}

/// Reject oversize inline video references.
pub fn validate_videos(videos: &[String]) -> Result<(), AppError> {
    for video in videos {
        check_limit(video, VIDEO_MAX_BYTES, "video")?;
    }
    Ok(())
}

/// Reject oversize inline payloads inside a mixed slide's media blocks.
pub fn validate_media_blocks(blocks: &[MediaBlock]) -> Result<(), AppError> {
    for block in blocks {
        if block.block_type == MediaBlockType::Video {
            check_limit(&block.content, VIDEO_MAX_BYTES, "video")?;
        }
    }
    Ok(())
}

/// Reject an invalid BGM config: out-of-range volume or oversize inline audio.
pub fn validate_bgm(config: &BgmConfig) -> Result<(), AppError> {
    if config.volume > 100 {
        return Err(AppError::Validation(format!(
            "Volume must be 0-100, got {}",
            config.volume
        )));
    }
    check_limit(&config.url, AUDIO_MAX_BYTES, "audio")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_url(bytes: usize) -> String {
        // 4 base64 characters per 3 bytes
        format!("data:video/mp4;base64,{}", "A".repeat(bytes / 3 * 4))
    }

    #[test]
    fn test_external_urls_are_not_size_checked() {
        let videos = vec!["https://example.com/huge.mp4".to_string()];
        assert!(validate_videos(&videos).is_ok());
    }

    #[test]
    fn test_inline_video_within_cap() {
        let videos = vec![data_url(1024)];
        assert!(validate_videos(&videos).is_ok());
    }

    #[test]
    fn test_inline_video_over_cap() {
        let videos = vec![data_url(VIDEO_MAX_BYTES + 3000)];
        assert!(validate_videos(&videos).is_err());
    }

    #[test]
    fn test_bgm_volume_range() {
        let bgm = BgmConfig {
            enabled: true,
            url: "https://example.com/song.mp3".to_string(),
            filename: "song.mp3".to_string(),
            volume: 101,
            auto_play: false,
        };
        assert!(validate_bgm(&bgm).is_err());
    }

    #[test]
    fn test_bgm_inline_audio_over_cap() {
        let bgm = BgmConfig {
            enabled: true,
            url: format!("data:audio/mpeg;base64,{}", "A".repeat(15 * 1024 * 1024)),
            filename: "song.mp3".to_string(),
            volume: 50,
            auto_play: false,
        };
        assert!(validate_bgm(&bgm).is_err());
    }

    #[test]
    fn test_media_block_video_checked() {
        let blocks = vec![MediaBlock {
            block_type: MediaBlockType::Video,
            content: data_url(VIDEO_MAX_BYTES + 3000),
        }];
        assert!(validate_media_blocks(&blocks).is_err());
    }
}
