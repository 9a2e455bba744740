//! Media block model for mixed-layout slides.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaBlockType {
    Text,
    Image,
    Video,
}

/// One block in a mixed slide's interleaved layout: HTML-ish text, or an
/// image/video reference (external URL or inline data: payload).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaBlock {
    #[serde(rename = "type")]
    pub block_type: MediaBlockType,
    pub content: String,
}
