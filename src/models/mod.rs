//! Data models for the slideshow presentation app.
//!
//! These models match the frontend TypeScript interfaces exactly for seamless
//! interoperability.

mod document;
mod media;
mod role;
mod slide;
mod sticker;

pub use document::*;
pub use media::*;
pub use role::*;
pub use slide::*;
pub use sticker::*;
