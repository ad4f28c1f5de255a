//! Media payload contracts: stored-asset descriptors, the one-time
//! finalize payload, edit-mode incoming media, removal requests, and
//! video thumbnail uploads.
//!
//! # Design Principles
//!
//! - A media file's `name` is its storage key and must match one of the
//!   accepted path shapes; everything else about the asset is optional
//!   metadata
//! - `normalize_finalize_media` is a normalizer, not a validator: it
//!   never fails mid-way, it degrades malformed fields to defaults and
//!   leaves element-level validation to the schema parsers

mod normalize;
mod types;
mod validator;

pub use normalize::normalize_finalize_media;
pub use types::{
    FinalizeMedia, FinalizeMediaSet, IncomingMedia, IncomingMediaItem, IncomingMediaSet,
    MediaFile, MediaOrder, MediaRemoval, NormalizedFinalizeMedia, VideoThumbnail,
};
