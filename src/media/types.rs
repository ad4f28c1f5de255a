//! Typed outputs of the media schemas.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Stored media asset descriptor. `name` doubles as the storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaFile {
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// Image/video set sent once when completing charter creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizeMediaSet {
    /// Zero images is allowed so edit mode can re-use existing media;
    /// the create path enforces its own minimum later.
    pub images: Vec<MediaFile>,
    pub videos: Vec<MediaFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images_order: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos_order: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images_cover_index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos_cover_index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<MediaFile>,
}

/// Envelope for the finalize payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalizeMedia {
    pub media: FinalizeMediaSet,
}

/// One media entry in an edit-mode update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingMediaItem {
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingMediaSet {
    pub images: Vec<IncomingMediaItem>,
    pub videos: Vec<IncomingMediaItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_keys: Option<Vec<String>>,
}

/// Reorder indices for edit-mode media.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MediaOrder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos: Option<Vec<i64>>,
}

/// Edit-mode media update payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingMedia {
    pub media: IncomingMediaSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_keys: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<MediaOrder>,
}

/// Media removal request: a direct media id, or the storage key as a
/// fallback when no id is known yet. Both may be absent; such a request
/// removes nothing, and rejecting it is the caller's call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRemoval {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_key: Option<String>,
}

/// Custom thumbnail upload for a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoThumbnail {
    pub storage_key: String,
    /// Base64 data URL, `data:image/...`.
    pub data_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i64>,
}

/// Defensively-coerced finalize payload.
///
/// Lists are carried as-is (element validation is the schema parser's
/// job). The order and cover-index fields are omitted entirely when the
/// raw payload did not carry a usable value, while `avatar` is always
/// present and serializes as null when no avatar was given; consumers
/// rely on that asymmetry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedFinalizeMedia {
    pub images: Vec<Value>,
    pub videos: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images_order: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos_order: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images_cover_index: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos_cover_index: Option<Number>,
    pub avatar: Option<Value>,
}
