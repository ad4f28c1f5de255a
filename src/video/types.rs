//! Typed outputs of the video pipeline schemas.

use serde::{Deserialize, Serialize};

/// Transcoding worker status vocabulary. This crate defines only the
/// enumeration; the worker reports against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessStatus {
    Queued,
    Processing,
    Ready,
    Failed,
}

/// Request to start a new video upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUpload {
    pub file_name: String,
    /// Empty or generic values are allowed; mobile browsers often
    /// cannot be trusted to report a real video MIME type.
    pub file_type: String,
}

/// Finalize payload for a trimmed upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinishForm {
    pub video_url: String,
    pub start_sec: f64,
    /// Exclusive end of the trimmed selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_sec: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_duration_sec: Option<f64>,
    pub owner_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub did_fallback: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}

/// Payload handed to the transcoding worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscodePayload {
    pub video_url: String,
    pub start_sec: f64,
    pub video_id: String,
}

/// Query for listing an owner's videos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub owner_id: String,
}
