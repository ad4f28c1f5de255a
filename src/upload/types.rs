//! Upload lifecycle records.
//!
//! A `VideoUploadItem` is a tagged union over six states: pending →
//! uploading → processing → done, with error and canceled reachable
//! from any in-flight state. The status tag and the state-specific
//! payload travel in one flat object on the wire, timestamps as epoch
//! milliseconds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::video::FileMeta;

/// Scheduling class for a queued upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueuePriority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

/// Trim selection captured before upload, with the source metadata the
/// bypass logic and analytics need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrimMetadata {
    pub start_sec: f64,
    pub end_sec: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_duration_sec: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub did_fallback: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Network,
    Server,
    Client,
    Validation,
}

/// Structured failure detail attached to an errored upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
    pub category: ErrorCategory,
    pub recoverable: bool,
    /// Seconds to wait before retrying, when the server said so.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressPhase {
    Uploading,
    Processing,
    Finalizing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkProgress {
    pub completed: u32,
    pub total: u32,
}

/// Fine-grained transfer progress for the in-flight states.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressDetails {
    pub phase: ProgressPhase,
    pub bytes_uploaded: u64,
    pub total_bytes: u64,
    /// Bytes per second.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_speed: Option<f64>,
    /// Seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time_remaining: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_progress: Option<ChunkProgress>,
}

/// Aggregate queue counters sampled for analytics.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueAnalytics {
    pub total_items: u32,
    pub active_uploads: u32,
    pub completed_uploads: u32,
    pub failed_uploads: u32,
    pub average_upload_time: f64,
    pub total_bytes_uploaded: u64,
    pub queue_wait_time: f64,
}

/// State-specific payload, keyed on the `status` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum UploadState {
    /// Queued, nothing sent yet; progress stays 0.
    Pending,
    Uploading {
        #[serde(with = "chrono::serde::ts_milliseconds")]
        started_at: DateTime<Utc>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        progress_details: Option<ProgressDetails>,
    },
    /// Bytes are up; the backend is producing the playable rendition.
    Processing {
        #[serde(with = "chrono::serde::ts_milliseconds")]
        started_at: DateTime<Utc>,
        #[serde(with = "chrono::serde::ts_milliseconds")]
        uploaded_at: DateTime<Utc>,
        blob_key: String,
        /// Temporary blob URL until the rendition replaces it.
        video_url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        progress_details: Option<ProgressDetails>,
    },
    /// Finish persisted; progress pinned to 1.
    Done {
        #[serde(with = "chrono::serde::ts_milliseconds")]
        started_at: DateTime<Utc>,
        #[serde(with = "chrono::serde::ts_milliseconds")]
        uploaded_at: DateTime<Utc>,
        #[serde(with = "chrono::serde::ts_milliseconds")]
        completed_at: DateTime<Utc>,
        blob_key: String,
        video_url: String,
    },
    Error {
        #[serde(
            default,
            with = "chrono::serde::ts_milliseconds_option",
            skip_serializing_if = "Option::is_none"
        )]
        started_at: Option<DateTime<Utc>>,
        #[serde(
            default,
            with = "chrono::serde::ts_milliseconds_option",
            skip_serializing_if = "Option::is_none"
        )]
        uploaded_at: Option<DateTime<Utc>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        blob_key: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        video_url: Option<String>,
        error: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error_details: Option<ErrorDetails>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        retry_count: Option<u32>,
        #[serde(
            default,
            with = "chrono::serde::ts_milliseconds_option",
            skip_serializing_if = "Option::is_none"
        )]
        last_retry_at: Option<DateTime<Utc>>,
    },
    Canceled {
        #[serde(
            default,
            with = "chrono::serde::ts_milliseconds_option",
            skip_serializing_if = "Option::is_none"
        )]
        started_at: Option<DateTime<Utc>>,
        #[serde(with = "chrono::serde::ts_milliseconds")]
        canceled_at: DateTime<Utc>,
    },
}

impl UploadState {
    /// Upload or processing work is in flight.
    pub fn is_active(&self) -> bool {
        matches!(self, UploadState::Uploading { .. } | UploadState::Processing { .. })
    }

    /// The item reached a terminal state and will not move again.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            UploadState::Done { .. } | UploadState::Error { .. } | UploadState::Canceled { .. }
        )
    }
}

/// One short-form video upload tracked by the client queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoUploadItem {
    pub id: String,
    /// Original file reference, kept for retries and re-trimming.
    pub file: FileMeta,
    pub size_bytes: u64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    /// User-facing progress in 0..=1; the upload portion only.
    pub progress: f64,
    pub priority: QueuePriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_position: Option<u32>,
    /// Charter to link the video to during upload, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charter_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trim: Option<TrimMetadata>,
    #[serde(flatten)]
    pub state: UploadState,
}

impl VideoUploadItem {
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }
}
