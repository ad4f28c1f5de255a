//! Validation of the video pipeline schemas.

use serde_json::{Map, Value};

use crate::validate::fields;
use crate::validate::{Issues, ValidationResult};

use super::types::{CreateUpload, FinishForm, ListQuery, TranscodePayload};

/// One day, the longest source clip the pipeline accepts.
const MAX_CLIP_SECS: f64 = 86_400.0;
const MAX_FILE_NAME: usize = 256;
const MAX_FALLBACK_REASON: usize = 300;

/// A declared upload content type is acceptable when it is empty (the
/// extension check takes over), a `video/*` type, or the generic
/// `application/octet-stream` some mobile browsers send.
fn is_acceptable_upload_type(file_type: &str) -> bool {
    file_type.is_empty()
        || file_type.starts_with("video/")
        || file_type == "application/octet-stream"
}

impl CreateUpload {
    /// Validates an upload-creation request.
    pub fn parse(value: &Value) -> ValidationResult<Self> {
        let mut issues = Issues::new();
        let root = match fields::object(value, &mut issues) {
            Some(root) => root,
            None => return Err(issues.into_error()),
        };

        let file_name = fields::non_empty_str(root, "fileName", "", "File name is required", &mut issues);
        if let Some(n) = &file_name {
            if n.len() > MAX_FILE_NAME {
                issues.push("fileName", "File name is too long");
            }
        }

        let file_type = fields::required_str(root, "fileType", "", &mut issues);
        if let Some(t) = &file_type {
            if !is_acceptable_upload_type(t) {
                issues.push("fileType", "Must be a video file");
            }
        }

        match (file_name, file_type) {
            (Some(file_name), Some(file_type)) => issues.into_result(CreateUpload {
                file_name,
                file_type,
            }),
            _ => Err(issues.into_error()),
        }
    }
}

impl FinishForm {
    /// Validates a trim/finalize request.
    pub fn parse(value: &Value) -> ValidationResult<Self> {
        let mut issues = Issues::new();
        let root = match fields::object(value, &mut issues) {
            Some(root) => root,
            None => return Err(issues.into_error()),
        };

        let video_url = fields::url_str(root, "videoUrl", "", &mut issues);
        let start_sec = check_clip_seconds_required(root, "startSec", &mut issues);
        let end_sec = check_clip_seconds_optional(root, "endSec", &mut issues);
        let width = check_bounded_optional(root, "width", 10_000.0, &mut issues);
        let height = check_bounded_optional(root, "height", 10_000.0, &mut issues);
        let original_duration_sec =
            check_clip_seconds_optional(root, "originalDurationSec", &mut issues);
        let owner_id = fields::non_empty_str(root, "ownerId", "", "Owner is required", &mut issues);
        let did_fallback = fields::optional_bool(root, "didFallback", "", &mut issues);
        let fallback_reason = fields::optional_str(root, "fallbackReason", "", &mut issues);
        if let Some(r) = &fallback_reason {
            if r.len() > MAX_FALLBACK_REASON {
                issues.push("fallbackReason", "Reason is too long");
            }
        }

        match (video_url, start_sec, owner_id) {
            (Some(video_url), Some(start_sec), Some(owner_id)) => issues.into_result(FinishForm {
                video_url,
                start_sec,
                end_sec,
                width,
                height,
                original_duration_sec,
                owner_id,
                did_fallback,
                fallback_reason,
            }),
            _ => Err(issues.into_error()),
        }
    }
}

impl TranscodePayload {
    /// Validates the payload sent to the transcoding worker.
    pub fn parse(value: &Value) -> ValidationResult<Self> {
        let mut issues = Issues::new();
        let root = match fields::object(value, &mut issues) {
            Some(root) => root,
            None => return Err(issues.into_error()),
        };

        let video_url = fields::url_str(root, "videoUrl", "", &mut issues);
        let start_sec = check_clip_seconds_required(root, "startSec", &mut issues);
        let video_id = fields::non_empty_str(root, "videoId", "", "Video id is required", &mut issues);

        match (video_url, start_sec, video_id) {
            (Some(video_url), Some(start_sec), Some(video_id)) => {
                issues.into_result(TranscodePayload {
                    video_url,
                    start_sec,
                    video_id,
                })
            }
            _ => Err(issues.into_error()),
        }
    }
}

impl ListQuery {
    /// Validates an owner listing query.
    pub fn parse(value: &Value) -> ValidationResult<Self> {
        let mut issues = Issues::new();
        let root = match fields::object(value, &mut issues) {
            Some(root) => root,
            None => return Err(issues.into_error()),
        };
        let owner_id = fields::non_empty_str(root, "ownerId", "", "Owner is required", &mut issues);
        match owner_id {
            Some(owner_id) => issues.into_result(ListQuery { owner_id }),
            None => Err(issues.into_error()),
        }
    }
}

fn check_clip_seconds_required(
    root: &Map<String, Value>,
    key: &str,
    issues: &mut Issues,
) -> Option<f64> {
    let secs = fields::required_num(root, key, "", issues)?;
    check_clip_range(secs, key, issues)
}

fn check_clip_seconds_optional(
    root: &Map<String, Value>,
    key: &str,
    issues: &mut Issues,
) -> Option<f64> {
    let secs = fields::optional_num(root, key, "", issues)?;
    check_clip_range(secs, key, issues)
}

fn check_clip_range(secs: f64, key: &str, issues: &mut Issues) -> Option<f64> {
    if !(0.0..=MAX_CLIP_SECS).contains(&secs) {
        issues.push(key, "Must be between 0 and 86400 seconds");
        None
    } else {
        Some(secs)
    }
}

fn check_bounded_optional(
    root: &Map<String, Value>,
    key: &str,
    max: f64,
    issues: &mut Issues,
) -> Option<f64> {
    let n = fields::optional_num(root, key, "", issues)?;
    if !(0.0..=max).contains(&n) {
        issues.push(key, format!("Must be between 0 and {}", max as i64));
        None
    } else {
        Some(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_upload_accepts_trusted_and_generic_types() {
        for file_type in ["", "video/mp4", "video/quicktime", "application/octet-stream"] {
            let result = CreateUpload::parse(&json!({
                "fileName": "clip.mp4",
                "fileType": file_type
            }));
            assert!(result.is_ok(), "expected fileType {file_type:?} to pass");
        }
    }

    #[test]
    fn test_create_upload_rejects_non_video_types() {
        let err = CreateUpload::parse(&json!({
            "fileName": "clip.mp4",
            "fileType": "image/jpeg"
        }))
        .unwrap_err();
        assert_eq!(err.issues[0].path, "fileType");
        assert_eq!(err.issues[0].message, "Must be a video file");
    }

    #[test]
    fn test_create_upload_requires_file_name() {
        let err = CreateUpload::parse(&json!({ "fileName": "", "fileType": "video/mp4" }))
            .unwrap_err();
        assert!(err.has_path("fileName"));
    }

    #[test]
    fn test_finish_form_full_payload() {
        let form = FinishForm::parse(&json!({
            "videoUrl": "https://cdn.example.com/tmp/clip.mp4",
            "startSec": 12.5,
            "endSec": 42.5,
            "width": 1920,
            "height": 1080,
            "originalDurationSec": 180,
            "ownerId": "user_1",
            "didFallback": true,
            "fallbackReason": "trim unsupported on this device"
        }))
        .unwrap();
        assert_eq!(form.start_sec, 12.5);
        assert_eq!(form.end_sec, Some(42.5));
        assert_eq!(form.did_fallback, Some(true));
    }

    #[test]
    fn test_finish_form_clip_bounds() {
        let err = FinishForm::parse(&json!({
            "videoUrl": "https://cdn.example.com/clip.mp4",
            "startSec": 86401,
            "ownerId": "user_1"
        }))
        .unwrap_err();
        assert!(err.has_path("startSec"));
    }

    #[test]
    fn test_transcode_payload() {
        let payload = TranscodePayload::parse(&json!({
            "videoUrl": "https://cdn.example.com/clip.mp4",
            "startSec": 0,
            "videoId": "vid_9"
        }))
        .unwrap();
        assert_eq!(payload.video_id, "vid_9");

        let err = TranscodePayload::parse(&json!({
            "videoUrl": "nope",
            "startSec": 0,
            "videoId": ""
        }))
        .unwrap_err();
        assert!(err.has_path("videoUrl"));
        assert!(err.has_path("videoId"));
    }

    #[test]
    fn test_list_query() {
        assert!(ListQuery::parse(&json!({ "ownerId": "user_1" })).is_ok());
        assert!(ListQuery::parse(&json!({})).is_err());
    }

    #[test]
    fn test_process_status_wire_casing() {
        use super::super::types::ProcessStatus;
        let status: ProcessStatus = serde_json::from_value(json!("queued")).unwrap();
        assert_eq!(status, ProcessStatus::Queued);
        assert_eq!(serde_json::to_value(ProcessStatus::Failed).unwrap(), json!("failed"));
        assert!(serde_json::from_value::<ProcessStatus>(json!("stalled")).is_err());
    }
}
