//! File predicates for the upload UI.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

const MAX_THUMB_BYTES: u64 = 2 * 1024 * 1024;

const THUMB_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/webp"];

/// Video container extensions accepted when the declared content type
/// is unusable: web, Apple, Android, legacy desktop, MPEG variants, and
/// transport streams.
const VIDEO_EXTENSIONS: [&str; 19] = [
    "mp4", "webm", "ogg", "mov", "m4v", "m4p", "3gp", "3gpp", "avi", "mkv", "flv", "wmv", "mpg",
    "mpeg", "mpe", "mpv", "m2v", "m2ts", "mts",
];

static VIDEO_EXTENSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\.({})$", VIDEO_EXTENSIONS.join("|"))).expect("extension pattern")
});

/// What a browser (or any upload front end) reports about a picked file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMeta {
    pub name: String,
    /// Declared MIME type; may be empty, generic, or plain wrong on
    /// mobile browsers.
    pub content_type: String,
    pub size_bytes: u64,
}

/// True when the file can serve as a custom video thumbnail: a
/// jpeg/webp under 2 MiB. Both conditions are required.
pub fn validate_thumb_file(file: &FileMeta) -> bool {
    if !THUMB_TYPES.contains(&file.content_type.as_str()) {
        return false;
    }
    file.size_bytes <= MAX_THUMB_BYTES
}

/// True when the file looks like a video.
///
/// A declared `video/*` type is trusted outright, name unseen. Anything
/// else falls back to the extension allow-list, because mobile browsers
/// routinely report empty, generic, or wrong content types for video
/// files. A file failing both tiers is rejected even if it happens to
/// contain video.
pub fn is_valid_video_file(file: &FileMeta) -> bool {
    if file.content_type.starts_with("video/") {
        return true;
    }
    VIDEO_EXTENSION.is_match(&file.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, content_type: &str, size_bytes: u64) -> FileMeta {
        FileMeta {
            name: name.to_string(),
            content_type: content_type.to_string(),
            size_bytes,
        }
    }

    #[test]
    fn test_trusted_mime_skips_extension_check() {
        assert!(is_valid_video_file(&file("x.mp4", "video/mp4", 10)));
        // No extension at all, but the type says video.
        assert!(is_valid_video_file(&file("x", "video/quicktime", 10)));
    }

    #[test]
    fn test_extension_fallback_for_untrustworthy_types() {
        assert!(is_valid_video_file(&file("x.mov", "", 10)));
        assert!(is_valid_video_file(&file("clip.MKV", "application/octet-stream", 10)));
        // Wrong MIME but a recognized extension still passes.
        assert!(is_valid_video_file(&file("x.mp4", "audio/mpeg", 10)));
    }

    #[test]
    fn test_rejects_when_both_tiers_fail() {
        assert!(!is_valid_video_file(&file("x", "", 10)));
        assert!(!is_valid_video_file(&file("notes.txt", "text/plain", 10)));
        assert!(!is_valid_video_file(&file("x.mp4.png", "image/png", 10)));
    }

    #[test]
    fn test_extension_match_is_end_anchored() {
        assert!(!is_valid_video_file(&file("x.mp4.backup", "", 10)));
        assert!(is_valid_video_file(&file("archive.tar.mp4", "", 10)));
    }

    #[test]
    fn test_thumb_accepts_small_jpeg_and_webp() {
        assert!(validate_thumb_file(&file("t.jpg", "image/jpeg", 1024)));
        assert!(validate_thumb_file(&file("t.webp", "image/webp", 2 * 1024 * 1024)));
    }

    #[test]
    fn test_thumb_rejects_oversize_and_wrong_type() {
        assert!(!validate_thumb_file(&file("t.jpg", "image/jpeg", 3 * 1024 * 1024)));
        assert!(!validate_thumb_file(&file("t.png", "image/png", 1024)));
        assert!(!validate_thumb_file(&file("t.gif", "", 1024)));
    }
}
