//! Validation of the media payload schemas.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::validate::fields;
use crate::validate::{index, join, Issues, ValidationResult};

use super::types::{
    FinalizeMedia, FinalizeMediaSet, IncomingMedia, IncomingMediaItem, IncomingMediaSet,
    MediaFile, MediaOrder, MediaRemoval, VideoThumbnail,
};

/// 200 MiB hard ceiling, sized for videos.
const MAX_MEDIA_BYTES: i64 = 200 * 1024 * 1024;
const MAX_DIMENSION: i64 = 10_000;
/// Storage keys stay well under typical object-store limits.
const MAX_KEY_LENGTH: usize = 512;
/// 6 hours.
const MAX_THUMB_DURATION_SECS: i64 = 6 * 60 * 60;

/// Legacy bare filenames, kept for tests and transitional flows.
static SIMPLE_IMAGE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[\w.-]+\.(jpg|jpeg|png|webp|gif)$").expect("key pattern"));

/// A storage key must live in one of the known prefix layouts, or be a
/// legacy bare image filename.
fn is_accepted_storage_key(key: &str) -> bool {
    if SIMPLE_IMAGE_NAME.is_match(key) {
        return true;
    }
    if key.starts_with("captains/") && key.contains("/avatar/") {
        return true;
    }
    if key.starts_with("verification/") {
        return true;
    }
    if key.starts_with("captains/") && key.contains("/media/") {
        return true;
    }
    if key.starts_with("temp/") && key.contains("/original/") {
        return true;
    }
    if key.starts_with("charters/") && key.contains("/media/") {
        return true;
    }
    false
}

impl MediaFile {
    /// Validates a stored-asset descriptor.
    pub fn parse(value: &Value) -> ValidationResult<Self> {
        let mut issues = Issues::new();
        match check_media_file(value, "", &mut issues) {
            Some(file) => issues.into_result(file),
            None => Err(issues.into_error()),
        }
    }
}

pub(crate) fn check_media_file(
    value: &Value,
    prefix: &str,
    issues: &mut Issues,
) -> Option<MediaFile> {
    let obj = fields::object_at(value, prefix, issues)?;

    let name = fields::required_str(obj, "name", prefix, issues);
    if let Some(n) = &name {
        let path = join(prefix, "name");
        if n.len() > MAX_KEY_LENGTH {
            issues.push(path, "Storage key is too long");
        } else if !is_accepted_storage_key(n) {
            issues.push(path, "Invalid storage key path pattern");
        }
    }

    let url = fields::url_str(obj, "url", prefix, issues);

    let mime_type = fields::optional_str(obj, "mimeType", prefix, issues);
    if let Some(m) = &mime_type {
        if m.len() < 3 || m.len() > 128 {
            issues.push(join(prefix, "mimeType"), "Invalid MIME type");
        }
    }

    let size_bytes = fields::optional_int(obj, "sizeBytes", prefix, "Whole numbers only", issues)
        .and_then(|n| {
            let path = join(prefix, "sizeBytes");
            if n <= 0 {
                issues.push(path, "Size must be positive");
                None
            } else if n > MAX_MEDIA_BYTES {
                issues.push(path, "File exceeds the 200MB limit");
                None
            } else {
                Some(n as u64)
            }
        });

    let width = check_dimension(obj, "width", prefix, issues);
    let height = check_dimension(obj, "height", prefix, issues);

    match (name, url) {
        (Some(name), Some(url)) => Some(MediaFile {
            name,
            url,
            mime_type,
            size_bytes,
            width,
            height,
        }),
        _ => None,
    }
}

fn check_dimension(
    obj: &Map<String, Value>,
    key: &str,
    prefix: &str,
    issues: &mut Issues,
) -> Option<u32> {
    fields::optional_int(obj, key, prefix, "Whole numbers only", issues).and_then(|n| {
        if n <= 0 || n > MAX_DIMENSION {
            issues.push(join(prefix, key), "Dimension must be 1-10000 pixels");
            None
        } else {
            Some(n as u32)
        }
    })
}

impl FinalizeMedia {
    /// Validates the one-time finalize payload.
    pub fn parse(value: &Value) -> ValidationResult<Self> {
        let mut issues = Issues::new();
        let root = match fields::object(value, &mut issues) {
            Some(root) => root,
            None => return Err(issues.into_error()),
        };
        let media = fields::required_object(root, "media", "", &mut issues)
            .and_then(|obj| finalize_set(obj, "media", &mut issues));
        match media {
            Some(media) => issues.into_result(FinalizeMedia { media }),
            None => Err(issues.into_error()),
        }
    }
}

fn finalize_set(
    obj: &Map<String, Value>,
    prefix: &str,
    issues: &mut Issues,
) -> Option<FinalizeMediaSet> {
    let images = media_file_list(obj, "images", prefix, 20, "Maximum 20 images", issues);
    let videos = media_file_list(obj, "videos", prefix, 5, "Maximum 5 videos", issues);

    let images_order = order_list(obj, "imagesOrder", prefix, issues);
    let videos_order = order_list(obj, "videosOrder", prefix, issues);
    let images_cover_index = cover_index(obj, "imagesCoverIndex", prefix, issues);
    let videos_cover_index = cover_index(obj, "videosCoverIndex", prefix, issues);

    // Nullable and omittable alike resolve to "no avatar".
    let avatar = match obj.get("avatar") {
        None | Some(Value::Null) => None,
        Some(v) => Some(check_media_file(v, &join(prefix, "avatar"), issues)?),
    };

    match (images, videos) {
        (Some(images), Some(videos)) => Some(FinalizeMediaSet {
            images,
            videos,
            images_order,
            videos_order,
            images_cover_index,
            videos_cover_index,
            avatar,
        }),
        _ => None,
    }
}

fn media_file_list(
    obj: &Map<String, Value>,
    key: &str,
    prefix: &str,
    max: usize,
    max_message: &str,
    issues: &mut Issues,
) -> Option<Vec<MediaFile>> {
    let path = join(prefix, key);
    let items = fields::raw_list(obj, key, prefix, issues)?;
    if items.len() > max {
        issues.push(path.clone(), max_message);
    }
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        if let Some(file) = check_media_file(item, &index(&path, i), issues) {
            out.push(file);
        }
    }
    Some(out)
}

fn order_list(
    obj: &Map<String, Value>,
    key: &str,
    prefix: &str,
    issues: &mut Issues,
) -> Option<Vec<i64>> {
    let items = fields::optional_raw_list(obj, key, prefix, issues)?;
    let path = join(prefix, key);
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match fields::integer_of(item) {
            Some(n) if n >= 0 => out.push(n),
            Some(_) => issues.push(index(&path, i), "Index must be zero or more"),
            None => issues.push(index(&path, i), "Whole numbers only"),
        }
    }
    Some(out)
}

fn cover_index(
    obj: &Map<String, Value>,
    key: &str,
    prefix: &str,
    issues: &mut Issues,
) -> Option<i64> {
    match obj.get(key) {
        None | Some(Value::Null) => None,
        Some(v) => match fields::integer_of(v) {
            Some(n) if n >= 0 => Some(n),
            Some(_) => {
                issues.push(join(prefix, key), "Index must be zero or more");
                None
            }
            None => {
                issues.push(join(prefix, key), "Whole numbers only");
                None
            }
        },
    }
}

impl IncomingMedia {
    /// Validates an edit-mode media update.
    pub fn parse(value: &Value) -> ValidationResult<Self> {
        let mut issues = Issues::new();
        let root = match fields::object(value, &mut issues) {
            Some(root) => root,
            None => return Err(issues.into_error()),
        };

        let media = fields::required_object(root, "media", "", &mut issues)
            .and_then(|obj| incoming_set(obj, "media", &mut issues));
        let delete_keys = fields::optional_string_list(root, "deleteKeys", "", &mut issues);
        let order = fields::optional_object(root, "order", "", &mut issues).map(|obj| MediaOrder {
            images: order_list(obj, "images", "order", &mut issues),
            videos: order_list(obj, "videos", "order", &mut issues),
        });

        match media {
            Some(media) => issues.into_result(IncomingMedia {
                media,
                delete_keys,
                order,
            }),
            None => Err(issues.into_error()),
        }
    }
}

fn incoming_set(
    obj: &Map<String, Value>,
    prefix: &str,
    issues: &mut Issues,
) -> Option<IncomingMediaSet> {
    let images = incoming_item_list(obj, "images", prefix, 20, "Maximum 20 images", issues);
    let videos = incoming_item_list(obj, "videos", prefix, 5, "Maximum 5 videos", issues);
    let delete_keys = fields::optional_string_list(obj, "deleteKeys", prefix, issues);

    match (images, videos) {
        (Some(images), Some(videos)) => Some(IncomingMediaSet {
            images,
            videos,
            delete_keys,
        }),
        _ => None,
    }
}

fn incoming_item_list(
    obj: &Map<String, Value>,
    key: &str,
    prefix: &str,
    max: usize,
    max_message: &str,
    issues: &mut Issues,
) -> Option<Vec<IncomingMediaItem>> {
    let path = join(prefix, key);
    let items = fields::raw_list(obj, key, prefix, issues)?;
    if items.len() > max {
        issues.push(path.clone(), max_message);
    }
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let item_path = index(&path, i);
        let Some(entry) = fields::object_at(item, &item_path, issues) else {
            continue;
        };
        let name = fields::non_empty_str(entry, "name", &item_path, "Name is required", issues);
        let url = fields::url_str(entry, "url", &item_path, issues);
        let thumbnail_url = fields::optional_url_str(entry, "thumbnailUrl", &item_path, issues);
        let duration_seconds =
            fields::optional_int(entry, "durationSeconds", &item_path, "Whole numbers only", issues)
                .and_then(|n| {
                    if n <= 0 {
                        issues.push(join(&item_path, "durationSeconds"), "Duration must be positive");
                        None
                    } else {
                        Some(n)
                    }
                });
        if let (Some(name), Some(url)) = (name, url) {
            out.push(IncomingMediaItem {
                name,
                url,
                thumbnail_url,
                duration_seconds,
            });
        }
    }
    Some(out)
}

impl MediaRemoval {
    /// Validates a removal request. Note that an empty request is
    /// schema-valid; it just removes nothing.
    pub fn parse(value: &Value) -> ValidationResult<Self> {
        let mut issues = Issues::new();
        let root = match fields::object(value, &mut issues) {
            Some(root) => root,
            None => return Err(issues.into_error()),
        };
        let removal = MediaRemoval {
            media_id: fields::optional_str(root, "mediaId", "", &mut issues),
            storage_key: fields::optional_str(root, "storageKey", "", &mut issues),
        };
        issues.into_result(removal)
    }
}

impl VideoThumbnail {
    /// Validates a custom video thumbnail upload.
    pub fn parse(value: &Value) -> ValidationResult<Self> {
        let mut issues = Issues::new();
        let root = match fields::object(value, &mut issues) {
            Some(root) => root,
            None => return Err(issues.into_error()),
        };

        let storage_key = fields::non_empty_str(root, "storageKey", "", "Required", &mut issues);

        let data_url = fields::required_str(root, "dataUrl", "", &mut issues);
        if let Some(d) = &data_url {
            if d.len() < 50 {
                issues.push("dataUrl", "Thumbnail data is too short");
            } else if !d.starts_with("data:image/") {
                issues.push("dataUrl", "must be data:image/* base64");
            }
        }

        let duration_seconds =
            fields::optional_int(root, "durationSeconds", "", "Whole numbers only", &mut issues)
                .and_then(|n| {
                    if n <= 0 {
                        issues.push("durationSeconds", "Duration must be positive");
                        None
                    } else if n > MAX_THUMB_DURATION_SECS {
                        issues.push("durationSeconds", "Maximum 6 hours");
                        None
                    } else {
                        Some(n)
                    }
                });

        match (storage_key, data_url) {
            (Some(storage_key), Some(data_url)) => issues.into_result(VideoThumbnail {
                storage_key,
                data_url,
                duration_seconds,
            }),
            _ => Err(issues.into_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_filename_is_accepted() {
        let file = MediaFile::parse(&json!({
            "name": "photo.jpg",
            "url": "https://example.com/photo.jpg"
        }))
        .unwrap();
        assert_eq!(file.name, "photo.jpg");
    }

    #[test]
    fn test_known_prefix_layouts_are_accepted() {
        for name in [
            "charters/abc123/media/photo.jpg",
            "captains/user123/avatar/profile.jpg",
            "captains/user123/media/boat.png",
            "verification/user123/id.jpg",
            "temp/session/original/clip.mp4",
        ] {
            let result = MediaFile::parse(&json!({
                "name": name,
                "url": "https://example.com/x"
            }));
            assert!(result.is_ok(), "expected {name} to be accepted");
        }
    }

    #[test]
    fn test_unknown_path_shape_is_rejected() {
        let err = MediaFile::parse(&json!({
            "name": "invalid/path/structure.jpg",
            "url": "https://example.com/photo.jpg"
        }))
        .unwrap_err();
        assert_eq!(err.issues[0].path, "name");
        assert_eq!(err.issues[0].message, "Invalid storage key path pattern");
    }

    #[test]
    fn test_size_ceiling() {
        let over = json!({
            "name": "photo.jpg",
            "url": "https://example.com/photo.jpg",
            "sizeBytes": 300 * 1024 * 1024
        });
        let err = MediaFile::parse(&over).unwrap_err();
        assert!(err.has_path("sizeBytes"));

        let under = json!({
            "name": "photo.jpg",
            "url": "https://example.com/photo.jpg",
            "sizeBytes": 199 * 1024 * 1024
        });
        assert!(MediaFile::parse(&under).is_ok());
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let err = MediaFile::parse(&json!({
            "name": "photo.jpg",
            "url": "not-a-url"
        }))
        .unwrap_err();
        assert!(err.has_path("url"));
    }

    #[test]
    fn test_dimension_bounds() {
        let err = MediaFile::parse(&json!({
            "name": "photo.jpg",
            "url": "https://example.com/photo.jpg",
            "width": 10001
        }))
        .unwrap_err();
        assert!(err.has_path("width"));
    }

    fn finalize_payload(images: usize, videos: usize) -> Value {
        let image = json!({ "name": "charters/c1/media/p.jpg", "url": "https://e.com/p.jpg" });
        let video = json!({ "name": "charters/c1/media/v.mp4", "url": "https://e.com/v.mp4" });
        json!({ "media": {
            "images": vec![image; images],
            "videos": vec![video; videos],
            "avatar": null
        }})
    }

    #[test]
    fn test_finalize_accepts_empty_sets() {
        let payload = FinalizeMedia::parse(&finalize_payload(0, 0)).unwrap();
        assert!(payload.media.images.is_empty());
        assert_eq!(payload.media.avatar, None);
    }

    #[test]
    fn test_finalize_caps_images_at_twenty() {
        assert!(FinalizeMedia::parse(&finalize_payload(20, 0)).is_ok());
        let err = FinalizeMedia::parse(&finalize_payload(21, 0)).unwrap_err();
        assert!(err.has_path("media.images"));
    }

    #[test]
    fn test_finalize_caps_videos_at_five() {
        assert!(FinalizeMedia::parse(&finalize_payload(0, 5)).is_ok());
        let err = FinalizeMedia::parse(&finalize_payload(0, 6)).unwrap_err();
        assert!(err.has_path("media.videos"));
    }

    #[test]
    fn test_finalize_element_issues_carry_nested_paths() {
        let mut payload = finalize_payload(1, 0);
        payload["media"]["images"][0]["name"] = json!("bad/path.jpg");
        let err = FinalizeMedia::parse(&payload).unwrap_err();
        assert!(err.has_path("media.images[0].name"));
    }

    #[test]
    fn test_finalize_keeps_order_and_cover() {
        let mut payload = finalize_payload(2, 0);
        payload["media"]["imagesOrder"] = json!([1, 0]);
        payload["media"]["imagesCoverIndex"] = json!(1);
        let parsed = FinalizeMedia::parse(&payload).unwrap();
        assert_eq!(parsed.media.images_order, Some(vec![1, 0]));
        assert_eq!(parsed.media.images_cover_index, Some(1));
    }

    #[test]
    fn test_finalize_rejects_negative_order_entries() {
        let mut payload = finalize_payload(1, 0);
        payload["media"]["imagesOrder"] = json!([0, -1]);
        let err = FinalizeMedia::parse(&payload).unwrap_err();
        assert!(err.has_path("media.imagesOrder[1]"));
    }

    #[test]
    fn test_incoming_media_accepts_delete_keys_everywhere() {
        let parsed = IncomingMedia::parse(&json!({
            "media": {
                "images": [],
                "videos": [],
                "deleteKeys": ["old-key-1", "old-key-2"]
            },
            "deleteKeys": ["another-key"]
        }))
        .unwrap();
        assert_eq!(parsed.media.delete_keys.as_ref().map(Vec::len), Some(2));
        assert_eq!(parsed.delete_keys.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_incoming_media_with_thumbnails_and_order() {
        let parsed = IncomingMedia::parse(&json!({
            "media": {
                "images": [{
                    "name": "photo1.jpg",
                    "url": "https://example.com/photo1.jpg",
                    "thumbnailUrl": "https://example.com/thumb1.jpg"
                }],
                "videos": []
            },
            "order": { "images": [0] }
        }))
        .unwrap();
        assert_eq!(
            parsed.media.images[0].thumbnail_url.as_deref(),
            Some("https://example.com/thumb1.jpg")
        );
        assert_eq!(parsed.order.unwrap().images, Some(vec![0]));
    }

    #[test]
    fn test_removal_request_variants() {
        assert!(MediaRemoval::parse(&json!({ "mediaId": "media123" })).is_ok());
        assert!(MediaRemoval::parse(&json!({ "storageKey": "charters/123/media/p.jpg" })).is_ok());
        // Both absent stays schema-valid; the route decides what a
        // no-op removal means.
        let empty = MediaRemoval::parse(&json!({})).unwrap();
        assert_eq!(empty, MediaRemoval::default());
    }

    #[test]
    fn test_thumbnail_data_url_rules() {
        let good = json!({
            "storageKey": "charters/c1/media/v.mp4",
            "dataUrl": format!("data:image/jpeg;base64,{}", "A".repeat(64)),
            "durationSeconds": 90
        });
        assert!(VideoThumbnail::parse(&good).is_ok());

        let short = json!({ "storageKey": "k", "dataUrl": "data:image/png;base64,AA" });
        let err = VideoThumbnail::parse(&short).unwrap_err();
        assert_eq!(err.issues[0].message, "Thumbnail data is too short");

        let wrong_prefix = json!({ "storageKey": "k", "dataUrl": "A".repeat(60) });
        let err = VideoThumbnail::parse(&wrong_prefix).unwrap_err();
        assert_eq!(err.issues[0].message, "must be data:image/* base64");
    }

    #[test]
    fn test_thumbnail_duration_cap() {
        let over = json!({
            "storageKey": "k",
            "dataUrl": format!("data:image/jpeg;base64,{}", "A".repeat(64)),
            "durationSeconds": 21601
        });
        let err = VideoThumbnail::parse(&over).unwrap_err();
        assert_eq!(err.issues[0].message, "Maximum 6 hours");
    }
}
