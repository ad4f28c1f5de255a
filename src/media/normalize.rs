//! Defensive coercion of a raw finalize payload.

use serde_json::Value;

use super::types::NormalizedFinalizeMedia;

/// Coerces an arbitrary value into the canonical finalize-media shape.
///
/// Returns `None` when the root is not an object. Every field is picked
/// independently with a type-specific rule, so one malformed key never
/// poisons the rest:
///
/// - `images` / `videos`: lists pass through as-is, anything else
///   becomes an empty list
/// - `imagesOrder` / `videosOrder`: kept only when a non-empty list
/// - `imagesCoverIndex` / `videosCoverIndex`: kept only when numeric
/// - `avatar`: kept only when a non-null object; otherwise resolves to
///   the explicit "no avatar" value rather than an absent field
///
/// Elements are not inspected here; the schema parsers do that.
pub fn normalize_finalize_media(raw: &Value) -> Option<NormalizedFinalizeMedia> {
    let obj = raw.as_object()?;

    let pick_list = |key: &str| -> Vec<Value> {
        match obj.get(key) {
            Some(Value::Array(items)) => items.clone(),
            _ => Vec::new(),
        }
    };
    let pick_non_empty_list = |key: &str| -> Option<Vec<Value>> {
        match obj.get(key) {
            Some(Value::Array(items)) if !items.is_empty() => Some(items.clone()),
            _ => None,
        }
    };
    let pick_number = |key: &str| match obj.get(key) {
        Some(Value::Number(n)) => Some(n.clone()),
        _ => None,
    };

    let avatar = match obj.get("avatar") {
        Some(Value::Object(_)) => obj.get("avatar").cloned(),
        _ => None,
    };

    Some(NormalizedFinalizeMedia {
        images: pick_list("images"),
        videos: pick_list("videos"),
        images_order: pick_non_empty_list("imagesOrder"),
        videos_order: pick_non_empty_list("videosOrder"),
        images_cover_index: pick_number("imagesCoverIndex"),
        videos_cover_index: pick_number("videosCoverIndex"),
        avatar,
    })
}
