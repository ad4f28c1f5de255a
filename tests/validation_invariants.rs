//! Cross-schema validation invariant tests.
//!
//! - Validation is deterministic: same input, same issue list
//! - Validated output is a fixed point: re-validating it yields an
//!   identical value (defaults are stable)
//! - Failure enumerates every field-level violation in one pass

use serde_json::{json, Value};

use charter_contracts::charter::{CharterForm, CharterUpdate, Policies, Trip};
use charter_contracts::draft::DraftPatch;
use charter_contracts::media::{normalize_finalize_media, FinalizeMedia, MediaRemoval};
use charter_contracts::video::{CreateUpload, FinishForm};

// =============================================================================
// Fixtures
// =============================================================================

fn charter_form() -> Value {
    json!({
        "operator": {
            "displayName": "Captain Mat",
            "experienceYears": 12,
            "bio": "Twenty years guiding the straits and the river mouths.",
            "phone": "+60 12-345 6789",
            "backupPhone": ""
        },
        "charterType": "inshore",
        "charterName": "Blue Runner",
        "state": "Johor",
        "city": "Mersing",
        "startingPoint": "Jeti Mersing, Jalan Abu Bakar",
        "postcode": "86800",
        "latitude": 2.4312,
        "longitude": 103.8405,
        "description": "Full day and half day trips chasing queenfish and grouper around the islands.",
        "tone": "professional",
        "boat": { "name": "Blue Runner", "type": "Center Console", "lengthFeet": 28.5, "capacity": 6 },
        "amenities": ["Live bait", "Life jackets"],
        "policies": { "licenseProvided": true, "catchAndRelease": true },
        "pickup": { "available": true, "fee": 30.0, "areas": ["Mersing town"], "notes": "Hotel lobby pickups" },
        "trips": [{
            "name": "Half day inshore",
            "tripType": "Half-Day Trip",
            "price": 450.0,
            "promoPrice": 390.0,
            "durationHours": 4,
            "startTimes": ["07:00", "13:00"],
            "maxAnglers": 4,
            "charterStyle": "private",
            "species": ["Queenfish", "Grouper"],
            "techniques": ["Jigging"]
        }],
        "photos": ["p1.jpg", "p2.jpg", "p3.jpg"],
        "uploadedPhotos": [{ "name": "charters/c1/media/p1.jpg", "url": "https://cdn.example.com/p1.jpg" }]
    })
}

fn finalize_media() -> Value {
    json!({ "media": {
        "images": [
            { "name": "charters/c1/media/p1.jpg", "url": "https://cdn.example.com/p1.jpg", "sizeBytes": 1024000, "width": 1920, "height": 1080 },
            { "name": "charters/c1/media/p2.jpg", "url": "https://cdn.example.com/p2.jpg" }
        ],
        "videos": [
            { "name": "charters/c1/media/v1.mp4", "url": "https://cdn.example.com/v1.mp4" }
        ],
        "imagesOrder": [1, 0],
        "imagesCoverIndex": 0,
        "avatar": { "name": "captains/u1/avatar/p.jpg", "url": "https://cdn.example.com/a.jpg" }
    }})
}

// =============================================================================
// INVARIANT: Validation Is Deterministic
// =============================================================================

#[test]
fn test_same_input_same_issue_list() {
    let broken = json!({
        "operator": { "displayName": "", "experienceYears": -1, "bio": "short", "phone": "x" },
        "postcode": "8680",
        "latitude": 91,
        "pickup": { "available": true, "fee": null, "areas": [] },
        "trips": [],
        "photos": []
    });
    let first = CharterForm::parse(&broken).unwrap_err();
    let second = CharterForm::parse(&broken).unwrap_err();
    assert_eq!(first, second);
    assert!(first.issues.len() >= 8);
}

// =============================================================================
// INVARIANT: Validated Output Is A Fixed Point
// =============================================================================

#[test]
fn test_charter_form_idempotence() {
    let parsed = CharterForm::parse(&charter_form()).unwrap();
    let reparsed = CharterForm::parse(&serde_json::to_value(&parsed).unwrap()).unwrap();
    assert_eq!(parsed, reparsed);
}

#[test]
fn test_trip_idempotence_with_defaults() {
    let parsed = Trip::parse(&json!({
        "name": "Night jigging",
        "tripType": "Custom",
        "price": 900,
        "durationHours": 8,
        "startTimes": ["20:00"],
        "maxAnglers": 6,
        "charterStyle": "shared"
    }))
    .unwrap();
    assert!(parsed.species.is_empty());
    let reparsed = Trip::parse(&serde_json::to_value(&parsed).unwrap()).unwrap();
    assert_eq!(parsed, reparsed);
}

#[test]
fn test_policies_idempotence() {
    let parsed = Policies::parse(&json!({})).unwrap();
    let reparsed = Policies::parse(&serde_json::to_value(parsed).unwrap()).unwrap();
    assert_eq!(parsed, reparsed);
}

#[test]
fn test_finalize_media_idempotence() {
    let parsed = FinalizeMedia::parse(&finalize_media()).unwrap();
    let reparsed = FinalizeMedia::parse(&serde_json::to_value(&parsed).unwrap()).unwrap();
    assert_eq!(parsed, reparsed);
}

#[test]
fn test_charter_update_idempotence() {
    let parsed = CharterUpdate::parse(&json!({
        "charter": { "name": "Blue Runner II", "latitude": null },
        "trips": [{ "id": "t1", "price": 500.0, "_delete": false }]
    }))
    .unwrap();
    let reparsed = CharterUpdate::parse(&serde_json::to_value(&parsed).unwrap()).unwrap();
    assert_eq!(parsed, reparsed);
}

#[test]
fn test_draft_patch_idempotence() {
    let parsed = DraftPatch::parse(&json!({
        "dataPartial": { "charterName": "Blue Runner" },
        "clientVersion": 4,
        "currentStep": 2
    }))
    .unwrap();
    let reparsed = DraftPatch::parse(&serde_json::to_value(&parsed).unwrap()).unwrap();
    assert_eq!(parsed, reparsed);
}

#[test]
fn test_media_removal_idempotence() {
    let parsed = MediaRemoval::parse(&json!({ "storageKey": "charters/c1/media/p.jpg" })).unwrap();
    let reparsed = MediaRemoval::parse(&serde_json::to_value(&parsed).unwrap()).unwrap();
    assert_eq!(parsed, reparsed);
}

#[test]
fn test_video_schemas_idempotence() {
    let upload = CreateUpload::parse(&json!({ "fileName": "clip.mov", "fileType": "" })).unwrap();
    let upload_again =
        CreateUpload::parse(&serde_json::to_value(&upload).unwrap()).unwrap();
    assert_eq!(upload, upload_again);

    let finish = FinishForm::parse(&json!({
        "videoUrl": "https://cdn.example.com/tmp/clip.mp4",
        "startSec": 3.5,
        "endSec": 18.0,
        "ownerId": "user_1"
    }))
    .unwrap();
    let finish_again = FinishForm::parse(&serde_json::to_value(&finish).unwrap()).unwrap();
    assert_eq!(finish, finish_again);
}

#[test]
fn test_normalizer_is_idempotent_over_its_own_output() {
    let normalized = normalize_finalize_media(&json!({
        "images": [{ "name": "a", "url": "u" }],
        "imagesOrder": [0],
        "avatar": { "name": "x", "url": "y" }
    }))
    .unwrap();
    let rendered = serde_json::to_value(&normalized).unwrap();
    let again = normalize_finalize_media(&rendered).unwrap();
    assert_eq!(normalized, again);
}

// =============================================================================
// INVARIANT: Failure Enumerates Every Violation
// =============================================================================

#[test]
fn test_all_violations_reported_in_one_round_trip() {
    let mut form = charter_form();
    form["operator"]["bio"] = json!("short");
    form["postcode"] = json!("ABC");
    form["trips"][0]["startTimes"] = json!(["8:00"]);
    form["photos"] = json!(["only-one.jpg"]);

    let err = CharterForm::parse(&form).unwrap_err();
    assert!(err.has_path("operator.bio"));
    assert!(err.has_path("postcode"));
    assert!(err.has_path("trips[0].startTimes[0]"));
    assert!(err.has_path("photos"));
    assert_eq!(err.issues.len(), 4);
}

#[test]
fn test_messages_read_as_sentences() {
    let mut form = charter_form();
    form["trips"] = json!([]);
    let err = CharterForm::parse(&form).unwrap_err();
    assert_eq!(err.issues[0].message, "Add at least one trip");
}
