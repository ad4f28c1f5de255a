//! Typed outputs of the charter form schemas.
//!
//! Field names serialize in the wire casing the form layer uses
//! (camelCase). Optional fields are skipped when absent so a validated
//! value re-serializes to a payload the same schema accepts unchanged.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Whether a trip is booked as a whole boat or per seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharterStyle {
    Private,
    Shared,
}

/// Voice used by the description generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Friendly,
    Adventurous,
    Professional,
}

/// One bookable offering under a charter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub trip_type: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_price: Option<f64>,
    pub duration_hours: i64,
    pub start_times: Vec<String>,
    pub max_anglers: i64,
    pub charter_style: CharterStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub species: Vec<String>,
    #[serde(default)]
    pub techniques: Vec<String>,
}

/// Charter policies and rules. Every flag defaults to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policies {
    #[serde(default)]
    pub license_provided: bool,
    #[serde(default)]
    pub catch_and_keep: bool,
    #[serde(default)]
    pub catch_and_release: bool,
    #[serde(default)]
    pub child_friendly: bool,
    #[serde(default)]
    pub live_bait_provided: bool,
    #[serde(default)]
    pub alcohol_not_allowed: bool,
    #[serde(default)]
    pub smoking_not_allowed: bool,
}

/// Operator profile. Names and email come from the account session,
/// not from this form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operator {
    pub display_name: String,
    pub experience_years: i64,
    pub bio: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_phone: Option<String>,
    /// Opaque file reference from the upload widget; not inspected here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Boat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub boat_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_feet: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Pickup service offer. `fee` stays nullable on the wire; the form
/// rule that a fee must accompany `available: true` lives in the
/// validator, not the type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pickup {
    pub available: bool,
    pub fee: Option<f64>,
    pub areas: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Already-uploaded media metadata carried through a draft reload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedMedia {
    pub name: String,
    pub url: String,
}

/// The full charter registration form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharterForm {
    pub operator: Operator,
    pub charter_type: String,
    pub charter_name: String,
    pub state: String,
    pub city: String,
    /// Full address string from the places lookup.
    pub starting_point: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    pub postcode: String,
    pub latitude: f64,
    pub longitude: f64,
    /// User-editable final description, possibly started from an
    /// auto-generated draft.
    pub description: String,
    /// Last generated baseline, kept to diff user edits against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_description: Option<String>,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub without_boat: bool,
    pub boat: Boat,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub policies: Policies,
    pub pickup: Pickup,
    pub trips: Vec<Trip>,
    /// Opaque file references; counted here, inspected by the upload layer.
    pub photos: Vec<Value>,
    #[serde(default)]
    pub videos: Vec<Value>,
    #[serde(default)]
    pub uploaded_photos: Vec<UploadedMedia>,
    #[serde(default)]
    pub uploaded_videos: Vec<UploadedMedia>,
}
