//! Partial charter update (edit-mode PATCH) contract.
//!
//! Every section and nested field is optional; numeric fields that the
//! edit form can clear are tri-state (`PatchField`), so a consumer can
//! tell "leave alone" from "clear". A trip row is addressed by its
//! nullable `id` and can be marked for deletion with `_delete`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::validate::fields;
use crate::validate::{index, Issues, PatchField, ValidationResult};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharterDetailsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charter_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_point: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_omitted")]
    pub latitude: PatchField<f64>,
    #[serde(default, skip_serializing_if = "PatchField::is_omitted")]
    pub longitude: PatchField<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptainUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_yrs: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoatUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub boat_type: Option<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_omitted")]
    pub length_ft: PatchField<i64>,
    #[serde(default, skip_serializing_if = "PatchField::is_omitted")]
    pub capacity: PatchField<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoliciesUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_provided: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catch_and_keep: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catch_and_release: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_friendly: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_bait_provided: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alcohol_not_allowed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smoking_not_allowed: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(default, skip_serializing_if = "PatchField::is_omitted")]
    pub fee: PatchField<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub areas: Option<Vec<String>>,
}

/// One trip row in an update payload. A null `id` means a new row; a
/// present `_delete: true` marks an existing row for removal.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripUpdate {
    #[serde(default, skip_serializing_if = "PatchField::is_omitted")]
    pub id: PatchField<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_type: Option<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_omitted")]
    pub price: PatchField<f64>,
    #[serde(default, skip_serializing_if = "PatchField::is_omitted")]
    pub duration_hours: PatchField<i64>,
    #[serde(default, skip_serializing_if = "PatchField::is_omitted")]
    pub max_anglers: PatchField<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_omitted")]
    pub description: PatchField<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_times: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub techniques: Option<Vec<String>>,
    #[serde(rename = "_delete", default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<bool>,
}

/// The whole PATCH body.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CharterUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charter: Option<CharterDetailsUpdate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captain: Option<CaptainUpdate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boat: Option<BoatUpdate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policies: Option<PoliciesUpdate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup: Option<PickupUpdate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trips: Option<Vec<TripUpdate>>,
}

impl CharterUpdate {
    /// Validates an edit-mode PATCH payload.
    pub fn parse(value: &Value) -> ValidationResult<Self> {
        let mut issues = Issues::new();
        let root = match fields::object(value, &mut issues) {
            Some(root) => root,
            None => return Err(issues.into_error()),
        };

        let update = CharterUpdate {
            charter: fields::optional_object(root, "charter", "", &mut issues)
                .map(|obj| charter_details(obj, &mut issues)),
            captain: fields::optional_object(root, "captain", "", &mut issues)
                .map(|obj| captain(obj, &mut issues)),
            boat: fields::optional_object(root, "boat", "", &mut issues)
                .map(|obj| boat(obj, &mut issues)),
            amenities: fields::optional_string_list(root, "amenities", "", &mut issues),
            features: fields::optional_string_list(root, "features", "", &mut issues),
            policies: fields::optional_object(root, "policies", "", &mut issues)
                .map(|obj| policies(obj, &mut issues)),
            pickup: fields::optional_object(root, "pickup", "", &mut issues)
                .map(|obj| pickup(obj, &mut issues)),
            trips: trips(root, &mut issues),
        };

        issues.into_result(update)
    }
}

fn charter_details(obj: &Map<String, Value>, issues: &mut Issues) -> CharterDetailsUpdate {
    let prefix = "charter";
    // "tone" rides along as client-only helper state; accept and drop it.
    CharterDetailsUpdate {
        charter_type: fields::optional_str(obj, "charterType", prefix, issues),
        name: fields::optional_str(obj, "name", prefix, issues),
        state: fields::optional_str(obj, "state", prefix, issues),
        city: fields::optional_str(obj, "city", prefix, issues),
        starting_point: fields::optional_str(obj, "startingPoint", prefix, issues),
        postcode: fields::optional_str(obj, "postcode", prefix, issues),
        latitude: fields::patch_num(obj, "latitude", prefix, issues),
        longitude: fields::patch_num(obj, "longitude", prefix, issues),
        description: fields::optional_str(obj, "description", prefix, issues),
    }
}

fn captain(obj: &Map<String, Value>, issues: &mut Issues) -> CaptainUpdate {
    let prefix = "captain";
    CaptainUpdate {
        display_name: fields::optional_str(obj, "displayName", prefix, issues),
        phone: fields::optional_str(obj, "phone", prefix, issues),
        bio: fields::optional_str(obj, "bio", prefix, issues),
        experience_yrs: fields::optional_int(obj, "experienceYrs", prefix, "Whole numbers only", issues),
    }
}

fn boat(obj: &Map<String, Value>, issues: &mut Issues) -> BoatUpdate {
    let prefix = "boat";
    BoatUpdate {
        name: fields::optional_str(obj, "name", prefix, issues),
        boat_type: fields::optional_str(obj, "type", prefix, issues),
        length_ft: fields::patch_int(obj, "lengthFt", prefix, "Whole numbers only", issues),
        capacity: fields::patch_int(obj, "capacity", prefix, "Whole numbers only", issues),
        features: fields::optional_string_list(obj, "features", prefix, issues),
    }
}

fn policies(obj: &Map<String, Value>, issues: &mut Issues) -> PoliciesUpdate {
    let prefix = "policies";
    PoliciesUpdate {
        license_provided: fields::optional_bool(obj, "licenseProvided", prefix, issues),
        catch_and_keep: fields::optional_bool(obj, "catchAndKeep", prefix, issues),
        catch_and_release: fields::optional_bool(obj, "catchAndRelease", prefix, issues),
        child_friendly: fields::optional_bool(obj, "childFriendly", prefix, issues),
        live_bait_provided: fields::optional_bool(obj, "liveBaitProvided", prefix, issues),
        alcohol_not_allowed: fields::optional_bool(obj, "alcoholNotAllowed", prefix, issues),
        smoking_not_allowed: fields::optional_bool(obj, "smokingNotAllowed", prefix, issues),
    }
}

fn pickup(obj: &Map<String, Value>, issues: &mut Issues) -> PickupUpdate {
    let prefix = "pickup";
    PickupUpdate {
        available: fields::optional_bool(obj, "available", prefix, issues),
        fee: fields::patch_num(obj, "fee", prefix, issues),
        notes: fields::optional_str(obj, "notes", prefix, issues),
        areas: fields::optional_string_list(obj, "areas", prefix, issues),
    }
}

fn trips(root: &Map<String, Value>, issues: &mut Issues) -> Option<Vec<TripUpdate>> {
    let items = fields::optional_raw_list(root, "trips", "", issues)?;
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let prefix = index("trips", i);
        let Some(obj) = fields::object_at(item, &prefix, issues) else {
            continue;
        };
        out.push(TripUpdate {
            id: fields::patch_str(obj, "id", &prefix, issues),
            name: fields::optional_str(obj, "name", &prefix, issues),
            trip_type: fields::optional_str(obj, "tripType", &prefix, issues),
            price: fields::patch_num(obj, "price", &prefix, issues),
            duration_hours: fields::patch_int(obj, "durationHours", &prefix, "Whole numbers only", issues),
            max_anglers: fields::patch_int(obj, "maxAnglers", &prefix, "Whole numbers only", issues),
            style: fields::optional_str(obj, "style", &prefix, issues),
            description: fields::patch_str(obj, "description", &prefix, issues),
            start_times: fields::optional_string_list(obj, "startTimes", &prefix, issues),
            species: fields::optional_string_list(obj, "species", &prefix, issues),
            techniques: fields::optional_string_list(obj, "techniques", &prefix, issues),
            delete: fields::optional_bool(obj, "_delete", &prefix, issues),
        });
    }
    Some(out)
}
