//! Step projections of the charter form.
//!
//! The registration wizard submits one page at a time; each step schema
//! validates only the fields that page owns, by running the same group
//! checks as the full form parse.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validate::{fields, Issues, ValidationResult};

use super::types::{Boat, Operator, Pickup, Policies, Tone, Trip};
use super::validator;

/// Operator profile plus charter identity and location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicsStep {
    pub operator: Operator,
    pub charter_type: String,
    pub charter_name: String,
    pub state: String,
    pub city: String,
    pub starting_point: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    pub postcode: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Boat, amenities, policies, and pickup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceStep {
    pub boat: Boat,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub policies: Policies,
    pub pickup: Pickup,
}

/// The trip list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripsStep {
    pub trips: Vec<Trip>,
}

/// Photo and video file references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaPricingStep {
    pub photos: Vec<Value>,
    #[serde(default)]
    pub videos: Vec<Value>,
}

/// Final description and generator state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionStep {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_description: Option<String>,
    #[serde(default)]
    pub tone: Tone,
}

impl BasicsStep {
    pub fn parse(value: &Value) -> ValidationResult<Self> {
        run_step(value, validator::check_basics)
    }
}

impl ExperienceStep {
    pub fn parse(value: &Value) -> ValidationResult<Self> {
        run_step(value, validator::check_experience)
    }
}

impl TripsStep {
    pub fn parse(value: &Value) -> ValidationResult<Self> {
        run_step(value, |root, issues| {
            validator::check_trips_field(root, issues).map(|trips| TripsStep { trips })
        })
    }
}

impl MediaPricingStep {
    pub fn parse(value: &Value) -> ValidationResult<Self> {
        run_step(value, validator::check_media_pricing)
    }
}

impl DescriptionStep {
    pub fn parse(value: &Value) -> ValidationResult<Self> {
        run_step(value, validator::check_description)
    }
}

fn run_step<T>(
    value: &Value,
    check: impl FnOnce(&serde_json::Map<String, Value>, &mut Issues) -> Option<T>,
) -> ValidationResult<T> {
    let mut issues = Issues::new();
    let root = match fields::object(value, &mut issues) {
        Some(root) => root,
        None => return Err(issues.into_error()),
    };
    match check(root, &mut issues) {
        Some(step) => issues.into_result(step),
        None => Err(issues.into_error()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_basics_step_validates_only_its_fields() {
        // No trips, photos, or description anywhere in sight.
        let input = json!({
            "operator": {
                "displayName": "Captain Mat",
                "experienceYears": 12,
                "bio": "Twenty years guiding the straits and the river mouths.",
                "phone": "+60 12-345 6789"
            },
            "charterType": "inshore",
            "charterName": "Blue Runner",
            "state": "Johor",
            "city": "Mersing",
            "startingPoint": "Jeti Mersing, Jalan Abu Bakar",
            "postcode": "86800",
            "latitude": 2.4312,
            "longitude": 103.8405
        });
        let step = BasicsStep::parse(&input).unwrap();
        assert_eq!(step.charter_name, "Blue Runner");
    }

    #[test]
    fn test_basics_step_keeps_full_form_rules() {
        let input = json!({
            "operator": {
                "displayName": "Captain Mat",
                "experienceYears": 12,
                "bio": "too short",
                "phone": "+60 12-345 6789"
            },
            "charterType": "inshore",
            "charterName": "Blue Runner",
            "state": "Johor",
            "city": "Mersing",
            "startingPoint": "Jeti Mersing",
            "postcode": "868",
            "latitude": 2.4312,
            "longitude": 103.8405
        });
        let err = BasicsStep::parse(&input).unwrap_err();
        assert!(err.has_path("operator.bio"));
        assert!(err.has_path("postcode"));
    }

    #[test]
    fn test_experience_step_runs_pickup_cross_field_rule() {
        let input = json!({
            "boat": {},
            "policies": {},
            "pickup": { "available": true, "fee": null, "areas": [] }
        });
        let err = ExperienceStep::parse(&input).unwrap_err();
        assert_eq!(err.paths(), vec!["pickup.fee"]);
    }

    #[test]
    fn test_trips_step_requires_one_trip() {
        let err = TripsStep::parse(&json!({ "trips": [] })).unwrap_err();
        assert_eq!(err.issues[0].message, "Add at least one trip");
    }

    #[test]
    fn test_media_pricing_step_counts_files() {
        let input = json!({ "photos": ["a.jpg", "b.jpg", "c.jpg"], "videos": [] });
        let step = MediaPricingStep::parse(&input).unwrap();
        assert_eq!(step.photos.len(), 3);
    }

    #[test]
    fn test_description_step_defaults_tone() {
        let input = json!({
            "description": "Full day and half day trips chasing queenfish and grouper."
        });
        let step = DescriptionStep::parse(&input).unwrap();
        assert_eq!(step.tone, Tone::Friendly);
    }
}
