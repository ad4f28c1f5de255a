//! Validation of the charter registration form.
//!
//! The per-group check functions here are the single source of the
//! form's field rules: the full form parse and every step projection
//! call the same functions, so a step schema cannot drift from the
//! canonical form.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::validate::fields::{self, type_name};
use crate::validate::{index, join, Issues, ValidationResult};

use super::steps::{BasicsStep, DescriptionStep, ExperienceStep, MediaPricingStep};
use super::types::{
    Boat, CharterForm, CharterStyle, Operator, Pickup, Policies, Tone, Trip, UploadedMedia,
};

/// Permissive international phone shape: optional leading `+`, then
/// digits, spaces, hyphens, parentheses, at least six characters.
static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[-\d\s()]{6,}$").expect("phone pattern"));

static POSTCODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{5}$").expect("postcode pattern"));

/// Zero-padded 24-hour clock, e.g. `07:00`.
static START_TIME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}:\d{2}$").expect("time pattern"));

impl Trip {
    /// Validates one trip offering.
    pub fn parse(value: &Value) -> ValidationResult<Self> {
        let mut issues = Issues::new();
        match check_trip(value, "", &mut issues) {
            Some(trip) => issues.into_result(trip),
            None => Err(issues.into_error()),
        }
    }
}

impl Policies {
    /// Validates a policies record; omitted flags resolve to `false`.
    pub fn parse(value: &Value) -> ValidationResult<Self> {
        let mut issues = Issues::new();
        match fields::object(value, &mut issues) {
            Some(obj) => {
                let policies = policies_fields(obj, "", &mut issues);
                issues.into_result(policies)
            }
            None => Err(issues.into_error()),
        }
    }
}

impl CharterForm {
    /// Validates the full registration form.
    pub fn parse(value: &Value) -> ValidationResult<Self> {
        let mut issues = Issues::new();
        let root = match fields::object(value, &mut issues) {
            Some(root) => root,
            None => return Err(issues.into_error()),
        };

        let basics = check_basics(root, &mut issues);
        let narrative = check_description(root, &mut issues);
        let without_boat = fields::bool_or_false(root, "withoutBoat", "", &mut issues);
        let experience = check_experience(root, &mut issues);
        let trips = check_trips_field(root, &mut issues);
        let media = check_media_pricing(root, &mut issues);
        let uploaded_photos = check_uploaded_media(root, "uploadedPhotos", &mut issues);
        let uploaded_videos = check_uploaded_media(root, "uploadedVideos", &mut issues);

        match (basics, narrative, experience, trips, media) {
            (Some(b), Some(n), Some(e), Some(trips), Some(m)) => issues.into_result(CharterForm {
                operator: b.operator,
                charter_type: b.charter_type,
                charter_name: b.charter_name,
                state: b.state,
                city: b.city,
                starting_point: b.starting_point,
                place_id: b.place_id,
                postcode: b.postcode,
                latitude: b.latitude,
                longitude: b.longitude,
                description: n.description,
                generated_description: n.generated_description,
                tone: n.tone,
                without_boat,
                boat: e.boat,
                amenities: e.amenities,
                policies: e.policies,
                pickup: e.pickup,
                trips,
                photos: m.photos,
                videos: m.videos,
                uploaded_photos,
                uploaded_videos,
            }),
            _ => Err(issues.into_error()),
        }
    }
}

pub(crate) fn check_trip(value: &Value, prefix: &str, issues: &mut Issues) -> Option<Trip> {
    let obj = fields::object_at(value, prefix, issues)?;

    let id = fields::optional_str(obj, "id", prefix, issues);
    let name = fields::non_empty_str(obj, "name", prefix, "Trip name is required", issues);
    let trip_type = fields::non_empty_str(obj, "tripType", prefix, "Select a trip type", issues);

    let price = fields::required_num(obj, "price", prefix, issues);
    if let Some(p) = price {
        if p < 0.0 {
            issues.push(join(prefix, "price"), "Price must be zero or more");
        }
    }
    let promo_price = fields::optional_num(obj, "promoPrice", prefix, issues);
    if let Some(p) = promo_price {
        if p < 0.0 {
            issues.push(
                join(prefix, "promoPrice"),
                "Promo/low season price must be zero or more",
            );
        }
    }

    let duration_hours =
        fields::required_int(obj, "durationHours", prefix, "Duration must be whole hours", issues);
    if let Some(h) = duration_hours {
        if h < 1 {
            issues.push(join(prefix, "durationHours"), "At least 1 hour");
        }
    }

    let start_times = check_start_times(obj, prefix, issues);

    let max_anglers = fields::required_int(obj, "maxAnglers", prefix, "Whole numbers only", issues);
    if let Some(n) = max_anglers {
        if n < 1 {
            issues.push(join(prefix, "maxAnglers"), "At least 1 angler");
        }
    }

    let charter_style =
        required_enum::<CharterStyle>(obj, "charterStyle", prefix, "Select charter style", issues);

    let description = fields::optional_str(obj, "description", prefix, issues);
    let species = fields::string_list_or_empty(obj, "species", prefix, issues);
    let techniques = fields::string_list_or_empty(obj, "techniques", prefix, issues);

    match (name, trip_type, price, duration_hours, start_times, max_anglers, charter_style) {
        (
            Some(name),
            Some(trip_type),
            Some(price),
            Some(duration_hours),
            Some(start_times),
            Some(max_anglers),
            Some(charter_style),
        ) => Some(Trip {
            id,
            name,
            trip_type,
            price,
            promo_price,
            duration_hours,
            start_times,
            max_anglers,
            charter_style,
            description,
            species,
            techniques,
        }),
        _ => None,
    }
}

fn check_start_times(
    obj: &Map<String, Value>,
    prefix: &str,
    issues: &mut Issues,
) -> Option<Vec<String>> {
    let path = join(prefix, "startTimes");
    let times = fields::string_list(obj, "startTimes", prefix, issues)?;
    if times.is_empty() {
        issues.push(path.clone(), "Add at least one start time");
    }
    for (i, time) in times.iter().enumerate() {
        if !START_TIME.is_match(time) {
            issues.push(index(&path, i), "Use 24 hour format, e.g. 07:00");
        }
    }
    Some(times)
}

pub(crate) fn policies_fields(
    obj: &Map<String, Value>,
    prefix: &str,
    issues: &mut Issues,
) -> Policies {
    Policies {
        license_provided: fields::bool_or_false(obj, "licenseProvided", prefix, issues),
        catch_and_keep: fields::bool_or_false(obj, "catchAndKeep", prefix, issues),
        catch_and_release: fields::bool_or_false(obj, "catchAndRelease", prefix, issues),
        child_friendly: fields::bool_or_false(obj, "childFriendly", prefix, issues),
        live_bait_provided: fields::bool_or_false(obj, "liveBaitProvided", prefix, issues),
        alcohol_not_allowed: fields::bool_or_false(obj, "alcoholNotAllowed", prefix, issues),
        smoking_not_allowed: fields::bool_or_false(obj, "smokingNotAllowed", prefix, issues),
    }
}

pub(crate) fn check_basics(root: &Map<String, Value>, issues: &mut Issues) -> Option<BasicsStep> {
    let operator = check_operator(root, issues);

    let charter_type = fields::non_empty_str(root, "charterType", "", "Select a charter type", issues);
    let charter_name = fields::non_empty_str(root, "charterName", "", "Charter name is required", issues);
    let state = fields::non_empty_str(root, "state", "", "Select a state", issues);
    let city = fields::non_empty_str(root, "city", "", "Enter a city/town", issues);
    let starting_point =
        fields::non_empty_str(root, "startingPoint", "", "Starting point is required", issues);
    let place_id = fields::optional_str(root, "placeId", "", issues);

    let postcode = fields::required_str(root, "postcode", "", issues);
    if let Some(p) = &postcode {
        if !POSTCODE.is_match(p) {
            issues.push("postcode", "Use a 5 digit postcode");
        }
    }

    let latitude = fields::required_num(root, "latitude", "", issues);
    if let Some(lat) = latitude {
        if !(-90.0..=90.0).contains(&lat) {
            issues.push("latitude", "Latitude must be between -90 and 90");
        }
    }
    let longitude = fields::required_num(root, "longitude", "", issues);
    if let Some(lon) = longitude {
        if !(-180.0..=180.0).contains(&lon) {
            issues.push("longitude", "Longitude must be between -180 and 180");
        }
    }

    match (operator, charter_type, charter_name, state, city, starting_point, postcode, latitude, longitude)
    {
        (
            Some(operator),
            Some(charter_type),
            Some(charter_name),
            Some(state),
            Some(city),
            Some(starting_point),
            Some(postcode),
            Some(latitude),
            Some(longitude),
        ) => Some(BasicsStep {
            operator,
            charter_type,
            charter_name,
            state,
            city,
            starting_point,
            place_id,
            postcode,
            latitude,
            longitude,
        }),
        _ => None,
    }
}

fn check_operator(root: &Map<String, Value>, issues: &mut Issues) -> Option<Operator> {
    let obj = fields::required_object(root, "operator", "", issues)?;
    let prefix = "operator";

    let display_name = fields::non_empty_str(
        obj,
        "displayName",
        prefix,
        "Preferred operator name is required",
        issues,
    );

    let experience_years =
        fields::required_int(obj, "experienceYears", prefix, "Whole numbers only", issues);
    if let Some(years) = experience_years {
        if years < 0 {
            issues.push(join(prefix, "experienceYears"), "Years must be zero or more");
        }
    }

    let bio = fields::required_str(obj, "bio", prefix, issues);
    if let Some(b) = &bio {
        if b.chars().count() < 20 {
            issues.push(
                join(prefix, "bio"),
                "Tell anglers about yourself (min 20 characters)",
            );
        }
    }

    let phone = fields::non_empty_str(obj, "phone", prefix, "Phone number is required", issues);
    if let Some(p) = &phone {
        if !PHONE.is_match(p) {
            issues.push(join(prefix, "phone"), "Enter a valid phone number");
        }
    }

    // Backup phone also admits the empty string, which the form uses
    // for "field shown but left blank".
    let backup_phone = fields::optional_str(obj, "backupPhone", prefix, issues);
    if let Some(p) = &backup_phone {
        if !p.is_empty() && !PHONE.is_match(p) {
            issues.push(join(prefix, "backupPhone"), "Enter a valid phone number");
        }
    }

    // Opaque upload-widget file reference; the media layer inspects it.
    let avatar = match obj.get("avatar") {
        None | Some(Value::Null) => None,
        Some(v) => Some(v.clone()),
    };
    let avatar_url = fields::optional_url_str(obj, "avatarUrl", prefix, issues);

    match (display_name, experience_years, bio, phone) {
        (Some(display_name), Some(experience_years), Some(bio), Some(phone)) => Some(Operator {
            display_name,
            experience_years,
            bio,
            phone,
            backup_phone,
            avatar,
            avatar_url,
        }),
        _ => None,
    }
}

pub(crate) fn check_description(
    root: &Map<String, Value>,
    issues: &mut Issues,
) -> Option<DescriptionStep> {
    let description = fields::required_str(root, "description", "", issues);
    if let Some(d) = &description {
        if d.chars().count() < 40 {
            issues.push("description", "Description should be at least 40 characters");
        }
    }
    let generated_description = fields::optional_str(root, "generatedDescription", "", issues);
    let tone = optional_enum::<Tone>(root, "tone", "", "Select a tone", issues).unwrap_or_default();

    description.map(|description| DescriptionStep {
        description,
        generated_description,
        tone,
    })
}

pub(crate) fn check_experience(
    root: &Map<String, Value>,
    issues: &mut Issues,
) -> Option<ExperienceStep> {
    let boat = check_boat(root, issues);
    let amenities = fields::string_list_or_empty(root, "amenities", "", issues);
    let policies = fields::required_object(root, "policies", "", issues)
        .map(|obj| policies_fields(obj, "policies", issues));
    let pickup = check_pickup(root, issues);

    match (boat, policies, pickup) {
        (Some(boat), Some(policies), Some(pickup)) => Some(ExperienceStep {
            boat,
            amenities,
            policies,
            pickup,
        }),
        _ => None,
    }
}

fn check_boat(root: &Map<String, Value>, issues: &mut Issues) -> Option<Boat> {
    let obj = fields::required_object(root, "boat", "", issues)?;
    let prefix = "boat";

    let length_feet = fields::optional_num(obj, "lengthFeet", prefix, issues);
    if let Some(l) = length_feet {
        if l <= 0.0 {
            issues.push(join(prefix, "lengthFeet"), "Length must be positive");
        }
    }
    let capacity = fields::optional_int(obj, "capacity", prefix, "Whole numbers only", issues);
    if let Some(c) = capacity {
        if c <= 0 {
            issues.push(join(prefix, "capacity"), "Capacity must be positive");
        }
    }

    Some(Boat {
        name: fields::optional_str(obj, "name", prefix, issues),
        boat_type: fields::optional_str(obj, "type", prefix, issues),
        length_feet,
        capacity,
        features: fields::string_list_or_empty(obj, "features", prefix, issues),
    })
}

fn check_pickup(root: &Map<String, Value>, issues: &mut Issues) -> Option<Pickup> {
    let obj = fields::required_object(root, "pickup", "", issues)?;
    let prefix = "pickup";

    let available = fields::required_bool(obj, "available", prefix, issues);

    // fee is nullable but not omittable: the key must be present.
    let fee = match obj.get("fee") {
        None => {
            issues.push(join(prefix, "fee"), "Required");
            None
        }
        Some(Value::Null) => Some(None),
        Some(v) => match v.as_f64() {
            Some(n) => Some(Some(n)),
            None => {
                issues.push(
                    join(prefix, "fee"),
                    format!("Expected a number, got {}", type_name(v)),
                );
                None
            }
        },
    };

    let areas = fields::string_list(obj, "areas", prefix, issues);
    let notes = fields::optional_str(obj, "notes", prefix, issues);

    let pickup = match (available, fee, areas) {
        (Some(available), Some(fee), Some(areas)) => Pickup {
            available,
            fee,
            areas,
            notes,
        },
        _ => return None,
    };

    // Cross-field rule, applied only once the object itself is well
    // formed: an available pickup needs a concrete fee. Reported
    // against the fee field so the form can point at the input.
    if pickup.available && !pickup.fee.is_some_and(f64::is_finite) {
        issues.push(join(prefix, "fee"), "Enter pickup fee");
    }

    Some(pickup)
}

pub(crate) fn check_trips_field(
    root: &Map<String, Value>,
    issues: &mut Issues,
) -> Option<Vec<Trip>> {
    let items = fields::raw_list(root, "trips", "", issues)?;
    if items.is_empty() {
        issues.push("trips", "Add at least one trip");
    }
    let mut trips = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        if let Some(trip) = check_trip(item, &index("trips", i), issues) {
            trips.push(trip);
        }
    }
    Some(trips)
}

pub(crate) fn check_media_pricing(
    root: &Map<String, Value>,
    issues: &mut Issues,
) -> Option<MediaPricingStep> {
    let photos = fields::raw_list(root, "photos", "", issues);
    if let Some(photos) = photos {
        if photos.len() < 3 {
            issues.push("photos", "Upload at least 3 photos");
        } else if photos.len() > 15 {
            issues.push("photos", "Maximum 15 photos");
        }
    }

    let videos = fields::optional_raw_list(root, "videos", "", issues)
        .cloned()
        .unwrap_or_default();
    if videos.len() > 10 {
        issues.push("videos", "Maximum 10 videos");
    }

    photos.map(|photos| MediaPricingStep {
        photos: photos.clone(),
        videos,
    })
}

pub(crate) fn check_uploaded_media(
    root: &Map<String, Value>,
    key: &str,
    issues: &mut Issues,
) -> Vec<UploadedMedia> {
    let Some(items) = fields::optional_raw_list(root, key, "", issues) else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let prefix = index(key, i);
        let Some(obj) = fields::object_at(item, &prefix, issues) else {
            continue;
        };
        let name = fields::required_str(obj, "name", &prefix, issues);
        let url = fields::url_str(obj, "url", &prefix, issues);
        if let (Some(name), Some(url)) = (name, url) {
            out.push(UploadedMedia { name, url });
        }
    }
    out
}

/// Reads an enum-valued field through its serde representation, so the
/// accepted spellings always match the type's wire format. Missing and
/// unrecognized values share the field's message.
fn required_enum<'de, T: Deserialize<'de>>(
    obj: &'de Map<String, Value>,
    key: &str,
    prefix: &str,
    message: &str,
    issues: &mut Issues,
) -> Option<T> {
    let Some(value) = obj.get(key) else {
        issues.push(join(prefix, key), message);
        return None;
    };
    match T::deserialize(value) {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            issues.push(join(prefix, key), message);
            None
        }
    }
}

/// Like [`required_enum`], but an absent key is simply absent.
fn optional_enum<'de, T: Deserialize<'de>>(
    obj: &'de Map<String, Value>,
    key: &str,
    prefix: &str,
    message: &str,
    issues: &mut Issues,
) -> Option<T> {
    let value = obj.get(key)?;
    match T::deserialize(value) {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            issues.push(join(prefix, key), message);
            None
        }
    }
}
