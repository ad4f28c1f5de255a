//! Raw JSON value readers used by the schema validators.
//!
//! Each reader extracts one field from an input object, recording an
//! issue and returning `None` (or a default) when the field is missing
//! or malformed. Readers never stop a parse early; the caller keeps
//! walking so that every violation in the payload is reported together.
//!
//! Type-mismatch wording is shared ("Expected a string", ...);
//! constraint wording is supplied per field by the caller.

use serde_json::{Map, Value};

use super::{index, join, Issues, PatchField};

/// JSON type name used in mismatch messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "integer"
            } else {
                "number"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Reads the input root as an object; anything else is a root-level issue.
pub fn object<'a>(value: &'a Value, issues: &mut Issues) -> Option<&'a Map<String, Value>> {
    match value.as_object() {
        Some(obj) => Some(obj),
        None => {
            issues.push("", "Expected an object");
            None
        }
    }
}

/// Integer view of a JSON number. A float with no fractional part
/// counts as an integer, matching how form payloads carry `2.0`.
pub fn integer_of(value: &Value) -> Option<i64> {
    if let Some(i) = value.as_i64() {
        return Some(i);
    }
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 => {
            Some(f as i64)
        }
        _ => None,
    }
}

/// Required string field. Missing keys report "Required".
pub fn required_str(
    obj: &Map<String, Value>,
    key: &str,
    prefix: &str,
    issues: &mut Issues,
) -> Option<String> {
    let path = join(prefix, key);
    match obj.get(key) {
        None => {
            issues.push(path, "Required");
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            issues.push(path, format!("Expected a string, got {}", type_name(other)));
            None
        }
    }
}

/// Required non-empty string field; `empty_message` covers both the
/// missing and the empty case so a form shows one consistent sentence.
pub fn non_empty_str(
    obj: &Map<String, Value>,
    key: &str,
    prefix: &str,
    empty_message: &str,
    issues: &mut Issues,
) -> Option<String> {
    let path = join(prefix, key);
    match obj.get(key) {
        None => {
            issues.push(path, empty_message);
            None
        }
        Some(Value::String(s)) if s.is_empty() => {
            issues.push(path, empty_message);
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            issues.push(path, format!("Expected a string, got {}", type_name(other)));
            None
        }
    }
}

/// Optional string field. Absent keys are fine; a present non-string
/// (including null) is not.
pub fn optional_str(
    obj: &Map<String, Value>,
    key: &str,
    prefix: &str,
    issues: &mut Issues,
) -> Option<String> {
    match obj.get(key) {
        None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            let path = join(prefix, key);
            issues.push(path, format!("Expected a string, got {}", type_name(other)));
            None
        }
    }
}

/// Required number field.
pub fn required_num(
    obj: &Map<String, Value>,
    key: &str,
    prefix: &str,
    issues: &mut Issues,
) -> Option<f64> {
    let path = join(prefix, key);
    match obj.get(key) {
        None => {
            issues.push(path, "Required");
            None
        }
        Some(v) => match v.as_f64() {
            Some(n) => Some(n),
            None => {
                issues.push(path, format!("Expected a number, got {}", type_name(v)));
                None
            }
        },
    }
}

/// Optional number field.
pub fn optional_num(
    obj: &Map<String, Value>,
    key: &str,
    prefix: &str,
    issues: &mut Issues,
) -> Option<f64> {
    match obj.get(key) {
        None => None,
        Some(v) => match v.as_f64() {
            Some(n) => Some(n),
            None => {
                let path = join(prefix, key);
                issues.push(path, format!("Expected a number, got {}", type_name(v)));
                None
            }
        },
    }
}

/// Required whole-number field; `int_message` fires when a number is
/// present but fractional.
pub fn required_int(
    obj: &Map<String, Value>,
    key: &str,
    prefix: &str,
    int_message: &str,
    issues: &mut Issues,
) -> Option<i64> {
    let path = join(prefix, key);
    match obj.get(key) {
        None => {
            issues.push(path, "Required");
            None
        }
        Some(v) if v.is_number() => match integer_of(v) {
            Some(i) => Some(i),
            None => {
                issues.push(path, int_message);
                None
            }
        },
        Some(other) => {
            issues.push(path, format!("Expected a number, got {}", type_name(other)));
            None
        }
    }
}

/// Optional whole-number field.
pub fn optional_int(
    obj: &Map<String, Value>,
    key: &str,
    prefix: &str,
    int_message: &str,
    issues: &mut Issues,
) -> Option<i64> {
    match obj.get(key) {
        None => None,
        Some(v) if v.is_number() => match integer_of(v) {
            Some(i) => Some(i),
            None => {
                issues.push(join(prefix, key), int_message);
                None
            }
        },
        Some(other) => {
            let path = join(prefix, key);
            issues.push(path, format!("Expected a number, got {}", type_name(other)));
            None
        }
    }
}

/// Required boolean field.
pub fn required_bool(
    obj: &Map<String, Value>,
    key: &str,
    prefix: &str,
    issues: &mut Issues,
) -> Option<bool> {
    let path = join(prefix, key);
    match obj.get(key) {
        None => {
            issues.push(path, "Required");
            None
        }
        Some(Value::Bool(b)) => Some(*b),
        Some(other) => {
            issues.push(path, format!("Expected a boolean, got {}", type_name(other)));
            None
        }
    }
}

/// Optional boolean field.
pub fn optional_bool(
    obj: &Map<String, Value>,
    key: &str,
    prefix: &str,
    issues: &mut Issues,
) -> Option<bool> {
    match obj.get(key) {
        None => None,
        Some(Value::Bool(b)) => Some(*b),
        Some(other) => {
            let path = join(prefix, key);
            issues.push(path, format!("Expected a boolean, got {}", type_name(other)));
            None
        }
    }
}

/// Optional boolean defaulting to `false` when absent.
pub fn bool_or_false(
    obj: &Map<String, Value>,
    key: &str,
    prefix: &str,
    issues: &mut Issues,
) -> bool {
    optional_bool(obj, key, prefix, issues).unwrap_or(false)
}

/// Required nested-object field.
pub fn required_object<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
    prefix: &str,
    issues: &mut Issues,
) -> Option<&'a Map<String, Value>> {
    let path = join(prefix, key);
    match obj.get(key) {
        None => {
            issues.push(path, "Required");
            None
        }
        Some(Value::Object(nested)) => Some(nested),
        Some(other) => {
            issues.push(path, format!("Expected an object, got {}", type_name(other)));
            None
        }
    }
}

/// Optional nested-object field.
pub fn optional_object<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
    prefix: &str,
    issues: &mut Issues,
) -> Option<&'a Map<String, Value>> {
    match obj.get(key) {
        None => None,
        Some(Value::Object(nested)) => Some(nested),
        Some(other) => {
            let path = join(prefix, key);
            issues.push(path, format!("Expected an object, got {}", type_name(other)));
            None
        }
    }
}

/// Reads a list element (or any standalone value) as an object.
pub fn object_at<'a>(
    value: &'a Value,
    path: &str,
    issues: &mut Issues,
) -> Option<&'a Map<String, Value>> {
    match value.as_object() {
        Some(obj) => Some(obj),
        None => {
            issues.push(path, format!("Expected an object, got {}", type_name(value)));
            None
        }
    }
}

/// Required list field, handed back raw for element-level validation.
pub fn raw_list<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
    prefix: &str,
    issues: &mut Issues,
) -> Option<&'a Vec<Value>> {
    let path = join(prefix, key);
    match obj.get(key) {
        None => {
            issues.push(path, "Required");
            None
        }
        Some(Value::Array(items)) => Some(items),
        Some(other) => {
            issues.push(path, format!("Expected a list, got {}", type_name(other)));
            None
        }
    }
}

/// Optional list field, raw.
pub fn optional_raw_list<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
    prefix: &str,
    issues: &mut Issues,
) -> Option<&'a Vec<Value>> {
    match obj.get(key) {
        None => None,
        Some(Value::Array(items)) => Some(items),
        Some(other) => {
            let path = join(prefix, key);
            issues.push(path, format!("Expected a list, got {}", type_name(other)));
            None
        }
    }
}

/// Required list of strings; each offending element gets its own
/// indexed path.
pub fn string_list(
    obj: &Map<String, Value>,
    key: &str,
    prefix: &str,
    issues: &mut Issues,
) -> Option<Vec<String>> {
    let items = raw_list(obj, key, prefix, issues)?;
    Some(string_elements(items, &join(prefix, key), issues))
}

/// Optional list of strings defaulting to empty when absent.
pub fn string_list_or_empty(
    obj: &Map<String, Value>,
    key: &str,
    prefix: &str,
    issues: &mut Issues,
) -> Vec<String> {
    match optional_raw_list(obj, key, prefix, issues) {
        Some(items) => string_elements(items, &join(prefix, key), issues),
        None => Vec::new(),
    }
}

/// Optional list of strings, absent stays absent.
pub fn optional_string_list(
    obj: &Map<String, Value>,
    key: &str,
    prefix: &str,
    issues: &mut Issues,
) -> Option<Vec<String>> {
    let items = optional_raw_list(obj, key, prefix, issues)?;
    Some(string_elements(items, &join(prefix, key), issues))
}

fn string_elements(items: &[Value], path: &str, issues: &mut Issues) -> Vec<String> {
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match item.as_str() {
            Some(s) => out.push(s.to_string()),
            None => issues.push(
                index(path, i),
                format!("Expected a string, got {}", type_name(item)),
            ),
        }
    }
    out
}

/// Required URL-shaped string field.
pub fn url_str(
    obj: &Map<String, Value>,
    key: &str,
    prefix: &str,
    issues: &mut Issues,
) -> Option<String> {
    let s = required_str(obj, key, prefix, issues)?;
    check_url(s, &join(prefix, key), issues)
}

/// Optional URL-shaped string field.
pub fn optional_url_str(
    obj: &Map<String, Value>,
    key: &str,
    prefix: &str,
    issues: &mut Issues,
) -> Option<String> {
    let s = optional_str(obj, key, prefix, issues)?;
    check_url(s, &join(prefix, key), issues)
}

fn check_url(s: String, path: &str, issues: &mut Issues) -> Option<String> {
    match url::Url::parse(&s) {
        Ok(_) => Some(s),
        Err(_) => {
            issues.push(path, "Invalid URL");
            None
        }
    }
}

/// Tri-state string field for partial updates.
pub fn patch_str(
    obj: &Map<String, Value>,
    key: &str,
    prefix: &str,
    issues: &mut Issues,
) -> PatchField<String> {
    match obj.get(key) {
        None => PatchField::Omitted,
        Some(Value::Null) => PatchField::Null,
        Some(Value::String(s)) => PatchField::Value(s.clone()),
        Some(other) => {
            let path = join(prefix, key);
            issues.push(path, format!("Expected a string, got {}", type_name(other)));
            PatchField::Omitted
        }
    }
}

/// Tri-state number field for partial updates.
pub fn patch_num(
    obj: &Map<String, Value>,
    key: &str,
    prefix: &str,
    issues: &mut Issues,
) -> PatchField<f64> {
    match obj.get(key) {
        None => PatchField::Omitted,
        Some(Value::Null) => PatchField::Null,
        Some(v) => match v.as_f64() {
            Some(n) => PatchField::Value(n),
            None => {
                let path = join(prefix, key);
                issues.push(path, format!("Expected a number, got {}", type_name(v)));
                PatchField::Omitted
            }
        },
    }
}

/// Tri-state whole-number field for partial updates.
pub fn patch_int(
    obj: &Map<String, Value>,
    key: &str,
    prefix: &str,
    int_message: &str,
    issues: &mut Issues,
) -> PatchField<i64> {
    match obj.get(key) {
        None => PatchField::Omitted,
        Some(Value::Null) => PatchField::Null,
        Some(v) if v.is_number() => match integer_of(v) {
            Some(i) => PatchField::Value(i),
            None => {
                issues.push(join(prefix, key), int_message);
                PatchField::Omitted
            }
        },
        Some(other) => {
            let path = join(prefix, key);
            issues.push(path, format!("Expected a number, got {}", type_name(other)));
            PatchField::Omitted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_integer_view_accepts_whole_floats() {
        assert_eq!(integer_of(&json!(2)), Some(2));
        assert_eq!(integer_of(&json!(2.0)), Some(2));
        assert_eq!(integer_of(&json!(2.5)), None);
        assert_eq!(integer_of(&json!("2")), None);
    }

    #[test]
    fn test_missing_required_string_reports_required() {
        let mut issues = Issues::new();
        let input = obj(json!({}));
        assert_eq!(required_str(&input, "name", "", &mut issues), None);
        let err = issues.into_error();
        assert_eq!(err.issues[0].path, "name");
        assert_eq!(err.issues[0].message, "Required");
    }

    #[test]
    fn test_type_mismatch_names_the_actual_type() {
        let mut issues = Issues::new();
        let input = obj(json!({ "name": 42 }));
        assert_eq!(required_str(&input, "name", "", &mut issues), None);
        assert!(issues.into_error().issues[0].message.contains("integer"));
    }

    #[test]
    fn test_optional_rejects_null() {
        let mut issues = Issues::new();
        let input = obj(json!({ "description": null }));
        assert_eq!(optional_str(&input, "description", "", &mut issues), None);
        assert!(!issues.is_empty());
    }

    #[test]
    fn test_bool_or_false_defaults_absent_keys() {
        let mut issues = Issues::new();
        let input = obj(json!({}));
        assert!(!bool_or_false(&input, "childFriendly", "", &mut issues));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_string_list_flags_bad_elements_by_index() {
        let mut issues = Issues::new();
        let input = obj(json!({ "areas": ["north", 3, "south"] }));
        let areas = string_list(&input, "areas", "pickup", &mut issues);
        assert_eq!(areas, Some(vec!["north".into(), "south".into()]));
        let err = issues.into_error();
        assert_eq!(err.issues[0].path, "pickup.areas[1]");
    }

    #[test]
    fn test_url_reader() {
        let mut issues = Issues::new();
        let input = obj(json!({ "url": "https://example.com/a.jpg", "bad": "not-a-url" }));
        assert!(url_str(&input, "url", "", &mut issues).is_some());
        assert!(url_str(&input, "bad", "", &mut issues).is_none());
        let err = issues.into_error();
        assert_eq!(err.issues.len(), 1);
        assert_eq!(err.issues[0].message, "Invalid URL");
    }

    #[test]
    fn test_patch_readers_distinguish_null_from_absent() {
        let mut issues = Issues::new();
        let input = obj(json!({ "fee": null, "price": 10.0 }));
        assert_eq!(patch_num(&input, "fee", "", &mut issues), PatchField::Null);
        assert_eq!(
            patch_num(&input, "price", "", &mut issues),
            PatchField::Value(10.0)
        );
        assert_eq!(
            patch_num(&input, "missing", "", &mut issues),
            PatchField::Omitted
        );
        assert!(issues.is_empty());
    }
}
