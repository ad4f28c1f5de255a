//! Draft autosave contract.
//!
//! The wizard persists work-in-progress as a draft; each autosave sends
//! a partially-validated blob plus an optimistic-concurrency version.
//! The blob itself is sanitized at the merge stage, not here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validate::{fields, Issues, ValidationResult};

/// Incremental autosave payload for a charter draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftPatch {
    /// Arbitrary partial form data, passed through untouched.
    #[serde(default)]
    pub data_partial: Value,
    /// Compared against the stored draft version by the persistence
    /// layer; a stale client loses the write.
    pub client_version: i64,
    /// Wizard position, when the client reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_step: Option<i64>,
}

impl DraftPatch {
    pub fn parse(value: &Value) -> ValidationResult<Self> {
        let mut issues = Issues::new();
        let root = match fields::object(value, &mut issues) {
            Some(root) => root,
            None => return Err(issues.into_error()),
        };

        let data_partial = root.get("dataPartial").cloned().unwrap_or(Value::Null);

        let client_version =
            fields::required_int(root, "clientVersion", "", "Whole numbers only", &mut issues);
        if let Some(v) = client_version {
            if v < 0 {
                issues.push("clientVersion", "Version must be zero or more");
            }
        }

        let current_step =
            fields::optional_int(root, "currentStep", "", "Whole numbers only", &mut issues);
        if let Some(step) = current_step {
            if !(0..=10).contains(&step) {
                issues.push("currentStep", "Step must be between 0 and 10");
            }
        }

        match client_version {
            Some(client_version) => issues.into_result(DraftPatch {
                data_partial,
                client_version,
                current_step,
            }),
            None => Err(issues.into_error()),
        }
    }
}
