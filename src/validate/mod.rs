//! Validation plumbing shared by every schema module.
//!
//! # Design Principles
//!
//! - Validation failure is a value, never a panic
//! - Every violation found is reported, not just the first
//! - Each violation carries the dotted/array path to the offending field
//! - Defaults are applied during validation, so validated output is a
//!   stable fixed point under re-validation

pub(crate) mod fields;

mod patch;

pub use patch::PatchField;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One field-level violation: where it happened and what a person
/// should read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    /// Dotted/array path into the input, e.g. `trips[0].startTimes[1]`.
    /// Empty for violations at the input root.
    pub path: String,
    /// End-user-readable sentence, safe to surface in a form UI.
    pub message: String,
}

impl FieldIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Validation failure: the ordered list of every violation discovered.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("validation failed: {}", summarize(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    /// Paths of all reported violations, in discovery order.
    pub fn paths(&self) -> Vec<&str> {
        self.issues.iter().map(|i| i.path.as_str()).collect()
    }

    /// True when some violation was reported at exactly this path.
    pub fn has_path(&self, path: &str) -> bool {
        self.issues.iter().any(|i| i.path == path)
    }
}

fn summarize(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for schema validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Accumulates field issues while a parse walks the input.
#[derive(Debug, Default)]
pub struct Issues {
    list: Vec<FieldIssue>,
}

impl Issues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one violation.
    pub fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.list.push(FieldIssue::new(path, message));
    }

    /// Absorbs the violations of a nested parse, re-rooted under `prefix`.
    pub fn absorb(&mut self, prefix: &str, error: ValidationError) {
        for issue in error.issues {
            let path = join(prefix, &issue.path);
            self.list.push(FieldIssue::new(path, issue.message));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Ok with the value when nothing was reported, Err otherwise.
    /// The value handed in is discarded on the error path.
    pub fn into_result<T>(self, value: T) -> ValidationResult<T> {
        if self.list.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError { issues: self.list })
        }
    }

    pub fn into_error(self) -> ValidationError {
        ValidationError { issues: self.list }
    }
}

/// Joins a path prefix and a field key: `join("pickup", "fee")` is
/// `"pickup.fee"`, `join("", "fee")` is `"fee"`.
pub fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else if key.is_empty() {
        prefix.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// Appends an array index to a path: `index("trips", 0)` is `"trips[0]"`.
pub fn index(path: &str, i: usize) -> String {
    format!("{}[{}]", path, i)
}
