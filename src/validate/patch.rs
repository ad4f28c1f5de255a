//! Tri-state field for partial-update payloads.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// Field state in a partial-update payload.
///
/// A PATCH body distinguishes "leave the stored value untouched" (key
/// absent) from "clear the stored value" (key present as JSON null), so
/// `Option<T>` is not enough.
///
/// Serialization skips nothing by itself; pair every use with
/// `#[serde(default, skip_serializing_if = "PatchField::is_omitted")]`
/// so an omitted field stays off the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatchField<T> {
    /// Key absent: leave the stored value unchanged.
    #[default]
    Omitted,
    /// Key present as null: clear the stored value.
    Null,
    /// Key present with a value: replace the stored value.
    Value(T),
}

impl<T> PatchField<T> {
    pub fn is_omitted(&self) -> bool {
        matches!(self, PatchField::Omitted)
    }

    /// The carried value, when one is present.
    pub fn value(&self) -> Option<&T> {
        match self {
            PatchField::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T: Serialize> Serialize for PatchField<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PatchField::Value(v) => v.serialize(serializer),
            // Omitted only reaches here without skip_serializing_if;
            // both remaining states encode as null.
            _ => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PatchField<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Key absence is handled by #[serde(default)]; reaching this
        // impl means the key was present.
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => PatchField::Value(v),
            None => PatchField::Null,
        })
    }
}
