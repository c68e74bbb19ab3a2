//! # Domain models for user records
//!
//! The types exchanged with the remote `/userrecord/` collection and handed
//! between the form and the list controller.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Record`] | One persisted user entity, including the server-assigned [`RecordKey`]. |
//! | [`RecordBody`] | A record without its key. This is the create/update request body and the form's submission payload. |
//! | [`DraftRecord`] | The in-progress form state; `age` is still raw input text. |
//! | [`EditorMode`] | Whether the modal creates a new record or edits the one addressed by a key. |
//! | [`Age`] | Years as a number. Serialised as a JSON number (integral values without a fraction), read from a number or a numeric string. |
//!
//! Field names on the wire are camelCase (`firstName`, `lastName`), matching
//! the mock API.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::tags::TagSet;

/// Opaque identifier assigned by the backing store.
///
/// Always a string on the wire. Numeric ids are accepted on read and kept in
/// their decimal form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey(String);

impl RecordKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl Serialize for RecordKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyVisitor;

        impl Visitor<'_> for KeyVisitor {
            type Value = RecordKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer record id")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<RecordKey, E> {
                Ok(RecordKey::new(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<RecordKey, E> {
                Ok(RecordKey::new(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<RecordKey, E> {
                Ok(RecordKey::new(v.to_string()))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}

/// Age in years. Any finite number; the form only checks that the input
/// is numeric.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Age(pub f64);

impl Age {
    /// Parse user input. Surrounding whitespace is ignored; `NaN` and
    /// infinities are rejected.
    pub fn parse(input: &str) -> Option<Self> {
        input
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Age)
    }

    fn as_whole(self) -> Option<i64> {
        let in_range = (i64::MIN as f64..=i64::MAX as f64).contains(&self.0);
        (self.0.fract() == 0.0 && in_range).then_some(self.0 as i64)
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Age {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_whole() {
            Some(whole) => serializer.serialize_i64(whole),
            None => serializer.serialize_f64(self.0),
        }
    }
}

impl<'de> Deserialize<'de> for Age {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AgeVisitor;

        impl Visitor<'_> for AgeVisitor {
            type Value = Age;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an age as a number or numeric string")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Age, E> {
                Ok(Age(v as f64))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Age, E> {
                Ok(Age(v as f64))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Age, E> {
                if v.is_finite() {
                    Ok(Age(v))
                } else {
                    Err(E::custom(format!("age is not finite: {v}")))
                }
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Age, E> {
                Age::parse(v).ok_or_else(|| E::custom(format!("age is not numeric: {v:?}")))
            }
        }

        deserializer.deserialize_any(AgeVisitor)
    }
}

/// A persisted user record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordKey,
    pub first_name: String,
    pub last_name: String,
    pub age: Age,
    pub address: String,
    #[serde(default)]
    pub tags: TagSet,
}

impl Record {
    pub fn from_body(id: RecordKey, body: RecordBody) -> Self {
        Self {
            id,
            first_name: body.first_name,
            last_name: body.last_name,
            age: body.age,
            address: body.address,
            tags: body.tags,
        }
    }

    /// The record's fields without its key.
    pub fn body(&self) -> RecordBody {
        RecordBody {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: self.age,
            address: self.address.clone(),
            tags: self.tags.clone(),
        }
    }
}

/// Request body for create and update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordBody {
    pub first_name: String,
    pub last_name: String,
    pub age: Age,
    pub address: String,
    #[serde(default)]
    pub tags: TagSet,
}

/// Form state before submission.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DraftRecord {
    pub first_name: String,
    pub last_name: String,
    /// Raw age input; validated on submit.
    pub age: String,
    pub address: String,
    pub tags: TagSet,
}

impl From<&RecordBody> for DraftRecord {
    fn from(body: &RecordBody) -> Self {
        Self {
            first_name: body.first_name.clone(),
            last_name: body.last_name.clone(),
            age: body.age.to_string(),
            address: body.address.clone(),
            tags: body.tags.clone(),
        }
    }
}

impl From<&Record> for DraftRecord {
    fn from(record: &Record) -> Self {
        Self::from(&record.body())
    }
}

/// What the open modal is doing.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EditorMode {
    Create,
    Edit(RecordKey),
}

impl EditorMode {
    /// The key of the record being edited, if any.
    pub fn target(&self) -> Option<&RecordKey> {
        match self {
            EditorMode::Create => None,
            EditorMode::Edit(key) => Some(key),
        }
    }

    pub fn modal_title(&self) -> &'static str {
        match self {
            EditorMode::Create => "Add Record",
            EditorMode::Edit(_) => "Edit Record",
        }
    }

    pub fn confirm_label(&self) -> &'static str {
        match self {
            EditorMode::Create => "Create",
            EditorMode::Edit(_) => "Update",
        }
    }
}
