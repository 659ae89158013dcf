//! Graduate record types.
//!
//! Two shapes exist for the same entity:
//! - [`RecordDraft`]: the flat shape held in the legacy local cache and
//!   supplied when creating a record. Carries no identifier or timestamps.
//! - [`GraduateRecord`]: the stored shape, with the store-assigned id,
//!   provenance flag, and server timestamps.
//!
//! The legacy cache encodes `year` as either a JSON string or a JSON
//! number; drafts decode both and carry the value as a string.

use crate::id::DocumentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Wire field names used in store documents and the cache payload.
pub mod field {
    pub const CODE: &str = "code";
    pub const NAME: &str = "name";
    pub const DEPARTMENT: &str = "department";
    pub const YEAR: &str = "year";
    pub const GRADE: &str = "grade";
    pub const FEEDBACK: &str = "feedback";
    pub const STATUS: &str = "status";
    pub const FROM_LOCAL_CACHE: &str = "fromLocalCache";
}

/// Approval state of a graduate record.
///
/// The wire encoding is the legacy literal pair `"Approved"` /
/// `"Under Review"`. Classification is deliberately forgiving: anything
/// other than the literal `"Approved"` — including absence — reads as
/// [`RecordStatus::UnderReview`]. Counting and display follow the same
/// rule, so a record never shows as approved unless the stored value
/// matches exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordStatus {
    Approved,
    #[default]
    UnderReview,
}

impl RecordStatus {
    /// Classify a raw status string.
    pub fn classify(raw: &str) -> Self {
        if raw == "Approved" {
            RecordStatus::Approved
        } else {
            RecordStatus::UnderReview
        }
    }

    /// The display/wire literal for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Approved => "Approved",
            RecordStatus::UnderReview => "Under Review",
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, RecordStatus::Approved)
    }
}

impl From<String> for RecordStatus {
    fn from(raw: String) -> Self {
        RecordStatus::classify(&raw)
    }
}

impl From<RecordStatus> for String {
    fn from(status: RecordStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Flat record shape held in the local cache slot.
///
/// All fields are carried verbatim; no validation is applied beyond shape.
/// `status` defaults to under-review and `feedback` to empty when absent,
/// matching how the store defaults them at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDraft {
    pub code: String,
    pub name: String,
    pub department: String,
    #[serde(deserialize_with = "year_compat")]
    pub year: String,
    pub grade: String,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(default)]
    pub feedback: String,
}

impl RecordDraft {
    /// Build the document field set for a store create call.
    ///
    /// Timestamps are not included; the store stamps them server-side.
    pub fn to_fields(&self, from_local_cache: bool) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert(field::CODE.into(), Value::String(self.code.clone()));
        fields.insert(field::NAME.into(), Value::String(self.name.clone()));
        fields.insert(
            field::DEPARTMENT.into(),
            Value::String(self.department.clone()),
        );
        fields.insert(field::YEAR.into(), Value::String(self.year.clone()));
        fields.insert(field::GRADE.into(), Value::String(self.grade.clone()));
        fields.insert(
            field::FEEDBACK.into(),
            Value::String(self.feedback.clone()),
        );
        fields.insert(
            field::STATUS.into(),
            Value::String(self.status.as_str().to_string()),
        );
        fields.insert(
            field::FROM_LOCAL_CACHE.into(),
            Value::Bool(from_local_cache),
        );
        fields
    }
}

/// Legacy cache payloads store `year` as either a string or a number.
fn year_compat<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum YearCompat {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match YearCompat::deserialize(deserializer)? {
        YearCompat::Text(text) => text,
        YearCompat::Number(number) => number.to_string(),
    })
}

/// A stored graduate record.
///
/// `store_id` is assigned by the document store exactly once, at creation.
/// `code` is the legacy identifier carried through as metadata; it is not
/// unique and is never used as a lookup key.
#[derive(Debug, Clone, PartialEq)]
pub struct GraduateRecord {
    pub store_id: DocumentId,
    pub code: String,
    pub name: String,
    pub department: String,
    pub year: String,
    pub grade: String,
    pub feedback: String,
    pub status: RecordStatus,
    pub from_local_cache: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GraduateRecord {
    /// Assemble a record from a store document's parts.
    ///
    /// Decoding is lenient: a missing or non-`Approved` status reads as
    /// under-review, a missing feedback as empty, a missing provenance
    /// flag as false, and a numeric year is carried as its decimal text.
    pub fn from_parts(
        store_id: DocumentId,
        fields: &Map<String, Value>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        GraduateRecord {
            store_id,
            code: field_text(fields, field::CODE),
            name: field_text(fields, field::NAME),
            department: field_text(fields, field::DEPARTMENT),
            year: field_text(fields, field::YEAR),
            grade: field_text(fields, field::GRADE),
            feedback: field_text(fields, field::FEEDBACK),
            status: fields
                .get(field::STATUS)
                .and_then(Value::as_str)
                .map(RecordStatus::classify)
                .unwrap_or_default(),
            from_local_cache: fields
                .get(field::FROM_LOCAL_CACHE)
                .and_then(Value::as_bool)
                .unwrap_or(false),
            created_at,
            updated_at,
        }
    }
}

/// Extract a field as text: strings verbatim, numbers as decimal text,
/// anything else (or absence) as empty.
fn field_text(fields: &Map<String, Value>, name: &str) -> String {
    match fields.get(name) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        _ => String::new(),
    }
}
