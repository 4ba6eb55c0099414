//! Record model.
//!
//! # Responsibility
//! - Define the canonical `Record` kept by the in-memory store.
//! - Provide the opaque, time-derived `RecordId`.
//!
//! # Invariants
//! - `id` is assigned once at creation and never rewritten.
//! - `name` is stored exactly as supplied (empty strings included).

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Opaque record identifier.
///
/// The inner value is a Unix epoch millisecond timestamp taken at creation
/// time. Serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// Wraps a raw identifier value.
    ///
    /// Used by hosts that receive ids back from user input.
    pub const fn from_raw(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    pub const fn as_raw(self) -> i64 {
        self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry in the record list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Stable identity assigned by the store.
    pub id: RecordId,
    /// Display name; mutable through `RecordStore::update`.
    pub name: String,
}

impl Record {
    /// Creates a record with a caller-provided identity.
    ///
    /// Stores allocate ids themselves; this constructor exists for tests and
    /// hosts that rebuild records from an export.
    pub fn with_id(id: RecordId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Replaces the display name in place.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
