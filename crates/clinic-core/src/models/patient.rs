//! Patient models.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::store::{StoreError, StoreResult};

/// Caller-assigned patient identifier.
pub type PatientId = i32;

/// Longest accepted patient name, in characters.
pub const MAX_NAME_LENGTH: usize = 19;

/// A patient name bounded to [`MAX_NAME_LENGTH`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PatientName(String);

impl PatientName {
    /// Validate and wrap a name.
    pub fn new(name: impl Into<String>) -> StoreResult<Self> {
        let name = name.into();
        let len = name.chars().count();
        if len > MAX_NAME_LENGTH {
            return Err(StoreError::NameTooLong {
                len,
                max: MAX_NAME_LENGTH,
            });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PatientName {
    type Error = StoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PatientName> for String {
    fn from(name: PatientName) -> Self {
        name.0
    }
}

impl fmt::Display for PatientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A patient record. The `id` never changes once the record is stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Unique ID, assigned by the caller
    pub id: PatientId,
    /// Patient name
    pub name: PatientName,
    /// Age in years (not range-checked)
    pub age: i32,
    /// Gender marker, conventionally 'M' or 'F' (not validated)
    pub gender: char,
}

impl Patient {
    /// Create a patient, validating the name length.
    pub fn new(id: PatientId, name: &str, age: i32, gender: char) -> StoreResult<Self> {
        Ok(Self {
            id,
            name: PatientName::new(name)?,
            age,
            gender,
        })
    }
}
