//! Appointment slot and reservation models.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::PatientId;
use crate::store::{StoreError, StoreResult};

/// Number of same-day appointment slots.
pub const MAX_SLOTS: u8 = 5;

/// One of the fixed daily appointment windows, numbered `1..=MAX_SLOTS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "u8")]
pub struct Slot(u8);

impl Slot {
    /// Validate a slot number.
    pub fn new(number: i32) -> StoreResult<Self> {
        if (1..=i32::from(MAX_SLOTS)).contains(&number) {
            Ok(Self(number as u8))
        } else {
            Err(StoreError::InvalidSlot(number))
        }
    }

    /// Every slot in ascending order.
    pub fn all() -> impl Iterator<Item = Slot> {
        (1..=MAX_SLOTS).map(Slot)
    }

    pub fn number(self) -> u8 {
        self.0
    }
}

impl TryFrom<i32> for Slot {
    type Error = StoreError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Slot> for u8 {
    fn from(slot: Slot) -> Self {
        slot.0
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A live reservation: one slot held by one patient.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reservation {
    pub slot: Slot,
    /// Patient that held a valid record when the slot was reserved
    pub patient_id: PatientId,
}
