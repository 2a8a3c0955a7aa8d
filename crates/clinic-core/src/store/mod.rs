//! In-memory record stores.

mod patients;
mod reservations;

pub use patients::*;
pub use reservations::*;

use thiserror::Error;

use crate::models::{PatientId, Slot};

/// Store errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Patient with ID {0} already exists")]
    DuplicateId(PatientId),

    #[error("No record found for patient ID {0}")]
    NotFound(PatientId),

    #[error("Invalid slot choice: {0}")]
    InvalidSlot(i32),

    #[error("Patient with ID {0} not found")]
    PatientNotFound(PatientId),

    #[error("Slot {0} is already reserved")]
    SlotTaken(Slot),

    #[error("No reservations for today")]
    NoReservations,

    #[error("Name is {len} characters long, at most {max} allowed")]
    NameTooLong { len: usize, max: usize },
}

pub type StoreResult<T> = Result<T, StoreError>;
