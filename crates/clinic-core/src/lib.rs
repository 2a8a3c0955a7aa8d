//! Clinic Core Library
//!
//! In-memory patient records and same-day doctor appointment slots for a
//! single clinic.
//!
//! # Architecture
//!
//! ```text
//!            menu / console front end
//!                      │
//!              ┌───────▼────────┐
//!              │     Clinic     │
//!              └───┬────────┬───┘
//!                  │        │
//!       ┌──────────▼──┐  ┌──▼───────────────┐
//!       │PatientStore │◄─┤ ReservationStore │
//!       │ id → record │  │ slot → patient id│
//!       └─────────────┘  └──────────────────┘
//! ```
//!
//! Reservations refer to patients by ID only. The patient store is consulted
//! when a slot is reserved and never again afterwards; patients are never
//! deleted, so a reservation cannot outlive its patient.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Patient, Slot, Reservation)
//! - [`store`]: The two stores and their error type

pub mod models;
pub mod store;

// Re-export commonly used types
pub use models::{Patient, PatientId, PatientName, Reservation, Slot, MAX_NAME_LENGTH, MAX_SLOTS};
pub use store::{PatientStore, ReservationStore, StoreError, StoreResult};

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;

// =========================================================================
// Clinic
// =========================================================================

/// Both stores of one clinic, owned together.
#[derive(Debug, Default)]
pub struct Clinic {
    patients: PatientStore,
    reservations: ReservationStore,
}

impl Clinic {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Patient Operations
    // =========================================================================

    /// Add a new patient record.
    pub fn add_patient(
        &mut self,
        id: PatientId,
        name: &str,
        age: i32,
        gender: char,
    ) -> StoreResult<()> {
        self.patients.add_patient(id, name, age, gender)
    }

    /// Replace name, age and gender of an existing patient.
    pub fn edit_patient(
        &mut self,
        id: PatientId,
        name: &str,
        age: i32,
        gender: char,
    ) -> StoreResult<()> {
        self.patients.edit_patient(id, name, age, gender)
    }

    /// Get a patient by ID.
    pub fn find_patient(&self, id: PatientId) -> StoreResult<&Patient> {
        self.patients.find_patient(id)
    }

    // =========================================================================
    // Reservation Operations
    // =========================================================================

    /// Reserve a slot for an existing patient.
    pub fn reserve_slot(&mut self, slot: i32, patient_id: PatientId) -> StoreResult<Reservation> {
        self.reservations.reserve_slot(slot, patient_id, &self.patients)
    }

    /// Cancel the reservation held by a patient.
    pub fn cancel_reservation(&mut self, patient_id: PatientId) -> StoreResult<Reservation> {
        self.reservations.cancel_reservation(patient_id)
    }

    pub fn list_available_slots(&self) -> BTreeSet<Slot> {
        self.reservations.list_available_slots()
    }

    pub fn list_reservations(&self) -> StoreResult<Vec<Reservation>> {
        self.reservations.list_reservations()
    }

    pub fn patients(&self) -> &PatientStore {
        &self.patients
    }

    pub fn reservations(&self) -> &ReservationStore {
        &self.reservations
    }
}

// =========================================================================
// Thread-safe handle
// =========================================================================

#[derive(Debug, Error)]
pub enum ClinicError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),
}

impl<T> From<std::sync::PoisonError<T>> for ClinicError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        ClinicError::LockPoisoned(e.to_string())
    }
}

pub type ClinicResult<T> = Result<T, ClinicError>;

/// Clinic behind a single store-wide lock, for hosts with concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct SharedClinic {
    inner: Arc<Mutex<Clinic>>,
}

impl SharedClinic {
    pub fn new(clinic: Clinic) -> Self {
        Self {
            inner: Arc::new(Mutex::new(clinic)),
        }
    }

    fn lock(&self) -> ClinicResult<MutexGuard<'_, Clinic>> {
        Ok(self.inner.lock()?)
    }

    pub fn add_patient(
        &self,
        id: PatientId,
        name: &str,
        age: i32,
        gender: char,
    ) -> ClinicResult<()> {
        Ok(self.lock()?.add_patient(id, name, age, gender)?)
    }

    pub fn edit_patient(
        &self,
        id: PatientId,
        name: &str,
        age: i32,
        gender: char,
    ) -> ClinicResult<()> {
        Ok(self.lock()?.edit_patient(id, name, age, gender)?)
    }

    /// Get a copy of a patient record.
    pub fn find_patient(&self, id: PatientId) -> ClinicResult<Patient> {
        Ok(self.lock()?.find_patient(id)?.clone())
    }

    pub fn reserve_slot(&self, slot: i32, patient_id: PatientId) -> ClinicResult<Reservation> {
        Ok(self.lock()?.reserve_slot(slot, patient_id)?)
    }

    pub fn cancel_reservation(&self, patient_id: PatientId) -> ClinicResult<Reservation> {
        Ok(self.lock()?.cancel_reservation(patient_id)?)
    }

    pub fn list_available_slots(&self) -> ClinicResult<BTreeSet<Slot>> {
        Ok(self.lock()?.list_available_slots())
    }

    pub fn list_reservations(&self) -> ClinicResult<Vec<Reservation>> {
        Ok(self.lock()?.list_reservations()?)
    }
}
