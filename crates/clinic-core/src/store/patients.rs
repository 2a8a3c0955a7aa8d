//! Patient record store.

use std::collections::HashMap;

use log::debug;

use super::{StoreError, StoreResult};
use crate::models::{Patient, PatientId, PatientName};

/// Owns every patient record, keyed by ID. Records are never removed.
#[derive(Debug, Default)]
pub struct PatientStore {
    patients: HashMap<PatientId, Patient>,
}

impl PatientStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new patient. Fails without touching the store if the ID is taken
    /// or the name is too long.
    pub fn add_patient(
        &mut self,
        id: PatientId,
        name: &str,
        age: i32,
        gender: char,
    ) -> StoreResult<()> {
        if self.patients.contains_key(&id) {
            debug!("rejected duplicate patient id {}", id);
            return Err(StoreError::DuplicateId(id));
        }
        let patient = Patient::new(id, name, age, gender)?;
        self.patients.insert(id, patient);
        debug!("added patient {}", id);
        Ok(())
    }

    /// Overwrite name, age and gender of an existing patient.
    pub fn edit_patient(
        &mut self,
        id: PatientId,
        name: &str,
        age: i32,
        gender: char,
    ) -> StoreResult<()> {
        let patient = self.patients.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        // Validate before mutating so a bad name leaves the record intact
        patient.name = PatientName::new(name)?;
        patient.age = age;
        patient.gender = gender;
        debug!("updated patient {}", id);
        Ok(())
    }

    /// Look up a patient by ID.
    pub fn find_patient(&self, id: PatientId) -> StoreResult<&Patient> {
        self.patients.get(&id).ok_or(StoreError::NotFound(id))
    }

    pub fn contains(&self, id: PatientId) -> bool {
        self.patients.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}
