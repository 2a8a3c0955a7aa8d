//! Human-readable text for store results.

use clinic_core::{Patient, Slot, StoreError, MAX_SLOTS};

const SLOT_LABELS: [&str; MAX_SLOTS as usize] = [
    "2:00pm - 2:30pm",
    "2:30pm - 3:00pm",
    "3:00pm - 3:30pm",
    "4:00pm - 4:30pm",
    "4:30pm - 5:00pm",
];

/// Time window for a slot.
pub fn slot_label(slot: Slot) -> &'static str {
    SLOT_LABELS[usize::from(slot.number()) - 1]
}

pub fn patient_record(patient: &Patient) -> String {
    format!(
        "Patient Name: {}\nAge: {}\nGender: {}\nID: {}\n",
        patient.name, patient.age, patient.gender, patient.id
    )
}

/// Message shown for a failed store operation.
pub fn error_message(err: &StoreError) -> String {
    match err {
        StoreError::DuplicateId(id) => format!("Patient with ID {} already exists.", id),
        StoreError::NotFound(id) => format!("Patient with ID {} not found.", id),
        StoreError::InvalidSlot(_) => "Invalid slot choice.".to_string(),
        StoreError::PatientNotFound(id) => format!("Patient with ID {} not found.", id),
        StoreError::SlotTaken(_) => "Slot is already reserved.".to_string(),
        StoreError::NoReservations => "No reservations for today.".to_string(),
        StoreError::NameTooLong { max, .. } => {
            format!("Name is too long (at most {} characters).", max)
        }
    }
}
