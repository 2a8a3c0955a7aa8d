//! End-to-end clinic scenarios.

use std::collections::BTreeSet;

use clinic_core::{Clinic, Slot, StoreError};

fn slots(numbers: &[i32]) -> BTreeSet<Slot> {
    numbers.iter().map(|&n| Slot::new(n).unwrap()).collect()
}

#[test]
fn test_walkthrough() {
    let mut clinic = Clinic::new();

    clinic.add_patient(1, "Ali", 30, 'M').unwrap();
    assert_eq!(
        clinic.add_patient(1, "Ali", 30, 'M'),
        Err(StoreError::DuplicateId(1))
    );

    clinic.reserve_slot(1, 1).unwrap();
    assert_eq!(clinic.list_available_slots(), slots(&[2, 3, 4, 5]));

    assert_eq!(
        clinic.reserve_slot(1, 1),
        Err(StoreError::SlotTaken(Slot::new(1).unwrap()))
    );

    clinic.cancel_reservation(1).unwrap();
    assert_eq!(clinic.list_available_slots(), slots(&[1, 2, 3, 4, 5]));

    assert_eq!(clinic.reserve_slot(6, 1), Err(StoreError::InvalidSlot(6)));
    assert_eq!(clinic.reserve_slot(2, 99), Err(StoreError::PatientNotFound(99)));
}

#[test]
fn test_full_day() {
    let mut clinic = Clinic::new();
    for id in 1..=6 {
        clinic.add_patient(id, "Walk-in", 40, 'F').unwrap();
    }
    for (slot, id) in (1..=5).zip(1..=5) {
        clinic.reserve_slot(slot, id).unwrap();
    }

    assert!(clinic.list_available_slots().is_empty());
    for slot in 1..=5 {
        assert!(matches!(
            clinic.reserve_slot(slot, 6),
            Err(StoreError::SlotTaken(_))
        ));
    }

    clinic.cancel_reservation(3).unwrap();
    assert_eq!(clinic.list_available_slots(), slots(&[3]));
    clinic.reserve_slot(3, 6).unwrap();

    let listed: Vec<(u8, i32)> = clinic
        .list_reservations()
        .unwrap()
        .iter()
        .map(|r| (r.slot.number(), r.patient_id))
        .collect();
    assert_eq!(listed, vec![(1, 1), (2, 2), (3, 6), (4, 4), (5, 5)]);
}

#[test]
fn test_edit_does_not_disturb_reservation() {
    let mut clinic = Clinic::new();
    clinic.add_patient(10, "Hana", 25, 'F').unwrap();
    clinic.reserve_slot(4, 10).unwrap();

    clinic.edit_patient(10, "Hana Ali", 26, 'F').unwrap();

    let patient = clinic.find_patient(10).unwrap();
    assert_eq!(patient.name.as_str(), "Hana Ali");
    assert_eq!(clinic.reservations().slot_of(10), Some(Slot::new(4).unwrap()));
}

#[test]
fn test_cancel_then_rebook_different_slot() {
    let mut clinic = Clinic::new();
    clinic.add_patient(1, "Ali", 30, 'M').unwrap();
    clinic.reserve_slot(2, 1).unwrap();

    // No reassignment: cancel first, then reserve again
    clinic.cancel_reservation(1).unwrap();
    clinic.reserve_slot(5, 1).unwrap();

    assert_eq!(clinic.list_available_slots(), slots(&[1, 2, 3, 4]));
    assert_eq!(clinic.cancel_reservation(2), Err(StoreError::NotFound(2)));
}
