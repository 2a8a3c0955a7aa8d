//! Slot reservation store.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, warn};

use super::{PatientStore, StoreError, StoreResult};
use crate::models::{PatientId, Reservation, Slot};

/// Owns the live reservations, keyed by slot.
///
/// Keying by slot makes slot uniqueness structural. Listings come out in
/// ascending slot order.
#[derive(Debug, Default)]
pub struct ReservationStore {
    reservations: BTreeMap<Slot, PatientId>,
}

impl ReservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slots with no live reservation, recomputed on every call.
    pub fn list_available_slots(&self) -> BTreeSet<Slot> {
        Slot::all()
            .filter(|slot| !self.reservations.contains_key(slot))
            .collect()
    }

    /// Reserve `slot` for `patient_id`.
    ///
    /// Checks run in order: slot range, patient existence, slot availability.
    /// An unknown patient is therefore reported even when the slot is taken.
    /// A patient who already holds a slot may reserve another one; a warning
    /// is logged and [`cancel_reservation`](Self::cancel_reservation) frees
    /// the lowest of their slots.
    pub fn reserve_slot(
        &mut self,
        slot: i32,
        patient_id: PatientId,
        patients: &PatientStore,
    ) -> StoreResult<Reservation> {
        let slot = Slot::new(slot)?;

        if !patients.contains(patient_id) {
            debug!("reservation for unknown patient {}", patient_id);
            return Err(StoreError::PatientNotFound(patient_id));
        }

        if let Some(holder) = self.reservations.get(&slot) {
            debug!("slot {} already held by patient {}", slot, holder);
            return Err(StoreError::SlotTaken(slot));
        }

        if let Some(existing) = self.slot_of(patient_id) {
            warn!(
                "patient {} already holds slot {}, reserving slot {} as well",
                patient_id, existing, slot
            );
        }

        self.reservations.insert(slot, patient_id);
        debug!("reserved slot {} for patient {}", slot, patient_id);
        Ok(Reservation { slot, patient_id })
    }

    /// Cancel the first reservation held by `patient_id` and free its slot.
    pub fn cancel_reservation(&mut self, patient_id: PatientId) -> StoreResult<Reservation> {
        let slot = self
            .slot_of(patient_id)
            .ok_or(StoreError::NotFound(patient_id))?;
        self.reservations.remove(&slot);
        debug!("cancelled slot {} for patient {}", slot, patient_id);
        Ok(Reservation { slot, patient_id })
    }

    /// Snapshot of every live reservation in slot order.
    ///
    /// An empty store yields [`StoreError::NoReservations`] so callers can
    /// show a dedicated message.
    pub fn list_reservations(&self) -> StoreResult<Vec<Reservation>> {
        if self.reservations.is_empty() {
            return Err(StoreError::NoReservations);
        }
        Ok(self
            .reservations
            .iter()
            .map(|(&slot, &patient_id)| Reservation { slot, patient_id })
            .collect())
    }

    /// First slot held by `patient_id`, if any.
    pub fn slot_of(&self, patient_id: PatientId) -> Option<Slot> {
        self.reservations
            .iter()
            .find(|(_, holder)| **holder == patient_id)
            .map(|(&slot, _)| slot)
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }
}
