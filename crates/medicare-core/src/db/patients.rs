//! Patient table operations.

use tracing::debug;

use super::{today, Database, Record};
use crate::models::{contains_ignore_case, NewPatient, Patient, PatientUpdate, RecordId, ToRecordId};

impl Record for Patient {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Database {
    /// Register a new patient. The registration date defaults to today.
    pub fn create_patient(&mut self, new: NewPatient) -> Patient {
        let patient = self.patients.insert_with(|id| Patient {
            id,
            name: new.name,
            age: new.age,
            phone: new.phone,
            email: new.email,
            address: new.address,
            registration_date: new.registration_date.unwrap_or_else(today),
        });
        debug!(id = patient.id, "created patient");
        patient
    }

    /// List all patients in registration order.
    pub fn list_patients(&self) -> Vec<Patient> {
        self.patients.snapshot()
    }

    /// Get a patient by ID.
    pub fn get_patient(&self, id: impl ToRecordId) -> Option<Patient> {
        self.patients.get(id.to_record_id()?).cloned()
    }

    /// Search patients by name (case-insensitive substring).
    pub fn search_patients_by_name(&self, term: &str) -> Vec<Patient> {
        self.patients
            .filtered(|patient| contains_ignore_case(&patient.name, term))
    }

    /// Update an existing patient. Returns `None` when the ID is unknown.
    pub fn update_patient(&mut self, id: impl ToRecordId, update: PatientUpdate) -> Option<Patient> {
        let patient = self.patients.get_mut(id.to_record_id()?)?;
        update.apply_to(patient);
        debug!(id = patient.id, "updated patient");
        Some(patient.clone())
    }

    /// Delete a patient, returning the removed row.
    ///
    /// Appointments and history entries that reference the patient are kept.
    pub fn delete_patient(&mut self, id: impl ToRecordId) -> Option<Patient> {
        let removed = self.patients.remove(id.to_record_id()?)?;
        debug!(id = removed.id, "deleted patient");
        Some(removed)
    }
}
