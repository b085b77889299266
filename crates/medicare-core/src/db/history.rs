//! Medical history table operations.

use std::collections::HashSet;

use tracing::debug;

use super::{today, Database, Record};
use crate::models::{
    contains_ignore_case, HistoryEntry, HistoryUpdate, NewHistoryEntry, RecordId, ToRecordId,
};

impl Record for HistoryEntry {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Database {
    /// Record a history entry. The date defaults to today.
    pub fn create_history_entry(&mut self, new: NewHistoryEntry) -> HistoryEntry {
        let entry = self.history.insert_with(|id| HistoryEntry {
            id,
            patient_id: new.patient_id,
            doctor_id: new.doctor_id,
            date: new.date.unwrap_or_else(today),
            diagnosis: new.diagnosis,
            treatment: new.treatment,
            observations: new.observations,
        });
        debug!(id = entry.id, patient_id = entry.patient_id, "created history entry");
        entry
    }

    /// List all history entries in recording order.
    pub fn list_history(&self) -> Vec<HistoryEntry> {
        self.history.snapshot()
    }

    /// Get a history entry by ID.
    pub fn get_history_entry(&self, id: impl ToRecordId) -> Option<HistoryEntry> {
        self.history.get(id.to_record_id()?).cloned()
    }

    /// A patient's history, most recent first.
    ///
    /// Entries sharing a date keep their recording order.
    pub fn history_for_patient(&self, patient_id: impl ToRecordId) -> Vec<HistoryEntry> {
        let Some(patient_id) = patient_id.to_record_id() else {
            return Vec::new();
        };
        let mut entries = self.history.filtered(|h| h.patient_id == patient_id);
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries
    }

    /// Entries recorded by a doctor.
    pub fn history_for_doctor(&self, doctor_id: impl ToRecordId) -> Vec<HistoryEntry> {
        match doctor_id.to_record_id() {
            Some(doctor_id) => self.history.filtered(|h| h.doctor_id == doctor_id),
            None => Vec::new(),
        }
    }

    /// Entries whose diagnosis contains `term` (case-insensitive).
    pub fn search_history_by_diagnosis(&self, term: &str) -> Vec<HistoryEntry> {
        self.history
            .filtered(|h| contains_ignore_case(&h.diagnosis, term))
    }

    /// Free-text history search.
    ///
    /// Returns the history of every patient whose name matches `term` (each
    /// most recent first), then the entries whose diagnosis matches, without
    /// duplicates. A blank term returns the whole table.
    pub fn search_history(&self, term: &str) -> Vec<HistoryEntry> {
        if term.trim().is_empty() {
            return self.list_history();
        }

        let by_patient = self
            .search_patients_by_name(term)
            .into_iter()
            .flat_map(|patient| self.history_for_patient(patient.id));
        let by_diagnosis = self.search_history_by_diagnosis(term);

        let mut seen = HashSet::new();
        by_patient
            .chain(by_diagnosis)
            .filter(|entry| seen.insert(entry.id))
            .collect()
    }

    /// Update an existing entry. Returns `None` when the ID is unknown.
    pub fn update_history_entry(
        &mut self,
        id: impl ToRecordId,
        update: HistoryUpdate,
    ) -> Option<HistoryEntry> {
        let entry = self.history.get_mut(id.to_record_id()?)?;
        update.apply_to(entry);
        debug!(id = entry.id, "updated history entry");
        Some(entry.clone())
    }

    /// Delete an entry, returning the removed row.
    pub fn delete_history_entry(&mut self, id: impl ToRecordId) -> Option<HistoryEntry> {
        let removed = self.history.remove(id.to_record_id()?)?;
        debug!(id = removed.id, "deleted history entry");
        Some(removed)
    }
}
