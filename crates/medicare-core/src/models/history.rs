//! Medical history models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::RecordId;

/// One entry in a patient's medical history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub id: RecordId,
    /// Non-owning reference into the patients table
    pub patient_id: RecordId,
    /// Non-owning reference into the doctors table
    pub doctor_id: RecordId,
    pub date: NaiveDate,
    pub diagnosis: String,
    pub treatment: String,
    pub observations: Option<String>,
}

/// Fields supplied when recording a history entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewHistoryEntry {
    pub patient_id: RecordId,
    pub doctor_id: RecordId,
    /// Defaults to the creation date when absent
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub diagnosis: String,
    pub treatment: String,
    #[serde(default)]
    pub observations: Option<String>,
}

impl NewHistoryEntry {
    pub fn new(
        patient_id: RecordId,
        doctor_id: RecordId,
        diagnosis: impl Into<String>,
        treatment: impl Into<String>,
    ) -> Self {
        Self {
            patient_id,
            doctor_id,
            date: None,
            diagnosis: diagnosis.into(),
            treatment: treatment.into(),
            observations: None,
        }
    }
}

/// Partial update for a history entry. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HistoryUpdate {
    pub patient_id: Option<RecordId>,
    pub doctor_id: Option<RecordId>,
    pub date: Option<NaiveDate>,
    pub diagnosis: Option<String>,
    pub treatment: Option<String>,
    /// `Some(None)` clears the observations
    pub observations: Option<Option<String>>,
}

impl HistoryUpdate {
    /// Overwrite the supplied fields of `entry`.
    pub fn apply_to(self, entry: &mut HistoryEntry) {
        if let Some(patient_id) = self.patient_id {
            entry.patient_id = patient_id;
        }
        if let Some(doctor_id) = self.doctor_id {
            entry.doctor_id = doctor_id;
        }
        if let Some(date) = self.date {
            entry.date = date;
        }
        if let Some(diagnosis) = self.diagnosis {
            entry.diagnosis = diagnosis;
        }
        if let Some(treatment) = self.treatment {
            entry.treatment = treatment;
        }
        if let Some(observations) = self.observations {
            entry.observations = observations;
        }
    }
}
