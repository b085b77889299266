//! Fixed initial dataset loaded into a fresh store.

use serde::{Deserialize, Serialize};

use crate::models::{Appointment, Doctor, HistoryEntry, Patient};

const INITIAL_DATASET: &str = include_str!("seed.json");

/// Rows to preload, identities included.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SeedData {
    pub doctors: Vec<Doctor>,
    pub patients: Vec<Patient>,
    pub appointments: Vec<Appointment>,
    pub history: Vec<HistoryEntry>,
}

impl SeedData {
    /// The clinic's starting dataset: 5 doctors, 5 patients,
    /// 5 appointments and 4 history entries.
    pub fn initial() -> Result<Self, serde_json::Error> {
        Self::from_json(INITIAL_DATASET)
    }

    /// Parse a dataset in the same shape as the backup tables.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
