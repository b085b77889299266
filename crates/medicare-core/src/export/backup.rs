//! Single-document JSON backup: every table plus the summary counters.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::ExportResult;
use crate::db::{Database, SeedData};
use crate::models::{Appointment, Doctor, HistoryEntry, Patient};
use crate::reports::{Reports, SummaryStatistics};

/// Snapshot of the store at export time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Backup {
    /// Export timestamp (RFC 3339)
    pub exported_at: String,
    pub patients: Vec<Patient>,
    pub doctors: Vec<Doctor>,
    pub appointments: Vec<Appointment>,
    pub history: Vec<HistoryEntry>,
    pub statistics: SummaryStatistics,
}

impl Backup {
    /// Capture every table and the current statistics.
    pub fn from_database(db: &Database) -> Self {
        Self {
            exported_at: chrono::Utc::now().to_rfc3339(),
            patients: db.list_patients(),
            doctors: db.list_doctors(),
            appointments: db.list_appointments(),
            history: db.list_history(),
            statistics: Reports::new(db).summary_statistics(),
        }
    }

    /// Conventional file name for a backup taken on `date`.
    pub fn file_name(date: NaiveDate) -> String {
        format!("medicare-backup-{}.json", date.format("%Y-%m-%d"))
    }

    /// Export to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a previously exported document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Write the JSON document to `path`.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> ExportResult<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        info!(
            path = %path.display(),
            patients = self.patients.len(),
            appointments = self.appointments.len(),
            history = self.history.len(),
            "backup written"
        );
        Ok(())
    }

    /// The tables as a dataset a fresh store can be built from.
    pub fn into_seed(self) -> SeedData {
        SeedData {
            doctors: self.doctors,
            patients: self.patients,
            appointments: self.appointments,
            history: self.history,
        }
    }
}
