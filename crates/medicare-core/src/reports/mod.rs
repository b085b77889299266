//! Read-only reports computed from the current table state.
//!
//! Nothing is cached; every call rescans the tables. Foreign keys that no
//! longer resolve are rendered with placeholder text instead of failing.

mod by_doctor;
mod history;
mod schedule;
mod statistics;

pub use by_doctor::*;
pub use history::*;
pub use schedule::*;
pub use statistics::*;

use crate::db::Database;
use crate::models::{Doctor, Patient, RecordId};

/// Shown in place of a patient name that no longer resolves.
pub const PATIENT_NOT_FOUND: &str = "Patient not found";
/// Shown in place of a doctor name that no longer resolves.
pub const DOCTOR_NOT_FOUND: &str = "Doctor not found";
/// Shown in place of the specialty of a doctor that no longer resolves.
pub const SPECIALTY_NOT_AVAILABLE: &str = "N/A";

/// Report generator bound to a database.
pub struct Reports<'a> {
    db: &'a Database,
}

impl<'a> Reports<'a> {
    /// Create a report generator over `db`.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn patient(&self, id: RecordId) -> Option<&'a Patient> {
        self.db.patients().get(id)
    }

    fn doctor(&self, id: RecordId) -> Option<&'a Doctor> {
        self.db.doctors().get(id)
    }

    fn patient_name(&self, id: RecordId) -> String {
        self.patient(id)
            .map_or(PATIENT_NOT_FOUND, |p| p.name.as_str())
            .to_string()
    }
}
