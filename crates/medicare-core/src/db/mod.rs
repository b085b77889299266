//! In-memory table store for MediCare.
//!
//! One [`Database`] owns the four tables. Each table file adds the
//! operations for its entity to `impl Database`.

mod appointments;
mod doctors;
mod history;
mod patients;
mod seed;
mod table;

pub use appointments::AppointmentFilter;
pub use seed::SeedData;
pub use table::{Record, Table};

use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;

use crate::config::Config;
use crate::models::{Appointment, Doctor, HistoryEntry, Patient};

/// Database errors.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Seed data error: {0}")]
    Seed(#[from] serde_json::Error),
}

pub type DbResult<T> = Result<T, DbError>;

/// The current date as the store sees it (UTC calendar date).
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// The four clinic tables.
///
/// All access is single-threaded: reads take `&self`, writes take
/// `&mut self`, and every operation runs to completion before returning.
#[derive(Debug, Clone, Default)]
pub struct Database {
    patients: Table<Patient>,
    doctors: Table<Doctor>,
    appointments: Table<Appointment>,
    history: Table<HistoryEntry>,
}

impl Database {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store loaded with the fixed initial dataset.
    pub fn open_seeded() -> DbResult<Self> {
        Ok(Self::from_seed(SeedData::initial()?))
    }

    /// Create a store as described by `config`.
    pub fn open(config: &Config) -> DbResult<Self> {
        if config.seed {
            Self::open_seeded()
        } else {
            Ok(Self::new())
        }
    }

    /// Create a store from pre-identified rows.
    ///
    /// Each table's counter resumes after its highest identity.
    pub fn from_seed(seed: SeedData) -> Self {
        let db = Self {
            patients: Table::from_rows(seed.patients),
            doctors: Table::from_rows(seed.doctors),
            appointments: Table::from_rows(seed.appointments),
            history: Table::from_rows(seed.history),
        };
        info!(
            patients = db.patients.len(),
            doctors = db.doctors.len(),
            appointments = db.appointments.len(),
            history = db.history.len(),
            "database initialized"
        );
        db
    }

    /// Borrow the patients table.
    pub fn patients(&self) -> &Table<Patient> {
        &self.patients
    }

    /// Borrow the doctors table.
    pub fn doctors(&self) -> &Table<Doctor> {
        &self.doctors
    }

    /// Borrow the appointments table.
    pub fn appointments(&self) -> &Table<Appointment> {
        &self.appointments
    }

    /// Borrow the history table.
    pub fn history(&self) -> &Table<HistoryEntry> {
        &self.history
    }
}
