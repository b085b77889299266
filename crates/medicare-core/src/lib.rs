//! MediCare Core Library
//!
//! In-memory clinical records store for a single clinic: patients, the doctor
//! roster, appointments and medical history, plus the reports built on them.
//!
//! # Architecture
//!
//! ```text
//!        UI collaborator (forms, tables, notifications)
//!              │ writes                    │ reads
//!              ▼                           ▼
//!     ┌─────────────────┐        ┌─────────────────────┐
//!     │  Database ops   │        │  Reports / filters  │
//!     │ create / update │        │  joins + counters   │
//!     │     delete      │        └──────────┬──────────┘
//!     └────────┬────────┘                   │
//!              ▼                            ▼
//!     ┌──────────────────────────────────────────────┐
//!     │ patients │ doctors │ appointments │ history  │
//!     │   Table<T>: ordered rows + identity counter  │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! # Core Principle
//!
//! **References never own.** Appointments and history entries point at
//! patients and doctors by identity only. Deleting a patient leaves its
//! appointments in place, and reports render the missing name as a
//! placeholder.
//!
//! # Modules
//!
//! - [`db`]: Table store and per-table query/command operations
//! - [`models`]: Domain types (Patient, Doctor, Appointment, HistoryEntry)
//! - [`reports`]: Statistics, caseloads, day schedules, history analysis
//! - [`validation`]: Date, time and email shape checks
//! - [`export`]: JSON backup of the whole store
//! - [`config`]: Runtime configuration

pub mod config;
pub mod db;
pub mod export;
pub mod models;
pub mod reports;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use db::{AppointmentFilter, Database, SeedData};
pub use export::Backup;
pub use models::{
    Appointment, AppointmentStatus, AppointmentUpdate, Doctor, HistoryEntry, HistoryUpdate,
    NewAppointment, NewHistoryEntry, NewPatient, Patient, PatientUpdate, RecordId, ToRecordId,
};
pub use reports::{
    AppointmentDetail, DoctorPatientsReport, HistoryAnalysis, Reports, SummaryStatistics,
};
pub use validation::{is_valid_date, is_valid_email, is_valid_time};

/// Any error the core can return.
#[derive(Debug, thiserror::Error)]
pub enum MedicareError {
    #[error("Database error: {0}")]
    Database(#[from] db::DbError),

    #[error("Export error: {0}")]
    Export(#[from] export::ExportError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid input: {0}")]
    Model(#[from] models::ModelError),
}
