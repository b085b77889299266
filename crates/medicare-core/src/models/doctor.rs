//! Doctor models.

use serde::{Deserialize, Serialize};

use super::RecordId;

/// A doctor on the clinic roster.
///
/// The roster is fixed at start-up; doctors are referenced by appointments
/// and history entries but never created or removed at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    pub id: RecordId,
    pub name: String,
    pub specialty: String,
    pub phone: String,
    pub email: String,
    /// Free-text working hours, e.g. "Lunes a Viernes 8:00-16:00"
    pub schedule: String,
}
