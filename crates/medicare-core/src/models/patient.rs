//! Patient models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::RecordId;

/// A registered patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Table identity, assigned on creation
    pub id: RecordId,
    /// Full name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Contact phone
    pub phone: String,
    /// Contact email (local@domain.tld shape, checked by the caller)
    pub email: String,
    /// Postal address
    pub address: String,
    /// Date the patient was registered
    pub registration_date: NaiveDate,
}

/// Fields supplied when registering a patient.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewPatient {
    pub name: String,
    pub age: u32,
    pub phone: String,
    pub email: String,
    pub address: String,
    /// Defaults to the creation date when absent
    #[serde(default)]
    pub registration_date: Option<NaiveDate>,
}

impl NewPatient {
    /// Create a registration payload with the required fields; contact
    /// details start empty.
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
            ..Self::default()
        }
    }
}

/// Partial update for a patient. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PatientUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub registration_date: Option<NaiveDate>,
}

impl PatientUpdate {
    /// Overwrite the supplied fields of `patient`.
    pub fn apply_to(self, patient: &mut Patient) {
        if let Some(name) = self.name {
            patient.name = name;
        }
        if let Some(age) = self.age {
            patient.age = age;
        }
        if let Some(phone) = self.phone {
            patient.phone = phone;
        }
        if let Some(email) = self.email {
            patient.email = email;
        }
        if let Some(address) = self.address {
            patient.address = address;
        }
        if let Some(date) = self.registration_date {
            patient.registration_date = date;
        }
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
