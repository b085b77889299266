//! Appointment models.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{ModelError, RecordId};

/// Appointment lifecycle status.
///
/// The only transition is `Scheduled` → `Completed`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    /// Booked, not yet attended
    #[default]
    Scheduled,
    /// Attended
    Completed,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Completed => "completed",
        }
    }

    /// Whether moving from `self` to `next` is an allowed transition.
    pub fn can_transition_to(self, next: AppointmentStatus) -> bool {
        matches!(
            (self, next),
            (AppointmentStatus::Scheduled, AppointmentStatus::Completed)
        )
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scheduled" => Ok(AppointmentStatus::Scheduled),
            "completed" => Ok(AppointmentStatus::Completed),
            _ => Err(ModelError::UnknownStatus(s.to_string())),
        }
    }
}

/// A booked visit between a patient and a doctor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: RecordId,
    /// Non-owning reference into the patients table
    pub patient_id: RecordId,
    /// Non-owning reference into the doctors table
    pub doctor_id: RecordId,
    pub date: NaiveDate,
    /// Time of day, serialized as zero-padded `HH:MM`
    #[serde(with = "hh_mm")]
    pub time: NaiveTime,
    pub reason: String,
    pub status: AppointmentStatus,
}

/// Fields supplied when booking an appointment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewAppointment {
    pub patient_id: RecordId,
    pub doctor_id: RecordId,
    pub date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub time: NaiveTime,
    pub reason: String,
    /// Defaults to `Scheduled` when absent
    #[serde(default)]
    pub status: Option<AppointmentStatus>,
}

impl NewAppointment {
    pub fn new(
        patient_id: RecordId,
        doctor_id: RecordId,
        date: NaiveDate,
        time: NaiveTime,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            patient_id,
            doctor_id,
            date,
            time,
            reason: reason.into(),
            status: None,
        }
    }
}

/// Partial update for an appointment. Unset fields are left untouched.
///
/// Status is not part of the update; completion goes through
/// `Database::complete_appointment`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppointmentUpdate {
    pub patient_id: Option<RecordId>,
    pub doctor_id: Option<RecordId>,
    pub date: Option<NaiveDate>,
    #[serde(with = "hh_mm_opt")]
    pub time: Option<NaiveTime>,
    pub reason: Option<String>,
}

impl AppointmentUpdate {
    /// Overwrite the supplied fields of `appointment`.
    pub fn apply_to(self, appointment: &mut Appointment) {
        if let Some(patient_id) = self.patient_id {
            appointment.patient_id = patient_id;
        }
        if let Some(doctor_id) = self.doctor_id {
            appointment.doctor_id = doctor_id;
        }
        if let Some(date) = self.date {
            appointment.date = date;
        }
        if let Some(time) = self.time {
            appointment.time = time;
        }
        if let Some(reason) = self.reason {
            appointment.reason = reason;
        }
    }
}

const TIME_FORMAT: &str = "%H:%M";

mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIME_FORMAT;

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(TIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}

mod hh_mm_opt {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIME_FORMAT;

    pub fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(time) => serializer.collect_str(&time.format(TIME_FORMAT)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| NaiveTime::parse_from_str(&raw, TIME_FORMAT))
            .transpose()
            .map_err(serde::de::Error::custom)
    }
}
