//! Day schedule with patient and doctor names joined in.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Reports, DOCTOR_NOT_FOUND, SPECIALTY_NOT_AVAILABLE};
use crate::models::Appointment;

/// An appointment with its references resolved for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppointmentDetail {
    #[serde(flatten)]
    pub appointment: Appointment,
    pub patient_name: String,
    pub doctor_name: String,
    pub doctor_specialty: String,
}

impl<'a> Reports<'a> {
    /// Appointments on `date`, earliest first.
    pub fn appointments_on_date(&self, date: NaiveDate) -> Vec<AppointmentDetail> {
        let mut details: Vec<AppointmentDetail> = self
            .db
            .appointments()
            .rows()
            .iter()
            .filter(|a| a.date == date)
            .map(|appointment| {
                let doctor = self.doctor(appointment.doctor_id);
                AppointmentDetail {
                    patient_name: self.patient_name(appointment.patient_id),
                    doctor_name: doctor
                        .map_or(DOCTOR_NOT_FOUND, |d| d.name.as_str())
                        .to_string(),
                    doctor_specialty: doctor
                        .map_or(SPECIALTY_NOT_AVAILABLE, |d| d.specialty.as_str())
                        .to_string(),
                    appointment: appointment.clone(),
                }
            })
            .collect();

        details.sort_by_key(|d| d.appointment.time);
        details
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::models::NewAppointment;
    use crate::reports::PATIENT_NOT_FOUND;
    use chrono::NaiveTime;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_joined_names() {
        let db = Database::open_seeded().unwrap();
        let details = Reports::new(&db).appointments_on_date(day());

        assert_eq!(details.len(), 1);
        assert_eq!(details[0].appointment.id, 1);
        assert_eq!(details[0].patient_name, "Juan Pérez");
        assert_eq!(details[0].doctor_name, "Dr. Luis Rodríguez");
        assert_eq!(details[0].doctor_specialty, "Medicina General");
    }

    #[test]
    fn test_sorted_by_time() {
        let mut db = Database::open_seeded().unwrap();
        db.create_appointment(NewAppointment::new(2, 2, day(), time(16, 45), "Vacunas"));
        db.create_appointment(NewAppointment::new(3, 1, day(), time(7, 5), "Chequeo"));
        db.create_appointment(NewAppointment::new(4, 4, day(), time(12, 0), "Control"));

        let times: Vec<String> = Reports::new(&db)
            .appointments_on_date(day())
            .iter()
            .map(|d| d.appointment.time.format("%H:%M").to_string())
            .collect();
        assert_eq!(times, vec!["07:05", "09:00", "12:00", "16:45"]);
    }

    #[test]
    fn test_dangling_references() {
        let mut db = Database::open_seeded().unwrap();
        db.create_appointment(NewAppointment::new(42, 42, day(), time(10, 0), "Desconocido"));
        db.delete_patient(1).unwrap();

        let details = Reports::new(&db).appointments_on_date(day());
        assert_eq!(details.len(), 2);
        assert_eq!(details[0].patient_name, PATIENT_NOT_FOUND);
        assert_eq!(details[0].doctor_name, "Dr. Luis Rodríguez");
        assert_eq!(details[1].patient_name, PATIENT_NOT_FOUND);
        assert_eq!(details[1].doctor_name, DOCTOR_NOT_FOUND);
        assert_eq!(details[1].doctor_specialty, SPECIALTY_NOT_AVAILABLE);
    }

    #[test]
    fn test_flattened_json() {
        let db = Database::open_seeded().unwrap();
        let details = Reports::new(&db).appointments_on_date(day());
        let json = serde_json::to_value(&details[0]).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["time"], "09:00");
        assert_eq!(json["patient_name"], "Juan Pérez");
    }

    #[test]
    fn test_no_appointments() {
        let db = Database::new();
        assert!(Reports::new(&db).appointments_on_date(day()).is_empty());
    }
}
