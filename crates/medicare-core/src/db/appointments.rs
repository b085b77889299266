//! Appointment table operations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{today, Database, Record};
use crate::models::{
    Appointment, AppointmentStatus, AppointmentUpdate, NewAppointment, RecordId, ToRecordId,
};

impl Record for Appointment {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Conjunctive appointment filter; unset criteria match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppointmentFilter {
    pub date: Option<NaiveDate>,
    pub doctor_id: Option<RecordId>,
}

impl AppointmentFilter {
    pub fn matches(&self, appointment: &Appointment) -> bool {
        self.date.map_or(true, |date| appointment.date == date)
            && self
                .doctor_id
                .map_or(true, |doctor_id| appointment.doctor_id == doctor_id)
    }
}

impl Database {
    /// Book an appointment. Status defaults to `Scheduled`.
    pub fn create_appointment(&mut self, new: NewAppointment) -> Appointment {
        let appointment = self.appointments.insert_with(|id| Appointment {
            id,
            patient_id: new.patient_id,
            doctor_id: new.doctor_id,
            date: new.date,
            time: new.time,
            reason: new.reason,
            status: new.status.unwrap_or_default(),
        });
        debug!(
            id = appointment.id,
            patient_id = appointment.patient_id,
            doctor_id = appointment.doctor_id,
            "created appointment"
        );
        appointment
    }

    /// List all appointments in booking order.
    pub fn list_appointments(&self) -> Vec<Appointment> {
        self.appointments.snapshot()
    }

    /// Get an appointment by ID.
    pub fn get_appointment(&self, id: impl ToRecordId) -> Option<Appointment> {
        self.appointments.get(id.to_record_id()?).cloned()
    }

    /// Appointments on an exact date.
    pub fn appointments_on(&self, date: NaiveDate) -> Vec<Appointment> {
        self.appointments.filtered(|a| a.date == date)
    }

    /// Appointments on the current date.
    pub fn appointments_today(&self) -> Vec<Appointment> {
        self.appointments_on(today())
    }

    /// Appointments booked with a doctor.
    pub fn appointments_for_doctor(&self, doctor_id: impl ToRecordId) -> Vec<Appointment> {
        match doctor_id.to_record_id() {
            Some(doctor_id) => self.appointments.filtered(|a| a.doctor_id == doctor_id),
            None => Vec::new(),
        }
    }

    /// Appointments booked for a patient.
    pub fn appointments_for_patient(&self, patient_id: impl ToRecordId) -> Vec<Appointment> {
        match patient_id.to_record_id() {
            Some(patient_id) => self.appointments.filtered(|a| a.patient_id == patient_id),
            None => Vec::new(),
        }
    }

    /// Appointments matching every criterion set in `filter`.
    pub fn filter_appointments(&self, filter: &AppointmentFilter) -> Vec<Appointment> {
        self.appointments.filtered(|a| filter.matches(a))
    }

    /// Update an existing appointment. Returns `None` when the ID is unknown.
    pub fn update_appointment(
        &mut self,
        id: impl ToRecordId,
        update: AppointmentUpdate,
    ) -> Option<Appointment> {
        let appointment = self.appointments.get_mut(id.to_record_id()?)?;
        update.apply_to(appointment);
        debug!(id = appointment.id, "updated appointment");
        Some(appointment.clone())
    }

    /// Mark an appointment as completed.
    ///
    /// Completing an already completed appointment leaves it unchanged.
    pub fn complete_appointment(&mut self, id: impl ToRecordId) -> Option<Appointment> {
        let appointment = self.appointments.get_mut(id.to_record_id()?)?;
        if appointment
            .status
            .can_transition_to(AppointmentStatus::Completed)
        {
            appointment.status = AppointmentStatus::Completed;
            debug!(id = appointment.id, "completed appointment");
        }
        Some(appointment.clone())
    }

    /// Delete an appointment, returning the removed row.
    pub fn delete_appointment(&mut self, id: impl ToRecordId) -> Option<Appointment> {
        let removed = self.appointments.remove(id.to_record_id()?)?;
        debug!(id = removed.id, "deleted appointment");
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_create_defaults_to_scheduled() {
        let mut db = Database::new();
        let appointment = db.create_appointment(NewAppointment::new(
            1,
            2,
            date("2024-04-01"),
            time(8, 15),
            "Control",
        ));

        assert_eq!(appointment.id, 1);
        assert_eq!(appointment.status, AppointmentStatus::Scheduled);
        assert_eq!(db.get_appointment(1), Some(appointment));
    }

    #[test]
    fn test_create_keeps_supplied_status() {
        let mut db = Database::new();
        let mut new = NewAppointment::new(1, 2, date("2024-04-01"), time(8, 15), "Control");
        new.status = Some(AppointmentStatus::Completed);

        assert_eq!(db.create_appointment(new).status, AppointmentStatus::Completed);
    }

    #[test]
    fn test_seeded_filters() {
        let db = Database::open_seeded().unwrap();

        let on_date = db.appointments_on(date("2024-03-14"));
        assert_eq!(on_date.len(), 1);
        assert_eq!(on_date[0].id, 3);

        let for_doctor = db.appointments_for_doctor("2");
        assert_eq!(for_doctor.len(), 1);
        assert_eq!(for_doctor[0].patient_id, 2);

        let for_patient = db.appointments_for_patient(5);
        assert_eq!(for_patient.len(), 1);
        assert_eq!(for_patient[0].reason, "Dolor en la rodilla");

        assert!(db.appointments_for_doctor("x").is_empty());
    }

    #[test]
    fn test_appointments_today() {
        let mut db = Database::open_seeded().unwrap();
        let booked = db.create_appointment(NewAppointment::new(1, 1, today(), time(12, 0), "Hoy"));

        let todays = db.appointments_today();
        assert!(todays.iter().any(|a| a.id == booked.id));
        assert!(todays.iter().all(|a| a.date == today()));
    }

    #[test]
    fn test_filter_appointments() {
        let mut db = Database::open_seeded().unwrap();
        db.create_appointment(NewAppointment::new(4, 3, date("2024-03-15"), time(11, 0), "Seguimiento"));
        db.create_appointment(NewAppointment::new(2, 2, date("2024-03-15"), time(16, 0), "Vacunas"));

        let by_date = db.filter_appointments(&AppointmentFilter {
            date: Some(date("2024-03-15")),
            ..Default::default()
        });
        assert_eq!(by_date.len(), 3);

        let by_both = db.filter_appointments(&AppointmentFilter {
            date: Some(date("2024-03-15")),
            doctor_id: Some(3),
        });
        let ids: Vec<_> = by_both.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 6]);

        assert_eq!(db.filter_appointments(&AppointmentFilter::default()).len(), 7);
    }

    #[test]
    fn test_complete_is_one_way() {
        let mut db = Database::open_seeded().unwrap();

        let completed = db.complete_appointment(1).unwrap();
        assert_eq!(completed.status, AppointmentStatus::Completed);

        let again = db.complete_appointment(1).unwrap();
        assert_eq!(again.status, AppointmentStatus::Completed);
        assert!(db.complete_appointment(99).is_none());
    }

    #[test]
    fn test_update_keeps_status_and_identity() {
        let mut db = Database::open_seeded().unwrap();

        let updated = db
            .update_appointment(
                "3",
                AppointmentUpdate {
                    reason: Some("Dolor torácico".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.id, 3);
        assert_eq!(updated.reason, "Dolor torácico");
        assert_eq!(updated.status, AppointmentStatus::Completed);
        assert_eq!(updated.time, time(14, 0));
    }

    #[test]
    fn test_delete_appointment() {
        let mut db = Database::open_seeded().unwrap();

        let removed = db.delete_appointment(2).unwrap();
        assert_eq!(removed.reason, "Control pediátrico");
        assert!(db.get_appointment(2).is_none());
        assert_eq!(db.list_appointments().len(), 4);
        assert!(db.delete_appointment(2).is_none());
    }

    #[test]
    fn test_deleting_patient_keeps_appointments() {
        let mut db = Database::open_seeded().unwrap();
        db.delete_patient(1).unwrap();

        let appointment = db.get_appointment(1).unwrap();
        assert_eq!(appointment.patient_id, 1);
        assert_eq!(db.appointments_for_patient(1).len(), 1);
    }
}
