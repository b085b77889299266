//! Patients seen by each doctor.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::Reports;
use crate::models::RecordId;

/// One doctor's caseload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DoctorPatientsReport {
    pub doctor_id: RecordId,
    pub doctor_name: String,
    pub specialty: String,
    /// Distinct patients across the doctor's appointments
    pub total_patients: usize,
    pub total_appointments: usize,
    /// Patient names in first-seen order, one per distinct patient
    pub patients: Vec<String>,
}

impl<'a> Reports<'a> {
    /// Caseload of every doctor on the roster, in roster order.
    pub fn patients_by_doctor(&self) -> Vec<DoctorPatientsReport> {
        self.db
            .doctors()
            .rows()
            .iter()
            .map(|doctor| {
                let appointments: Vec<_> = self
                    .db
                    .appointments()
                    .rows()
                    .iter()
                    .filter(|a| a.doctor_id == doctor.id)
                    .collect();
                let patient_ids: IndexSet<RecordId> =
                    appointments.iter().map(|a| a.patient_id).collect();

                DoctorPatientsReport {
                    doctor_id: doctor.id,
                    doctor_name: doctor.name.clone(),
                    specialty: doctor.specialty.clone(),
                    total_patients: patient_ids.len(),
                    total_appointments: appointments.len(),
                    patients: patient_ids
                        .iter()
                        .map(|&id| self.patient_name(id))
                        .collect(),
                }
            })
            .collect()
    }
}
