//! Dashboard counters.

use serde::{Deserialize, Serialize};

use super::Reports;
use crate::db::today;
use crate::models::AppointmentStatus;

/// Headline counts over the whole store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryStatistics {
    pub total_patients: usize,
    pub total_doctors: usize,
    /// Appointments dated today, whatever their status
    pub appointments_today: usize,
    pub total_history_entries: usize,
    pub scheduled_appointments: usize,
    pub completed_appointments: usize,
}

impl<'a> Reports<'a> {
    /// Count rows per table plus today's and per-status appointments.
    pub fn summary_statistics(&self) -> SummaryStatistics {
        let today = today();
        let appointments = self.db.appointments().rows();
        let with_status =
            |status: AppointmentStatus| appointments.iter().filter(|a| a.status == status).count();

        SummaryStatistics {
            total_patients: self.db.patients().len(),
            total_doctors: self.db.doctors().len(),
            appointments_today: appointments.iter().filter(|a| a.date == today).count(),
            total_history_entries: self.db.history().len(),
            scheduled_appointments: with_status(AppointmentStatus::Scheduled),
            completed_appointments: with_status(AppointmentStatus::Completed),
        }
    }
}
