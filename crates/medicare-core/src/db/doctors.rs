//! Doctor roster queries. The roster is read-only.

use super::{Database, Record};
use crate::models::{contains_ignore_case, Doctor, RecordId, ToRecordId};

impl Record for Doctor {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Database {
    /// List the roster in its fixed order.
    pub fn list_doctors(&self) -> Vec<Doctor> {
        self.doctors.snapshot()
    }

    /// Get a doctor by ID.
    pub fn get_doctor(&self, id: impl ToRecordId) -> Option<Doctor> {
        self.doctors.get(id.to_record_id()?).cloned()
    }

    /// Doctors whose specialty contains `term` (case-insensitive).
    pub fn search_doctors_by_specialty(&self, term: &str) -> Vec<Doctor> {
        self.doctors
            .filtered(|doctor| contains_ignore_case(&doctor.specialty, term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_lookup() {
        let db = Database::open_seeded().unwrap();

        let doctors = db.list_doctors();
        assert_eq!(doctors.len(), 5);
        assert_eq!(doctors[0].name, "Dr. Carlos Mendoza");

        assert_eq!(db.get_doctor("3").unwrap().specialty, "Medicina General");
        assert!(db.get_doctor(6).is_none());
    }

    #[test]
    fn test_search_by_specialty() {
        let db = Database::open_seeded().unwrap();

        let results = db.search_doctors_by_specialty("pediatría");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Dra. Ana García");

        assert_eq!(db.search_doctors_by_specialty("LOGÍA").len(), 3);
    }
}
