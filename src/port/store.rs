//! Persistence ports for the record store.
//!
//! One trait per entity kind keeps the storage access layer swappable and
//! testable without a live database. Lookups that match no row return
//! `Ok(None)` or an empty `Vec`; only store faults and constraint
//! violations are errors.

use crate::domain::{
    Doctor, DoctorId, NewDoctor, NewNurse, NewPatient, NewWard, Nurse, NurseId, Patient,
    PatientId, Ward, WardId,
};
use crate::error::Result;

/// Storage operations for doctors.
pub trait DoctorStore {
    /// Insert a doctor and return the stored row with its assigned id.
    fn insert_doctor(&self, doctor: NewDoctor) -> Result<Doctor>;

    /// Get a doctor by id.
    fn doctor(&self, id: DoctorId) -> Result<Option<Doctor>>;

    /// Names of the patients attended by the doctor; empty when the doctor
    /// has no patients or does not exist.
    fn doctor_patient_names(&self, id: DoctorId) -> Result<Vec<String>>;

    /// Nurses supervised by the doctor; empty when none.
    fn doctor_nurses(&self, id: DoctorId) -> Result<Vec<Nurse>>;
}

/// Storage operations for nurses.
pub trait NurseStore {
    /// Insert a nurse and return the stored row with its assigned id.
    fn insert_nurse(&self, nurse: NewNurse) -> Result<Nurse>;

    /// Get a nurse by id.
    fn nurse(&self, id: NurseId) -> Result<Option<Nurse>>;

    /// The nurse's supervising doctor. `Ok(None)` covers both a missing
    /// nurse and a nurse without a doctor; call [`NurseStore::nurse`]
    /// first when the distinction matters.
    fn nurse_doctor(&self, id: NurseId) -> Result<Option<Doctor>>;

    /// All patients linked to the nurse through the association set.
    fn nurse_patients(&self, id: NurseId) -> Result<Vec<Patient>>;

    /// Link the nurse to each given patient, skipping pairs already
    /// present. Unknown nurse or patient ids surface as constraint
    /// violations.
    fn assign_patients(&self, id: NurseId, patients: &[PatientId]) -> Result<()>;
}

/// Storage operations for patients.
pub trait PatientStore {
    /// Insert a patient and return the stored row with its assigned id.
    fn insert_patient(&self, patient: NewPatient) -> Result<Patient>;

    /// Get a patient by id.
    fn patient(&self, id: PatientId) -> Result<Option<Patient>>;

    /// The patient's attending doctor, if any.
    fn patient_doctor(&self, id: PatientId) -> Result<Option<Doctor>>;

    /// The patient's assigned ward, if any.
    fn patient_ward(&self, id: PatientId) -> Result<Option<Ward>>;

    /// Nurses assigned to the patient through the association set.
    fn patient_nurses(&self, id: PatientId) -> Result<Vec<Nurse>>;
}

/// Storage operations for wards.
pub trait WardStore {
    /// Insert a ward and return the stored row with its assigned id.
    fn insert_ward(&self, ward: NewWard) -> Result<Ward>;

    /// Get a ward by id.
    fn ward(&self, id: WardId) -> Result<Option<Ward>>;

    /// Number of patients assigned to the ward; zero for an empty or
    /// nonexistent ward.
    fn ward_patient_count(&self, id: WardId) -> Result<i64>;
}

/// The full record store surface used by the seeder and the CLI.
pub trait RecordStore: DoctorStore + NurseStore + PatientStore + WardStore {
    /// Delete all rows of all four entity kinds; association rows cascade.
    fn clear(&self) -> Result<()>;
}
