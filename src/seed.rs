//! Randomized seeding of the record store.
//!
//! Clears the store and repopulates it with synthetic rows through the
//! same creation operations application code uses. Inserts run in
//! foreign-key dependency order, and every foreign key is drawn from the
//! ids the store actually returned.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{NewDoctor, NewNurse, NewPatient, NewWard, PatientId};
use crate::error::Result;
use crate::port::store::RecordStore;

const FIRST_NAMES: &[&str] = &[
    "Alice", "Benjamin", "Clara", "Daniel", "Elena", "Felix", "Grace", "Hassan", "Ingrid",
    "Jonas", "Katherine", "Liam", "Maria", "Noah", "Olivia", "Patrick", "Quinn", "Rosa",
    "Samuel", "Teresa", "Umar", "Vera", "Walter", "Yusuf",
];

const LAST_NAMES: &[&str] = &[
    "Adler", "Bennett", "Castillo", "Dawson", "Eriksen", "Fischer", "Grant", "Hoffman",
    "Ivanov", "Jensen", "Keller", "Lindqvist", "Moreau", "Novak", "Okafor", "Petrov",
    "Quispe", "Romano", "Silva", "Tanaka", "Ueda", "Vargas", "Weber", "Zhang",
];

const SPECIALIZATIONS: &[&str] = &[
    "Cardiology",
    "Dermatology",
    "Gastroenterology",
    "Neurology",
    "Orthopedics",
    "Pediatrics",
    "Oncology",
    "Psychiatry",
    "Radiology",
    "Urology",
];

/// How many rows of each kind to seed.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedVolumes {
    #[serde(default = "default_doctors")]
    pub doctors: usize,
    #[serde(default = "default_nurses")]
    pub nurses: usize,
    #[serde(default = "default_patients")]
    pub patients: usize,
    #[serde(default = "default_wards")]
    pub wards: usize,
    /// Distinct patients linked to each nurse in the association pass.
    #[serde(default = "default_assignments")]
    pub assignments: usize,
}

fn default_doctors() -> usize {
    10
}
fn default_nurses() -> usize {
    15
}
fn default_patients() -> usize {
    50
}
fn default_wards() -> usize {
    10
}
fn default_assignments() -> usize {
    3
}

impl Default for SeedVolumes {
    fn default() -> Self {
        Self {
            doctors: default_doctors(),
            nurses: default_nurses(),
            patients: default_patients(),
            wards: default_wards(),
            assignments: default_assignments(),
        }
    }
}

/// Row counts actually inserted by a seeding run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub doctors: usize,
    pub nurses: usize,
    pub patients: usize,
    pub wards: usize,
    pub assignments: usize,
}

impl fmt::Display for SeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "seeded {} doctors, {} nurses, {} patients, {} wards, {} nurse-patient links",
            self.doctors, self.nurses, self.patients, self.wards, self.assignments
        )
    }
}

fn full_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Alex");
    let last = LAST_NAMES.choose(rng).copied().unwrap_or("Doe");
    format!("{first} {last}")
}

/// Clear the store and repopulate it with randomized rows.
///
/// # Errors
/// Returns the first store fault encountered; a partial reseed may remain
/// behind in that case.
pub fn seed<S, R>(store: &S, volumes: &SeedVolumes, rng: &mut R) -> Result<SeedReport>
where
    S: RecordStore + ?Sized,
    R: Rng + ?Sized,
{
    info!(
        doctors = volumes.doctors,
        nurses = volumes.nurses,
        patients = volumes.patients,
        wards = volumes.wards,
        "reseeding record store"
    );
    store.clear()?;

    let mut doctor_ids = Vec::with_capacity(volumes.doctors);
    for _ in 0..volumes.doctors {
        let specialization = SPECIALIZATIONS.choose(rng).copied().unwrap_or("General");
        let doctor = store.insert_doctor(NewDoctor::new(full_name(rng), specialization))?;
        doctor_ids.push(doctor.id);
    }

    let mut ward_ids = Vec::with_capacity(volumes.wards);
    for _ in 0..volumes.wards {
        let surname = LAST_NAMES.choose(rng).copied().unwrap_or("Doe");
        let ward = store.insert_ward(NewWard::new(format!("{surname} Ward")))?;
        ward_ids.push(ward.id);
    }

    let mut nurse_ids = Vec::with_capacity(volumes.nurses);
    for _ in 0..volumes.nurses {
        let doctor_id = doctor_ids.choose(rng).copied();
        let nurse = store.insert_nurse(NewNurse::new(full_name(rng), doctor_id))?;
        nurse_ids.push(nurse.id);
    }

    let mut patient_ids = Vec::with_capacity(volumes.patients);
    for _ in 0..volumes.patients {
        let doctor_id = doctor_ids.choose(rng).copied();
        let ward_id = ward_ids.choose(rng).copied();
        let patient = store.insert_patient(NewPatient::new(full_name(rng), doctor_id, ward_id))?;
        patient_ids.push(patient.id);
    }

    let per_nurse = volumes.assignments.min(patient_ids.len());
    let mut assignments = 0;
    for nurse_id in &nurse_ids {
        let picks: Vec<PatientId> = patient_ids
            .choose_multiple(rng, per_nurse)
            .copied()
            .collect();
        store.assign_patients(*nurse_id, &picks)?;
        assignments += picks.len();
    }
    debug!(assignments, "association pass complete");

    Ok(SeedReport {
        doctors: doctor_ids.len(),
        nurses: nurse_ids.len(),
        patients: patient_ids.len(),
        wards: ward_ids.len(),
        assignments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::sqlite::{create_pool, run_migrations, SqliteRegistry};
    use crate::domain::{DoctorId, NurseId, PatientId, WardId};
    use crate::port::store::{DoctorStore, NurseStore, PatientStore, WardStore};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn registry() -> SqliteRegistry {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_url = format!("file:seed_test_db_{id}?mode=memory&cache=shared");
        let pool = create_pool(&db_url).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        SqliteRegistry::new(pool)
    }

    fn volumes(doctors: usize, nurses: usize, patients: usize, wards: usize) -> SeedVolumes {
        SeedVolumes {
            doctors,
            nurses,
            patients,
            wards,
            assignments: 3,
        }
    }

    #[test]
    fn seed_inserts_configured_volumes() {
        let store = registry();
        let mut rng = StdRng::seed_from_u64(7);

        let report = seed(&store, &volumes(4, 3, 6, 2), &mut rng).unwrap();

        assert_eq!(report.doctors, 4);
        assert_eq!(report.nurses, 3);
        assert_eq!(report.patients, 6);
        assert_eq!(report.wards, 2);

        // Fresh database: ids run 1..=N per table.
        assert!(store.doctor(DoctorId::new(4)).unwrap().is_some());
        assert!(store.doctor(DoctorId::new(5)).unwrap().is_none());
        assert!(store.patient(PatientId::new(6)).unwrap().is_some());
        assert!(store.ward(WardId::new(2)).unwrap().is_some());
    }

    #[test]
    fn seeded_foreign_keys_reference_seeded_rows() {
        let store = registry();
        let mut rng = StdRng::seed_from_u64(11);

        seed(&store, &volumes(3, 5, 8, 2), &mut rng).unwrap();

        for id in 1..=5 {
            let nurse = store.nurse(NurseId::new(id)).unwrap().unwrap();
            let doctor_id = nurse.doctor_id.expect("seeded nurses have a doctor");
            assert!(store.doctor(doctor_id).unwrap().is_some());
        }
        for id in 1..=8 {
            let patient = store.patient(PatientId::new(id)).unwrap().unwrap();
            assert!(store.ward(patient.ward_id.unwrap()).unwrap().is_some());
        }
    }

    #[test]
    fn reseed_clears_previous_rows() {
        let store = registry();
        let mut rng = StdRng::seed_from_u64(3);

        seed(&store, &volumes(2, 2, 5, 1), &mut rng).unwrap();
        seed(&store, &volumes(1, 1, 2, 1), &mut rng).unwrap();

        assert!(store.patient(PatientId::new(2)).unwrap().is_some());
        assert!(store.patient(PatientId::new(3)).unwrap().is_none());
        assert!(store.doctor(DoctorId::new(2)).unwrap().is_none());
    }

    #[test]
    fn zero_volumes_leave_the_store_empty() {
        let store = registry();
        let mut rng = StdRng::seed_from_u64(1);

        let report = seed(&store, &volumes(0, 0, 0, 0), &mut rng).unwrap();

        assert_eq!(report.assignments, 0);
        assert!(store.doctor(DoctorId::new(1)).unwrap().is_none());
    }

    #[test]
    fn nurses_seeded_without_doctors_have_no_supervisor() {
        let store = registry();
        let mut rng = StdRng::seed_from_u64(5);

        seed(&store, &volumes(0, 2, 0, 0), &mut rng).unwrap();

        let nurse = store.nurse(NurseId::new(1)).unwrap().unwrap();
        assert!(nurse.doctor_id.is_none());
    }

    #[test]
    fn assignment_pass_caps_at_patient_pool() {
        let store = registry();
        let mut rng = StdRng::seed_from_u64(9);
        let volumes = SeedVolumes {
            doctors: 1,
            nurses: 2,
            patients: 2,
            wards: 1,
            assignments: 10,
        };

        let report = seed(&store, &volumes, &mut rng).unwrap();

        // Each nurse links to every patient, never more.
        assert_eq!(report.assignments, 4);
        let patients = store.nurse_patients(NurseId::new(1)).unwrap();
        assert_eq!(patients.len(), 2);
    }

    #[test]
    fn default_volumes_match_the_classic_data_set() {
        let volumes = SeedVolumes::default();
        assert_eq!(
            (volumes.doctors, volumes.nurses, volumes.patients, volumes.wards),
            (10, 15, 50, 10)
        );
    }
}
