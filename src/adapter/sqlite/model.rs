//! Database row types for Diesel ORM.

use diesel::prelude::*;

use super::schema::{doctors, nurses, nurses_patients, patients, wards};
use crate::domain::{Doctor, DoctorId, Nurse, NurseId, Patient, PatientId, Ward, WardId};

/// Database row for a doctor.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = doctors)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DoctorRow {
    pub id: i32,
    pub name: String,
    pub specialization: String,
}

/// Database row for a doctor (insertable; the store assigns the id).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = doctors)]
pub struct NewDoctorRow {
    pub name: String,
    pub specialization: String,
}

/// Database row for a nurse.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = nurses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NurseRow {
    pub id: i32,
    pub name: String,
    pub doctor_id: Option<i32>,
}

/// Database row for a nurse (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = nurses)]
pub struct NewNurseRow {
    pub name: String,
    pub doctor_id: Option<i32>,
}

/// Database row for a patient.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = patients)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PatientRow {
    pub id: i32,
    pub name: String,
    pub doctor_id: Option<i32>,
    pub ward_id: Option<i32>,
}

/// Database row for a patient (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = patients)]
pub struct NewPatientRow {
    pub name: String,
    pub doctor_id: Option<i32>,
    pub ward_id: Option<i32>,
}

/// Database row for a ward.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = wards)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WardRow {
    pub id: i32,
    pub name: String,
}

/// Database row for a ward (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = wards)]
pub struct NewWardRow {
    pub name: String,
}

/// Database row for a nurse-patient association pair. The composite
/// primary key is the pair itself.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = nurses_patients)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NursePatientRow {
    pub nurse_id: i32,
    pub patient_id: i32,
}

impl From<DoctorRow> for Doctor {
    fn from(row: DoctorRow) -> Self {
        Self {
            id: DoctorId::new(row.id),
            name: row.name,
            specialization: row.specialization,
        }
    }
}

impl From<NurseRow> for Nurse {
    fn from(row: NurseRow) -> Self {
        Self {
            id: NurseId::new(row.id),
            name: row.name,
            doctor_id: row.doctor_id.map(DoctorId::new),
        }
    }
}

impl From<PatientRow> for Patient {
    fn from(row: PatientRow) -> Self {
        Self {
            id: PatientId::new(row.id),
            name: row.name,
            doctor_id: row.doctor_id.map(DoctorId::new),
            ward_id: row.ward_id.map(WardId::new),
        }
    }
}

impl From<WardRow> for Ward {
    fn from(row: WardRow) -> Self {
        Self {
            id: WardId::new(row.id),
            name: row.name,
        }
    }
}
