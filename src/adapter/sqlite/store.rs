//! SQLite record store implementation.
//!
//! Implements the per-entity store traits against a Diesel connection
//! pool. The pool handle is passed in at construction; connections are
//! acquired per call and released by RAII on every exit path.

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};

use super::connection::DbPool;
use super::model::{
    DoctorRow, NewDoctorRow, NewNurseRow, NewPatientRow, NewWardRow, NursePatientRow, NurseRow,
    PatientRow, WardRow,
};
use super::schema::{doctors, nurses, nurses_patients, patients, wards};
use crate::domain::{
    Doctor, DoctorId, NewDoctor, NewNurse, NewPatient, NewWard, Nurse, NurseId, Patient,
    PatientId, Ward, WardId,
};
use crate::error::{Error, Result};
use crate::port::store::{DoctorStore, NurseStore, PatientStore, RecordStore, WardStore};

/// SQLite-backed record store.
///
/// Implements [`DoctorStore`], [`NurseStore`], [`PatientStore`],
/// [`WardStore`], and [`RecordStore`] for the hospital registry tables.
pub struct SqliteRegistry {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteRegistry {
    /// Create a new registry backed by the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<PooledConnection<ConnectionManager<SqliteConnection>>> {
        self.pool.get().map_err(|e| Error::Connection(e.to_string()))
    }
}

impl DoctorStore for SqliteRegistry {
    fn insert_doctor(&self, doctor: NewDoctor) -> Result<Doctor> {
        let mut conn = self.conn()?;
        let row: DoctorRow = diesel::insert_into(doctors::table)
            .values(NewDoctorRow {
                name: doctor.name,
                specialization: doctor.specialization,
            })
            .returning(DoctorRow::as_returning())
            .get_result(&mut conn)
            .map_err(Error::from)?;
        Ok(row.into())
    }

    fn doctor(&self, id: DoctorId) -> Result<Option<Doctor>> {
        let mut conn = self.conn()?;
        let row: Option<DoctorRow> = doctors::table
            .find(id.value())
            .first(&mut conn)
            .optional()
            .map_err(Error::from)?;
        Ok(row.map(Doctor::from))
    }

    fn doctor_patient_names(&self, id: DoctorId) -> Result<Vec<String>> {
        let mut conn = self.conn()?;
        patients::table
            .filter(patients::doctor_id.eq(id.value()))
            .order(patients::id.asc())
            .select(patients::name)
            .load(&mut conn)
            .map_err(Error::from)
    }

    fn doctor_nurses(&self, id: DoctorId) -> Result<Vec<Nurse>> {
        let mut conn = self.conn()?;
        let rows: Vec<NurseRow> = nurses::table
            .filter(nurses::doctor_id.eq(id.value()))
            .order(nurses::id.asc())
            .load(&mut conn)
            .map_err(Error::from)?;
        Ok(rows.into_iter().map(Nurse::from).collect())
    }
}

impl NurseStore for SqliteRegistry {
    fn insert_nurse(&self, nurse: NewNurse) -> Result<Nurse> {
        let mut conn = self.conn()?;
        let row: NurseRow = diesel::insert_into(nurses::table)
            .values(NewNurseRow {
                name: nurse.name,
                doctor_id: nurse.doctor_id.map(|id| id.value()),
            })
            .returning(NurseRow::as_returning())
            .get_result(&mut conn)
            .map_err(Error::from)?;
        Ok(row.into())
    }

    fn nurse(&self, id: NurseId) -> Result<Option<Nurse>> {
        let mut conn = self.conn()?;
        let row: Option<NurseRow> = nurses::table
            .find(id.value())
            .first(&mut conn)
            .optional()
            .map_err(Error::from)?;
        Ok(row.map(Nurse::from))
    }

    fn nurse_doctor(&self, id: NurseId) -> Result<Option<Doctor>> {
        let mut conn = self.conn()?;
        let row: Option<DoctorRow> = nurses::table
            .inner_join(doctors::table)
            .filter(nurses::id.eq(id.value()))
            .select(DoctorRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(Error::from)?;
        Ok(row.map(Doctor::from))
    }

    fn nurse_patients(&self, id: NurseId) -> Result<Vec<Patient>> {
        let mut conn = self.conn()?;
        let rows: Vec<PatientRow> = nurses_patients::table
            .inner_join(patients::table)
            .filter(nurses_patients::nurse_id.eq(id.value()))
            .order(patients::id.asc())
            .select(PatientRow::as_select())
            .load(&mut conn)
            .map_err(Error::from)?;
        Ok(rows.into_iter().map(Patient::from).collect())
    }

    fn assign_patients(&self, id: NurseId, patient_ids: &[PatientId]) -> Result<()> {
        if patient_ids.is_empty() {
            return Ok(());
        }
        let mut conn = self.conn()?;
        let rows: Vec<NursePatientRow> = patient_ids
            .iter()
            .map(|patient| NursePatientRow {
                nurse_id: id.value(),
                patient_id: patient.value(),
            })
            .collect();

        // OR IGNORE resolves duplicate pairs; SQLite's conflict handling
        // does not apply to foreign keys, so dangling ids still error.
        diesel::insert_or_ignore_into(nurses_patients::table)
            .values(&rows)
            .execute(&mut conn)
            .map_err(Error::from)?;
        Ok(())
    }
}

impl PatientStore for SqliteRegistry {
    fn insert_patient(&self, patient: NewPatient) -> Result<Patient> {
        let mut conn = self.conn()?;
        let row: PatientRow = diesel::insert_into(patients::table)
            .values(NewPatientRow {
                name: patient.name,
                doctor_id: patient.doctor_id.map(|id| id.value()),
                ward_id: patient.ward_id.map(|id| id.value()),
            })
            .returning(PatientRow::as_returning())
            .get_result(&mut conn)
            .map_err(Error::from)?;
        Ok(row.into())
    }

    fn patient(&self, id: PatientId) -> Result<Option<Patient>> {
        let mut conn = self.conn()?;
        let row: Option<PatientRow> = patients::table
            .find(id.value())
            .first(&mut conn)
            .optional()
            .map_err(Error::from)?;
        Ok(row.map(Patient::from))
    }

    fn patient_doctor(&self, id: PatientId) -> Result<Option<Doctor>> {
        let mut conn = self.conn()?;
        let row: Option<DoctorRow> = patients::table
            .inner_join(doctors::table)
            .filter(patients::id.eq(id.value()))
            .select(DoctorRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(Error::from)?;
        Ok(row.map(Doctor::from))
    }

    fn patient_ward(&self, id: PatientId) -> Result<Option<Ward>> {
        let mut conn = self.conn()?;
        let row: Option<WardRow> = patients::table
            .inner_join(wards::table)
            .filter(patients::id.eq(id.value()))
            .select(WardRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(Error::from)?;
        Ok(row.map(Ward::from))
    }

    fn patient_nurses(&self, id: PatientId) -> Result<Vec<Nurse>> {
        let mut conn = self.conn()?;
        let rows: Vec<NurseRow> = nurses_patients::table
            .inner_join(nurses::table)
            .filter(nurses_patients::patient_id.eq(id.value()))
            .order(nurses::id.asc())
            .select(NurseRow::as_select())
            .load(&mut conn)
            .map_err(Error::from)?;
        Ok(rows.into_iter().map(Nurse::from).collect())
    }
}

impl WardStore for SqliteRegistry {
    fn insert_ward(&self, ward: NewWard) -> Result<Ward> {
        let mut conn = self.conn()?;
        let row: WardRow = diesel::insert_into(wards::table)
            .values(NewWardRow { name: ward.name })
            .returning(WardRow::as_returning())
            .get_result(&mut conn)
            .map_err(Error::from)?;
        Ok(row.into())
    }

    fn ward(&self, id: WardId) -> Result<Option<Ward>> {
        let mut conn = self.conn()?;
        let row: Option<WardRow> = wards::table
            .find(id.value())
            .first(&mut conn)
            .optional()
            .map_err(Error::from)?;
        Ok(row.map(Ward::from))
    }

    fn ward_patient_count(&self, id: WardId) -> Result<i64> {
        let mut conn = self.conn()?;
        patients::table
            .filter(patients::ward_id.eq(id.value()))
            .count()
            .get_result(&mut conn)
            .map_err(Error::from)
    }
}

impl RecordStore for SqliteRegistry {
    fn clear(&self) -> Result<()> {
        let mut conn = self.conn()?;
        // Children before parents so no foreign-key check trips mid-way.
        diesel::delete(nurses_patients::table)
            .execute(&mut conn)
            .map_err(Error::from)?;
        diesel::delete(patients::table)
            .execute(&mut conn)
            .map_err(Error::from)?;
        diesel::delete(nurses::table)
            .execute(&mut conn)
            .map_err(Error::from)?;
        diesel::delete(doctors::table)
            .execute(&mut conn)
            .map_err(Error::from)?;
        diesel::delete(wards::table)
            .execute(&mut conn)
            .map_err(Error::from)?;
        Ok(())
    }
}
