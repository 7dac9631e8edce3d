//! Domain types for the record store: entities and typed identifiers.

pub mod doctor;
pub mod id;
pub mod nurse;
pub mod patient;
pub mod ward;

pub use doctor::{Doctor, NewDoctor};
pub use id::{DoctorId, NurseId, PatientId, WardId};
pub use nurse::{NewNurse, Nurse};
pub use patient::{NewPatient, Patient};
pub use ward::{NewWard, Ward};
