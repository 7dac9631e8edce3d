//! Patient records.

use std::fmt;

use serde::Serialize;

use crate::domain::id::{DoctorId, PatientId, WardId};

/// A stored patient row.
///
/// A patient has at most one attending doctor and at most one assigned
/// ward. Assigned nurses live in the nurse-patient association set, not
/// on the patient row itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub doctor_id: Option<DoctorId>,
    pub ward_id: Option<WardId>,
}

/// A patient awaiting insertion; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewPatient {
    pub name: String,
    pub doctor_id: Option<DoctorId>,
    pub ward_id: Option<WardId>,
}

impl NewPatient {
    pub fn new(
        name: impl Into<String>,
        doctor_id: Option<DoctorId>,
        ward_id: Option<WardId>,
    ) -> Self {
        Self {
            name: name.into(),
            doctor_id,
            ward_id,
        }
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Patient {}: {}", self.id, self.name)
    }
}
