//! Nurse records.

use std::fmt;

use serde::Serialize;

use crate::domain::id::{DoctorId, NurseId};

/// A stored nurse row.
///
/// A nurse reports to at most one supervising doctor and is linked to
/// patients exclusively through the nurse-patient association set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Nurse {
    pub id: NurseId,
    pub name: String,
    pub doctor_id: Option<DoctorId>,
}

/// A nurse awaiting insertion; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewNurse {
    pub name: String,
    pub doctor_id: Option<DoctorId>,
}

impl NewNurse {
    pub fn new(name: impl Into<String>, doctor_id: Option<DoctorId>) -> Self {
        Self {
            name: name.into(),
            doctor_id,
        }
    }
}

impl fmt::Display for Nurse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nurse {}: {}", self.id, self.name)?;
        if let Some(doctor) = self.doctor_id {
            write!(f, " (doctor {doctor})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_without_doctor() {
        let nurse = Nurse {
            id: NurseId::new(2),
            name: "Carla Espinosa".to_string(),
            doctor_id: None,
        };
        assert_eq!(nurse.to_string(), "Nurse 2: Carla Espinosa");
    }

    #[test]
    fn display_with_doctor() {
        let nurse = Nurse {
            id: NurseId::new(2),
            name: "Carla Espinosa".to_string(),
            doctor_id: Some(DoctorId::new(5)),
        };
        assert_eq!(nurse.to_string(), "Nurse 2: Carla Espinosa (doctor 5)");
    }
}
