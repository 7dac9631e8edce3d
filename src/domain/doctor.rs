//! Doctor records.

use std::fmt;

use serde::Serialize;

use crate::domain::id::DoctorId;

/// A stored doctor row.
///
/// Doctors own zero or more nurses and zero or more patients via the
/// `doctor_id` foreign key on the owned side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
    /// Open set of medical specialties; the store accepts any text.
    pub specialization: String,
}

/// A doctor awaiting insertion; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewDoctor {
    pub name: String,
    pub specialization: String,
}

impl NewDoctor {
    pub fn new(name: impl Into<String>, specialization: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specialization: specialization.into(),
        }
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Doctor {}: {} ({})",
            self.id, self.name, self.specialization
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_id_name_and_specialization() {
        let doctor = Doctor {
            id: DoctorId::new(1),
            name: "Gregory House".to_string(),
            specialization: "Nephrology".to_string(),
        };
        assert_eq!(doctor.to_string(), "Doctor 1: Gregory House (Nephrology)");
    }

    #[test]
    fn new_doctor_accepts_str_and_string() {
        let doctor = NewDoctor::new("A", "Cardiology".to_string());
        assert_eq!(doctor.name, "A");
        assert_eq!(doctor.specialization, "Cardiology");
    }
}
