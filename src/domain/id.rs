//! Typed record identifiers.
//!
//! Each entity gets its own newtype over the store-assigned integer key so
//! a doctor id cannot be passed where a ward id is expected. The inner
//! value is private; construction goes through the defined constructors.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! record_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a store-assigned key.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the underlying key.
            #[must_use]
            pub const fn value(&self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self::new(id)
            }
        }
    };
}

record_id! {
    /// Identifier of a doctor row.
    DoctorId
}

record_id! {
    /// Identifier of a nurse row.
    NurseId
}

record_id! {
    /// Identifier of a patient row.
    PatientId
}

record_id! {
    /// Identifier of a ward row.
    WardId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doctor_id_new_and_value() {
        let id = DoctorId::new(7);
        assert_eq!(id.value(), 7);
    }

    #[test]
    fn doctor_id_display() {
        let id = DoctorId::new(42);
        assert_eq!(format!("{}", id), "42");
    }

    #[test]
    fn ward_id_from_i32() {
        let id = WardId::from(3);
        assert_eq!(id.value(), 3);
    }

    #[test]
    fn ids_of_different_kinds_are_distinct_types() {
        // Compile-time property: NurseId and PatientId cannot be mixed up.
        fn takes_nurse(_: NurseId) {}
        takes_nurse(NurseId::new(1));
    }

    #[test]
    fn id_serializes_as_bare_integer() {
        let json = serde_json::to_string(&PatientId::new(12)).unwrap();
        assert_eq!(json, "12");
    }
}
