//! Ward records.

use std::fmt;

use serde::Serialize;

use crate::domain::id::WardId;

/// A stored ward row. Owns zero or more patients via `ward_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ward {
    pub id: WardId,
    pub name: String,
}

/// A ward awaiting insertion; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewWard {
    pub name: String,
}

impl NewWard {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Ward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ward {}: {}", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_id_and_name() {
        let ward = Ward {
            id: WardId::new(4),
            name: "Nightingale Ward".to_string(),
        };
        assert_eq!(ward.to_string(), "Ward 4: Nightingale Ward");
    }
}
