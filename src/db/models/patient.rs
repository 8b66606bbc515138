use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;

/// Statuses that count as an open case on the supervisor views
pub const UNRESOLVED_STATUSES: [&str; 2] = ["ANC Due", "Critical"];

pub const ANC_DUE: &str = "ANC Due";

/// Age below which a patient is reported as a child
pub const CHILD_AGE_LIMIT: i64 = 12;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patient {
    pub id: u32,
    pub name: String,
    /// Free text as entered; see [`Patient::age_years`]
    pub age: String,
    pub gender: String,
    pub contact: String,
    pub status: String,
}

impl Patient {
    /// Age as an integer. Anything that does not parse counts as 0; digit
    /// strings too long for `i64` saturate instead.
    pub fn age_years(&self) -> i64 {
        let age = self.age.trim();
        match age.parse::<i64>() {
            Ok(years) => years,
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => 0,
            },
        }
    }

    pub fn is_child(&self) -> bool {
        self.age_years() < CHILD_AGE_LIMIT
    }

    pub fn is_male(&self) -> bool {
        self.gender == "M"
    }

    pub fn is_female(&self) -> bool {
        self.gender == "F"
    }

    pub fn is_anc_due(&self) -> bool {
        self.status == ANC_DUE
    }

    pub fn is_unresolved(&self) -> bool {
        UNRESOLVED_STATUSES.contains(&self.status.as_str())
    }
}

/// Registration form. Every field is required but otherwise unchecked.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPatient {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub contact: String,
    pub status: String,
}

impl NewPatient {
    pub fn into_patient(self, id: u32) -> Patient {
        Patient {
            id,
            name: self.name,
            age: self.age,
            gender: self.gender,
            contact: self.contact,
            status: self.status,
        }
    }
}
