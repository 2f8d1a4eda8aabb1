//! Doctor models.

use serde::{Deserialize, Serialize};

/// A doctor on staff.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Specialization (e.g., "Pediatrics")
    pub specialization: Option<String>,
    pub contact_no: Option<String>,
    pub email: Option<String>,
}

/// Fields for inserting a doctor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewDoctor {
    pub first_name: String,
    pub last_name: String,
    pub specialization: Option<String>,
    pub contact_no: Option<String>,
    pub email: Option<String>,
}

impl NewDoctor {
    /// Create a doctor with only the required fields.
    pub fn new(first_name: String, last_name: String) -> Self {
        Self {
            first_name,
            last_name,
            specialization: None,
            contact_no: None,
            email: None,
        }
    }
}

impl Doctor {
    /// Display name with the "Dr." prefix.
    pub fn display_name(&self) -> String {
        format!("Dr. {} {}", self.first_name, self.last_name)
    }
}
