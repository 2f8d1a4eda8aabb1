//! Patient models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Prefix shared by every case number.
pub const CASE_NUMBER_PREFIX: &str = "P-";

/// Format a case counter value as a human-readable case number.
///
/// Values are zero-padded to two digits; larger values simply grow
/// (`P-01`, `P-10`, `P-100`).
pub fn format_case_number(value: u64) -> String {
    format!("{}{:02}", CASE_NUMBER_PREFIX, value)
}

/// A stored patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Row ID, used in URLs
    pub id: i64,
    /// Case number (`P-NN`), assigned once at creation
    pub case_no: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub gender: String,
    pub age: u32,
    pub contact_no: String,
    pub address: String,
    pub date_of_birth: NaiveDate,
    /// Creation timestamp (`YYYY-MM-DD HH:MM:SS`, UTC)
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl Patient {
    /// Display name, including the middle name when present.
    pub fn full_name(&self) -> String {
        match self.middle_name.as_deref() {
            Some(middle) => format!("{} {} {}", self.first_name, middle, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }

    /// Copy every editable field from `fields`, leaving identity untouched.
    pub fn apply(&mut self, fields: &PatientFields) {
        self.first_name = fields.first_name.clone();
        self.middle_name = fields.middle_name.clone();
        self.last_name = fields.last_name.clone();
        self.gender = fields.gender.clone();
        self.age = fields.age;
        self.contact_no = fields.contact_no.clone();
        self.address = fields.address.clone();
        self.date_of_birth = fields.date_of_birth;
    }
}

/// The editable part of a patient, as submitted on create or edit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientFields {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub gender: String,
    pub age: u32,
    pub contact_no: String,
    pub address: String,
    pub date_of_birth: NaiveDate,
}
