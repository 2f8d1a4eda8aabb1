//! Patient form parsing and validation.

use chrono::NaiveDate;
use clinic_core::{Patient, PatientFields};
use serde::{Deserialize, Serialize};

use crate::error::WebError;

/// Date format used by the `dob` field.
pub const DOB_FORMAT: &str = "%Y-%m-%d";

/// Raw patient form, exactly as posted.
///
/// Every field defaults to empty so that a missing field is reported by
/// [`PatientForm::into_fields`] rather than by the extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PatientForm {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub gender: String,
    pub age: String,
    pub contact_no: String,
    pub address: String,
    pub dob: String,
}

fn required(field: &'static str, value: &str) -> Result<String, WebError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(WebError::InvalidForm(format!("{} is required", field)));
    }
    Ok(value.to_string())
}

impl PatientForm {
    /// Pre-fill the form from a stored patient.
    pub fn from_patient(patient: &Patient) -> Self {
        Self {
            first_name: patient.first_name.clone(),
            middle_name: patient.middle_name.clone().unwrap_or_default(),
            last_name: patient.last_name.clone(),
            gender: patient.gender.clone(),
            age: patient.age.to_string(),
            contact_no: patient.contact_no.clone(),
            address: patient.address.clone(),
            dob: patient.date_of_birth.format(DOB_FORMAT).to_string(),
        }
    }

    /// Validate and convert into store fields.
    pub fn into_fields(self) -> Result<PatientFields, WebError> {
        let age = required("age", &self.age)?;
        let age: u32 = age
            .parse()
            .map_err(|_| WebError::InvalidForm(format!("age must be a whole number, got {:?}", age)))?;

        let dob = required("dob", &self.dob)?;
        let date_of_birth = NaiveDate::parse_from_str(&dob, DOB_FORMAT).map_err(|_| {
            WebError::InvalidForm(format!("dob must be a date in YYYY-MM-DD format, got {:?}", dob))
        })?;

        let middle_name = self.middle_name.trim();

        Ok(PatientFields {
            first_name: required("first_name", &self.first_name)?,
            middle_name: (!middle_name.is_empty()).then(|| middle_name.to_string()),
            last_name: required("last_name", &self.last_name)?,
            gender: required("gender", &self.gender)?,
            age,
            contact_no: required("contact_no", &self.contact_no)?,
            address: required("address", &self.address)?,
            date_of_birth,
        })
    }
}
