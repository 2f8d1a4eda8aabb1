//! Medical records and the prescriptions written against them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single visit entry in a patient's chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicalRecord {
    pub id: i64,
    pub patient_id: i64,
    /// Attending doctor, if recorded
    pub doctor_id: Option<i64>,
    pub visit_date: NaiveDate,
    pub diagnosis: String,
    pub treatment: Option<String>,
    pub notes: Option<String>,
}

/// Fields for inserting a medical record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewMedicalRecord {
    pub patient_id: i64,
    pub doctor_id: Option<i64>,
    pub visit_date: NaiveDate,
    pub diagnosis: String,
    pub treatment: Option<String>,
    pub notes: Option<String>,
}

/// A prescription attached to a medical record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prescription {
    pub id: i64,
    pub record_id: i64,
    pub medication: String,
    /// Dose per administration (e.g., "500 mg")
    pub dosage: String,
    /// How often (e.g., "twice daily")
    pub frequency: String,
    pub duration: Option<String>,
    pub instructions: Option<String>,
}

/// Fields for inserting a prescription.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPrescription {
    pub record_id: i64,
    pub medication: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: Option<String>,
    pub instructions: Option<String>,
}
