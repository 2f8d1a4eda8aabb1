//! Aggregated patient chart.

use serde::{Deserialize, Serialize};

use super::{Appointment, MedicalRecord, Patient, Prescription};

/// Everything shown on a patient's detail page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientDetail {
    pub patient: Patient,
    pub medical_records: Vec<MedicalRecord>,
    /// Prescriptions reachable through `medical_records`
    pub prescriptions: Vec<Prescription>,
    pub appointments: Vec<Appointment>,
}
