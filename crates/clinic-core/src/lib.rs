//! Clinic Records Core Library
//!
//! Record store for a small clinic: patients, doctors, medical records,
//! prescriptions and appointments, kept in SQLite.
//!
//! # Architecture
//!
//! ```text
//!   HTTP handler
//!        │
//!        ▼
//!   DbPool::get() ──► Session::begin / begin_write
//!                              │
//!                     query / insert / update / delete
//!                              │
//!                 commit  ◄────┴────►  drop (rollback)
//! ```
//!
//! # Case numbers
//!
//! Patients get a human-readable case number (`P-01`, `P-02`, ...) from a
//! persisted counter that only ever grows. Deleting a patient never frees
//! its number for reuse.
//!
//! # Modules
//!
//! - [`db`]: SQLite schema, connection pool and sessions
//! - [`models`]: Domain types (Patient, Doctor, MedicalRecord, ...)

pub mod db;
pub mod models;

// Re-export commonly used types
pub use db::{open_pool, Database, DbError, DbPool, DbResult, Session};
pub use models::{
    format_case_number, Appointment, AppointmentStatus, Doctor, MedicalRecord, NewAppointment,
    NewDoctor, NewMedicalRecord, NewPrescription, Patient, PatientDetail, PatientFields,
    Prescription,
};
