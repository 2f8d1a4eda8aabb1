//! Patient database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{DbResult, Session};
use crate::models::{format_case_number, Patient, PatientDetail, PatientFields};

const PATIENT_COLUMNS: &str = r#"
    id, case_no, first_name, middle_name, last_name, gender, age,
    contact_no, address, date_of_birth, created_at, updated_at
"#;

fn patient_from_row(row: &Row<'_>) -> rusqlite::Result<Patient> {
    Ok(Patient {
        id: row.get(0)?,
        case_no: row.get(1)?,
        first_name: row.get(2)?,
        middle_name: row.get(3)?,
        last_name: row.get(4)?,
        gender: row.get(5)?,
        age: row.get(6)?,
        contact_no: row.get(7)?,
        address: row.get(8)?,
        date_of_birth: row.get(9)?,
        created_at: row.get(10)?,
        updated_at: row.get(11)?,
    })
}

impl Session<'_> {
    /// Bump the persisted case counter and return the new case number.
    ///
    /// Must run inside a write session; the counter never goes backwards,
    /// so numbers are not reused after a delete.
    fn next_case_number(&self) -> DbResult<String> {
        self.conn()
            .execute("UPDATE case_counter SET value = value + 1 WHERE id = 1", [])?;
        let value: u64 = self.conn().query_row(
            "SELECT value FROM case_counter WHERE id = 1",
            [],
            |row| row.get(0),
        )?;
        Ok(format_case_number(value))
    }

    /// Insert a new patient with a freshly allocated case number.
    ///
    /// Timestamps come from the schema defaults (`datetime('now')`).
    pub fn create_patient(&self, fields: &PatientFields) -> DbResult<Patient> {
        let case_no = self.next_case_number()?;

        let patient = self.conn().query_row(
            &format!(
                r#"
                INSERT INTO patients (
                    case_no, first_name, middle_name, last_name, gender, age,
                    contact_no, address, date_of_birth
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                RETURNING {}
                "#,
                PATIENT_COLUMNS
            ),
            params![
                case_no,
                fields.first_name,
                fields.middle_name,
                fields.last_name,
                fields.gender,
                fields.age,
                fields.contact_no,
                fields.address,
                fields.date_of_birth,
            ],
            patient_from_row,
        )?;
        tracing::debug!(id = patient.id, case_no = %patient.case_no, "inserted patient");
        Ok(patient)
    }

    /// Replace every editable field of a patient.
    ///
    /// Returns `false` if no patient has this ID.
    pub fn update_patient(&self, id: i64, fields: &PatientFields) -> DbResult<bool> {
        let rows_affected = self.conn().execute(
            r#"
            UPDATE patients SET
                first_name = ?2,
                middle_name = ?3,
                last_name = ?4,
                gender = ?5,
                age = ?6,
                contact_no = ?7,
                address = ?8,
                date_of_birth = ?9,
                updated_at = datetime('now')
            WHERE id = ?1
            "#,
            params![
                id,
                fields.first_name,
                fields.middle_name,
                fields.last_name,
                fields.gender,
                fields.age,
                fields.contact_no,
                fields.address,
                fields.date_of_birth,
            ],
        )?;
        Ok(rows_affected > 0)
    }

    /// Get a patient by ID.
    pub fn get_patient(&self, id: i64) -> DbResult<Option<Patient>> {
        self.conn()
            .query_row(
                &format!("SELECT {} FROM patients WHERE id = ?", PATIENT_COLUMNS),
                [id],
                patient_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List all patients in insertion order.
    pub fn list_patients(&self) -> DbResult<Vec<Patient>> {
        let mut stmt = self
            .conn()
            .prepare(&format!("SELECT {} FROM patients ORDER BY id", PATIENT_COLUMNS))?;
        let rows = stmt.query_map([], patient_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Number of stored patients.
    pub fn count_patients(&self) -> DbResult<u64> {
        let count: u64 = self
            .conn()
            .query_row("SELECT COUNT(*) FROM patients", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Delete a patient and, through the foreign keys, its records,
    /// prescriptions and appointments.
    pub fn delete_patient(&self, id: i64) -> DbResult<bool> {
        let rows_affected = self
            .conn()
            .execute("DELETE FROM patients WHERE id = ?", [id])?;
        if rows_affected > 0 {
            tracing::debug!(id, "deleted patient");
        }
        Ok(rows_affected > 0)
    }

    /// Load a patient together with everything charted against them.
    pub fn patient_detail(&self, id: i64) -> DbResult<Option<PatientDetail>> {
        let Some(patient) = self.get_patient(id)? else {
            return Ok(None);
        };

        Ok(Some(PatientDetail {
            medical_records: self.list_medical_records_for_patient(id)?,
            prescriptions: self.list_prescriptions_for_patient(id)?,
            appointments: self.list_appointments_for_patient(id)?,
            patient,
        }))
    }
}
