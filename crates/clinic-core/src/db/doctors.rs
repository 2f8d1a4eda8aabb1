//! Doctor database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{DbResult, Session};
use crate::models::{Doctor, NewDoctor};

fn doctor_from_row(row: &Row<'_>) -> rusqlite::Result<Doctor> {
    Ok(Doctor {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        specialization: row.get(3)?,
        contact_no: row.get(4)?,
        email: row.get(5)?,
    })
}

impl Session<'_> {
    /// Insert a doctor.
    pub fn insert_doctor(&self, doctor: &NewDoctor) -> DbResult<Doctor> {
        self.conn().execute(
            r#"
            INSERT INTO doctors (first_name, last_name, specialization, contact_no, email)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                doctor.first_name,
                doctor.last_name,
                doctor.specialization,
                doctor.contact_no,
                doctor.email,
            ],
        )?;

        Ok(Doctor {
            id: self.conn().last_insert_rowid(),
            first_name: doctor.first_name.clone(),
            last_name: doctor.last_name.clone(),
            specialization: doctor.specialization.clone(),
            contact_no: doctor.contact_no.clone(),
            email: doctor.email.clone(),
        })
    }

    /// Get a doctor by ID.
    pub fn get_doctor(&self, id: i64) -> DbResult<Option<Doctor>> {
        self.conn()
            .query_row(
                r#"
                SELECT id, first_name, last_name, specialization, contact_no, email
                FROM doctors
                WHERE id = ?
                "#,
                [id],
                doctor_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List all doctors.
    pub fn list_doctors(&self) -> DbResult<Vec<Doctor>> {
        let mut stmt = self.conn().prepare(
            r#"
            SELECT id, first_name, last_name, specialization, contact_no, email
            FROM doctors
            ORDER BY id
            "#,
        )?;
        let rows = stmt.query_map([], doctor_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
