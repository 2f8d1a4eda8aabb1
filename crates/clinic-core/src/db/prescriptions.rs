//! Prescription database operations.

use rusqlite::{params, Row};

use super::{DbResult, Session};
use crate::models::{NewPrescription, Prescription};

fn prescription_from_row(row: &Row<'_>) -> rusqlite::Result<Prescription> {
    Ok(Prescription {
        id: row.get(0)?,
        record_id: row.get(1)?,
        medication: row.get(2)?,
        dosage: row.get(3)?,
        frequency: row.get(4)?,
        duration: row.get(5)?,
        instructions: row.get(6)?,
    })
}

impl Session<'_> {
    /// Insert a prescription against an existing medical record.
    pub fn insert_prescription(&self, prescription: &NewPrescription) -> DbResult<Prescription> {
        self.conn().execute(
            r#"
            INSERT INTO prescriptions (
                record_id, medication, dosage, frequency, duration, instructions
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                prescription.record_id,
                prescription.medication,
                prescription.dosage,
                prescription.frequency,
                prescription.duration,
                prescription.instructions,
            ],
        )?;

        Ok(Prescription {
            id: self.conn().last_insert_rowid(),
            record_id: prescription.record_id,
            medication: prescription.medication.clone(),
            dosage: prescription.dosage.clone(),
            frequency: prescription.frequency.clone(),
            duration: prescription.duration.clone(),
            instructions: prescription.instructions.clone(),
        })
    }

    /// List every prescription.
    pub fn list_prescriptions(&self) -> DbResult<Vec<Prescription>> {
        let mut stmt = self.conn().prepare(
            r#"
            SELECT id, record_id, medication, dosage, frequency, duration, instructions
            FROM prescriptions
            ORDER BY id
            "#,
        )?;
        let rows = stmt.query_map([], prescription_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// List every prescription written against any of a patient's records.
    pub fn list_prescriptions_for_patient(&self, patient_id: i64) -> DbResult<Vec<Prescription>> {
        let mut stmt = self.conn().prepare(
            r#"
            SELECT p.id, p.record_id, p.medication, p.dosage, p.frequency,
                   p.duration, p.instructions
            FROM prescriptions p
            JOIN medical_records r ON r.id = p.record_id
            WHERE r.patient_id = ?
            ORDER BY p.id
            "#,
        )?;
        let rows = stmt.query_map([patient_id], prescription_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
