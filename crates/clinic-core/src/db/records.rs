//! Medical record database operations.

use rusqlite::{params, Row};

use super::{DbResult, Session};
use crate::models::{MedicalRecord, NewMedicalRecord};

const RECORD_COLUMNS: &str =
    "id, patient_id, doctor_id, visit_date, diagnosis, treatment, notes";

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<MedicalRecord> {
    Ok(MedicalRecord {
        id: row.get(0)?,
        patient_id: row.get(1)?,
        doctor_id: row.get(2)?,
        visit_date: row.get(3)?,
        diagnosis: row.get(4)?,
        treatment: row.get(5)?,
        notes: row.get(6)?,
    })
}

impl Session<'_> {
    /// Insert a medical record. Fails if the patient or doctor is unknown.
    pub fn insert_medical_record(&self, record: &NewMedicalRecord) -> DbResult<MedicalRecord> {
        self.conn().execute(
            r#"
            INSERT INTO medical_records (
                patient_id, doctor_id, visit_date, diagnosis, treatment, notes
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                record.patient_id,
                record.doctor_id,
                record.visit_date,
                record.diagnosis,
                record.treatment,
                record.notes,
            ],
        )?;

        Ok(MedicalRecord {
            id: self.conn().last_insert_rowid(),
            patient_id: record.patient_id,
            doctor_id: record.doctor_id,
            visit_date: record.visit_date,
            diagnosis: record.diagnosis.clone(),
            treatment: record.treatment.clone(),
            notes: record.notes.clone(),
        })
    }

    /// List every medical record.
    pub fn list_medical_records(&self) -> DbResult<Vec<MedicalRecord>> {
        let mut stmt = self.conn().prepare(&format!(
            "SELECT {} FROM medical_records ORDER BY id",
            RECORD_COLUMNS
        ))?;
        let rows = stmt.query_map([], record_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// List the medical records of one patient.
    pub fn list_medical_records_for_patient(&self, patient_id: i64) -> DbResult<Vec<MedicalRecord>> {
        let mut stmt = self.conn().prepare(&format!(
            "SELECT {} FROM medical_records WHERE patient_id = ? ORDER BY id",
            RECORD_COLUMNS
        ))?;
        let rows = stmt.query_map([patient_id], record_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::db::{Database, DbError};
    use crate::models::{NewMedicalRecord, PatientFields};

    fn patient_fields() -> PatientFields {
        PatientFields {
            first_name: "Jane".into(),
            middle_name: None,
            last_name: "Doe".into(),
            gender: "F".into(),
            age: 30,
            contact_no: "555-0100".into(),
            address: "123 St".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        }
    }

    fn record_for(patient_id: i64, diagnosis: &str) -> NewMedicalRecord {
        NewMedicalRecord {
            patient_id,
            doctor_id: None,
            visit_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            diagnosis: diagnosis.into(),
            treatment: Some("Rest".into()),
            notes: None,
        }
    }

    #[test]
    fn test_records_filtered_by_patient() {
        let mut db = Database::open_in_memory().unwrap();
        let session = db.write_session().unwrap();
        let jane = session.create_patient(&patient_fields()).unwrap();
        let other = session.create_patient(&patient_fields()).unwrap();

        session.insert_medical_record(&record_for(jane.id, "Flu")).unwrap();
        session.insert_medical_record(&record_for(other.id, "Cold")).unwrap();
        session.insert_medical_record(&record_for(jane.id, "Sprain")).unwrap();

        let janes = session.list_medical_records_for_patient(jane.id).unwrap();
        assert_eq!(janes.len(), 2);
        assert_eq!(janes[0].diagnosis, "Flu");
        assert_eq!(janes[1].diagnosis, "Sprain");

        assert_eq!(session.list_medical_records().unwrap().len(), 3);
    }

    #[test]
    fn test_record_for_unknown_patient_fails() {
        let mut db = Database::open_in_memory().unwrap();
        let session = db.write_session().unwrap();

        let result = session.insert_medical_record(&record_for(99, "Flu"));
        assert!(matches!(result, Err(DbError::Sqlite(_))));
    }
}
