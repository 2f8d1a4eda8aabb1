//! Record store integration tests.

use std::collections::HashSet;
use std::thread;

use chrono::NaiveDate;
use clinic_core::db::{open_pool, Database, Session};
use clinic_core::models::{
    format_case_number, NewAppointment, NewMedicalRecord, NewPrescription, PatientFields,
};
use proptest::prelude::*;

fn fields(first_name: &str) -> PatientFields {
    PatientFields {
        first_name: first_name.to_string(),
        middle_name: None,
        last_name: "Doe".to_string(),
        gender: "F".to_string(),
        age: 30,
        contact_no: "555-0100".to_string(),
        address: "123 St".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
    }
}

fn visit(patient_id: i64, diagnosis: &str) -> NewMedicalRecord {
    NewMedicalRecord {
        patient_id,
        doctor_id: None,
        visit_date: NaiveDate::from_ymd_opt(2024, 2, 14).unwrap(),
        diagnosis: diagnosis.to_string(),
        treatment: None,
        notes: None,
    }
}

fn rx(record_id: i64, medication: &str) -> NewPrescription {
    NewPrescription {
        record_id,
        medication: medication.to_string(),
        dosage: "10 mg".to_string(),
        frequency: "daily".to_string(),
        duration: None,
        instructions: None,
    }
}

#[test]
fn test_create_increments_count_by_one() {
    let mut db = Database::open_in_memory().unwrap();

    for expected in 1..=3u64 {
        let session = db.write_session().unwrap();
        let before = session.count_patients().unwrap();
        let patient = session.create_patient(&fields("Jane")).unwrap();
        session.commit().unwrap();

        let session = db.session().unwrap();
        assert_eq!(session.count_patients().unwrap(), before + 1);
        assert_eq!(patient.case_no, format_case_number(expected));
    }
}

#[test]
fn test_first_patient_gets_p01() {
    let mut db = Database::open_in_memory().unwrap();
    let session = db.write_session().unwrap();
    let patient = session.create_patient(&fields("Jane")).unwrap();
    session.commit().unwrap();

    assert_eq!(patient.case_no, "P-01");
}

#[test]
fn test_case_number_survives_deletes() {
    let mut db = Database::open_in_memory().unwrap();
    let session = db.write_session().unwrap();
    let first = session.create_patient(&fields("A")).unwrap();
    let second = session.create_patient(&fields("B")).unwrap();
    session.delete_patient(first.id).unwrap();
    session.delete_patient(second.id).unwrap();
    let third = session.create_patient(&fields("C")).unwrap();
    session.commit().unwrap();

    assert_eq!(third.case_no, "P-03");
}

#[test]
fn test_counter_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clinic.db");

    {
        let mut db = Database::open(&path).unwrap();
        let session = db.write_session().unwrap();
        let patient = session.create_patient(&fields("A")).unwrap();
        session.delete_patient(patient.id).unwrap();
        session.commit().unwrap();
    }

    let mut db = Database::open(&path).unwrap();
    let session = db.write_session().unwrap();
    assert_eq!(session.create_patient(&fields("B")).unwrap().case_no, "P-02");
}

#[test]
fn test_patient_detail_aggregates_related_rows() {
    let mut db = Database::open_in_memory().unwrap();
    let session = db.write_session().unwrap();
    let jane = session.create_patient(&fields("Jane")).unwrap();
    let john = session.create_patient(&fields("John")).unwrap();

    // Jane: 3 records with 2, 0 and 1 prescriptions
    let r1 = session.insert_medical_record(&visit(jane.id, "Flu")).unwrap();
    let _r2 = session.insert_medical_record(&visit(jane.id, "Checkup")).unwrap();
    let r3 = session.insert_medical_record(&visit(jane.id, "Migraine")).unwrap();
    session.insert_prescription(&rx(r1.id, "Oseltamivir")).unwrap();
    session.insert_prescription(&rx(r1.id, "Paracetamol")).unwrap();
    session.insert_prescription(&rx(r3.id, "Sumatriptan")).unwrap();

    // John's rows must not leak into Jane's chart
    let jr = session.insert_medical_record(&visit(john.id, "Cold")).unwrap();
    session.insert_prescription(&rx(jr.id, "Cetirizine")).unwrap();
    session
        .insert_appointment(&NewAppointment::scheduled(
            john.id,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap().and_hms_opt(9, 0, 0).unwrap(),
        ))
        .unwrap();
    session
        .insert_appointment(&NewAppointment::scheduled(
            jane.id,
            NaiveDate::from_ymd_opt(2024, 6, 2).unwrap().and_hms_opt(14, 30, 0).unwrap(),
        ))
        .unwrap();
    session.commit().unwrap();

    let session = db.session().unwrap();
    let detail = session.patient_detail(jane.id).unwrap().unwrap();
    assert_eq!(detail.patient, jane);
    assert_eq!(detail.medical_records.len(), 3);
    assert_eq!(detail.prescriptions.len(), 3);
    assert!(detail
        .prescriptions
        .iter()
        .all(|p| p.record_id == r1.id || p.record_id == r3.id));
    assert_eq!(detail.appointments.len(), 1);
    assert_eq!(detail.appointments[0].patient_id, jane.id);
}

#[test]
fn test_delete_cascades_to_dependents() {
    let mut db = Database::open_in_memory().unwrap();
    let session = db.write_session().unwrap();
    let jane = session.create_patient(&fields("Jane")).unwrap();
    let record = session.insert_medical_record(&visit(jane.id, "Flu")).unwrap();
    session.insert_prescription(&rx(record.id, "Oseltamivir")).unwrap();
    session
        .insert_appointment(&NewAppointment::scheduled(
            jane.id,
            NaiveDate::from_ymd_opt(2024, 6, 2).unwrap().and_hms_opt(8, 0, 0).unwrap(),
        ))
        .unwrap();

    assert!(session.delete_patient(jane.id).unwrap());
    session.commit().unwrap();

    let session = db.session().unwrap();
    assert!(session.list_medical_records().unwrap().is_empty());
    assert!(session.list_prescriptions().unwrap().is_empty());
    assert!(session.list_appointments().unwrap().is_empty());
}

#[test]
fn test_delete_missing_leaves_store_unchanged() {
    let mut db = Database::open_in_memory().unwrap();
    let session = db.write_session().unwrap();
    session.create_patient(&fields("Jane")).unwrap();
    assert!(!session.delete_patient(999).unwrap());
    session.commit().unwrap();

    let session = db.session().unwrap();
    assert_eq!(session.count_patients().unwrap(), 1);
}

#[test]
fn test_concurrent_creates_get_unique_case_numbers() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 10;

    let dir = tempfile::tempdir().unwrap();
    let pool = open_pool(dir.path().join("clinic.db"), 4).unwrap();

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let pool = pool.clone();
            thread::spawn(move || {
                let mut case_numbers = Vec::new();
                for i in 0..PER_THREAD {
                    let mut conn = pool.get().unwrap();
                    let session = Session::begin_write(&mut conn).unwrap();
                    let patient = session
                        .create_patient(&fields(&format!("T{}-{}", t, i)))
                        .unwrap();
                    session.commit().unwrap();
                    case_numbers.push(patient.case_no);
                }
                case_numbers
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for case_no in handle.join().unwrap() {
            assert!(seen.insert(case_no.clone()), "duplicate case number {}", case_no);
        }
    }

    let total = THREADS * PER_THREAD;
    assert_eq!(seen.len(), total);
    for n in 1..=total as u64 {
        assert!(seen.contains(&format_case_number(n)));
    }

    let conn = pool.get().unwrap();
    let counter: u64 = conn
        .query_row("SELECT value FROM case_counter WHERE id = 1", [], |row| row.get(0))
        .unwrap();
    assert_eq!(counter, total as u64);
    let count: u64 = conn
        .query_row("SELECT COUNT(*) FROM patients", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, total as u64);
}

proptest! {
    #[test]
    fn prop_case_number_format(n in 1u64..100_000) {
        let case_no = format_case_number(n);
        prop_assert!(case_no.starts_with("P-"));

        let digits = &case_no[2..];
        prop_assert!(digits.len() >= 2);
        prop_assert!(digits.chars().all(|c| c.is_ascii_digit()));
        prop_assert_eq!(digits.parse::<u64>().unwrap(), n);
    }
}
