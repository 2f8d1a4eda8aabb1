//! Appointment database operations.

use chrono::NaiveDateTime;
use rusqlite::{params, Row};

use super::{DbError, DbResult, Session};
use crate::models::{Appointment, AppointmentStatus, NewAppointment};

impl Session<'_> {
    /// Insert an appointment.
    pub fn insert_appointment(&self, appointment: &NewAppointment) -> DbResult<Appointment> {
        self.conn().execute(
            r#"
            INSERT INTO appointments (patient_id, doctor_id, scheduled_at, reason, status)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                appointment.patient_id,
                appointment.doctor_id,
                appointment.scheduled_at,
                appointment.reason,
                appointment.status.as_str(),
            ],
        )?;

        Ok(Appointment {
            id: self.conn().last_insert_rowid(),
            patient_id: appointment.patient_id,
            doctor_id: appointment.doctor_id,
            scheduled_at: appointment.scheduled_at,
            reason: appointment.reason.clone(),
            status: appointment.status,
        })
    }

    /// List every appointment.
    pub fn list_appointments(&self) -> DbResult<Vec<Appointment>> {
        self.query_appointments(
            r#"
            SELECT id, patient_id, doctor_id, scheduled_at, reason, status
            FROM appointments
            ORDER BY id
            "#,
            None,
        )
    }

    /// List the appointments of one patient.
    pub fn list_appointments_for_patient(&self, patient_id: i64) -> DbResult<Vec<Appointment>> {
        self.query_appointments(
            r#"
            SELECT id, patient_id, doctor_id, scheduled_at, reason, status
            FROM appointments
            WHERE patient_id = ?
            ORDER BY id
            "#,
            Some(patient_id),
        )
    }

    fn query_appointments(&self, sql: &str, patient_id: Option<i64>) -> DbResult<Vec<Appointment>> {
        let mut stmt = self.conn().prepare(sql)?;
        let rows = match patient_id {
            Some(id) => stmt
                .query_map([id], appointment_row)?
                .collect::<Result<Vec<_>, _>>()?,
            None => stmt
                .query_map([], appointment_row)?
                .collect::<Result<Vec<_>, _>>()?,
        };

        rows.into_iter().map(Appointment::try_from).collect()
    }
}

fn appointment_row(row: &Row<'_>) -> rusqlite::Result<AppointmentRow> {
    Ok(AppointmentRow {
        id: row.get(0)?,
        patient_id: row.get(1)?,
        doctor_id: row.get(2)?,
        scheduled_at: row.get(3)?,
        reason: row.get(4)?,
        status: row.get(5)?,
    })
}

/// Intermediate row struct for database mapping.
struct AppointmentRow {
    id: i64,
    patient_id: i64,
    doctor_id: Option<i64>,
    scheduled_at: NaiveDateTime,
    reason: Option<String>,
    status: String,
}

impl TryFrom<AppointmentRow> for Appointment {
    type Error = DbError;

    fn try_from(row: AppointmentRow) -> Result<Self, Self::Error> {
        let status = AppointmentStatus::parse(&row.status).ok_or_else(|| {
            DbError::Constraint(format!("Unknown appointment status: {}", row.status))
        })?;

        Ok(Appointment {
            id: row.id,
            patient_id: row.patient_id,
            doctor_id: row.doctor_id,
            scheduled_at: row.scheduled_at,
            reason: row.reason,
            status,
        })
    }
}
