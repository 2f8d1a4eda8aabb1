//! Read-only table pages.

use axum::extract::State;
use axum::response::Html;
use tera::Context;

use crate::error::WebError;
use crate::state::AppState;
use crate::views::DoctorRow;

/// `GET /doctors`
pub async fn doctors(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let doctors = state.read(|session| session.list_doctors()).await?;
    let mut context = Context::new();
    let rows: Vec<DoctorRow<'_>> = doctors.iter().map(DoctorRow::from).collect();
    context.insert("doctors", &rows);
    state.views().render("doctors.html", &context)
}

/// `GET /records`
pub async fn records(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let records = state.read(|session| session.list_medical_records()).await?;
    let mut context = Context::new();
    context.insert("records", &records);
    state.views().render("records.html", &context)
}

/// `GET /prescriptions`
pub async fn prescriptions(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let prescriptions = state.read(|session| session.list_prescriptions()).await?;
    let mut context = Context::new();
    context.insert("prescriptions", &prescriptions);
    state.views().render("prescriptions.html", &context)
}

/// `GET /appointments`
pub async fn appointments(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let appointments = state.read(|session| session.list_appointments()).await?;
    let mut context = Context::new();
    context.insert("appointments", &appointments);
    state.views().render("appointments.html", &context)
}
