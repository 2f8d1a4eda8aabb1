//! Patient CRUD pages.

use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::Form;
use axum_extra::extract::cookie::CookieJar;
use tera::Context;

use crate::error::WebError;
use crate::flash::Flash;
use crate::forms::PatientForm;
use crate::state::AppState;
use crate::views::PatientRow;

/// Where every successful mutation lands.
const DASHBOARD: &str = "/";

/// `GET /`
pub async fn dashboard(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), WebError> {
    let patients = state.read(|session| session.list_patients()).await?;
    let (jar, flash) = Flash::take(jar);

    let mut context = Context::new();
    let rows: Vec<PatientRow<'_>> = patients.iter().map(PatientRow::from).collect();
    context.insert("patients", &rows);
    context.insert("flash", &flash.map(|f| f.view()));
    let page = state.views().render("dashboard.html", &context)?;
    Ok((jar, page))
}

fn form_context(title: &str, action: &str, form: &PatientForm) -> Context {
    let mut context = Context::new();
    context.insert("title", title);
    context.insert("action", action);
    context.insert("form", form);
    context
}

/// `GET /add`
pub async fn add_form(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let context = form_context("Add Patient", "/add", &PatientForm::default());
    state.views().render("patient_form.html", &context)
}

/// `POST /add`
pub async fn create_patient(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<PatientForm>,
) -> Result<(CookieJar, Redirect), WebError> {
    let fields = form.into_fields()?;
    let patient = state
        .write(move |session| session.create_patient(&fields))
        .await?;

    tracing::info!(id = patient.id, case_no = %patient.case_no, "patient added");
    Ok((Flash::PatientAdded.set(jar), Redirect::to(DASHBOARD)))
}

/// `GET /edit/{id}`
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, WebError> {
    let patient = state
        .read(move |session| session.get_patient(id))
        .await?
        .ok_or_else(|| WebError::patient_not_found(id))?;

    let mut context = form_context(
        "Edit Patient",
        &format!("/edit/{}", id),
        &PatientForm::from_patient(&patient),
    );
    context.insert("patient", &patient);
    state.views().render("patient_form.html", &context)
}

/// `POST /edit/{id}`: replaces every editable field.
pub async fn update_patient(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    jar: CookieJar,
    Form(form): Form<PatientForm>,
) -> Result<(CookieJar, Redirect), WebError> {
    let fields = form.into_fields()?;
    let updated = state
        .write(move |session| session.update_patient(id, &fields))
        .await?;
    if !updated {
        return Err(WebError::patient_not_found(id));
    }

    tracing::info!(id, "patient updated");
    Ok((Flash::PatientUpdated.set(jar), Redirect::to(DASHBOARD)))
}

/// `GET /delete/{id}`: confirmation page only, never deletes.
pub async fn confirm_delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, WebError> {
    let patient = state
        .read(move |session| session.get_patient(id))
        .await?
        .ok_or_else(|| WebError::patient_not_found(id))?;

    let mut context = Context::new();
    context.insert("patient", &PatientRow::from(&patient));
    state.views().render("confirm_delete.html", &context)
}

/// `POST /delete/{id}`
pub async fn delete_patient(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    jar: CookieJar,
) -> Result<(CookieJar, Redirect), WebError> {
    let deleted = state
        .write(move |session| session.delete_patient(id))
        .await?;
    if !deleted {
        return Err(WebError::patient_not_found(id));
    }

    tracing::info!(id, "patient deleted");
    Ok((Flash::PatientDeleted.set(jar), Redirect::to(DASHBOARD)))
}

/// `GET /patient/{id}`
pub async fn patient_details(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, WebError> {
    let detail = state
        .read(move |session| session.patient_detail(id))
        .await?
        .ok_or_else(|| WebError::patient_not_found(id))?;

    let mut context = Context::new();
    context.insert("patient", &PatientRow::from(&detail.patient));
    context.insert("medical_records", &detail.medical_records);
    context.insert("prescriptions", &detail.prescriptions);
    context.insert("appointments", &detail.appointments);
    state.views().render("patient_details.html", &context)
}
