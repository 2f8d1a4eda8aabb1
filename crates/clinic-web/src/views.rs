//! HTML rendering.

use axum::response::Html;
use clinic_core::{Doctor, Patient};
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::WebError;

/// Templates compiled into the binary, as (name, source).
const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("dashboard.html", include_str!("../templates/dashboard.html")),
    ("patient_form.html", include_str!("../templates/patient_form.html")),
    ("confirm_delete.html", include_str!("../templates/confirm_delete.html")),
    ("patient_details.html", include_str!("../templates/patient_details.html")),
    ("doctors.html", include_str!("../templates/doctors.html")),
    ("records.html", include_str!("../templates/records.html")),
    ("prescriptions.html", include_str!("../templates/prescriptions.html")),
    ("appointments.html", include_str!("../templates/appointments.html")),
];

/// Page renderer. `.html` templates are auto-escaped.
pub struct Views {
    tera: Tera,
}

impl Views {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())?;
        Ok(Self { tera })
    }

    pub fn render(&self, template: &str, context: &Context) -> Result<Html<String>, WebError> {
        Ok(Html(self.tera.render(template, context)?))
    }
}

/// A patient plus the display name templates show.
#[derive(Debug, Serialize)]
pub struct PatientRow<'a> {
    #[serde(flatten)]
    pub patient: &'a Patient,
    pub full_name: String,
}

impl<'a> From<&'a Patient> for PatientRow<'a> {
    fn from(patient: &'a Patient) -> Self {
        Self {
            full_name: patient.full_name(),
            patient,
        }
    }
}

/// A doctor plus the display name templates show.
#[derive(Debug, Serialize)]
pub struct DoctorRow<'a> {
    #[serde(flatten)]
    pub doctor: &'a Doctor,
    pub display_name: String,
}

impl<'a> From<&'a Doctor> for DoctorRow<'a> {
    fn from(doctor: &'a Doctor) -> Self {
        Self {
            display_name: doctor.display_name(),
            doctor,
        }
    }
}
