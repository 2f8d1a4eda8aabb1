//! One-shot confirmation messages carried across a redirect.
//!
//! The cookie only ever holds a fixed code, never user input; the text is
//! looked up when the message is shown.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Serialize;

pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    PatientAdded,
    PatientUpdated,
    PatientDeleted,
}

/// What a template needs to show a flash message.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FlashView {
    pub message: &'static str,
    /// CSS-friendly level: success, info or danger
    pub level: &'static str,
}

impl Flash {
    pub fn code(&self) -> &'static str {
        match self {
            Flash::PatientAdded => "patient_added",
            Flash::PatientUpdated => "patient_updated",
            Flash::PatientDeleted => "patient_deleted",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "patient_added" => Some(Flash::PatientAdded),
            "patient_updated" => Some(Flash::PatientUpdated),
            "patient_deleted" => Some(Flash::PatientDeleted),
            _ => None,
        }
    }

    pub fn view(&self) -> FlashView {
        match self {
            Flash::PatientAdded => FlashView {
                message: "Patient added successfully!",
                level: "success",
            },
            Flash::PatientUpdated => FlashView {
                message: "Patient updated successfully!",
                level: "info",
            },
            Flash::PatientDeleted => FlashView {
                message: "Patient deleted successfully!",
                level: "danger",
            },
        }
    }

    /// Queue this message for the next page view.
    pub fn set(self, jar: CookieJar) -> CookieJar {
        jar.add(
            Cookie::build((FLASH_COOKIE, self.code()))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax),
        )
    }

    /// Read and clear the pending message, if any.
    pub fn take(jar: CookieJar) -> (CookieJar, Option<Flash>) {
        let Some(cookie) = jar.get(FLASH_COOKIE) else {
            return (jar, None);
        };
        let flash = Flash::from_code(cookie.value());
        let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
        (jar, flash)
    }
}
