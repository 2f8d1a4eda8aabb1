//! Clinic Records Web
//!
//! Server-rendered HTML front end over [`clinic_core`].
//!
//! | Route | Method | Page |
//! |---|---|---|
//! | `/` | GET | patient dashboard |
//! | `/add` | GET, POST | new patient form / create |
//! | `/edit/{id}` | GET, POST | edit form / update all fields |
//! | `/delete/{id}` | GET, POST | confirmation page / delete |
//! | `/patient/{id}` | GET | patient chart |
//! | `/doctors`, `/records`, `/prescriptions`, `/appointments` | GET | tables |
//!
//! Successful writes answer `303 See Other` to `/` and leave a one-shot
//! flash message.

pub mod config;
pub mod error;
pub mod flash;
pub mod forms;
pub mod handlers;
pub mod state;
pub mod views;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

pub use crate::config::{load_config, WebConfig};
pub use error::WebError;
pub use state::AppState;

use handlers::{lists, patients};

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(patients::dashboard))
        .route("/add", get(patients::add_form).post(patients::create_patient))
        .route(
            "/edit/:id",
            get(patients::edit_form).post(patients::update_patient),
        )
        .route(
            "/delete/:id",
            get(patients::confirm_delete).post(patients::delete_patient),
        )
        .route("/patient/:id", get(patients::patient_details))
        .route("/doctors", get(lists::doctors))
        .route("/records", get(lists::records))
        .route("/prescriptions", get(lists::prescriptions))
        .route("/appointments", get(lists::appointments))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
