use axum::{routing::get, Router};

use super::handlers::{
    about, dashboard, patients, profile, register_patient, register_patient_form, reminders,
    reports,
};
use crate::app_state::AppState;

/// Worker-facing pages; supervisors may reach most of them too
pub fn asha_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/patients", get(patients))
        .route(
            "/register_patient",
            get(register_patient_form).post(register_patient),
        )
        .route("/reminders", get(reminders))
        .route("/reports", get(reports))
        .route("/profile", get(profile))
        .route("/about", get(about))
}
