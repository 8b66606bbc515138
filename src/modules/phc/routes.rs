use axum::{routing::get, Router};

use super::handlers::{about_phc, asha_workers, phc_dashboard, phc_patients, unresolved_cases};
use crate::app_state::AppState;

/// Supervisor pages. The caller layers the supervisor guard on top.
pub fn phc_routes() -> Router<AppState> {
    Router::new()
        .route("/phc_dashboard", get(phc_dashboard))
        .route("/asha-workers", get(asha_workers))
        .route("/phc_patients", get(phc_patients))
        .route("/phc_unresolved_cases", get(unresolved_cases))
        .route("/aboutPHC", get(about_phc))
}
