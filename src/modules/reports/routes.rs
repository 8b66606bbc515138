use axum::{routing::get, Router};

use super::handlers::{export_csv, export_pdf};
use crate::app_state::AppState;

pub fn export_routes() -> Router<AppState> {
    Router::new()
        .route("/export_csv", get(export_csv))
        .route("/export_pdf", get(export_pdf))
}
