use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};

use crate::app_state::AppState;
use crate::error::AppResult;
use crate::reports::{render_csv, render_pdf, ReportSummary, CSV_FILENAME, PDF_FILENAME};

fn attachment(filename: &str) -> String {
    format!("attachment; filename={}", filename)
}

pub async fn export_csv(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let summary = ReportSummary::from_patients(&state.store.patients().await);
    let body = render_csv(&summary)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (header::CONTENT_DISPOSITION, attachment(CSV_FILENAME)),
        ],
        body,
    ))
}

pub async fn export_pdf(State(state): State<AppState>) -> impl IntoResponse {
    let summary = ReportSummary::from_patients(&state.store.patients().await);

    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, attachment(PDF_FILENAME)),
        ],
        render_pdf(&summary),
    )
}
