use askama::Template;
use axum::{extract::State, response::IntoResponse};

use crate::app_state::AppState;
use crate::db::{Patient, Worker};
use crate::i18n::{I18n, Translator};
use crate::modules::asha::handlers::PatientsTemplate;
use crate::modules::{AppInfo, HtmlTemplate};
use crate::reports::SupervisorStats;
use crate::session::CurrentUser;

#[derive(Template)]
#[template(path = "phc/dashboard.html")]
struct PhcDashboardTemplate {
    t: Translator,
    user: CurrentUser,
    stats: SupervisorStats,
}

#[derive(Template)]
#[template(path = "phc/asha_workers.html")]
struct AshaWorkersTemplate {
    t: Translator,
    user: CurrentUser,
    workers: Vec<Worker>,
}

#[derive(Template)]
#[template(path = "phc/unresolved_cases.html")]
struct UnresolvedCasesTemplate {
    t: Translator,
    user: CurrentUser,
    cases: Vec<Patient>,
}

#[derive(Template)]
#[template(path = "phc/about.html")]
struct AboutPhcTemplate {
    t: Translator,
    user: CurrentUser,
    app: AppInfo,
}

pub async fn phc_dashboard(
    State(state): State<AppState>,
    user: CurrentUser,
    I18n(t): I18n,
) -> impl IntoResponse {
    let patients = state.store.patients().await;
    let stats = SupervisorStats::collect(state.store.workers(), &patients);
    HtmlTemplate(PhcDashboardTemplate { t, user, stats })
}

pub async fn asha_workers(
    State(state): State<AppState>,
    user: CurrentUser,
    I18n(t): I18n,
) -> impl IntoResponse {
    HtmlTemplate(AshaWorkersTemplate {
        t,
        user,
        workers: state.store.workers().to_vec(),
    })
}

pub async fn phc_patients(
    State(state): State<AppState>,
    user: CurrentUser,
    I18n(t): I18n,
) -> impl IntoResponse {
    HtmlTemplate(PatientsTemplate {
        t,
        user,
        patients: state.store.patients().await,
    })
}

pub async fn unresolved_cases(
    State(state): State<AppState>,
    user: CurrentUser,
    I18n(t): I18n,
) -> impl IntoResponse {
    HtmlTemplate(UnresolvedCasesTemplate {
        t,
        user,
        cases: state.store.unresolved_cases().await,
    })
}

pub async fn about_phc(user: CurrentUser, I18n(t): I18n) -> impl IntoResponse {
    HtmlTemplate(AboutPhcTemplate {
        t,
        user,
        app: AppInfo {
            name: "ASHA EHR",
            version: env!("CARGO_PKG_VERSION"),
            description: "This PHC module allows supervisors to monitor ASHA workers, patients, and unresolved cases efficiently.",
        },
    })
}
