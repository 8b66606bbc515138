use askama::Template;
use axum::{
    extract::{rejection::FormRejection, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};

use crate::app_state::AppState;
use crate::db::{NewPatient, Patient};
use crate::error::{AppError, AppResult};
use crate::i18n::{I18n, Translator};
use crate::modules::{AppInfo, HtmlTemplate};
use crate::reports::ReportSummary;
use crate::session::CurrentUser;

// Placeholder counters; there is no visit or task tracking behind them
const TODAY_VISITS: u32 = 3;
const PENDING_REMINDERS: u32 = 5;
const COMPLETED_TASKS: u32 = 12;

pub const SYNC_STATUS: &str = "Connected";

#[derive(Template)]
#[template(path = "asha/dashboard.html")]
struct DashboardTemplate {
    t: Translator,
    user: CurrentUser,
    greeting: String,
    total_patients: usize,
    today_visits: u32,
    pending_reminders: u32,
    completed_tasks: u32,
}

#[derive(Template)]
#[template(path = "asha/patients.html")]
pub(crate) struct PatientsTemplate {
    pub(crate) t: Translator,
    pub(crate) user: CurrentUser,
    pub(crate) patients: Vec<Patient>,
}

#[derive(Template)]
#[template(path = "asha/register_patient.html")]
struct RegisterPatientTemplate {
    t: Translator,
    user: CurrentUser,
}

#[derive(Template)]
#[template(path = "asha/reminders.html")]
struct RemindersTemplate {
    t: Translator,
    user: CurrentUser,
}

#[derive(Template)]
#[template(path = "asha/reports.html")]
struct ReportsTemplate {
    t: Translator,
    user: CurrentUser,
    data: ReportSummary,
}

#[derive(Template)]
#[template(path = "asha/profile.html")]
struct ProfileTemplate {
    t: Translator,
    user: CurrentUser,
    language_name: String,
    sync_status: &'static str,
    app_version: &'static str,
}

#[derive(Template)]
#[template(path = "asha/about.html")]
struct AboutTemplate {
    t: Translator,
    user: CurrentUser,
    app: AppInfo,
}

pub async fn dashboard(
    State(state): State<AppState>,
    user: CurrentUser,
    I18n(t): I18n,
) -> Response {
    if user.is_supervisor() {
        return Redirect::to("/phc_dashboard").into_response();
    }

    let greeting = t.format("welcome_user", &[user.name.as_str()]);
    HtmlTemplate(DashboardTemplate {
        greeting,
        total_patients: state.store.patient_count().await,
        today_visits: TODAY_VISITS,
        pending_reminders: PENDING_REMINDERS,
        completed_tasks: COMPLETED_TASKS,
        t,
        user,
    })
    .into_response()
}

pub async fn patients(
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

pub async fn register_patient_form(user: CurrentUser, I18n(t): I18n) -> impl IntoResponse {
    HtmlTemplate(RegisterPatientTemplate { t, user })
}

/// Any missing field rejects the whole form; values are stored as given
pub async fn register_patient(
    State(state): State<AppState>,
    form: Result<Form<NewPatient>, FormRejection>,
) -> AppResult<Redirect> {
    let Form(new_patient) = form.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    state.store.register_patient(new_patient).await;
    Ok(Redirect::to("/patients"))
}

pub async fn reminders(user: CurrentUser, I18n(t): I18n) -> Response {
    if user.is_supervisor() {
        return Redirect::to("/phc_dashboard").into_response();
    }
    HtmlTemplate(RemindersTemplate { t, user }).into_response()
}

/// Counts are recomputed from the store on every request
pub async fn reports(
    State(state): State<AppState>,
    user: CurrentUser,
    I18n(t): I18n,
) -> impl IntoResponse {
    let data = ReportSummary::from_patients(&state.store.patients().await);
    HtmlTemplate(ReportsTemplate { t, user, data })
}

pub async fn profile(user: CurrentUser, I18n(t): I18n) -> impl IntoResponse {
    let language_name = t.get(t.language().key());
    HtmlTemplate(ProfileTemplate {
        t,
        user,
        language_name,
        sync_status: SYNC_STATUS,
        app_version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn about(user: CurrentUser, I18n(t): I18n) -> impl IntoResponse {
    HtmlTemplate(AboutTemplate {
        t,
        user,
        app: AppInfo {
            name: "ASHA EHR",
            version: env!("CARGO_PKG_VERSION"),
            description:
                "This app helps ASHA workers manage patients, reminders, and reports efficiently.",
        },
    })
}
