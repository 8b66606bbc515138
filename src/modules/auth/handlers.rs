use askama::Template;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use secrecy::{ExposeSecret, SecretBox};
use serde::Deserialize;
use tower_sessions::Session;

use crate::app_state::AppState;
use crate::error::AppResult;
use crate::i18n::{I18n, Translator};
use crate::modules::HtmlTemplate;
use crate::session::{self, CurrentUser};

pub const LOGIN_ERROR: &str = "Invalid User ID or Password";

#[derive(Template)]
#[template(path = "public/login.html")]
struct LoginTemplate {
    t: Translator,
    error: Option<&'static str>,
}

#[derive(Template)]
#[template(path = "public/phc_login.html")]
struct PhcLoginTemplate {
    t: Translator,
}

#[derive(Template)]
#[template(path = "public/contact.html")]
struct ContactTemplate {
    t: Translator,
    info: ContactInfo,
}

struct ContactInfo {
    support_email: &'static str,
    phone: &'static str,
    address: &'static str,
}

/// Missing fields are treated as a failed login rather than a bad request
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    user_id: Option<String>,
    password: Option<SecretBox<String>>,
}

/// Landing page: logged-in users go to their dashboard, others see the login form
pub async fn index(session: Session, I18n(t): I18n) -> AppResult<Response> {
    if let Some(user) = session::current_user(&session).await? {
        return Ok(Redirect::to(user.home()).into_response());
    }
    Ok(HtmlTemplate(LoginTemplate { t, error: None }).into_response())
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    I18n(t): I18n,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    let user = match (form.user_id.as_deref(), form.password.as_ref()) {
        (Some(user_id), Some(password)) => {
            state.store.authenticate(user_id, password.expose_secret())
        }
        _ => None,
    };

    let Some(user) = user else {
        tracing::info!(user_id = ?form.user_id, "Login failed");
        return Ok(HtmlTemplate(LoginTemplate {
            t,
            error: Some(LOGIN_ERROR),
        })
        .into_response());
    };

    let current = CurrentUser::from(user);
    let home = current.home();
    tracing::info!(user_id = %current.user_id, role = %current.role, "Login succeeded");
    session::sign_in(&session, current).await?;

    Ok(Redirect::to(home).into_response())
}

pub async fn phc_login(I18n(t): I18n) -> impl IntoResponse {
    HtmlTemplate(PhcLoginTemplate { t })
}

pub async fn logout(session: Session, user: CurrentUser) -> AppResult<Redirect> {
    session::sign_out(&session).await?;
    tracing::info!(user_id = %user.user_id, "Logged out");
    Ok(Redirect::to("/"))
}

pub async fn contact(I18n(t): I18n) -> impl IntoResponse {
    HtmlTemplate(ContactTemplate {
        t,
        info: ContactInfo {
            support_email: "support@example.com",
            phone: "+91 9876543210",
            address: "123 Main Street, City, State, India",
        },
    })
}
