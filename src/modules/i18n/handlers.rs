use axum::{
    extract::Path,
    http::{header, HeaderMap},
    response::Redirect,
};
use tower_sessions::Session;

use crate::error::AppResult;
use crate::i18n::SupportedLanguage;
use crate::session;

/// Switch the session language and go back to the referring page.
/// Unknown codes leave the session untouched.
pub async fn set_language(
    session: Session,
    Path(code): Path<String>,
    headers: HeaderMap,
) -> AppResult<Redirect> {
    match code.parse::<SupportedLanguage>() {
        Ok(language) => session::set_language(&session, language).await?,
        Err(e) => tracing::debug!("Ignoring language switch: {}", e),
    }

    let back = headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .unwrap_or("/dashboard");

    Ok(Redirect::to(back))
}
