use axum::{extract::Request, middleware::Next, response::Response};
use tower_sessions::Session;

use crate::i18n::SupportedLanguage;
use crate::session;

/// Puts the session's language into request extensions for the `I18n`
/// extractor. Sessions without a language, or that fail to load, get the
/// default.
pub async fn language_middleware(session: Session, mut request: Request, next: Next) -> Response {
    let language = match session::language(&session).await {
        Ok(language) => language.unwrap_or_default(),
        Err(e) => {
            tracing::warn!("Could not read language from session: {}", e);
            SupportedLanguage::default()
        }
    };

    request.extensions_mut().insert(language);

    next.run(request).await
}
