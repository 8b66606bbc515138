use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};

use crate::app_state::AppState;
use crate::i18n::{SupportedLanguage, Translator};

/// Extractor for getting the request's translator in handlers
pub struct I18n(pub Translator);

impl FromRequestParts<AppState> for I18n {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Set by the language middleware from the session
        let language = parts
            .extensions
            .get::<SupportedLanguage>()
            .copied()
            .unwrap_or_default();

        Ok(I18n(state.translations.translator(language)))
    }
}
