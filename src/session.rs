use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::Redirect,
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::db::{Role, User};
use crate::error::AppResult;
use crate::i18n::SupportedLanguage;

pub const USER_KEY: &str = "user";
pub const LANGUAGE_KEY: &str = "language";

/// Identity stored in the session after a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub user_id: String,
    pub name: String,
    pub role: Role,
}

impl CurrentUser {
    pub fn is_supervisor(&self) -> bool {
        self.role.is_supervisor()
    }

    /// Landing page for this user's role
    pub fn home(&self) -> &'static str {
        if self.is_supervisor() {
            "/phc_dashboard"
        } else {
            "/dashboard"
        }
    }
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id.clone(),
            name: user.name.clone(),
            role: user.role,
        }
    }
}

/// Reads the user placed in request extensions by the auth middleware.
/// Without it the caller is sent to the landing page.
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| Redirect::to("/"))
    }
}

pub async fn current_user(session: &Session) -> AppResult<Option<CurrentUser>> {
    Ok(session.get::<CurrentUser>(USER_KEY).await?)
}

pub async fn language(session: &Session) -> AppResult<Option<SupportedLanguage>> {
    Ok(session.get::<SupportedLanguage>(LANGUAGE_KEY).await?)
}

/// Store the user and keep any language already chosen in this session
pub async fn sign_in(session: &Session, user: CurrentUser) -> AppResult<()> {
    session.insert(USER_KEY, user).await?;
    if language(session).await?.is_none() {
        session
            .insert(LANGUAGE_KEY, SupportedLanguage::default())
            .await?;
    }
    Ok(())
}

pub async fn set_language(session: &Session, language: SupportedLanguage) -> AppResult<()> {
    session.insert(LANGUAGE_KEY, language).await?;
    Ok(())
}

/// Drop every key and the backing record
pub async fn sign_out(session: &Session) -> AppResult<()> {
    session.flush().await?;
    Ok(())
}
