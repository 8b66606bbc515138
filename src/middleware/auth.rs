use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::error::AppResult;
use crate::session::{self, CurrentUser};

/// Outcome of a guard check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(&'static str),
}

/// Route precondition evaluated against the session's user
pub trait Guard {
    fn check(&self, user: Option<&CurrentUser>) -> Access;
}

/// Any logged-in user; anonymous callers go to the landing page
pub struct Authenticated;

impl Guard for Authenticated {
    fn check(&self, user: Option<&CurrentUser>) -> Access {
        match user {
            Some(_) => Access::Allow,
            None => Access::Redirect("/"),
        }
    }
}

/// PHC supervisors only; everyone else goes to the worker dashboard
pub struct SupervisorOnly;

impl Guard for SupervisorOnly {
    fn check(&self, user: Option<&CurrentUser>) -> Access {
        match user {
            Some(user) if user.is_supervisor() => Access::Allow,
            _ => Access::Redirect("/dashboard"),
        }
    }
}

/// Loads the session user, applies [`Authenticated`] and exposes the user to
/// inner layers and handlers through request extensions.
pub async fn require_auth(
    session: Session,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let user = session::current_user(&session).await?;

    match Authenticated.check(user.as_ref()) {
        Access::Allow => {
            if let Some(user) = user {
                request.extensions_mut().insert(user);
            }
            Ok(next.run(request).await)
        }
        Access::Redirect(to) => {
            tracing::debug!(uri = %request.uri(), "Anonymous request redirected");
            Ok(Redirect::to(to).into_response())
        }
    }
}

/// Applies [`SupervisorOnly`]. Must sit inside [`require_auth`].
pub async fn require_supervisor(request: Request, next: Next) -> Response {
    let user = request.extensions().get::<CurrentUser>();

    match SupervisorOnly.check(user) {
        Access::Allow => next.run(request).await,
        Access::Redirect(to) => Redirect::to(to).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Role;

    fn user(role: Role) -> CurrentUser {
        CurrentUser {
            user_id: "u".to_string(),
            name: "U".to_string(),
            role,
        }
    }

    #[test]
    fn authenticated_guard() {
        assert_eq!(Authenticated.check(None), Access::Redirect("/"));
        assert_eq!(Authenticated.check(Some(&user(Role::AshaWorker))), Access::Allow);
        assert_eq!(Authenticated.check(Some(&user(Role::PhcSupervisor))), Access::Allow);
    }

    #[test]
    fn supervisor_guard() {
        assert_eq!(SupervisorOnly.check(None), Access::Redirect("/dashboard"));
        assert_eq!(
            SupervisorOnly.check(Some(&user(Role::AshaWorker))),
            Access::Redirect("/dashboard")
        );
        assert_eq!(SupervisorOnly.check(Some(&user(Role::PhcSupervisor))), Access::Allow);
    }
}
