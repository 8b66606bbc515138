pub mod auth;
pub mod language;
pub mod tracing;

pub use auth::{require_auth, require_supervisor, Access, Authenticated, Guard, SupervisorOnly};
pub use language::language_middleware;
pub use self::tracing::observability_middleware;
