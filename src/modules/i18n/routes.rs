use axum::{routing::get, Router};

use super::handlers::set_language;
use crate::app_state::AppState;

pub fn i18n_routes() -> Router<AppState> {
    Router::new().route("/set_language/{code}", get(set_language))
}
