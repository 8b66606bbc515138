use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{contact, index, login, logout, phc_login};
use crate::app_state::AppState;

/// Pages reachable without a session
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/login", post(login))
        .route("/phc_login", get(phc_login))
        .route("/contact", get(contact))
}

pub fn session_routes() -> Router<AppState> {
    Router::new().route("/logout", get(logout))
}
