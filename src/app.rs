use axum::{middleware, routing::get, Json, Router};
use serde_json::json;
use tower_http::services::ServeDir;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::{
    app_state::AppState,
    error::AppError,
    middleware::{language_middleware, observability_middleware, require_auth, require_supervisor},
    modules::{
        asha::routes::asha_routes,
        auth::routes::{public_routes, session_routes},
        i18n::routes::i18n_routes,
        phc::routes::phc_routes,
        reports::routes::export_routes,
    },
};

pub fn create_router(state: AppState) -> Router {
    let session_layer =
        SessionManagerLayer::new(MemoryStore::default()).with_secure(state.env.is_production());

    let static_dir = state.env.app.static_dir.clone();

    Router::new()
        .merge(public_routes())
        .merge(protected_routes())
        .route("/health", get(health_check))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .layer(middleware::from_fn(language_middleware))
        .layer(session_layer)
        .layer(middleware::from_fn(observability_middleware))
        .with_state(state)
}

/// Everything behind login. The auth guard runs before the supervisor guard.
fn protected_routes() -> Router<AppState> {
    let supervisor = phc_routes().route_layer(middleware::from_fn(require_supervisor));

    Router::new()
        .merge(session_routes())
        .merge(asha_routes())
        .merge(export_routes())
        .merge(i18n_routes())
        .merge(supervisor)
        .route_layer(middleware::from_fn(require_auth))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn not_found(uri: axum::http::Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
