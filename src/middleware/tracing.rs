use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info_span, Instrument};

/// Wraps each request in an `http_request` span and logs its outcome
pub async fn observability_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start_time = Instant::now();

    // Extract route pattern if available
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let user_agent = request
        .headers()
        .get("user-agent")
        .and_then(|ua| ua.to_str().ok())
        .unwrap_or("")
        .to_string();

    let span = info_span!(
        "http_request",
        method = %method,
        uri = %uri,
        route = %route,
        user_agent = %user_agent,
        request_id = %uuid::Uuid::now_v7(),
    );

    let response = next.run(request).instrument(span.clone()).await;

    let duration = start_time.elapsed();
    let status_code = response.status().as_u16();

    span.in_scope(|| {
        if status_code >= 500 {
            tracing::error!(
                status = status_code,
                elapsed_ms = duration.as_millis() as u64,
                "request failed"
            );
        } else {
            tracing::info!(
                status = status_code,
                elapsed_ms = duration.as_millis() as u64,
                "request completed"
            );
        }
    });

    response
}
