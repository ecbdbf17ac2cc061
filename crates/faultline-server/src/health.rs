use axum::http::header;
use axum::response::IntoResponse;

/// Liveness check at the configured health path, marked `no-store`
pub async fn health_handler() -> impl IntoResponse {
    ([(header::CACHE_CONTROL, "no-store")], "ok")
}
