use axum::{http::header, response::IntoResponse};

/// Nav toggle and lazy-image loader, compiled into the binary.
pub const MAIN_JS: &str = include_str!("../../assets/main.js");

/// GET /assets/js/main.js
pub async fn main_js_handler() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        MAIN_JS,
    )
}
