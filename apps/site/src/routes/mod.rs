pub mod assets;
pub mod health;
pub mod pages;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::handle_root))
        .route("/health", get(health::health_handler))
        .route("/assets/js/main.js", get(assets::main_js_handler))
        // Localized pages
        .route("/:lang", get(pages::handle_home))
        .route("/:lang/", get(pages::handle_home))
        .route("/:lang/services", get(pages::handle_services))
        .route("/:lang/tarifs", get(pages::handle_pricing))
        .route("/:lang/pricing", get(pages::handle_pricing))
        .route("/:lang/contact", get(pages::handle_contact))
        .fallback(pages::handle_not_found)
        .with_state(state)
}
