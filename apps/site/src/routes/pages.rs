use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use chrono::Datelike;
use maud::Markup;

use crate::content::PageKind;
use crate::edge::redirect_target;
use crate::errors::AppError;
use crate::i18n::Language;
use crate::render::{self, RenderContext};
use crate::state::AppState;

/// GET /
/// Sends the client to `/fr/` or `/en/` based on its Accept-Language header.
pub async fn handle_root(uri: Uri, headers: HeaderMap) -> Response {
    let accept_language = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());
    let lang = redirect_target(uri.path(), accept_language).unwrap_or_default();
    tracing::debug!(?accept_language, lang = lang.code(), "root redirect");

    (StatusCode::FOUND, [(header::LOCATION, lang.root_path())]).into_response()
}

/// GET /:lang and /:lang/
pub async fn handle_home(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> Result<Markup, AppError> {
    render_page(&state, &lang, PageKind::Home).await
}

/// GET /:lang/services
pub async fn handle_services(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> Result<Markup, AppError> {
    render_page(&state, &lang, PageKind::Services).await
}

/// GET /:lang/tarifs and /:lang/pricing
pub async fn handle_pricing(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> Result<Markup, AppError> {
    render_page(&state, &lang, PageKind::Pricing).await
}

/// GET /:lang/contact
pub async fn handle_contact(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> Result<Markup, AppError> {
    render_page(&state, &lang, PageKind::Contact).await
}

/// Fallback for every unmatched path.
pub async fn handle_not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

async fn render_page(state: &AppState, lang_code: &str, kind: PageKind) -> Result<Markup, AppError> {
    let lang = Language::from_code(lang_code)
        .ok_or_else(|| AppError::NotFound(format!("unknown language '{lang_code}'")))?;

    let content = &state.content;
    let settings = content.settings().await?;
    let locations = content.locations().await?;
    let page = content.page(kind).await?;

    let year = chrono::Local::now().year();
    let ctx = RenderContext::new(lang, kind, &settings, &locations, year);

    let main = match kind {
        PageKind::Home => render::home::home(&ctx, &page),
        PageKind::Services => render::services::services(&ctx, &page),
        PageKind::Pricing => {
            let catalog = if settings.show_pricing {
                content.pricing_catalog().await?
            } else {
                Vec::new()
            };
            render::pricing::pricing(&ctx, &page, &catalog)
        }
        PageKind::Contact => render::contact::contact(&ctx, &page),
    };

    Ok(render::render_document(&ctx, page.title.get(lang), main))
}
