use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{html, Markup, DOCTYPE};
use thiserror::Error;

use crate::content::ContentError;
use crate::i18n::Language;

/// Application-level error type.
/// Implements `IntoResponse` so page handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Content(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let content = match &self {
            AppError::NotFound(msg) => {
                tracing::debug!("Not found: {msg}");
                not_found_content()
            }
            AppError::Content(e) => {
                tracing::error!("Content error: {e}");
                html! { p { "Content is temporarily unavailable" } }
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                html! { p { "An internal server error occurred" } }
            }
        };

        (status, error_page(status, content)).into_response()
    }
}

/// The request carries no usable language, so both are shown.
fn not_found_content() -> Markup {
    html! {
        @for lang in Language::ALL {
            p lang=(lang.code()) {
                (lang.strings().not_found) ". "
                a href=(lang.root_path()) { (lang.strings().nav_home) }
            }
        }
    }
}

fn error_page(status: StatusCode, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (status.as_u16()) }
            }
            body {
                main class="error-page" {
                    h1 { (status.as_u16()) }
                    (content)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Content(ContentError::NoLocations).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    async fn body_text(error: AppError) -> String {
        let response = error.into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_page_uses_both_string_tables() {
        let body = body_text(AppError::NotFound("/de/".into())).await;
        assert!(body.contains("<h1>404</h1>"));
        assert!(body.contains(r#"<p lang="fr">Page introuvable. <a href="/fr/">Accueil</a></p>"#));
        assert!(body.contains(r#"<p lang="en">Page not found. <a href="/en/">Home</a></p>"#));
        assert!(!body.contains("/de/"));
    }

    #[tokio::test]
    async fn test_response_is_html_without_internal_detail() {
        let response = AppError::Internal(anyhow::anyhow!("secret path /etc")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("<h1>500</h1>"));
        assert!(!body.contains("secret"));
    }
}
