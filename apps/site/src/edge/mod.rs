//! Edge language router.
//!
//! Decides, for a request to the bare site root, which localized root the
//! client is sent to. Every other path passes through untouched. The same
//! decision backs the CDN viewer-request function (`event`) and the origin's
//! own `GET /` handler.

pub mod accept_language;
pub mod event;

pub use accept_language::{parse_accept_language, preferred_language};
pub use event::{handle_viewer_request, EdgeOutcome, HeaderEntry, RedirectResponse, ViewerRequest};

use crate::i18n::Language;

/// Returns the redirect language for a root request, or `None` for any other path.
pub fn redirect_target(path: &str, accept_language: Option<&str>) -> Option<Language> {
    if path != "/" && !path.is_empty() {
        return None;
    }
    Some(preferred_language(accept_language))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_paths_redirect() {
        assert_eq!(redirect_target("/", None), Some(Language::Fr));
        assert_eq!(redirect_target("", None), Some(Language::Fr));
    }

    #[test]
    fn test_non_root_paths_pass_through_regardless_of_header() {
        for path in ["/contact", "/services", "/fr/", "/en/", "//", "/index.html"] {
            assert_eq!(redirect_target(path, Some("en")), None, "path {path}");
            assert_eq!(redirect_target(path, None), None, "path {path}");
        }
    }

    #[test]
    fn test_root_uses_first_preference() {
        assert_eq!(redirect_target("/", Some("en-US,fr")), Some(Language::En));
        assert_eq!(
            redirect_target("/", Some("fr;q=0.9,en;q=0.8")),
            Some(Language::Fr)
        );
    }
}
