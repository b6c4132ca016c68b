//! Page renderers.
//!
//! Every function here is a pure projection of (language, content snapshot,
//! page copy) into markup. maud escapes every interpolated value, so content
//! and admin settings can never inject markup.

pub mod contact;
pub mod home;
pub mod layout;
pub mod pricing;
pub mod services;
pub mod text;

use maud::Markup;

use crate::content::{Location, PageKind, SiteSettings};
use crate::i18n::{Language, UiStrings};

/// Everything the shared layout needs, resolved once per request.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub lang: Language,
    pub strings: &'static UiStrings,
    pub current: PageKind,
    pub settings: &'a SiteSettings,
    pub locations: &'a [Location],
    /// Year printed in the copyright line.
    pub year: i32,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        lang: Language,
        current: PageKind,
        settings: &'a SiteSettings,
        locations: &'a [Location],
        year: i32,
    ) -> Self {
        Self {
            lang,
            strings: lang.strings(),
            current,
            settings,
            locations,
            year,
        }
    }
}

/// Wraps a page fragment in the full document (head, header, footer).
pub fn render_document(ctx: &RenderContext<'_>, title: &str, main: Markup) -> Markup {
    layout::document(ctx, title, main)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::content::defaults::{builtin_locations, builtin_settings};
    use crate::content::{Location, SiteSettings};

    pub fn fixtures() -> (SiteSettings, Vec<Location>) {
        (builtin_settings(), builtin_locations())
    }
}
