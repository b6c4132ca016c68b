use maud::{html, Markup};

use crate::content::{PageContent, PageKind};
use crate::interaction::LazyImage;
use crate::render::text::paragraphs;
use crate::render::RenderContext;

pub fn home(ctx: &RenderContext<'_>, page: &PageContent) -> Markup {
    let t = ctx.strings;
    html! {
        div class="hero" {
            @if let Some(src) = &ctx.settings.hero_image {
                (hero_image(ctx, LazyImage::new(src.as_str())))
            }
            div class="hero-content" {
                h1 class="hero-subtitle" { (t.hero_heading) }
                div class="hero-cta" {
                    a href=(PageKind::Services.path(ctx.lang)) class="btn btn-primary" { (t.hero_cta_services) }
                    a href=(PageKind::Contact.path(ctx.lang)) class="btn btn-secondary" { (t.hero_cta_book) }
                }
            }
        }
        div class="homepage" {
            section class="intro" {
                div class="intro-content" {
                    (paragraphs(page.body.get(ctx.lang)))
                }
            }
        }
    }
}

/// Served with a placeholder; the page script swaps in the real source.
fn hero_image(ctx: &RenderContext<'_>, image: LazyImage) -> Markup {
    let class = match image.class() {
        Some(state) => format!("hero-image {state}"),
        None => "hero-image".to_string(),
    };
    html! {
        img class=(class) src=(image.current_src()) data-src=[image.data_src()] alt=(ctx.strings.hero_image_alt);
    }
}
