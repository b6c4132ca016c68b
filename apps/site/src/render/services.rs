use maud::{html, Markup};

use crate::content::PageContent;
use crate::render::text::paragraphs;
use crate::render::RenderContext;

pub fn services(ctx: &RenderContext<'_>, page: &PageContent) -> Markup {
    html! {
        div class="services-page" {
            div class="page-header" {
                h1 { (page.title.get(ctx.lang)) }
            }
            div class="services-content" {
                div class="content" {
                    (paragraphs(page.body.get(ctx.lang)))
                }
            }
        }
    }
}
