use maud::{html, Markup};

use crate::content::{Category, PageContent, PageKind, Service};
use crate::render::text::paragraphs;
use crate::render::RenderContext;

/// Pricing page: catalog (when enabled), optional note, then the booking block.
pub fn pricing(ctx: &RenderContext<'_>, page: &PageContent, catalog: &[Category]) -> Markup {
    let t = ctx.strings;
    let note = ctx
        .settings
        .pricing_note
        .as_ref()
        .map(|note| note.get(ctx.lang))
        .filter(|note| !note.trim().is_empty());

    html! {
        div class="pricing-page" {
            h1 { (page.title.get(ctx.lang)) }
            div class="content" {
                (paragraphs(page.body.get(ctx.lang)))
            }

            @if ctx.settings.show_pricing {
                @if catalog.is_empty() {
                    p class="pricing-empty" { (t.pricing_empty) }
                } @else {
                    @for category in catalog {
                        (category_section(category))
                    }
                    @if let Some(note) = note {
                        div class="pricing-notes" {
                            p { (note) }
                        }
                    }
                }
            }

            div class="pricing-contact" {
                h2 { (t.pricing_ready_to_book) }
                p { (t.pricing_contact_prompt) }
                div class="pricing-locations" {
                    @for location in ctx.locations {
                        div class="pricing-location-card" {
                            h3 {
                                i class="fa-solid fa-location-dot" aria-hidden="true" {}
                                " " (location.name.get(ctx.lang))
                            }
                            p {
                                i class="fa-solid fa-phone" aria-hidden="true" {}
                                " "
                                a href=(location.phone_href()) { (location.phone) }
                            }
                            p {
                                i class="fa-brands fa-instagram" aria-hidden="true" {}
                                " "
                                a href=(location.instagram_url()) target="_blank" rel="noopener" { (location.instagram) }
                            }
                        }
                    }
                }
                div class="pricing-contact-link" {
                    a href=(PageKind::Contact.path(ctx.lang)) class="btn btn-primary" { (t.pricing_contact_button) }
                }
            }
        }
    }
}

fn category_section(category: &Category) -> Markup {
    html! {
        div class="pricing-category" id=(category.slug) {
            h2 { (category.name) }
            div class="pricing-services" {
                @for service in &category.services {
                    (service_card(service))
                }
            }
        }
    }
}

fn service_card(service: &Service) -> Markup {
    html! {
        div class="pricing-service-card" {
            div class="pricing-service-info" {
                h3 class="pricing-service-name" { (service.name) }
                @if !service.duration.is_empty() {
                    p class="pricing-service-duration" {
                        i class="fa-solid fa-clock" aria-hidden="true" {}
                        " " (service.duration)
                    }
                }
                @if !service.description.is_empty() {
                    div class="pricing-service-description" {
                        (paragraphs(&service.description))
                    }
                }
            }
            @if !service.price.is_empty() {
                div class="pricing-service-price" { (service.price) }
            }
        }
    }
}
