use maud::{html, Markup};

use crate::content::{Location, PageContent};
use crate::render::text::paragraphs;
use crate::render::RenderContext;

pub fn contact(ctx: &RenderContext<'_>, page: &PageContent) -> Markup {
    html! {
        div class="contact-page" {
            h1 { (page.title.get(ctx.lang)) }
            div class="content" {
                (paragraphs(page.body.get(ctx.lang)))
            }
            div class="locations-grid" {
                @for location in ctx.locations {
                    (location_card(ctx, location))
                }
            }
        }
    }
}

fn location_card(ctx: &RenderContext<'_>, location: &Location) -> Markup {
    html! {
        div class="location-card" id=(location.id) {
            h2 class="location-card__title" { (location.name.get(ctx.lang)) }
            div class="location-card__info" {
                div class="location-card__address" {
                    p {
                        i class="fa-solid fa-map-marker-alt" aria-hidden="true" {}
                        " "
                        a href=(location.maps_url) target="_blank" rel="noopener" class="address-link" {
                            (location.address.street) br;
                            (location.address.postal_line()) br;
                            (location.address.country)
                        }
                    }
                }
                div class="location-card__contact" {
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
                    @if let Some(booking_url) = &location.booking_url {
                        p {
                            a href=(booking_url) target="_blank" rel="noopener" class="btn btn-primary" {
                                i class="fa-solid fa-calendar-check" aria-hidden="true" {}
                                " " (ctx.strings.book_online)
                            }
                        }
                    }
                }
            }
        }
    }
}
