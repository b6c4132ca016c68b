use maud::{html, Markup, DOCTYPE};

use crate::content::{Location, PageKind};
use crate::interaction::nav::NavState;
use crate::interaction::ROOT_MARGIN;
use crate::render::RenderContext;

const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";
pub const SCRIPT_PATH: &str = "/assets/js/main.js";

pub fn document(ctx: &RenderContext<'_>, title: &str, main: Markup) -> Markup {
    let other = ctx.lang.other();
    html! {
        (DOCTYPE)
        html lang=(ctx.lang.code()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (ctx.settings.site_name) }
                link rel="alternate" hreflang=(other.code()) href=(ctx.current.path(other));
                link rel="stylesheet" href=(FONT_AWESOME_CSS);
                script src=(SCRIPT_PATH) defer {}
            }
            body data-lazy-margin=(ROOT_MARGIN) {
                (header(ctx))
                main class="main" {
                    div class="container" { (main) }
                }
                (footer(ctx))
            }
        }
    }
}

fn nav_links(ctx: &RenderContext<'_>) -> Markup {
    let t = ctx.strings;
    let items = [
        (PageKind::Home, t.nav_home),
        (PageKind::Services, t.nav_services),
        (PageKind::Pricing, t.nav_pricing),
        (PageKind::Contact, t.nav_contact),
    ];
    html! {
        ul {
            @for (kind, label) in items {
                li {
                    @if kind == ctx.current {
                        a href=(kind.path(ctx.lang)) aria-current="page" { (label) }
                    } @else {
                        a href=(kind.path(ctx.lang)) { (label) }
                    }
                }
            }
        }
    }
}

fn header(ctx: &RenderContext<'_>) -> Markup {
    let t = ctx.strings;
    let nav = NavState::default();
    let other = ctx.lang.other();
    html! {
        header class="site-header" {
            div class="header-main" {
                div class="container" {
                    nav class=(nav.nav_class()) aria-label=(t.nav_label) {
                        (nav_links(ctx))
                    }
                    div class="header-actions" {
                        ul class="language-switcher" {
                            li {
                                a href=(ctx.current.path(other)) hreflang=(other.code()) lang=(other.code()) {
                                    (t.switch_language)
                                }
                            }
                        }
                        button class=(nav.toggle_class()) aria-label=(t.menu_label) aria-expanded=(nav.aria_expanded()) {
                            i class={ "fa-solid " (nav.icon_class()) } aria-hidden="true" {}
                        }
                    }
                }
            }
            div class="header-locations" {
                div class="container" {
                    div class="locations-bar" {
                        @for location in ctx.locations {
                            (location_quick_info(ctx, location))
                        }
                    }
                }
            }
        }
    }
}

fn location_quick_info(ctx: &RenderContext<'_>, location: &Location) -> Markup {
    html! {
        div class="location-quick-info" {
            a href=(location.maps_url) target="_blank" rel="noopener noreferrer" class="location-name" {
                i class="fa-solid fa-location-dot" aria-hidden="true" {}
                " " (location.name.get(ctx.lang))
            }
            a href=(location.phone_href()) class="phone-link" {
                i class="fa-solid fa-phone" aria-hidden="true" {}
                " " (location.phone)
            }
            a href=(location.instagram_url()) class="instagram-link" target="_blank" rel="noopener" {
                i class="fa-brands fa-instagram" aria-hidden="true" {}
                " " (location.instagram)
            }
        }
    }
}

fn footer(ctx: &RenderContext<'_>) -> Markup {
    let t = ctx.strings;
    html! {
        footer class="site-footer" {
            div class="container" {
                div class="footer-content" {
                    div class="footer-locations" {
                        h3 { (t.footer_locations) }
                        div class="locations-grid" {
                            @for location in ctx.locations {
                                (footer_location(ctx, location))
                            }
                        }
                    }
                    div class="footer-links" {
                        h3 { (t.footer_navigation) }
                        nav { (nav_links(ctx)) }
                    }
                    div class="footer-social" {
                        h3 { (t.footer_follow_us) }
                        div class="social-links" {
                            a href={ "https://www.instagram.com/" (ctx.settings.instagram) "/" }
                                class="social-link-item" target="_blank" rel="noopener" {
                                i class="fa-brands fa-instagram" aria-hidden="true" {}
                                span { "@" (ctx.settings.instagram) }
                            }
                        }
                    }
                }
                div class="footer-bottom" {
                    p class="copyright" {
                        "© " (ctx.year) " " (ctx.settings.site_name) ". " (t.all_rights_reserved)
                    }
                }
            }
        }
    }
}

fn footer_location(ctx: &RenderContext<'_>, location: &Location) -> Markup {
    let t = ctx.strings;
    html! {
        div class="footer-location" {
            h4 {
                i class="fa-solid fa-location-dot" aria-hidden="true" {}
                " " (location.name.get(ctx.lang))
            }
            div class="location-details" {
                p class="address" {
                    i class="fa-solid fa-map-marker-alt" aria-hidden="true" {}
                    " " (location.address.street) br;
                    (location.address.postal_line()) br;
                    (location.address.country)
                }
                p class="contact-info" {
                    a href=(location.phone_href()) {
                        i class="fa-solid fa-phone" aria-hidden="true" {}
                        " " (location.phone)
                    }
                }
                p class="social-link" {
                    a href=(location.instagram_url()) target="_blank" rel="noopener" {
                        i class="fa-brands fa-instagram" aria-hidden="true" {}
                        " " (location.instagram)
                    }
                }
                div class="hours-summary" {
                    p class="hours-title" {
                        i class="fa-solid fa-clock" aria-hidden="true" {}
                        " " strong { (t.opening_hours) }
                    }
                    ul class="hours-list" {
                        @for entry in &location.hours {
                            li {
                                span class="day" { (entry.day.get(ctx.lang)) ":" }
                                " "
                                span class="time" { (entry.time) }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::render::test_support::fixtures;

    fn render(lang: Language, current: PageKind) -> String {
        let (settings, locations) = fixtures();
        let ctx = RenderContext::new(lang, current, &settings, &locations, 2026);
        document(&ctx, "Titre", html! { p { "body" } }).into_string()
    }

    #[test]
    fn test_document_language_and_title() {
        let html = render(Language::Fr, PageKind::Home);
        assert!(html.starts_with("<!DOCTYPE html><html lang=\"fr\">"));
        assert!(html.contains("<title>Titre | Pause Urbaine</title>"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains(r#"<body data-lazy-margin="50px 0px">"#));
    }

    #[test]
    fn test_nav_marks_current_page() {
        let html = render(Language::En, PageKind::Pricing);
        assert!(html.contains(r#"<a href="/en/tarifs" aria-current="page">Pricing</a>"#));
        assert!(html.contains(r#"<a href="/en/contact">Contact</a>"#));
    }

    #[test]
    fn test_language_switcher_targets_same_page() {
        let html = render(Language::Fr, PageKind::Contact);
        assert!(html.contains(r#"href="/en/contact" hreflang="en""#));
        assert!(html.contains(">English</a>"));
    }

    #[test]
    fn test_toggle_rendered_closed() {
        let html = render(Language::Fr, PageKind::Home);
        assert!(html.contains(r#"<nav class="main-nav""#));
        assert!(html.contains(r#"class="mobile-menu-toggle" aria-label="Menu" aria-expanded="false""#));
        assert!(html.contains(r#"<i class="fa-solid fa-bars""#));
    }

    #[test]
    fn test_footer_hours_localized() {
        let fr = render(Language::Fr, PageKind::Home);
        assert!(fr.contains("Horaires"));
        assert!(fr.contains(r#"<span class="day">Lundi:</span> <span class="time">Fermé</span>"#));
        assert!(fr.contains("Tous droits réservés."));

        let en = render(Language::En, PageKind::Home);
        assert!(en.contains("Opening Hours"));
        assert!(en.contains(r#"<span class="day">Saturday:</span> <span class="time">10h - 17h</span>"#));
        assert!(en.contains("© 2026 Pause Urbaine. All rights reserved."));
    }

    #[test]
    fn test_locations_bar_links() {
        let html = render(Language::En, PageKind::Home);
        assert!(html.contains(r#"href="tel:0223104081""#));
        assert!(html.contains(r#"href="https://www.instagram.com/pauseurbaine_eauxvives""#));
        assert!(html.contains("query=Quai+des+Moulins+12A%2C+1204+Gen%C3%A8ve"));
    }

    #[test]
    fn test_location_fields_escaped() {
        let (settings, mut locations) = fixtures();
        locations[0].phone = "<b>022</b>".to_string();
        locations[0].address.street = "Rue \"A\" & B".to_string();
        let ctx = RenderContext::new(Language::Fr, PageKind::Home, &settings, &locations, 2026);
        let html = document(&ctx, "T", html! {}).into_string();
        assert!(!html.contains("<b>022</b>"));
        assert!(html.contains("&lt;b&gt;022&lt;/b&gt;"));
        assert!(html.contains("Rue &quot;A&quot; &amp; B"));
    }
}
