/// Every fixed user-facing string on the site, for one language.
///
/// Strings are raw text; the templates escape them on output.
#[derive(Debug, Clone)]
pub struct UiStrings {
    // ==================== Navigation ====================
    pub nav_home: &'static str,
    pub nav_services: &'static str,
    pub nav_pricing: &'static str,
    pub nav_contact: &'static str,
    pub nav_label: &'static str,
    pub menu_label: &'static str,
    /// Label of the link that switches to the *other* language.
    pub switch_language: &'static str,

    // ==================== Home ====================
    pub hero_heading: &'static str,
    pub hero_cta_services: &'static str,
    pub hero_cta_book: &'static str,
    pub hero_image_alt: &'static str,

    // ==================== Pricing ====================
    pub pricing_empty: &'static str,
    pub pricing_ready_to_book: &'static str,
    pub pricing_contact_prompt: &'static str,
    pub pricing_contact_button: &'static str,

    // ==================== Contact ====================
    pub book_online: &'static str,

    // ==================== Footer ====================
    pub footer_locations: &'static str,
    pub footer_navigation: &'static str,
    pub footer_follow_us: &'static str,
    pub opening_hours: &'static str,
    pub all_rights_reserved: &'static str,

    // ==================== Errors ====================
    pub not_found: &'static str,
}

pub const FRENCH: UiStrings = UiStrings {
    nav_home: "Accueil",
    nav_services: "Services",
    nav_pricing: "Tarifs",
    nav_contact: "Contact",
    nav_label: "Navigation principale",
    menu_label: "Menu",
    switch_language: "English",

    hero_heading: "Votre pause urbaine à Genève",
    hero_cta_services: "Nos Services",
    hero_cta_book: "Réserver",
    hero_image_alt: "Intérieur du salon",

    pricing_empty: "Aucune information tarifaire disponible.",
    pricing_ready_to_book: "Prêt à réserver ?",
    pricing_contact_prompt: "Contactez-nous pour prendre rendez-vous",
    pricing_contact_button: "Nous Contacter",

    book_online: "Réserver en ligne",

    footer_locations: "Nos Salons",
    footer_navigation: "Navigation",
    footer_follow_us: "Suivez-nous",
    opening_hours: "Horaires",
    all_rights_reserved: "Tous droits réservés.",

    not_found: "Page introuvable",
};

pub const ENGLISH: UiStrings = UiStrings {
    nav_home: "Home",
    nav_services: "Services",
    nav_pricing: "Pricing",
    nav_contact: "Contact",
    nav_label: "Main Navigation",
    menu_label: "Menu",
    switch_language: "Français",

    hero_heading: "Your urban break in Geneva",
    hero_cta_services: "Our Services",
    hero_cta_book: "Book Now",
    hero_image_alt: "Salon interior",

    pricing_empty: "No pricing information available.",
    pricing_ready_to_book: "Ready to book?",
    pricing_contact_prompt: "Contact us to schedule your appointment",
    pricing_contact_button: "Contact Us",

    book_online: "Book online",

    footer_locations: "Our Locations",
    footer_navigation: "Navigation",
    footer_follow_us: "Follow Us",
    opening_hours: "Opening Hours",
    all_rights_reserved: "All rights reserved.",

    not_found: "Page not found",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_strings_resolve_per_language() {
        assert_eq!(Language::Fr.strings().nav_pricing, "Tarifs");
        assert_eq!(Language::En.strings().nav_pricing, "Pricing");
    }

    #[test]
    fn test_switch_label_names_the_other_language() {
        assert_eq!(FRENCH.switch_language, "English");
        assert_eq!(ENGLISH.switch_language, "Français");
    }

    #[test]
    fn test_no_empty_strings() {
        for strings in [&FRENCH, &ENGLISH] {
            let all = [
                strings.nav_home,
                strings.nav_services,
                strings.nav_pricing,
                strings.nav_contact,
                strings.hero_heading,
                strings.hero_cta_services,
                strings.hero_cta_book,
                strings.pricing_empty,
                strings.pricing_ready_to_book,
                strings.pricing_contact_prompt,
                strings.pricing_contact_button,
                strings.book_online,
                strings.footer_locations,
                strings.footer_follow_us,
                strings.opening_hours,
                strings.all_rights_reserved,
                strings.not_found,
            ];
            assert!(all.iter().all(|s| !s.is_empty()));
        }
    }
}
