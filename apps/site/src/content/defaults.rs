//! Built-in site content, used when no content file is configured and as the
//! fallback for any section a content file leaves out.

use crate::content::catalog::{build_catalog, CategoryRecord, ServiceRecord};
use crate::content::models::{
    Address, Category, LocalizedText, Location, PageContent, PageKind, Service, SiteSettings,
    WeeklyHours, Weekday,
};

const CLOSED: &str = "Fermé";

/// Tuesday–Friday 10h–18h, Saturday 10h–17h, closed Sunday and Monday.
fn standard_week() -> Vec<WeeklyHours> {
    Weekday::WEEK
        .into_iter()
        .map(|day| {
            let time = match day {
                Weekday::Monday | Weekday::Sunday => CLOSED,
                Weekday::Saturday => "10h - 17h",
                _ => "10h - 18h",
            };
            WeeklyHours::new(day, time)
        })
        .collect()
}

fn geneva(street: &str, postal: &str) -> Address {
    Address {
        street: street.to_string(),
        city: "Genève".to_string(),
        postal: postal.to_string(),
        country: "Suisse".to_string(),
    }
}

pub fn builtin_locations() -> Vec<Location> {
    vec![
        Location::new(
            "plainpalais",
            LocalizedText::same("Pause Urbaine Plainpalais"),
            geneva("Quai des Moulins 12A", "1204"),
            "022 310 4081",
            "pauseurbaine",
            standard_week(),
        ),
        Location::new(
            "eauxvives",
            LocalizedText::same("Pause Urbaine Eaux-Vives"),
            geneva("Rue de Montchoisy 40", "1207"),
            "022 736 2030",
            "pauseurbaine_eauxvives",
            standard_week(),
        ),
    ]
}

fn category(slug: &str, name: &str, display_order: i32) -> CategoryRecord {
    CategoryRecord {
        slug: slug.to_string(),
        name: name.to_string(),
        display_order,
    }
}

fn service(category: &str, menu_order: i32, name: &str, price: &str, duration: &str) -> ServiceRecord {
    ServiceRecord {
        category: category.to_string(),
        menu_order,
        service: Service {
            name: name.to_string(),
            description: String::new(),
            price: price.to_string(),
            duration: duration.to_string(),
        },
    }
}

pub fn builtin_categories() -> Vec<CategoryRecord> {
    vec![
        category("coupes", "Coupes", 1),
        category("couleur", "Coloration", 2),
        category("soins", "Soins", 3),
    ]
}

pub fn builtin_services() -> Vec<ServiceRecord> {
    let mut balayage = service("couleur", 3, "Balayage", "150-220 CHF", "2h 30min");
    balayage.service.description = "Éclaircissement à main levée pour un effet naturel.\n\n\
        Prix selon longueur et épaisseur des cheveux."
        .to_string();

    vec![
        service("coupes", 1, "Coupe femme", "70-90 CHF", "45 min"),
        service("coupes", 2, "Coupe homme", "45 CHF", "30 min"),
        service("coupes", 3, "Coupe enfant (-12 ans)", "35 CHF", "30 min"),
        service("couleur", 1, "Coloration racines", "85 CHF", "1h"),
        service("couleur", 2, "Gloss", "60 CHF", "XX min"),
        balayage,
        service("soins", 1, "Soin profond", "35 CHF", "20 min"),
        service("soins", 2, "Brushing", "40-55 CHF", "30 min"),
    ]
}

pub fn builtin_catalog() -> Vec<Category> {
    build_catalog(&builtin_categories(), &builtin_services())
}

pub fn builtin_page(kind: PageKind) -> PageContent {
    let (title, body) = match kind {
        PageKind::Home => (
            LocalizedText::new("Accueil", "Home"),
            LocalizedText::new(
                "Deux salons de coiffure au cœur de Genève, à Plainpalais et aux Eaux-Vives.",
                "Two hair salons in the heart of Geneva, in Plainpalais and Eaux-Vives.",
            ),
        ),
        PageKind::Services => (
            LocalizedText::new("Nos services", "Our services"),
            LocalizedText::new(
                "Coupe, couleur et soins pour femmes, hommes et enfants.\n\n\
                 Chaque prestation commence par un diagnostic personnalisé.",
                "Cuts, colour and treatments for women, men and children.\n\n\
                 Every service starts with a personal consultation.",
            ),
        ),
        PageKind::Pricing => (
            LocalizedText::new("Tarifs", "Pricing"),
            LocalizedText::new(
                "Tous les prix sont indiqués en francs suisses.",
                "All prices are in Swiss francs.",
            ),
        ),
        PageKind::Contact => (
            LocalizedText::new("Contact", "Contact"),
            LocalizedText::new(
                "Appelez-nous ou passez directement dans l'un de nos salons.",
                "Call us or drop by one of our salons.",
            ),
        ),
    };
    PageContent { title, body }
}

pub fn builtin_settings() -> SiteSettings {
    SiteSettings {
        site_name: "Pause Urbaine".to_string(),
        instagram: "pauseurbaine".to_string(),
        show_pricing: true,
        pricing_note: None,
        hero_image: None,
    }
}
