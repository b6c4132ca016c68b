use serde::{Deserialize, Serialize};

use crate::content::maps::maps_search_url;
use crate::i18n::Language;

/// A string supplied in both site languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub fr: String,
    pub en: String,
}

impl LocalizedText {
    pub fn new(fr: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            fr: fr.into(),
            en: en.into(),
        }
    }

    /// Same text in both languages (proper names, brand names).
    pub fn same(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            fr: text.clone(),
            en: text,
        }
    }

    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::Fr => &self.fr,
            Language::En => &self.en,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postal: String,
    pub country: String,
}

impl Address {
    /// The postal line as printed on cards, e.g. `"1204 Genève"`.
    pub fn postal_line(&self) -> String {
        format!("{} {}", self.postal, self.city)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Calendar order, Monday first.
    pub const WEEK: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn label(self) -> LocalizedText {
        let (fr, en) = match self {
            Weekday::Monday => ("Lundi", "Monday"),
            Weekday::Tuesday => ("Mardi", "Tuesday"),
            Weekday::Wednesday => ("Mercredi", "Wednesday"),
            Weekday::Thursday => ("Jeudi", "Thursday"),
            Weekday::Friday => ("Vendredi", "Friday"),
            Weekday::Saturday => ("Samedi", "Saturday"),
            Weekday::Sunday => ("Dimanche", "Sunday"),
        };
        LocalizedText::new(fr, en)
    }
}

/// One line of a branch's opening hours. `time` is free text ("10h - 18h", "Fermé").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyHours {
    pub weekday: Weekday,
    pub day: LocalizedText,
    pub time: String,
}

impl WeeklyHours {
    pub fn new(weekday: Weekday, time: impl Into<String>) -> Self {
        Self {
            weekday,
            day: weekday.label(),
            time: time.into(),
        }
    }
}

/// A salon branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: LocalizedText,
    pub address: Address,
    pub phone: String,
    pub instagram: String,
    pub maps_url: String,
    pub booking_url: Option<String>,
    /// Exactly seven entries, Monday first.
    pub hours: Vec<WeeklyHours>,
}

impl Location {
    /// Builds a branch whose map link is derived from its address.
    pub fn new(
        id: impl Into<String>,
        name: LocalizedText,
        address: Address,
        phone: impl Into<String>,
        instagram: impl Into<String>,
        hours: Vec<WeeklyHours>,
    ) -> Self {
        let maps_url = maps_search_url(&address);
        Self {
            id: id.into(),
            name,
            address,
            phone: phone.into(),
            instagram: instagram.into(),
            maps_url,
            booking_url: None,
            hours,
        }
    }

    pub fn with_booking_url(mut self, url: impl Into<String>) -> Self {
        self.booking_url = Some(url.into());
        self
    }

    /// `tel:` target with spaces removed.
    pub fn phone_href(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{digits}")
    }

    pub fn instagram_url(&self) -> String {
        format!("https://www.instagram.com/{}", self.instagram)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    /// Free text; blank lines separate paragraphs.
    #[serde(default)]
    pub description: String,
    /// Free text, e.g. "70 CHF" or "70-90 CHF".
    #[serde(default)]
    pub price: String,
    /// Free text, e.g. "45 min" or "1h 30min".
    #[serde(default)]
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub slug: String,
    pub name: String,
    pub display_order: i32,
    /// Never empty once the catalog is built.
    pub services: Vec<Service>,
}

/// The editable pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Home,
    Services,
    Pricing,
    Contact,
}

impl PageKind {
    pub const ALL: [PageKind; 4] = [
        PageKind::Home,
        PageKind::Services,
        PageKind::Pricing,
        PageKind::Contact,
    ];

    /// Path below the language prefix. Home is the prefix itself.
    pub fn slug(self) -> &'static str {
        match self {
            PageKind::Home => "",
            PageKind::Services => "services",
            PageKind::Pricing => "tarifs",
            PageKind::Contact => "contact",
        }
    }

    pub fn path(self, lang: Language) -> String {
        format!("/{}/{}", lang.code(), self.slug())
    }
}

/// Admin-edited title and body of one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    pub title: LocalizedText,
    #[serde(default = "empty_text")]
    pub body: LocalizedText,
}

fn empty_text() -> LocalizedText {
    LocalizedText::same("")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub site_name: String,
    /// Brand account linked from the footer.
    pub instagram: String,
    pub show_pricing: bool,
    pub pricing_note: Option<LocalizedText>,
    /// Home page hero image URL; no hero image is rendered when unset.
    #[serde(default)]
    pub hero_image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address {
            street: "Quai des Moulins 12A".to_string(),
            city: "Genève".to_string(),
            postal: "1204".to_string(),
            country: "Suisse".to_string(),
        }
    }

    #[test]
    fn test_localized_text_get() {
        let text = LocalizedText::new("Fermé", "Closed");
        assert_eq!(text.get(Language::Fr), "Fermé");
        assert_eq!(text.get(Language::En), "Closed");
    }

    #[test]
    fn test_week_is_monday_first() {
        assert_eq!(Weekday::WEEK[0], Weekday::Monday);
        assert_eq!(Weekday::WEEK[6], Weekday::Sunday);
        assert_eq!(Weekday::Wednesday.label().fr, "Mercredi");
    }

    #[test]
    fn test_postal_line() {
        assert_eq!(address().postal_line(), "1204 Genève");
    }

    #[test]
    fn test_location_links() {
        let location = Location::new(
            "plainpalais",
            LocalizedText::same("Plainpalais"),
            address(),
            "022 310 4081",
            "pauseurbaine",
            Weekday::WEEK.iter().map(|d| WeeklyHours::new(*d, "10h - 18h")).collect(),
        );
        assert_eq!(location.phone_href(), "tel:0223104081");
        assert_eq!(location.instagram_url(), "https://www.instagram.com/pauseurbaine");
        assert!(location.maps_url.starts_with("https://www.google.com/maps/search/"));
        assert!(location.booking_url.is_none());
    }

    #[test]
    fn test_page_paths() {
        assert_eq!(PageKind::Home.path(Language::Fr), "/fr/");
        assert_eq!(PageKind::Pricing.path(Language::En), "/en/tarifs");
        assert_eq!(PageKind::Contact.path(Language::Fr), "/fr/contact");
    }
}
