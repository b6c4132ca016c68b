//! Admin-edited content file (JSON).
//!
//! Every section is optional. A missing section falls back to the built-in
//! content; a present `locations` or `pricing` section replaces the built-in
//! one wholesale.

use serde::Deserialize;

use crate::content::catalog::{build_catalog, CategoryRecord, ServiceRecord};
use crate::content::defaults::{
    builtin_catalog, builtin_locations, builtin_page, builtin_settings,
};
use crate::content::error::ContentError;
use crate::content::maps::maps_search_url;
use crate::content::models::{
    Address, LocalizedText, Location, PageContent, PageKind, SiteSettings, WeeklyHours, Weekday,
};
use crate::content::provider::ContentStore;
use crate::content::validation::{validate_categories, validate_locations};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContentFile {
    pub site: SiteSection,
    pub locations: Option<Vec<LocationRecord>>,
    pub pricing: Option<PricingSection>,
    pub pages: PagesSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub site_name: Option<String>,
    pub instagram: Option<String>,
    pub show_pricing: Option<bool>,
    pub pricing_note: Option<LocalizedText>,
    pub hero_image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LocationRecord {
    pub id: String,
    pub name: LocalizedText,
    pub address: Address,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub maps_url: Option<String>,
    #[serde(default)]
    pub booking_url: Option<String>,
    pub hours: Vec<HoursRecord>,
}

#[derive(Debug, Deserialize)]
pub struct HoursRecord {
    pub weekday: Weekday,
    pub time: String,
    /// Overrides the standard day label.
    #[serde(default)]
    pub day: Option<LocalizedText>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PricingSection {
    pub categories: Vec<CategoryRecord>,
    pub services: Vec<ServiceRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PagesSection {
    pub home: Option<PageContent>,
    pub services: Option<PageContent>,
    pub pricing: Option<PageContent>,
    pub contact: Option<PageContent>,
}

impl PagesSection {
    fn take(&mut self, kind: PageKind) -> Option<PageContent> {
        match kind {
            PageKind::Home => self.home.take(),
            PageKind::Services => self.services.take(),
            PageKind::Pricing => self.pricing.take(),
            PageKind::Contact => self.contact.take(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl LocationRecord {
    fn into_location(self) -> Location {
        let hours = self
            .hours
            .into_iter()
            .map(|record| {
                let mut entry = WeeklyHours::new(record.weekday, record.time);
                if let Some(day) = record.day {
                    entry.day = day;
                }
                entry
            })
            .collect();

        let maps_url = non_blank(self.maps_url).unwrap_or_else(|| maps_search_url(&self.address));

        Location {
            id: self.id,
            name: self.name,
            address: self.address,
            phone: self.phone,
            instagram: self.instagram,
            maps_url,
            booking_url: non_blank(self.booking_url),
            hours,
        }
    }
}

impl ContentFile {
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Merges with the built-in content and validates the result.
    pub fn into_store(self) -> Result<ContentStore, ContentError> {
        let ContentFile {
            site,
            locations,
            pricing,
            mut pages,
        } = self;

        let locations = match locations {
            Some(records) => records
                .into_iter()
                .map(LocationRecord::into_location)
                .collect(),
            None => builtin_locations(),
        };
        validate_locations(&locations)?;

        let catalog = match pricing {
            Some(section) => {
                validate_categories(&section.categories)?;
                build_catalog(&section.categories, &section.services)
            }
            None => builtin_catalog(),
        };

        let defaults = builtin_settings();
        let settings = SiteSettings {
            site_name: non_blank(site.site_name).unwrap_or(defaults.site_name),
            instagram: non_blank(site.instagram).unwrap_or(defaults.instagram),
            show_pricing: site.show_pricing.unwrap_or(defaults.show_pricing),
            pricing_note: site
                .pricing_note
                .filter(|note| !note.fr.trim().is_empty() || !note.en.trim().is_empty())
                .or(defaults.pricing_note),
            hero_image: non_blank(site.hero_image).or(defaults.hero_image),
        };

        let pages = PageKind::ALL
            .into_iter()
            .map(|kind| (kind, pages.take(kind).unwrap_or_else(|| builtin_page(kind))))
            .collect();

        Ok(ContentStore::new(locations, catalog, pages, settings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn week(time: &str) -> serde_json::Value {
        json!([
            { "weekday": "monday", "time": "Fermé" },
            { "weekday": "tuesday", "time": time },
            { "weekday": "wednesday", "time": time },
            { "weekday": "thursday", "time": time },
            { "weekday": "friday", "time": time },
            { "weekday": "saturday", "time": "9h - 16h" },
            { "weekday": "sunday", "time": "Fermé" }
        ])
    }

    #[test]
    fn test_empty_file_is_builtin_content() {
        let store = ContentFile::from_json("{}").unwrap().into_store().unwrap();
        assert_eq!(store.locations_snapshot(), builtin_locations());
        assert_eq!(store.catalog_snapshot(), builtin_catalog());
        assert_eq!(store.settings_snapshot(), builtin_settings());
    }

    #[test]
    fn test_locations_section_replaces_builtin() {
        let raw = json!({
            "locations": [{
                "id": "carouge",
                "name": { "fr": "Salon Carouge", "en": "Carouge Salon" },
                "address": { "street": "Rue Vautier 5", "city": "Carouge", "postal": "1227", "country": "Suisse" },
                "phone": "022 000 0000",
                "instagram": "salon_carouge",
                "booking_url": "https://booking.example.com/carouge",
                "hours": week("10h - 19h")
            }]
        })
        .to_string();

        let store = ContentFile::from_json(&raw).unwrap().into_store().unwrap();
        let locations = store.locations_snapshot();
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].id, "carouge");
        assert_eq!(locations[0].hours[1].day.en, "Tuesday");
        assert_eq!(
            locations[0].booking_url.as_deref(),
            Some("https://booking.example.com/carouge")
        );
        assert!(locations[0].maps_url.ends_with("query=Rue+Vautier+5%2C+1227+Carouge"));
    }

    #[test]
    fn test_blank_booking_url_is_none_and_maps_override_kept() {
        let raw = json!({
            "locations": [{
                "id": "a",
                "name": { "fr": "A", "en": "A" },
                "address": { "street": "S", "city": "C", "postal": "1", "country": "X" },
                "maps_url": "https://maps.example.com/a",
                "booking_url": "   ",
                "hours": week("10h")
            }]
        })
        .to_string();

        let store = ContentFile::from_json(&raw).unwrap().into_store().unwrap();
        let location = &store.locations_snapshot()[0];
        assert!(location.booking_url.is_none());
        assert_eq!(location.maps_url, "https://maps.example.com/a");
        assert_eq!(location.phone, "");
    }

    #[test]
    fn test_invalid_week_is_rejected() {
        let raw = json!({
            "locations": [{
                "id": "a",
                "name": { "fr": "A", "en": "A" },
                "address": { "street": "S", "city": "C", "postal": "1", "country": "X" },
                "hours": [{ "weekday": "monday", "time": "10h" }]
            }]
        })
        .to_string();

        let err = ContentFile::from_json(&raw).unwrap().into_store().unwrap_err();
        assert!(matches!(err, ContentError::HoursCount { found: 1, .. }));
    }

    #[test]
    fn test_empty_locations_list_is_rejected() {
        let err = ContentFile::from_json(r#"{"locations": []}"#)
            .unwrap()
            .into_store()
            .unwrap_err();
        assert!(matches!(err, ContentError::NoLocations));
    }

    #[test]
    fn test_pricing_section_replaces_builtin_and_drops_empties() {
        let raw = json!({
            "pricing": {
                "categories": [
                    { "slug": "barbe", "name": "Barbe", "display_order": 2 },
                    { "slug": "vide", "name": "Vide", "display_order": 1 }
                ],
                "services": [
                    { "category": "barbe", "name": "Taille de barbe", "price": "30 CHF", "duration": "XX min" }
                ]
            }
        })
        .to_string();

        let store = ContentFile::from_json(&raw).unwrap().into_store().unwrap();
        let catalog = store.catalog_snapshot();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].name, "Barbe");
        assert_eq!(catalog[0].services[0].duration, "");
    }

    #[test]
    fn test_repeated_category_slug_is_rejected() {
        let raw = json!({
            "pricing": {
                "categories": [
                    { "slug": "coupes", "name": "Coupes", "display_order": 1 },
                    { "slug": "coupes", "name": "Coupes bis", "display_order": 2 }
                ],
                "services": [
                    { "category": "coupes", "name": "Coupe femme", "price": "70 CHF" }
                ]
            }
        })
        .to_string();

        let err = ContentFile::from_json(&raw).unwrap().into_store().unwrap_err();
        assert!(matches!(err, ContentError::DuplicateCategory(ref slug) if slug == "coupes"));
    }

    #[test]
    fn test_hero_image_is_optional_site_content() {
        let store = ContentFile::from_json("{}").unwrap().into_store().unwrap();
        assert_eq!(store.settings_snapshot().hero_image, None);

        let raw = json!({ "site": { "hero_image": " https://cdn.example.com/salon.jpg " } }).to_string();
        let store = ContentFile::from_json(&raw).unwrap().into_store().unwrap();
        assert_eq!(
            store.settings_snapshot().hero_image.as_deref(),
            Some("https://cdn.example.com/salon.jpg")
        );

        let raw = json!({ "site": { "hero_image": "  " } }).to_string();
        let store = ContentFile::from_json(&raw).unwrap().into_store().unwrap();
        assert_eq!(store.settings_snapshot().hero_image, None);
    }

    #[test]
    fn test_site_and_pages_merge_with_defaults() {
        let raw = json!({
            "site": {
                "site_name": "  ",
                "show_pricing": false,
                "pricing_note": { "fr": "Paiement par carte accepté.", "en": "Cards accepted." }
            },
            "pages": {
                "services": {
                    "title": { "fr": "Prestations", "en": "Treatments" }
                }
            }
        })
        .to_string();

        let store = ContentFile::from_json(&raw).unwrap().into_store().unwrap();
        let settings = store.settings_snapshot();
        assert_eq!(settings.site_name, "Pause Urbaine");
        assert!(!settings.show_pricing);
        assert_eq!(
            settings.pricing_note.map(|n| n.en),
            Some("Cards accepted.".to_string())
        );

        let services = store.page_snapshot(PageKind::Services);
        assert_eq!(services.title.fr, "Prestations");
        assert_eq!(services.body.fr, "");
        assert_eq!(store.page_snapshot(PageKind::Home), builtin_page(PageKind::Home));
    }

    #[test]
    fn test_unknown_weekday_is_a_parse_error() {
        let raw = r#"{"locations":[{"id":"a","name":{"fr":"A","en":"A"},
            "address":{"street":"S","city":"C","postal":"1","country":"X"},
            "hours":[{"weekday":"funday","time":"10h"}]}]}"#;
        assert!(matches!(
            ContentFile::from_json(raw),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_english_name_is_a_parse_error() {
        let raw = r#"{"locations":[{"id":"a","name":{"fr":"A"},
            "address":{"street":"S","city":"C","postal":"1","country":"X"},
            "hours":[]}]}"#;
        assert!(ContentFile::from_json(raw).is_err());
    }
}
