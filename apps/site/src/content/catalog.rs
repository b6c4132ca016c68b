//! Pricing catalog assembly.
//!
//! A content store hands over categories and services as two flat lists,
//! services pointing at their category by slug. `build_catalog` turns that
//! into the ordered, nested catalog the pricing page renders.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::content::models::{Category, Service};

/// Duration value the pricing import tooling uses for "not yet known".
const PLACEHOLDER_DURATION: &str = "XX min";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Slug of the owning category.
    pub category: String,
    #[serde(default)]
    pub menu_order: i32,
    #[serde(flatten)]
    pub service: Service,
}

/// Groups services under their categories.
///
/// Categories follow `display_order`, services `menu_order`; ties keep input
/// order. Categories left without services are dropped. Services naming an
/// unknown category are skipped with a warning, as are repeated category
/// slugs after the first.
pub fn build_catalog(categories: &[CategoryRecord], services: &[ServiceRecord]) -> Vec<Category> {
    for record in services {
        if !categories.iter().any(|c| c.slug == record.category) {
            warn!(
                service = %record.service.name,
                category = %record.category,
                "Skipping service with unknown pricing category"
            );
        }
    }

    let mut seen = HashSet::new();
    let mut ordered: Vec<&CategoryRecord> = categories
        .iter()
        .filter(|category| {
            let first = seen.insert(category.slug.as_str());
            if !first {
                warn!(category = %category.slug, "Skipping repeated pricing category slug");
            }
            first
        })
        .collect();
    ordered.sort_by_key(|c| c.display_order);

    ordered
        .into_iter()
        .filter_map(|category| {
            let mut members: Vec<&ServiceRecord> = services
                .iter()
                .filter(|s| s.category == category.slug)
                .collect();
            if members.is_empty() {
                return None;
            }
            members.sort_by_key(|s| s.menu_order);

            Some(Category {
                slug: category.slug.clone(),
                name: category.name.clone(),
                display_order: category.display_order,
                services: members
                    .into_iter()
                    .map(|s| normalize_service(&s.service))
                    .collect(),
            })
        })
        .collect()
}

fn normalize_service(service: &Service) -> Service {
    Service {
        name: service.name.trim().to_string(),
        description: service.description.trim().to_string(),
        price: service.price.trim().to_string(),
        duration: normalize_duration(&service.duration),
    }
}

/// Trims a duration and blanks out the import placeholder.
pub fn normalize_duration(duration: &str) -> String {
    let trimmed = duration.trim();
    if trimmed.eq_ignore_ascii_case(PLACEHOLDER_DURATION) {
        String::new()
    } else {
        trimmed.to_string()
    }
}
