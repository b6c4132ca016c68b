use std::collections::HashSet;

use crate::content::catalog::CategoryRecord;
use crate::content::error::ContentError;
use crate::content::models::{Location, Weekday};

/// Checks the invariants every branch list must hold before it is served:
/// at least one branch, unique ids, names in both languages, and exactly
/// seven opening-hours lines in Monday→Sunday order.
pub fn validate_locations(locations: &[Location]) -> Result<(), ContentError> {
    if locations.is_empty() {
        return Err(ContentError::NoLocations);
    }

    let mut seen = HashSet::new();
    for location in locations {
        if location.id.trim().is_empty() {
            return Err(ContentError::MissingField {
                location: location.name.fr.clone(),
                field: "id",
            });
        }
        if !seen.insert(location.id.as_str()) {
            return Err(ContentError::DuplicateLocation(location.id.clone()));
        }
        validate_location(location)?;
    }

    Ok(())
}

fn validate_location(location: &Location) -> Result<(), ContentError> {
    let missing = |field| ContentError::MissingField {
        location: location.id.clone(),
        field,
    };

    if location.name.fr.trim().is_empty() {
        return Err(missing("name.fr"));
    }
    if location.name.en.trim().is_empty() {
        return Err(missing("name.en"));
    }

    if location.hours.len() != Weekday::WEEK.len() {
        return Err(ContentError::HoursCount {
            location: location.id.clone(),
            found: location.hours.len(),
        });
    }

    for (position, (entry, expected)) in location.hours.iter().zip(Weekday::WEEK).enumerate() {
        if entry.weekday != expected {
            return Err(ContentError::HoursOrder {
                location: location.id.clone(),
                position,
                expected,
                found: entry.weekday,
            });
        }
        if entry.day.fr.trim().is_empty() {
            return Err(missing("day label (fr)"));
        }
        if entry.day.en.trim().is_empty() {
            return Err(missing("day label (en)"));
        }
    }

    Ok(())
}

/// Pricing category slugs identify a category; each may appear once.
pub fn validate_categories(categories: &[CategoryRecord]) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for category in categories {
        if !seen.insert(category.slug.as_str()) {
            return Err(ContentError::DuplicateCategory(category.slug.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::defaults::{builtin_categories, builtin_locations};
    use crate::content::models::{LocalizedText, WeeklyHours};

    #[test]
    fn test_builtin_locations_are_valid() {
        assert!(validate_locations(&builtin_locations()).is_ok());
    }

    #[test]
    fn test_empty_list_rejected() {
        assert!(matches!(
            validate_locations(&[]),
            Err(ContentError::NoLocations)
        ));
    }

    #[test]
    fn test_six_days_rejected() {
        let mut locations = builtin_locations();
        locations[0].hours.pop();
        assert!(matches!(
            validate_locations(&locations),
            Err(ContentError::HoursCount { found: 6, .. })
        ));
    }

    #[test]
    fn test_sunday_first_rejected() {
        let mut locations = builtin_locations();
        locations[1].hours.rotate_right(1);
        let err = validate_locations(&locations).unwrap_err();
        assert!(matches!(
            err,
            ContentError::HoursOrder {
                position: 0,
                expected: Weekday::Monday,
                found: Weekday::Sunday,
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut locations = builtin_locations();
        let first_id = locations[0].id.clone();
        locations[1].id = first_id;
        assert!(matches!(
            validate_locations(&locations),
            Err(ContentError::DuplicateLocation(_))
        ));
    }

    #[test]
    fn test_blank_english_name_rejected() {
        let mut locations = builtin_locations();
        locations[0].name = LocalizedText::new("Salon", " ");
        let err = validate_locations(&locations).unwrap_err();
        assert!(err.to_string().contains("name.en"));
    }

    #[test]
    fn test_blank_day_label_rejected() {
        let mut locations = builtin_locations();
        let thursday = WeeklyHours {
            day: LocalizedText::new("Jeudi", ""),
            ..locations[0].hours[3].clone()
        };
        locations[0].hours[3] = thursday;
        assert!(matches!(
            validate_locations(&locations),
            Err(ContentError::MissingField { .. })
        ));
    }

    #[test]
    fn test_builtin_categories_are_valid() {
        assert!(validate_categories(&builtin_categories()).is_ok());
    }

    #[test]
    fn test_duplicate_category_slug_rejected() {
        let mut categories = builtin_categories();
        let repeated = categories[0].clone();
        categories.push(repeated);
        let err = validate_categories(&categories).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateCategory(ref slug) if slug == "coupes"));
    }
}
