use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading or validating site content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid content JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("At least one location is required")]
    NoLocations,

    #[error("Duplicate location id '{0}'")]
    DuplicateLocation(String),

    #[error("Location '{location}' is missing {field}")]
    MissingField {
        location: String,
        field: &'static str,
    },

    #[error("Location '{location}' has {found} opening-hours entries, expected 7")]
    HoursCount { location: String, found: usize },

    #[error("Location '{location}' hours entry {position} is {found:?}, expected {expected:?}")]
    HoursOrder {
        location: String,
        position: usize,
        expected: crate::content::models::Weekday,
        found: crate::content::models::Weekday,
    },

    #[error("Duplicate pricing category slug '{0}'")]
    DuplicateCategory(String),
}
