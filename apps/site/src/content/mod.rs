// Site content: salon branches, the pricing catalog, page copy and settings.
// Loaded once at startup, immutable afterwards; renderers read it through
// the `ContentProvider` port.

pub mod catalog;
pub mod defaults;
pub mod error;
pub mod file;
pub mod maps;
pub mod models;
pub mod provider;
pub mod validation;

pub use error::ContentError;
pub use models::{
    Address, Category, LocalizedText, Location, PageContent, PageKind, Service, SiteSettings,
    WeeklyHours, Weekday,
};
pub use provider::{ContentProvider, ContentStore};
