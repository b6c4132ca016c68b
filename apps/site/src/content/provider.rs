//! Content provider: the read port every page renderer pulls from.
//!
//! Default: `ContentStore`, an immutable in-memory snapshot built either from
//! the built-in tables or from an admin-edited content file at startup.
//!
//! `AppState` holds an `Arc<dyn ContentProvider>`; tests and alternative
//! stores plug in behind the same trait.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use tracing::info;

use crate::content::defaults::{
    builtin_catalog, builtin_locations, builtin_page, builtin_settings,
};
use crate::content::error::ContentError;
use crate::content::file::ContentFile;
use crate::content::models::{Category, Location, PageContent, PageKind, SiteSettings};

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Read-only access to site content. Implementations must be idempotent:
/// repeated calls return the same data until the content itself is replaced.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Salon branches in declaration order.
    async fn locations(&self) -> Result<Vec<Location>, ContentError>;

    /// Categories in display order, none of them empty.
    async fn pricing_catalog(&self) -> Result<Vec<Category>, ContentError>;

    async fn page(&self, kind: PageKind) -> Result<PageContent, ContentError>;

    async fn settings(&self) -> Result<SiteSettings, ContentError>;
}

// ────────────────────────────────────────────────────────────────────────────
// ContentStore (in-memory snapshot)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ContentStore {
    locations: Vec<Location>,
    catalog: Vec<Category>,
    pages: HashMap<PageKind, PageContent>,
    settings: SiteSettings,
}

impl ContentStore {
    pub fn new(
        locations: Vec<Location>,
        catalog: Vec<Category>,
        pages: HashMap<PageKind, PageContent>,
        settings: SiteSettings,
    ) -> Self {
        Self {
            locations,
            catalog,
            pages,
            settings,
        }
    }

    /// The literal tables compiled into the binary.
    pub fn builtin() -> Self {
        let pages = PageKind::ALL
            .into_iter()
            .map(|kind| (kind, builtin_page(kind)))
            .collect();
        Self::new(builtin_locations(), builtin_catalog(), pages, builtin_settings())
    }

    /// Loads and validates an admin-edited JSON content file.
    pub fn from_file(path: &Path) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = ContentFile::from_json(&raw)?.into_store()?;

        info!(
            "Loaded content from {}: {} locations, {} pricing categories",
            path.display(),
            store.locations.len(),
            store.catalog.len()
        );
        Ok(store)
    }

    pub fn with_site_name(mut self, site_name: impl Into<String>) -> Self {
        self.settings.site_name = site_name.into();
        self
    }

    pub fn locations_snapshot(&self) -> Vec<Location> {
        self.locations.clone()
    }

    pub fn catalog_snapshot(&self) -> Vec<Category> {
        self.catalog.clone()
    }

    pub fn page_snapshot(&self, kind: PageKind) -> PageContent {
        self.pages
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| builtin_page(kind))
    }

    pub fn settings_snapshot(&self) -> SiteSettings {
        self.settings.clone()
    }
}

#[async_trait]
impl ContentProvider for ContentStore {
    async fn locations(&self) -> Result<Vec<Location>, ContentError> {
        Ok(self.locations_snapshot())
    }

    async fn pricing_catalog(&self) -> Result<Vec<Category>, ContentError> {
        Ok(self.catalog_snapshot())
    }

    async fn page(&self, kind: PageKind) -> Result<PageContent, ContentError> {
        Ok(self.page_snapshot(kind))
    }

    async fn settings(&self) -> Result<SiteSettings, ContentError> {
        Ok(self.settings_snapshot())
    }
}
