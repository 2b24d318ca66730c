//! Grouper service for bucketing services into category tabs

use crate::types::{CatalogService, CategoryKey};
use serde::Serialize;

/// A non-empty category tab with its member count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryTab {
    pub key: CategoryKey,
    pub label: &'static str,
    pub count: usize,
}

/// Services bucketed by category, one fixed slot per taxonomy entry
#[derive(Debug, Clone, Default)]
pub struct CategoryBuckets {
    buckets: [Vec<CatalogService>; 6],
}

impl CategoryBuckets {
    /// Members of a category, in input order
    pub fn get(&self, key: CategoryKey) -> &[CatalogService] {
        &self.buckets[key as usize]
    }

    /// Non-empty categories sorted by priority, with counts
    pub fn tabs(&self) -> Vec<CategoryTab> {
        let mut tabs: Vec<CategoryTab> = CategoryKey::all()
            .iter()
            .filter(|key| !self.get(**key).is_empty())
            .map(|key| CategoryTab {
                key: *key,
                label: key.label(),
                count: self.get(*key).len(),
            })
            .collect();
        tabs.sort_by_key(|tab| tab.key.priority());
        tabs
    }
}

/// Grouper for computing category buckets
pub struct Grouper;

impl Grouper {
    /// Bucket services by their category key
    pub fn group(services: &[CatalogService]) -> CategoryBuckets {
        let mut grouped = CategoryBuckets::default();
        for service in services {
            grouped.buckets[service.category_key() as usize].push(service.clone());
        }
        grouped
    }

    /// Non-empty tabs for a catalog, sorted by priority
    pub fn tabs(services: &[CatalogService]) -> Vec<CategoryTab> {
        Self::group(services).tabs()
    }

    /// Keep the caller's selection, or default to the first tab
    pub fn default_selection(
        current: Option<CategoryKey>,
        tabs: &[CategoryTab],
    ) -> Option<CategoryKey> {
        current.or_else(|| tabs.first().map(|tab| tab.key))
    }
}
