//! Facet filtering and free-text search
//!
//! Two exclusive derivation paths: faceted mode narrows one category's sorted
//! members by the active selections, search mode scans the whole catalog.

use crate::services::Sorter;
use crate::types::{CatalogService, CategoryKey, FilterState};

/// Filter engine over parsed catalog services
pub struct FilterEngine;

impl FilterEngine {
    /// Whether a service satisfies every non-empty selection for its category
    pub fn matches(service: &CatalogService, key: CategoryKey, filters: &FilterState) -> bool {
        let parsed = &service.parsed;
        match key {
            CategoryKey::Detail => {
                let detail = &filters.detail;
                detail
                    .vehicle_size
                    .is_none_or(|size| parsed.vehicle_size == Some(size))
                    && detail
                        .service_type
                        .is_none_or(|t| parsed.service_type == Some(t))
            }
            CategoryKey::WindowTint => {
                let tint = &filters.window_tint;
                tint.tint_type
                    .is_none_or(|t| parsed.tint_type == Some(t))
                    && tint
                        .tint_area
                        .as_deref()
                        .is_none_or(|area| parsed.tint_area.as_deref() == Some(area))
            }
            _ => true,
        }
    }

    /// Faceted mode: keep the members matching the category's filters,
    /// preserving their order
    pub fn apply_facets(
        sorted: &[CatalogService],
        key: CategoryKey,
        filters: &FilterState,
    ) -> Vec<CatalogService> {
        sorted
            .iter()
            .filter(|service| Self::matches(service, key, filters))
            .cloned()
            .collect()
    }

    /// Search mode: case-insensitive match on name or category across the
    /// whole catalog, sorted by name. A blank query yields `None`.
    pub fn search(catalog: &[CatalogService], query: &str) -> Option<Vec<CatalogService>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        let hits: Vec<CatalogService> = catalog
            .iter()
            .filter(|service| {
                service.record.name.to_lowercase().contains(&needle)
                    || service
                        .record
                        .category
                        .as_deref()
                        .is_some_and(|c| c.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();

        Some(Sorter::sort_by_name(&hits))
    }
}
