//! Catalog view selector
//!
//! Pure function of `(catalog, ViewState, config)` that produces everything a
//! booking widget renders: tabs, the active tab, facet chips and the final
//! card list.

use serde::Serialize;

use crate::config::CatalogConfig;
use crate::services::facets::{AreaChip, FacetIndex};
use crate::services::{CategoryTab, FilterEngine, Grouper, Sorter};
use crate::types::{CatalogService, CategoryKey, ViewState};

/// Which derivation path produced the displayed list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewMode {
    Faceted,
    Search,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub tabs: Vec<CategoryTab>,
    pub active_category: Option<CategoryKey>,
    pub mode: ViewMode,
    /// Facet values of the active category (faceted mode only)
    pub facets: Option<FacetIndex>,
    /// Grouped tint area chips (window tint tab only)
    pub area_chips: Vec<AreaChip>,
    pub services: Vec<CatalogService>,
}

impl CatalogView {
    pub fn build(catalog: &[CatalogService], state: &ViewState, config: &CatalogConfig) -> Self {
        let buckets = Grouper::group(catalog);
        let tabs = buckets.tabs();
        let active_category = Grouper::default_selection(state.active_category, &tabs);

        if let Some(query) = state.search_query() {
            return Self {
                tabs,
                active_category,
                mode: ViewMode::Search,
                facets: None,
                area_chips: Vec::new(),
                services: FilterEngine::search(catalog, query).unwrap_or_default(),
            };
        }

        let Some(key) = active_category else {
            return Self {
                tabs,
                active_category,
                mode: ViewMode::Faceted,
                facets: None,
                area_chips: Vec::new(),
                services: Vec::new(),
            };
        };

        let sorted = Sorter::sort_category(buckets.get(key), key);
        let facets = FacetIndex::build(&sorted);
        let area_chips = if key == CategoryKey::WindowTint {
            facets.area_chips(config.area_chip_cap())
        } else {
            Vec::new()
        };
        let services = if state.filters.is_empty() {
            sorted
        } else {
            FilterEngine::apply_facets(&sorted, key, &state.filters)
        };

        Self {
            tabs,
            active_category,
            mode: ViewMode::Faceted,
            facets: Some(facets),
            area_chips,
            services,
        }
    }
}
