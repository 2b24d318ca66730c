//! Caller-held selection state
//!
//! Plain values threaded into the selectors; every `with_*` method returns a
//! new state and leaves the original untouched.

use serde::{Deserialize, Serialize};

use super::{CategoryKey, ServiceType, TintType, VehicleSize};

/// Detail facet selection (`None` = unconstrained)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailFilter {
    pub vehicle_size: Option<VehicleSize>,
    pub service_type: Option<ServiceType>,
}

/// Window tint facet selection (`None` = unconstrained)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TintFilter {
    pub tint_type: Option<TintType>,
    pub tint_area: Option<String>,
}

/// Per-category facet selections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub detail: DetailFilter,
    pub window_tint: TintFilter,
}

impl FilterState {
    /// True when no facet is selected in any category
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Everything the caller holds between renders
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub active_category: Option<CategoryKey>,
    pub filters: FilterState,
    pub search: String,
}

impl ViewState {
    pub fn with_category(&self, category: CategoryKey) -> Self {
        Self {
            active_category: Some(category),
            ..self.clone()
        }
    }

    pub fn with_filters(&self, filters: FilterState) -> Self {
        Self {
            filters,
            ..self.clone()
        }
    }

    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self.clone()
        }
    }

    /// Trimmed search text, `None` when blank
    pub fn search_query(&self) -> Option<&str> {
        let query = self.search.trim();
        (!query.is_empty()).then_some(query)
    }
}
