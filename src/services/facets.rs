//! Facet indexing for filter chips
//!
//! Collects the distinct attribute values present in a category, in
//! first-seen order. Free-text tint areas are additionally collapsed into a
//! handful of display groups.

use serde::Serialize;

use crate::types::{CatalogService, ServiceType, TintType, VehicleSize};

/// Default number of area chips offered
pub const DEFAULT_MAX_AREA_CHIPS: usize = 4;

/// A filterable attribute dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FacetDimension {
    VehicleSize,
    ServiceType,
    TintType,
    TintArea,
}

/// A selectable area chip: display group plus the raw area it filters on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaChip {
    pub label: String,
    pub filter_key: String,
}

/// Distinct facet values present in a list of services
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetIndex {
    pub vehicle_sizes: Vec<VehicleSize>,
    pub service_types: Vec<ServiceType>,
    pub tint_types: Vec<TintType>,
    pub tint_areas: Vec<String>,
}

fn push_unique<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if !values.contains(&value) {
        values.push(value);
    }
}

impl FacetIndex {
    /// Index a (sorted) member list
    pub fn build(services: &[CatalogService]) -> Self {
        let mut index = Self::default();

        for service in services {
            let parsed = &service.parsed;
            if let Some(size) = parsed.vehicle_size {
                push_unique(&mut index.vehicle_sizes, size);
            }
            if let Some(service_type) = parsed.service_type {
                push_unique(&mut index.service_types, service_type);
            }
            if let Some(tint_type) = parsed.tint_type {
                push_unique(&mut index.tint_types, tint_type);
            }
            if let Some(area) = &parsed.tint_area {
                push_unique(&mut index.tint_areas, area.clone());
            }
        }

        index
    }

    pub fn value_count(&self, dimension: FacetDimension) -> usize {
        match dimension {
            FacetDimension::VehicleSize => self.vehicle_sizes.len(),
            FacetDimension::ServiceType => self.service_types.len(),
            FacetDimension::TintType => self.tint_types.len(),
            FacetDimension::TintArea => self.tint_areas.len(),
        }
    }

    /// A dimension with fewer than two values cannot narrow anything
    pub fn is_relevant(&self, dimension: FacetDimension) -> bool {
        self.value_count(dimension) > 1
    }

    pub fn relevant_dimensions(&self) -> Vec<FacetDimension> {
        [
            FacetDimension::VehicleSize,
            FacetDimension::ServiceType,
            FacetDimension::TintType,
            FacetDimension::TintArea,
        ]
        .into_iter()
        .filter(|d| self.is_relevant(*d))
        .collect()
    }

    /// Grouped area chips, capped at `max` (`None` = no cap)
    pub fn area_chips(&self, max: Option<usize>) -> Vec<AreaChip> {
        let mut chips: Vec<AreaChip> = Vec::new();

        for area in &self.tint_areas {
            let label = area_group_label(area);
            if chips.iter().any(|chip| chip.label == label) {
                continue;
            }
            chips.push(AreaChip {
                label,
                filter_key: area.clone(),
            });
        }

        if let Some(max) = max {
            chips.truncate(max);
        }
        chips
    }
}

/// Display group for a free-text tint area
///
/// # Examples
/// ```
/// use shop_catalog::services::facets::area_group_label;
///
/// assert_eq!(area_group_label("Full Coverage Package"), "Full Vehicle");
/// assert_eq!(area_group_label("Two Front Doors"), "Front Doors");
/// ```
pub fn area_group_label(raw: &str) -> String {
    let lower = raw.to_lowercase();

    let group = if lower.contains("full") {
        "Full Vehicle"
    } else if lower.contains("windshield") && !lower.contains("strip") {
        "Windshield"
    } else if lower.contains("sunstrip") || lower.contains("sun strip") {
        "Sunstrip"
    } else if lower.contains("door") || lower.contains("front") {
        "Front Doors"
    } else {
        return raw.to_string();
    };

    group.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::NameParser;
    use crate::types::ServiceRecord;

    fn make_services(names: &[&str], category: &str) -> Vec<CatalogService> {
        let parser = NameParser::new();
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                parser.parse_record(&ServiceRecord {
                    id: i.to_string(),
                    name: name.to_string(),
                    category: Some(category.to_string()),
                    total_cents: None,
                    labor_hours: None,
                })
            })
            .collect()
    }

    // ========== build() ==========

    #[test]
    fn test_build_first_seen_order() {
        let services = make_services(
            &[
                "Detail - Interior Level 1 - SUV",
                "Detail - Exterior Level 1 - Coupe",
                "Detail - Interior Level 2 - SUV",
                "Detail - Express - Sedan",
            ],
            "Detail",
        );

        let index = FacetIndex::build(&services);

        assert_eq!(
            index.vehicle_sizes,
            vec![VehicleSize::Suv, VehicleSize::Coupe, VehicleSize::Sedan]
        );
        assert_eq!(
            index.service_types,
            vec![
                ServiceType::Interior,
                ServiceType::Exterior,
                ServiceType::Express,
            ]
        );
        assert!(index.tint_types.is_empty());
        assert!(index.tint_areas.is_empty());
    }

    #[test]
    fn test_build_tint_values() {
        let services = make_services(
            &[
                "Window Tint - Front Doors - Carbon",
                "Window Tint - Front Doors - Ceramic",
                "Window Tint - Windshield - Ceramic",
            ],
            "Window Tint",
        );

        let index = FacetIndex::build(&services);

        assert_eq!(index.tint_types, vec![TintType::Carbon, TintType::Ceramic]);
        assert_eq!(index.tint_areas, vec!["Front Doors", "Windshield"]);
    }

    #[test]
    fn test_build_empty() {
        assert_eq!(FacetIndex::build(&[]), FacetIndex::default());
    }

    // ========== relevance ==========

    #[test]
    fn test_single_value_dimension_not_relevant() {
        let services = make_services(
            &[
                "Detail - Interior Level 1 - SUV",
                "Detail - Interior Level 2 - Sedan",
            ],
            "Detail",
        );

        let index = FacetIndex::build(&services);

        assert!(index.is_relevant(FacetDimension::VehicleSize));
        assert!(!index.is_relevant(FacetDimension::ServiceType));
        assert!(!index.is_relevant(FacetDimension::TintArea));
        assert_eq!(
            index.relevant_dimensions(),
            vec![FacetDimension::VehicleSize]
        );
    }

    // ========== area_group_label() ==========

    #[test]
    fn test_group_full() {
        assert_eq!(area_group_label("Full Vehicle Front+Back"), "Full Vehicle");
        assert_eq!(area_group_label("Full Coverage Package"), "Full Vehicle");
        // "full" outranks "windshield"
        assert_eq!(area_group_label("Full Windshield"), "Full Vehicle");
    }

    #[test]
    fn test_group_windshield_excludes_strip() {
        assert_eq!(area_group_label("Windshield"), "Windshield");
        assert_eq!(area_group_label("Windshield Strip"), "Windshield Strip");
    }

    #[test]
    fn test_group_sunstrip() {
        assert_eq!(area_group_label("Sunstrip"), "Sunstrip");
        assert_eq!(area_group_label("Windshield Sun Strip"), "Sunstrip");
    }

    #[test]
    fn test_group_front_doors() {
        assert_eq!(area_group_label("Front Doors"), "Front Doors");
        assert_eq!(area_group_label("Two Door Tint"), "Front Doors");
        assert_eq!(area_group_label("Front Windows"), "Front Doors");
    }

    #[test]
    fn test_group_passthrough() {
        assert_eq!(area_group_label("Rear Window"), "Rear Window");
    }

    // ========== area_chips() ==========

    #[test]
    fn test_area_chips_dedup_keeps_earliest_raw() {
        let index = FacetIndex {
            tint_areas: vec![
                "Full Vehicle Front+Back".into(),
                "Full Coverage Package".into(),
            ],
            ..Default::default()
        };

        let chips = index.area_chips(Some(DEFAULT_MAX_AREA_CHIPS));

        assert_eq!(
            chips,
            vec![AreaChip {
                label: "Full Vehicle".into(),
                filter_key: "Full Vehicle Front+Back".into(),
            }]
        );
    }

    #[test]
    fn test_area_chips_capped() {
        let index = FacetIndex {
            tint_areas: vec![
                "Full Vehicle".into(),
                "Windshield".into(),
                "Sunstrip".into(),
                "Front Doors".into(),
                "Rear Window".into(),
                "Back Doors".into(),
            ],
            ..Default::default()
        };

        let capped = index.area_chips(Some(4));
        let labels: Vec<&str> = capped.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Full Vehicle", "Windshield", "Sunstrip", "Front Doors"]
        );

        // "Back Doors" joins the Front Doors group, so five groups in total
        assert_eq!(index.area_chips(None).len(), 5);
    }
}
