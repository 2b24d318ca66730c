//! Catalog subcommands: `tabs`, `list` and `facets`

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::CatalogConfig;
use crate::services::{CatalogLoader, CatalogView, FacetDimension, FacetIndex, ViewMode};
use crate::types::{
    CatalogService, CategoryKey, DetailFilter, FilterState, ServiceType, TintFilter, TintType,
    VehicleSize, ViewState,
};

/// Show category tabs
#[derive(Args, Debug)]
pub struct TabsArgs {
    /// Catalog JSON file
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

impl TabsArgs {
    pub fn run(self, config: &CatalogConfig) -> anyhow::Result<()> {
        let view = build_view(&self.catalog, &ViewState::default(), config)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&view.tabs)?);
            return Ok(());
        }

        if view.tabs.is_empty() {
            println!("No services in catalog");
            return Ok(());
        }
        for tab in &view.tabs {
            let marker = if Some(tab.key) == view.active_category {
                "*"
            } else {
                " "
            };
            println!(
                "{} {:<14} {:>4}  ({})",
                marker,
                tab.label,
                tab.count,
                tab.key.key()
            );
        }
        Ok(())
    }
}

/// List services for a tab, facet selection or search
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Catalog JSON file
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Category tab (defaults to the first tab)
    #[arg(long, value_parser = parse_category_arg)]
    pub category: Option<CategoryKey>,

    /// Vehicle size filter (detail tab)
    #[arg(long)]
    pub size: Option<VehicleSize>,

    /// Service type filter (detail tab)
    #[arg(long = "type", value_name = "TYPE")]
    pub service_type: Option<ServiceType>,

    /// Tint type filter (window tint tab)
    #[arg(long)]
    pub tint: Option<TintType>,

    /// Raw tint area filter (window tint tab)
    #[arg(long)]
    pub area: Option<String>,

    /// Search across all categories, ignoring tab and filters
    #[arg(long)]
    pub search: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    fn view_state(&self) -> ViewState {
        ViewState {
            active_category: self.category,
            filters: FilterState {
                detail: DetailFilter {
                    vehicle_size: self.size,
                    service_type: self.service_type,
                },
                window_tint: TintFilter {
                    tint_type: self.tint,
                    tint_area: self.area.clone(),
                },
            },
            search: self.search.clone().unwrap_or_default(),
        }
    }

    pub fn run(self, config: &CatalogConfig) -> anyhow::Result<()> {
        let view = build_view(&self.catalog, &self.view_state(), config)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&view.services)?);
            return Ok(());
        }

        match (view.mode, view.active_category) {
            (ViewMode::Search, _) => println!("Search results: {}", view.services.len()),
            (ViewMode::Faceted, Some(key)) => {
                println!("{}: {}", key.label(), view.services.len())
            }
            (ViewMode::Faceted, None) => println!("No services in catalog"),
        }
        for service in &view.services {
            print_service_row(service, config);
        }
        Ok(())
    }
}

/// Show facet values for a category
#[derive(Args, Debug)]
pub struct FacetsArgs {
    /// Catalog JSON file
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Category tab
    #[arg(long, value_parser = parse_category_arg)]
    pub category: CategoryKey,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

impl FacetsArgs {
    pub fn run(self, config: &CatalogConfig) -> anyhow::Result<()> {
        let state = ViewState::default().with_category(self.category);
        let view = build_view(&self.catalog, &state, config)?;
        let facets = view.facets.unwrap_or_default();
        let relevant = facets.relevant_dimensions();

        if self.json {
            let output = serde_json::json!({
                "category": self.category,
                "facets": facets,
                "relevant": relevant,
                "areaChips": view.area_chips,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        if relevant.is_empty() {
            println!("{}: no filters", self.category.label());
            return Ok(());
        }
        for dimension in relevant {
            println!(
                "{}: {}",
                dimension_label(dimension),
                facet_values(&facets, dimension)
            );
        }
        if !view.area_chips.is_empty() {
            let chips: Vec<String> = view
                .area_chips
                .iter()
                .map(|chip| format!("{} [{}]", chip.label, chip.filter_key))
                .collect();
            println!("Area chips: {}", chips.join(", "));
        }
        Ok(())
    }
}

/// Command-line categories must name a real tab
fn parse_category_arg(value: &str) -> Result<CategoryKey, String> {
    CategoryKey::from_key(value).ok_or_else(|| {
        let keys: Vec<&str> = CategoryKey::all().iter().map(|k| k.key()).collect();
        format!("unknown category '{}' (one of: {})", value, keys.join(", "))
    })
}

fn build_view(
    catalog: &Path,
    state: &ViewState,
    config: &CatalogConfig,
) -> anyhow::Result<CatalogView> {
    let services = CatalogLoader::new().load(catalog)?;
    Ok(CatalogView::build(&services, state, config))
}

fn print_service_row(service: &CatalogService, config: &CatalogConfig) {
    let price = service
        .record
        .price_display()
        .unwrap_or_else(|| "-".into());
    let minutes = service
        .record
        .duration_minutes(config.default_duration_minutes);
    println!(
        "  {:<40} {:>10} {:>5}m  {}",
        service.display_name(),
        price,
        minutes,
        service.record.id
    );
}

fn dimension_label(dimension: FacetDimension) -> &'static str {
    match dimension {
        FacetDimension::VehicleSize => "Vehicle size",
        FacetDimension::ServiceType => "Service type",
        FacetDimension::TintType => "Tint type",
        FacetDimension::TintArea => "Tint area",
    }
}

fn facet_values(facets: &FacetIndex, dimension: FacetDimension) -> String {
    let labels: Vec<&str> = match dimension {
        FacetDimension::VehicleSize => facets.vehicle_sizes.iter().map(|v| v.label()).collect(),
        FacetDimension::ServiceType => facets.service_types.iter().map(|v| v.label()).collect(),
        FacetDimension::TintType => facets.tint_types.iter().map(|v| v.label()).collect(),
        FacetDimension::TintArea => facets.tint_areas.iter().map(String::as_str).collect(),
    };
    labels.join(", ")
}
