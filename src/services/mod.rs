//! Catalog engine services: grouping, ordering, facets, filtering and
//! overnight estimation

pub mod duration;
pub mod facets;
pub mod filter;
pub mod grouper;
pub mod loader;
pub mod normalizer;
pub mod overnight;
pub mod sorter;
pub mod view;

pub use duration::service_duration_minutes;
pub use facets::{area_group_label, AreaChip, FacetDimension, FacetIndex};
pub use filter::FilterEngine;
pub use grouper::{CategoryBuckets, CategoryTab, Grouper};
pub use loader::CatalogLoader;
pub use normalizer::normalize_vehicle_size;
pub use overnight::{overnight_info, OvernightCalculator, OvernightEstimate};
pub use sorter::Sorter;
pub use view::{CatalogView, ViewMode};
