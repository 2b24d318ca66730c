//! Detail service name parser
//!
//! Detail names look like `Detail - <service> - <vehicle descriptor>`, e.g.
//! "Detail - Interior Level 2 - Coupe/Two Door Truck".

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::AttributeExtractor;
use crate::services::normalizer::normalize_vehicle_size;
use crate::types::{CategoryKey, ParsedService, ServiceType};

static LEVEL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)level\s+([0-9]+)").expect("valid regex"));

/// Extracts vehicle size, service type and package level
pub struct DetailExtractor;

impl DetailExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DetailExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// (is_combo, service_type) from the lower-cased name
fn service_type_of(lower: &str) -> (bool, Option<ServiceType>) {
    let interior = lower.contains("interior");
    let exterior = lower.contains("exterior");

    if lower.contains("combo") || (interior && exterior && lower.contains('&')) {
        (true, Some(ServiceType::Combo))
    } else if interior && !exterior {
        (false, Some(ServiceType::Interior))
    } else if exterior && !interior {
        (false, Some(ServiceType::Exterior))
    } else if lower.contains("express") {
        (false, Some(ServiceType::Express))
    } else {
        (false, None)
    }
}

fn level_of(name: &str) -> Option<u32> {
    LEVEL_PATTERN
        .captures(name)
        .and_then(|caps| caps[1].parse().ok())
}

impl AttributeExtractor for DetailExtractor {
    fn category(&self) -> CategoryKey {
        CategoryKey::Detail
    }

    fn extract(&self, name: &str) -> ParsedService {
        let mut parsed = ParsedService::bare(name, CategoryKey::Detail);
        let lower = name.to_lowercase();

        let (is_combo, service_type) = service_type_of(&lower);
        parsed.is_combo = is_combo;
        parsed.service_type = service_type;
        parsed.level = level_of(name);

        let segments: Vec<&str> = name.split('-').map(str::trim).collect();
        if segments.len() < 2 {
            debug!(name, "detail name has no vehicle segment");
            return parsed;
        }

        let last = segments[segments.len() - 1];
        if !last.is_empty() {
            parsed.vehicle_size = normalize_vehicle_size(last);
            parsed.vehicle_size_raw = Some(last.to_string());
        }

        let display = if segments.len() >= 3 {
            segments[1..segments.len() - 1].join(" ")
        } else {
            segments[1].to_string()
        };
        if !display.trim().is_empty() {
            parsed.display_name = display.trim().to_string();
        }

        parsed
    }
}
