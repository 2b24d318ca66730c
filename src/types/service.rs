//! Service catalog types

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A canned service as supplied by the catalog collaborator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub total_cents: Option<i64>,
    #[serde(default)]
    pub labor_hours: Option<f64>,
}

impl ServiceRecord {
    /// Price as "$D.CC" (e.g. 12999 → "$129.99")
    pub fn price_display(&self) -> Option<String> {
        let cents = self.total_cents?;
        let sign = if cents < 0 { "-" } else { "" };
        let abs = cents.unsigned_abs();
        Some(format!("{}${}.{:02}", sign, abs / 100, abs % 100))
    }
}

/// Static taxonomy entry: key, tab label and display priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDefinition {
    pub key: CategoryKey,
    pub label: &'static str,
    pub priority: u32,
}

const CATEGORY_DEFINITIONS: [CategoryDefinition; 6] = [
    CategoryDefinition {
        key: CategoryKey::Bedliner,
        label: "Bedliner",
        priority: 1,
    },
    CategoryDefinition {
        key: CategoryKey::Consultation,
        label: "Consultation",
        priority: 2,
    },
    CategoryDefinition {
        key: CategoryKey::WindowTint,
        label: "Window Tint",
        priority: 3,
    },
    CategoryDefinition {
        key: CategoryKey::Alignment,
        label: "Alignment",
        priority: 4,
    },
    CategoryDefinition {
        key: CategoryKey::Detail,
        label: "Detail",
        priority: 5,
    },
    CategoryDefinition {
        key: CategoryKey::Other,
        label: "Other",
        priority: 99,
    },
];

/// Closed service taxonomy
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum CategoryKey {
    Bedliner,
    Consultation,
    WindowTint,
    Alignment,
    Detail,
    #[default]
    Other,
}

impl CategoryKey {
    /// All categories in priority order
    pub fn all() -> &'static [CategoryKey] {
        &[
            Self::Bedliner,
            Self::Consultation,
            Self::WindowTint,
            Self::Alignment,
            Self::Detail,
            Self::Other,
        ]
    }

    pub fn definition(self) -> &'static CategoryDefinition {
        // CATEGORY_DEFINITIONS is indexed in declaration order
        &CATEGORY_DEFINITIONS[self as usize]
    }

    /// Get the tab label for this category
    pub fn label(self) -> &'static str {
        self.definition().label
    }

    pub fn priority(self) -> u32 {
        self.definition().priority
    }

    /// Wire key (e.g. "windowTint")
    pub fn key(self) -> &'static str {
        match self {
            Self::Bedliner => "bedliner",
            Self::Consultation => "consultation",
            Self::WindowTint => "windowTint",
            Self::Alignment => "alignment",
            Self::Detail => "detail",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Unknown keys resolve to `Other`
impl FromStr for CategoryKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_key(s).unwrap_or(Self::Other))
    }
}

impl CategoryKey {
    /// Match a wire key or tab label, case-insensitively
    pub fn from_key(s: &str) -> Option<Self> {
        let wanted = s.trim();
        Self::all().iter().copied().find(|key| {
            key.key().eq_ignore_ascii_case(wanted) || key.label().eq_ignore_ascii_case(wanted)
        })
    }
}

/// Canonical vehicle size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleSize {
    Coupe,
    Sedan,
    Suv,
    Xlsuv,
}

impl VehicleSize {
    pub fn rank(self) -> u32 {
        match self {
            Self::Coupe => 1,
            Self::Sedan => 2,
            Self::Suv => 3,
            Self::Xlsuv => 4,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Coupe => "coupe",
            Self::Sedan => "sedan",
            Self::Suv => "suv",
            Self::Xlsuv => "xlsuv",
        }
    }

    /// Chip label
    pub fn label(self) -> &'static str {
        match self {
            Self::Coupe => "Coupe",
            Self::Sedan => "Sedan",
            Self::Suv => "SUV",
            Self::Xlsuv => "XL SUV",
        }
    }
}

impl fmt::Display for VehicleSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for VehicleSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "coupe" => Ok(Self::Coupe),
            "sedan" => Ok(Self::Sedan),
            "suv" => Ok(Self::Suv),
            "xlsuv" => Ok(Self::Xlsuv),
            other => Err(format!("unknown vehicle size '{}'", other)),
        }
    }
}

/// Detail service type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Interior,
    Exterior,
    Combo,
    Express,
}

impl ServiceType {
    pub fn rank(self) -> u32 {
        match self {
            Self::Express => 1,
            Self::Interior => 2,
            Self::Exterior => 3,
            Self::Combo => 4,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Interior => "interior",
            Self::Exterior => "exterior",
            Self::Combo => "combo",
            Self::Express => "express",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Interior => "Interior",
            Self::Exterior => "Exterior",
            Self::Combo => "Interior & Exterior",
            Self::Express => "Express",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ServiceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "interior" => Ok(Self::Interior),
            "exterior" => Ok(Self::Exterior),
            "combo" => Ok(Self::Combo),
            "express" => Ok(Self::Express),
            other => Err(format!("unknown service type '{}'", other)),
        }
    }
}

/// Window tint film
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TintType {
    Carbon,
    Ceramic,
}

impl TintType {
    pub fn rank(self) -> u32 {
        match self {
            Self::Carbon => 1,
            Self::Ceramic => 2,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Carbon => "carbon",
            Self::Ceramic => "ceramic",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Carbon => "Carbon",
            Self::Ceramic => "Ceramic",
        }
    }
}

impl fmt::Display for TintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TintType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "carbon" => Ok(Self::Carbon),
            "ceramic" => Ok(Self::Ceramic),
            other => Err(format!("unknown tint type '{}'", other)),
        }
    }
}

/// Structured attributes derived from a service's name and category.
///
/// A pure function of `(name, category)`: every field that does not apply
/// stays `None`/`false`, and `display_name` falls back to the original name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedService {
    pub original_name: String,
    pub display_name: String,
    pub category_key: CategoryKey,
    pub vehicle_size: Option<VehicleSize>,
    pub vehicle_size_raw: Option<String>,
    pub service_type: Option<ServiceType>,
    pub tint_type: Option<TintType>,
    pub tint_area: Option<String>,
    pub level: Option<u32>,
    pub is_combo: bool,
}

impl ParsedService {
    /// A parse with no extracted attributes
    pub fn bare(name: &str, category_key: CategoryKey) -> Self {
        Self {
            original_name: name.to_string(),
            display_name: name.to_string(),
            category_key,
            vehicle_size: None,
            vehicle_size_raw: None,
            service_type: None,
            tint_type: None,
            tint_area: None,
            level: None,
            is_combo: false,
        }
    }
}

/// A catalog record paired with its parse
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogService {
    pub record: ServiceRecord,
    pub parsed: ParsedService,
}

impl CatalogService {
    pub fn category_key(&self) -> CategoryKey {
        self.parsed.category_key
    }

    pub fn display_name(&self) -> &str {
        &self.parsed.display_name
    }
}
