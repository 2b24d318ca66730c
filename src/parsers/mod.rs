//! Service name classification and attribute extraction
//!
//! A raw catalog record is first classified into a [`CategoryKey`], then
//! handed to the extractor registered for that category (if any). Parsing
//! never fails: anything that does not match degrades to defaults.

mod detail;
mod tint;

pub use detail::DetailExtractor;
pub use tint::WindowTintExtractor;

use crate::types::{CatalogService, CategoryKey, ParsedService, ServiceRecord};
use rayon::prelude::*;

/// Trait for category-specific attribute extraction
pub trait AttributeExtractor: Send + Sync {
    /// Category this extractor handles
    fn category(&self) -> CategoryKey;

    /// Extract attributes from a service name. The result must carry
    /// `self.category()` as its category key.
    fn extract(&self, name: &str) -> ParsedService;
}

#[derive(Debug, Clone, Copy)]
enum NameMatch {
    Contains(&'static str),
    StartsWith(&'static str),
}

/// One classification rule: the category field is checked before the name
#[derive(Debug, Clone, Copy)]
struct CategoryRule {
    key: CategoryKey,
    category_keyword: &'static str,
    name_match: NameMatch,
}

impl CategoryRule {
    fn matches(&self, name: &str, category: &str) -> bool {
        if category.contains(self.category_keyword) {
            return true;
        }
        match self.name_match {
            NameMatch::Contains(needle) => name.contains(needle),
            NameMatch::StartsWith(prefix) => name.starts_with(prefix),
        }
    }
}

/// First match wins; anything unmatched is `Other`.
const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        key: CategoryKey::Bedliner,
        category_keyword: "bedliner",
        name_match: NameMatch::Contains("bedliner"),
    },
    CategoryRule {
        key: CategoryKey::Consultation,
        category_keyword: "consult",
        name_match: NameMatch::Contains("consult"),
    },
    CategoryRule {
        key: CategoryKey::WindowTint,
        category_keyword: "tint",
        name_match: NameMatch::Contains("tint"),
    },
    CategoryRule {
        key: CategoryKey::Alignment,
        category_keyword: "alignment",
        name_match: NameMatch::Contains("alignment"),
    },
    CategoryRule {
        key: CategoryKey::Detail,
        category_keyword: "detail",
        name_match: NameMatch::StartsWith("detail"),
    },
];

/// Classify a service into the taxonomy (case-insensitive).
pub fn classify(name: &str, category: Option<&str>) -> CategoryKey {
    let name = name.trim().to_lowercase();
    let category = category.unwrap_or_default().trim().to_lowercase();

    CATEGORY_RULES
        .iter()
        .find(|rule| rule.matches(&name, &category))
        .map(|rule| rule.key)
        .unwrap_or(CategoryKey::Other)
}

/// Classifier plus registry of attribute extractors
pub struct NameParser {
    extractors: Vec<Box<dyn AttributeExtractor>>,
}

impl NameParser {
    /// Create a parser with the default extractors
    pub fn new() -> Self {
        Self {
            extractors: vec![
                Box::new(WindowTintExtractor::new()),
                Box::new(DetailExtractor::new()),
            ],
        }
    }

    /// Get all registered extractors
    pub fn extractors(&self) -> &[Box<dyn AttributeExtractor>] {
        &self.extractors
    }

    /// Find the extractor for a category
    pub fn get(&self, key: CategoryKey) -> Option<&dyn AttributeExtractor> {
        self.extractors
            .iter()
            .find(|e| e.category() == key)
            .map(|e| e.as_ref())
    }

    /// Parse a service name and optional category label
    pub fn parse(&self, name: &str, category: Option<&str>) -> ParsedService {
        let key = classify(name, category);
        match self.get(key) {
            Some(extractor) => extractor.extract(name),
            None => ParsedService::bare(name, key),
        }
    }

    pub fn parse_record(&self, record: &ServiceRecord) -> CatalogService {
        CatalogService {
            parsed: self.parse(&record.name, record.category.as_deref()),
            record: record.clone(),
        }
    }

    /// Parse a whole catalog in parallel, preserving input order
    pub fn parse_catalog(&self, records: &[ServiceRecord]) -> Vec<CatalogService> {
        records.par_iter().map(|r| self.parse_record(r)).collect()
    }
}

impl Default for NameParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse with the default extractors
pub fn parse_service(name: &str, category: Option<&str>) -> ParsedService {
    NameParser::new().parse(name, category)
}
