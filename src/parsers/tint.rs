//! Window tint name parser

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::AttributeExtractor;
use crate::types::{CategoryKey, ParsedService, TintType};

/// "Window Tint - <area> - <Carbon|Ceramic>"
static STRICT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*window\s+tint\s*-\s*(.+?)\s*-\s*(carbon|ceramic)\s*$")
        .expect("valid regex")
});

/// "Window Tint - <area>"
static LOOSE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*window\s+tint\s*-\s*(.+?)\s*$").expect("valid regex")
});

/// Extracts tint area and film type
pub struct WindowTintExtractor;

impl WindowTintExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowTintExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Film type mentioned inside free text, ceramic first
fn infer_tint_type(text: &str) -> Option<TintType> {
    let lower = text.to_lowercase();
    if lower.contains("ceramic") {
        Some(TintType::Ceramic)
    } else if lower.contains("carbon") {
        Some(TintType::Carbon)
    } else {
        None
    }
}

impl AttributeExtractor for WindowTintExtractor {
    fn category(&self) -> CategoryKey {
        CategoryKey::WindowTint
    }

    fn extract(&self, name: &str) -> ParsedService {
        let mut parsed = ParsedService::bare(name, CategoryKey::WindowTint);

        if let Some(caps) = STRICT_PATTERN.captures(name) {
            let area = caps[1].trim().to_string();
            if area.is_empty() {
                debug!(name, "tint name has a blank area segment");
                return parsed;
            }
            parsed.tint_type = infer_tint_type(&caps[2]);
            parsed.display_name = area.clone();
            parsed.tint_area = Some(area);
            return parsed;
        }

        let area = LOOSE_PATTERN
            .captures(name)
            .map(|caps| caps[1].trim().to_string())
            .filter(|area| !area.is_empty());

        match area {
            Some(area) => {
                parsed.tint_type = infer_tint_type(&area);
                parsed.display_name = area.clone();
                parsed.tint_area = Some(area);
            }
            None => debug!(name, "tint name has no area segment"),
        }

        parsed
    }
}
