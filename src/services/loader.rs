//! Catalog and availability document loading
//!
//! Accepts either a bare JSON array of service records or the catalog
//! collaborator's `{"services": [...]}` envelope.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::parsers::NameParser;
use crate::types::{AvailabilityWindow, CatalogError, CatalogService, Result, ServiceRecord};

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Envelope { services: Vec<ServiceRecord> },
    Bare(Vec<ServiceRecord>),
}

impl CatalogDocument {
    fn into_records(self) -> Vec<ServiceRecord> {
        match self {
            Self::Envelope { services } => services,
            Self::Bare(records) => records,
        }
    }
}

/// Loads catalog documents and parses them
pub struct CatalogLoader {
    parser: NameParser,
}

impl CatalogLoader {
    pub fn new() -> Self {
        Self {
            parser: NameParser::new(),
        }
    }

    /// Decode service records from raw JSON bytes
    pub fn decode_records(bytes: &mut [u8]) -> Result<Vec<ServiceRecord>> {
        let document: CatalogDocument = simd_json::serde::from_slice(bytes)
            .map_err(|e| CatalogError::Parse(e.to_string()))?;
        Ok(document.into_records())
    }

    /// Read and parse a catalog file
    pub fn load(&self, path: &Path) -> Result<Vec<CatalogService>> {
        let mut bytes = fs::read(path)?;
        let records = Self::decode_records(&mut bytes)?;
        let services = self.parser.parse_catalog(&records);
        info!(path = %path.display(), count = services.len(), "loaded catalog");
        Ok(services)
    }

    /// Read an availability window document
    pub fn load_availability(path: &Path) -> Result<AvailabilityWindow> {
        let mut bytes = fs::read(path)?;
        simd_json::serde::from_slice(&mut bytes)
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CategoryKey;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn fixture(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    #[test]
    fn test_decode_bare_array() {
        let mut json = br#"[{"id":"1","name":"Alignment","category":"Alignment"}]"#.to_vec();
        let records = CatalogLoader::decode_records(&mut json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category.as_deref(), Some("Alignment"));
    }

    #[test]
    fn test_decode_envelope() {
        let mut json =
            br#"{"services":[{"id":"1","name":"Alignment","totalCents":8999,"bookable":true}]}"#
                .to_vec();
        let records = CatalogLoader::decode_records(&mut json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].total_cents, Some(8999));
    }

    #[test]
    fn test_decode_invalid() {
        let mut json = b"{not json".to_vec();
        let err = CatalogLoader::decode_records(&mut json).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_load_fixture_catalog() {
        let services = CatalogLoader::new().load(&fixture("catalog.json")).unwrap();

        assert_eq!(services.len(), 16);
        let tint = services
            .iter()
            .filter(|s| s.category_key() == CategoryKey::WindowTint)
            .count();
        assert_eq!(tint, 5);
        let detail = services
            .iter()
            .filter(|s| s.category_key() == CategoryKey::Detail)
            .count();
        assert_eq!(detail, 6);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = CatalogLoader::new()
            .load(&temp.path().join("missing.json"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn test_load_empty_array() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("catalog.json");
        fs::write(&path, "[]").unwrap();
        assert!(CatalogLoader::new().load(&path).unwrap().is_empty());
    }

    #[test]
    fn test_load_availability_fixture() {
        let path = fixture("availability.json");
        let window = CatalogLoader::load_availability(&path).unwrap();
        assert_eq!(window.duration_minutes, 480);
        assert_eq!(window.business_hours_close.as_deref(), Some("18:00"));
        assert_eq!(window.slots.len(), 3);
    }
}
