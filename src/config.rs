//! Engine configuration
//!
//! Loaded from `~/.shop-catalog/config.toml` (or an explicit path). Every
//! field is optional; a missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::services::duration::DEFAULT_DURATION_MINUTES;
use crate::services::facets::DEFAULT_MAX_AREA_CHIPS;
use crate::services::overnight::{parse_hhmm, OvernightCalculator, DEFAULT_WORKDAY_MINUTES};
use crate::types::{CatalogError, Result};

/// Closing time assumed when an availability document has none
pub const DEFAULT_BUSINESS_CLOSE: &str = "18:00";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Area chips offered per tint tab; 0 disables the cap
    pub max_area_chips: Option<usize>,
    /// Work minutes in each day after the first
    pub workday_minutes: u32,
    /// Duration for services without labor hours
    pub default_duration_minutes: u32,
    /// "HH:MM"
    pub business_close: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_area_chips: Some(DEFAULT_MAX_AREA_CHIPS),
            workday_minutes: DEFAULT_WORKDAY_MINUTES,
            default_duration_minutes: DEFAULT_DURATION_MINUTES,
            business_close: DEFAULT_BUSINESS_CLOSE.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Get the default config path (~/.shop-catalog/config.toml)
    pub fn default_path() -> Result<PathBuf> {
        let base_dirs = BaseDirs::new()
            .ok_or_else(|| CatalogError::Config("Cannot determine home directory".into()))?;
        Ok(base_dirs
            .home_dir()
            .join(".shop-catalog")
            .join("config.toml"))
    }

    /// Load from the default path
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| CatalogError::Config(format!("Invalid config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        parse_hhmm(&self.business_close).map_err(|e| {
            CatalogError::Config(format!("business_close must be HH:MM ({})", e))
        })?;
        if self.workday_minutes == 0 {
            return Err(CatalogError::Config(
                "workday_minutes must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Chip cap, `None` when disabled
    pub fn area_chip_cap(&self) -> Option<usize> {
        self.max_area_chips.filter(|max| *max > 0)
    }

    pub fn overnight_calculator(&self) -> OvernightCalculator {
        OvernightCalculator::with_workday_minutes(self.workday_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.max_area_chips, Some(4));
        assert_eq!(config.workday_minutes, 600);
        assert_eq!(config.default_duration_minutes, 60);
        assert_eq!(config.business_close, "18:00");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CatalogConfig::from_toml_str("workday_minutes = 480\n").unwrap();
        assert_eq!(config.workday_minutes, 480);
        assert_eq!(config.max_area_chips, Some(4));
        assert_eq!(config.overnight_calculator().workday_minutes(), 480);
    }

    #[test]
    fn test_zero_chip_cap_disables() {
        let config = CatalogConfig::from_toml_str("max_area_chips = 0\n").unwrap();
        assert_eq!(config.area_chip_cap(), None);
        assert_eq!(CatalogConfig::default().area_chip_cap(), Some(4));
    }

    #[test]
    fn test_invalid_close_rejected() {
        let err = CatalogConfig::from_toml_str("business_close = \"6pm\"\n").unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[test]
    fn test_zero_workday_rejected() {
        let result = CatalogConfig::from_toml_str("workday_minutes = 0\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let result = CatalogConfig::from_toml_str("workday_minutes = \"ten\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let temp = TempDir::new().unwrap();
        let config = CatalogConfig::load_from(&temp.path().join("config.toml")).unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "business_close = \"17:30\"\nmax_area_chips = 6\n").unwrap();

        let config = CatalogConfig::load_from(&path).unwrap();

        assert_eq!(config.business_close, "17:30");
        assert_eq!(config.area_chip_cap(), Some(6));
    }
}
