//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading salary
//! tiers and holiday additions from YAML files.

use std::fs;
use std::path::Path;

use crate::calendar::HolidayRecord;
use crate::error::{EngineError, EngineResult};

use super::types::{HolidayAdditions, SalaryTier, TiersConfig};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/bomberos/
/// ├── tiers.yaml      # Salary tiers (required)
/// └── holidays.yaml   # Manual holiday additions (optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use recargo_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/bomberos").unwrap();
/// let tier = loader.get_tier("BOMBERO").unwrap();
/// println!("{} earns {}", tier.name, tier.monthly_salary);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    tiers: Vec<SalaryTier>,
    extra_holidays: Vec<HolidayRecord>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `tiers.yaml` is missing or any file contains
    /// invalid YAML. A missing `holidays.yaml` is not an error; the
    /// generated calendar is simply used as-is.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let tiers_path = path.join("tiers.yaml");
        let tiers_config = Self::load_yaml::<TiersConfig>(&tiers_path)?;

        let holidays_path = path.join("holidays.yaml");
        let extra_holidays = if holidays_path.exists() {
            Self::load_yaml::<HolidayAdditions>(&holidays_path)?.holidays
        } else {
            Vec::new()
        };

        Ok(Self {
            tiers: tiers_config.tiers,
            extra_holidays,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns all configured salary tiers.
    pub fn tiers(&self) -> &[SalaryTier] {
        &self.tiers
    }

    /// Gets a salary tier by its exact name.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use recargo_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/bomberos")?;
    /// let tier = loader.get_tier("SARGENTO DE BOMBERO")?;
    /// # Ok::<(), recargo_engine::error::EngineError>(())
    /// ```
    pub fn get_tier(&self, name: &str) -> EngineResult<&SalaryTier> {
        self.tiers
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| EngineError::TierNotFound {
                name: name.to_string(),
            })
    }

    /// Returns the manual holiday additions, if any were configured.
    pub fn extra_holidays(&self) -> &[HolidayRecord] {
        &self.extra_holidays
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config/bomberos"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.tiers().len(), 4);
    }

    #[test]
    fn test_get_tier() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let tier = loader.get_tier("BOMBERO").unwrap();
        assert_eq!(tier.monthly_salary, 2_054_865.0);

        let tier = loader.get_tier("TENIENTE DE BOMBERO").unwrap();
        assert_eq!(tier.monthly_salary, 2_510_541.0);
    }

    #[test]
    fn test_get_tier_unknown_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        match loader.get_tier("CAPITAN") {
            Err(EngineError::TierNotFound { name }) => assert_eq!(name, "CAPITAN"),
            other => panic!("Expected TierNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_tier_lookup_is_case_sensitive() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert!(loader.get_tier("bombero").is_err());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match ConfigLoader::load("/nonexistent/path") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("tiers.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_shipped_holiday_additions_are_empty() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert!(loader.extra_holidays().is_empty());
    }

    #[test]
    fn test_holiday_additions_parse_when_present() {
        let dir = std::env::temp_dir().join("recargo-engine-config-test");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("tiers.yaml"),
            "tiers:\n  - name: BOMBERO\n    monthly_salary: 2054865\n",
        )
        .unwrap();
        fs::write(
            dir.join("holidays.yaml"),
            "holidays:\n  - date: 2025-03-14\n    name: Día Cívico\n    kind: FIXED\n",
        )
        .unwrap();

        let loader = ConfigLoader::load(&dir).unwrap();
        assert_eq!(loader.extra_holidays().len(), 1);
        assert_eq!(loader.extra_holidays()[0].name, "Día Cívico");

        fs::remove_dir_all(&dir).ok();
    }
}
