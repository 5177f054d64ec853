//! Tool settings
//!
//! Settings are loaded from a YAML file and drive the CLI: which type tags
//! survive top-level filtering, the inference depth limit, and where sample
//! records are fetched from.
//!
//! ```yaml
//! included_types: [string, integer, long, float, double, boolean, struct, array]
//! max_depth: 64
//! sample:
//!   base_url: https://jsonplaceholder.typicode.com
//!   min_id: 1
//!   max_id: 9
//! ```

use crate::error::{Error, Result};
use crate::schema::{TypeTag, DEFAULT_MAX_DEPTH};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use url::Url;

/// Default base URL for sample records
pub const DEFAULT_SAMPLE_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Tool settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Type tags kept by the top-level field filter
    pub included_types: Vec<TypeTag>,

    /// Maximum nesting depth accepted by the inferrer
    pub max_depth: usize,

    /// Sample record source
    pub sample: SampleSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            included_types: TypeTag::ALL.to_vec(),
            max_depth: DEFAULT_MAX_DEPTH,
            sample: SampleSettings::default(),
        }
    }
}

/// Sample source settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleSettings {
    /// Base URL of the record API
    pub base_url: String,

    /// Lowest record id to draw
    pub min_id: u32,

    /// Highest record id to draw
    pub max_id: u32,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SampleSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SAMPLE_BASE_URL.to_string(),
            min_id: 1,
            max_id: 9,
            timeout_secs: 30,
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse settings from a YAML string
    pub fn from_yaml(contents: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// The allow-set used by the field filter
    pub fn included_set(&self) -> HashSet<TypeTag> {
        self.included_types.iter().copied().collect()
    }

    /// Validate settings values
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(Error::invalid_setting("max_depth", "must be at least 1"));
        }

        if self.sample.min_id > self.sample.max_id {
            return Err(Error::invalid_setting(
                "sample.max_id",
                format!(
                    "id range {}..={} is empty",
                    self.sample.min_id, self.sample.max_id
                ),
            ));
        }

        Url::parse(&self.sample.base_url)
            .map_err(|e| Error::invalid_setting("sample.base_url", e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.included_set().len(), TypeTag::ALL.len());
        assert_eq!(settings.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_from_yaml_with_partial_keys() {
        let settings = Settings::from_yaml(
            r"
included_types: [integer, long, struct]
sample:
  max_id: 3
",
        )
        .unwrap();

        assert_eq!(
            settings.included_types,
            vec![TypeTag::Integer, TypeTag::Long, TypeTag::Struct]
        );
        // Unset keys fall back to defaults.
        assert_eq!(settings.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(settings.sample.min_id, 1);
        assert_eq!(settings.sample.max_id, 3);
        assert_eq!(settings.sample.base_url, DEFAULT_SAMPLE_BASE_URL);
    }

    #[test]
    fn test_from_yaml_rejects_zero_depth() {
        let err = Settings::from_yaml("max_depth: 0").unwrap_err();
        assert!(matches!(err, Error::InvalidSetting { .. }));
    }

    #[test]
    fn test_from_yaml_rejects_empty_id_range() {
        let err = Settings::from_yaml(
            r"
sample:
  min_id: 5
  max_id: 2
",
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidSetting { .. }));
    }

    #[test]
    fn test_from_yaml_rejects_bad_base_url() {
        let err = Settings::from_yaml(
            r"
sample:
  base_url: not a url
",
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidSetting { .. }));
    }

    #[test]
    fn test_from_yaml_rejects_unknown_tag() {
        let err = Settings::from_yaml("included_types: [decimal]").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_from_file_round_trip() {
        let settings = Settings {
            included_types: vec![TypeTag::String, TypeTag::Struct],
            max_depth: 8,
            sample: SampleSettings {
                base_url: "http://localhost:8080".to_string(),
                min_id: 2,
                max_id: 4,
                timeout_secs: 5,
            },
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        std::fs::write(&path, serde_yaml::to_string(&settings).unwrap()).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_from_file_missing_path() {
        let err = Settings::from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
