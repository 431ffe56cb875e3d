use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::metadata::MetadataError;

/// The `eager_loading` configuration block.
///
/// - `enabled` switches the rewriter off entirely when `false`.
/// - `max_joins` is the largest number of joins a rewritten query may carry.
/// - `force_eager` is the default used when neither the resource nor the
///   operation sets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EagerLoadingConfig {
    pub enabled: bool,
    pub max_joins: usize,
    pub force_eager: bool,
}

impl Default for EagerLoadingConfig {
    fn default() -> Self {
        Self { enabled: true, max_joins: 30, force_eager: true }
    }
}

impl EagerLoadingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disabled() -> Self {
        Self { enabled: false, ..Self::default() }
    }

    pub fn from_json_str(text: &str) -> Result<Self, MetadataError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, MetadataError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| MetadataError::io(path, e))?;
        Self::from_json_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    use crate::metadata::{EagerLoadingConfig, MetadataError};

    #[test]
    pub fn test_config_defaults() {
        let config = EagerLoadingConfig::from_json_str("{}").expect("Failed to parse config");

        assert_eq!(config, EagerLoadingConfig { enabled: true, max_joins: 30, force_eager: true });
    }

    #[test]
    pub fn test_config_partial_with_unknown_keys() {
        let config = EagerLoadingConfig::from_json_str(r#"{"force_eager": false, "fetch_partial": true}"#)
            .expect("Failed to parse config");

        assert!(!config.force_eager);
        assert!(config.enabled);
        assert_eq!(config.max_joins, 30);
    }

    #[test]
    pub fn test_config_invalid_json() {
        let result = EagerLoadingConfig::from_json_str(r#"{"max_joins": "many"}"#);

        assert!(matches!(result, Err(MetadataError::Json(_))));
    }

    #[test]
    pub fn test_config_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("eager_loading.json");
        let mut file = File::create(&file_path).unwrap();
        file.write_all(br#"{"enabled": false, "max_joins": 5}"#).unwrap();

        let config = EagerLoadingConfig::from_json_file(&file_path).expect("Failed to load config");

        assert!(!config.enabled);
        assert_eq!(config.max_joins, 5);
        assert!(config.force_eager);
    }

    #[test]
    pub fn test_config_missing_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = EagerLoadingConfig::from_json_file(temp_dir.path().join("missing.json"));

        assert!(matches!(result, Err(MetadataError::Io { .. })));
    }
}
