use serde::Deserialize;

use crate::error::DomkitError;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime settings for the theme controller and logging.
/// Missing fields fall back to the defaults above.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DomkitConfig {
    /// Storage key the resolved theme is written under.
    pub storage_key: String,
    /// Media query whose match means "dark preferred".
    pub media_query: String,
    /// `EnvFilter` directive used by `init_logging`.
    pub log_filter: String,
}

impl Default for DomkitConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            media_query: DEFAULT_MEDIA_QUERY.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl DomkitConfig {
    pub fn from_json(json: &str) -> Result<Self, DomkitError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| DomkitError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DomkitError> {
        if self.storage_key.is_empty() {
            return Err(DomkitError::Config("storage_key must not be empty".to_string()));
        }
        Ok(())
    }
}
