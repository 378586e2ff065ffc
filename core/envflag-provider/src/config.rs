//! Provider configuration, built in code or read from `envflag.toml`:
//!
//! ```toml
//! [provider]
//! prefix = "APP"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::{ConfigError, ConfigResult};

/// Construction-time settings of an `EnvVarProvider`.
///
/// Fixed for the provider's lifetime; there is no reconfiguration path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Prepended (with `_`) to every namespace key. Empty means no prefix.
    #[serde(default)]
    prefix: String,
}

impl ProviderConfig {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Parses the TOML config format. A missing `[provider]` table yields the
    /// default config.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(file.provider)
    }

    /// Loads config from an explicit path.
    pub fn load_from(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        info!(path = %path.display(), prefix = %config.prefix, "Loaded provider config");
        Ok(config)
    }
}

/// Raw TOML structure of the config file.
#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    provider: ProviderConfig,
}
