//! Error types for provider configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration loading errors.
///
/// Resolution itself has no error channel; these only arise while building a
/// `ProviderConfig` from a file or string.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML or has the wrong shape.
    #[error("invalid provider config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
