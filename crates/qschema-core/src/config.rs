//! Compiler configuration, loadable from TOML.

use serde::Deserialize;
use std::{fs, path::Path};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid default namespace '{0}'")]
    InvalidNamespace(String),
}

///
/// CompileConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CompileConfig {
    /// Namespace for records that carry no namespace marker at all.
    pub default_namespace: Option<String>,

    /// Render `unique` columns with the `` `u# `` attribute.
    pub unique_attribute: bool,

    pub reserved: ReservedConfig,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            default_namespace: None,
            unique_attribute: true,
            reserved: ReservedConfig::default(),
        }
    }
}

impl CompileConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;

        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ns) = &self.default_namespace
            && !ns.is_empty()
            && crate::naming::validate_namespace(ns).is_err()
        {
            return Err(ConfigError::InvalidNamespace(ns.clone()));
        }

        Ok(())
    }
}

///
/// ReservedConfig
/// extra words rejected on top of the built-in q sets
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ReservedConfig {
    pub columns: Vec<String>,
    pub tables: Vec<String>,
}

///
/// TESTS
///
