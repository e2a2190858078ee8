//! YAML configuration file support.
//!
//! Lets a deployment describe its naming policy in a file instead of code.
//! Every field is optional; omitted fields fall back to
//! [`NamingConfig::default`].
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "warehouse tables"
//!
//! naming:
//!   max_length: 20
//!   alignment: right        # left | right | edge
//!   casing: kebab           # camel | snake | kebab
//!   delimiter: " "
//!   remove_only: false
//!   no_repeats: true
//!   extra_stop_words: [annual, report]
//!   # stop_words / substitutions replace the built-in tables entirely
//!   substitutions:
//!     "&": and
//!     "#": ""
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use naming::{default_stop_words, default_substitutions, Alignment, Casing, NamingConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Values accepted in the top-level `version` key.
pub const SUPPORTED_VERSIONS: &[&str] = &["1", "1.0"];

/// Why a naming policy file could not be turned into a [`NamingConfig`].
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("cannot read naming config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("naming config is not valid YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("invalid naming section: {0}")]
    Validation(String),

    #[error(
        "unsupported varname config version {0:?}, expected one of {supported:?}",
        supported = SUPPORTED_VERSIONS
    )]
    UnsupportedVersion(String),
}

/// A naming policy file: a version tag, an optional label, and the
/// `naming:` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct VarNameConfig {
    pub version: String,

    /// Free-form label, e.g. the schema or warehouse the names are for
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub naming: NamingYamlConfig,
}

impl VarNameConfig {
    /// Reads and validates a policy file. Read failures carry the path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Parses a policy document and checks its version and `naming:` section.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: VarNameConfig = serde_yaml::from_str(yaml)?;
        if !SUPPORTED_VERSIONS.contains(&config.version.as_str()) {
            return Err(ConfigLoadError::UnsupportedVersion(config.version));
        }
        config.naming.validate()?;
        Ok(config)
    }

    /// Builds the runtime [`NamingConfig`] described by this file.
    pub fn naming_config(&self) -> NamingConfig {
        self.naming.to_naming_config()
    }
}

impl Default for VarNameConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            naming: NamingYamlConfig::default(),
        }
    }
}

/// Naming stage YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingYamlConfig {
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    #[serde(default)]
    pub remove_only: bool,

    #[serde(default = "true_value")]
    pub no_repeats: bool,

    #[serde(default)]
    pub alignment: Alignment,

    #[serde(default)]
    pub casing: Casing,

    /// Replaces the built-in stop words when present
    #[serde(default)]
    pub stop_words: Option<Vec<String>>,

    /// Added on top of whichever stop-word table is in effect
    #[serde(default)]
    pub extra_stop_words: Vec<String>,

    /// Replaces the built-in substitution table when present
    #[serde(default)]
    pub substitutions: Option<BTreeMap<String, String>>,
}

impl NamingYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.delimiter.is_empty() {
            return Err(ConfigLoadError::Validation(
                "naming.delimiter must be non-empty".to_string(),
            ));
        }
        if let Some(substitutions) = &self.substitutions {
            if substitutions.keys().any(|key| key.is_empty()) {
                return Err(ConfigLoadError::Validation(
                    "naming.substitutions keys must be non-empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn to_naming_config(&self) -> NamingConfig {
        let mut stop_words = match &self.stop_words {
            Some(words) => words.iter().cloned().collect(),
            None => default_stop_words(),
        };
        stop_words.extend(self.extra_stop_words.iter().cloned());

        NamingConfig {
            substitutions: self
                .substitutions
                .clone()
                .unwrap_or_else(default_substitutions),
            stop_words,
            delimiter: self.delimiter.clone(),
            max_length: self.max_length,
            remove_only: self.remove_only,
            no_repeats: self.no_repeats,
            alignment: self.alignment,
            casing: self.casing,
        }
    }
}

impl Default for NamingYamlConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            delimiter: default_delimiter(),
            remove_only: false,
            no_repeats: true,
            alignment: Alignment::Left,
            casing: Casing::Snake,
            stop_words: None,
            extra_stop_words: Vec::new(),
            substitutions: None,
        }
    }
}

fn default_max_length() -> usize {
    30
}

fn default_delimiter() -> String {
    " ".to_string()
}

fn true_value() -> bool {
    true
}
