//! Configuration types for the naming pipeline.
//!
//! This module defines [`NamingConfig`] together with the two policy enums
//! it carries, [`Alignment`] and [`Casing`]. A config is read-only for the
//! duration of a call, cheap to clone, and serializable so it can come from
//! JSON, TOML or YAML.
//!
//! # Examples
//!
//! ## Default Configuration
//!
//! ```rust
//! use naming::{Alignment, Casing, NamingConfig};
//!
//! let config = NamingConfig::default();
//! assert_eq!(config.max_length, 30);
//! assert_eq!(config.delimiter, " ");
//! assert_eq!(config.alignment, Alignment::Left);
//! assert_eq!(config.casing, Casing::Snake);
//! assert!(config.no_repeats);
//! assert!(!config.remove_only);
//! ```
//!
//! ## Keeping The End Of A Title
//!
//! ```rust
//! use naming::{Alignment, Casing, NamingConfig};
//!
//! let config = NamingConfig {
//!     max_length: 20,
//!     alignment: Alignment::Right,
//!     casing: Casing::Kebab,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::defaults::{default_stop_words, default_substitutions};
use crate::error::NamingError;

/// Which part of the word list survives truncation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Keep the leading words, drop the tail.
    #[default]
    Left,
    /// Keep the trailing words, drop the head.
    Right,
    /// Keep both ends, drop the middle.
    Edge,
}

/// Output casing style.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Casing {
    /// `somethingCamelCased`
    Camel,
    /// `something_snake_cased`
    #[default]
    Snake,
    /// `something-kebab-cased`
    Kebab,
}

impl Alignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Right => "right",
            Alignment::Edge => "edge",
        }
    }
}

impl Casing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Casing::Camel => "camel",
            Casing::Snake => "snake",
            Casing::Kebab => "kebab",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Casing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alignment {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Alignment::Left),
            "right" => Ok(Alignment::Right),
            "edge" => Ok(Alignment::Edge),
            other => Err(NamingError::InvalidConfig(format!(
                "unknown alignment '{other}', expected left, right or edge"
            ))),
        }
    }
}

impl FromStr for Casing {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "camel" => Ok(Casing::Camel),
            "snake" => Ok(Casing::Snake),
            "kebab" => Ok(Casing::Kebab),
            other => Err(NamingError::InvalidConfig(format!(
                "unknown casing '{other}', expected camel, snake or kebab"
            ))),
        }
    }
}

/// Configuration for the naming pipeline.
///
/// # Fields
///
/// - `substitutions`: literal substring replacements applied before splitting
/// - `stop_words`: words dropped from the output, compared case-insensitively
/// - `delimiter`: word boundary used when splitting the remapped text
/// - `max_length`: character budget across kept words, separators excluded
/// - `remove_only`: replace every substitution key with `""` instead of its value
/// - `no_repeats`: drop every occurrence of a word after the first
/// - `alignment`: which part of the word list survives truncation
/// - `casing`: how the surviving words are joined
///
/// # Serialization
///
/// Every field has a default, so a partial document is enough:
///
/// ```json
/// {
///   "max_length": 20,
///   "alignment": "right",
///   "casing": "kebab"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NamingConfig {
    /// Literal substring → replacement text.
    ///
    /// Keys are matched longest-first in a single scan, so `<=` wins over
    /// `<` regardless of map order.
    ///
    /// Default: [`DEFAULT_SUBSTITUTIONS`](crate::DEFAULT_SUBSTITUTIONS)
    pub substitutions: BTreeMap<String, String>,

    /// Words excluded from the output.
    ///
    /// Default: [`DEFAULT_STOP_WORDS`](crate::DEFAULT_STOP_WORDS)
    pub stop_words: BTreeSet<String>,

    /// Word boundary. Must be non-empty whenever the input is non-empty.
    ///
    /// Default: `" "`
    pub delimiter: String,

    /// Maximum number of characters summed over the kept words.
    ///
    /// Default: `30`
    pub max_length: usize,

    /// Map every substitution key to the empty string.
    ///
    /// Default: `false`
    pub remove_only: bool,

    /// Keep only the first occurrence of each word (case-insensitive).
    ///
    /// Default: `true`
    pub no_repeats: bool,

    /// Default: [`Alignment::Left`]
    pub alignment: Alignment,

    /// Default: [`Casing::Snake`]
    pub casing: Casing,
}

impl NamingConfig {
    /// Checks the parts of the config that do not depend on the input text.
    ///
    /// An empty delimiter is only rejected once there is non-empty input to
    /// split, see [`Normalizer::normalize`](crate::Normalizer::normalize).
    pub fn validate(&self) -> Result<(), NamingError> {
        if self.substitutions.keys().any(|key| key.is_empty()) {
            return Err(NamingError::InvalidConfig(
                "substitution keys must be non-empty".into(),
            ));
        }
        Ok(())
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            substitutions: default_substitutions(),
            stop_words: default_stop_words(),
            delimiter: " ".to_string(),
            max_length: 30,
            remove_only: false,
            no_repeats: true,
            alignment: Alignment::Left,
            casing: Casing::Snake,
        }
    }
}
