use std::time::Instant;

use tracing::{debug, warn, Level};

use crate::config::NamingConfig;
use crate::error::NamingError;
use crate::lexical::split_compound_words;
use crate::remap::Remapper;
use crate::render::render;
use crate::truncate::truncate_words;
use crate::words::{split_words, StopWordFilter};

/// A validated, precompiled [`NamingConfig`].
///
/// Building one compiles the substitution table and lowercases the stop
/// words. Reuse it when deriving many names with the same settings; it is
/// `Send + Sync` and never mutated by [`Normalizer::normalize`].
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: NamingConfig,
    remapper: Remapper,
    stop_words: StopWordFilter,
}

impl Normalizer {
    pub fn new(cfg: &NamingConfig) -> Result<Self, NamingError> {
        if let Err(err) = cfg.validate() {
            warn!(error = %err, "naming_config_rejected");
            return Err(err);
        }
        let remapper = Remapper::new(&cfg.substitutions, cfg.remove_only)?;
        let stop_words = StopWordFilter::new(&cfg.stop_words);
        Ok(Self {
            config: cfg.clone(),
            remapper,
            stop_words,
        })
    }

    pub fn config(&self) -> &NamingConfig {
        &self.config
    }

    /// Runs the full pipeline: compound splitting, remapping, tokenizing,
    /// filtering, truncation and rendering.
    pub fn normalize(&self, text: &str) -> Result<String, NamingError> {
        let start = Instant::now();
        let cfg = &self.config;

        if cfg.delimiter.is_empty() && !text.is_empty() {
            let err = NamingError::InvalidConfig("delimiter must be non-empty".into());
            warn!(error = %err, input_len = text.len(), "naming_config_rejected");
            return Err(err);
        }

        let span = tracing::span!(
            Level::DEBUG,
            "naming.normalize",
            alignment = %cfg.alignment,
            casing = %cfg.casing,
            max_length = cfg.max_length
        );
        let _guard = span.enter();

        let spaced = split_compound_words(text);
        let remapped = self.remapper.apply(&spaced);
        let words = split_words(&remapped, &cfg.delimiter);
        let kept = self.stop_words.filter(&words, cfg.no_repeats);
        let truncated = truncate_words(&kept, cfg.max_length, cfg.alignment);
        let name = render(&truncated, cfg.casing);

        debug!(
            input_len = text.len(),
            words = words.len(),
            kept = kept.len(),
            truncated = truncated.len(),
            output_len = name.len(),
            elapsed_micros = start.elapsed().as_micros(),
            "naming_success"
        );
        Ok(name)
    }
}

/// Derives an identifier from `text` using `cfg`.
///
/// Compiles the config on every call; prefer [`Normalizer`] in loops.
///
/// ```rust
/// use naming::{normalize, NamingConfig};
///
/// let name = normalize("220 BEA EconData Employment 2010-2015", &NamingConfig::default())
///     .expect("default config is valid");
/// assert_eq!(name, "bea_econ_data_employment_2010");
/// ```
pub fn normalize(text: &str, cfg: &NamingConfig) -> Result<String, NamingError> {
    Normalizer::new(cfg)?.normalize(text)
}

/// Same as [`normalize`] with [`NamingConfig::default`].
pub fn normalize_with_defaults(text: &str) -> Result<String, NamingError> {
    normalize(text, &NamingConfig::default())
}
