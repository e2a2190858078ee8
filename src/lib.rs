//! Umbrella crate for varname.
//!
//! Re-exports the naming pipeline from the `naming` crate and adds the
//! pieces a calling application usually wants around it: YAML
//! configuration loading and batch helpers that normalize a run of titles
//! and keep the resulting names unique within one session.

pub mod config;

pub use config::{ConfigLoadError, NamingYamlConfig, VarNameConfig};
pub use naming::{
    collapse_whitespace, default_stop_words, default_substitutions, filter_words, make_unique,
    normalize, normalize_with_defaults, remap_chars, render, split_compound_words, split_suffix,
    split_words, truncate_words, word_chars, Alignment, Casing, NameRegistry, NamingConfig,
    NamingError, Normalizer, Remapper, SharedNameRegistry, StopWordFilter, DEFAULT_STOP_WORDS,
    DEFAULT_SUBSTITUTIONS,
};

use tracing::{info, warn};

/// Normalizes `title` and reserves the result in `registry`.
pub fn derive_unique_name(
    title: &str,
    normalizer: &Normalizer,
    registry: &mut NameRegistry,
) -> Result<String, NamingError> {
    let candidate = normalizer.normalize(title)?;
    Ok(registry.make_unique(&candidate))
}

/// Derives one unique name per title, in order.
///
/// Stops at the first title the normalizer rejects; names allocated before
/// that point stay in `registry`.
pub fn derive_unique_names<I, S>(
    titles: I,
    normalizer: &Normalizer,
    registry: &mut NameRegistry,
) -> Result<Vec<String>, NamingError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut names = Vec::new();
    for title in titles {
        match derive_unique_name(title.as_ref(), normalizer, registry) {
            Ok(name) => names.push(name),
            Err(err) => {
                warn!(error = %err, derived = names.len(), "derive_names_failure");
                return Err(err);
            }
        }
    }
    info!(
        derived = names.len(),
        registry_size = registry.len(),
        "derive_names_success"
    );
    Ok(names)
}
