//! Built-in substitution and stop-word tables.
//!
//! These are plain constant slices. [`NamingConfig::default`](crate::NamingConfig::default)
//! copies them into owned collections, so every call works from an explicit
//! configuration value and nothing here is ever mutated.

use std::collections::{BTreeMap, BTreeSet};

/// Default symbol substitutions applied by the character remapper.
///
/// Multi-character operators share prefixes with single-character ones
/// (`<=` and `<`), which is harmless because keys are matched longest-first.
pub const DEFAULT_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("\\", ""),
    // comparison operators
    ("<>", "ne"),
    ("<=", "lte"),
    (">=", "gte"),
    ("~=", "ne"),
    ("!=", "ne"),
    ("^=", "ne"),
    ("=", "eq"),
    ("<", "lt"),
    (">", "gt"),
    // symbols with a spoken form
    ("%", "pct"),
    ("&", "and"),
    ("/", "per"),
    ("US$", "usd"),
    ("$", "usd"),
    // word separators
    ("-", " "),
    ("_", " "),
    // dropped entirely
    (".", ""),
    ("#", ""),
    ("?", ""),
    ("|", ""),
    ("*", ""),
    (",", ""),
    ("(", ""),
    (")", ""),
    (":", ""),
    (";", ""),
    ("'", ""),
    ("\"", ""),
];

/// Default English stop words. Matching is case-insensitive.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can't", "cannot", "could", "couldn't", "did", "didn't", "do", "does", "doesn't",
    "doing", "don't", "down", "during", "each", "few", "for", "from", "further", "had", "hadn't",
    "has", "hasn't", "have", "haven't", "having", "he", "he'd", "he'll", "he's", "her", "here",
    "here's", "hers", "herself", "him", "himself", "his", "how", "how's", "i'd", "i'll", "i'm",
    "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "let's", "more",
    "most", "mustn't", "no", "nor", "not", "of", "off", "on", "once", "only", "or", "other",
    "ought", "our", "ours", "ourselves", "out", "over", "own", "same", "shan't", "she", "she'd",
    "she'll", "she's", "should", "shouldn't", "so", "some", "such", "than", "that", "that's",
    "the", "their", "theirs", "them", "themselves", "then", "there", "there's", "these", "they",
    "they'd", "they'll", "they're", "they've", "this", "those", "through", "to", "too", "under",
    "until", "up", "very", "was", "wasn't", "we'd", "we'll", "we're", "we've", "were", "weren't",
    "what", "what's", "when", "when's", "where", "where's", "which", "while", "who", "who's",
    "whom", "why", "why's", "with", "won't", "would", "wouldn't", "you", "you'd", "you'll",
    "you're", "you've", "your", "yours", "yourself", "yourselves",
];

/// Owned copy of [`DEFAULT_SUBSTITUTIONS`].
pub fn default_substitutions() -> BTreeMap<String, String> {
    DEFAULT_SUBSTITUTIONS
        .iter()
        .map(|(from, to)| ((*from).to_string(), (*to).to_string()))
        .collect()
}

/// Owned copy of [`DEFAULT_STOP_WORDS`].
pub fn default_stop_words() -> BTreeSet<String> {
    DEFAULT_STOP_WORDS.iter().map(|w| (*w).to_string()).collect()
}
