//! Title → identifier derivation.
//!
//! Turns free-form titles (`"220 BEA EconData Employment 2010-2015"`) into
//! short, machine-safe names (`bea_econ_data_employment_2010`) and keeps
//! them unique within a session.
//!
//! ## What we do
//!
//! - Recover word boundaries in camelCase and acronym runs
//! - Spell out or drop symbols via a substitution table
//! - Split on a delimiter and drop stop words (and repeats, optionally)
//! - Fit the words into a character budget, keeping the left, right or
//!   both edges of the title
//! - Render as camel, snake or kebab case
//! - Append `_<n>` suffixes to resolve collisions against a caller's set
//!
//! ## Pure function guarantee
//!
//! [`normalize`] has no I/O, no clock-dependent output and no shared state.
//! The default tables are constants copied into each [`NamingConfig`].
//! [`make_unique`] is the only stateful step and it only touches the set you
//! hand it.
//!
//! ## Invariants worth knowing
//!
//! - The character budget counts `char`s of kept words, separators excluded
//! - Output never starts with a leading run of digits or whitespace
//! - Substitution keys are matched longest-first in one scan
//! - A name returned by [`make_unique`] is always inserted into the set

mod config;
mod defaults;
mod error;
mod lexical;
mod pipeline;
mod remap;
mod render;
mod truncate;
mod unique;
mod words;

pub use crate::config::{Alignment, Casing, NamingConfig};
pub use crate::defaults::{
    default_stop_words, default_substitutions, DEFAULT_STOP_WORDS, DEFAULT_SUBSTITUTIONS,
};
pub use crate::error::NamingError;
pub use crate::lexical::{collapse_whitespace, split_compound_words};
pub use crate::pipeline::{normalize, normalize_with_defaults, Normalizer};
pub use crate::remap::{remap_chars, Remapper};
pub use crate::render::render;
pub use crate::truncate::{truncate_words, word_chars};
pub use crate::unique::{make_unique, split_suffix, NameRegistry, SharedNameRegistry};
pub use crate::words::{filter_words, split_words, StopWordFilter};
