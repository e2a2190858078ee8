//! Error types produced by the naming crate.
//!
//! Every transform in the pipeline is total over strings, so the only thing
//! that can go wrong is a configuration the caller should never have built.
//! Those are rejected up front instead of producing a degenerate name.
//!
//! # Examples
//!
//! ```rust
//! use naming::{normalize, NamingConfig, NamingError};
//!
//! let cfg = NamingConfig {
//!     delimiter: String::new(),
//!     ..Default::default()
//! };
//!
//! match normalize("Quarterly Report", &cfg) {
//!     Err(NamingError::InvalidConfig(msg)) => assert!(msg.contains("delimiter")),
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! ```
use thiserror::Error;

/// Errors that can occur while deriving a name.
///
/// Suffix parsing during uniqueness resolution never fails; entries with a
/// suffix that is not a number are simply skipped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NamingError {
    /// The configuration violates a precondition of the pipeline.
    ///
    /// Raised for an empty delimiter applied to non-empty input and for an
    /// empty substitution key.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
