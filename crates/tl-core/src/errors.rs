//! Cross-cutting error types for Tradelens.
//!
//! Domain-specific errors (`ConfigError`, `InsightError`) live in their
//! respective crates. `tl-cli` converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Tradelens crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A closed enum was asked to parse a value outside its variant set.
    #[error("Unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: String,
    },

    /// Chart catalog lookup returned no result.
    #[error("Chart not found: {0}")]
    ChartNotFound(String),
}
