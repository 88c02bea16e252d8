//! Error types for lookup requests.

use thiserror::Error;

/// Failures of a child-options lookup.
///
/// All variants are handled identically at the form seam: the affected
/// field stays empty-disabled behind an error placeholder, and the user
/// retries by re-selecting the parent value.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Lookup request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Lookup returned HTTP {0}")]
    Status(u16),

    #[error("Malformed lookup response: {0}")]
    Malformed(String),
}
