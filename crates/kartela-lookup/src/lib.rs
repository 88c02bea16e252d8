//! # Kartela Lookup
//!
//! HTTP client for the child-option lookup endpoints behind Kartela's
//! dependent dropdowns: one GET per refresh, a single query parameter
//! naming the parent id, the anti-forgery token in `X-CSRFToken`, and a
//! bounded timeout. Bodies are a JSON array of `{id, name}` objects or a
//! single-key object wrapping one.

pub mod client;
pub mod error;
pub mod response;

pub use client::{DEFAULT_TIMEOUT, LookupClient, LookupConfig};
pub use error::LookupError;
pub use response::{WireOption, parse_options};
