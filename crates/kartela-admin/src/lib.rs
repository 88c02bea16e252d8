//! Kartela Admin — desktop data-entry client for the record registry.
//!
//! Re-exports the form components, chain and toggle contracts, and
//! bootstrap handling for embedding and testing.

pub mod bootstrap;
pub mod chains;
pub mod choices;
pub mod components;
pub mod config;
pub mod state;
pub mod toggles;

/// Form CSS for embedding in host apps.
pub const APP_CSS: &str = include_str!("style.css");
