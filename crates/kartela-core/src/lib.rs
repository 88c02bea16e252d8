//! # Kartela Core
//!
//! Domain model and state machines for Kartela's dependent form fields.
//!
//! Nothing in this crate touches the network or a UI toolkit: it holds the
//! pieces every form shares and that need exhaustive testing.
//!
//! ## Key Types
//!
//! - [`ChainSpec`]: declarative description of a dependent-dropdown chain
//! - [`ChainState`]: the cascading selection state machine, with per-slot
//!   generation tokens that discard stale lookup responses
//! - [`Selection`]: explicit "nothing selected" value (no empty-string
//!   truthiness checks)
//! - [`ToggleSpec`]: conditional field visibility rules with type-correct
//!   clearing of hidden fields

pub mod chain;
pub mod selection;
pub mod state;
pub mod toggle;

// Re-export main types
pub use chain::*;
pub use selection::*;
pub use state::*;
pub use toggle::*;
