//! Shared form components for Kartela applications.
//!
//! Provides the cascading dropdown component, conditional-visibility row
//! wrappers, value-bound field widgets, and the dynamic subform row set.

pub mod cascade;
pub mod conditional;
pub mod fields;
pub mod subform;

pub use cascade::{CascadeSelect, LookupHandle};
pub use conditional::{FieldRow, apply_toggle};
pub use fields::{CheckboxField, ChoiceField, TextField};
pub use subform::{RowId, RowSet};
