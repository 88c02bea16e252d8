//! Option and selection model for dependent dropdown fields.
//!
//! Options are produced exclusively by the server lookup endpoints or the
//! form bootstrap; the client never invents one. The "none selected"
//! placeholder is a rendering concern of the field, not an [`OptionItem`].

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Opaque identifier of a server-provided option.
///
/// Lookup endpoints serialize ids as numbers, bootstrap payloads as
/// strings; both are kept in string form and compared verbatim.
#[derive(Debug, Clone, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionId(String);

impl OptionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OptionId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

/// A single selectable option as served by a lookup endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    pub id: OptionId,
    pub label: String,
}

impl OptionItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: OptionId::new(id),
            label: label.into(),
        }
    }
}

/// Current value of a selection field.
///
/// The empty string is the wire encoding of "nothing selected"; it is made
/// explicit here so downstream logic never tests string truthiness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    NoSelection,
    Selected(OptionId),
}

impl Selection {
    /// Parse a raw `<select>` value, mapping the empty string to
    /// [`Selection::NoSelection`].
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            Self::NoSelection
        } else {
            Self::Selected(OptionId::new(raw))
        }
    }

    pub fn id(&self) -> Option<&OptionId> {
        match self {
            Self::NoSelection => None,
            Self::Selected(id) => Some(id),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::NoSelection)
    }

    /// Wire form: the selected id, or the empty string.
    pub fn as_raw(&self) -> &str {
        match self {
            Self::NoSelection => "",
            Self::Selected(id) => id.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_no_selection() {
        assert_eq!(Selection::from_raw(""), Selection::NoSelection);
        assert!(Selection::from_raw("").is_none());
    }

    #[test]
    fn raw_round_trip() {
        let sel = Selection::from_raw("9");
        assert_eq!(sel.as_raw(), "9");
        assert_eq!(sel.id(), Some(&OptionId::new("9")));
        assert_eq!(Selection::NoSelection.as_raw(), "");
    }
}
