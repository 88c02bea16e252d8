//! Conditional field visibility.
//!
//! A [`ToggleSpec`] maps the discrete value of one controlling field to
//! the subset of managed fields that stay visible. Hidden fields are
//! cleared type-correctly, so disabled data never reaches submission.

use std::collections::{HashMap, HashSet};

/// Controller value representing a checked checkbox controller.
pub const CHECKED: &str = "checked";

/// Value kind of a managed field; decides how clearing works.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Checkbox,
    Text,
    Select,
    Date,
    Number,
}

/// One field governed by a toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedField {
    pub key: String,
    pub kind: FieldKind,
}

impl ManagedField {
    pub fn new(key: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }
}

/// Maps one controller value to the fields visible under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleRule {
    pub when: String,
    pub show: Vec<String>,
}

impl ToggleRule {
    pub fn new(when: impl Into<String>, show: &[&str]) -> Self {
        Self {
            when: when.into(),
            show: show.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Conditional-visibility contract for one controlling field.
///
/// Controller values with no matching rule (including the empty value)
/// hide every managed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleSpec {
    pub controller: String,
    pub managed: Vec<ManagedField>,
    pub rules: Vec<ToggleRule>,
}

impl ToggleSpec {
    /// Visible set and clear-list for the controller's current value.
    pub fn outcome(&self, controller_value: &str) -> ToggleOutcome {
        let visible: HashSet<&str> = self
            .rules
            .iter()
            .filter(|rule| rule.when == controller_value)
            .flat_map(|rule| rule.show.iter().map(String::as_str))
            .collect();
        let hidden = self
            .managed
            .iter()
            .filter(|field| !visible.contains(field.key.as_str()))
            .cloned()
            .collect();
        ToggleOutcome {
            visible: visible.into_iter().map(str::to_string).collect(),
            hidden,
        }
    }

    /// Every rule must reference managed fields only.
    pub fn is_consistent(&self) -> bool {
        let managed: HashSet<&str> = self.managed.iter().map(|f| f.key.as_str()).collect();
        self.rules
            .iter()
            .all(|rule| rule.show.iter().all(|key| managed.contains(key.as_str())))
    }
}

/// Result of evaluating a [`ToggleSpec`] against a controller value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub visible: Vec<String>,
    pub hidden: Vec<ManagedField>,
}

impl ToggleOutcome {
    pub fn is_visible(&self, key: &str) -> bool {
        self.visible.iter().any(|k| k == key)
    }

    /// Clear the values of every hidden field: checkboxes to unchecked,
    /// everything else to empty.
    pub fn apply(&self, values: &mut FormValues) {
        for field in &self.hidden {
            values.clear(field);
        }
    }
}

/// Current values of a form's managed fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(HashMap<String, FieldValue>);

/// A managed field's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Checked(bool),
    Text(String),
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), FieldValue::Text(value.into()));
    }

    pub fn set_checked(&mut self, key: impl Into<String>, checked: bool) {
        self.0.insert(key.into(), FieldValue::Checked(checked));
    }

    pub fn text(&self, key: &str) -> &str {
        match self.0.get(key) {
            Some(FieldValue::Text(value)) => value,
            _ => "",
        }
    }

    pub fn is_checked(&self, key: &str) -> bool {
        matches!(self.0.get(key), Some(FieldValue::Checked(true)))
    }

    fn clear(&mut self, field: &ManagedField) {
        let cleared = match field.kind {
            FieldKind::Checkbox => FieldValue::Checked(false),
            _ => FieldValue::Text(String::new()),
        };
        self.0.insert(field.key.clone(), cleared);
    }
}
