//! Conditional visibility wrappers.

use dioxus::prelude::*;
use kartela_core::{FormValues, ToggleOutcome, ToggleSpec};

/// One labeled form row. Hidden rows stay in the tree with
/// `display: none`, mirroring how the server-rendered admin toggles its
/// field lines instead of removing them.
#[component]
pub fn FieldRow(
    #[props(default = true)] visible: bool,
    label: String,
    children: Element,
) -> Element {
    let display = if visible { "block" } else { "none" };
    rsx! {
        div { class: "field-row", style: "display: {display}",
            label { class: "field-label", "{label}" }
            {children}
        }
    }
}

/// Re-evaluate a toggle after its controller changed: clears the values of
/// the fields that just became hidden and returns the new outcome.
pub fn apply_toggle(
    spec: &ToggleSpec,
    values: &mut FormValues,
    controller_value: &str,
) -> ToggleOutcome {
    let outcome = spec.outcome(controller_value);
    outcome.apply(values);
    outcome
}
