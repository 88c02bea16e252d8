//! Value-bound field widgets.
//!
//! Each widget reads and writes one managed field of a [`FormValues`]
//! signal, so conditional clearing and user input go through the same
//! state.

use dioxus::prelude::*;
use kartela_core::FormValues;

/// Text-like input (`text`, `date`, `number`) bound to a managed field.
#[component]
pub fn TextField(
    values: Signal<FormValues>,
    field: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
) -> Element {
    let mut values = values;
    let value = values.read().text(&field).to_string();
    rsx! {
        input {
            id: "{field}",
            class: "field-input",
            r#type: "{input_type}",
            disabled,
            value: "{value}",
            oninput: move |evt: FormEvent| {
                values.write().set_text(field.clone(), evt.value());
            },
        }
    }
}

/// Checkbox bound to a managed field.
#[component]
pub fn CheckboxField(
    values: Signal<FormValues>,
    field: String,
    #[props(default = false)] disabled: bool,
) -> Element {
    let mut values = values;
    let checked = values.read().is_checked(&field);
    rsx! {
        input {
            id: "{field}",
            class: "field-checkbox",
            r#type: "checkbox",
            disabled,
            checked,
            onchange: move |evt: FormEvent| {
                values.write().set_checked(field.clone(), evt.checked());
            },
        }
    }
}

/// Select with a fixed `(value, label)` choice list, bound to a managed
/// field. The leading empty option keeps "no choice" expressible.
#[component]
pub fn ChoiceField(
    values: Signal<FormValues>,
    field: String,
    prompt: String,
    choices: Vec<(String, String)>,
    #[props(default = false)] disabled: bool,
) -> Element {
    let mut values = values;
    let value = values.read().text(&field).to_string();
    rsx! {
        select {
            id: "{field}",
            class: "field-select",
            disabled,
            value: "{value}",
            onchange: move |evt: FormEvent| {
                values.write().set_text(field.clone(), evt.value());
            },
            option { value: "", selected: value.is_empty(), "{prompt}" }
            for (id, label) in choices {
                option { value: "{id}", selected: id == value, "{label}" }
            }
        }
    }
}
