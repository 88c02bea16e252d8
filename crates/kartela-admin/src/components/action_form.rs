//! Action entry form: call, email, or referral details.

use dioxus::prelude::*;
use kartela_core::FormValues;
use kartela_forms::{ChoiceField, FieldRow, TextField, apply_toggle};

use crate::{choices, toggles};

#[component]
pub fn ActionForm() -> Element {
    let mut values = use_signal(FormValues::new);
    let action_type = values.read().text("action_type").to_string();
    let outcome = toggles::action_toggle().outcome(&action_type);

    rsx! {
        section { class: "form-section",
            h2 { class: "section-title", "Νέα ενέργεια" }
            div { class: "field-row",
                label { class: "field-label", r#for: "action_type", "Τύπος ενέργειας" }
                select {
                    id: "action_type",
                    class: "field-select",
                    value: "{action_type}",
                    onchange: move |evt: FormEvent| {
                        let mut vals = values.write();
                        vals.set_text("action_type", evt.value());
                        apply_toggle(&toggles::action_toggle(), &mut vals, &evt.value());
                    },
                    option { value: "", selected: action_type.is_empty(), "---------" }
                    for (id, label) in choices::action_type_choices() {
                        option { value: "{id}", selected: id == action_type, "{label}" }
                    }
                }
            }
            FieldRow {
                visible: outcome.is_visible("direction"),
                label: "Κατεύθυνση",
                ChoiceField {
                    values,
                    field: "direction",
                    prompt: "---------",
                    choices: choices::direction_choices(),
                    disabled: !outcome.is_visible("direction"),
                }
            }
            FieldRow {
                visible: outcome.is_visible("contact_type"),
                label: "Επικοινωνία με",
                ChoiceField {
                    values,
                    field: "contact_type",
                    prompt: "---------",
                    choices: choices::contact_type_choices(),
                    disabled: !outcome.is_visible("contact_type"),
                }
            }
            FieldRow {
                visible: outcome.is_visible("referral_type"),
                label: "Παραπομπή σε",
                ChoiceField {
                    values,
                    field: "referral_type",
                    prompt: "---------",
                    choices: choices::referral_choices(),
                    disabled: !outcome.is_visible("referral_type"),
                }
            }
            FieldRow { label: "Σημειώσεις",
                TextField { values, field: "notes" }
            }
        }
    }
}
