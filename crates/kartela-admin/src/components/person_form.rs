//! Person form: identity fields, geography chain, employment section.

use dioxus::prelude::*;
use kartela_core::{ChainState, FormValues};
use kartela_forms::{CascadeSelect, CheckboxField, ChoiceField, FieldRow, TextField, apply_toggle};

use crate::bootstrap::PersonSeed;
use crate::state::FormContext;
use crate::{chains, choices, toggles};

#[component]
pub fn PersonForm(seed: PersonSeed) -> Element {
    let ctx = use_context::<FormContext>();
    let lookup = ctx.lookup.read().clone();

    let geography_seed = seed.geography.clone();
    let chain = use_signal(move || ChainState::bind(chains::geography_chain(), &geography_seed));

    // Hidden employment fields are cleared once up front, so a prefill
    // that disagrees with its own status can never be submitted.
    let seed_values = seed.values.clone();
    let values = use_signal(move || {
        let mut values = seed_values.clone();
        let status = values.text("status").to_string();
        toggles::employment_toggle().outcome(&status).apply(&mut values);
        values
    });

    rsx! {
        section { class: "form-section",
            h2 { class: "section-title", "Στοιχεία ωφελούμενου" }
            FieldRow { label: "Όνομα",
                TextField { values, field: "first_name" }
            }
            FieldRow { label: "Επώνυμο",
                TextField { values, field: "last_name" }
            }
        }
        section { class: "form-section",
            h2 { class: "section-title", "Γεωγραφικά στοιχεία" }
            CascadeSelect { chain, lookup }
        }
        EmploymentSection { values }
    }
}

#[component]
fn EmploymentSection(values: Signal<FormValues>) -> Element {
    let mut values = values;
    let status = values.read().text("status").to_string();
    let outcome = toggles::employment_toggle().outcome(&status);

    rsx! {
        section { class: "form-section",
            h2 { class: "section-title", "Εργασιακή κατάσταση" }
            div { class: "field-row",
                label { class: "field-label", r#for: "status", "Εργασιακή κατάσταση" }
                select {
                    id: "status",
                    class: "field-select",
                    value: "{status}",
                    onchange: move |evt: FormEvent| {
                        let mut vals = values.write();
                        vals.set_text("status", evt.value());
                        apply_toggle(&toggles::employment_toggle(), &mut vals, &evt.value());
                    },
                    option { value: "", selected: status.is_empty(), "---------" }
                    for (id, label) in choices::status_choices() {
                        option { value: "{id}", selected: id == status, "{label}" }
                    }
                }
            }

            FieldRow {
                visible: outcome.is_visible("unemployment_card"),
                label: "Κάρτα ανεργίας",
                CheckboxField {
                    values,
                    field: "unemployment_card",
                    disabled: !outcome.is_visible("unemployment_card"),
                }
            }
            FieldRow {
                visible: outcome.is_visible("unemployment_registration_date"),
                label: "Ημερομηνία εγγραφής ΟΑΕΔ",
                TextField {
                    values,
                    field: "unemployment_registration_date",
                    input_type: "date",
                    disabled: !outcome.is_visible("unemployment_registration_date"),
                }
            }
            FieldRow {
                visible: outcome.is_visible("profession"),
                label: "Επάγγελμα",
                TextField {
                    values,
                    field: "profession",
                    disabled: !outcome.is_visible("profession"),
                }
            }
            FieldRow {
                visible: outcome.is_visible("specialization"),
                label: "Ειδικότητα",
                TextField {
                    values,
                    field: "specialization",
                    disabled: !outcome.is_visible("specialization"),
                }
            }
            FieldRow {
                visible: outcome.is_visible("employment_type"),
                label: "Εργασιακή σχέση",
                ChoiceField {
                    values,
                    field: "employment_type",
                    prompt: "---------",
                    choices: choices::employment_type_choices(),
                    disabled: !outcome.is_visible("employment_type"),
                }
            }
            FieldRow {
                visible: outcome.is_visible("employer_name"),
                label: "Εργοδότης",
                TextField {
                    values,
                    field: "employer_name",
                    disabled: !outcome.is_visible("employer_name"),
                }
            }
            FieldRow {
                visible: outcome.is_visible("employer_legal_form"),
                label: "Νομική μορφή εργοδότη",
                TextField {
                    values,
                    field: "employer_legal_form",
                    disabled: !outcome.is_visible("employer_legal_form"),
                }
            }
            FieldRow {
                visible: outcome.is_visible("hire_date"),
                label: "Ημερομηνία πρόσληψης",
                TextField {
                    values,
                    field: "hire_date",
                    input_type: "date",
                    disabled: !outcome.is_visible("hire_date"),
                }
            }
            FieldRow {
                visible: outcome.is_visible("work_schedule"),
                label: "Μορφή απασχόλησης",
                ChoiceField {
                    values,
                    field: "work_schedule",
                    prompt: "---------",
                    choices: choices::work_schedule_choices(),
                    disabled: !outcome.is_visible("work_schedule"),
                }
            }
            FieldRow {
                visible: outcome.is_visible("contract_type"),
                label: "Είδος σύμβασης",
                ChoiceField {
                    values,
                    field: "contract_type",
                    prompt: "---------",
                    choices: choices::contract_type_choices(),
                    disabled: !outcome.is_visible("contract_type"),
                }
            }
        }
    }
}
