//! Medical-history rows: one ICD-10 chain and disability block each.
//!
//! Rows are added and removed dynamically; every row binds its own chain
//! and toggle state at the moment it appears, so sibling rows can never
//! observe each other's cascades.

use dioxus::prelude::*;
use kartela_core::{CHECKED, ChainState};
use kartela_forms::{
    CascadeSelect, CheckboxField, FieldRow, RowId, RowSet, TextField, apply_toggle,
};

use crate::bootstrap::NeoplasmSeed;
use crate::state::FormContext;
use crate::{chains, toggles};

#[component]
pub fn NeoplasmSection(rows: Vec<NeoplasmSeed>) -> Element {
    let mut set = use_signal(move || RowSet::from_rows(rows.clone()));
    let entries: Vec<(RowId, NeoplasmSeed)> = set
        .read()
        .iter()
        .map(|(id, seed)| (id, seed.clone()))
        .collect();

    rsx! {
        section { class: "form-section",
            h2 { class: "section-title", "Νεοπλάσματα" }
            for (id, seed) in entries {
                NeoplasmRow {
                    key: "{id}",
                    id,
                    seed,
                    on_remove: move |row_id| {
                        set.write().remove(row_id);
                    },
                }
            }
            button {
                class: "add-row",
                onclick: move |_| {
                    set.write().add(NeoplasmSeed::default());
                },
                "+ Προσθήκη νεοπλάσματος"
            }
        }
    }
}

#[component]
fn NeoplasmRow(id: RowId, seed: NeoplasmSeed, on_remove: EventHandler<RowId>) -> Element {
    let ctx = use_context::<FormContext>();
    let lookup = ctx.lookup.read().clone();

    let icd10_seed = seed.icd10.clone();
    let chain = use_signal(move || ChainState::bind(chains::icd10_chain(), &icd10_seed));

    let seed_values = seed.values.clone();
    let mut values = use_signal(move || {
        let mut values = seed_values.clone();
        let controller = if values.is_checked("disability") { CHECKED } else { "" };
        toggles::disability_toggle().outcome(controller).apply(&mut values);
        values
    });

    let disability = values.read().is_checked("disability");
    let outcome = toggles::disability_toggle().outcome(if disability { CHECKED } else { "" });

    rsx! {
        div { class: "subform-row",
            div { class: "subform-header",
                span { class: "subform-title", "Νεόπλασμα" }
                button {
                    class: "remove-row",
                    onclick: move |_| on_remove.call(id),
                    "Αφαίρεση"
                }
            }
            CascadeSelect { chain, lookup }
            div { class: "field-row",
                label { class: "field-label", r#for: "disability", "Αναπηρία" }
                input {
                    id: "disability",
                    class: "field-checkbox",
                    r#type: "checkbox",
                    checked: disability,
                    onchange: move |evt: FormEvent| {
                        let mut vals = values.write();
                        vals.set_checked("disability", evt.checked());
                        let controller = if evt.checked() { CHECKED } else { "" };
                        apply_toggle(&toggles::disability_toggle(), &mut vals, controller);
                    },
                }
            }
            FieldRow {
                visible: outcome.is_visible("certified_disability"),
                label: "Πιστοποιημένη αναπηρία",
                CheckboxField {
                    values,
                    field: "certified_disability",
                    disabled: !outcome.is_visible("certified_disability"),
                }
            }
            FieldRow {
                visible: outcome.is_visible("disability_percentage"),
                label: "Ποσοστό αναπηρίας",
                TextField {
                    values,
                    field: "disability_percentage",
                    input_type: "number",
                    disabled: !outcome.is_visible("disability_percentage"),
                }
            }
        }
    }
}
