//! Cascading dropdown component.
//!
//! One [`CascadeSelect`] renders every level of a dependent chain and
//! drives its [`ChainState`] through the lookup client: a change resets
//! all descendants, then fetches the immediate child's options; responses
//! raced by a newer change are discarded by the generation gate. A chain
//! whose signal holds `None` (bind skipped) renders nothing.

use std::sync::Arc;

use dioxus::prelude::*;
use kartela_core::{Applied, ChainState, ChangeTicket, Selection};
use kartela_lookup::LookupClient;

/// Shared handle to the lookup client, cheap to clone into components.
#[derive(Clone)]
pub struct LookupHandle {
    pub client: Arc<LookupClient>,
}

impl LookupHandle {
    pub fn new(client: LookupClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

impl std::fmt::Debug for LookupHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupHandle").finish_non_exhaustive()
    }
}

impl PartialEq for LookupHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.client, &other.client)
    }
}

/// All `<select>` rows of one dependent chain.
#[component]
pub fn CascadeSelect(chain: Signal<Option<ChainState>>, lookup: LookupHandle) -> Element {
    let Some(levels) = chain.read().as_ref().map(ChainState::len) else {
        return rsx! {};
    };
    rsx! {
        for level in 0..levels {
            ChainLevel { chain, lookup: lookup.clone(), level }
        }
    }
}

#[component]
fn ChainLevel(chain: Signal<Option<ChainState>>, lookup: LookupHandle, level: usize) -> Element {
    let guard = chain.read();
    let Some(state) = guard.as_ref() else {
        return rsx! {};
    };
    let Some(slot) = state.slot(level) else {
        return rsx! {};
    };
    let spec_level = &state.spec().levels[level];
    let key = spec_level.key.clone();
    let label = spec_level.label.clone();
    let value = slot.value.as_raw().to_string();
    let enabled = slot.enabled;
    let placeholder = slot.placeholder.clone();
    let options = slot.options.clone();
    drop(guard);

    rsx! {
        div { class: "field-row",
            label { class: "field-label", r#for: "{key}", "{label}" }
            select {
                id: "{key}",
                class: "field-select",
                disabled: !enabled,
                value: "{value}",
                onchange: move |evt: FormEvent| {
                    change_level(chain, lookup.clone(), level, evt.value());
                },
                option { value: "", disabled: true, selected: value.is_empty(), "{placeholder}" }
                for opt in options {
                    option {
                        key: "{opt.id}",
                        value: "{opt.id}",
                        selected: opt.id.as_str() == value,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}

/// Record a change at `level` and, when the ticket asks for it, fetch and
/// apply the child's options. A failure stays inside the chain: the child
/// shows its error placeholder and the rest of the form is untouched.
fn change_level(
    mut chain: Signal<Option<ChainState>>,
    lookup: LookupHandle,
    level: usize,
    raw: String,
) {
    let ticket = {
        let mut guard = chain.write();
        let Some(state) = guard.as_mut() else {
            return;
        };
        state.begin_change(level, Selection::from_raw(&raw))
    };
    let ChangeTicket::Fetch {
        level: child,
        generation,
        parent,
        lookup: spec,
    } = ticket
    else {
        return;
    };
    let chain_name = chain
        .read()
        .as_ref()
        .map(|state| state.spec().name.clone())
        .unwrap_or_default();

    spawn(async move {
        match lookup.client.child_options(&spec, &parent).await {
            Ok(options) => {
                let applied = chain
                    .write()
                    .as_mut()
                    .map(|state| state.apply_options(child, generation, options));
                if applied == Some(Applied::Stale) {
                    tracing::debug!(chain = %chain_name, level = child, "discarded stale lookup response");
                }
            }
            Err(err) => {
                tracing::warn!(chain = %chain_name, level = child, error = %err, "lookup failed");
                if let Some(state) = chain.write().as_mut() {
                    state.apply_failure(child, generation);
                }
            }
        }
    });
}
