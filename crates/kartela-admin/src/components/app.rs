//! Root app component with bootstrap-on-mount.

use dioxus::prelude::*;
use kartela_forms::LookupHandle;
use kartela_lookup::{LookupClient, LookupConfig};

use crate::bootstrap::{self, FormSeed};
use crate::config::AppConfig;
use crate::state::{AppPhase, FormContext, FormReady};

const BOOTSTRAP_FAILED: &str = "Η φόρτωση της καρτέλας απέτυχε — η φόρμα ξεκινά κενή.";

/// Root application component.
#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let mut phase = use_signal(|| AppPhase::Loading);
    let mut banner = use_signal(|| None::<String>);

    // Fetch the bootstrap on mount; a failure degrades to a blank form
    // behind a notice instead of blocking data entry.
    let boot_config = config.clone();
    use_effect(move || {
        let config = boot_config.clone();
        spawn(async move {
            let seed = match bootstrap::fetch_bootstrap(&config).await {
                Ok(payload) => match payload.into_seed() {
                    Ok(seed) => seed,
                    Err(err) => {
                        tracing::warn!(error = %err, "bootstrap payload unusable, starting blank");
                        banner.set(Some(BOOTSTRAP_FAILED.to_string()));
                        FormSeed::blank()
                    }
                },
                Err(err) => {
                    tracing::warn!(error = %err, "bootstrap unavailable, starting blank");
                    banner.set(Some(BOOTSTRAP_FAILED.to_string()));
                    FormSeed::blank()
                }
            };

            match LookupClient::new(
                LookupConfig::new(&config.api_url, &seed.csrf_token)
                    .with_timeout(config.lookup_timeout),
            ) {
                Ok(client) => {
                    phase.set(AppPhase::Ready(FormReady {
                        lookup: LookupHandle::new(client),
                        person: seed.person,
                    }));
                }
                Err(err) => {
                    tracing::error!(error = %err, "lookup client failed to build");
                    banner.set(Some("Εσωτερικό σφάλμα εκκίνησης.".to_string()));
                }
            }
        });
    });

    let current = phase.read().clone();
    match current {
        AppPhase::Loading => rsx! {
            div { class: "loading-screen",
                if let Some(notice) = banner.read().clone() {
                    div { class: "banner", "{notice}" }
                }
                div { class: "loading-text", "Φόρτωση..." }
            }
        },
        AppPhase::Ready(ready) => rsx! {
            MainLayout { ready, banner }
        },
    }
}

/// Main form layout with shared context.
#[component]
fn MainLayout(ready: FormReady, banner: Signal<Option<String>>) -> Element {
    use_context_provider(|| FormContext {
        lookup: Signal::new(ready.lookup.clone()),
        banner,
    });

    let notice = banner.read().clone();

    rsx! {
        div { class: "app-shell",
            header { class: "app-header",
                h1 { "Καρτέλα Ωφελούμενου" }
            }
            if let Some(notice) = notice {
                div { class: "banner", "{notice}" }
            }
            main { class: "form-main",
                super::person_form::PersonForm { seed: ready.person.clone() }
                super::neoplasm_form::NeoplasmSection { rows: ready.person.neoplasms.clone() }
                super::action_form::ActionForm {}
            }
        }
    }
}
