//! Global app state using Dioxus signals.

use dioxus::prelude::*;
use kartela_forms::LookupHandle;

use crate::bootstrap::PersonSeed;

/// Top-level app phase.
#[derive(Clone, Debug, PartialEq)]
pub enum AppPhase {
    /// Fetching the form bootstrap.
    Loading,
    /// Form rendered; blank when the bootstrap was unavailable.
    Ready(FormReady),
}

/// Everything the form sections need, produced by the bootstrap step.
#[derive(Clone, Debug, PartialEq)]
pub struct FormReady {
    pub lookup: LookupHandle,
    pub person: PersonSeed,
}

/// Shared form context provided via Dioxus context.
#[derive(Clone, Copy)]
pub struct FormContext {
    pub lookup: Signal<LookupHandle>,
    /// Degraded-mode notice shown above the form, e.g. a failed bootstrap.
    pub banner: Signal<Option<String>>,
}
