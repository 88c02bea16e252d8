//! Cascading selection state machine.
//!
//! One [`ChainState`] per chain per form block. The maintained invariant:
//! a descendant field's option list is always consistent with its
//! ancestor's current value. Descendants are reset *before* any lookup is
//! dispatched, and lookup responses pass a per-slot generation gate so a
//! response raced by a newer change is discarded instead of repopulating
//! the now-wrong child.

use crate::chain::{ChainSpec, LookupSpec};
use crate::selection::{OptionId, OptionItem, Selection};

/// Monotonic token tying a lookup response to the change that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Observable state of a chain field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    /// No value, no live choices, not interactive.
    EmptyDisabled,
    /// Options present, awaiting an active user choice.
    EmptyEnabled,
    /// A value is selected.
    PopulatedEnabled,
}

/// Runtime state of one chain level.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSlot {
    pub value: Selection,
    pub options: Vec<OptionItem>,
    pub enabled: bool,
    pub placeholder: String,
    generation: u64,
}

impl FieldSlot {
    pub fn state(&self) -> FieldState {
        if !self.enabled {
            FieldState::EmptyDisabled
        } else if self.value.is_none() {
            FieldState::EmptyEnabled
        } else {
            FieldState::PopulatedEnabled
        }
    }

    pub fn generation(&self) -> Generation {
        Generation(self.generation)
    }
}

/// Prefilled slot contents recovered from the rendered form (bootstrap).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrefilledSlot {
    pub value: Selection,
    pub options: Vec<OptionItem>,
}

/// What the caller must do after a change was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeTicket {
    /// Nothing to fetch: the field emptied, or it was the terminal level.
    NoFetch,
    /// Fetch options for `level`, keyed by the parent's id, and apply the
    /// result under `generation`.
    Fetch {
        level: usize,
        generation: Generation,
        parent: OptionId,
        lookup: LookupSpec,
    },
}

/// Result of applying a lookup response to a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Current,
    /// A newer change already reset the slot; the response was dropped.
    Stale,
}

/// State machine of one dependent-dropdown chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainState {
    spec: ChainSpec,
    slots: Vec<FieldSlot>,
}

impl ChainState {
    /// Bind a chain to (possibly prefilled) form state.
    ///
    /// Returns `None` when the spec is not bindable or the prefill does
    /// not cover every level; the chain simply never activates.
    pub fn bind(spec: ChainSpec, prefilled: &[PrefilledSlot]) -> Option<Self> {
        if !spec.is_bindable() {
            return None;
        }
        if !prefilled.is_empty() && prefilled.len() != spec.levels.len() {
            return None;
        }
        let slots = spec
            .levels
            .iter()
            .enumerate()
            .map(|(i, level)| {
                let pre = prefilled.get(i).cloned().unwrap_or_default();
                FieldSlot {
                    value: pre.value,
                    options: pre.options,
                    enabled: i == 0,
                    placeholder: level.waiting.clone(),
                    generation: 0,
                }
            })
            .collect();
        let mut chain = Self { spec, slots };
        chain.initialize();
        Some(chain)
    }

    /// Bring the chain to a state consistent with its current values.
    ///
    /// Every field up to the first empty one keeps its value and options;
    /// the first empty field becomes the active choice; everything deeper
    /// is reset to its waiting placeholder. Never issues lookups:
    /// prefilled descendants' options are already present. Idempotent.
    pub fn initialize(&mut self) {
        let first_empty = self
            .slots
            .iter()
            .position(|slot| slot.value.is_none())
            .unwrap_or(self.slots.len());
        for i in 0..first_empty {
            self.slots[i].enabled = true;
            self.slots[i].placeholder = self.spec.levels[i].prompt.clone();
        }
        if first_empty < self.slots.len() {
            self.slots[first_empty].enabled = true;
            self.slots[first_empty].placeholder = self.spec.levels[first_empty].prompt.clone();
        }
        self.reset_downstream(first_empty, false);
    }

    /// Record a new value at `level` and reset every deeper field.
    ///
    /// The reset happens before this function returns, so stale downstream
    /// values can never outlive the change that invalidated them. The
    /// ticket tells the caller whether, and under which generation, to
    /// fetch the immediate child's options.
    pub fn begin_change(&mut self, level: usize, value: Selection) -> ChangeTicket {
        let Some(slot) = self.slots.get_mut(level) else {
            return ChangeTicket::NoFetch;
        };
        slot.value = value;
        self.reset_downstream(level, true);

        if self.spec.is_terminal(level) {
            return ChangeTicket::NoFetch;
        }
        let Some(parent) = self.slots[level].value.id().cloned() else {
            return ChangeTicket::NoFetch;
        };
        let child = level + 1;
        let Some(lookup) = self.spec.levels[child].lookup.clone() else {
            return ChangeTicket::NoFetch;
        };
        ChangeTicket::Fetch {
            level: child,
            generation: Generation(self.slots[child].generation),
            parent,
            lookup,
        }
    }

    /// Install fetched options at `level`, unless a newer change already
    /// reset the slot, in which case the stale response is discarded.
    ///
    /// Nothing is pre-selected: the user must actively choose, which in
    /// turn cascades one level further.
    pub fn apply_options(
        &mut self,
        level: usize,
        generation: Generation,
        options: Vec<OptionItem>,
    ) -> Applied {
        let Some(slot) = self.slots.get_mut(level) else {
            return Applied::Stale;
        };
        if slot.generation != generation.0 {
            return Applied::Stale;
        }
        slot.value = Selection::NoSelection;
        slot.options = options;
        slot.enabled = true;
        slot.placeholder = self.spec.levels[level].prompt.clone();
        Applied::Current
    }

    /// Record a failed lookup at `level`: the slot stays empty-disabled
    /// and its placeholder switches to the error text. Same staleness gate
    /// as [`ChainState::apply_options`]. Re-selecting the parent value
    /// retries the fetch.
    pub fn apply_failure(&mut self, level: usize, generation: Generation) -> Applied {
        let Some(slot) = self.slots.get_mut(level) else {
            return Applied::Stale;
        };
        if slot.generation != generation.0 {
            return Applied::Stale;
        }
        slot.value = Selection::NoSelection;
        slot.options.clear();
        slot.enabled = false;
        slot.placeholder = self.spec.levels[level].error_text.clone();
        Applied::Current
    }

    pub fn spec(&self) -> &ChainSpec {
        &self.spec
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[FieldSlot] {
        &self.slots
    }

    pub fn slot(&self, level: usize) -> Option<&FieldSlot> {
        self.slots.get(level)
    }

    fn reset_downstream(&mut self, level: usize, invalidate: bool) {
        for i in (level + 1)..self.slots.len() {
            let slot = &mut self.slots[i];
            slot.value = Selection::NoSelection;
            slot.options.clear();
            slot.enabled = false;
            slot.placeholder = self.spec.levels[i].waiting.clone();
            if invalidate {
                slot.generation += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::LevelSpec;

    fn geography_spec() -> ChainSpec {
        ChainSpec {
            name: "geography".to_string(),
            levels: vec![
                LevelSpec {
                    key: "region".to_string(),
                    label: "Περιφέρεια".to_string(),
                    prompt: "Επιλέξτε περιφέρεια".to_string(),
                    waiting: "Επιλέξτε περιφέρεια".to_string(),
                    error_text: "Σφάλμα φόρτωσης".to_string(),
                    lookup: None,
                },
                LevelSpec {
                    key: "regional_unit".to_string(),
                    label: "Περιφερειακή ενότητα".to_string(),
                    prompt: "Επιλέξτε περιφερειακή ενότητα".to_string(),
                    waiting: "Επιλέξτε πρώτα περιφέρεια".to_string(),
                    error_text: "Σφάλμα φόρτωσης".to_string(),
                    lookup: Some(LookupSpec::new(
                        "records/person/get_regional_units/",
                        "region_id",
                    )),
                },
                LevelSpec {
                    key: "municipality".to_string(),
                    label: "Δήμος".to_string(),
                    prompt: "Επιλέξτε δήμο".to_string(),
                    waiting: "Επιλέξτε πρώτα περιφερειακή ενότητα".to_string(),
                    error_text: "Σφάλμα φόρτωσης".to_string(),
                    lookup: Some(LookupSpec::new(
                        "records/person/get_municipalities/",
                        "unit_id",
                    )),
                },
            ],
        }
    }

    fn blank_chain() -> ChainState {
        ChainState::bind(geography_spec(), &[]).unwrap()
    }

    fn prefilled_chain() -> ChainState {
        let prefilled = vec![
            PrefilledSlot {
                value: Selection::from_raw("9"),
                options: vec![OptionItem::new("9", "Αττική")],
            },
            PrefilledSlot {
                value: Selection::from_raw("91"),
                options: vec![OptionItem::new("91", "Κεντρικός Τομέας")],
            },
            PrefilledSlot {
                value: Selection::from_raw("911"),
                options: vec![OptionItem::new("911", "Αθήνα")],
            },
        ];
        ChainState::bind(geography_spec(), &prefilled).unwrap()
    }

    fn units() -> Vec<OptionItem> {
        vec![
            OptionItem::new("91", "Κεντρικός Τομέας"),
            OptionItem::new("92", "Νότιος Τομέας"),
        ]
    }

    #[test]
    fn bind_rejects_single_level() {
        let mut spec = geography_spec();
        spec.levels.truncate(1);
        assert!(ChainState::bind(spec, &[]).is_none());
    }

    #[test]
    fn bind_rejects_missing_lookup() {
        let mut spec = geography_spec();
        spec.levels[2].lookup = None;
        assert!(ChainState::bind(spec, &[]).is_none());
    }

    #[test]
    fn bind_rejects_partial_prefill() {
        let prefilled = vec![PrefilledSlot::default()];
        assert!(ChainState::bind(geography_spec(), &prefilled).is_none());
    }

    #[test]
    fn blank_bind_starts_with_descendants_disabled() {
        let chain = blank_chain();
        assert_eq!(chain.slot(0).unwrap().state(), FieldState::EmptyEnabled);
        assert_eq!(chain.slot(1).unwrap().state(), FieldState::EmptyDisabled);
        assert_eq!(chain.slot(2).unwrap().state(), FieldState::EmptyDisabled);
        assert_eq!(chain.slot(1).unwrap().placeholder, "Επιλέξτε πρώτα περιφέρεια");
        assert_eq!(
            chain.slot(2).unwrap().placeholder,
            "Επιλέξτε πρώτα περιφερειακή ενότητα"
        );
    }

    // P1: descendants are empty-disabled after the change is recorded and
    // before any lookup result exists.
    #[test]
    fn change_resets_all_descendants_first() {
        let mut chain = prefilled_chain();
        let ticket = chain.begin_change(0, Selection::from_raw("7"));
        for level in 1..chain.len() {
            let slot = chain.slot(level).unwrap();
            assert_eq!(slot.state(), FieldState::EmptyDisabled);
            assert!(slot.options.is_empty());
        }
        match ticket {
            ChangeTicket::Fetch { level, parent, .. } => {
                assert_eq!(level, 1);
                assert_eq!(parent.as_str(), "7");
            }
            ChangeTicket::NoFetch => panic!("expected a fetch ticket"),
        }
    }

    #[test]
    fn region_selection_populates_unit() {
        let mut chain = blank_chain();
        let ticket = chain.begin_change(0, Selection::from_raw("9"));
        let ChangeTicket::Fetch { level, generation, .. } = ticket else {
            panic!("expected a fetch ticket");
        };
        assert_eq!(chain.apply_options(level, generation, units()), Applied::Current);

        let unit = chain.slot(1).unwrap();
        assert_eq!(unit.state(), FieldState::EmptyEnabled);
        assert_eq!(unit.options.len(), 2);
        assert_eq!(unit.placeholder, "Επιλέξτε περιφερειακή ενότητα");
        // The grandchild stays untouched until the user actively chooses.
        let muni = chain.slot(2).unwrap();
        assert_eq!(muni.state(), FieldState::EmptyDisabled);
        assert_eq!(muni.placeholder, "Επιλέξτε πρώτα περιφερειακή ενότητα");
    }

    #[test]
    fn clearing_region_resets_without_fetch() {
        let mut chain = blank_chain();
        let ChangeTicket::Fetch { level, generation, .. } =
            chain.begin_change(0, Selection::from_raw("9"))
        else {
            panic!("expected a fetch ticket");
        };
        chain.apply_options(level, generation, units());

        let ticket = chain.begin_change(0, Selection::NoSelection);
        assert_eq!(ticket, ChangeTicket::NoFetch);
        assert_eq!(chain.slot(1).unwrap().state(), FieldState::EmptyDisabled);
        assert_eq!(chain.slot(2).unwrap().state(), FieldState::EmptyDisabled);
        assert!(chain.slot(1).unwrap().options.is_empty());
    }

    // P2: a response from an older change must never be applied.
    #[test]
    fn stale_response_is_discarded() {
        let mut chain = blank_chain();
        let ChangeTicket::Fetch { level: l_a, generation: g_a, .. } =
            chain.begin_change(0, Selection::from_raw("9"))
        else {
            panic!("expected a fetch ticket");
        };
        let ChangeTicket::Fetch { level: l_b, generation: g_b, .. } =
            chain.begin_change(0, Selection::from_raw("7"))
        else {
            panic!("expected a fetch ticket");
        };

        // The older response arrives late and must be dropped.
        assert_eq!(chain.apply_options(l_a, g_a, units()), Applied::Stale);
        assert_eq!(chain.slot(1).unwrap().state(), FieldState::EmptyDisabled);
        assert!(chain.slot(1).unwrap().options.is_empty());

        let newer = vec![OptionItem::new("71", "Λακωνία")];
        assert_eq!(chain.apply_options(l_b, g_b, newer), Applied::Current);
        assert_eq!(chain.slot(1).unwrap().options.len(), 1);
    }

    #[test]
    fn stale_failure_is_discarded() {
        let mut chain = blank_chain();
        let ChangeTicket::Fetch { level, generation, .. } =
            chain.begin_change(0, Selection::from_raw("9"))
        else {
            panic!("expected a fetch ticket");
        };
        let ChangeTicket::Fetch { level: l_b, generation: g_b, .. } =
            chain.begin_change(0, Selection::from_raw("7"))
        else {
            panic!("expected a fetch ticket");
        };
        assert_eq!(chain.apply_failure(level, generation), Applied::Stale);
        assert_eq!(chain.apply_options(l_b, g_b, units()), Applied::Current);
        assert_eq!(chain.slot(1).unwrap().state(), FieldState::EmptyEnabled);
    }

    // P3: initialize on a consistent prefilled chain changes nothing.
    #[test]
    fn initialize_is_idempotent() {
        let mut chain = prefilled_chain();
        let before = chain.clone();
        chain.initialize();
        assert_eq!(chain, before);
    }

    #[test]
    fn initialize_keeps_prefix_and_resets_after_first_empty() {
        let prefilled = vec![
            PrefilledSlot {
                value: Selection::from_raw("9"),
                options: vec![OptionItem::new("9", "Αττική")],
            },
            PrefilledSlot {
                value: Selection::NoSelection,
                options: units(),
            },
            // Inconsistent leftover from an earlier parent value.
            PrefilledSlot {
                value: Selection::from_raw("911"),
                options: vec![OptionItem::new("911", "Αθήνα")],
            },
        ];
        let chain = ChainState::bind(geography_spec(), &prefilled).unwrap();

        assert_eq!(chain.slot(0).unwrap().state(), FieldState::PopulatedEnabled);
        // The first empty field is the active choice, options kept.
        let unit = chain.slot(1).unwrap();
        assert_eq!(unit.state(), FieldState::EmptyEnabled);
        assert_eq!(unit.options.len(), 2);
        // Everything deeper is reset, stale value included.
        let muni = chain.slot(2).unwrap();
        assert_eq!(muni.state(), FieldState::EmptyDisabled);
        assert!(muni.value.is_none());
        assert!(muni.options.is_empty());
    }

    #[test]
    fn failure_sets_error_placeholder() {
        let mut chain = blank_chain();
        let ChangeTicket::Fetch { level, generation, .. } =
            chain.begin_change(0, Selection::from_raw("9"))
        else {
            panic!("expected a fetch ticket");
        };
        assert_eq!(chain.apply_failure(level, generation), Applied::Current);

        let unit = chain.slot(1).unwrap();
        assert_eq!(unit.state(), FieldState::EmptyDisabled);
        assert_eq!(unit.placeholder, "Σφάλμα φόρτωσης");
        // A fresh parent re-selection issues a new fetch.
        let ticket = chain.begin_change(0, Selection::from_raw("9"));
        assert!(matches!(ticket, ChangeTicket::Fetch { .. }));
    }

    #[test]
    fn terminal_change_issues_no_fetch() {
        let mut chain = prefilled_chain();
        let ticket = chain.begin_change(2, Selection::from_raw("912"));
        assert_eq!(ticket, ChangeTicket::NoFetch);
        assert_eq!(chain.slot(2).unwrap().value.as_raw(), "912");
    }

    #[test]
    fn out_of_range_change_is_a_noop() {
        let mut chain = blank_chain();
        let before = chain.clone();
        assert_eq!(chain.begin_change(9, Selection::from_raw("1")), ChangeTicket::NoFetch);
        assert_eq!(chain, before);
    }
}
