//! Declarative chain descriptions.
//!
//! A [`ChainSpec`] lists the ordered levels of one dependent-dropdown
//! chain, parent first. Every level but the first carries the lookup used
//! to fetch its options from the value of its immediate predecessor.

/// Server lookup backing one dependent level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupSpec {
    /// Endpoint path relative to the API base URL.
    pub path: String,
    /// Name of the query parameter carrying the parent option id.
    pub parent_param: String,
}

impl LookupSpec {
    pub fn new(path: impl Into<String>, parent_param: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            parent_param: parent_param.into(),
        }
    }
}

/// One level of a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSpec {
    /// Stable field key, e.g. `"regional_unit"`.
    pub key: String,
    /// Display label for the field row.
    pub label: String,
    /// Placeholder shown while a choice is pending.
    pub prompt: String,
    /// Placeholder shown while the predecessor has no value.
    pub waiting: String,
    /// Placeholder shown after a failed lookup.
    pub error_text: String,
    /// Lookup fetching this level's options; `None` on the first level.
    pub lookup: Option<LookupSpec>,
}

/// Ordered description of a dependent-dropdown chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainSpec {
    pub name: String,
    pub levels: Vec<LevelSpec>,
}

impl ChainSpec {
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Whether `level` is the last field of the chain.
    pub fn is_terminal(&self, level: usize) -> bool {
        level + 1 == self.levels.len()
    }

    /// A chain is usable when it has at least two strictly ordered levels
    /// and every dependent level knows its lookup.
    pub fn is_bindable(&self) -> bool {
        self.levels.len() >= 2 && self.levels.iter().skip(1).all(|l| l.lookup.is_some())
    }
}
