//! Form bootstrap — the server payload that opens a form.
//!
//! The bootstrap carries the anti-forgery token plus, when an existing
//! record is being edited, the prefilled field values and the option
//! lists of every already-selected chain level. Chains are initialized
//! from this data without issuing lookups.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

use kartela_core::{FormValues, PrefilledSlot, Selection};
use kartela_lookup::WireOption;

use crate::config::AppConfig;

/// Failures while opening the form.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Bootstrap request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Bootstrap returned HTTP {0}")]
    Status(u16),

    #[error("Malformed bootstrap payload: {0}")]
    Malformed(String),
}

/// Wire form of the bootstrap payload.
#[derive(Debug, Clone, Deserialize)]
pub struct FormBootstrap {
    pub csrf_token: String,
    #[serde(default)]
    pub person: Option<PersonPrefill>,
}

/// Wire form of one chain level: current value plus the options the
/// server already rendered for it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlotPrefill {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub options: Vec<WireOption>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonPrefill {
    #[serde(default)]
    pub values: HashMap<String, String>,
    #[serde(default)]
    pub checks: HashMap<String, bool>,
    #[serde(default)]
    pub geography: Vec<SlotPrefill>,
    #[serde(default)]
    pub neoplasms: Vec<NeoplasmPrefill>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NeoplasmPrefill {
    #[serde(default)]
    pub values: HashMap<String, String>,
    #[serde(default)]
    pub checks: HashMap<String, bool>,
    #[serde(default)]
    pub icd10: Vec<SlotPrefill>,
}

/// Domain form of the bootstrap, ready for binding.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSeed {
    pub csrf_token: String,
    pub person: PersonSeed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PersonSeed {
    pub values: FormValues,
    pub geography: Vec<PrefilledSlot>,
    pub neoplasms: Vec<NeoplasmSeed>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NeoplasmSeed {
    pub values: FormValues,
    pub icd10: Vec<PrefilledSlot>,
}

impl FormSeed {
    /// A blank form with no token; lookups will fail until the server is
    /// reachable again, which is exactly the degraded mode we want.
    pub fn blank() -> Self {
        Self {
            csrf_token: String::new(),
            person: PersonSeed::default(),
        }
    }
}

impl FormBootstrap {
    pub fn into_seed(self) -> Result<FormSeed, BootstrapError> {
        let person = match self.person {
            Some(prefill) => PersonSeed {
                values: collect_values(&prefill.values, &prefill.checks),
                geography: convert_slots(prefill.geography)?,
                neoplasms: prefill
                    .neoplasms
                    .into_iter()
                    .map(|row| {
                        Ok(NeoplasmSeed {
                            values: collect_values(&row.values, &row.checks),
                            icd10: convert_slots(row.icd10)?,
                        })
                    })
                    .collect::<Result<_, BootstrapError>>()?,
            },
            None => PersonSeed::default(),
        };
        Ok(FormSeed {
            csrf_token: self.csrf_token,
            person,
        })
    }
}

fn collect_values(values: &HashMap<String, String>, checks: &HashMap<String, bool>) -> FormValues {
    let mut out = FormValues::new();
    for (key, value) in values {
        out.set_text(key.clone(), value.clone());
    }
    for (key, checked) in checks {
        out.set_checked(key.clone(), *checked);
    }
    out
}

fn convert_slots(slots: Vec<SlotPrefill>) -> Result<Vec<PrefilledSlot>, BootstrapError> {
    slots
        .into_iter()
        .map(|slot| {
            let options = slot
                .options
                .into_iter()
                .map(|option| {
                    option
                        .into_item()
                        .map_err(|err| BootstrapError::Malformed(err.to_string()))
                })
                .collect::<Result<_, _>>()?;
            Ok(PrefilledSlot {
                value: Selection::from_raw(&slot.value),
                options,
            })
        })
        .collect()
}

/// Fetch the form bootstrap for the configured record.
pub async fn fetch_bootstrap(config: &AppConfig) -> Result<FormBootstrap, BootstrapError> {
    let http = reqwest::Client::builder()
        .timeout(config.lookup_timeout)
        .build()?;
    let base = config.api_url.trim_end_matches('/');
    let url = match &config.record {
        Some(id) => format!("{base}/records/person/{id}/bootstrap/"),
        None => format!("{base}/records/person/bootstrap/"),
    };
    tracing::debug!(%url, "fetching form bootstrap");

    let response = http.get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(BootstrapError::Status(status.as_u16()));
    }
    response
        .json::<FormBootstrap>()
        .await
        .map_err(|err| BootstrapError::Malformed(err.to_string()))
}
