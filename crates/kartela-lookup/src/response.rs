//! Wire format of lookup responses.
//!
//! Endpoints return a JSON array of `{id, name}` objects; the legacy
//! geography API wraps the array in a single-key object such as
//! `{"units": [...]}`. Ids arrive as numbers or strings.

use kartela_core::{OptionId, OptionItem};
use serde::Deserialize;
use serde_json::Value;

use crate::error::LookupError;

/// One option as serialized by the lookup endpoints and the bootstrap.
#[derive(Debug, Clone, Deserialize)]
pub struct WireOption {
    pub id: Value,
    pub name: String,
}

impl WireOption {
    /// Convert to the domain option, stringifying numeric ids.
    pub fn into_item(self) -> Result<OptionItem, LookupError> {
        let id = match self.id {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            other => {
                return Err(LookupError::Malformed(format!(
                    "option id is neither string nor number: {other}"
                )));
            }
        };
        Ok(OptionItem {
            id: OptionId::new(id),
            label: self.name,
        })
    }
}

/// Parse a lookup body: a bare array of options, or an object wrapping
/// exactly one such array. Anything else is malformed.
pub fn parse_options(body: Value) -> Result<Vec<OptionItem>, LookupError> {
    let array = match body {
        Value::Array(_) => body,
        Value::Object(map) => {
            let mut arrays = map.into_iter().filter(|(_, value)| value.is_array());
            match (arrays.next(), arrays.next()) {
                (Some((_, value)), None) => value,
                _ => {
                    return Err(LookupError::Malformed(
                        "expected an object wrapping exactly one option list".to_string(),
                    ));
                }
            }
        }
        other => {
            return Err(LookupError::Malformed(format!(
                "expected a list of options, got: {other}"
            )));
        }
    };
    let raw: Vec<WireOption> =
        serde_json::from_value(array).map_err(|err| LookupError::Malformed(err.to_string()))?;
    raw.into_iter().map(WireOption::into_item).collect()
}
