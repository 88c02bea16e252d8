//! Chain descriptions for the registry forms.
//!
//! Placeholder texts follow the server-rendered admin pages verbatim.

use kartela_core::{ChainSpec, LevelSpec, LookupSpec};

const LOAD_ERROR: &str = "Σφάλμα φόρτωσης";

/// Region → regional unit → municipality.
pub fn geography_chain() -> ChainSpec {
    ChainSpec {
        name: "geography".to_string(),
        levels: vec![
            LevelSpec {
                key: "region".to_string(),
                label: "Περιφέρεια".to_string(),
                prompt: "Επιλέξτε περιφέρεια".to_string(),
                waiting: "Επιλέξτε περιφέρεια".to_string(),
                error_text: LOAD_ERROR.to_string(),
                lookup: None,
            },
            LevelSpec {
                key: "regional_unit".to_string(),
                label: "Περιφερειακή ενότητα".to_string(),
                prompt: "Επιλέξτε περιφερειακή ενότητα".to_string(),
                waiting: "Επιλέξτε πρώτα περιφέρεια".to_string(),
                error_text: LOAD_ERROR.to_string(),
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
                error_text: LOAD_ERROR.to_string(),
                lookup: Some(LookupSpec::new(
                    "records/person/get_municipalities/",
                    "unit_id",
                )),
            },
        ],
    }
}

/// ICD-10 category → subcategory → code.
pub fn icd10_chain() -> ChainSpec {
    ChainSpec {
        name: "icd10".to_string(),
        levels: vec![
            LevelSpec {
                key: "icd10_category".to_string(),
                label: "Κατηγορία ICD-10".to_string(),
                prompt: "Επιλέξτε κατηγορία".to_string(),
                waiting: "Επιλέξτε κατηγορία".to_string(),
                error_text: LOAD_ERROR.to_string(),
                lookup: None,
            },
            LevelSpec {
                key: "icd10_subcategory".to_string(),
                label: "Υποκατηγορία".to_string(),
                prompt: "Επιλέξτε υποκατηγορία".to_string(),
                waiting: "Επιλέξτε πρώτα κατηγορία".to_string(),
                error_text: LOAD_ERROR.to_string(),
                lookup: Some(LookupSpec::new(
                    "records/neoplasm/get_subcategories/",
                    "category_id",
                )),
            },
            LevelSpec {
                key: "icd10_code".to_string(),
                label: "Συγκεκριμένος τύπος".to_string(),
                prompt: "Επιλέξτε συγκεκριμένο τύπο".to_string(),
                waiting: "Επιλέξτε πρώτα υποκατηγορία".to_string(),
                error_text: LOAD_ERROR.to_string(),
                lookup: Some(LookupSpec::new(
                    "records/neoplasm/get_codes/",
                    "subcategory_id",
                )),
            },
        ],
    }
}
