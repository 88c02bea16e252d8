//! Conditional-visibility contracts for the registry forms.

use kartela_core::{CHECKED, FieldKind, ManagedField, ToggleRule, ToggleSpec};

/// Employment-status section of the person form.
///
/// `unemployed` shows the unemployment card and registration date;
/// `employed` and `retired_employed` show the job details; every other
/// status (retired, housework, student, other) hides the whole block.
pub fn employment_toggle() -> ToggleSpec {
    let job_fields = [
        "profession",
        "specialization",
        "employment_type",
        "employer_name",
        "employer_legal_form",
        "hire_date",
        "work_schedule",
        "contract_type",
    ];
    ToggleSpec {
        controller: "status".to_string(),
        managed: vec![
            ManagedField::new("unemployment_card", FieldKind::Checkbox),
            ManagedField::new("unemployment_registration_date", FieldKind::Date),
            ManagedField::new("profession", FieldKind::Text),
            ManagedField::new("specialization", FieldKind::Text),
            ManagedField::new("employment_type", FieldKind::Select),
            ManagedField::new("employer_name", FieldKind::Text),
            ManagedField::new("employer_legal_form", FieldKind::Text),
            ManagedField::new("hire_date", FieldKind::Date),
            ManagedField::new("work_schedule", FieldKind::Select),
            ManagedField::new("contract_type", FieldKind::Select),
        ],
        rules: vec![
            ToggleRule::new(
                "unemployed",
                &["unemployment_card", "unemployment_registration_date"],
            ),
            ToggleRule::new("employed", &job_fields),
            ToggleRule::new("retired_employed", &job_fields),
        ],
    }
}

/// Disability block of one medical-history row.
pub fn disability_toggle() -> ToggleSpec {
    ToggleSpec {
        controller: "disability".to_string(),
        managed: vec![
            ManagedField::new("certified_disability", FieldKind::Checkbox),
            ManagedField::new("disability_percentage", FieldKind::Number),
        ],
        rules: vec![ToggleRule::new(
            CHECKED,
            &["certified_disability", "disability_percentage"],
        )],
    }
}

/// Action form: direction and contact for calls and emails, referral
/// target for referrals.
pub fn action_toggle() -> ToggleSpec {
    ToggleSpec {
        controller: "action_type".to_string(),
        managed: vec![
            ManagedField::new("direction", FieldKind::Select),
            ManagedField::new("contact_type", FieldKind::Select),
            ManagedField::new("referral_type", FieldKind::Select),
        ],
        rules: vec![
            ToggleRule::new("call", &["direction", "contact_type"]),
            ToggleRule::new("email", &["direction", "contact_type"]),
            ToggleRule::new("referral", &["referral_type"]),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kartela_core::FormValues;

    #[test]
    fn specs_reference_managed_fields_only() {
        assert!(employment_toggle().is_consistent());
        assert!(disability_toggle().is_consistent());
        assert!(action_toggle().is_consistent());
    }

    #[test]
    fn unemployed_shows_card_and_hides_job_details() {
        let mut values = FormValues::new();
        values.set_text("profession", "Οδηγός");
        values.set_text("specialization", "Φορτηγό");
        values.set_text("employer_name", "ΚΤΕΛ");

        let outcome = employment_toggle().outcome("unemployed");
        assert!(outcome.is_visible("unemployment_card"));
        assert!(outcome.is_visible("unemployment_registration_date"));
        assert!(!outcome.is_visible("profession"));
        assert!(!outcome.is_visible("employer_name"));

        outcome.apply(&mut values);
        assert_eq!(values.text("profession"), "");
        assert_eq!(values.text("specialization"), "");
        assert_eq!(values.text("employer_name"), "");
    }

    #[test]
    fn employed_statuses_show_job_details() {
        for status in ["employed", "retired_employed"] {
            let outcome = employment_toggle().outcome(status);
            assert!(outcome.is_visible("profession"), "status {status:?}");
            assert!(outcome.is_visible("contract_type"), "status {status:?}");
            assert!(!outcome.is_visible("unemployment_card"), "status {status:?}");
        }
    }

    #[test]
    fn passive_statuses_hide_everything() {
        for status in ["retired", "housework", "student", "other", ""] {
            let outcome = employment_toggle().outcome(status);
            assert!(outcome.visible.is_empty(), "status {status:?}");
        }
    }

    #[test]
    fn unchecking_disability_clears_certification() {
        let mut values = FormValues::new();
        values.set_checked("disability", true);
        values.set_checked("certified_disability", true);
        values.set_text("disability_percentage", "67");

        let outcome = disability_toggle().outcome("");
        assert!(!outcome.is_visible("certified_disability"));
        assert!(!outcome.is_visible("disability_percentage"));

        outcome.apply(&mut values);
        assert!(!values.is_checked("certified_disability"));
        assert_eq!(values.text("disability_percentage"), "");
    }

    #[test]
    fn action_types_route_to_their_fields() {
        for action in ["call", "email"] {
            let outcome = action_toggle().outcome(action);
            assert!(outcome.is_visible("direction"));
            assert!(outcome.is_visible("contact_type"));
            assert!(!outcome.is_visible("referral_type"));
        }
        let outcome = action_toggle().outcome("referral");
        assert!(outcome.is_visible("referral_type"));
        assert!(!outcome.is_visible("direction"));
    }
}
