//! Fixed choice lists, labeled as on the server forms.

fn choices(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect()
}

pub fn status_choices() -> Vec<(String, String)> {
    choices(&[
        ("unemployed", "Άνεργος/η"),
        ("employed", "Εργαζόμενος/η"),
        ("retired", "Συνταξιούχος"),
        ("housework", "Οικιακά"),
        ("student", "Φοιτητής"),
        ("retired_employed", "Συντ & Εργαζ."),
        ("other", "Άλλο"),
    ])
}

pub fn employment_type_choices() -> Vec<(String, String)> {
    choices(&[
        ("employee", "Υπάλληλος"),
        ("freelancer", "Ελεύθερος Επαγγελματίας"),
        ("owner", "Ιδιοκτήτης"),
    ])
}

pub fn work_schedule_choices() -> Vec<(String, String)> {
    choices(&[
        ("full_time", "Πλήρης"),
        ("part_time", "Μερική"),
        ("hourly", "Ωρομίσθια"),
        ("seasonal", "Εποχική"),
    ])
}

pub fn contract_type_choices() -> Vec<(String, String)> {
    choices(&[
        ("indefinite", "Αορίστου χρόνου"),
        ("fixed_term", "Ορισμένου χρόνου"),
        ("project", "Έργου"),
        ("other", "Άλλο"),
    ])
}

pub fn action_type_choices() -> Vec<(String, String)> {
    choices(&[("call", "Κλήση"), ("email", "Email"), ("referral", "Παραπομπή")])
}

pub fn direction_choices() -> Vec<(String, String)> {
    choices(&[("from", "ΑΠΟ"), ("to", "ΠΡΟΣ")])
}

pub fn contact_type_choices() -> Vec<(String, String)> {
    choices(&[
        ("patient", "ασθενή"),
        ("caregiver", "φροντιστή"),
        ("organization", "φορέα"),
    ])
}

pub fn referral_choices() -> Vec<(String, String)> {
    choices(&[
        ("external_org", "φορέα"),
        ("internal_dept", "τμήμα"),
        ("specialist", "ειδικό"),
    ])
}
