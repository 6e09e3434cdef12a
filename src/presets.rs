//! Ready-made field descriptors for common inputs

use crate::rules::FieldRule;
use crate::schema::{FieldDescriptor, InputKind, SelectOption};

pub fn first_name() -> FieldDescriptor {
    FieldDescriptor::new("first_name", InputKind::Text)
        .label("First Name")
        .placeholder("Enter your first name")
        .default_value("")
        .rule(FieldRule::new().non_empty("First name is required"))
}

pub fn last_name() -> FieldDescriptor {
    FieldDescriptor::new("last_name", InputKind::Text)
        .label("Last Name")
        .placeholder("Enter your last name")
        .default_value("")
        .rule(FieldRule::new().non_empty("Last name is required"))
}

pub fn email() -> FieldDescriptor {
    FieldDescriptor::new("email", InputKind::Text)
        .label("Email Address")
        .placeholder("Enter your email")
        .default_value("")
        .rule(FieldRule::new().email("Please enter a valid email"))
}

pub fn phone() -> FieldDescriptor {
    FieldDescriptor::new("phone", InputKind::Phone)
        .label("Phone Number")
        .placeholder("Enter your phone number")
        .default_value("")
        .rule(
            FieldRule::new()
                .non_empty("Phone number is required")
                .digits(crate::phone::slot_count(), "Please enter a valid phone number"),
        )
}

pub fn newsletter() -> FieldDescriptor {
    FieldDescriptor::new("newsletter", InputKind::Checkbox)
        .label("Subscribe to Newsletter")
        .default_value(false)
}

pub fn gender() -> FieldDescriptor {
    FieldDescriptor::new("gender", InputKind::Radio)
        .label("Gender")
        .options(vec![
            SelectOption::new("male", "Male"),
            SelectOption::new("female", "Female"),
        ])
        .default_value("male")
        .rule(FieldRule::new().non_empty("Please select a gender"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::schema::{FormSchema, FormSection};

    /// The canonical three-section profile form used across the crate's
    /// tests and docs.
    pub fn profile_schema() -> FormSchema {
        FormSchema::new()
            .section("personal", FormSection::new("Personal Information", vec![first_name(), last_name()]))
            .section("contact", FormSection::new("Contact Information", vec![email(), phone()]))
            .section("preferences", FormSection::new("Preferences", vec![newsletter(), gender()]))
    }

    #[test]
    fn test_presets_aggregate_cleanly() {
        let agg = aggregate(&profile_schema()).unwrap();
        assert_eq!(agg.validation.len(), 6);
        // Every preset declares a default, falsy ones included
        assert_eq!(agg.defaults.len(), 6);
        assert_eq!(agg.defaults["gender"], serde_json::json!("male"));
        assert_eq!(agg.defaults["newsletter"], serde_json::json!(false));
    }

    #[test]
    fn test_phone_preset_accepts_masked_entry_digits() {
        let p = phone();
        assert!(p.rule.check(&serde_json::json!("5551234567")).is_ok());
        assert!(p.rule.check(&serde_json::json!("555")).is_err());
        assert!(p.rule.check(&serde_json::json!("")).is_err());
    }
}
