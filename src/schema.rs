//! Form schema types
//!
//! A form is described declaratively: named sections, each holding an
//! ordered list of field descriptors. Sections are a display grouping
//! only; validation identity lives on the field name, which must be
//! unique across the whole form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rules::FieldRule;

// ============================================================================
// Input Kind
// ============================================================================

/// The closed set of supported field controls.
///
/// Dispatch in the renderer is an exhaustive match over this enum, so
/// adding a variant is a compile-time checklist of every place that
/// must handle it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputKind {
    Text,
    LongText,
    Select,
    Checkbox,
    Radio,
    Phone,
}

impl InputKind {
    /// The value a control of this kind resolves to when nothing has
    /// been entered and no default was declared.
    pub fn empty_value(&self) -> Value {
        match self {
            InputKind::Checkbox => Value::Bool(false),
            _ => Value::String(String::new()),
        }
    }

    /// Whether this kind needs a non-empty `options` list
    pub fn requires_options(&self) -> bool {
        matches!(self, InputKind::Select | InputKind::Radio)
    }
}

// ============================================================================
// Field Descriptor
// ============================================================================

/// One choice in a select or radio group
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Schema entry describing one form input: its control kind, display
/// text, options, validation rule, and default value.
#[derive(Clone, Debug)]
pub struct FieldDescriptor {
    /// Unique field name, the key for values, rules, and errors
    pub name: String,
    pub kind: InputKind,
    pub label_text: Option<String>,
    pub placeholder: Option<String>,
    /// Choices for `Select` and `Radio`; ignored by other kinds
    pub options: Vec<SelectOption>,
    /// Initial value. `Some(..)` always counts as a declared default,
    /// including falsy values like `Some(false)` or `Some("")`; only
    /// `None` means "no default".
    pub default_value: Option<Value>,
    /// Field-level disablement, distinct from the form's global
    /// read-only mode (disabled also leaves the focus order)
    pub disabled: bool,
    pub rule: FieldRule,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: InputKind) -> Self {
        Self {
            name: name.into(),
            kind,
            label_text: None,
            placeholder: None,
            options: Vec::new(),
            default_value: None,
            disabled: false,
            rule: FieldRule::new(),
        }
    }

    pub fn label(mut self, text: impl Into<String>) -> Self {
        self.label_text = Some(text.into());
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn rule(mut self, rule: FieldRule) -> Self {
        self.rule = rule;
        self
    }
}

// ============================================================================
// Sections
// ============================================================================

/// A titled display grouping of fields. Carries no validation identity.
#[derive(Clone, Debug, Default)]
pub struct FormSection {
    pub title: String,
    pub inputs: Vec<FieldDescriptor>,
    /// Shows a spinner next to the section title while set
    pub loading: bool,
}

impl FormSection {
    pub fn new(title: impl Into<String>, inputs: Vec<FieldDescriptor>) -> Self {
        Self {
            title: title.into(),
            inputs,
            loading: false,
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}

/// The whole form: section key -> section, in insertion order.
///
/// The key is opaque and never shown; insertion order determines render
/// order, so the backing store is an ordered pair list rather than a map.
#[derive(Clone, Debug, Default)]
pub struct FormSchema {
    sections: Vec<(String, FormSection)>,
}

impl FormSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section under an opaque key. Re-using a key appends a
    /// second section rather than replacing; field names still must be
    /// unique form-wide, which aggregation enforces.
    pub fn section(mut self, key: impl Into<String>, section: FormSection) -> Self {
        self.sections.push((key.into(), section));
        self
    }

    pub fn sections(&self) -> impl Iterator<Item = &(String, FormSection)> {
        self.sections.iter()
    }

    /// All fields across sections, flattened in render order
    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.sections.iter().flat_map(|(_, s)| s.inputs.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_kind_kebab_case_tags() {
        let json = serde_json::to_string(&InputKind::LongText).unwrap();
        assert_eq!(json, "\"long-text\"");
        let back: InputKind = serde_json::from_str("\"long-text\"").unwrap();
        assert_eq!(back, InputKind::LongText);
    }

    #[test]
    fn test_input_kind_rejects_unknown_tag() {
        let parsed: Result<InputKind, _> = serde_json::from_str("\"calendar\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_empty_value_per_kind() {
        assert_eq!(InputKind::Checkbox.empty_value(), Value::Bool(false));
        assert_eq!(InputKind::Text.empty_value(), Value::String(String::new()));
        assert_eq!(InputKind::Radio.empty_value(), Value::String(String::new()));
    }

    #[test]
    fn test_schema_preserves_insertion_order() {
        let schema = FormSchema::new()
            .section("b", FormSection::new("Second? No, first", vec![]))
            .section("a", FormSection::new("Second", vec![]));

        let keys: Vec<_> = schema.sections().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_fields_flatten_across_sections() {
        let schema = FormSchema::new()
            .section(
                "one",
                FormSection::new(
                    "One",
                    vec![
                        FieldDescriptor::new("a", InputKind::Text),
                        FieldDescriptor::new("b", InputKind::Checkbox),
                    ],
                ),
            )
            .section(
                "two",
                FormSection::new("Two", vec![FieldDescriptor::new("c", InputKind::Text)]),
            );

        let names: Vec<_> = schema.fields().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
