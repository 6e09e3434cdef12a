//! Schema aggregation
//!
//! Flattens a sectioned form schema into a single validation schema
//! (one rule per field name, in render order) and the map of declared
//! initial values. Runs once per schema instance; pure and
//! deterministic, so recomputing on render is safe.

use std::collections::{HashMap, HashSet};

use serde_json::Value;

use crate::error::SchemaError;
use crate::rules::FieldRule;
use crate::schema::{FormSchema, InputKind};

/// Live field values, keyed by field name
pub type FormValues = HashMap<String, Value>;

/// One aggregated field: its rule plus the empty-state value used when
/// the field was never touched and declared no default.
#[derive(Clone, Debug)]
pub struct FieldRuleEntry {
    pub name: String,
    pub kind: InputKind,
    pub rule: FieldRule,
    pub empty: Value,
}

/// Composite rule set for the whole form, in flattened field order
#[derive(Clone, Debug, Default)]
pub struct ValidationSchema {
    entries: Vec<FieldRuleEntry>,
}

impl ValidationSchema {
    pub fn entries(&self) -> &[FieldRuleEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&FieldRuleEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate every field against `values`, returning a message per
    /// failing field. Missing values are checked as the field's empty
    /// representation.
    pub fn validate_all(&self, values: &FormValues) -> HashMap<String, String> {
        let mut errors = HashMap::new();
        for entry in &self.entries {
            let value = values.get(&entry.name).unwrap_or(&entry.empty);
            if let Err(message) = entry.rule.check(value) {
                errors.insert(entry.name.clone(), message);
            }
        }
        errors
    }

    /// Submission gate: either the full-coverage snapshot to hand the
    /// submit callback, or every failing field's message.
    pub fn gate(&self, values: &FormValues) -> Result<FormValues, HashMap<String, String>> {
        let failures = self.validate_all(values);
        if failures.is_empty() {
            Ok(self.snapshot(values))
        } else {
            Err(failures)
        }
    }

    /// Current value of every schema field, with unset fields filled
    /// from their empty representation. This is the submit payload.
    pub fn snapshot(&self, values: &FormValues) -> FormValues {
        self.entries
            .iter()
            .map(|entry| {
                let value = values.get(&entry.name).cloned().unwrap_or_else(|| entry.empty.clone());
                (entry.name.clone(), value)
            })
            .collect()
    }
}

/// Aggregation output: the validation schema plus declared defaults
#[derive(Clone, Debug, Default)]
pub struct Aggregated {
    pub validation: ValidationSchema,
    pub defaults: FormValues,
}

/// Fold a sectioned schema into a flat validation schema and defaults.
///
/// Section boundaries are dropped; intra-section order and section
/// order are preserved. A field name appearing twice anywhere in the
/// form is rejected rather than silently shadowed, as is a select or
/// radio field with no options. A default is recorded whenever the
/// descriptor declares one, falsy values included.
pub fn aggregate(schema: &FormSchema) -> Result<Aggregated, SchemaError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Aggregated::default();

    for field in schema.fields() {
        if !seen.insert(&field.name) {
            return Err(SchemaError::DuplicateField {
                name: field.name.clone(),
            });
        }
        if field.kind.requires_options() && field.options.is_empty() {
            return Err(SchemaError::MissingOptions {
                name: field.name.clone(),
            });
        }

        if let Some(default) = &field.default_value {
            out.defaults.insert(field.name.clone(), default.clone());
        }

        out.validation.entries.push(FieldRuleEntry {
            name: field.name.clone(),
            kind: field.kind,
            rule: field.rule.clone(),
            empty: field.kind.empty_value(),
        });
    }

    Ok(out)
}

// ============================================================================
// Tests
// ============================================================================
