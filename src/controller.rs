//! Form state controller
//!
//! Single owner of a mounted form's live state: field values, per-field
//! and form-level errors, and the busy flag toggled around the submit
//! handler. The controller is a `Copy` bundle of signals, passed
//! explicitly down to every rendered control rather than looked up from
//! ambient context.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use serde_json::Value;

use crate::aggregate::{Aggregated, FormValues, ValidationSchema};

/// Boxed future returned by a submit handler
pub type SubmitFuture = Pin<Box<dyn Future<Output = Result<(), String>> + 'static>>;

/// Caller-supplied async submit callback. The library awaits it, clears
/// the busy flag when it settles, and otherwise reports nothing back.
pub type SubmitHandler = Arc<dyn Fn(FormValues) -> SubmitFuture + Send + Sync>;

/// Wrap an async closure as a [`SubmitHandler`]
pub fn submit_handler<F, Fut>(f: F) -> SubmitHandler
where
    F: Fn(FormValues) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), String>> + 'static,
{
    Arc::new(move |values| Box::pin(f(values)))
}

/// Stateful owner of live field values and validity for one form
#[derive(Clone, Copy)]
pub struct FormController {
    values: RwSignal<FormValues>,
    errors: RwSignal<HashMap<String, String>>,
    form_error: RwSignal<Option<String>>,
    busy: RwSignal<bool>,
    validation: StoredValue<ValidationSchema>,
    initial: StoredValue<FormValues>,
}

impl FormController {
    /// Seed a controller from aggregation output. Fields with a
    /// declared default start at that value; everything else stays
    /// unset and resolves through its control's empty representation.
    pub fn new(aggregated: &Aggregated) -> Self {
        Self {
            values: RwSignal::new(aggregated.defaults.clone()),
            errors: RwSignal::new(HashMap::new()),
            form_error: RwSignal::new(None),
            busy: RwSignal::new(false),
            validation: StoredValue::new(aggregated.validation.clone()),
            initial: StoredValue::new(aggregated.defaults.clone()),
        }
    }

    /// Current value of a field, if set. Reactive.
    pub fn value(&self, name: &str) -> Option<Value> {
        self.values.with(|v| v.get(name).cloned())
    }

    /// String view of a field's value, `""` when unset. Reactive.
    pub fn text(&self, name: &str) -> String {
        self.values.with(|v| {
            v.get(name)
                .and_then(|val| val.as_str())
                .map(String::from)
                .unwrap_or_default()
        })
    }

    /// Boolean view of a field's value, `false` when unset. Reactive.
    pub fn checked(&self, name: &str) -> bool {
        self.values
            .with(|v| v.get(name).and_then(|val| val.as_bool()).unwrap_or(false))
    }

    /// Set a field's value and re-validate that one field, so its
    /// inline error tracks the edit live.
    pub fn set_value(&self, name: &str, value: Value) {
        self.values.update(|v| {
            v.insert(name.to_string(), value.clone());
        });

        let outcome = self
            .validation
            .with_value(|schema| schema.get(name).map(|entry| entry.rule.check(&value)));
        match outcome {
            Some(Err(message)) => self.errors.update(|e| {
                e.insert(name.to_string(), message);
            }),
            Some(Ok(())) => self.errors.update(|e| {
                e.remove(name);
            }),
            None => {}
        }

        log::debug!("field {name} changed: {value}");
    }

    /// Inline error for a field, if any. Reactive.
    pub fn error(&self, name: &str) -> Option<String> {
        self.errors.with(|e| e.get(name).cloned())
    }

    /// Form-level error from the last submit attempt. Reactive.
    pub fn form_error(&self) -> Option<String> {
        self.form_error.get()
    }

    /// True while the submit handler is in flight. Reactive.
    pub fn busy(&self) -> bool {
        self.busy.get()
    }

    /// Whole-form validity against current values. Reactive.
    pub fn is_valid(&self) -> bool {
        let values = self.values.get();
        self.validation
            .with_value(|schema| schema.validate_all(&values).is_empty())
    }

    /// Restore every field to its aggregator-provided initial value and
    /// clear all errors. Does not touch the busy flag.
    pub fn reset(&self) {
        self.values.set(self.initial.get_value());
        self.errors.set(HashMap::new());
        self.form_error.set(None);
    }

    /// Submit payload: every schema field name, unset fields filled
    /// with their empty representation.
    pub fn snapshot(&self) -> FormValues {
        let values = self.values.get_untracked();
        self.validation.with_value(|schema| schema.snapshot(&values))
    }

    /// Run the submit protocol: validate everything synchronously, and
    /// only when clean drive the handler with a values snapshot, busy
    /// flag raised for the duration.
    ///
    /// A handler failure is not rewrapped: it is logged, surfaced as
    /// the form-level error, and the form becomes interactive again.
    /// `timeout_ms` bounds the wait; without it a hung handler leaves
    /// the form busy indefinitely.
    pub fn submit(&self, handler: SubmitHandler, timeout_ms: Option<u32>) {
        let values = self.values.get_untracked();
        let snapshot = match self.validation.with_value(|schema| schema.gate(&values)) {
            Ok(snapshot) => snapshot,
            Err(failures) => {
                self.errors.set(failures);
                return;
            }
        };

        self.form_error.set(None);
        self.busy.set(true);

        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let fut = handler(snapshot);
            let outcome = match timeout_ms {
                Some(ms) => match select(fut, Box::pin(TimeoutFuture::new(ms))).await {
                    Either::Left((result, _)) => result,
                    Either::Right(_) => Err(format!("submit handler timed out after {ms}ms")),
                },
                None => fut.await,
            };

            if let Err(message) = outcome {
                log::error!("form submit failed: {message}");
                this.form_error.set(Some(message));
            }
            this.busy.set(false);
        });
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::rules::FieldRule;
    use crate::schema::{FieldDescriptor, FormSchema, FormSection, InputKind};
    use serde_json::json;

    fn controller() -> FormController {
        let schema = FormSchema::new().section(
            "main",
            FormSection::new(
                "Main",
                vec![
                    FieldDescriptor::new("name", InputKind::Text)
                        .rule(FieldRule::new().non_empty("Name is required")),
                    FieldDescriptor::new("color", InputKind::Text).default_value("green"),
                    FieldDescriptor::new("subscribed", InputKind::Checkbox).default_value(false),
                ],
            ),
        );
        FormController::new(&aggregate(&schema).unwrap())
    }

    #[test]
    fn test_seeds_declared_defaults_only() {
        let owner = Owner::new();
        owner.set();

        let ctl = controller();
        assert_eq!(ctl.text("color"), "green");
        assert!(!ctl.checked("subscribed"));
        // No default declared: unset, reads as the empty representation
        assert_eq!(ctl.value("name"), None);
        assert_eq!(ctl.text("name"), "");
    }

    #[test]
    fn test_set_value_tracks_inline_error_live() {
        let owner = Owner::new();
        owner.set();

        let ctl = controller();
        assert_eq!(ctl.error("name"), None);

        ctl.set_value("name", json!(""));
        assert_eq!(ctl.error("name"), Some("Name is required".to_string()));
        assert!(!ctl.is_valid());

        ctl.set_value("name", json!("Ada"));
        assert_eq!(ctl.error("name"), None);
        assert!(ctl.is_valid());
    }

    #[test]
    fn test_reset_restores_initial_values_and_clears_errors() {
        let owner = Owner::new();
        owner.set();

        let ctl = controller();
        ctl.set_value("name", json!(""));
        ctl.set_value("color", json!("blue"));
        ctl.set_value("subscribed", json!(true));
        assert!(ctl.error("name").is_some());

        ctl.reset();
        assert_eq!(ctl.value("name"), None);
        assert_eq!(ctl.text("color"), "green");
        assert!(!ctl.checked("subscribed"));
        assert_eq!(ctl.error("name"), None);
        assert_eq!(ctl.form_error(), None);
    }

    #[test]
    fn test_snapshot_fills_unset_fields() {
        let owner = Owner::new();
        owner.set();

        let ctl = controller();
        let snapshot = ctl.snapshot();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot["name"], json!(""));
        assert_eq!(snapshot["color"], json!("green"));
        assert_eq!(snapshot["subscribed"], json!(false));
    }
}
