//! Schema-driven dynamic forms for Leptos (client-side rendering).
//!
//! Describe a form as named sections of [`FieldDescriptor`]s — control
//! kind, label, placeholder, options, default value, validation rule —
//! and [`FormBuilder`] renders it, wires per-field validation, and
//! awaits your async handler with the validated values on submit.
//!
//! ```no_run
//! use formwright::{presets, submit_handler, FormBuilder, FormSchema, FormSection};
//! use leptos::prelude::*;
//!
//! let schema = FormSchema::new()
//!     .section(
//!         "contact",
//!         FormSection::new("Contact Information", vec![presets::email(), presets::phone()]),
//!     );
//!
//! let handler = submit_handler(|values| async move {
//!     log::info!("submitted: {values:?}");
//!     Ok(())
//! });
//!
//! leptos::mount::mount_to_body(move || {
//!     view! {
//!         <FormBuilder
//!             form_schema=schema
//!             submit_handler=handler
//!             title="Example Form".to_string()
//!         />
//!     }
//! });
//! ```

pub mod aggregate;
pub mod components;
pub mod controller;
pub mod error;
pub mod phone;
pub mod presets;
pub mod rules;
pub mod schema;

pub use aggregate::{aggregate, Aggregated, FieldRuleEntry, FormValues, ValidationSchema};
pub use components::{FieldInput, FieldWrapper, FormBuilder};
pub use controller::{submit_handler, FormController, SubmitFuture, SubmitHandler};
pub use error::SchemaError;
pub use rules::{FieldRule, Rule};
pub use schema::{FieldDescriptor, FormSchema, FormSection, InputKind, SelectOption};
