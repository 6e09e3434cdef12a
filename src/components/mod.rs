//! Leptos components: the form shell, per-field dispatch, and the
//! shared label/error layout wrapper.

pub mod field_resolver;
pub mod field_wrapper;
pub mod form_builder;

pub use field_resolver::FieldInput;
pub use field_wrapper::FieldWrapper;
pub use form_builder::FormBuilder;
