//! Field dispatch
//!
//! `FieldInput` is a total function from a field descriptor to its
//! concrete control. Dispatch is an exhaustive match on [`InputKind`],
//! so an unhandled kind is a compile error rather than a silently
//! empty slot in the form. The controller handle is passed in
//! explicitly; controls never reach into ambient context.

use leptos::prelude::*;
use leptos::web_sys;
use serde_json::Value;
use wasm_bindgen::JsCast;

use super::field_wrapper::FieldWrapper;
use crate::controller::FormController;
use crate::phone;
use crate::schema::{FieldDescriptor, InputKind};

const INPUT_CLASS: &str = "w-full px-3 py-2 text-sm border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500";

/// Render the control for one field, bound to the controller's state
/// for that field name. `read_only` is the form-wide mode; it keeps
/// text-like controls focusable but uneditable, and fully disables
/// controls with no native read-only affordance.
#[component]
pub fn FieldInput(
    field: FieldDescriptor,
    controller: FormController,
    #[prop(default = false)] read_only: bool,
) -> impl IntoView {
    match field.kind {
        InputKind::Text => view! {
            <TextControl field=field controller=controller read_only=read_only multiline=false />
        }
        .into_any(),
        InputKind::LongText => view! {
            <TextControl field=field controller=controller read_only=read_only multiline=true />
        }
        .into_any(),
        InputKind::Select => view! {
            <SelectControl field=field controller=controller read_only=read_only />
        }
        .into_any(),
        InputKind::Checkbox => view! {
            <CheckboxControl field=field controller=controller read_only=read_only />
        }
        .into_any(),
        InputKind::Radio => view! {
            <RadioControl field=field controller=controller read_only=read_only />
        }
        .into_any(),
        InputKind::Phone => view! {
            <PhoneControl field=field controller=controller read_only=read_only />
        }
        .into_any(),
    }
}

// ============================================================================
// Text / LongText
// ============================================================================

/// Single- or multi-line text bound to the field's string value.
/// `readonly` and `disabled` stay distinct here: disabled also drops
/// the control from the focus order.
#[component]
fn TextControl(
    field: FieldDescriptor,
    controller: FormController,
    read_only: bool,
    multiline: bool,
) -> impl IntoView {
    let FieldDescriptor {
        name,
        label_text,
        placeholder,
        disabled,
        ..
    } = field;

    let error = {
        let name = name.clone();
        Signal::derive(move || controller.error(&name))
    };
    let value = {
        let name = name.clone();
        move || controller.text(&name)
    };
    let placeholder = placeholder.unwrap_or_default();

    if multiline {
        let on_input = move |ev: web_sys::Event| {
            let target = ev.target().unwrap();
            let textarea: web_sys::HtmlTextAreaElement = target.dyn_into().unwrap();
            controller.set_value(&name, Value::String(textarea.value()));
        };
        view! {
            <FieldWrapper label_text=label_text error=error>
                <textarea
                    rows=4
                    class=INPUT_CLASS
                    placeholder=placeholder
                    disabled=disabled
                    readonly=read_only
                    prop:value=value
                    on:input=on_input
                />
            </FieldWrapper>
        }
        .into_any()
    } else {
        let on_input = move |ev: web_sys::Event| {
            let target = ev.target().unwrap();
            let input: web_sys::HtmlInputElement = target.dyn_into().unwrap();
            controller.set_value(&name, Value::String(input.value()));
        };
        view! {
            <FieldWrapper label_text=label_text error=error>
                <input
                    type="text"
                    class=INPUT_CLASS
                    placeholder=placeholder
                    disabled=disabled
                    readonly=read_only
                    prop:value=value
                    on:input=on_input
                />
            </FieldWrapper>
        }
        .into_any()
    }
}

// ============================================================================
// Select
// ============================================================================

/// Single choice among the field's options; the bound value is the
/// selected option's `value`. No native read-only affordance, so
/// read-only mode forces `disabled`.
#[component]
fn SelectControl(
    field: FieldDescriptor,
    controller: FormController,
    read_only: bool,
) -> impl IntoView {
    let FieldDescriptor {
        name,
        label_text,
        placeholder,
        options,
        disabled,
        ..
    } = field;

    let error = {
        let name = name.clone();
        Signal::derive(move || controller.error(&name))
    };
    let value = {
        let name = name.clone();
        move || controller.text(&name)
    };
    let on_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let select: web_sys::HtmlSelectElement = target.dyn_into().unwrap();
        controller.set_value(&name, Value::String(select.value()));
    };
    let placeholder = placeholder.unwrap_or_else(|| "-- Select --".to_string());

    view! {
        <FieldWrapper label_text=label_text error=error>
            <select
                class=INPUT_CLASS
                disabled=disabled || read_only
                prop:value=value
                on:change=on_change
            >
                <option value="">{placeholder}</option>
                {options
                    .into_iter()
                    .map(|option| {
                        view! { <option value=option.value.clone()>{option.label}</option> }
                    })
                    .collect_view()}
            </select>
        </FieldWrapper>
    }
}

// ============================================================================
// Checkbox
// ============================================================================

/// Boolean toggle; label renders beside rather than above the box
#[component]
fn CheckboxControl(
    field: FieldDescriptor,
    controller: FormController,
    read_only: bool,
) -> impl IntoView {
    let FieldDescriptor {
        name,
        label_text,
        disabled,
        ..
    } = field;

    let error = {
        let name = name.clone();
        Signal::derive(move || controller.error(&name))
    };
    let checked = {
        let name = name.clone();
        move || controller.checked(&name)
    };
    let on_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input: web_sys::HtmlInputElement = target.dyn_into().unwrap();
        controller.set_value(&name, Value::Bool(input.checked()));
    };

    view! {
        <FieldWrapper label_text=label_text label_beside=true error=error>
            <input
                type="checkbox"
                class="h-4 w-4 rounded border-gray-300"
                disabled=disabled || read_only
                prop:checked=checked
                on:change=on_change
            />
        </FieldWrapper>
    }
}

// ============================================================================
// Radio
// ============================================================================

/// Mutually exclusive toggles sharing the field name; read-only mode
/// disables the whole group
#[component]
fn RadioControl(
    field: FieldDescriptor,
    controller: FormController,
    read_only: bool,
) -> impl IntoView {
    let FieldDescriptor {
        name,
        label_text,
        options,
        disabled,
        ..
    } = field;

    let error = {
        let name = name.clone();
        Signal::derive(move || controller.error(&name))
    };
    let group_disabled = disabled || read_only;

    view! {
        <FieldWrapper label_text=label_text error=error>
            <div class="space-y-1">
                {options
                    .into_iter()
                    .map(|option| {
                        let checked = {
                            let name = name.clone();
                            let value = option.value.clone();
                            move || controller.text(&name) == value
                        };
                        let on_change = {
                            let name = name.clone();
                            let value = option.value.clone();
                            move |_: web_sys::Event| {
                                controller.set_value(&name, Value::String(value.clone()));
                            }
                        };
                        view! {
                            <label class="flex items-center gap-2 text-sm text-gray-700">
                                <input
                                    type="radio"
                                    name=name.clone()
                                    value=option.value.clone()
                                    prop:checked=checked
                                    disabled=group_disabled
                                    on:change=on_change
                                />
                                <span>{option.label}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </FieldWrapper>
    }
}

// ============================================================================
// Phone
// ============================================================================

/// Masked phone input: the display shows the fixed pattern with typed
/// digits substituted in, the bound value stays the unmasked digit
/// string. Mask policy lives in [`crate::phone`].
#[component]
fn PhoneControl(
    field: FieldDescriptor,
    controller: FormController,
    read_only: bool,
) -> impl IntoView {
    let FieldDescriptor {
        name,
        label_text,
        disabled,
        ..
    } = field;

    let error = {
        let name = name.clone();
        Signal::derive(move || controller.error(&name))
    };
    let value = {
        let name = name.clone();
        move || phone::format_digits(&controller.text(&name))
    };
    let on_input = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input: web_sys::HtmlInputElement = target.dyn_into().unwrap();
        controller.set_value(&name, Value::String(phone::strip_digits(&input.value())));
    };

    view! {
        <FieldWrapper label_text=label_text error=error>
            <input
                type="tel"
                class=INPUT_CLASS
                disabled=disabled
                readonly=read_only
                prop:value=value
                on:input=on_input
            />
        </FieldWrapper>
    }
}
