//! Shared per-field layout
//!
//! Every control renders inside this wrapper: the label sits above the
//! control for most kinds and beside it (after) for checkboxes, and
//! the field's current validation error, if any, shows underneath,
//! updating live as validity changes.

use leptos::prelude::*;

#[component]
pub fn FieldWrapper(
    /// Label to show, already optional on the descriptor side
    label_text: Option<String>,
    /// Render the label beside (after) the control instead of above it
    #[prop(default = false)]
    label_beside: bool,
    /// Live inline error for this one field
    error: Signal<Option<String>>,
    children: Children,
) -> impl IntoView {
    let layout = if label_beside {
        "flex flex-row-reverse items-center justify-end gap-2"
    } else {
        "flex flex-col gap-1"
    };

    view! {
        <div class="mb-4">
            <div class=layout>
                {label_text.map(|text| {
                    view! {
                        <label class="block text-sm font-medium text-gray-700">{text}</label>
                    }
                })}
                {children()}
            </div>
            {move || {
                error.get().map(|err| {
                    view! { <p class="mt-1 text-xs text-red-500">{err}</p> }
                })
            }}
        </div>
    }
}
