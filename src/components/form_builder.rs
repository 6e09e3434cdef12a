//! Top-level form component
//!
//! Aggregates the schema once, seeds a controller, and renders one
//! titled block per section followed by the cancel/save actions row.
//! A schema defect renders as a diagnostic banner instead of a form.

use leptos::prelude::*;
use leptos::web_sys;

use super::field_resolver::FieldInput;
use crate::aggregate::aggregate;
use crate::controller::{FormController, SubmitHandler};
use crate::schema::FormSchema;

#[component]
pub fn FormBuilder(
    /// Sections and fields to render, in insertion order
    form_schema: FormSchema,
    /// Awaited with the validated values snapshot on submit
    submit_handler: SubmitHandler,
    #[prop(default = "Save".to_string(), into)] save_label: String,
    #[prop(default = "Cancel".to_string(), into)] cancel_label: String,
    /// Forces every field into its non-editable rendering mode
    #[prop(default = false)]
    read_only: bool,
    /// Fired after a cancel click has reset the form
    #[prop(optional)]
    on_cancel_click: Option<Callback<()>>,
    /// `id` attribute on the form element, for external targeting
    #[prop(optional, into)]
    form_id: Option<String>,
    /// Heading rendered above the form
    #[prop(optional, into)]
    title: Option<String>,
    /// Upper bound on the submit handler's execution; unbounded when
    /// unset, so a hung handler leaves the form busy
    #[prop(optional)]
    submit_timeout_ms: Option<u32>,
) -> impl IntoView {
    let aggregated = match aggregate(&form_schema) {
        Ok(aggregated) => aggregated,
        Err(err) => {
            log::error!("form schema rejected: {err}");
            return view! {
                <div class="p-3 bg-red-100 border border-red-400 text-red-700 rounded">
                    {err.to_string()}
                </div>
            }
            .into_any();
        }
    };

    let controller = FormController::new(&aggregated);
    let is_valid = Memo::new(move |_| controller.is_valid());

    let handler = submit_handler.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        controller.submit(handler.clone(), submit_timeout_ms);
    };
    let on_cancel = move |_: web_sys::MouseEvent| {
        controller.reset();
        if let Some(callback) = on_cancel_click {
            callback.run(());
        }
    };

    view! {
        <form id=form_id on:submit=on_submit class="max-w-2xl">
            {title.map(|text| view! { <h1 class="text-2xl font-bold mb-6">{text}</h1> })}

            {move || {
                controller.form_error().map(|err| {
                    view! {
                        <div class="mb-4 p-3 bg-red-100 border border-red-400 text-red-700 rounded">
                            {err}
                        </div>
                    }
                })
            }}

            {form_schema
                .sections()
                .map(|(_, section)| {
                    let section_loading = section.loading;
                    let spinner = move || {
                        (section_loading || controller.busy()).then(|| {
                            view! {
                                <span class="inline-block animate-spin ml-2 text-sm text-gray-400">
                                    "\u{27f3}"
                                </span>
                            }
                        })
                    };

                    view! {
                        <div class="mb-6">
                            <h2 class="font-bold text-lg text-gray-800">
                                {section.title.clone()}
                                {spinner}
                            </h2>
                            <hr class="mb-4" />
                            {section
                                .inputs
                                .iter()
                                .map(|field| {
                                    view! {
                                        <FieldInput
                                            field=field.clone()
                                            controller=controller
                                            read_only=read_only
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}

            <div class="flex gap-2 mt-6">
                <button
                    type="button"
                    class="px-4 py-2 rounded bg-gray-200 hover:bg-gray-300 text-gray-800 disabled:opacity-50"
                    disabled=move || controller.busy()
                    on:click=on_cancel
                >
                    {cancel_label}
                </button>
                <button
                    type="submit"
                    class="px-4 py-2 rounded bg-blue-500 hover:bg-blue-600 text-white disabled:opacity-50"
                    disabled=move || !is_valid.get() || controller.busy()
                >
                    {save_label}
                </button>
            </div>
        </form>
    }
    .into_any()
}
