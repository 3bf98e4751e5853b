//! One labeled numeric input bound to a form field.

use crate::state::AppState;
use dioxus::prelude::*;
use fg_core::reading::ReadingField;

/// Controlled input: every keystroke is written back to `FormState`.
/// Latitude and longitude render disabled and show the geolocated value.
#[component]
pub fn ReadingInput(field: ReadingField) -> Element {
    let mut state = use_context::<AppState>();
    let value = state.form.read().value(field).to_string();
    let key = field.key();
    let label = field.label();
    let unit = field.unit();
    let required = field.is_required();
    let disabled = !field.is_editable();
    let placeholder = if disabled { "Waiting for location..." } else { "" };

    rsx! {
        div {
            label {
                r#for: "{key}",
                style: "display: block; font-size: 14px; font-weight: 500; color: #374151; margin-bottom: 4px;",
                "{label} ({unit})"
            }
            input {
                id: "{key}",
                name: "{key}",
                r#type: "number",
                step: "0.01",
                value: "{value}",
                placeholder: "{placeholder}",
                required: required,
                disabled: disabled,
                style: "width: 100%; box-sizing: border-box; padding: 8px 16px; border-radius: 8px; border: 1px solid #d1d5db;",
                oninput: move |evt: Event<FormData>| {
                    state.form.write().set_field(field, evt.value());
                },
            }
        }
    }
}
