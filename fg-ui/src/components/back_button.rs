//! "Back to Prediction" navigation.

use crate::state::AppState;
use dioxus::prelude::*;

/// Fixed bottom-right button that clears the prediction and returns to the
/// form. Entered values survive.
#[component]
pub fn BackButton() -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        button {
            r#type: "button",
            style: "position: fixed; bottom: 24px; right: 24px; background: #1f2937; color: white; padding: 8px 16px; border: none; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.25); cursor: pointer;",
            onclick: move |_| state.form.write().back(),
            "Back to Prediction"
        }
    }
}
