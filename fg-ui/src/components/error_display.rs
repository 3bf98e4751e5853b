//! Map failure notice.

use dioxus::prelude::*;

/// Shown in place of the map when the library or the container fails.
/// The legend and the back button stay usable underneath.
#[component]
pub fn ErrorDisplay(message: String) -> Element {
    rsx! {
        div {
            style: "position: absolute; inset: 0; display: flex; flex-direction: column; justify-content: center; align-items: center; gap: 8px; background: #f9fafb; color: #991b1b; text-align: center; padding: 24px;",
            h3 { style: "margin: 0; font-size: 18px;", "The emergency map could not be loaded" }
            p { style: "margin: 0; font-size: 14px; color: #4b5563;", "{message}" }
            p {
                style: "margin: 0; font-size: 13px; color: #6b7280;",
                "Follow local evacuation guidance and use the back button to return to the form."
            }
        }
    }
}
