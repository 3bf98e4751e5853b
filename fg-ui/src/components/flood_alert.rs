use dioxus::prelude::*;

/// Evacuation banner pinned to the bottom of the map.
#[component]
pub fn FloodAlert() -> Element {
    rsx! {
        div {
            style: "position: absolute; bottom: 16px; left: 50%; transform: translateX(-50%); background: #ef4444; color: white; padding: 16px; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.25); display: flex; align-items: center; gap: 12px; z-index: 1;",
            span { style: "font-size: 24px;", "⚠" }
            div {
                h4 { style: "margin: 0; font-weight: 600;", "High Flood Risk Alert" }
                p {
                    style: "margin: 0; font-size: 14px;",
                    "Please follow evacuation routes to nearest emergency shelter"
                }
            }
        }
    }
}
