//! Loading indicator.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Loading map...".to_string())]
    pub label: String,
}

/// Centered text shown over the map container until the map is ready.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            style: "position: absolute; inset: 0; display: flex; justify-content: center; align-items: center; color: #666; pointer-events: none;",
            "{props.label}"
        }
    }
}
