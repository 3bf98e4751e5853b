use dioxus::prelude::*;

#[component]
pub fn PageHeader() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; gap: 12px; margin-bottom: 32px;",
            span { style: "font-size: 40px;", "💧" }
            h1 {
                style: "margin: 0; font-size: 36px; font-weight: bold; color: #1e3a8a;",
                "FloodGuard Prediction"
            }
        }
    }
}
