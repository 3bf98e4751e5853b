//! Prediction result banner.

use crate::state::AppState;
use dioxus::prelude::*;

/// Shows the current prediction message: red for alerts, green otherwise.
/// Renders nothing when there is no prediction.
#[component]
pub fn PredictionBanner() -> Element {
    let state = use_context::<AppState>();
    let Some(outcome) = state.form.read().outcome().cloned() else {
        return rsx! {};
    };

    let (background, color) = if outcome.prediction.is_alert() {
        ("#fee2e2", "#991b1b")
    } else {
        ("#dcfce7", "#166534")
    };
    let style = format!(
        "margin-bottom: 16px; padding: 16px; border-radius: 8px; display: flex; align-items: center; gap: 12px; background: {}; color: {};",
        background, color
    );
    let message = outcome.message();
    let issued = outcome.issued_at.format("%H:%M:%S UTC").to_string();

    rsx! {
        div {
            style: "{style}",
            span { "⚠" }
            span { style: "font-weight: 500;", "{message}" }
            span { style: "margin-left: auto; font-size: 12px; opacity: 0.7;", "Issued {issued}" }
        }
    }
}
