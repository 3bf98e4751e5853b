//! FloodGuard Prediction
//!
//! Single-page flood risk tool with two views:
//! - a form collecting six environmental readings (plus the device position,
//!   when geolocation is granted) and producing a simulated risk prediction
//! - an emergency map showing nearby facilities, the flood extent overlay
//!   and the user's own position
//!
//! Data flow:
//! 1. `config/floodguard.json` is embedded with `include_str!` and parsed into
//!    `FloodGuardConfig`; a bad file falls back to defaults.
//! 2. On mount, the Google Maps shim is injected and the device position is
//!    requested once to prefill latitude and longitude.
//! 3. Submitting the form switches to the map view; the prediction banner
//!    fills in once the simulated delay elapses.

use dioxus::prelude::*;
use fg_core::config::FloodGuardConfig;
use fg_core::form::View;
use fg_ui::browser;
use fg_ui::components::{BackButton, EmergencyMap, PageHeader, PredictionBanner, PredictionForm};
use fg_ui::js_bridge;
use fg_ui::state::AppState;

/// Runtime configuration, embedded at compile time.
const CONFIG_JSON: &str = include_str!("../config/floodguard.json");

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("floodguard-root"))
        .launch(App);
}

fn load_config() -> FloodGuardConfig {
    match FloodGuardConfig::from_json(CONFIG_JSON) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid floodguard.json, using defaults: {}", e);
            FloodGuardConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(|| AppState::new(load_config()));

    // Inject the map shim and prefill the read-only coordinates
    use_effect(move || {
        js_bridge::init_map_scripts();
        spawn(async move {
            match browser::current_position().await {
                Ok(position) => state.form.write().set_location(position),
                Err(e) => log::warn!("Geolocation unavailable: {}", e),
            }
        });
    });

    let view = state.form.read().view();

    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 16px;",
            PageHeader {}
            match view {
                View::Form => rsx! {
                    PredictionForm {}
                },
                View::Map => rsx! {
                    PredictionBanner {}
                    div {
                        style: "height: calc(100vh - 200px); min-height: 360px; border-radius: 8px; overflow: hidden;",
                        EmergencyMap {}
                    }
                    BackButton {}
                },
            }
        }
    }
}
