//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.

use dioxus::prelude::*;
use fg_core::config::FloodGuardConfig;
use fg_core::form::FormState;

/// Shared state for the FloodGuard page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Form fields, current view, prediction and pending ticket
    pub form: Signal<FormState>,
    /// Loaded configuration (never changes after startup)
    pub config: Signal<FloodGuardConfig>,
}

impl AppState {
    pub fn new(config: FloodGuardConfig) -> Self {
        Self {
            form: Signal::new(FormState::new()),
            config: Signal::new(config),
        }
    }
}
