//! Shared Dioxus components and Google Maps bridge for the FloodGuard app.
//!
//! This crate provides:
//! - `js_bridge`: the `MapProvider` implementation over the Google Maps JS API
//! - `browser`: timer and geolocation promises awaited from Dioxus tasks
//! - `state`: reactive `AppState` with Dioxus Signals
//! - `components`: the form view, the map view and their pieces

pub mod browser;
pub mod components;
pub mod js_bridge;
pub mod state;
