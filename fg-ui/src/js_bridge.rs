//! Google Maps bridge.
//!
//! The map shim in `assets/js/flood-map.js` is embedded at compile time and
//! evaluated once at startup, exposing `window.floodGuardMap`. Calls that
//! need a return value or a callback go through typed `wasm-bindgen`
//! imports of that object; `GoogleMapsProvider` implements the map session's
//! `MapProvider` trait on top of them.

use fg_core::location::LatLng;
use fg_map::error::{MapError, Result};
use fg_map::provider::{GroundOverlaySpec, MapEvent, MapOptions, MapProvider, MarkerSpec};
use fg_map::wire;
use js_sys::{Function, Promise};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

static FLOOD_MAP_JS: &str = include_str!("../assets/js/flood-map.js");

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = floodGuardMap, js_name = load)]
    fn shim_load(api_key: &str) -> Promise;

    #[wasm_bindgen(js_namespace = floodGuardMap, js_name = createMap, catch)]
    fn shim_create_map(
        container_id: &str,
        options_json: &str,
        on_event: &Function,
    ) -> std::result::Result<u32, JsValue>;

    #[wasm_bindgen(js_namespace = floodGuardMap, js_name = setCenter, catch)]
    fn shim_set_center(map_id: u32, lat: f64, lng: f64) -> std::result::Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = floodGuardMap, js_name = releaseMap)]
    fn shim_release_map(map_id: u32);

    #[wasm_bindgen(js_namespace = floodGuardMap, js_name = addMarker, catch)]
    fn shim_add_marker(map_id: u32, marker_json: &str) -> std::result::Result<u32, JsValue>;

    #[wasm_bindgen(js_namespace = floodGuardMap, js_name = removeMarker)]
    fn shim_remove_marker(marker_id: u32);

    #[wasm_bindgen(js_namespace = floodGuardMap, js_name = openInfoWindow, catch)]
    fn shim_open_info_window(
        map_id: u32,
        marker_id: u32,
        content: &str,
    ) -> std::result::Result<u32, JsValue>;

    #[wasm_bindgen(js_namespace = floodGuardMap, js_name = closeInfoWindow)]
    fn shim_close_info_window(window_id: u32);

    #[wasm_bindgen(js_namespace = floodGuardMap, js_name = addGroundOverlay, catch)]
    fn shim_add_ground_overlay(map_id: u32, overlay_json: &str)
        -> std::result::Result<u32, JsValue>;

    #[wasm_bindgen(js_namespace = floodGuardMap, js_name = removeGroundOverlay)]
    fn shim_remove_ground_overlay(overlay_id: u32);
}

/// Evaluate the map shim. Safe to call more than once.
pub fn init_map_scripts() {
    if let Err(e) = js_sys::eval(FLOOD_MAP_JS) {
        log::error!("Failed to evaluate map shim: {}", js_error_message(&e));
    }
}

/// Load the Google Maps library, resolving once `google.maps` is usable.
pub async fn load_google_maps(api_key: &str) -> Result<()> {
    JsFuture::from(shim_load(api_key))
        .await
        .map(|_| ())
        .map_err(|e| MapError::LibraryUnavailable(js_error_message(&e)))
}

/// Best-effort text of a thrown JS value.
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn provider_error(value: JsValue) -> MapError {
    MapError::Provider(js_error_message(&value))
}

fn encode_uri_component(text: &str) -> String {
    String::from(js_sys::encode_uri_component(text))
}

/// `MapProvider` backed by the Google Maps JS API.
///
/// Handles are registry ids assigned by the shim. The event closure lives
/// as long as the provider, so the provider must outlive its map.
pub struct GoogleMapsProvider {
    on_event: Closure<dyn FnMut(String, String)>,
}

impl GoogleMapsProvider {
    /// `sink` receives decoded marker clicks and info window dismissals.
    pub fn new(sink: impl Fn(MapEvent) + 'static) -> Self {
        let on_event = Closure::wrap(Box::new(move |kind: String, marker_id: String| {
            match wire::decode_event(&kind, &marker_id) {
                Some(event) => sink(event),
                None => log::warn!("Unrecognized map event {} {:?}", kind, marker_id),
            }
        }) as Box<dyn FnMut(String, String)>);
        Self { on_event }
    }
}

impl MapProvider for GoogleMapsProvider {
    type Handle = u32;

    fn create_map(&mut self, container_id: &str, options: &MapOptions) -> Result<u32> {
        let options_json =
            serde_json::to_string(options).map_err(|e| MapError::Provider(e.to_string()))?;
        shim_create_map(
            container_id,
            &options_json,
            self.on_event.as_ref().unchecked_ref(),
        )
        .map_err(|e| MapError::ContainerNotFound(js_error_message(&e)))
    }

    fn set_center(&mut self, map: &u32, center: LatLng) {
        if let Err(e) = shim_set_center(*map, center.lat, center.lng) {
            log::warn!("setCenter failed: {}", js_error_message(&e));
        }
    }

    fn release_map(&mut self, map: u32) {
        shim_release_map(map);
    }

    fn add_marker(&mut self, map: &u32, marker: &MarkerSpec) -> Result<u32> {
        let payload = wire::marker_payload(marker, encode_uri_component);
        shim_add_marker(*map, &payload.to_string()).map_err(provider_error)
    }

    fn remove_marker(&mut self, marker: u32) {
        shim_remove_marker(marker);
    }

    fn open_info_window(&mut self, map: &u32, anchor: &u32, content: &str) -> Result<u32> {
        shim_open_info_window(*map, *anchor, content).map_err(provider_error)
    }

    fn close_info_window(&mut self, window: u32) {
        shim_close_info_window(window);
    }

    fn add_ground_overlay(&mut self, map: &u32, overlay: &GroundOverlaySpec) -> Result<u32> {
        let overlay_json =
            serde_json::to_string(overlay).map_err(|e| MapError::Provider(e.to_string()))?;
        shim_add_ground_overlay(*map, &overlay_json).map_err(provider_error)
    }

    fn remove_ground_overlay(&mut self, overlay: u32) {
        shim_remove_ground_overlay(overlay);
    }
}
