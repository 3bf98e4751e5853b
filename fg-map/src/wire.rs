//! JSON payloads exchanged with the browser map shim.
//!
//! Kept separate from the bridge so the encoding is testable off-browser.

use crate::provider::{MapEvent, MarkerIcon, MarkerKey, MarkerSpec};
use serde_json::{json, Value};

/// Prefix of the `data:` URL wrapping a marker SVG. The URL-encoded SVG
/// follows it.
pub const SVG_DATA_URL_PREFIX: &str = "data:image/svg+xml;charset=UTF-8,";

/// Marker payload for `floodGuardMap.addMarker`.
///
/// `encode` URL-encodes the SVG of facility icons; the browser passes
/// `encodeURIComponent`.
pub fn marker_payload(spec: &MarkerSpec, encode: impl Fn(&str) -> String) -> Value {
    let icon = match &spec.icon {
        MarkerIcon::Facility(style) => {
            json!({ "url": format!("{}{}", SVG_DATA_URL_PREFIX, encode(&style.svg())) })
        }
        MarkerIcon::Circle(style) => json!({ "circle": style }),
    };
    json!({
        "id": spec.key.as_id(),
        "title": spec.title,
        "position": spec.position,
        "icon": icon,
    })
}

/// Decode an `onEvent(kind, markerId)` callback from the shim.
pub fn decode_event(kind: &str, marker_id: &str) -> Option<MapEvent> {
    match kind {
        "click" => MarkerKey::from_id(marker_id).map(MapEvent::MarkerClicked),
        "closeclick" => Some(MapEvent::InfoWindowClosed),
        _ => None,
    }
}
