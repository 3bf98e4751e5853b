//! Promise-backed browser primitives awaited from Dioxus tasks.

use fg_core::location::LatLng;
use fg_map::GeolocationError;
use js_sys::{Promise, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Resolve after `ms` milliseconds.
///
/// Dropping the future (e.g. when the owning task is cancelled) abandons the
/// wait; the timer still fires but nothing observes it.
pub async fn sleep(ms: u32) {
    let promise = Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().map(|window| {
            window.set_timeout_with_callback_and_timeout_and_arguments_0(
                &resolve,
                ms.min(i32::MAX as u32) as i32,
            )
        });
        if !matches!(scheduled, Some(Ok(_))) {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = JsFuture::from(promise).await;
}

/// Ask the browser for the device position once. No retry, no timeout.
pub async fn current_position() -> Result<LatLng, GeolocationError> {
    let geolocation = web_sys::window()
        .and_then(|window| window.navigator().geolocation().ok())
        .ok_or(GeolocationError::Unsupported)?;

    let promise = Promise::new(&mut |resolve, reject| {
        if let Err(e) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject))
        {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });

    match JsFuture::from(promise).await {
        Ok(position) => read_coords(&position).ok_or(GeolocationError::PositionUnavailable),
        Err(error) => {
            let code = Reflect::get(&error, &JsValue::from_str("code"))
                .ok()
                .and_then(|c| c.as_f64())
                .unwrap_or(2.0);
            Err(GeolocationError::from_code(code as u16))
        }
    }
}

fn read_coords(position: &JsValue) -> Option<LatLng> {
    let coords = Reflect::get(position, &JsValue::from_str("coords")).ok()?;
    let lat = Reflect::get(&coords, &JsValue::from_str("latitude")).ok()?.as_f64()?;
    let lng = Reflect::get(&coords, &JsValue::from_str("longitude")).ok()?.as_f64()?;
    Some(LatLng::new(lat, lng))
}
