//! Browser Geolocation Binding
//!
//! Wraps `navigator.geolocation.getCurrentPosition` in a future. The
//! callback payloads are read structurally (`position.coords.latitude`,
//! `error.code`) so the binding does not depend on the browser exposing the
//! error constructor under a particular global name.

use js_sys::{Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use food_harmony_core::discovery::GeolocationError;
use food_harmony_core::domain::Coordinates;

/// Request the device position once.
///
/// An environment without the geolocation capability reports `Unsupported`;
/// the platform callbacks carry no caller-specified timeout.
pub async fn current_position() -> Result<Coordinates, GeolocationError> {
    let geolocation = web_sys::window()
        .and_then(|window| window.navigator().geolocation().ok())
        .ok_or(GeolocationError::Unsupported)?;

    let promise = Promise::new(&mut |resolve, reject| {
        let request_failed = reject.clone();
        let on_success = Closure::once_into_js(move |position: JsValue| {
            let _ = resolve.call1(&JsValue::NULL, &position);
        });
        let on_error = Closure::once_into_js(move |error: JsValue| {
            let _ = reject.call1(&JsValue::NULL, &error);
        });
        if let Err(error) = geolocation.get_current_position_with_error_callback(
            on_success.unchecked_ref(),
            Some(on_error.unchecked_ref()),
        ) {
            let _ = request_failed.call1(&JsValue::NULL, &error);
        }
    });

    match JsFuture::from(promise).await {
        Ok(position) => read_coordinates(&position).ok_or(GeolocationError::Other),
        Err(error) => Err(classify(&error)),
    }
}

fn read_coordinates(position: &JsValue) -> Option<Coordinates> {
    let coords = Reflect::get(position, &JsValue::from_str("coords")).ok()?;
    let lat = Reflect::get(&coords, &JsValue::from_str("latitude"))
        .ok()?
        .as_f64()?;
    let lng = Reflect::get(&coords, &JsValue::from_str("longitude"))
        .ok()?
        .as_f64()?;
    Some(Coordinates { lat, lng })
}

fn classify(error: &JsValue) -> GeolocationError {
    Reflect::get(error, &JsValue::from_str("code"))
        .ok()
        .and_then(|code| code.as_f64())
        .map(|code| GeolocationError::from_code(code as u16))
        .unwrap_or(GeolocationError::Other)
}
