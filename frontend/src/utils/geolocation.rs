use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::utils::storage as storage_utils;

pub const POSITION_TIMEOUT_MS: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeoError {
    #[error("Location permission denied. Please enable location access.")]
    PermissionDenied,
    #[error("Location information is unavailable.")]
    PositionUnavailable,
    #[error("Location request timed out.")]
    Timeout,
    #[error("Geolocation is not supported by your browser")]
    Unsupported,
    #[error("Unable to retrieve your location")]
    Unknown,
}

impl GeoError {
    /// Maps `GeolocationPositionError.code`.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => GeoError::PermissionDenied,
            2 => GeoError::PositionUnavailable,
            3 => GeoError::Timeout,
            _ => GeoError::Unknown,
        }
    }

    fn from_js(error: &JsValue) -> Self {
        js_sys::Reflect::get(error, &"code".into())
            .ok()
            .and_then(|code| code.as_f64())
            .map(|code| GeoError::from_code(code as u16))
            .unwrap_or(GeoError::Unknown)
    }
}

fn field(target: &JsValue, name: &str) -> Option<JsValue> {
    js_sys::Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

fn position_options() -> js_sys::Object {
    let options = js_sys::Object::new();
    let entries = [
        ("enableHighAccuracy", JsValue::TRUE),
        ("timeout", JsValue::from(POSITION_TIMEOUT_MS)),
        ("maximumAge", JsValue::from(0)),
    ];
    for (key, value) in entries {
        if js_sys::Reflect::set(&options, &JsValue::from_str(key), &value).is_err() {
            log::warn!("cannot set geolocation option {}", key);
        }
    }
    options
}

/// Reads `coords.latitude` / `coords.longitude` off a position object.
fn coordinates_from_js(position: &JsValue) -> Option<Coordinates> {
    let coords = field(position, "coords")?;
    Some(Coordinates {
        latitude: field(&coords, "latitude")?.as_f64()?,
        longitude: field(&coords, "longitude")?.as_f64()?,
    })
}

/// One high-accuracy fix, never served from cache, bounded at ten seconds.
pub async fn current_position() -> Result<Coordinates, GeoError> {
    let navigator = storage_utils::window()
        .map_err(|_| GeoError::Unsupported)?
        .navigator();
    let geolocation = field(&navigator, "geolocation").ok_or(GeoError::Unsupported)?;
    let get_current_position: js_sys::Function = field(&geolocation, "getCurrentPosition")
        .and_then(|f| f.dyn_into().ok())
        .ok_or(GeoError::Unsupported)?;
    let options = position_options();

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let fail = reject.clone();
        let on_success = Closure::once_into_js(move |position: JsValue| {
            if let Err(err) = resolve.call1(&JsValue::NULL, &position) {
                log::warn!("geolocation resolve failed: {:?}", err);
            }
        });
        let on_error = Closure::once_into_js(move |error: JsValue| {
            if let Err(err) = reject.call1(&JsValue::NULL, &error) {
                log::warn!("geolocation reject failed: {:?}", err);
            }
        });
        let started = get_current_position.call3(&geolocation, &on_success, &on_error, &options);
        if let Err(err) = started {
            log::warn!("getCurrentPosition threw: {:?}", err);
            if fail.call1(&JsValue::NULL, &JsValue::UNDEFINED).is_err() {
                log::warn!("geolocation reject failed");
            }
        }
    });

    let position = JsFuture::from(promise)
        .await
        .map_err(|error| GeoError::from_js(&error))?;
    coordinates_from_js(&position).ok_or(GeoError::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn position_error_codes_have_distinct_messages() {
        assert_eq!(GeoError::from_code(1), GeoError::PermissionDenied);
        assert_eq!(GeoError::from_code(2), GeoError::PositionUnavailable);
        assert_eq!(GeoError::from_code(3), GeoError::Timeout);
        assert_eq!(GeoError::from_code(9), GeoError::Unknown);

        assert_eq!(
            GeoError::PermissionDenied.to_string(),
            "Location permission denied. Please enable location access."
        );
        assert_eq!(GeoError::Timeout.to_string(), "Location request timed out.");
        assert_ne!(
            GeoError::PositionUnavailable.to_string(),
            GeoError::Timeout.to_string()
        );
    }

    #[wasm_bindgen_test]
    fn coordinates_are_read_from_the_position_object() {
        let coords = js_sys::Object::new();
        js_sys::Reflect::set(&coords, &"latitude".into(), &JsValue::from(12.97)).unwrap();
        js_sys::Reflect::set(&coords, &"longitude".into(), &JsValue::from(77.59)).unwrap();
        let position = js_sys::Object::new();
        js_sys::Reflect::set(&position, &"coords".into(), &coords).unwrap();

        assert_eq!(
            coordinates_from_js(&position),
            Some(Coordinates { latitude: 12.97, longitude: 77.59 })
        );
        assert_eq!(coordinates_from_js(&js_sys::Object::new()), None);
    }

    #[wasm_bindgen_test]
    fn options_ask_for_a_fresh_high_accuracy_fix() {
        let options = position_options();
        assert_eq!(field(&options, "enableHighAccuracy").and_then(|v| v.as_bool()), Some(true));
        assert_eq!(field(&options, "maximumAge").and_then(|v| v.as_f64()), Some(0.0));
        assert_eq!(field(&options, "timeout").and_then(|v| v.as_f64()), Some(10_000.0));
    }
}
