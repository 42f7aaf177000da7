//! WASM-compatible wrapper types for geographic points.

use floorgeo_core::GeoPoint;
use wasm_bindgen::prelude::*;

/// A geographic point wrapper for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsGeoPoint {
    inner: GeoPoint,
}

#[wasm_bindgen]
impl JsGeoPoint {
    /// Create a point from latitude and longitude in degrees.
    #[wasm_bindgen(constructor)]
    pub fn new(lat: f64, lon: f64) -> JsGeoPoint {
        JsGeoPoint {
            inner: GeoPoint::new(lat, lon),
        }
    }

    /// Latitude in degrees
    #[wasm_bindgen(getter)]
    pub fn lat(&self) -> f64 {
        self.inner.lat
    }

    /// Longitude in degrees
    #[wasm_bindgen(getter)]
    pub fn lon(&self) -> f64 {
        self.inner.lon
    }

    /// Serialize as `{ lat, lon }` for outbound messages.
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl JsGeoPoint {
    pub(crate) fn from_core(point: GeoPoint) -> Self {
        Self { inner: point }
    }

    pub(crate) fn to_core(&self) -> GeoPoint {
        self.inner
    }
}
