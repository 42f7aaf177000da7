//! WASM bindings for coordinate frames.
//!
//! This module lets the floor-plan front end solve a frame once per session
//! and convert measurement locations between pixels and lat/lon.

use crate::types::JsGeoPoint;
use floorgeo_core::{frame_for_floor_plan, CoordinateFrame, GeoPoint, ReferenceCorners};
use wasm_bindgen::prelude::*;

/// JavaScript-accessible coordinate frame.
///
/// # Example (TypeScript)
/// ```typescript
/// const corners = [
///   { lat: 47.18877, lon: 8.67928 },  // bottom-left, pixel (0, 0)
///   { lat: 47.18841, lon: 8.68086 },  // bottom-right, pixel (width, 0)
///   { lat: 47.18946, lon: 8.67952 },  // top-left, pixel (0, height)
/// ];
/// const frame = JsCoordinateFrame.fromCorners(corners, 800, 600);
///
/// const point = frame.toGeo(400, 300);
/// console.log(`${point.lat}, ${point.lon}`);
///
/// frame.free();
/// ```
#[wasm_bindgen]
pub struct JsCoordinateFrame {
    inner: CoordinateFrame,
}

#[wasm_bindgen]
impl JsCoordinateFrame {
    /// Solve a frame from the three corner coordinates and the image size.
    ///
    /// # Errors
    ///
    /// Returns an error string if the corners are degenerate, mirrored or
    /// too far from a rectangle.
    #[wasm_bindgen(constructor)]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        bottom_left_lat: f64,
        bottom_left_lon: f64,
        bottom_right_lat: f64,
        bottom_right_lon: f64,
        top_left_lat: f64,
        top_left_lon: f64,
        width: f64,
        height: f64,
    ) -> Result<JsCoordinateFrame, JsValue> {
        CoordinateFrame::new(
            GeoPoint::new(bottom_left_lat, bottom_left_lon),
            GeoPoint::new(bottom_right_lat, bottom_right_lon),
            GeoPoint::new(top_left_lat, top_left_lon),
            width,
            height,
        )
        .map(Self::from_core)
        .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Solve a frame from persisted corners (`[{lat, lon}, x3]`).
    #[wasm_bindgen(js_name = fromCorners)]
    pub fn from_corners(
        corners: JsValue,
        width: f64,
        height: f64,
    ) -> Result<JsCoordinateFrame, JsValue> {
        let corners = corners_from_js(corners)?;
        CoordinateFrame::from_corners(&corners, width, height)
            .map(Self::from_core)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Solve a frame sized to a PNG or JPEG floor-plan image.
    #[wasm_bindgen(js_name = fromFloorPlan)]
    pub fn from_floor_plan(corners: JsValue, bytes: &[u8]) -> Result<JsCoordinateFrame, JsValue> {
        let corners = corners_from_js(corners)?;
        frame_for_floor_plan(&corners, bytes)
            .map(Self::from_core)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Map a pixel position to its geographic coordinate.
    #[wasm_bindgen(js_name = toGeo)]
    pub fn to_geo(&self, x: f64, y: f64) -> JsGeoPoint {
        JsGeoPoint::from_core(self.inner.to_geo(x, y))
    }

    /// Map a geographic point back to pixels, returned as `[x, y]`.
    #[wasm_bindgen(js_name = toPixel)]
    pub fn to_pixel(&self, point: &JsGeoPoint) -> Vec<f64> {
        let (x, y) = self.inner.to_pixel(point.to_core());
        vec![x, y]
    }

    /// Pixel width of the floor plan
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.inner.width()
    }

    /// Pixel height of the floor plan
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.inner.height()
    }
}

impl JsCoordinateFrame {
    pub(crate) fn from_core(frame: CoordinateFrame) -> Self {
        Self { inner: frame }
    }
}

fn corners_from_js(corners: JsValue) -> Result<ReferenceCorners, JsValue> {
    serde_wasm_bindgen::from_value(corners)
        .map_err(|e| JsValue::from_str(&format!("Invalid reference corners: {}", e)))
}


/// WASM-specific tests that require JsValue.
///
/// These tests construct frames from JS values and inspect error values,
/// which only works on the wasm32 target.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn corners_js() -> JsValue {
        let corners = ReferenceCorners::new(
            GeoPoint::new(47.188770353504495, 8.679289310900968),
            GeoPoint::new(47.18841891486276, 8.680867011940794),
            GeoPoint::new(47.189467267318214, 8.679525966056941),
        );
        serde_wasm_bindgen::to_value(&corners).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_from_corners() {
        let frame = JsCoordinateFrame::from_corners(corners_js(), 800.0, 600.0).unwrap();
        let p = frame.to_geo(0.0, 600.0);
        assert!((p.lat() - 47.189467267318214).abs() < 1e-9);
    }

    #[wasm_bindgen_test]
    fn test_from_corners_invalid_value() {
        let result = JsCoordinateFrame::from_corners(JsValue::from_str("nope"), 800.0, 600.0);
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_degenerate_corners_error_message() {
        let result = JsCoordinateFrame::new(1.0, 2.0, 1.0, 2.0, 3.0, 2.0, 800.0, 600.0);
        let err = result.err().and_then(|e| e.as_string()).unwrap();
        assert!(err.contains("not sufficiently far apart"), "got {}", err);
    }

    #[wasm_bindgen_test]
    fn test_from_floor_plan_invalid_bytes() {
        let result = JsCoordinateFrame::from_floor_plan(corners_js(), &[0x00, 0x01, 0x02]);
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_point_to_json() {
        let json = JsGeoPoint::new(47.5, 8.25).to_json().unwrap();
        let back: GeoPoint = serde_wasm_bindgen::from_value(json).unwrap();
        assert_eq!(back, GeoPoint::new(47.5, 8.25));
    }
}
