//! Floorgeo WASM - WebAssembly bindings for Floorgeo
//!
//! This crate exposes floorgeo-core coordinate frames to the browser-based
//! floor-plan editor.
//!
//! # Module Structure
//!
//! - `frame` - Solving frames and converting between pixels and lat/lon
//! - `types` - WASM-compatible wrapper types for geographic points
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsCoordinateFrame } from '@floorgeo/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await floorPlan.arrayBuffer());
//! const frame = JsCoordinateFrame.fromFloorPlan(session.wgs84, bytes);
//! const point = frame.toGeo(location.x, location.y);
//! ```

use wasm_bindgen::prelude::*;

mod frame;
mod types;

pub use frame::JsCoordinateFrame;
pub use types::JsGeoPoint;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
