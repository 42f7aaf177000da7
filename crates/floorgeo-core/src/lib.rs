//! Floorgeo Core - floor-plan geo-referencing library
//!
//! This crate maps pixel positions on a floor-plan image to geographic
//! coordinates. Radio-link measurements are recorded at pixel positions on the
//! plan; a [`CoordinateFrame`] solved from three known corners turns those
//! positions into latitude/longitude pairs for export.
//!
//! # Example
//!
//! ```ignore
//! use floorgeo_core::{CoordinateFrame, GeoPoint};
//!
//! let frame = CoordinateFrame::new(
//!     GeoPoint::new(47.188770353504495, 8.679289310900968), // bottom-left
//!     GeoPoint::new(47.18841891486276, 8.680867011940794),  // bottom-right
//!     GeoPoint::new(47.189467267318214, 8.679525966056941), // top-left
//!     800.0,
//!     600.0,
//! )?;
//! let location = frame.to_geo(400.0, 300.0);
//! ```

pub mod floor_plan;
pub mod frame;
pub mod geo;

pub use floor_plan::{frame_for_floor_plan, image_dimensions, FloorPlanError};
pub use frame::{CoordinateFrame, Corner, FrameError, ReferenceCorners};
pub use geo::{almost_eq, GeoPoint, TOLERANCE};
