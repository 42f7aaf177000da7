//! Geographic points in a locally flat approximation.
//!
//! A small area of the globe (a building, a campus) is treated as a Euclidean
//! plane: latitude and longitude are plain scalars and no earth-curvature
//! correction is applied.
//!
//! # Axes
//!
//! - Latitude is the vertical axis, longitude the horizontal one
//! - Rotations are about the origin, positive = clockwise
//! - Shears shift longitude proportionally to latitude

mod point;
mod tolerance;

pub use point::GeoPoint;
pub use tolerance::{almost_eq, TOLERANCE};
