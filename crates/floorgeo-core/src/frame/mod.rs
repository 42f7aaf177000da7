//! Pixel-to-geographic coordinate frames.
//!
//! A frame is solved once per measurement session from three reference
//! corners and the pixel size of the floor-plan image, and then maps every
//! recorded measurement location to a geographic coordinate.
//!
//! # Coordinate Spaces
//!
//! ```text
//! Floor plan placed in lat/lon        Floor plan in pixels
//!
//! lat                                 y
//! ^                                   ^
//! | * top-left                        * (0, height)
//! |  \               _* bottom-right  |
//! |   \          _-"                  |
//! |    \     _-"                      |
//! |     \_-"                          |
//! |     * bottom-left                 |
//! +-------------------------> lon     *--------------------* --> x
//!                                   (0, 0)            (width, 0)
//! ```
//!
//! The area covered by the floor plan must be small enough to be treated as
//! flat. The mapping is affine: translation, rotation, a longitude shear and
//! a per-axis stretch.

mod corners;
mod error;
mod solver;

pub use corners::ReferenceCorners;
pub use error::{Corner, FrameError};
pub use solver::CoordinateFrame;
