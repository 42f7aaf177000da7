//! Errors raised while solving a coordinate frame.

use std::fmt;

use thiserror::Error;

use crate::geo::GeoPoint;

/// Identifies one of the three reference corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Pixel `(0, 0)`.
    BottomLeft,
    /// Pixel `(width, 0)`.
    BottomRight,
    /// Pixel `(0, height)`.
    TopLeft,
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Corner::BottomLeft => "bottom-left",
            Corner::BottomRight => "bottom-right",
            Corner::TopLeft => "top-left",
        };
        f.write_str(name)
    }
}

/// Error types for coordinate frame construction.
///
/// All variants are produced by [`CoordinateFrame::new`](super::CoordinateFrame::new);
/// applying a constructed frame never fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrameError {
    /// Width or height is not a positive finite number.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be positive")]
    InvalidDimensions { width: f64, height: f64 },

    /// Two reference corners coincide within tolerance.
    #[error("The {first} and {second} corners are not sufficiently far apart")]
    DegenerateCorners { first: Corner, second: Corner },

    /// An axis ended up pointing the opposite way from pixel space.
    #[error("Coordinate system is flipped at the {corner} corner: {point}")]
    FlippedAxis { corner: Corner, point: GeoPoint },

    /// The top-left corner lies almost behind the bottom edge.
    #[error("Coordinate system skew unreasonably large: {angle} rad at {point}")]
    ExcessiveSkew { angle: f64, point: GeoPoint },

    /// Shear factor beyond 45 degrees.
    #[error("Coordinate system skew is more than 45 deg: k={skew} at {point}")]
    SkewTooLarge { skew: f64, point: GeoPoint },

    /// An arithmetic post-condition of the solver did not hold.
    #[error("Internal solver error: {0}")]
    InternalSolver(String),
}

impl FrameError {
    /// True for solver faults, false for problems with the supplied corners.
    pub fn is_internal(&self) -> bool {
        matches!(self, FrameError::InternalSolver(_))
    }
}
