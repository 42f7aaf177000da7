//! Solving and applying a pixel-to-geographic coordinate frame.
//!
//! # Algorithm
//!
//! Construction moves the three geographic corners into an axis-aligned
//! rectangle anchored at the origin:
//!
//! 1. Translate so the bottom-left corner is the origin
//! 2. Rotate so the bottom-right corner lies on the positive longitude axis
//! 3. Shear longitude so the top-left corner lies on the latitude axis
//! 4. Divide the rectangle sides by the pixel dimensions
//!
//! Mapping a pixel to a geographic point runs the same steps backwards:
//! ```text
//! c = (y * stretch_y, x * stretch_x)
//! geo = rot(skew_lon(c, k), -phi) - translation
//! ```

use std::f64::consts::PI;

use log::{debug, warn};

use super::corners::ReferenceCorners;
use super::error::{Corner, FrameError};
use crate::geo::{almost_eq, GeoPoint};

/// Skew angles beyond this fraction of a half turn are rejected.
const MAX_SKEW_ANGLE: f64 = 0.9 * PI;

/// Shear factors beyond this magnitude (45 degrees) are rejected.
const MAX_SKEW_FACTOR: f64 = 1.0;

/// An affine mapping from floor-plan pixels to geographic coordinates.
///
/// Pixel `(0, 0)` is the bottom-left corner of the image, pixel X grows
/// towards the bottom-right corner and pixel Y towards the top-left corner.
/// Pixel Y pairs with the latitude-like axis and pixel X with the
/// longitude-like axis.
///
/// The frame is immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateFrame {
    corners: ReferenceCorners,
    width: f64,
    height: f64,
    /// Moves the bottom-left corner to the origin.
    translation: GeoPoint,
    /// Radians that put the bottom edge on the longitude axis.
    rotation: f64,
    /// Longitude shear that put the left edge on the latitude axis.
    skew: f64,
    /// Longitude-like units per pixel along X.
    stretch_x: f64,
    /// Latitude-like units per pixel along Y.
    stretch_y: f64,
}

impl CoordinateFrame {
    /// Solve the frame for three reference corners of a `width` x `height`
    /// pixel image.
    ///
    /// # Errors
    ///
    /// - `InvalidDimensions` if width or height is not positive
    /// - `DegenerateCorners` if two corners coincide
    /// - `FlippedAxis` if the corners are mirrored relative to pixel space
    /// - `ExcessiveSkew` / `SkewTooLarge` if the corners are too far from
    ///   a rectangle
    /// - `InternalSolver` if an arithmetic post-condition fails
    pub fn new(
        bottom_left: GeoPoint,
        bottom_right: GeoPoint,
        top_left: GeoPoint,
        width: f64,
        height: f64,
    ) -> Result<Self, FrameError> {
        let corners = ReferenceCorners::new(bottom_left, bottom_right, top_left);
        Self::from_corners(&corners, width, height)
    }

    /// Solve the frame for a persisted corner set.
    ///
    /// See [`CoordinateFrame::new`] for the failure modes.
    pub fn from_corners(
        corners: &ReferenceCorners,
        width: f64,
        height: f64,
    ) -> Result<Self, FrameError> {
        let result = solve(corners, width, height);
        if let Err(err) = &result {
            warn!("Rejected reference corners {:?}: {}", corners, err);
        }
        result
    }

    /// Map a pixel position to its geographic coordinate.
    pub fn to_geo(&self, x: f64, y: f64) -> GeoPoint {
        // Un-stretch
        let c = GeoPoint::new(y * self.stretch_y, x * self.stretch_x);
        // Un-skew
        let c = c.skew_lon(self.skew);
        // Un-rotate
        let c = c.rot_around_zero(-self.rotation);
        // Un-translate
        c - self.translation
    }

    /// Map a geographic coordinate back to its pixel position `(x, y)`.
    pub fn to_pixel(&self, point: GeoPoint) -> (f64, f64) {
        let c = (point + self.translation)
            .rot_around_zero(self.rotation)
            .skew_lon(-self.skew);
        (c.lon / self.stretch_x, c.lat / self.stretch_y)
    }

    /// Map a batch of pixel positions, preserving order.
    pub fn to_geo_all(&self, pixels: &[(f64, f64)]) -> Vec<GeoPoint> {
        pixels.iter().map(|&(x, y)| self.to_geo(x, y)).collect()
    }

    /// The reference corners this frame was solved for.
    pub fn corners(&self) -> &ReferenceCorners {
        &self.corners
    }

    /// Pixel width of the reference image.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Pixel height of the reference image.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Rotation angle in radians.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Longitude shear factor.
    pub fn skew(&self) -> f64 {
        self.skew
    }

    /// Geographic units per pixel as `(x, y)`.
    pub fn stretch(&self) -> (f64, f64) {
        (self.stretch_x, self.stretch_y)
    }
}

fn solve(
    corners: &ReferenceCorners,
    width: f64,
    height: f64,
) -> Result<CoordinateFrame, FrameError> {
    let positive = |v: f64| v.is_finite() && v > 0.0;
    if !positive(width) || !positive(height) {
        return Err(FrameError::InvalidDimensions { width, height });
    }
    corners.ensure_distinct()?;

    let translation = -corners.bottom_left;

    // Translate bottom-left into the origin
    let p1 = corners.bottom_left + translation;
    let p2 = corners.bottom_right + translation;
    let p3 = corners.top_left + translation;
    if !p1.is_origin() {
        return Err(FrameError::InternalSolver(format!(
            "could not translate coords to zero: {}",
            p1
        )));
    }

    // Rotate bottom-right onto the longitude axis
    let rotation = p2.lat.atan2(p2.lon);
    let p2 = p2.rot_around_zero(rotation);
    let p3 = p3.rot_around_zero(rotation);
    if !almost_eq(p2.lat, 0.0) {
        return Err(FrameError::InternalSolver(format!(
            "could not rotate coords around zero: {}",
            p2
        )));
    }
    if p2.lon < 0.0 {
        return Err(FrameError::FlippedAxis {
            corner: Corner::BottomRight,
            point: p2,
        });
    }

    // Shear top-left onto the latitude axis
    let angle = p3.lat.atan2(p3.lon);
    if angle.abs() > MAX_SKEW_ANGLE {
        return Err(FrameError::ExcessiveSkew { angle, point: p3 });
    }
    let skew = p3.lon / p3.lat;
    // 0/0 when the top-left corner collapses onto the origin
    if skew.is_nan() || skew.abs() > MAX_SKEW_FACTOR {
        return Err(FrameError::SkewTooLarge { skew, point: p3 });
    }
    let p3 = p3.skew_lon(-skew);
    if !almost_eq(p3.lon, 0.0) {
        return Err(FrameError::InternalSolver(format!(
            "could not skew coords to rectangular shape: {}",
            p3
        )));
    }
    if p3.lat < 0.0 {
        return Err(FrameError::FlippedAxis {
            corner: Corner::TopLeft,
            point: p3,
        });
    }

    let stretch_x = p2.lon / width;
    let stretch_y = p3.lat / height;

    debug!(
        "Solved coordinate frame: rotation={:.6} rad, skew={:.6}, stretch=({:e}, {:e}) per px",
        rotation, skew, stretch_x, stretch_y
    );

    Ok(CoordinateFrame {
        corners: *corners,
        width,
        height,
        translation,
        rotation,
        skew,
        stretch_x,
        stretch_y,
    })
}
