//! Geographic point type with the planar operators used by the frame solver.

use std::fmt;
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::tolerance::almost_eq;

/// A point in geographic space, treated as a flat 2-D coordinate.
///
/// Serialized as `{"lat": .., "lon": ..}`, which is how reference corners are
/// persisted in session configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

impl GeoPoint {
    pub const ORIGIN: GeoPoint = GeoPoint { lat: 0.0, lon: 0.0 };

    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Rotate the point around the origin by `phi` radians.
    ///
    /// Uses the rotation matrix
    /// ```text
    /// | lat' |   | cos(phi)  -sin(phi) | | lat |
    /// | lon' | = | sin(phi)   cos(phi) | | lon |
    /// ```
    /// With latitude drawn on the vertical axis and longitude on the
    /// horizontal one, a positive angle turns the point clockwise.
    #[must_use]
    pub fn rot_around_zero(self, phi: f64) -> Self {
        let (sin, cos) = phi.sin_cos();
        Self {
            lat: cos * self.lat - sin * self.lon,
            lon: sin * self.lat + cos * self.lon,
        }
    }

    /// Shear along the longitude axis: `lon' = lon + skew * lat`.
    #[must_use]
    pub fn skew_lon(self, skew: f64) -> Self {
        Self {
            lat: self.lat,
            lon: self.lon + skew * self.lat,
        }
    }

    /// Component-wise tolerance comparison (see [`almost_eq`]).
    pub fn approx_eq(&self, other: &GeoPoint) -> bool {
        almost_eq(self.lat, other.lat) && almost_eq(self.lon, other.lon)
    }

    /// True if both components are within tolerance of zero.
    pub fn is_origin(&self) -> bool {
        self.approx_eq(&Self::ORIGIN)
    }
}

impl Add for GeoPoint {
    type Output = GeoPoint;

    fn add(self, rhs: GeoPoint) -> GeoPoint {
        GeoPoint::new(self.lat + rhs.lat, self.lon + rhs.lon)
    }
}

impl Sub for GeoPoint {
    type Output = GeoPoint;

    fn sub(self, rhs: GeoPoint) -> GeoPoint {
        GeoPoint::new(self.lat - rhs.lat, self.lon - rhs.lon)
    }
}

impl Neg for GeoPoint {
    type Output = GeoPoint;

    fn neg(self) -> GeoPoint {
        GeoPoint::new(-self.lat, -self.lon)
    }
}

impl From<(f64, f64)> for GeoPoint {
    /// Build from a `(lat, lon)` tuple.
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} lat, {} lon)", self.lat, self.lon)
    }
}
