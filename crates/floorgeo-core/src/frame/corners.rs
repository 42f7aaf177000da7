//! The three geographic reference corners of a floor plan.

use serde::{Deserialize, Serialize};

use super::error::{Corner, FrameError};
use crate::geo::GeoPoint;

/// Geographic coordinates of three floor-plan corners.
///
/// Persisted as a JSON array of exactly three `{lat, lon}` objects, in the
/// order bottom-left, bottom-right, top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[GeoPoint; 3]", into = "[GeoPoint; 3]")]
pub struct ReferenceCorners {
    /// Geographic point at pixel `(0, 0)`
    pub bottom_left: GeoPoint,
    /// Geographic point at pixel `(width, 0)`
    pub bottom_right: GeoPoint,
    /// Geographic point at pixel `(0, height)`
    pub top_left: GeoPoint,
}

impl ReferenceCorners {
    pub fn new(bottom_left: GeoPoint, bottom_right: GeoPoint, top_left: GeoPoint) -> Self {
        Self {
            bottom_left,
            bottom_right,
            top_left,
        }
    }

    /// Look up a corner by name.
    pub fn get(&self, corner: Corner) -> GeoPoint {
        match corner {
            Corner::BottomLeft => self.bottom_left,
            Corner::BottomRight => self.bottom_right,
            Corner::TopLeft => self.top_left,
        }
    }

    /// Reject corner sets where any two points coincide within tolerance.
    pub fn ensure_distinct(&self) -> Result<(), FrameError> {
        const PAIRS: [(Corner, Corner); 3] = [
            (Corner::BottomLeft, Corner::BottomRight),
            (Corner::BottomLeft, Corner::TopLeft),
            (Corner::BottomRight, Corner::TopLeft),
        ];

        for (first, second) in PAIRS {
            if self.get(first).approx_eq(&self.get(second)) {
                return Err(FrameError::DegenerateCorners { first, second });
            }
        }
        Ok(())
    }
}

impl From<[GeoPoint; 3]> for ReferenceCorners {
    fn from([bottom_left, bottom_right, top_left]: [GeoPoint; 3]) -> Self {
        Self::new(bottom_left, bottom_right, top_left)
    }
}

impl From<ReferenceCorners> for [GeoPoint; 3] {
    fn from(corners: ReferenceCorners) -> Self {
        [corners.bottom_left, corners.bottom_right, corners.top_left]
    }
}
