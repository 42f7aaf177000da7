//! Frames sized from the floor-plan image itself.
//!
//! The reference corners are stored in configuration, but the pixel size of
//! the frame comes from the floor-plan image. Only the image header is read;
//! pixel data is never decoded.

use std::io::Cursor;

use image::ImageReader;
use log::debug;
use thiserror::Error;

use crate::frame::{CoordinateFrame, FrameError, ReferenceCorners};

/// Error types for building a frame from a floor-plan image.
#[derive(Debug, Error)]
pub enum FloorPlanError {
    /// The image format is not recognized or the header is corrupted.
    #[error("Unreadable floor plan image: {0}")]
    Decode(String),

    /// The corners could not be solved for the image dimensions.
    #[error(transparent)]
    Frame(#[from] FrameError),
}

/// Read the pixel dimensions `(width, height)` of a PNG or JPEG floor plan.
///
/// # Errors
///
/// Returns `FloorPlanError::Decode` if the format cannot be determined or the
/// header cannot be parsed.
pub fn image_dimensions(bytes: &[u8]) -> Result<(u32, u32), FloorPlanError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| FloorPlanError::Decode(e.to_string()))?;

    if reader.format().is_none() {
        return Err(FloorPlanError::Decode("unknown image format".to_string()));
    }

    reader
        .into_dimensions()
        .map_err(|e| FloorPlanError::Decode(e.to_string()))
}

/// Solve a frame for the given corners, sized to the floor-plan image.
pub fn frame_for_floor_plan(
    corners: &ReferenceCorners,
    bytes: &[u8],
) -> Result<CoordinateFrame, FloorPlanError> {
    let (width, height) = image_dimensions(bytes)?;
    debug!("Floor plan is {}x{} px", width, height);

    let frame = CoordinateFrame::from_corners(corners, width as f64, height as f64)?;
    Ok(frame)
}
