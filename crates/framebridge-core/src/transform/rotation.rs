//! Quarter-turn rotation of RGBA frames.
//!
//! Rotation is a full content transform, not an orientation flag: the pixel
//! data is rewritten and the logical dimensions swap for 90/270 degree
//! turns. Because the frame stays RGBA and the pixel count is unchanged,
//! every rotation preserves the total byte count of the buffer.

use image::{imageops, RgbaImage};
use serde::{Deserialize, Serialize};

/// Clockwise quarter-turn rotation applied to a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rotation {
    /// No rotation.
    #[default]
    None,
    /// Rotate 90 degrees clockwise.
    Cw90,
    /// Rotate 180 degrees.
    Cw180,
    /// Rotate 270 degrees clockwise (90 CCW).
    Cw270,
}

impl Rotation {
    /// Parse a rotation angle in degrees.
    ///
    /// Only 0, 90, 180 and 270 are recognized; any other value (including
    /// negative angles and non-quarter turns) falls back to
    /// [`Rotation::None`], matching the host-facing contract where an
    /// unrecognized angle behaves as "no rotation".
    pub fn from_degrees(degrees: i32) -> Self {
        match degrees {
            90 => Rotation::Cw90,
            180 => Rotation::Cw180,
            270 => Rotation::Cw270,
            _ => Rotation::None,
        }
    }

    /// Returns true if this rotation swaps width and height dimensions.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Rotation::Cw90 | Rotation::Cw270)
    }

    /// Get the effective dimensions after applying this rotation.
    pub fn apply_to_dimensions(self, width: u32, height: u32) -> (u32, u32) {
        if self.swaps_dimensions() {
            (height, width)
        } else {
            (width, height)
        }
    }
}

/// Capability for rotating a frame by a quarter turn.
pub trait Rotator {
    /// Return the rotated frame. The output dimensions follow
    /// [`Rotation::apply_to_dimensions`].
    fn rotate(&self, frame: &RgbaImage, rotation: Rotation) -> RgbaImage;
}

/// Default rotator backed by the `image` crate's transpose operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuarterTurnRotator;

impl Rotator for QuarterTurnRotator {
    fn rotate(&self, frame: &RgbaImage, rotation: Rotation) -> RgbaImage {
        match rotation {
            Rotation::None => frame.clone(),
            Rotation::Cw90 => imageops::rotate90(frame),
            Rotation::Cw180 => imageops::rotate180(frame),
            Rotation::Cw270 => imageops::rotate270(frame),
        }
    }
}
