//! Luminance calculation and grayscale conversion using ITU-R BT.709
//! coefficients.
//!
//! The edge-rendering pipeline works on a single-channel intensity image;
//! this module owns the RGBA-to-intensity conversion behind the
//! [`Grayscaler`] capability so an alternative weighting can be swapped in.

use image::{GrayImage, Luma, RgbaImage};

/// ITU-R BT.709 coefficient for red channel in luminance calculation.
pub const LUMINANCE_R: f32 = 0.2126;

/// ITU-R BT.709 coefficient for green channel in luminance calculation.
pub const LUMINANCE_G: f32 = 0.7152;

/// ITU-R BT.709 coefficient for blue channel in luminance calculation.
pub const LUMINANCE_B: f32 = 0.0722;

/// Calculate luminance from u8 RGB values (0 to 255).
///
/// Uses ITU-R BT.709 coefficients for accurate perceptual luminance.
/// Alpha does not participate.
#[inline]
pub fn calculate_luminance_u8(r: u8, g: u8, b: u8) -> u8 {
    let lum = LUMINANCE_R * r as f32 + LUMINANCE_G * g as f32 + LUMINANCE_B * b as f32;
    lum.clamp(0.0, 255.0).round() as u8
}

/// Capability for deriving a single-channel intensity image from an RGBA
/// frame.
pub trait Grayscaler {
    /// Convert a frame to a grayscale intensity image of the same
    /// dimensions.
    fn grayscale(&self, frame: &RgbaImage) -> GrayImage;
}

/// Default grayscaler using the BT.709 luminance weighting.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bt709Grayscaler;

impl Grayscaler for Bt709Grayscaler {
    fn grayscale(&self, frame: &RgbaImage) -> GrayImage {
        GrayImage::from_fn(frame.width(), frame.height(), |x, y| {
            let p = frame.get_pixel(x, y);
            Luma([calculate_luminance_u8(p[0], p[1], p[2])])
        })
    }
}
