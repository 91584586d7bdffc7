//! Edge-detection rendering of intensity images.
//!
//! The edge stage turns a grayscale intensity image into a binary mask
//! (255 = edge), which the pipeline then inverts and expands back to RGBA.
//! The inversion makes edges render dark on a light background.

use image::{GrayImage, Luma, Rgba, RgbaImage};
use imageproc::edges::canny;

/// Canny hysteresis low threshold for the edge rendering.
pub const CANNY_LOW_THRESHOLD: f32 = 80.0;

/// Canny hysteresis high threshold for the edge rendering.
pub const CANNY_HIGH_THRESHOLD: f32 = 100.0;

/// Capability for producing a binary edge mask from an intensity image.
pub trait EdgeDetector {
    /// Detect edges. The result has the same dimensions as the input and
    /// contains only 0 (background) and 255 (edge) values.
    fn detect(&self, intensity: &GrayImage) -> GrayImage;
}

/// Canny edge detector with hysteresis thresholds.
#[derive(Debug, Clone, Copy)]
pub struct CannyEdgeDetector {
    /// Gradient magnitudes below this are never edges.
    pub low_threshold: f32,
    /// Gradient magnitudes above this are always edges.
    pub high_threshold: f32,
}

impl Default for CannyEdgeDetector {
    fn default() -> Self {
        Self {
            low_threshold: CANNY_LOW_THRESHOLD,
            high_threshold: CANNY_HIGH_THRESHOLD,
        }
    }
}

impl EdgeDetector for CannyEdgeDetector {
    fn detect(&self, intensity: &GrayImage) -> GrayImage {
        canny(intensity, self.low_threshold, self.high_threshold)
    }
}

/// Expand a single-channel image back to the 4-channel frame layout with
/// opaque alpha.
pub fn expand_to_rgba(gray: &GrayImage) -> RgbaImage {
    RgbaImage::from_fn(gray.width(), gray.height(), |x, y| {
        let Luma([v]) = *gray.get_pixel(x, y);
        Rgba([v, v, v, 255])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let detector = CannyEdgeDetector::default();
        assert_eq!(detector.low_threshold, 80.0);
        assert_eq!(detector.high_threshold, 100.0);
    }

    #[test]
    fn test_flat_image_has_no_edges() {
        let flat = GrayImage::from_pixel(32, 32, Luma([128]));
        let mask = CannyEdgeDetector::default().detect(&flat);

        assert_eq!(mask.dimensions(), (32, 32));
        assert!(mask.as_raw().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_step_edge_is_detected() {
        // Hard black/white vertical split produces a strong gradient
        let split = GrayImage::from_fn(32, 32, |x, _| if x < 16 { Luma([0]) } else { Luma([255]) });
        let mask = CannyEdgeDetector::default().detect(&split);

        assert!(mask.as_raw().iter().any(|&v| v == 255));
    }

    #[test]
    fn test_mask_is_binary() {
        let checker = GrayImage::from_fn(32, 32, |x, y| {
            Luma([if (x / 8 + y / 8) % 2 == 0 { 0 } else { 255 }])
        });
        let mask = CannyEdgeDetector::default().detect(&checker);

        assert!(mask.as_raw().iter().all(|&v| v == 0 || v == 255));
    }

    #[test]
    fn test_expand_to_rgba() {
        let mut gray = GrayImage::from_pixel(2, 1, Luma([0]));
        gray.put_pixel(1, 0, Luma([255]));

        let rgba = expand_to_rgba(&gray);
        assert_eq!(rgba.dimensions(), (2, 1));
        assert_eq!(*rgba.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
        assert_eq!(*rgba.get_pixel(1, 0), Rgba([255, 255, 255, 255]));
    }
}
