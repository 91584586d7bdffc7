//! Frame transform sequencing.
//!
//! The bridge owns exactly one piece of logic: rotate first, then
//! optionally replace the frame with an inverted edge rendering. Both steps
//! operate on the same caller-owned buffer; the edge step consumes the
//! rotated content. The individual algorithms live behind the
//! [`Rotator`], [`Grayscaler`] and [`EdgeDetector`] capabilities so they
//! can be swapped independently.
//!
//! # Processing Order
//!
//! 1. Rotation (90/180/270 clockwise, or nothing)
//! 2. Edge rendering (grayscale, Canny, invert, expand to RGBA)

use crate::edges::{expand_to_rgba, CannyEdgeDetector, EdgeDetector};
use crate::frame::FrameView;
use crate::luminance::{Bt709Grayscaler, Grayscaler};
use crate::transform::{QuarterTurnRotator, Rotation, Rotator};
use image::imageops;

/// Stateless frame transform bridge.
///
/// One `process` call handles one frame; the bridge keeps no memory of
/// previous calls and performs no locking. The caller must ensure no other
/// thread touches the buffer for the duration of the call.
#[derive(Debug, Clone, Copy)]
pub struct FrameBridge<R = QuarterTurnRotator, G = Bt709Grayscaler, E = CannyEdgeDetector> {
    rotator: R,
    grayscaler: G,
    edge_detector: E,
}

impl FrameBridge {
    /// Create a bridge with the default capability implementations.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: Default, G: Default, E: Default> Default for FrameBridge<R, G, E> {
    fn default() -> Self {
        Self {
            rotator: R::default(),
            grayscaler: G::default(),
            edge_detector: E::default(),
        }
    }
}

impl<R, G, E> FrameBridge<R, G, E> {
    /// Create a bridge from explicit capability implementations.
    pub fn with_stages(rotator: R, grayscaler: G, edge_detector: E) -> Self {
        Self {
            rotator,
            grayscaler,
            edge_detector,
        }
    }
}

impl<R: Rotator, G: Grayscaler, E: EdgeDetector> FrameBridge<R, G, E> {
    /// Transform a frame in place.
    ///
    /// The rotation step runs first; the edge step, if enabled, consumes
    /// the rotated content and replaces the buffer entirely with a binary
    /// edge rendering (edges dark on a light background). The view's
    /// logical dimensions are updated when a 90/270 rotation swaps them.
    pub fn process(
        &self,
        frame: &mut FrameView<'_>,
        rotation: Rotation,
        apply_edge_detection: bool,
    ) {
        if rotation == Rotation::None && !apply_edge_detection {
            return;
        }

        let mut image = frame.to_image();

        if rotation != Rotation::None {
            image = self.rotator.rotate(&image, rotation);
        }

        if apply_edge_detection {
            let intensity = self.grayscaler.grayscale(&image);
            let mut mask = self.edge_detector.detect(&intensity);
            imageops::invert(&mut mask);
            image = expand_to_rgba(&mask);
        }

        frame.copy_from_image(&image);
    }
}

/// Transform a frame in place using the default bridge.
///
/// Convenience wrapper over [`FrameBridge::process`] for callers that do
/// not swap any of the capability implementations.
pub fn process_frame(frame: &mut FrameView<'_>, rotation: Rotation, apply_edge_detection: bool) {
    FrameBridge::new().process(frame, rotation, apply_edge_detection);
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::frame::RGBA_CHANNELS;
    use proptest::prelude::*;

    /// Strategy for generating frame dimensions (kept small: the Canny
    /// pass dominates test time).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (4u32..=24, 4u32..=24)
    }

    fn rotation_strategy() -> impl Strategy<Value = Rotation> {
        prop_oneof![
            Just(Rotation::None),
            Just(Rotation::Cw90),
            Just(Rotation::Cw180),
            Just(Rotation::Cw270),
        ]
    }

    fn create_pattern_buffer(width: u32, height: u32, seed: u8) -> Vec<u8> {
        let mut pixels = Vec::with_capacity((width * height) as usize * RGBA_CHANNELS);
        for y in 0..height {
            for x in 0..width {
                let v = (((y * width + x) as u8).wrapping_mul(31)).wrapping_add(seed);
                pixels.extend_from_slice(&[v, v.wrapping_add(64), v.wrapping_mul(3), 255]);
            }
        }
        pixels
    }

    proptest! {
        /// Property: The buffer byte count is invariant under every
        /// rotation/edge combination.
        #[test]
        fn prop_byte_count_invariant(
            (width, height) in dimensions_strategy(),
            rotation in rotation_strategy(),
            edges in any::<bool>(),
            seed in any::<u8>(),
        ) {
            let mut buf = create_pattern_buffer(width, height, seed);
            let len = buf.len();

            let mut view = FrameView::new(&mut buf, width, height).unwrap();
            process_frame(&mut view, rotation, edges);

            let (w, h) = view.dimensions();
            prop_assert_eq!((w, h), rotation.apply_to_dimensions(width, height));
            prop_assert_eq!(buf.len(), len);
        }

        /// Property: With edges enabled, every output pixel is either the
        /// background or the edge color.
        #[test]
        fn prop_edge_output_binary(
            (width, height) in dimensions_strategy(),
            rotation in rotation_strategy(),
            seed in any::<u8>(),
        ) {
            let mut buf = create_pattern_buffer(width, height, seed);
            let mut view = FrameView::new(&mut buf, width, height).unwrap();
            process_frame(&mut view, rotation, true);

            for p in view.pixels().chunks_exact(RGBA_CHANNELS) {
                prop_assert!(
                    p == [255, 255, 255, 255] || p == [0, 0, 0, 255],
                    "unexpected pixel {:?}",
                    p
                );
            }
        }
    }
}
