//! Framebridge Core - in-place video frame transforms
//!
//! This crate provides the core functionality behind the Framebridge host
//! boundary: a borrowed view over a caller-owned RGBA frame buffer, a
//! quarter-turn rotation stage, and an optional Canny edge rendering, all
//! applied in place in a single synchronous call.
//!
//! The sequencing lives in [`pipeline::FrameBridge`]; the algorithms sit
//! behind three swappable capabilities ([`Rotator`], [`Grayscaler`],
//! [`EdgeDetector`]) with defaults backed by the `image` and `imageproc`
//! crates.

pub mod edges;
pub mod frame;
pub mod luminance;
pub mod pipeline;
pub mod transform;

pub use edges::{CannyEdgeDetector, EdgeDetector, CANNY_HIGH_THRESHOLD, CANNY_LOW_THRESHOLD};
pub use frame::{FrameError, FrameView, RGBA_CHANNELS};
pub use luminance::{Bt709Grayscaler, Grayscaler};
pub use pipeline::{process_frame, FrameBridge};
pub use transform::{QuarterTurnRotator, Rotation, Rotator};
