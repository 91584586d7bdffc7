//! Framebridge FFI - C ABI bindings for frame processing
//!
//! This crate exposes the framebridge-core pipeline to host applications
//! through a plain C ABI. The host owns frame capture, buffer allocation
//! and display; this boundary receives a frame descriptor, mutates the
//! pixel content in place, and returns nothing.
//!
//! # Module Structure
//!
//! - `raw` - The frame descriptor type and the exported entry point
//!
//! # Usage (C)
//!
//! ```c
//! FramebridgeRawFrame frame = { pixels, width, height };
//! framebridge_process_frame(&frame, 90, true);
//! // frame.width / frame.height now reflect the rotated shape
//! ```

mod raw;

pub use raw::{framebridge_process_frame, RawFrame};
