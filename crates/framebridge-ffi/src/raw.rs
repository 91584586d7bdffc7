//! Raw frame descriptor and the exported processing entry point.

use framebridge_core::{process_frame, FrameView, Rotation, RGBA_CHANNELS};

/// Caller-owned RGBA frame descriptor.
///
/// The host allocates both the descriptor and the pixel buffer it points
/// to; this crate never allocates, frees, or retains either. After a
/// 90/270 degree rotation the bridge updates `width` and `height` in place
/// to the swapped shape. The buffer byte count (`width * height * 4`)
/// never changes.
#[repr(C)]
#[derive(Debug)]
pub struct RawFrame {
    /// Interleaved 8-bit RGBA pixel data, row-major.
    pub data: *mut u8,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
}

/// Rotate and optionally edge-render a frame in place.
///
/// The rotation step runs first: 90, 180 and 270 rotate the content
/// clockwise by that many degrees; any other value (including 0) leaves
/// the content unrotated. If `apply_edge_detection` is set, the (possibly
/// rotated) frame is then replaced entirely with an inverted Canny edge
/// rendering - edges dark on a light background, expanded back to RGBA.
///
/// Returns nothing; all results are side effects on the caller's buffer.
/// Null descriptor or data pointers and zero-sized frames are no-ops.
///
/// # Safety
///
/// `frame` must either be null or point to a valid descriptor whose `data`
/// is null or references a live buffer of exactly `width * height * 4`
/// bytes for the full duration of the call. No other thread may read or
/// write the buffer while the call runs; no locking is performed here.
/// The pointers are not retained past the call.
#[no_mangle]
pub unsafe extern "C" fn framebridge_process_frame(
    frame: *mut RawFrame,
    rotation_degrees: i32,
    apply_edge_detection: bool,
) {
    let Some(raw) = frame.as_mut() else {
        return;
    };
    if raw.data.is_null() {
        return;
    }
    let len = raw.width as usize * raw.height as usize * RGBA_CHANNELS;
    if len == 0 {
        return;
    }

    let data = std::slice::from_raw_parts_mut(raw.data, len);
    let Ok(mut view) = FrameView::new(data, raw.width, raw.height) else {
        return;
    };

    process_frame(
        &mut view,
        Rotation::from_degrees(rotation_degrees),
        apply_edge_detection,
    );

    let (width, height) = view.dimensions();
    raw.width = width;
    raw.height = height;
}
