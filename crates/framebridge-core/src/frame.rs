//! Borrowed frame view over a caller-owned RGBA pixel buffer.
//!
//! The host application owns the allocation; this crate only ever sees a
//! mutable borrow of it for the duration of a single call. Transforms write
//! their results back into the same allocation, so the total byte count of a
//! frame never changes — quarter-turn rotation and channel expansion both
//! preserve `width * height * 4`.

use image::RgbaImage;
use thiserror::Error;

/// Interleaved 8-bit channels per pixel (red, green, blue, alpha).
pub const RGBA_CHANNELS: usize = 4;

/// Error types for frame view construction.
#[derive(Debug, Error)]
pub enum FrameError {
    /// The pixel buffer length does not match the declared dimensions.
    #[error("buffer of {actual} bytes does not match {width}x{height} RGBA frame ({expected} bytes)")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// One or both dimensions are zero.
    #[error("frame dimensions {width}x{height} are empty")]
    EmptyFrame { width: u32, height: u32 },
}

/// A mutable view of a caller-owned RGBA frame.
///
/// Non-owning: the view is valid only for the call it was created for, is
/// never copied out or retained, and never resizes or reallocates the
/// underlying storage. The logical `width`/`height` may swap after a
/// 90/270 degree rotation; callers read the updated dimensions back through
/// [`FrameView::dimensions`].
#[derive(Debug)]
pub struct FrameView<'a> {
    data: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> FrameView<'a> {
    /// Create a view over an existing pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::EmptyFrame`] if either dimension is zero and
    /// [`FrameError::BufferSizeMismatch`] if the buffer length is not
    /// exactly `width * height * 4`.
    pub fn new(data: &'a mut [u8], width: u32, height: u32) -> Result<Self, FrameError> {
        if width == 0 || height == 0 {
            return Err(FrameError::EmptyFrame { width, height });
        }
        let expected = width as usize * height as usize * RGBA_CHANNELS;
        if data.len() != expected {
            return Err(FrameError::BufferSizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Logical frame width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Logical frame height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Logical dimensions as `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw RGBA pixel data in row-major order.
    pub fn pixels(&self) -> &[u8] {
        self.data
    }

    /// Copy the frame content into an owned [`RgbaImage`] for processing.
    pub fn to_image(&self) -> RgbaImage {
        // The constructor guarantees len == width * height * 4.
        RgbaImage::from_raw(self.width, self.height, self.data.to_vec())
            .expect("frame buffer length validated at construction")
    }

    /// Write a processed image back into the caller's buffer, updating the
    /// logical dimensions.
    ///
    /// The image must have the same byte count as the view; transforms in
    /// this crate never change it.
    pub fn copy_from_image(&mut self, image: &RgbaImage) {
        debug_assert_eq!(
            image.as_raw().len(),
            self.data.len(),
            "transform changed the frame byte count"
        );
        self.data.copy_from_slice(image.as_raw());
        self.width = image.width();
        self.height = image.height();
    }
}
