// SPDX-License-Identifier: MPL-2.0
//! Device abstraction for live camera streams.
//!
//! The platform half of capture lives behind two small traits so the state
//! machine in [`crate::capture`] stays testable without hardware: a
//! [`CaptureBackend`] hands out streams, a [`VideoStream`] yields frames and
//! owns its device handle until `stop()`.

use crate::capture::Facing;
use crate::error::{Error, Result};
use image_rs::{DynamicImage, ImageBuffer, Rgba};
use std::sync::Arc;

/// One sampled video frame at the stream's native resolution.
///
/// Uses `Arc<Vec<u8>>` to avoid expensive clones when passing frame data
/// around; the data is only cloned when an owned buffer is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    /// RGBA pixel data (shared reference to avoid expensive clones).
    pub rgba_data: Arc<Vec<u8>>,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
}

impl FrameBuffer {
    /// Creates a frame from RGBA data.
    #[must_use]
    pub fn new(rgba_data: Arc<Vec<u8>>, width: u32, height: u32) -> Self {
        Self { rgba_data, width, height }
    }

    /// Converts the frame to a raster image for the codec.
    ///
    /// Note: this clones the underlying pixel data since `ImageBuffer::from_raw`
    /// requires ownership. Fails with [`Error::Decode`] when the buffer does
    /// not match the declared dimensions.
    pub fn to_dynamic_image(&self) -> Result<DynamicImage> {
        ImageBuffer::<Rgba<u8>, _>::from_raw(self.width, self.height, (*self.rgba_data).clone())
            .map(DynamicImage::ImageRgba8)
            .ok_or_else(|| {
                Error::Decode(format!(
                    "frame buffer of {} bytes does not match {}x{} RGBA",
                    self.rgba_data.len(),
                    self.width,
                    self.height
                ))
            })
    }
}

/// A live device stream.
///
/// The implementation owns the underlying device handle; `stop()` must
/// release it synchronously and be safe to call more than once.
pub trait VideoStream {
    /// Samples the current frame at the stream's native resolution.
    fn current_frame(&self) -> Result<FrameBuffer>;

    /// Stops all tracks and releases the device handle. Idempotent.
    fn stop(&mut self);

    /// Returns whether the stream still holds its device handle.
    fn is_active(&self) -> bool;
}

/// A source of device streams (the platform's media layer).
pub trait CaptureBackend {
    /// Requests a stream with the given facing preference.
    ///
    /// Fails with [`Error::DeviceUnavailable`] on permission denial or when
    /// no suitable device exists.
    fn acquire(&mut self, facing: Facing) -> Result<Box<dyn VideoStream>>;
}
