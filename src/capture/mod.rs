// SPDX-License-Identifier: MPL-2.0
//! Camera stream lifecycle.
//!
//! [`CaptureManager`] owns exactly zero or one live device stream and walks
//! the state machine `Idle -> Requesting -> Live -> Idle`. Switching the
//! facing mode while live stops the current stream *before* the new
//! acquisition starts, so two device handles are never held at once.
//!
//! The manager releases its stream on [`CaptureManager::close`] and again on
//! drop, which is the one hard resource contract in this crate: a live
//! camera handle must never outlive the component that requested it.

pub mod backend;

pub use backend::{CaptureBackend, FrameBuffer, VideoStream};

use crate::config::{defaults::DEFAULT_JPEG_QUALITY, Config};
use crate::error::Result;
use crate::media::{codec, ImageRecord};
use serde::{Deserialize, Serialize};

// =============================================================================
// Facing
// =============================================================================

/// Camera lens preference: user-facing ("selfie") or environment-facing
/// (rear).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Facing {
    /// Front lens, toward the user.
    User,
    /// Rear lens, toward the scene.
    #[default]
    Environment,
}

impl Facing {
    /// Returns the other facing mode.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Facing::User => Facing::Environment,
            Facing::Environment => Facing::User,
        }
    }
}

// =============================================================================
// Capture state machine
// =============================================================================

/// Observable lifecycle state of the capture manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    /// No stream held.
    Idle,
    /// A device request is in flight.
    Requesting,
    /// A stream is live and frames can be sampled.
    Live,
}

enum StreamSlot {
    Idle,
    Requesting,
    Live(Box<dyn VideoStream>),
}

/// Owns the lifecycle of at most one live camera stream.
pub struct CaptureManager<B: CaptureBackend> {
    backend: B,
    facing: Facing,
    slot: StreamSlot,
    jpeg_quality: u8,
}

impl<B: CaptureBackend> CaptureManager<B> {
    /// Creates an idle manager with the default facing preference and frame
    /// quality.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            facing: Facing::default(),
            slot: StreamSlot::Idle,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }

    /// Creates an idle manager configured from the host's settings.
    pub fn from_config(backend: B, config: &Config) -> Self {
        Self {
            backend,
            facing: config.capture.facing,
            slot: StreamSlot::Idle,
            jpeg_quality: config.jpeg_quality(),
        }
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> CaptureState {
        match self.slot {
            StreamSlot::Idle => CaptureState::Idle,
            StreamSlot::Requesting => CaptureState::Requesting,
            StreamSlot::Live(_) => CaptureState::Live,
        }
    }

    /// Returns the current facing preference.
    #[must_use]
    pub fn facing(&self) -> Facing {
        self.facing
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        matches!(self.slot, StreamSlot::Live(_))
    }

    /// Requests a device stream with the given facing preference.
    ///
    /// Any stream already held is stopped first, so at most one device
    /// handle exists at any instant. On failure the manager returns to
    /// `Idle` and the caller surfaces the error as a dismissible notice.
    pub fn open(&mut self, facing: Facing) -> Result<()> {
        self.release_stream();
        self.facing = facing;
        self.slot = StreamSlot::Requesting;
        match self.backend.acquire(facing) {
            Ok(stream) => {
                self.slot = StreamSlot::Live(stream);
                Ok(())
            }
            Err(err) => {
                self.slot = StreamSlot::Idle;
                Err(err)
            }
        }
    }

    /// Toggles the facing preference.
    ///
    /// When idle this only flips the stored preference. When live, the
    /// current stream is stopped and a stream with the opposite facing is
    /// acquired, with the same failure mode as [`CaptureManager::open`].
    pub fn switch_facing(&mut self) -> Result<()> {
        let next = self.facing.opposite();
        if !self.is_live() {
            self.facing = next;
            return Ok(());
        }
        self.open(next)
    }

    /// Samples the current video frame at its native resolution and returns
    /// it as a new local-only record with default alt text.
    ///
    /// # Panics
    ///
    /// Panics when no stream is live; calling this outside the `Live` state
    /// is a programming error in the host, not a recoverable condition.
    pub fn capture_frame(&self) -> Result<ImageRecord> {
        let StreamSlot::Live(stream) = &self.slot else {
            panic!("capture_frame requires a live stream");
        };
        let frame = stream.current_frame()?;
        let raster = frame.to_dynamic_image()?;
        let source = codec::encode(&raster, self.jpeg_quality)?;
        Ok(ImageRecord::new(source))
    }

    /// Stops the stream, if any, and returns to `Idle`. Safe to call more
    /// than once.
    pub fn close(&mut self) {
        self.release_stream();
    }

    fn release_stream(&mut self) {
        if let StreamSlot::Live(mut stream) = std::mem::replace(&mut self.slot, StreamSlot::Idle) {
            stream.stop();
        }
    }
}

impl<B: CaptureBackend> Drop for CaptureManager<B> {
    fn drop(&mut self) {
        self.release_stream();
    }
}
