// SPDX-License-Identifier: MPL-2.0
//! The single-image adjustment session.
//!
//! An [`AdjustmentSession`] walks `Closed -> Open -> Closed`. Opening
//! captures the targeted record by value and decodes it once; slider changes
//! only touch the cheap parameter state, and [`AdjustmentSession::preview`]
//! re-runs the codec's adjustment pass over the cached raster without
//! re-encoding. Encoding to final bytes happens exactly once, on
//! [`AdjustmentSession::confirm`].
//!
//! Confirm re-validates its target against the collection snapshot it is
//! given: if the edited index was removed or its record replaced while the
//! session was open, the edit is discarded with [`Error::StaleSession`]
//! instead of overwriting the wrong entry.

use crate::collection::ImageCollection;
use crate::config::{defaults::DEFAULT_JPEG_QUALITY, Config};
use crate::domain::editing::{AdjustmentParams, SliderPercent};
use crate::error::{Error, Result};
use crate::media::{codec, ImageRecord};
use image_rs::DynamicImage;

enum SessionState {
    Closed,
    Open {
        index: usize,
        source: ImageRecord,
        raster: DynamicImage,
        params: AdjustmentParams,
    },
}

/// Transient editing state for exactly one image at a time.
pub struct AdjustmentSession {
    state: SessionState,
    jpeg_quality: u8,
}

impl AdjustmentSession {
    /// Creates a closed session with the default bake quality.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: SessionState::Closed,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }

    /// Creates a closed session configured from the host's settings.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            state: SessionState::Closed,
            jpeg_quality: config.jpeg_quality(),
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, SessionState::Open { .. })
    }

    /// Returns the index being edited, or `None` when closed.
    #[must_use]
    pub fn editing_index(&self) -> Option<usize> {
        match &self.state {
            SessionState::Open { index, .. } => Some(*index),
            SessionState::Closed => None,
        }
    }

    /// Returns the current slider values, or `None` when closed.
    #[must_use]
    pub fn params(&self) -> Option<AdjustmentParams> {
        match &self.state {
            SessionState::Open { params, .. } => Some(*params),
            SessionState::Closed => None,
        }
    }

    /// Opens the record at `index` for editing.
    ///
    /// The record is captured by value and decoded once; sliders reset to
    /// the identity transform. Opening over an already-open session discards
    /// the previous edit first, exactly like cancelling it.
    ///
    /// Fails with [`Error::IndexOutOfRange`] for an invalid index and
    /// [`Error::Decode`] when the stored bytes do not decode; in both cases
    /// the session ends up closed.
    pub fn open(&mut self, collection: &ImageCollection, index: usize) -> Result<()> {
        self.state = SessionState::Closed;
        let source = collection
            .get(index)
            .ok_or(Error::IndexOutOfRange { index, len: collection.len() })?
            .clone();
        let raster = codec::decode(source.source.bytes())?;
        self.state = SessionState::Open {
            index,
            source,
            raster,
            params: AdjustmentParams::new(),
        };
        Ok(())
    }

    /// Sets the brightness slider (clamped to the valid range).
    /// Ignored when the session is closed.
    pub fn set_brightness(&mut self, percent: i32) {
        self.with_params(|params| params.brightness = SliderPercent::new(percent));
    }

    /// Sets the contrast slider (clamped to the valid range).
    /// Ignored when the session is closed.
    pub fn set_contrast(&mut self, percent: i32) {
        self.with_params(|params| params.contrast = SliderPercent::new(percent));
    }

    /// Sets the saturation slider (clamped to the valid range).
    /// Ignored when the session is closed.
    pub fn set_saturation(&mut self, percent: i32) {
        self.with_params(|params| params.saturation = SliderPercent::new(percent));
    }

    /// Sets the scale slider (clamped to the valid range).
    /// Ignored when the session is closed.
    pub fn set_scale(&mut self, percent: i32) {
        self.with_params(|params| params.scale = SliderPercent::new(percent));
    }

    /// Sets all sliders back to the identity transform without closing the
    /// session or touching the captured image.
    pub fn reset(&mut self) {
        self.with_params(AdjustmentParams::reset);
    }

    /// Renders the live preview: the cached raster with the current sliders
    /// applied, no re-encode. Returns `None` when closed.
    #[must_use]
    pub fn preview(&self) -> Option<DynamicImage> {
        match &self.state {
            SessionState::Open { raster, params, .. } => {
                Some(codec::apply_adjustment(raster, params))
            }
            SessionState::Closed => None,
        }
    }

    /// Bakes the current sliders into the edited image and returns the
    /// collection snapshot with the result swapped in.
    ///
    /// The target is re-validated against `collection`: when the edited
    /// index is gone or holds a different record, the edit is discarded, the
    /// session closes, and [`Error::StaleSession`] is returned; the caller
    /// drops the result without surfacing an error. On success the replaced
    /// record keeps its identifier and alt text, and the session closes.
    ///
    /// # Panics
    ///
    /// Panics when called on a closed session; the host must only offer
    /// confirm while an edit is open.
    pub fn confirm(&mut self, collection: &ImageCollection) -> Result<ImageCollection> {
        let SessionState::Open { index, source, raster, params } = &self.state else {
            panic!("confirm requires an open session");
        };

        match collection.get(*index) {
            Some(current) if current == source => {}
            _ => {
                let index = *index;
                self.state = SessionState::Closed;
                return Err(Error::StaleSession { index });
            }
        }

        let baked = codec::apply_adjustment(raster, params);
        // An encode failure leaves the session open so the edit survives.
        let encoded = codec::encode(&baked, self.jpeg_quality)?;
        let record = ImageRecord {
            id: source.id.clone(),
            source: encoded,
            alt_text: source.alt_text.clone(),
        };
        let replaced = collection.replace_at(*index, record)?;
        self.state = SessionState::Closed;
        Ok(replaced)
    }

    /// Closes the session, discarding all slider state. Always available.
    pub fn cancel(&mut self) {
        self.state = SessionState::Closed;
    }

    fn with_params(&mut self, f: impl FnOnce(&mut AdjustmentParams)) {
        if let SessionState::Open { params, .. } = &mut self.state {
            f(params);
        }
    }
}

impl Default for AdjustmentSession {
    fn default() -> Self {
        Self::new()
    }
}
