// SPDX-License-Identifier: MPL-2.0
//! Adjustment value objects shared by the codec and the adjustment session.

pub mod newtypes;

pub use newtypes::{codec_scale_bounds, slider_bounds, SliderPercent};

/// The four slider values of an adjustment session.
///
/// All axes default to 100% (the identity transform) and are session-local:
/// they reset whenever a new image is opened for editing and are never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdjustmentParams {
    /// Multiplicative brightness (100% = unchanged).
    pub brightness: SliderPercent,
    /// Linear contrast around mid-gray (100% = unchanged).
    pub contrast: SliderPercent,
    /// Saturation relative to luma (100% = unchanged, 50% = half-way to gray).
    pub saturation: SliderPercent,
    /// Uniform scale applied to both dimensions (100% = native size).
    pub scale: SliderPercent,
}

impl AdjustmentParams {
    /// Creates identity parameters (all axes at 100%).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether every axis is at its identity value.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.brightness.is_identity()
            && self.contrast.is_identity()
            && self.saturation.is_identity()
            && self.scale.is_identity()
    }

    /// Returns whether the three color axes are at identity (scale ignored).
    #[must_use]
    pub fn is_color_identity(&self) -> bool {
        self.brightness.is_identity() && self.contrast.is_identity() && self.saturation.is_identity()
    }

    /// Sets all four axes back to 100%.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
