// SPDX-License-Identifier: MPL-2.0
//! Editing newtypes.
//!
//! This module provides type-safe wrappers for adjustment values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Slider Bounds
// =============================================================================

/// Slider bounds shared by all four adjustment axes (50% to 150%).
pub mod slider_bounds {
    /// Minimum slider percentage.
    pub const MIN: i32 = 50;
    /// Maximum slider percentage.
    pub const MAX: i32 = 150;
    /// Default (identity) slider percentage.
    pub const DEFAULT: i32 = 100;
}

/// Defensive scale bounds enforced by the codec itself (1% to 400%).
///
/// Slider input is already constrained to [`slider_bounds`]; this wider range
/// only guards direct codec callers against zero- or absurd-size outputs.
pub mod codec_scale_bounds {
    /// Minimum codec scale percentage.
    pub const MIN: i32 = 1;
    /// Maximum codec scale percentage.
    pub const MAX: i32 = 400;
}

// =============================================================================
// SliderPercent
// =============================================================================

/// Adjustment slider percentage, guaranteed to be within valid range (50–150).
///
/// This value object encapsulates the slider rules shared by brightness,
/// contrast, saturation, and scale:
/// - Values are automatically clamped to the valid range
/// - 100 is the identity value on every axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderPercent(i32);

impl SliderPercent {
    /// Creates a new slider value, clamping to the valid range.
    #[must_use]
    pub fn new(value: i32) -> Self {
        Self(value.clamp(slider_bounds::MIN, slider_bounds::MAX))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }

    /// Returns the value as a multiplier (e.g., 100% → 1.0, 150% → 1.5).
    #[must_use]
    pub fn as_factor(self) -> f32 {
        self.0 as f32 / 100.0
    }

    /// Returns whether this represents the identity value (100%).
    #[must_use]
    pub fn is_identity(self) -> bool {
        self.0 == slider_bounds::DEFAULT
    }

    /// Returns whether the value is at the minimum.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= slider_bounds::MIN
    }

    /// Returns whether the value is at the maximum.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= slider_bounds::MAX
    }
}

impl Default for SliderPercent {
    fn default() -> Self {
        Self(slider_bounds::DEFAULT)
    }
}
