// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the pipeline. Slider and codec scale bounds live with the
//! domain newtypes in [`crate::domain::editing`]; everything host-tunable
//! lives here.

// ==========================================================================
// Encoding Defaults
// ==========================================================================

/// Default JPEG quality used when baking an adjustment or capturing a frame
/// (0 to 100 scale).
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Minimum accepted JPEG quality.
pub const MIN_JPEG_QUALITY: u8 = 1;

/// Maximum accepted JPEG quality.
pub const MAX_JPEG_QUALITY: u8 = 100;

// ==========================================================================
// Alt Text Defaults
// ==========================================================================

/// Placeholder description for images that were captured or imported
/// without one.
pub const DEFAULT_ALT_TEXT: &str = "Photo";
