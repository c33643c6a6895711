// SPDX-License-Identifier: MPL-2.0
//! Raster media handling: encoded sources, the codec, and the import path.
//!
//! This module provides the shared media-type table used to validate import
//! candidates, plus the submodules doing the actual work.

pub mod codec;
pub mod import;
pub mod source;

// Re-export commonly used types
pub use import::{import_files, FileBlob, ImportOutcome, RejectedFile};
pub use source::{ImageRecord, ImageSource};

/// Supported media extensions and their MIME types.
pub mod extensions {
    /// Image file extensions the import path recognizes.
    pub const IMAGE_EXTENSIONS: &[&str] =
        &["jpg", "jpeg", "png", "gif", "webp", "bmp", "tiff", "tif"];

    /// Maps a file extension to its image MIME type.
    #[must_use]
    pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" => Some("image/jpeg"),
            "png" => Some("image/png"),
            "gif" => Some("image/gif"),
            "webp" => Some("image/webp"),
            "bmp" => Some("image/bmp"),
            "tiff" | "tif" => Some("image/tiff"),
            _ => None,
        }
    }
}

/// Returns whether a declared media type is an image type.
///
/// This mirrors the `image/*` accept check the host's file picker applies:
/// only the declared top-level type is consulted, the bytes themselves are
/// validated separately by the codec.
#[must_use]
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type
        .trim()
        .to_ascii_lowercase()
        .starts_with("image/")
}
