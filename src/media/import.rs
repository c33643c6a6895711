// SPDX-License-Identifier: MPL-2.0
//! File-picker import: turning user-selected files into image records.
//!
//! Each file is evaluated independently, so one invalid file never blocks
//! its siblings, and accepted files keep their original bytes untouched
//! (import never resamples or re-encodes). Selection order is preserved.

use crate::error::{Error, Result};
use crate::media::{codec, extensions, is_image_media_type, ImageRecord, ImageSource};
use std::fs;
use std::path::Path;

/// A user-selected file as delivered by the host's picker: a name, the
/// declared media type, and the raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBlob {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl FileBlob {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Reads a file from disk, deriving the media type from its extension.
    ///
    /// Unknown extensions become `application/octet-stream`, which the import
    /// pass then rejects as a non-image, the same outcome a picker without
    /// an `image/*` filter would produce.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("unnamed")
            .to_string();
        let media_type = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(extensions::mime_for_extension)
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = fs::read(path)?;
        Ok(Self { name, media_type, bytes })
    }
}

/// One file the import pass skipped, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedFile {
    pub name: String,
    pub reason: Error,
}

/// The result of one import batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportOutcome {
    /// Records ready to append, in selection order.
    pub accepted: Vec<ImageRecord>,
    /// Files that were skipped, each with a user-presentable reason.
    pub rejected: Vec<RejectedFile>,
}

impl ImportOutcome {
    /// Returns whether every file in the batch was accepted.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Validates a batch of picked files and wraps each image as a record.
///
/// A file is rejected with [`Error::UnsupportedType`] when its declared media
/// type is not an image type, and with [`Error::Decode`] when its bytes do
/// not decode; the collection must never hold an undisplayable buffer.
/// Accepted files keep their original bytes.
pub fn import_files<I: IntoIterator<Item = FileBlob>>(blobs: I) -> ImportOutcome {
    let mut outcome = ImportOutcome::default();
    for blob in blobs {
        match import_one(blob) {
            Ok(record) => outcome.accepted.push(record),
            Err(rejected) => outcome.rejected.push(rejected),
        }
    }
    outcome
}

fn import_one(blob: FileBlob) -> std::result::Result<ImageRecord, RejectedFile> {
    if !is_image_media_type(&blob.media_type) {
        return Err(RejectedFile {
            name: blob.name,
            reason: Error::UnsupportedType { media_type: blob.media_type },
        });
    }
    if let Err(reason) = codec::decode(&blob.bytes) {
        return Err(RejectedFile { name: blob.name, reason });
    }
    Ok(ImageRecord::new(ImageSource::new(blob.media_type, blob.bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{DynamicImage, ImageBuffer, Rgba};

    fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
        let buffer = ImageBuffer::from_pixel(width, height, Rgba([120, 90, 60, 255]));
        let img = DynamicImage::ImageRgba8(buffer);
        codec::encode(&img, 90).expect("encode fixture").bytes().to_vec()
    }

    #[test]
    fn valid_image_is_accepted_with_original_bytes() {
        let bytes = jpeg_bytes(4, 4);
        let outcome = import_files([FileBlob::new("mug.jpg", "image/jpeg", bytes.clone())]);

        assert_eq!(outcome.accepted.len(), 1);
        assert!(outcome.is_clean());
        // Import preserves the original buffer, no re-encode.
        assert_eq!(outcome.accepted[0].source.bytes(), bytes.as_slice());
        assert!(outcome.accepted[0].id.is_none());
    }

    #[test]
    fn non_image_type_is_rejected_without_blocking_siblings() {
        let outcome = import_files([
            FileBlob::new("photo.jpg", "image/jpeg", jpeg_bytes(4, 4)),
            FileBlob::new("notes.txt", "text/plain", b"hello".to_vec()),
        ]);

        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].name, "notes.txt");
        assert!(matches!(
            &outcome.rejected[0].reason,
            Error::UnsupportedType { media_type } if media_type == "text/plain"
        ));
    }

    #[test]
    fn corrupt_image_bytes_are_rejected() {
        let outcome = import_files([FileBlob::new(
            "broken.png",
            "image/png",
            b"not actually a png".to_vec(),
        )]);

        assert!(outcome.accepted.is_empty());
        assert!(matches!(outcome.rejected[0].reason, Error::Decode(_)));
    }

    #[test]
    fn selection_order_is_preserved() {
        let a = jpeg_bytes(2, 2);
        let b = jpeg_bytes(3, 3);
        let c = jpeg_bytes(4, 4);
        let outcome = import_files([
            FileBlob::new("a.jpg", "image/jpeg", a.clone()),
            FileBlob::new("b.jpg", "image/jpeg", b.clone()),
            FileBlob::new("c.jpg", "image/jpeg", c.clone()),
        ]);

        let bytes: Vec<&[u8]> = outcome.accepted.iter().map(|r| r.source.bytes()).collect();
        assert_eq!(bytes, vec![a.as_slice(), b.as_slice(), c.as_slice()]);
    }

    #[test]
    fn from_path_derives_media_type_from_extension() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("fixture.jpg");
        std::fs::write(&path, jpeg_bytes(4, 4)).expect("write fixture");

        let blob = FileBlob::from_path(&path).expect("read blob");
        assert_eq!(blob.name, "fixture.jpg");
        assert_eq!(blob.media_type, "image/jpeg");
        assert!(!blob.bytes.is_empty());
    }

    #[test]
    fn from_path_unknown_extension_is_octet_stream() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"hello").expect("write fixture");

        let blob = FileBlob::from_path(&path).expect("read blob");
        assert_eq!(blob.media_type, "application/octet-stream");

        let outcome = import_files([blob]);
        assert!(matches!(
            outcome.rejected[0].reason,
            Error::UnsupportedType { .. }
        ));
    }

    #[test]
    fn from_path_missing_file_is_io_error() {
        let result = FileBlob::from_path("/nonexistent/image.jpg");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
