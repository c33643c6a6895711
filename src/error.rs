// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error types.
//!
//! Every fallible operation in the pipeline returns [`Result`]. Failures that
//! the host should surface to the user carry a stable notice key (see
//! [`Error::notice_key`]) so the host can look up a localized, transient
//! notification without matching on variants.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input bytes are not a valid or supported image.
    Decode(String),

    /// A raster image could not be re-encoded.
    Encode(String),

    /// Camera permission was denied or no device is available.
    DeviceUnavailable(String),

    /// A selected file's declared media type is not an image type.
    UnsupportedType { media_type: String },

    /// A collection mutation targeted a position that does not exist.
    /// This is a host logic bug, not a user-facing condition.
    IndexOutOfRange { index: usize, len: usize },

    /// A confirm raced with an external mutation of the edited index.
    /// Resolved by silently discarding the edit.
    StaleSession { index: usize },

    /// File system failure while reading an import candidate.
    Io(String),

    /// Configuration file could not be read, parsed, or written.
    Config(String),
}

impl Error {
    /// Returns the stable message key the host uses to look up a
    /// user-facing notice for this error.
    pub fn notice_key(&self) -> &'static str {
        match self {
            Error::Decode(_) => "notice-image-decode-failed",
            Error::Encode(_) => "notice-image-encode-failed",
            Error::DeviceUnavailable(_) => "notice-camera-unavailable",
            Error::UnsupportedType { .. } => "notice-file-not-image",
            Error::IndexOutOfRange { .. } => "notice-internal-error",
            Error::StaleSession { .. } => "notice-edit-discarded",
            Error::Io(_) => "notice-io-error",
            Error::Config(_) => "notice-config-error",
        }
    }

    /// Returns true when the error signals a contract violation by the host
    /// rather than a runtime condition worth reporting to the user.
    pub fn is_logic_bug(&self) -> bool {
        matches!(self, Error::IndexOutOfRange { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Decode(e) => write!(f, "Decode error: {}", e),
            Error::Encode(e) => write!(f, "Encode error: {}", e),
            Error::DeviceUnavailable(e) => write!(f, "Camera unavailable: {}", e),
            Error::UnsupportedType { media_type } => {
                write!(f, "Unsupported media type: {}", media_type)
            }
            Error::IndexOutOfRange { index, len } => {
                write!(f, "Index {} out of range for collection of {}", index, len)
            }
            Error::StaleSession { index } => {
                write!(f, "Stale session: image at index {} changed or was removed", index)
            }
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
