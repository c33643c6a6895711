// SPDX-License-Identifier: MPL-2.0
//! Encoded image sources and the records the collection stores.
//!
//! An [`ImageSource`] is the canonical in-memory representation of an image:
//! an encoded byte buffer plus its MIME type, round-trippable through an
//! RFC 2397 data URI, the form the host embeds in its JSON payloads.

use crate::config::{defaults::DEFAULT_ALT_TEXT, Config};
use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

// =============================================================================
// ImageSource
// =============================================================================

/// An encoded, displayable image buffer.
///
/// Uses `Arc<Vec<u8>>` so snapshots of the collection share the underlying
/// bytes instead of cloning them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    mime_type: String,
    bytes: Arc<Vec<u8>>,
}

impl ImageSource {
    /// Wraps encoded bytes with their MIME type.
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes: Arc::new(bytes),
        }
    }

    /// Returns the declared MIME type (e.g., `image/jpeg`).
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Returns the encoded bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the encoded size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Renders the source as an RFC 2397 data URI
    /// (`data:<mime>;base64,<payload>`).
    #[must_use]
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, BASE64.encode(self.bytes.as_slice()))
    }

    /// Parses a base64 data URI back into an image source.
    ///
    /// Fails with [`Error::Decode`] when the URI is malformed or the payload
    /// is not valid base64.
    pub fn from_data_uri(uri: &str) -> Result<Self> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| Error::Decode("data URI missing 'data:' prefix".to_string()))?;
        let (mime_type, payload) = rest
            .split_once(";base64,")
            .ok_or_else(|| Error::Decode("data URI is not base64-encoded".to_string()))?;
        if mime_type.is_empty() {
            return Err(Error::Decode("data URI has an empty media type".to_string()));
        }
        let bytes = BASE64
            .decode(payload)
            .map_err(|e| Error::Decode(format!("invalid base64 payload: {e}")))?;
        Ok(Self::new(mime_type, bytes))
    }
}

impl Serialize for ImageSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_data_uri())
    }
}

impl<'de> Deserialize<'de> for ImageSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let uri = String::deserialize(deserializer)?;
        ImageSource::from_data_uri(&uri).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// ImageRecord
// =============================================================================

/// One image belonging to the edited entity.
///
/// Serializes to the host's wire shape `{ id?, src, alt }`, with `src` as a
/// data URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Opaque handle assigned by the host's persistence layer once the image
    /// has been durably stored; absent for images that exist only locally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The encoded image itself.
    #[serde(rename = "src")]
    pub source: ImageSource,

    /// Free-form description; defaults to a fixed placeholder.
    #[serde(rename = "alt", default)]
    pub alt_text: String,
}

impl ImageRecord {
    /// Creates a local-only record with the default alt text.
    #[must_use]
    pub fn new(source: ImageSource) -> Self {
        Self {
            id: None,
            source,
            alt_text: DEFAULT_ALT_TEXT.to_string(),
        }
    }

    /// Sets the alt text, consuming and returning the record.
    #[must_use]
    pub fn with_alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = alt_text.into();
        self
    }

    /// Applies host-supplied alt text under the configured clear policy.
    pub fn apply_alt_text(&mut self, input: &str, config: &Config) {
        self.alt_text = config.resolve_alt_text(input);
    }

    /// Returns whether the host's persistence layer has stored this image.
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
