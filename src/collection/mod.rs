// SPDX-License-Identifier: MPL-2.0
//! The ordered image collection exchanged with the host form.
//!
//! The host owns the collection; this crate only ever receives a snapshot
//! and hands back a new one. Every mutation therefore returns a fresh
//! [`ImageCollection`] and leaves the receiver untouched, which keeps the
//! host free to treat each snapshot as an immutable value. Records share
//! their encoded bytes via `Arc`, so snapshots are cheap.

use crate::error::{Error, Result};
use crate::media::ImageRecord;
use serde::{Deserialize, Serialize};

/// An ordered, dense sequence of [`ImageRecord`]s.
///
/// Insertion order is meaningful: the first entry is conventionally the
/// cover image. Duplicates are permitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageCollection {
    records: Vec<ImageRecord>,
}

impl ImageCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection from existing records, preserving their order.
    #[must_use]
    pub fn from_records(records: Vec<ImageRecord>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageRecord> {
        self.records.get(index)
    }

    /// Returns the conventional cover image (the first entry).
    #[must_use]
    pub fn cover(&self) -> Option<&ImageRecord> {
        self.records.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    /// Returns a new collection with `record` appended.
    #[must_use]
    pub fn append(&self, record: ImageRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Returns a new collection with all of `records` appended in order.
    #[must_use]
    pub fn append_all<I: IntoIterator<Item = ImageRecord>>(&self, records: I) -> Self {
        let mut out = self.records.clone();
        out.extend(records);
        Self { records: out }
    }

    /// Returns a new collection with the record at `index` replaced.
    ///
    /// Fails with [`Error::IndexOutOfRange`] when `index` is not a valid
    /// position.
    pub fn replace_at(&self, index: usize, record: ImageRecord) -> Result<Self> {
        if index >= self.records.len() {
            return Err(Error::IndexOutOfRange { index, len: self.records.len() });
        }
        let mut records = self.records.clone();
        records[index] = record;
        Ok(Self { records })
    }

    /// Returns a new collection with the record at `index` removed; all later
    /// records shift down by one.
    ///
    /// Fails with [`Error::IndexOutOfRange`] when `index` is not a valid
    /// position.
    pub fn remove_at(&self, index: usize) -> Result<Self> {
        if index >= self.records.len() {
            return Err(Error::IndexOutOfRange { index, len: self.records.len() });
        }
        let mut records = self.records.clone();
        records.remove(index);
        Ok(Self { records })
    }
}

impl<'a> IntoIterator for &'a ImageCollection {
    type Item = &'a ImageRecord;
    type IntoIter = std::slice::Iter<'a, ImageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
