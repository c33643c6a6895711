// SPDX-License-Identifier: MPL-2.0
//! `shutterbox` is the client-side photo capture and adjustment core used to
//! attach images to a catalog entry.
//!
//! The host application owns the forms, the persistence layer, and the
//! rendering; this crate owns the stateful parts: the camera stream
//! lifecycle, the file import path, the ordered image collection exchanged
//! with the host, and the non-destructive adjustment session that bakes
//! slider values into a final JPEG on confirmation.

pub mod capture;
pub mod collection;
pub mod config;
pub mod domain;
pub mod error;
pub mod media;
pub mod session;
