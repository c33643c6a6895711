// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios across import, capture, collection, and editing.

use shutterbox::capture::{CaptureBackend, CaptureManager, CaptureState, Facing, FrameBuffer, VideoStream};
use shutterbox::collection::ImageCollection;
use shutterbox::domain::editing::slider_bounds;
use shutterbox::error::{Error, Result};
use shutterbox::media::{codec, import, FileBlob, ImageRecord};
use shutterbox::session::AdjustmentSession;
use image_rs::{DynamicImage, ImageBuffer, Rgba};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

// =============================================================================
// Fixtures
// =============================================================================

fn jpeg_bytes(width: u32, height: u32, gray: u8) -> Vec<u8> {
    let buffer = ImageBuffer::from_pixel(width, height, Rgba([gray, gray, gray, 255]));
    let img = DynamicImage::ImageRgba8(buffer);
    codec::encode(&img, 90)
        .expect("encode fixture")
        .bytes()
        .to_vec()
}

fn jpeg_blob(name: &str, width: u32, height: u32, gray: u8) -> FileBlob {
    FileBlob::new(name, "image/jpeg", jpeg_bytes(width, height, gray))
}

fn decoded_dimensions(record: &ImageRecord) -> (u32, u32) {
    let raster = codec::decode(record.source.bytes()).expect("decode stored record");
    (raster.width(), raster.height())
}

/// Shared ledger counting concurrently live fake streams.
#[derive(Default)]
struct StreamLedger {
    live: Cell<u32>,
    max_live: Cell<u32>,
}

struct FakeStream {
    ledger: Rc<StreamLedger>,
    active: Cell<bool>,
}

impl FakeStream {
    fn new(ledger: Rc<StreamLedger>) -> Self {
        ledger.live.set(ledger.live.get() + 1);
        ledger.max_live.set(ledger.max_live.get().max(ledger.live.get()));
        Self { ledger, active: Cell::new(true) }
    }
}

impl VideoStream for FakeStream {
    fn current_frame(&self) -> Result<FrameBuffer> {
        let buffer = ImageBuffer::from_pixel(8, 6, Rgba([10u8, 20, 30, 255]));
        Ok(FrameBuffer::new(Arc::new(buffer.into_raw()), 8, 6))
    }

    fn stop(&mut self) {
        if self.active.replace(false) {
            self.ledger.live.set(self.ledger.live.get() - 1);
        }
    }

    fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl Drop for FakeStream {
    fn drop(&mut self) {
        self.stop();
    }
}

struct FakeBackend {
    ledger: Rc<StreamLedger>,
}

impl CaptureBackend for FakeBackend {
    fn acquire(&mut self, _facing: Facing) -> Result<Box<dyn VideoStream>> {
        Ok(Box::new(FakeStream::new(Rc::clone(&self.ledger))))
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn import_then_remove_keeps_order_and_reindexes() {
    let outcome = import::import_files(vec![
        jpeg_blob("a.jpg", 10, 8, 10),
        jpeg_blob("b.jpg", 10, 8, 20),
        jpeg_blob("c.jpg", 10, 8, 30),
    ]);
    assert!(outcome.is_clean());

    let collection = ImageCollection::new().append_all(outcome.accepted.clone());
    assert_eq!(collection.len(), 3);

    // Removing the middle entry shifts the tail left by one.
    let after = collection.remove_at(1).expect("remove b");
    assert_eq!(after.len(), 2);
    assert_eq!(after.get(0), collection.get(0));
    assert_eq!(after.get(1), collection.get(2));

    // The original snapshot is untouched.
    assert_eq!(collection.len(), 3);
}

#[test]
fn mixed_import_rejects_non_images_and_bad_bytes_independently() {
    let outcome = import::import_files(vec![
        jpeg_blob("good.jpg", 10, 8, 100),
        FileBlob::new("notes.txt", "text/plain", b"hello".to_vec()),
        FileBlob::new("broken.png", "image/png", b"not a png".to_vec()),
        jpeg_blob("also-good.jpg", 6, 6, 50),
    ]);

    assert_eq!(outcome.accepted.len(), 2);
    assert_eq!(outcome.rejected.len(), 2);
    assert_eq!(outcome.rejected[0].name, "notes.txt");
    assert!(matches!(outcome.rejected[0].reason, Error::UnsupportedType { .. }));
    assert_eq!(outcome.rejected[1].name, "broken.png");
    assert!(matches!(outcome.rejected[1].reason, Error::Decode(_)));

    // Accepted files keep their original bytes; no re-encode on import.
    assert_eq!(outcome.accepted[0].source.bytes(), jpeg_bytes(10, 8, 100).as_slice());
}

#[test]
fn captured_frame_lands_in_the_collection_as_a_local_jpeg() {
    let ledger = Rc::new(StreamLedger::default());
    let mut manager = CaptureManager::new(FakeBackend { ledger: Rc::clone(&ledger) });

    manager.open(Facing::Environment).expect("open camera");
    assert_eq!(manager.state(), CaptureState::Live);

    let record = manager.capture_frame().expect("capture");
    assert!(record.id.is_none());
    assert_eq!(record.source.mime_type(), "image/jpeg");
    assert_eq!(decoded_dimensions(&record), (8, 6));

    let collection = ImageCollection::new().append(record);
    assert_eq!(collection.len(), 1);
    assert!(collection.cover().is_some());

    manager.close();
    assert_eq!(ledger.live.get(), 0);
}

#[test]
fn facing_switch_never_holds_two_streams() {
    let ledger = Rc::new(StreamLedger::default());
    let mut manager = CaptureManager::new(FakeBackend { ledger: Rc::clone(&ledger) });

    manager.open(Facing::User).expect("open camera");
    manager.switch_facing().expect("switch to environment");
    manager.switch_facing().expect("switch back");

    assert_eq!(manager.facing(), Facing::User);
    assert_eq!(ledger.max_live.get(), 1);
    assert_eq!(ledger.live.get(), 1);
    drop(manager);
    assert_eq!(ledger.live.get(), 0);
}

#[test]
fn confirm_at_default_sliders_keeps_dimensions() {
    let outcome = import::import_files(vec![jpeg_blob("a.jpg", 40, 20, 120)]);
    let collection = ImageCollection::new().append_all(outcome.accepted);

    let mut session = AdjustmentSession::new();
    session.open(&collection, 0).expect("open session");
    let confirmed = session.confirm(&collection).expect("confirm");

    assert_eq!(decoded_dimensions(confirmed.get(0).unwrap()), (40, 20));
}

#[test]
fn scale_slider_is_monotonic_across_its_range() {
    let collection =
        ImageCollection::new().append(ImageRecord::new(codec::encode(
            &DynamicImage::ImageRgba8(ImageBuffer::from_pixel(40, 20, Rgba([90, 90, 90, 255]))),
            90,
        )
        .expect("encode fixture")));

    let mut widths = Vec::new();
    for percent in [slider_bounds::MIN, 75, 100, 125, slider_bounds::MAX] {
        let mut session = AdjustmentSession::new();
        session.open(&collection, 0).expect("open session");
        session.set_scale(percent);
        let confirmed = session.confirm(&collection).expect("confirm");
        widths.push(decoded_dimensions(confirmed.get(0).unwrap()).0);
    }

    assert_eq!(widths, vec![20, 30, 40, 50, 60]);
    assert!(widths.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn stale_confirm_leaves_the_collection_untouched() {
    let outcome = import::import_files(vec![
        jpeg_blob("a.jpg", 10, 8, 10),
        jpeg_blob("b.jpg", 10, 8, 20),
    ]);
    let collection = ImageCollection::new().append_all(outcome.accepted);

    let mut session = AdjustmentSession::new();
    session.open(&collection, 1).expect("open session");
    session.set_brightness(slider_bounds::MAX);

    // The host removed the edited image while the session was open.
    let shrunk = collection.remove_at(1).expect("remove");
    let before = shrunk.clone();

    let result = session.confirm(&shrunk);
    assert!(matches!(result, Err(Error::StaleSession { index: 1 })));
    assert!(!session.is_open());
    assert_eq!(shrunk, before);
}

#[test]
fn cancel_is_idempotent_and_preserves_the_collection() {
    let outcome = import::import_files(vec![jpeg_blob("a.jpg", 10, 8, 10)]);
    let collection = ImageCollection::new().append_all(outcome.accepted);
    let before = collection.clone();

    let mut session = AdjustmentSession::new();
    session.open(&collection, 0).expect("open session");
    session.set_saturation(slider_bounds::MIN);

    session.cancel();
    session.cancel();
    assert!(!session.is_open());
    assert_eq!(collection, before);
}

#[test]
fn capture_edit_confirm_round_trip() {
    let ledger = Rc::new(StreamLedger::default());
    let mut manager = CaptureManager::new(FakeBackend { ledger });
    manager.open(Facing::Environment).expect("open camera");
    let shot = manager.capture_frame().expect("capture");
    manager.close();

    let collection = ImageCollection::new().append(shot);
    let mut session = AdjustmentSession::new();
    session.open(&collection, 0).expect("open session");
    session.set_scale(150);
    session.set_brightness(120);

    let confirmed = session.confirm(&collection).expect("confirm");
    assert_eq!(confirmed.len(), 1);
    assert_eq!(decoded_dimensions(confirmed.get(0).unwrap()), (12, 9));
    assert_eq!(confirmed.get(0).unwrap().source.mime_type(), "image/jpeg");
}
