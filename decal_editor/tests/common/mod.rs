// Copyright 2025 the Decal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared host fixture for the controller tests.

#![allow(dead_code, reason = "not every test file uses every helper")]

use decal_editor::EditorHost;
use decal_gesture::{CaptureError, PointerCapture, PointerId};
use decal_transform::{ImageEntry, Transform};
use decal_view::DisplayScale;
use kurbo::{Point, Size};

/// An in-memory host that records every emitted list and capture call.
#[derive(Debug)]
pub struct TestHost {
    pub images: Vec<ImageEntry>,
    pub emitted: Vec<Vec<ImageEntry>>,
    pub origin: Point,
    pub scale: DisplayScale,
    pub captured: Option<PointerId>,
    pub capture_calls: Vec<PointerId>,
    pub release_calls: Vec<PointerId>,
}

impl TestHost {
    pub fn new(images: Vec<ImageEntry>) -> Self {
        Self {
            images,
            emitted: Vec::new(),
            origin: Point::ZERO,
            scale: DisplayScale::IDENTITY,
            captured: None,
            capture_calls: Vec::new(),
            release_calls: Vec::new(),
        }
    }

    pub fn with_ids(ids: &[&str]) -> Self {
        Self::new(ids.iter().map(|id| square(id)).collect())
    }

    pub fn ids(&self) -> Vec<&str> {
        self.images.iter().map(|e| e.id().as_str()).collect()
    }

    pub fn emit_count(&self) -> usize {
        self.emitted.len()
    }

    pub fn transform_of(&self, id: &str) -> Transform {
        *self
            .images
            .iter()
            .find(|e| e.id().as_str() == id)
            .expect("image in list")
            .transform()
    }
}

impl PointerCapture for TestHost {
    fn set_pointer_capture(&mut self, pointer: PointerId) {
        self.captured = Some(pointer);
        self.capture_calls.push(pointer);
    }

    fn release_pointer_capture(&mut self, pointer: PointerId) -> Result<(), CaptureError> {
        self.release_calls.push(pointer);
        if self.captured == Some(pointer) {
            self.captured = None;
            Ok(())
        } else {
            Err(CaptureError::NotCaptured(pointer))
        }
    }
}

impl EditorHost for TestHost {
    fn images(&self) -> &[ImageEntry] {
        &self.images
    }

    fn on_change(&mut self, images: Vec<ImageEntry>) {
        self.emitted.push(images.clone());
        self.images = images;
    }

    fn container_origin(&self) -> Point {
        self.origin
    }

    fn display_scale(&self) -> DisplayScale {
        self.scale
    }
}

/// The reference image: 50x50 at (100, 100), square natural size.
pub fn square(id: &str) -> ImageEntry {
    ImageEntry::new(
        id,
        "data:image/png;base64,",
        Size::new(500.0, 500.0),
        Transform::new(Point::new(100.0, 100.0), Size::new(50.0, 50.0)),
    )
}
