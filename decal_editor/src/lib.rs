// Copyright 2025 the Decal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=decal_editor --heading-base-level=0

//! Decal Editor: the transform controller of a placed-image editor.
//!
//! [`TransformController`] is the one type an application calls. It owns the
//! selection, the configuration and the active gesture, and turns both
//! imperative commands (delete, reorder, bring to front, programmatic
//! nudges) and raw pointer/touch input into new image lists.
//!
//! The image list itself belongs to the application, which exposes it
//! through the [`EditorHost`] trait together with the surface geometry and
//! pointer capture. Nothing is cached between calls: each event re-reads the
//! list, the surface origin and the display scale.
//!
//! ## Minimal example
//!
//! ```rust
//! use decal_editor::{EditorHost, TransformController};
//! use decal_gesture::{CaptureError, DragMode, PointerCapture, PointerId, PointerSample};
//! use decal_transform::{EditorConfig, ImageEntry, ImageId, Transform};
//! use kurbo::{Point, Size};
//!
//! struct Canvas {
//!     images: Vec<ImageEntry>,
//! }
//!
//! impl PointerCapture for Canvas {
//!     fn set_pointer_capture(&mut self, _: PointerId) {}
//!     fn release_pointer_capture(&mut self, _: PointerId) -> Result<(), CaptureError> {
//!         Ok(())
//!     }
//! }
//!
//! impl EditorHost for Canvas {
//!     fn images(&self) -> &[ImageEntry] {
//!         &self.images
//!     }
//!     fn on_change(&mut self, images: Vec<ImageEntry>) {
//!         self.images = images;
//!     }
//! }
//!
//! let start = Transform::new(Point::new(100.0, 100.0), Size::new(50.0, 50.0));
//! let mut canvas = Canvas {
//!     images: vec![ImageEntry::new("logo", "logo.png", Size::new(64.0, 64.0), start)],
//! };
//! let mut editor = TransformController::new(EditorConfig::default());
//! editor.images_changed(canvas.images());
//! assert_eq!(editor.selected_id(), Some(&ImageId::from("logo")));
//!
//! let id = ImageId::from("logo");
//! editor.pointer_down(&mut canvas, &id, DragMode::Move, PointerSample::new(PointerId(1), (110.0, 110.0)));
//! editor.pointer_move(&mut canvas, PointerSample::new(PointerId(1), (130.0, 125.0)));
//! editor.pointer_up(&mut canvas, PointerId(1));
//!
//! assert_eq!(canvas.images[0].transform().position, Point::new(120.0, 115.0));
//! assert!(!editor.is_dragging());
//! ```
//!
//! ## Layer order
//!
//! The list is drawn first to last, so the last entry is on top. The pure
//! list operations behind the controller's layer commands live in
//! [`layers`] for hosts that want them without a controller.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod host;
pub mod layers;
mod selection;

pub use controller::TransformController;
pub use host::EditorHost;
pub use selection::ImageSelection;
