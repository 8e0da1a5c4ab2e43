// Copyright 2025 the Decal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use decal_gesture::PointerCapture;
use decal_transform::ImageEntry;
use decal_view::{DisplayFrame, DisplayScale};
use kurbo::Point;

/// What the embedding application provides to a [`TransformController`].
///
/// The host owns the image list. The controller reads it through
/// [`EditorHost::images`] at the start of every call and never keeps a copy;
/// every change it makes arrives as a complete new list through
/// [`EditorHost::on_change`], which must be applied before the next call.
///
/// Surface geometry is queried per event as well, so scrolling or a
/// responsive layout change in the middle of a gesture is picked up on the
/// next move.
///
/// [`TransformController`]: crate::TransformController
pub trait EditorHost: PointerCapture {
    /// The current ordered image list, bottom layer first.
    fn images(&self) -> &[ImageEntry];

    /// Replaces the image list. Called synchronously for every change.
    fn on_change(&mut self, images: Vec<ImageEntry>);

    /// Top-left corner of the editing surface in client coordinates.
    fn container_origin(&self) -> Point {
        Point::ZERO
    }

    /// Current display pixels per model pixel.
    fn display_scale(&self) -> DisplayScale {
        DisplayScale::IDENTITY
    }

    /// Surface origin and scale sampled together.
    fn display_frame(&self) -> DisplayFrame {
        DisplayFrame::new(self.container_origin(), self.display_scale())
    }
}
