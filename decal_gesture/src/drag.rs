// Copyright 2025 the Decal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-pointer drag: move, corner resize, and rotate.
//!
//! ## Usage
//!
//! 1) Start a drag with [`DragGesture::new`], passing the pointer sample that
//!    pressed and the target's transform at that moment (the snapshot).
//! 2) On each move event of the captured pointer, call [`DragGesture::update`]
//!    to get the new transform. It is always computed from the snapshot, never
//!    from the previous frame.
//! 3) Drop the gesture when the pointer is released.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use decal_gesture::{DragGesture, DragMode, GestureFrame, PointerId, PointerSample};
//! use decal_transform::Transform;
//!
//! let snapshot = Transform::new(Point::new(100.0, 100.0), Size::new(50.0, 50.0));
//! let down = PointerSample::new(PointerId(1), (110.0, 110.0));
//! let drag = DragGesture::new("logo", DragMode::Move, down, snapshot);
//!
//! let frame = GestureFrame::default();
//! let moved = drag.update(Point::new(130.0, 125.0), &frame).unwrap();
//! assert_eq!(moved.position, Point::new(120.0, 115.0));
//! ```

use decal_transform::{Handle, Transform};
use kurbo::{Point, Vec2};

use crate::{GestureFrame, PointerId, PointerSample};

/// What a single-pointer drag does to its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragMode {
    /// Translate the image.
    Move,
    /// Resize from a corner, keeping the natural aspect ratio.
    Resize(Handle),
    /// Rotate about the image center.
    Rotate,
}

/// An active single-pointer drag on one target.
///
/// The start pointer position and the start transform are frozen for the
/// lifetime of the gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct DragGesture<K> {
    target: K,
    mode: DragMode,
    pointer: PointerId,
    start_pos: Point,
    start_transform: Transform,
}

impl<K> DragGesture<K> {
    /// Starts tracking a drag from the pointer-down `sample`.
    pub fn new(target: K, mode: DragMode, sample: PointerSample, start_transform: Transform) -> Self {
        Self {
            target,
            mode,
            pointer: sample.id,
            start_pos: sample.position,
            start_transform,
        }
    }

    /// The image being dragged.
    pub fn target(&self) -> &K {
        &self.target
    }

    /// What the drag does.
    pub fn mode(&self) -> DragMode {
        self.mode
    }

    /// The pointer that started the drag.
    ///
    /// Callers route only this pointer's events to [`DragGesture::update`].
    pub fn pointer(&self) -> PointerId {
        self.pointer
    }

    /// Pointer position at drag start, in client coordinates.
    pub fn start_pos(&self) -> Point {
        self.start_pos
    }

    /// The target's transform at drag start.
    pub fn start_transform(&self) -> &Transform {
        &self.start_transform
    }

    /// Total pointer movement since drag start, in client coordinates.
    pub fn total_offset(&self, current_pos: Point) -> Vec2 {
        current_pos - self.start_pos
    }

    /// Computes the target's transform for the pointer at `current_pos`.
    ///
    /// Returns `None` when this is a rotate drag and `frame` has rotation
    /// disabled. The result is already clamped to the frame's minimum size.
    pub fn update(&self, current_pos: Point, frame: &GestureFrame) -> Option<Transform> {
        let start = self.start_transform;
        let next = match self.mode {
            DragMode::Move => {
                let delta = frame.display.client_delta_to_model(self.total_offset(current_pos));
                start.moved_by(delta)
            }
            DragMode::Resize(handle) => {
                let delta = frame.display.client_delta_to_model(self.total_offset(current_pos));
                start.resized(handle, delta, frame.aspect_ratio, frame.min_image_size)
            }
            DragMode::Rotate => {
                if !frame.allow_rotation {
                    return None;
                }
                // Angles are measured in the surface's local display space.
                let center = frame.display.local_center(&start);
                let start_local = frame.display.client_to_local(self.start_pos);
                let current_local = frame.display.client_to_local(current_pos);
                start.rotated(center, start_local, current_local)
            }
        };
        Some(next.clamped(frame.min_image_size))
    }
}
