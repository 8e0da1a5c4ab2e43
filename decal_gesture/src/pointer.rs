// Copyright 2025 the Decal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input samples and the pointer-capture seam.

use kurbo::Point;
use smallvec::SmallVec;

/// Identifier the host's input system gives one pointer (mouse, pen, finger).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

impl core::fmt::Display for PointerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One pointer event: which pointer, and where it is in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// The pointer this event belongs to.
    pub id: PointerId,
    /// Position in client (viewport) coordinates.
    pub position: Point,
}

impl PointerSample {
    /// Creates a sample.
    #[must_use]
    pub fn new(id: PointerId, position: impl Into<Point>) -> Self {
        Self {
            id,
            position: position.into(),
        }
    }
}

/// Every touch currently on the surface, in client coordinates.
///
/// Pinch only ever looks at exactly two touches, so two are kept inline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TouchSample {
    points: SmallVec<[Point; 2]>,
}

impl TouchSample {
    /// Creates a sample from the active touch positions.
    #[must_use]
    pub fn new(points: &[Point]) -> Self {
        Self {
            points: SmallVec::from_slice(points),
        }
    }

    /// Number of active touches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` when no touch is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Active touch positions.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Midpoint and distance of the two touches, when exactly two are active.
    #[must_use]
    pub fn two_finger_geometry(&self) -> Option<(Point, f64)> {
        match self.points.as_slice() {
            [a, b] => Some((a.midpoint(*b), a.distance(*b))),
            _ => None,
        }
    }
}

impl FromIterator<Point> for TouchSample {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Routes all events of one pointer to the editing surface while captured.
///
/// Once a drag starts, the gesture must keep receiving move and up events for
/// its pointer even after the pointer leaves the image it grabbed. Hosts
/// implement this with whatever their toolkit offers (DOM pointer capture,
/// window-level grabs, or simply forwarding every event).
pub trait PointerCapture {
    /// Start delivering every event of `pointer` to the editing surface.
    fn set_pointer_capture(&mut self, pointer: PointerId);

    /// Stop the routing started by [`PointerCapture::set_pointer_capture`].
    ///
    /// Releasing a pointer that is no longer captured is allowed to fail; the
    /// state machine ignores the error.
    fn release_pointer_capture(&mut self, pointer: PointerId) -> Result<(), CaptureError>;
}

/// Failure to release a pointer capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CaptureError {
    /// The pointer was not captured (already released, or never captured).
    #[error("pointer {0} is not captured")]
    NotCaptured(PointerId),
}
