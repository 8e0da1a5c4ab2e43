// Copyright 2025 the Decal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The single-active-gesture state machine.

use core::fmt::Debug;

use decal_transform::Transform;
use tracing::{debug, trace};

use crate::{
    DragGesture, DragMode, GestureFrame, PinchGesture, PointerCapture, PointerId, PointerSample,
    TouchSample,
};

/// The gesture currently in progress on one editing surface.
#[derive(Clone, Debug, PartialEq)]
pub enum ActiveGesture<K> {
    /// No gesture.
    Idle,
    /// A single captured pointer is moving, resizing, or rotating a target.
    Dragging(DragGesture<K>),
    /// Two touches are scaling and panning a target.
    Pinching(PinchGesture<K>),
}

// Manual impl: no `K: Default` bound.
impl<K> Default for ActiveGesture<K> {
    fn default() -> Self {
        Self::Idle
    }
}

/// Tracks at most one gesture and turns raw events into candidate transforms.
///
/// Starting a gesture always supersedes the current one. When a drag is
/// superseded or ends, its pointer capture is released through the
/// [`PointerCapture`] passed to the call.
///
/// Move events return the target and its new, already clamped transform;
/// applying it to the image list is the caller's job.
///
/// ```
/// use kurbo::{Point, Size};
/// use decal_gesture::{DragMode, GestureFrame, GestureState, PointerCapture, PointerId, PointerSample, TouchSample, CaptureError};
/// use decal_transform::Transform;
///
/// #[derive(Default)]
/// struct Surface(Option<PointerId>);
///
/// impl PointerCapture for Surface {
///     fn set_pointer_capture(&mut self, pointer: PointerId) {
///         self.0 = Some(pointer);
///     }
///     fn release_pointer_capture(&mut self, pointer: PointerId) -> Result<(), CaptureError> {
///         match self.0.take() {
///             Some(p) if p == pointer => Ok(()),
///             _ => Err(CaptureError::NotCaptured(pointer)),
///         }
///     }
/// }
///
/// let mut surface = Surface::default();
/// let mut gestures = GestureState::new();
/// let snapshot = Transform::new(Point::new(0.0, 0.0), Size::new(100.0, 100.0));
///
/// gestures.begin_drag(&mut surface, "a", DragMode::Move, PointerSample::new(PointerId(1), (10.0, 10.0)), snapshot);
/// assert!(gestures.is_dragging());
/// assert_eq!(surface.0, Some(PointerId(1)));
///
/// // A second finger lands: the pinch takes over and the drag's capture is released.
/// let touches = TouchSample::new(&[Point::new(10.0, 10.0), Point::new(50.0, 10.0)]);
/// assert!(gestures.begin_pinch(&mut surface, "a", &touches, snapshot));
/// assert!(gestures.is_pinching() && !gestures.is_dragging());
/// assert_eq!(surface.0, None);
///
/// let (_, next) = gestures
///     .touch_move(&TouchSample::new(&[Point::new(0.0, 10.0), Point::new(80.0, 10.0)]), &GestureFrame::default())
///     .unwrap();
/// assert_eq!(next.size, Size::new(200.0, 200.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GestureState<K> {
    active: ActiveGesture<K>,
}

impl<K> Default for GestureState<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> GestureState<K> {
    /// Creates an idle state machine.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: ActiveGesture::Idle,
        }
    }

    /// The gesture in progress.
    pub fn active(&self) -> &ActiveGesture<K> {
        &self.active
    }

    /// Returns `true` while a single-pointer drag is active.
    pub fn is_dragging(&self) -> bool {
        matches!(self.active, ActiveGesture::Dragging(_))
    }

    /// Returns `true` while a two-touch pinch is active.
    pub fn is_pinching(&self) -> bool {
        matches!(self.active, ActiveGesture::Pinching(_))
    }

    /// Returns `true` when no gesture is active.
    pub fn is_idle(&self) -> bool {
        matches!(self.active, ActiveGesture::Idle)
    }

    /// Mode of the active drag, if any.
    pub fn drag_mode(&self) -> Option<DragMode> {
        match &self.active {
            ActiveGesture::Dragging(drag) => Some(drag.mode()),
            _ => None,
        }
    }

    /// Pointer captured by the active drag, if any.
    pub fn captured_pointer(&self) -> Option<PointerId> {
        match &self.active {
            ActiveGesture::Dragging(drag) => Some(drag.pointer()),
            _ => None,
        }
    }

    /// The image targeted by the active gesture.
    pub fn target(&self) -> Option<&K> {
        match &self.active {
            ActiveGesture::Idle => None,
            ActiveGesture::Dragging(drag) => Some(drag.target()),
            ActiveGesture::Pinching(pinch) => Some(pinch.target()),
        }
    }
}

impl<K: Debug> GestureState<K> {
    /// Starts a drag on `target`, capturing the sample's pointer.
    ///
    /// Any gesture already in progress is dropped first, releasing its
    /// capture if it was a drag.
    pub fn begin_drag<C: PointerCapture + ?Sized>(
        &mut self,
        capture: &mut C,
        target: K,
        mode: DragMode,
        sample: PointerSample,
        snapshot: Transform,
    ) {
        self.cancel(capture);
        debug!(image = ?target, ?mode, pointer = %sample.id, "drag started");
        capture.set_pointer_capture(sample.id);
        self.active = ActiveGesture::Dragging(DragGesture::new(target, mode, sample, snapshot));
    }

    /// Feeds a pointer move to the active drag.
    ///
    /// Returns `None` when no drag is active, when the sample belongs to a
    /// pointer other than the captured one, or when the drag produces no
    /// change (a rotate drag with rotation disabled).
    pub fn pointer_move(
        &self,
        sample: PointerSample,
        frame: &GestureFrame,
    ) -> Option<(&K, Transform)> {
        let ActiveGesture::Dragging(drag) = &self.active else {
            trace!(pointer = %sample.id, "pointer move without a drag");
            return None;
        };
        if sample.id != drag.pointer() {
            trace!(pointer = %sample.id, captured = %drag.pointer(), "pointer move from another pointer");
            return None;
        }
        drag.update(sample.position, frame).map(|t| (drag.target(), t))
    }

    /// Ends the active drag if `pointer` is the captured one.
    ///
    /// Releases the capture and returns `true` when a drag ended. Ups from
    /// other pointers, and ups while idle or pinching, return `false`.
    pub fn end_pointer<C: PointerCapture + ?Sized>(
        &mut self,
        capture: &mut C,
        pointer: PointerId,
    ) -> bool {
        match &self.active {
            ActiveGesture::Dragging(drag) if drag.pointer() == pointer => {
                debug!(image = ?drag.target(), %pointer, "drag ended");
                release(capture, pointer);
                self.active = ActiveGesture::Idle;
                true
            }
            _ => {
                trace!(%pointer, "pointer up without a matching drag");
                false
            }
        }
    }

    /// Starts a pinch on `target` if exactly two distinct touches are down.
    ///
    /// An active drag is preempted and its capture released. Returns `false`,
    /// leaving the current gesture untouched, when the touches cannot start a
    /// pinch.
    pub fn begin_pinch<C: PointerCapture + ?Sized>(
        &mut self,
        capture: &mut C,
        target: K,
        touches: &TouchSample,
        snapshot: Transform,
    ) -> bool {
        let Some(pinch) = PinchGesture::new(target, touches, snapshot) else {
            debug!(touches = touches.len(), "pinch refused");
            return false;
        };
        if let ActiveGesture::Dragging(drag) = &self.active {
            debug!(image = ?drag.target(), pointer = %drag.pointer(), "drag preempted by pinch");
        }
        self.cancel(capture);
        debug!(image = ?pinch.target(), distance = pinch.start_distance(), "pinch started");
        self.active = ActiveGesture::Pinching(pinch);
        true
    }

    /// Feeds a touch move to the active pinch.
    ///
    /// Returns `None` when no pinch is active or the sample does not hold
    /// exactly two touches.
    pub fn touch_move(&self, touches: &TouchSample, frame: &GestureFrame) -> Option<(&K, Transform)> {
        let ActiveGesture::Pinching(pinch) = &self.active else {
            trace!(touches = touches.len(), "touch move without a pinch");
            return None;
        };
        pinch.update(touches, frame).map(|t| (pinch.target(), t))
    }

    /// Ends the active pinch. Returns `true` if one was active.
    pub fn end_touch(&mut self) -> bool {
        if let ActiveGesture::Pinching(pinch) = &self.active {
            debug!(image = ?pinch.target(), "pinch ended");
            self.active = ActiveGesture::Idle;
            true
        } else {
            false
        }
    }

    /// Drops whatever gesture is active, releasing a drag's capture.
    pub fn cancel<C: PointerCapture + ?Sized>(&mut self, capture: &mut C) {
        match core::mem::take(&mut self.active) {
            ActiveGesture::Idle => {}
            ActiveGesture::Dragging(drag) => {
                debug!(image = ?drag.target(), pointer = %drag.pointer(), "drag cancelled");
                release(capture, drag.pointer());
            }
            ActiveGesture::Pinching(pinch) => {
                debug!(image = ?pinch.target(), "pinch cancelled");
            }
        }
    }
}

fn release<C: PointerCapture + ?Sized>(capture: &mut C, pointer: PointerId) {
    if let Err(err) = capture.release_pointer_capture(pointer) {
        debug!(%err, "ignoring pointer capture release failure");
    }
}
