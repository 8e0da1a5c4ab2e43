// Copyright 2025 the Decal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=decal_gesture --heading-base-level=0

//! Decal Gesture: pointer and touch gestures for the placed-image editor.
//!
//! This crate turns raw input into candidate transforms. It tracks at most
//! one gesture per editing surface:
//!
//! - [`DragGesture`]: one captured pointer moving, resizing ([`DragMode::Resize`])
//!   or rotating an image.
//! - [`PinchGesture`]: two touches scaling an image about their midpoint while
//!   panning it.
//! - [`GestureState`]: the state machine that owns the active gesture, routes
//!   move events to it, and enforces that starting one gesture ends the other.
//!
//! Every gesture stores the pointer position and the target's transform at
//! the moment it began, and derives each frame from that snapshot. Values
//! that may change mid-gesture (surface origin, display scale, minimum size,
//! rotation switch) arrive with each event in a [`GestureFrame`].
//!
//! ## Pointer capture
//!
//! A drag keeps receiving its pointer's events after the pointer leaves the
//! image it grabbed. The host supplies that routing through the
//! [`PointerCapture`] trait; the state machine calls it on drag start and
//! releases it on drag end, cancel, and preemption. Release failures are
//! logged and otherwise ignored.
//!
//! ## Logging
//!
//! Gesture transitions are reported through [`tracing`] at `debug` level and
//! ignored events at `trace` level. The crate never installs a subscriber.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod drag;
mod frame;
mod pinch;
mod pointer;
mod state;

pub use drag::{DragGesture, DragMode};
pub use frame::GestureFrame;
pub use pinch::PinchGesture;
pub use pointer::{CaptureError, PointerCapture, PointerId, PointerSample, TouchSample};
pub use state::{ActiveGesture, GestureState};
