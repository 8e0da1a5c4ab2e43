// Copyright 2025 the Decal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger pinch: scale about the fingers' midpoint while panning.

use decal_transform::Transform;
use kurbo::Point;

use crate::{GestureFrame, TouchSample};

/// An active pinch on one target.
///
/// Records the finger distance, the finger midpoint (client coordinates)
/// and the target's transform when the second finger landed.
#[derive(Clone, Debug, PartialEq)]
pub struct PinchGesture<K> {
    target: K,
    start_distance: f64,
    start_center: Point,
    start_transform: Transform,
}

impl<K> PinchGesture<K> {
    /// Starts a pinch if `touches` holds exactly two distinct points.
    ///
    /// Returns `None` for any other touch count, and for two coincident
    /// touches, whose zero distance leaves the scale factor undefined.
    pub fn new(target: K, touches: &TouchSample, start_transform: Transform) -> Option<Self> {
        let (start_center, start_distance) = touches.two_finger_geometry()?;
        if start_distance <= f64::EPSILON {
            return None;
        }
        Some(Self {
            target,
            start_distance,
            start_center,
            start_transform,
        })
    }

    /// The image being pinched.
    pub fn target(&self) -> &K {
        &self.target
    }

    /// Finger distance at pinch start, in client pixels.
    pub fn start_distance(&self) -> f64 {
        self.start_distance
    }

    /// Finger midpoint at pinch start, in client coordinates.
    pub fn start_center(&self) -> Point {
        self.start_center
    }

    /// The target's transform at pinch start.
    pub fn start_transform(&self) -> &Transform {
        &self.start_transform
    }

    /// Computes the target's transform for a touch-move event.
    ///
    /// Returns `None` unless exactly two touches are active. The scale factor
    /// is the ratio of current to start distance; the pivot is the start
    /// midpoint in model space; the pan is the midpoint's movement in model
    /// space, added after scaling. The result is clamped.
    pub fn update(&self, touches: &TouchSample, frame: &GestureFrame) -> Option<Transform> {
        let (center, distance) = touches.two_finger_geometry()?;

        let scale_factor = distance / self.start_distance;
        let pan = frame.display.client_delta_to_model(center - self.start_center);
        let pivot = frame.display.client_to_model(self.start_center);

        let next = self.start_transform.pinch_scaled(
            scale_factor,
            pan,
            pivot,
            frame.aspect_ratio,
            frame.min_image_size,
        );
        Some(next.clamped(frame.min_image_size))
    }
}
