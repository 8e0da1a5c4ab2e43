// Copyright 2025 the Decal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use decal_transform::Transform;
use kurbo::{Affine, Point, Size, Vec2};

/// Display pixels per model pixel.
///
/// A canvas laid out smaller than its authoritative size (for example on a
/// narrow viewport) renders at a scale below `1.0`. Stored transforms stay in
/// model space; only input deltas and rendered output pass through this type.
///
/// The scale is always positive and finite, so converting a display delta to
/// model space never divides by zero.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct DisplayScale(f64);

impl DisplayScale {
    /// No scaling: display pixels equal model pixels.
    pub const IDENTITY: Self = Self(1.0);

    /// Creates a display scale, rejecting zero, negative and non-finite values.
    pub fn new(scale: f64) -> Result<Self, ScaleError> {
        if scale > 0.0 && scale.is_finite() {
            Ok(Self(scale))
        } else {
            Err(ScaleError(scale))
        }
    }

    /// The raw factor.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Converts a display-space delta into model space.
    #[must_use]
    pub fn screen_delta_to_model(self, delta: Vec2) -> Vec2 {
        delta / self.0
    }

    /// Converts a display-space point into model space.
    #[must_use]
    pub fn display_to_model_point(self, pt: Point) -> Point {
        (pt.to_vec2() / self.0).to_point()
    }

    /// Converts a model-space point into display space.
    #[must_use]
    pub fn model_to_display_point(self, pt: Point) -> Point {
        (pt.to_vec2() * self.0).to_point()
    }

    /// Scales position and size into display space. Rotation is scale invariant.
    #[must_use]
    pub fn model_transform_to_display(self, transform: &Transform) -> Transform {
        Transform {
            position: self.model_to_display_point(transform.position),
            size: Size::new(
                transform.size.width * self.0,
                transform.size.height * self.0,
            ),
            rotation_degrees: transform.rotation_degrees,
        }
    }

    /// Model-to-display transform for renderers.
    ///
    /// Compose with [`Transform::to_affine`] to place an image on screen:
    /// `scale.model_to_display_affine() * transform.to_affine()`.
    #[must_use]
    pub fn model_to_display_affine(self) -> Affine {
        Affine::scale(self.0)
    }

    /// Display-to-model transform, the inverse of
    /// [`DisplayScale::model_to_display_affine`].
    #[must_use]
    pub fn display_to_model_affine(self) -> Affine {
        Affine::scale(1.0 / self.0)
    }
}

impl Default for DisplayScale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TryFrom<f64> for DisplayScale {
    type Error = ScaleError;

    fn try_from(scale: f64) -> Result<Self, Self::Error> {
        Self::new(scale)
    }
}

/// A display scale that is zero, negative, or not finite.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[error("display scale must be positive and finite, got {0}")]
pub struct ScaleError(pub f64);

/// Where the editing surface is on screen, sampled for one input event.
///
/// Pointer events arrive in client (viewport) coordinates. The surface itself
/// may be offset in the page and drawn at a [`DisplayScale`], so every event
/// is interpreted against a fresh frame rather than the one seen when the
/// gesture began.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct DisplayFrame {
    /// Top-left corner of the editing surface in client coordinates.
    pub origin: Point,
    /// Current display scale of the surface.
    pub scale: DisplayScale,
}

impl DisplayFrame {
    /// Creates a frame from the surface origin and its display scale.
    #[must_use]
    pub const fn new(origin: Point, scale: DisplayScale) -> Self {
        Self { origin, scale }
    }

    /// Converts a client-space point into the surface's local display space.
    #[must_use]
    pub fn client_to_local(&self, client: Point) -> Point {
        (client - self.origin).to_point()
    }

    /// Converts a client-space point into model space.
    #[must_use]
    pub fn client_to_model(&self, client: Point) -> Point {
        self.scale.display_to_model_point(self.client_to_local(client))
    }

    /// Converts a client-space movement into a model-space movement.
    #[must_use]
    pub fn client_delta_to_model(&self, delta: Vec2) -> Vec2 {
        self.scale.screen_delta_to_model(delta)
    }

    /// Center of `transform` in the surface's local display space.
    #[must_use]
    pub fn local_center(&self, transform: &Transform) -> Point {
        self.scale.model_transform_to_display(transform).center()
    }
}
