// Copyright 2025 the Decal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::PI;

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::Handle;

/// Placement of an image on the canvas, in model-space pixels.
///
/// `position` is the top-left corner of the unrotated image box; rotation is
/// applied about the box center. Rotation accumulates across gestures and is
/// never normalized into `[0, 360)`.
///
/// All methods are pure: they return a new transform and leave `self`
/// untouched, so a gesture can keep its start transform as a frozen snapshot
/// and derive every frame from it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    /// Top-left corner of the unrotated box.
    pub position: Point,
    /// Width and height of the box.
    pub size: Size,
    /// Signed rotation about the box center, in degrees.
    pub rotation_degrees: f64,
}

impl Transform {
    /// Creates an unrotated transform.
    #[must_use]
    pub const fn new(position: Point, size: Size) -> Self {
        Self {
            position,
            size,
            rotation_degrees: 0.0,
        }
    }

    /// Returns a copy with the rotation replaced.
    #[must_use]
    pub const fn with_rotation(self, rotation_degrees: f64) -> Self {
        Self {
            rotation_degrees,
            ..self
        }
    }

    /// The unrotated bounding box.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// Center of the box, which is also the rotation pivot.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            self.position.x + self.size.width / 2.0,
            self.position.y + self.size.height / 2.0,
        )
    }

    /// Rotation in radians.
    #[must_use]
    pub fn rotation_radians(&self) -> f64 {
        self.rotation_degrees * PI / 180.0
    }

    /// Position of a corner of the unrotated box.
    #[must_use]
    pub fn handle_point(&self, handle: Handle) -> Point {
        let bounds = self.bounds();
        let x = if handle.is_west() {
            bounds.x0
        } else {
            bounds.x1
        };
        let y = if handle.is_north() {
            bounds.y0
        } else {
            bounds.y1
        };
        Point::new(x, y)
    }

    /// Maps image-local coordinates (`0..width`, `0..height`) into model space.
    ///
    /// The box is translated to `position` and then rotated about its center.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::rotate_about(self.rotation_radians(), self.center())
            * Affine::translate(self.position.to_vec2())
    }

    /// Enforces the minimum size on both axes.
    ///
    /// Position and rotation are left as they are; images may sit partially or
    /// fully outside the canvas. Idempotent.
    #[must_use]
    pub fn clamped(self, min_size: f64) -> Self {
        Self {
            size: Size::new(
                self.size.width.max(min_size),
                self.size.height.max(min_size),
            ),
            ..self
        }
    }

    /// Translates the box by `delta`; size and rotation are unchanged.
    #[must_use]
    pub fn moved_by(self, delta: Vec2) -> Self {
        Self {
            position: self.position + delta,
            ..self
        }
    }

    /// Resizes from a corner handle, keeping `aspect_ratio` (width / height).
    ///
    /// Only the horizontal component of `delta` drives the new width. The width
    /// is clamped to `min_size` first, the height is derived from it, and the
    /// position is then shifted by the clamped size change so that the corner
    /// opposite `handle` does not move.
    #[must_use]
    pub fn resized(self, handle: Handle, delta: Vec2, aspect_ratio: f64, min_size: f64) -> Self {
        let width = (self.size.width + handle.width_sign() * delta.x).max(min_size);
        let height = width / aspect_ratio;

        let width_diff = width - self.size.width;
        let height_diff = height - self.size.height;

        let mut position = self.position;
        if handle.is_west() {
            position.x -= width_diff;
        }
        if handle.is_north() {
            position.y -= height_diff;
        }

        Self {
            position,
            size: Size::new(width, height),
            rotation_degrees: self.rotation_degrees,
        }
    }

    /// Rotates by the angle the pointer swept around `center`.
    ///
    /// All three points must be in the same space; callers use the container's
    /// local display space. The swept angle is added to the current rotation.
    #[must_use]
    pub fn rotated(self, center: Point, start_pointer: Point, current_pointer: Point) -> Self {
        let start_angle = (start_pointer - center).atan2();
        let current_angle = (current_pointer - center).atan2();
        Self {
            rotation_degrees: self.rotation_degrees + (current_angle - start_angle) * 180.0 / PI,
            ..self
        }
    }

    /// Scales about `pivot` by `scale_factor`, then pans by `pan`.
    ///
    /// The width is clamped to `min_size` and the height derived from
    /// `aspect_ratio`. The box center moves to
    /// `pivot + (old_center - pivot) * scale_factor + pan`, which keeps the pivot
    /// at the same relative spot inside the box. Rotation is unchanged.
    #[must_use]
    pub fn pinch_scaled(
        self,
        scale_factor: f64,
        pan: Vec2,
        pivot: Point,
        aspect_ratio: f64,
        min_size: f64,
    ) -> Self {
        let width = (self.size.width * scale_factor).max(min_size);
        let height = width / aspect_ratio;

        let center = pivot + (self.center() - pivot) * scale_factor + pan;

        Self {
            position: Point::new(center.x - width / 2.0, center.y - height / 2.0),
            size: Size::new(width, height),
            rotation_degrees: self.rotation_degrees,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::Transform;
    use crate::Handle;

    fn square() -> Transform {
        Transform::new(Point::new(100.0, 100.0), Size::new(50.0, 50.0))
    }

    #[test]
    fn clamp_raises_small_sizes_only() {
        let t = Transform::new(Point::new(-5.0, 3.0), Size::new(4.0, 80.0)).with_rotation(12.0);
        let c = t.clamped(20.0);
        assert_eq!(c.size, Size::new(20.0, 80.0));
        assert_eq!(c.position, t.position);
        assert_eq!(c.rotation_degrees, 12.0);
        assert_eq!(c.clamped(20.0), c);
    }

    #[test]
    fn se_resize_grows_with_positive_dx() {
        let r = square().resized(Handle::Se, Vec2::new(20.0, 0.0), 1.0, 20.0);
        assert_eq!(r.size, Size::new(70.0, 70.0));
        assert_eq!(r.position, Point::new(100.0, 100.0));
    }

    #[test]
    fn resize_clamps_width_before_deriving_height() {
        let r = square().resized(Handle::Se, Vec2::new(-100.0, 0.0), 1.0, 20.0);
        assert_eq!(r.size, Size::new(20.0, 20.0));
        assert_eq!(r.position, Point::new(100.0, 100.0));
    }

    #[test]
    fn nw_resize_keeps_se_corner_fixed() {
        let start = square();
        let r = start.resized(Handle::Nw, Vec2::new(-10.0, 0.0), 1.0, 20.0);
        assert_eq!(r.size, Size::new(60.0, 60.0));
        assert_eq!(r.handle_point(Handle::Se), start.handle_point(Handle::Se));
    }

    #[test]
    fn clamped_nw_resize_still_keeps_anchor() {
        let start = square();
        let r = start.resized(Handle::Nw, Vec2::new(500.0, 0.0), 1.0, 20.0);
        assert_eq!(r.size, Size::new(20.0, 20.0));
        assert_eq!(r.handle_point(Handle::Se), start.handle_point(Handle::Se));
    }

    #[test]
    fn sw_and_ne_move_one_axis() {
        let start = Transform::new(Point::new(0.0, 0.0), Size::new(40.0, 20.0));
        let sw = start.resized(Handle::Sw, Vec2::new(-10.0, 0.0), 2.0, 10.0);
        assert_eq!(sw.position, Point::new(-10.0, 0.0));
        assert_eq!(sw.size, Size::new(50.0, 25.0));

        let ne = start.resized(Handle::Ne, Vec2::new(10.0, 0.0), 2.0, 10.0);
        assert_eq!(ne.position, Point::new(0.0, -5.0));
        assert_eq!(ne.size, Size::new(50.0, 25.0));
    }

    #[test]
    fn rotate_quarter_turn() {
        let center = Point::new(0.0, 0.0);
        let r = square().rotated(center, Point::new(10.0, 0.0), Point::new(0.0, 10.0));
        assert!((r.rotation_degrees - 90.0).abs() < 1e-9);
        assert_eq!(r.size, square().size);
        assert_eq!(r.position, square().position);
    }

    #[test]
    fn rotation_accumulates_past_full_turn() {
        let center = Point::ZERO;
        let r = square()
            .with_rotation(350.0)
            .rotated(center, Point::new(10.0, 0.0), Point::new(0.0, 10.0));
        assert!((r.rotation_degrees - 440.0).abs() < 1e-9);
    }

    #[test]
    fn pinch_about_center_keeps_center() {
        let start = square();
        let r = start.pinch_scaled(2.0, Vec2::ZERO, start.center(), 1.0, 20.0);
        assert_eq!(r.size, Size::new(100.0, 100.0));
        assert_eq!(r.center(), start.center());
    }

    #[test]
    fn pinch_adds_pan_after_scaling() {
        let start = square();
        let r = start.pinch_scaled(1.0, Vec2::new(5.0, -5.0), Point::ZERO, 1.0, 20.0);
        assert_eq!(r.position, Point::new(105.0, 95.0));
    }

    #[test]
    fn affine_maps_origin_to_position_when_unrotated() {
        let t = square();
        assert_eq!(t.to_affine() * Point::ZERO, t.position);
        let far = t.to_affine() * Point::new(50.0, 50.0);
        assert!((far.x - 150.0).abs() < 1e-9 && (far.y - 150.0).abs() < 1e-9);
    }

    #[test]
    fn affine_rotates_about_center() {
        let t = square().with_rotation(180.0);
        let p = t.to_affine() * Point::ZERO;
        assert!((p.x - 150.0).abs() < 1e-9);
        assert!((p.y - 150.0).abs() < 1e-9);
        let c = t.to_affine() * Point::new(25.0, 25.0);
        assert!((c.x - 125.0).abs() < 1e-9 && (c.y - 125.0).abs() < 1e-9);
    }
}
