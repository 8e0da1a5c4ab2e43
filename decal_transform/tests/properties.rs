// Copyright 2025 the Decal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the `decal_transform` geometry.
//!
//! These check the invariants every gesture relies on: clamping is
//! idempotent, resizing keeps the aspect ratio and its anchor corner, moving
//! only translates, and pinching holds the pivot in place.

use decal_transform::{Handle, Transform};
use kurbo::{Point, Size, Vec2};
use proptest::prelude::*;

const EPSILON: f64 = 1e-6;

fn transform() -> impl Strategy<Value = Transform> {
    (
        -1_000.0..1_000.0_f64,
        -1_000.0..1_000.0_f64,
        0.0..800.0_f64,
        0.0..800.0_f64,
        -720.0..720.0_f64,
    )
        .prop_map(|(x, y, w, h, r)| {
            Transform::new(Point::new(x, y), Size::new(w, h)).with_rotation(r)
        })
}

/// A transform whose size already matches `aspect` and is above `min`.
fn proportional(aspect: f64) -> impl Strategy<Value = Transform> {
    (-500.0..500.0_f64, -500.0..500.0_f64, 40.0..400.0_f64).prop_map(move |(x, y, w)| {
        Transform::new(Point::new(x, y), Size::new(w, w / aspect))
    })
}

fn handle() -> impl Strategy<Value = Handle> {
    prop::sample::select(Handle::ALL.to_vec())
}

proptest! {
    #[test]
    fn clamp_is_idempotent_and_enforces_minimum(t in transform(), min in 1.0..100.0_f64) {
        let once = t.clamped(min);
        prop_assert_eq!(once.clamped(min), once);
        prop_assert!(once.size.width >= min);
        prop_assert!(once.size.height >= min);
        prop_assert_eq!(once.position, t.position);
        prop_assert_eq!(once.rotation_degrees, t.rotation_degrees);
    }

    #[test]
    fn resize_preserves_aspect_ratio(
        t in transform(),
        h in handle(),
        dx in -500.0..500.0_f64,
        dy in -500.0..500.0_f64,
        aspect in 0.2..5.0_f64,
    ) {
        let r = t.resized(h, Vec2::new(dx, dy), aspect, 20.0);
        prop_assert!((r.size.width / r.size.height - aspect).abs() < EPSILON);
        prop_assert!(r.size.width >= 20.0);
    }

    #[test]
    fn resize_keeps_opposite_corner_fixed(
        aspect in 0.2..5.0_f64,
        x in -500.0..500.0_f64,
        y in -500.0..500.0_f64,
        w in 40.0..400.0_f64,
        h in handle(),
        dx in -500.0..500.0_f64,
    ) {
        let start = Transform::new(Point::new(x, y), Size::new(w, w / aspect));
        let r = start.resized(h, Vec2::new(dx, 0.0), aspect, 20.0);
        let before = start.handle_point(h.opposite());
        let after = r.handle_point(h.opposite());
        prop_assert!((before.x - after.x).abs() < EPSILON);
        prop_assert!((before.y - after.y).abs() < EPSILON);
    }

    #[test]
    fn se_resize_never_moves_position(t in transform(), dx in -500.0..500.0_f64, dy in -500.0..500.0_f64) {
        let r = t.resized(Handle::Se, Vec2::new(dx, dy), 1.5, 20.0);
        prop_assert_eq!(r.position, t.position);
    }

    #[test]
    fn move_only_translates(t in transform(), dx in -500.0..500.0_f64, dy in -500.0..500.0_f64) {
        let m = t.moved_by(Vec2::new(dx, dy));
        prop_assert_eq!(m.size, t.size);
        prop_assert_eq!(m.rotation_degrees, t.rotation_degrees);
        prop_assert_eq!(m.position, Point::new(t.position.x + dx, t.position.y + dy));
    }

    #[test]
    fn pinch_keeps_pivot_at_same_relative_spot(
        t in proportional(1.25),
        px in -500.0..500.0_f64,
        py in -500.0..500.0_f64,
        scale in 0.5..4.0_f64,
    ) {
        let pivot = Point::new(px, py);
        let r = t.pinch_scaled(scale, Vec2::ZERO, pivot, 1.25, 1.0);

        let rel_before = (
            (pivot.x - t.position.x) / t.size.width,
            (pivot.y - t.position.y) / t.size.height,
        );
        let rel_after = (
            (pivot.x - r.position.x) / r.size.width,
            (pivot.y - r.position.y) / r.size.height,
        );
        prop_assert!((rel_before.0 - rel_after.0).abs() < EPSILON);
        prop_assert!((rel_before.1 - rel_after.1).abs() < EPSILON);
        prop_assert_eq!(r.rotation_degrees, t.rotation_degrees);
    }
}
