// Copyright 2025 the Decal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=decal_transform --heading-base-level=0

//! Decal Transform: the geometry model of a placed-image editor.
//!
//! This crate holds the data an image editor stores per layer and the pure
//! functions that derive a new placement from a gesture. It does not know
//! about pointers, touches, or rendering; higher layers feed it deltas that
//! are already in model space.
//!
//! - [`Transform`]: position, size and rotation of one image, in model pixels.
//! - [`Handle`]: the four corner grips used for resizing.
//! - [`ImageEntry`] / [`ImageId`]: one layer of the ordered image list.
//! - [`EditorConfig`]: minimum size, rotation switch, canvas and printable area.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use decal_transform::{Handle, Transform};
//!
//! let start = Transform::new(Point::new(100.0, 100.0), Size::new(50.0, 50.0));
//!
//! // Dragging the bottom-right grip 20px to the right keeps the top-left fixed.
//! let resized = start.resized(Handle::Se, Vec2::new(20.0, 0.0), 1.0, 20.0);
//! assert_eq!(resized.size, Size::new(70.0, 70.0));
//! assert_eq!(resized.position, start.position);
//!
//! // Every emitted transform goes through `clamped`.
//! let tiny = start.resized(Handle::Se, Vec2::new(-100.0, 0.0), 1.0, 20.0);
//! assert_eq!(tiny.clamped(20.0).size, Size::new(20.0, 20.0));
//! ```
//!
//! ## Snapshots
//!
//! Every operation consumes a `Transform` by value and returns a new one. A
//! gesture keeps the transform it started from and recomputes each frame
//! from that snapshot, so rounding error does not compound and a recorded
//! gesture can be replayed exactly.
//!
//! ## Features
//!
//! - `std` (default): build Kurbo with `std`.
//! - `libm`: build Kurbo with `libm` for `no_std` targets.
//! - `serde`: derive `Serialize`/`Deserialize` for the data types.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod handle;
mod image;
mod transform;

pub use config::{ConfigError, EditorConfig};
pub use handle::Handle;
pub use image::{ImageEntry, ImageId};
pub use transform::Transform;
