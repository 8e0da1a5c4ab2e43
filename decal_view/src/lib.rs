// Copyright 2025 the Decal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=decal_view --heading-base-level=0

//! Decal View: display-space adapter for the placed-image editor.
//!
//! Transforms are stored in model space, the authoritative full-resolution
//! pixel grid of the canvas. The user sees the canvas in display space,
//! which may be scaled down on small screens and offset within the page.
//! This crate converts between the two:
//!
//! - [`DisplayScale`]: display pixels per model pixel, always positive.
//! - [`DisplayFrame`]: the surface origin plus its scale, sampled per event.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use decal_view::{DisplayFrame, DisplayScale};
//!
//! // The canvas is drawn at half size, 30px from the left of the page.
//! let scale = DisplayScale::new(0.5).unwrap();
//! let frame = DisplayFrame::new(Point::new(30.0, 0.0), scale);
//!
//! // A 10px pointer movement is a 20px move in model space.
//! assert_eq!(frame.client_delta_to_model(Vec2::new(10.0, 0.0)), Vec2::new(20.0, 0.0));
//!
//! // A click at client x = 40 lands at model x = 20.
//! assert_eq!(frame.client_to_model(Point::new(40.0, 0.0)), Point::new(20.0, 0.0));
//! ```
//!
//! Export never goes through this crate, so it is lossless regardless of
//! the scale in effect while editing.
//!
//! This crate is `no_std`.

#![no_std]

mod display;

pub use display::{DisplayFrame, DisplayScale, ScaleError};
