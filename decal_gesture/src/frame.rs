// Copyright 2025 the Decal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use decal_transform::{EditorConfig, ImageEntry};
use decal_view::DisplayFrame;

/// Everything a gesture reads fresh on each event.
///
/// The start pointer and start transform of a gesture are frozen when it
/// begins. The values here are not: the surface may scroll or rescale and
/// the configuration may change mid-gesture, so callers build a new frame
/// for every move event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureFrame {
    /// Where the editing surface is and how it is scaled.
    pub display: DisplayFrame,
    /// Natural width over natural height of the target image.
    pub aspect_ratio: f64,
    /// Minimum width and height of any emitted transform.
    pub min_image_size: f64,
    /// Whether rotate drags have any effect.
    pub allow_rotation: bool,
}

impl GestureFrame {
    /// Builds the frame for `entry` under `config`, seen through `display`.
    #[must_use]
    pub fn for_entry(entry: &ImageEntry, config: &EditorConfig, display: DisplayFrame) -> Self {
        Self {
            display,
            aspect_ratio: entry.aspect_ratio(),
            min_image_size: config.min_image_size,
            allow_rotation: config.allow_rotation,
        }
    }
}

impl Default for GestureFrame {
    /// Identity display, square aspect, and the default editor limits.
    fn default() -> Self {
        let config = EditorConfig::default();
        Self {
            display: DisplayFrame::default(),
            aspect_ratio: 1.0,
            min_image_size: config.min_image_size,
            allow_rotation: config.allow_rotation,
        }
    }
}
