// Copyright 2025 the Decal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::{Point, Size};

use crate::{EditorConfig, Transform};

/// Fraction of the printable area's shorter side a freshly placed image spans.
const PLACEMENT_FILL: f64 = 0.6;

/// Opaque, unique identifier of an image within the layer list.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ImageId(String);

impl ImageId {
    /// Wraps an identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ImageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ImageId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One placed raster image.
///
/// The natural size is the source bitmap's pixel size and fixes the aspect
/// ratio used by resize and pinch. It never changes after construction; the
/// only way to "edit" an entry is [`ImageEntry::with_transform`], which
/// returns a new value.
///
/// Natural dimensions are expected to be positive. Entries with a zero
/// natural height produce a non-finite aspect ratio.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageEntry {
    id: ImageId,
    source: String,
    natural_size: Size,
    transform: Transform,
}

impl ImageEntry {
    /// Creates an entry with an explicit transform.
    #[must_use]
    pub fn new(
        id: impl Into<ImageId>,
        source: impl Into<String>,
        natural_size: Size,
        transform: Transform,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            natural_size,
            transform,
        }
    }

    /// Creates an entry at its default placement for `config`.
    ///
    /// The image is fitted into 60% of the shorter side of the printable area
    /// (the whole canvas when none is configured), keeping its aspect ratio,
    /// and centered in that area. Landscape images take the target as their
    /// width; square and portrait images take it as their height.
    #[must_use]
    pub fn placed(
        id: impl Into<ImageId>,
        source: impl Into<String>,
        natural_size: Size,
        config: &EditorConfig,
    ) -> Self {
        let area = config.printable_rect();
        let target = area.width().min(area.height()) * PLACEMENT_FILL;
        let aspect_ratio = natural_size.width / natural_size.height;

        let size = if aspect_ratio > 1.0 {
            Size::new(target, target / aspect_ratio)
        } else {
            Size::new(target * aspect_ratio, target)
        };
        let position = Point::new(
            area.x0 + (area.width() - size.width) / 2.0,
            area.y0 + (area.height() - size.height) / 2.0,
        );

        Self::new(id, source, natural_size, Transform::new(position, size))
    }

    /// Identifier of this entry.
    #[must_use]
    pub fn id(&self) -> &ImageId {
        &self.id
    }

    /// Encoded bitmap reference (for example a data URL or asset key).
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Pixel size of the source bitmap.
    #[must_use]
    pub fn natural_size(&self) -> Size {
        self.natural_size
    }

    /// Natural width over natural height.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.natural_size.width / self.natural_size.height
    }

    /// Current placement.
    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Returns a copy of this entry with a new placement.
    #[must_use]
    pub fn with_transform(&self, transform: Transform) -> Self {
        Self {
            transform,
            ..self.clone()
        }
    }
}
