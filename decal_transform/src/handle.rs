// Copyright 2025 the Decal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// One of the four corner resize grips of an image.
///
/// Dragging a handle resizes the image while the diagonally opposite corner
/// (the anchor) stays fixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Handle {
    /// Top-left corner.
    Nw,
    /// Top-right corner.
    Ne,
    /// Bottom-left corner.
    Sw,
    /// Bottom-right corner.
    Se,
}

impl Handle {
    /// All handles, in `nw`, `ne`, `sw`, `se` order.
    pub const ALL: [Self; 4] = [Self::Nw, Self::Ne, Self::Sw, Self::Se];

    /// Sign applied to a horizontal pointer delta to get the width change.
    ///
    /// East handles grow with `+dx`, west handles grow with `-dx`.
    #[must_use]
    pub const fn width_sign(self) -> f64 {
        match self {
            Self::Ne | Self::Se => 1.0,
            Self::Nw | Self::Sw => -1.0,
        }
    }

    /// Returns `true` for the handles on the left edge.
    ///
    /// Growing from a west handle moves the image's x position.
    #[must_use]
    pub const fn is_west(self) -> bool {
        matches!(self, Self::Nw | Self::Sw)
    }

    /// Returns `true` for the handles on the top edge.
    ///
    /// Growing from a north handle moves the image's y position.
    #[must_use]
    pub const fn is_north(self) -> bool {
        matches!(self, Self::Nw | Self::Ne)
    }

    /// The handle whose corner stays fixed while this one is dragged.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Nw => Self::Se,
            Self::Ne => Self::Sw,
            Self::Sw => Self::Ne,
            Self::Se => Self::Nw,
        }
    }

    /// Short lowercase name (`"nw"`, `"ne"`, `"sw"`, `"se"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nw => "nw",
            Self::Ne => "ne",
            Self::Sw => "sw",
            Self::Se => "se",
        }
    }
}

impl core::fmt::Display for Handle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
