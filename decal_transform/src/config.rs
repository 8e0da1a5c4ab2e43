// Copyright 2025 the Decal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Rect};

/// Editor configuration.
///
/// All sizes are model-space pixels. The defaults describe a 400 by 500
/// canvas with a 20 pixel minimum image size and rotation disabled.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EditorConfig {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
    /// Region images are meant to be placed in; `None` means the whole canvas.
    pub printable_area: Option<Rect>,
    /// Smallest allowed width and height of any image.
    pub min_image_size: f64,
    /// Whether rotate gestures have any effect.
    pub allow_rotation: bool,
    /// Output scale applied on export. Not used while editing.
    pub export_scale: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 500.0,
            printable_area: None,
            min_image_size: 20.0,
            allow_rotation: false,
            export_scale: 1.0,
        }
    }
}

impl EditorConfig {
    /// Sets the canvas size.
    #[must_use]
    pub fn with_canvas_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the printable area.
    #[must_use]
    pub fn with_printable_area(mut self, area: Option<Rect>) -> Self {
        self.printable_area = area;
        self
    }

    /// Sets the minimum image size.
    #[must_use]
    pub fn with_min_image_size(mut self, min_image_size: f64) -> Self {
        self.min_image_size = min_image_size;
        self
    }

    /// Enables or disables rotation.
    #[must_use]
    pub fn with_rotation(mut self, allow_rotation: bool) -> Self {
        self.allow_rotation = allow_rotation;
        self
    }

    /// Sets the export scale.
    #[must_use]
    pub fn with_export_scale(mut self, export_scale: f64) -> Self {
        self.export_scale = export_scale;
        self
    }

    /// The whole canvas as a rectangle anchored at the origin.
    #[must_use]
    pub fn canvas_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// The printable area, falling back to the whole canvas.
    #[must_use]
    pub fn printable_rect(&self) -> Rect {
        self.printable_area.unwrap_or_else(|| self.canvas_rect())
    }

    /// Model-to-output transform used when rasterizing at `export_scale`.
    #[must_use]
    pub fn export_affine(&self) -> Affine {
        Affine::scale(self.export_scale)
    }

    /// Checks that every value is usable.
    ///
    /// The engine itself never fails on a bad configuration; this is for hosts
    /// that load configuration from outside and want to reject it early.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.width.is_finite())
            || !(self.height > 0.0 && self.height.is_finite())
        {
            return Err(ConfigError::InvalidCanvasSize {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.min_image_size > 0.0 && self.min_image_size.is_finite()) {
            return Err(ConfigError::InvalidMinImageSize(self.min_image_size));
        }
        if !(self.export_scale > 0.0 && self.export_scale.is_finite()) {
            return Err(ConfigError::InvalidExportScale(self.export_scale));
        }
        if let Some(area) = self.printable_area
            && !(area.x1 > area.x0 && area.y1 > area.y0)
        {
            return Err(ConfigError::EmptyPrintableArea(area));
        }
        Ok(())
    }
}

/// Reasons an [`EditorConfig`] is rejected by [`EditorConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Canvas width or height is not a positive finite number.
    #[error("canvas size must be positive and finite, got {width}x{height}")]
    InvalidCanvasSize {
        /// Offending width.
        width: f64,
        /// Offending height.
        height: f64,
    },
    /// Minimum image size is not a positive finite number.
    #[error("minimum image size must be positive and finite, got {0}")]
    InvalidMinImageSize(f64),
    /// Export scale is not a positive finite number.
    #[error("export scale must be positive and finite, got {0}")]
    InvalidExportScale(f64),
    /// Printable area has no extent or is inverted.
    #[error("printable area {0:?} is empty")]
    EmptyPrintableArea(Rect),
}
