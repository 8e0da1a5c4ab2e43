// Copyright 2025 the Decal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use decal_transform::{ImageEntry, ImageId};
use tracing::trace;

/// The selected image plus a revision counter.
///
/// The revision bumps only when the selected id actually changes, so
/// observers can compare two numbers instead of two ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageSelection {
    selected: Option<ImageId>,
    revision: u64,
}

impl ImageSelection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: None,
            revision: 0,
        }
    }

    /// The selected id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&ImageId> {
        self.selected.as_ref()
    }

    /// The current revision.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Selects `id`, or clears the selection for `None`.
    ///
    /// The id is not checked against any list.
    pub fn set(&mut self, id: Option<ImageId>) {
        if self.selected == id {
            return;
        }
        self.selected = id;
        self.revision = self.revision.wrapping_add(1);
    }

    /// Applies the auto-selection rule after the list changed.
    ///
    /// With nothing selected, the front-most entry is picked. A selection
    /// whose id has disappeared moves to the new front-most entry, or clears
    /// when the list is empty. A valid selection is left alone.
    pub fn reconcile(&mut self, images: &[ImageEntry]) {
        let needs_pick = match &self.selected {
            None => !images.is_empty(),
            Some(id) => !images.iter().any(|entry| entry.id() == id),
        };
        if needs_pick {
            let front = images.last().map(|entry| entry.id().clone());
            trace!(previous = ?self.selected, selected = ?front, "auto-selecting front-most image");
            self.set(front);
        }
    }
}
