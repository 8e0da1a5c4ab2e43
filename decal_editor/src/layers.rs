// Copyright 2025 the Decal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure operations on the ordered image list.
//!
//! The list is drawn bottom to top, so the last entry is the front-most
//! layer. Every function reads a borrowed list and returns a new one;
//! `None` means the operation is a no-op and nothing should be emitted.

use alloc::vec::Vec;

use decal_transform::{ImageEntry, ImageId, Transform};

fn position_of(images: &[ImageEntry], id: &ImageId) -> Option<usize> {
    images.iter().position(|entry| entry.id() == id)
}

/// Returns the entry with `id`, if present.
pub fn find<'a>(images: &'a [ImageEntry], id: &ImageId) -> Option<&'a ImageEntry> {
    images.iter().find(|entry| entry.id() == id)
}

/// Every entry except the one with `id`. An absent id yields an unchanged copy.
pub fn without(images: &[ImageEntry], id: &ImageId) -> Vec<ImageEntry> {
    images.iter().filter(|entry| entry.id() != id).cloned().collect()
}

/// Moves the entry with `id` to the end of the list (front-most).
pub fn brought_to_front(images: &[ImageEntry], id: &ImageId) -> Option<Vec<ImageEntry>> {
    let index = position_of(images, id)?;
    let mut next = images.to_vec();
    let entry = next.remove(index);
    next.push(entry);
    Some(next)
}

/// Moves the entry with `id` to the start of the list (back-most).
pub fn sent_to_back(images: &[ImageEntry], id: &ImageId) -> Option<Vec<ImageEntry>> {
    let index = position_of(images, id)?;
    let mut next = images.to_vec();
    let entry = next.remove(index);
    next.insert(0, entry);
    Some(next)
}

/// Moves the entry at `from` to `to`, shifting the entries in between.
///
/// Returns `None` when either index is out of range or they are equal.
pub fn reordered(images: &[ImageEntry], from: usize, to: usize) -> Option<Vec<ImageEntry>> {
    if from == to || from >= images.len() || to >= images.len() {
        return None;
    }
    let mut next = images.to_vec();
    let entry = next.remove(from);
    next.insert(to, entry);
    Some(next)
}

/// Replaces the transform of the entry with `id`. An absent id yields an
/// unchanged copy.
pub fn with_transform(images: &[ImageEntry], id: &ImageId, transform: Transform) -> Vec<ImageEntry> {
    images
        .iter()
        .map(|entry| {
            if entry.id() == id {
                entry.with_transform(transform)
            } else {
                entry.clone()
            }
        })
        .collect()
}
