// Copyright 2025 the Decal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use decal_gesture::{DragMode, GestureFrame, GestureState, PointerId, PointerSample, TouchSample};
use decal_transform::{EditorConfig, ImageEntry, ImageId, Transform};
use tracing::{debug, trace};

use crate::{EditorHost, ImageSelection, layers};

/// The editor's stateful orchestrator.
///
/// Owns the configuration, the selection, and the active gesture. The image
/// list stays with the [`EditorHost`], which every list-touching call takes
/// by `&mut`: the controller reads the freshest list from it, builds the new
/// list, and hands it back through [`EditorHost::on_change`].
///
/// After every emitted change the auto-selection rule runs: with nothing
/// selected, or with the selected id gone, the front-most entry becomes
/// selected (or the selection clears when the list is empty). Hosts that
/// change the list on their own report it through
/// [`TransformController::images_changed`].
#[derive(Clone, Debug, Default)]
pub struct TransformController {
    config: EditorConfig,
    selection: ImageSelection,
    gestures: GestureState<ImageId>,
}

impl TransformController {
    /// Creates an idle controller with nothing selected.
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            selection: ImageSelection::new(),
            gestures: GestureState::new(),
        }
    }

    /// The configuration in effect.
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Replaces the configuration. Active gestures pick it up on their next
    /// event.
    pub fn set_config(&mut self, config: EditorConfig) {
        self.config = config;
    }

    /// The selected image, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<&ImageId> {
        self.selection.selected()
    }

    /// Counter bumped whenever the selected id changes.
    #[must_use]
    pub fn selection_revision(&self) -> u64 {
        self.selection.revision()
    }

    /// Returns `true` while a single-pointer drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gestures.is_dragging()
    }

    /// Returns `true` while a two-touch pinch is active.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.gestures.is_pinching()
    }

    /// Mode of the active drag, if any.
    #[must_use]
    pub fn active_drag_mode(&self) -> Option<DragMode> {
        self.gestures.drag_mode()
    }

    /// The image the active gesture is changing.
    #[must_use]
    pub fn active_target(&self) -> Option<&ImageId> {
        self.gestures.target()
    }

    /// Selects `id`, or clears the selection for `None`. The id is not
    /// validated.
    pub fn select_image(&mut self, id: Option<ImageId>) {
        self.selection.set(id);
    }

    /// Clears the selection.
    ///
    /// It stays clear until the list changes next, when auto-selection runs.
    pub fn deselect_all(&mut self) {
        self.selection.set(None);
    }

    /// Re-runs auto-selection after a list change the controller did not make.
    pub fn images_changed(&mut self, images: &[ImageEntry]) {
        self.selection.reconcile(images);
    }

    /// Removes the entry with `id`. Emits even when `id` is absent.
    pub fn delete_image<H: EditorHost + ?Sized>(&mut self, host: &mut H, id: &ImageId) {
        debug!(%id, "delete image");
        let next = layers::without(host.images(), id);
        self.emit(host, next);
    }

    /// Removes the selected entry, if any.
    pub fn delete_selected<H: EditorHost + ?Sized>(&mut self, host: &mut H) {
        match self.selection.selected().cloned() {
            Some(id) => self.delete_image(host, &id),
            None => trace!("delete selected with nothing selected"),
        }
    }

    /// Moves the entry with `id` to the front. No-op for an absent id.
    pub fn bring_to_front<H: EditorHost + ?Sized>(&mut self, host: &mut H, id: &ImageId) {
        match layers::brought_to_front(host.images(), id) {
            Some(next) => self.emit(host, next),
            None => trace!(%id, "bring to front: unknown image"),
        }
    }

    /// Moves the entry with `id` to the back. No-op for an absent id.
    pub fn send_to_back<H: EditorHost + ?Sized>(&mut self, host: &mut H, id: &ImageId) {
        match layers::sent_to_back(host.images(), id) {
            Some(next) => self.emit(host, next),
            None => trace!(%id, "send to back: unknown image"),
        }
    }

    /// Moves the entry at `from` to `to`.
    ///
    /// Out-of-range or equal indices are ignored without emitting.
    pub fn reorder_image<H: EditorHost + ?Sized>(&mut self, host: &mut H, from: usize, to: usize) {
        match layers::reordered(host.images(), from, to) {
            Some(next) => self.emit(host, next),
            None => trace!(from, to, len = host.images().len(), "reorder ignored"),
        }
    }

    /// Clamps `transform` and applies it to the entry with `id`.
    ///
    /// Emits even when `id` is absent, with the list unchanged.
    pub fn update_image_transform<H: EditorHost + ?Sized>(
        &mut self,
        host: &mut H,
        id: &ImageId,
        transform: Transform,
    ) {
        let clamped = transform.clamped(self.config.min_image_size);
        let next = layers::with_transform(host.images(), id, clamped);
        self.emit(host, next);
    }

    /// Starts a drag of `mode` on `id` and selects it.
    ///
    /// Ignored when `id` is not in the list. Supersedes any gesture in
    /// progress.
    pub fn pointer_down<H: EditorHost + ?Sized>(
        &mut self,
        host: &mut H,
        id: &ImageId,
        mode: DragMode,
        sample: PointerSample,
    ) {
        let Some(snapshot) = layers::find(host.images(), id).map(|entry| *entry.transform())
        else {
            trace!(%id, "pointer down on unknown image");
            return;
        };
        self.selection.set(Some(id.clone()));
        self.gestures.begin_drag(host, id.clone(), mode, sample, snapshot);
    }

    /// Feeds a pointer move to the active drag and emits the result.
    pub fn pointer_move<H: EditorHost + ?Sized>(&mut self, host: &mut H, sample: PointerSample) {
        let Some(frame) = self.frame(&*host) else {
            return;
        };
        let Some((id, transform)) = self.gestures.pointer_move(sample, &frame) else {
            return;
        };
        let id = id.clone();
        self.update_image_transform(host, &id, transform);
    }

    /// Ends the drag if `pointer` is the captured one.
    pub fn pointer_up<H: EditorHost + ?Sized>(&mut self, host: &mut H, pointer: PointerId) {
        self.gestures.end_pointer(host, pointer);
    }

    /// Treated exactly like [`TransformController::pointer_up`].
    pub fn pointer_cancel<H: EditorHost + ?Sized>(&mut self, host: &mut H, pointer: PointerId) {
        self.pointer_up(host, pointer);
    }

    /// Starts a pinch on `id` when exactly two touches are down, selecting it.
    ///
    /// Preempts an active drag.
    pub fn touch_start<H: EditorHost + ?Sized>(
        &mut self,
        host: &mut H,
        id: &ImageId,
        touches: &TouchSample,
    ) {
        if touches.len() != 2 {
            trace!(touches = touches.len(), "touch start is not a pinch");
            return;
        }
        let Some(snapshot) = layers::find(host.images(), id).map(|entry| *entry.transform())
        else {
            trace!(%id, "touch start on unknown image");
            return;
        };
        if self.gestures.begin_pinch(host, id.clone(), touches, snapshot) {
            self.selection.set(Some(id.clone()));
        }
    }

    /// Feeds a touch move to the active pinch and emits the result.
    pub fn touch_move<H: EditorHost + ?Sized>(&mut self, host: &mut H, touches: &TouchSample) {
        let Some(frame) = self.frame(&*host) else {
            return;
        };
        let Some((id, transform)) = self.gestures.touch_move(touches, &frame) else {
            return;
        };
        let id = id.clone();
        self.update_image_transform(host, &id, transform);
    }

    /// Ends the active pinch.
    pub fn touch_end(&mut self) {
        self.gestures.end_touch();
    }

    /// Treated exactly like [`TransformController::touch_end`].
    pub fn touch_cancel(&mut self) {
        self.touch_end();
    }

    /// Drops any active gesture, releasing a captured pointer.
    pub fn cancel_gesture<H: EditorHost + ?Sized>(&mut self, host: &mut H) {
        self.gestures.cancel(host);
    }

    /// Samples everything the active gesture reads fresh for this event.
    fn frame<H: EditorHost + ?Sized>(&self, host: &H) -> Option<GestureFrame> {
        let target = self.gestures.target()?;
        let Some(entry) = layers::find(host.images(), target) else {
            trace!(image = %target, "gesture target is no longer in the list");
            return None;
        };
        Some(GestureFrame::for_entry(entry, &self.config, host.display_frame()))
    }

    fn emit<H: EditorHost + ?Sized>(&mut self, host: &mut H, images: Vec<ImageEntry>) {
        self.selection.reconcile(&images);
        host.on_change(images);
    }
}
