// SPDX-License-Identifier: MPL-2.0
//! Download lifecycle controller.
//!
//! The controller is the only owner of lifecycle transitions. It consumes
//! presentation intents through a single [`Controller::handle`] entrypoint,
//! mutates the injected stores, and answers with an [`Effect`] for the
//! shell to execute. Every state-changing intent ends with the full
//! [`ViewModel`] being re-emitted to subscribers.
//!
//! Intent handling runs to completion before the next intent is processed;
//! the only suspension point (the enqueue call itself) lives outside the
//! controller, behind [`Effect::Enqueue`]. The `downloadable` guard is the
//! single linearization point that keeps a second `StartDownload` from
//! overlapping an outstanding request.

use super::lifecycle::Lifecycle;
use super::overlay::OverlayStore;
use super::view_model::{ToggleAction, ViewModel};
use crate::catalog::{PhotoId, PhotoRect, SelectionStore};
use std::fmt;

/// Callback invoked with the fresh view model after each transition.
pub type Subscriber = Box<dyn Fn(&ViewModel) + Send>;

/// User intents and asynchronous completions consumed by the controller.
#[derive(Debug, Clone)]
pub enum Intent {
    /// Apply the currently offered bulk selection action.
    ToggleSelectAll,
    /// Set the selection flag of a single photo.
    SetPhotoSelected { id: PhotoId, selected: bool },
    /// Start creating a download queue from the current selection.
    StartDownload,
    /// The execution service accepted the enqueue request.
    EnqueueAccepted,
    /// The execution service rejected the enqueue request.
    EnqueueFailed { detail: String },
    /// Dismiss the completion notice.
    CloseToast,
    /// Acknowledge a failure and return to `Idle`.
    DismissFailure,
}

/// Side effects the shell must execute on behalf of the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing to do; the intent was handled (or ignored) internally.
    None,
    /// Hand the selected photo identifiers to the download-execution
    /// service and report the outcome back as an intent.
    Enqueue(Vec<PhotoId>),
}

/// State machine governing how a photo selection becomes a download.
pub struct Controller {
    photos: SelectionStore,
    overlay: OverlayStore,
    lifecycle: Lifecycle,
    /// Guard cleared when a request starts, restored only by failure
    /// recovery. Prevents duplicate submissions from a stale control.
    downloadable: bool,
    toast_visible: bool,
    failure_detail: Option<String>,
    subscribers: Vec<Subscriber>,
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("lifecycle", &self.lifecycle)
            .field("downloadable", &self.downloadable)
            .field("selected", &self.photos.selected_count())
            .field("selectable", &self.photos.selectable_count())
            .finish()
    }
}

impl Controller {
    /// Creates a controller over the injected stores.
    #[must_use]
    pub fn new(photos: SelectionStore, overlay: OverlayStore) -> Self {
        Self {
            photos,
            overlay,
            lifecycle: Lifecycle::Idle,
            downloadable: true,
            toast_visible: false,
            failure_detail: None,
            subscribers: Vec::new(),
        }
    }

    /// Registers a view-model observer.
    ///
    /// The callback fires after every state-changing intent with the full
    /// derived view model. Ignored intents do not re-emit.
    pub fn subscribe(&mut self, subscriber: Subscriber) {
        self.subscribers.push(subscriber);
    }

    /// Handles one intent to completion.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, intent: Intent) -> Effect {
        let effect = match intent {
            Intent::ToggleSelectAll => {
                match self.toggle_action() {
                    ToggleAction::SelectAll => self.photos.select_all(),
                    ToggleAction::DeselectAll => self.photos.deselect_all(),
                }
                Effect::None
            }
            Intent::SetPhotoSelected { id, selected } => {
                if !self.photos.set_selected(&id, selected) {
                    return Effect::None;
                }
                Effect::None
            }
            Intent::StartDownload => {
                // Re-validate even though the presentation layer disables
                // the control: a stale enabled control must stay a no-op.
                if self.lifecycle != Lifecycle::Idle || !self.can_download() {
                    return Effect::None;
                }

                self.downloadable = false;
                self.lifecycle = Lifecycle::Requesting;
                Effect::Enqueue(self.photos.selected_ids())
            }
            Intent::EnqueueAccepted => {
                if self.lifecycle != Lifecycle::Requesting {
                    return Effect::None;
                }

                // Layout reset must land before the overlay disappears so a
                // render against intermediate state never shows stale
                // placements inside a hidden overlay.
                self.photos.reset_positions(PhotoRect::ZERO);
                self.overlay.hide();
                self.lifecycle = Lifecycle::Completed;
                self.toast_visible = true;
                Effect::None
            }
            Intent::EnqueueFailed { detail } => {
                if self.lifecycle != Lifecycle::Requesting {
                    return Effect::None;
                }

                self.lifecycle = Lifecycle::Failed;
                self.failure_detail = Some(detail);
                self.toast_visible = true;
                Effect::None
            }
            Intent::CloseToast => {
                if self.lifecycle != Lifecycle::Completed || !self.toast_visible {
                    return Effect::None;
                }

                // Presentation acknowledgement only; the lifecycle stays
                // `Completed` until the picker flow is re-entered.
                self.toast_visible = false;
                Effect::None
            }
            Intent::DismissFailure => {
                if self.lifecycle != Lifecycle::Failed {
                    return Effect::None;
                }

                self.lifecycle = Lifecycle::Idle;
                self.downloadable = true;
                self.failure_detail = None;
                self.toast_visible = false;
                Effect::None
            }
        };

        self.notify();
        effect
    }

    /// Whether a download may start right now.
    #[must_use]
    pub fn can_download(&self) -> bool {
        self.photos.selected_count() > 0 && self.downloadable
    }

    /// Bulk action the selection toggle should offer next.
    #[must_use]
    pub fn toggle_action(&self) -> ToggleAction {
        ToggleAction::derive(
            self.photos.selected_count(),
            self.photos.selectable_count(),
        )
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Read access to the catalog for rendering.
    #[must_use]
    pub fn photos(&self) -> &SelectionStore {
        &self.photos
    }

    #[must_use]
    pub fn overlay_visible(&self) -> bool {
        self.overlay.is_visible()
    }

    /// Recomputes the derived view model from current state.
    #[must_use]
    pub fn view_model(&self) -> ViewModel {
        ViewModel {
            selected_count: self.photos.selected_count(),
            selectable_count: self.photos.selectable_count(),
            lifecycle: self.lifecycle,
            can_download: self.can_download(),
            toggle_action: self.toggle_action(),
            toast_visible: self.toast_visible,
            failure_detail: self.failure_detail.clone(),
        }
    }

    fn notify(&self) {
        if self.subscribers.is_empty() {
            return;
        }
        let view_model = self.view_model();
        for subscriber in &self.subscribers {
            subscriber(&view_model);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Photo;
    use std::sync::{Arc, Mutex};

    fn controller_with(count: usize) -> Controller {
        let photos = (0..count)
            .map(|i| Photo::new(format!("photo-{i}"), PhotoRect::new(0.0, 0.0, 100.0, 80.0, 1)))
            .collect();
        Controller::new(SelectionStore::from_photos(photos), OverlayStore::new())
    }

    fn select(controller: &mut Controller, id: &str) {
        controller.handle(Intent::SetPhotoSelected {
            id: PhotoId::from(id),
            selected: true,
        });
    }

    #[test]
    fn start_download_is_rejected_with_empty_selection() {
        let mut controller = controller_with(3);

        let effect = controller.handle(Intent::StartDownload);

        assert_eq!(effect, Effect::None);
        assert_eq!(controller.lifecycle(), Lifecycle::Idle);
        assert!(!controller.can_download());
    }

    #[test]
    fn start_download_moves_to_requesting_and_clears_the_guard() {
        let mut controller = controller_with(3);
        select(&mut controller, "photo-1");
        assert!(controller.can_download());

        let effect = controller.handle(Intent::StartDownload);

        assert_eq!(effect, Effect::Enqueue(vec![PhotoId::from("photo-1")]));
        assert_eq!(controller.lifecycle(), Lifecycle::Requesting);
        assert!(!controller.can_download());
    }

    #[test]
    fn second_start_download_in_flight_is_a_no_op() {
        let mut controller = controller_with(3);
        select(&mut controller, "photo-0");

        let first = controller.handle(Intent::StartDownload);
        let second = controller.handle(Intent::StartDownload);

        assert!(matches!(first, Effect::Enqueue(_)));
        assert_eq!(second, Effect::None);
        assert_eq!(controller.lifecycle(), Lifecycle::Requesting);
    }

    #[test]
    fn accepted_enqueue_resets_layout_then_hides_the_overlay() {
        let mut controller = controller_with(3);
        select(&mut controller, "photo-2");
        controller.handle(Intent::StartDownload);

        controller.handle(Intent::EnqueueAccepted);

        assert_eq!(controller.lifecycle(), Lifecycle::Completed);
        assert!(!controller.overlay_visible());
        for photo in controller.photos().photos() {
            assert_eq!(photo.position, PhotoRect::ZERO);
        }
        assert!(controller.view_model().toast_visible);
    }

    #[test]
    fn enqueue_acceptance_outside_requesting_is_ignored() {
        let mut controller = controller_with(2);

        controller.handle(Intent::EnqueueAccepted);

        assert_eq!(controller.lifecycle(), Lifecycle::Idle);
        assert!(controller.overlay_visible());
    }

    #[test]
    fn failed_enqueue_reports_detail_and_recovers_to_idle() {
        let mut controller = controller_with(2);
        select(&mut controller, "photo-0");
        controller.handle(Intent::StartDownload);

        controller.handle(Intent::EnqueueFailed {
            detail: "service unavailable".into(),
        });

        assert_eq!(controller.lifecycle(), Lifecycle::Failed);
        assert_eq!(
            controller.view_model().failure_detail.as_deref(),
            Some("service unavailable")
        );
        // The overlay and layout are untouched by a failed attempt.
        assert!(controller.overlay_visible());

        controller.handle(Intent::DismissFailure);

        assert_eq!(controller.lifecycle(), Lifecycle::Idle);
        assert!(controller.can_download());
        assert!(controller.view_model().failure_detail.is_none());
    }

    #[test]
    fn close_toast_keeps_lifecycle_completed() {
        let mut controller = controller_with(2);
        select(&mut controller, "photo-0");
        controller.handle(Intent::StartDownload);
        controller.handle(Intent::EnqueueAccepted);

        controller.handle(Intent::CloseToast);

        assert_eq!(controller.lifecycle(), Lifecycle::Completed);
        assert!(!controller.view_model().toast_visible);
    }

    #[test]
    fn close_toast_outside_completed_is_ignored() {
        let mut controller = controller_with(2);

        let effect = controller.handle(Intent::CloseToast);

        assert_eq!(effect, Effect::None);
        assert!(!controller.view_model().toast_visible);
    }

    #[test]
    fn toggle_routes_to_deselect_all_once_everything_is_selected() {
        let mut controller = controller_with(5);

        controller.handle(Intent::ToggleSelectAll);
        assert_eq!(controller.view_model().selected_count, 5);
        assert_eq!(controller.toggle_action(), ToggleAction::DeselectAll);

        controller.handle(Intent::ToggleSelectAll);
        assert_eq!(controller.view_model().selected_count, 0);
        assert_eq!(controller.toggle_action(), ToggleAction::SelectAll);
    }

    #[test]
    fn repeated_toggle_never_loops_on_a_stale_action() {
        let mut controller = controller_with(4);
        controller.handle(Intent::ToggleSelectAll);
        controller.handle(Intent::ToggleSelectAll);
        controller.handle(Intent::ToggleSelectAll);

        // select -> deselect -> select again; always derived from counts.
        assert_eq!(controller.view_model().selected_count, 4);
    }

    #[test]
    fn subscribers_receive_the_view_model_after_each_transition() {
        let mut controller = controller_with(3);
        let seen: Arc<Mutex<Vec<ViewModel>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        controller.subscribe(Box::new(move |vm| {
            sink.lock().unwrap().push(vm.clone());
        }));

        controller.handle(Intent::ToggleSelectAll);
        controller.handle(Intent::SetPhotoSelected {
            id: PhotoId::from("photo-1"),
            selected: false,
        });
        controller.handle(Intent::StartDownload);

        let emitted = seen.lock().unwrap();
        assert_eq!(emitted.len(), 3);
        assert_eq!(emitted[0].selected_count, 3);
        assert_eq!(emitted.last().unwrap().lifecycle, Lifecycle::Requesting);
    }

    #[test]
    fn ignored_intents_do_not_re_emit() {
        let mut controller = controller_with(2);
        let seen: Arc<Mutex<usize>> = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&seen);
        controller.subscribe(Box::new(move |_| {
            *sink.lock().unwrap() += 1;
        }));

        // Nothing selected, so this start is silently dropped.
        controller.handle(Intent::StartDownload);
        controller.handle(Intent::EnqueueAccepted);

        assert_eq!(*seen.lock().unwrap(), 0);
    }

    #[test]
    fn view_model_matches_store_state() {
        let mut controller = controller_with(3);
        select(&mut controller, "photo-1");

        let vm = controller.view_model();
        assert_eq!(vm.selected_count, 1);
        assert_eq!(vm.selectable_count, 3);
        assert!(vm.can_download);
        assert_eq!(vm.toggle_action, ToggleAction::SelectAll);
        assert_eq!(vm.lifecycle, Lifecycle::Idle);
    }
}
