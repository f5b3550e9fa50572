// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the picker controller.
//!
//! The `App` struct wires the framework-agnostic [`Controller`] to the Iced
//! runtime: view messages become controller intents, the single
//! [`Effect::Enqueue`] side effect becomes a `Task`, and the async outcome
//! is fed back as an intent. This file intentionally keeps policy decisions
//! (toast auto-dismiss, queue selection, demo catalog) close to the main
//! update loop so user-facing behavior is easy to audit.

use crate::catalog::{Photo, PhotoRect, SelectionStore};
use crate::config::{self, Config};
use crate::download::{DownloadQueue, SimulatedQueue};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::picker::{Controller, Effect, Intent, OverlayStore};
use crate::ui::{photo_grid, picker_bar};
use iced::widget::{Column, Container, Text};
use iced::{time, window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Root Iced application state bridging the picker core, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    config: Config,
    controller: Controller,
    queue: Arc<dyn DownloadQueue>,
    /// When the completion/failure notice appeared, for auto-dismiss.
    toast_opened_at: Option<Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("controller", &self.controller)
            .field("toast_opened_at", &self.toast_opened_at)
            .finish()
    }
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    PickerBar(picker_bar::Message),
    PhotoGrid(photo_grid::Message),
    /// Outcome of the asynchronous enqueue call.
    EnqueueFinished(Result<(), Error>),
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;

/// Cadence of the auto-dismiss countdown while a notice is showing.
const TOAST_TICK: Duration = Duration::from_millis(500);

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(App::title, App::update, App::view)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run_with(move || App::new(flags))
}

/// Catalog stand-in for the gallery page the picker normally attaches to.
fn sample_catalog() -> SelectionStore {
    let photos = (0..6)
        .map(|i| {
            Photo::new(
                format!("photo-{:02}", i + 1),
                PhotoRect::new(20.0 + 140.0 * (i / 3) as f32, 20.0 + 110.0 * (i % 3) as f32, 100.0, 130.0, i),
            )
        })
        .collect();
    SelectionStore::from_photos(photos)
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            controller: Controller::new(sample_catalog(), OverlayStore::new()),
            queue: Arc::new(SimulatedQueue::default()),
            toast_opened_at: None,
        }
    }
}

impl App {
    /// Initializes application state from persisted preferences and CLI
    /// flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            eprintln!("Failed to load settings: {err}");
            Config::default()
        });
        let i18n = I18n::new(flags.lang, &config);

        let app = App {
            i18n,
            config,
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickerBar(picker_bar::Message::ToggleSelectAll) => {
                self.controller.handle(Intent::ToggleSelectAll);
                Task::none()
            }
            Message::PickerBar(picker_bar::Message::StartDownload) => {
                match self.controller.handle(Intent::StartDownload) {
                    Effect::Enqueue(ids) => {
                        let queue = Arc::clone(&self.queue);
                        Task::perform(
                            async move { queue.enqueue(ids).await },
                            Message::EnqueueFinished,
                        )
                    }
                    Effect::None => Task::none(),
                }
            }
            Message::PickerBar(picker_bar::Message::CloseToast) => {
                self.controller.handle(Intent::CloseToast);
                self.toast_opened_at = None;
                Task::none()
            }
            Message::PickerBar(picker_bar::Message::DismissFailure) => {
                self.controller.handle(Intent::DismissFailure);
                self.toast_opened_at = None;
                Task::none()
            }
            Message::PhotoGrid(photo_grid::Message::PhotoToggled { id, selected }) => {
                self.controller
                    .handle(Intent::SetPhotoSelected { id, selected });
                Task::none()
            }
            Message::EnqueueFinished(outcome) => {
                match outcome {
                    Ok(()) => {
                        self.controller.handle(Intent::EnqueueAccepted);
                    }
                    Err(err) => {
                        eprintln!("Enqueue rejected: {err}");
                        self.controller.handle(Intent::EnqueueFailed {
                            detail: err.to_string(),
                        });
                    }
                }
                self.toast_opened_at = Some(Instant::now());
                Task::none()
            }
            Message::Tick(now) => {
                self.auto_dismiss_toast(now);
                Task::none()
            }
        }
    }

    /// Dismisses the visible notice once the configured delay has elapsed.
    fn auto_dismiss_toast(&mut self, now: Instant) {
        let (Some(opened_at), Some(secs)) = (self.toast_opened_at, self.config.toast_duration_secs)
        else {
            return;
        };

        if now.duration_since(opened_at) < Duration::from_secs(secs) {
            return;
        }

        let intent = match self.controller.lifecycle() {
            crate::picker::Lifecycle::Completed => Intent::CloseToast,
            crate::picker::Lifecycle::Failed => Intent::DismissFailure,
            _ => {
                self.toast_opened_at = None;
                return;
            }
        };
        self.controller.handle(intent);
        self.toast_opened_at = None;
    }

    fn subscription(&self) -> Subscription<Message> {
        // Only tick while a notice is up and auto-dismiss is configured.
        if self.toast_opened_at.is_some() && self.config.toast_duration_secs.is_some() {
            time::every(TOAST_TICK).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let view_model = self.controller.view_model();

        let bar = picker_bar::view(&view_model, &self.i18n).map(Message::PickerBar);

        let gallery: Element<'_, Message> = if self.controller.overlay_visible() {
            photo_grid::view(self.controller.photos().photos(), &self.i18n)
                .map(Message::PhotoGrid)
        } else {
            Text::new(self.i18n.tr("overlay-hidden-note")).into()
        };

        let content = Column::new().spacing(16.0).push(bar).push(gallery);

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(16.0)
            .into()
    }
}
