// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the report draft, the submission lifecycle, the
//! attachment preview, and the decorative effect state, and translates
//! messages into side effects (file dialogs, the transport call, clipboard
//! writes). Policy decisions like the submit guard and the stale-preview rule
//! live next to the update loop so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::media::PreviewImage;
use crate::report::Draft;
use crate::submission::{Phase, ReportTransport, SimulatedTransport};
use crate::ui::effects;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::sync::Arc;

pub const WINDOW_DEFAULT_WIDTH: u32 = 820;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 940;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 720;

/// Root application state.
pub struct App {
    pub i18n: I18n,
    draft: Draft,
    phase: Phase,
    /// Decoded preview of the current image attachment, if any.
    preview: Option<PreviewImage>,
    /// Tags attachment selections; a decode result from an older generation
    /// is discarded (last selection wins).
    preview_generation: u64,
    /// Whether the title is currently in its glitch pulse.
    glitch_active: bool,
    /// Binary-noise backdrop string, regenerated on a timer.
    noise: String,
    rng: StdRng,
    /// Redraw counter advanced by the noise tick; drives the spinner.
    spinner_frame: u64,
    theme_mode: ThemeMode,
    /// Set when a submit was attempted with empty required fields.
    highlight_missing: bool,
    /// Submission port. Only `SimulatedTransport` ships; tests inject stubs.
    transport: Arc<dyn ReportTransport>,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", &self.phase)
            .field("has_attachment", &self.draft.attachment.is_some())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        let mut rng = StdRng::from_os_rng();
        let noise = effects::binary_noise(&mut rng, effects::NOISE_LENGTH);

        Self {
            i18n: I18n::default(),
            draft: Draft::default(),
            phase: Phase::Idle,
            preview: None,
            preview_generation: 0,
            glitch_active: false,
            noise,
            rng,
            spinner_frame: 0,
            theme_mode: ThemeMode::System,
            highlight_missing: false,
            transport: Arc::new(SimulatedTransport),
            notifications: notifications::Manager::new(),
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from config and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut app = App::default();

        let config = config::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "failed to load configuration");
            app.notifications
                .push(notifications::Notification::warning(
                    "notification-config-error",
                ));
            config::Config::default()
        });

        app.i18n = I18n::new(flags.lang, &config);
        app.theme_mode = config.theme_mode;

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_effect_subscription(self.glitch_active)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
