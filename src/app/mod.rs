// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page sections.
//!
//! The `App` struct owns every piece of page state (scroll tracking, the
//! lightbox, the contact form, animations) and translates component events
//! into side effects such as scroll operations, toasts, relay requests and
//! config persistence.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::content::{self, Portfolio};
use crate::i18n::fluent::I18n;
use crate::relay::RelayClient;
use crate::ui::cursor::Cursor;
use crate::ui::layout::{ContentCounts, PageLayout};
use crate::ui::lightbox;
use crate::ui::notifications::{self, Notification};
use crate::ui::page::about::Stats;
use crate::ui::page::contact;
use crate::ui::page::gallery::Gallery;
use crate::ui::page::skills::SkillBars;
use crate::ui::state::{PageViewport, SectionTracker, Typewriter};
use crate::ui::theming::AppTheme;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Identifier of the page scrollable, target of nav scroll operations.
pub const PAGE_SCROLLABLE_ID: &str = "page";

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme: AppTheme,
    portfolio: Portfolio,
    layout: PageLayout,
    window: Size,
    viewport: PageViewport,
    /// Clock used by the view; advanced on scroll and animation frames.
    now: Instant,
    typewriter: Option<Typewriter>,
    lightbox: lightbox::State,
    /// Whether the collapsed navbar's dropdown is open.
    menu_open: bool,
    sections: SectionTracker,
    stats: Stats,
    skill_bars: SkillBars,
    gallery: Gallery,
    contact: contact::Form,
    cursor: Cursor,
    relay: RelayClient,
    notifications: notifications::Manager,
    /// Page scrolling is blocked while the lightbox is open.
    scroll_locked: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active_section", &self.sections.active())
            .field("lightbox_open", &self.lightbox.is_open())
            .field("scroll_locked", &self.scroll_locked)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
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
    /// Loads config and content, then starts the typewriter.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir, flags.content);

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let content_path = paths::get_content_path();
        let (portfolio, content_warning) = content::load(content_path.as_deref())
            .unwrap_or_else(|err| {
                log::error!("No usable portfolio content: {err}");
                (
                    Portfolio::blank(i18n.tr("window-fallback-name")),
                    Some("notification-content-load-error".to_string()),
                )
            });

        let mut app = Self::from_parts(config, portfolio, i18n);

        for key in [config_warning, content_warning].into_iter().flatten() {
            app.notifications.push(Notification::warning(key));
        }

        let task = app.start_typewriter();
        (app, task)
    }

    /// Assembles the page state for already loaded config and content.
    fn from_parts(config: Config, portfolio: Portfolio, i18n: I18n) -> Self {
        let window = Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT);
        let layout = PageLayout::compute(window, ContentCounts::from(&portfolio));

        let mut lightbox = lightbox::State::new(portfolio.projects.clone());
        lightbox.set_window_size(window);

        let typewriter = Typewriter::new(
            portfolio.owner.phrases.clone(),
            config.typewriter.timings(),
        );
        if typewriter.is_none() {
            log::warn!("No tagline phrases; the typewriter stays idle");
        }

        let now = Instant::now();
        let mut app = Self {
            i18n,
            theme: AppTheme::new(config.general.theme_mode),
            stats: Stats::new(&portfolio.stats),
            cursor: Cursor::new(config.cursor.enabled),
            relay: RelayClient::new(&config.relay),
            config,
            portfolio,
            layout,
            window,
            viewport: PageViewport {
                offset: 0.0,
                height: window.height,
            },
            now,
            typewriter,
            lightbox,
            menu_open: false,
            sections: SectionTracker::default(),
            skill_bars: SkillBars::default(),
            gallery: Gallery::default(),
            contact: contact::Form::default(),
            notifications: notifications::Manager::new(),
            scroll_locked: false,
        };
        app.observe_page(now);
        app
    }

    fn title(&self) -> String {
        self.i18n
            .tr_with_args("window-title", &[("name", &self.portfolio.owner.name)])
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let now = self.now;
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(subscription::Activity {
            frames: self.cursor.is_animating()
                || self.sections.is_animating(now)
                || self.skill_bars.is_animating(now)
                || self.contact.is_sending(),
            counting: self.stats.is_running(),
            toasts: self.notifications.has_notifications(),
        });

        Subscription::batch([event_sub, tick_sub])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
