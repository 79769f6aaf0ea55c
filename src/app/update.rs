// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message, PAGE_SCROLLABLE_ID};
use crate::config::{self, COUNTER_VISIBILITY_THRESHOLD};
use crate::ui::layout::{ContentCounts, PageLayout};
use crate::ui::lightbox::{self, Effect as LightboxEffect};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::Notification;
use crate::ui::page::contact::{self, Event as ContactEvent};
use crate::ui::page::gallery::Event as GalleryEvent;
use crate::ui::page::hero;
use crate::ui::state::{PageViewport, SectionId};
use crate::ui::theming::AppTheme;
use iced::widget::{operation, Id};
use iced::{Size, Task};
use std::time::{Duration, Instant};

const CONTACT_SENT_KEY: &str = "notification-contact-sent";
const CONTACT_FAILED_KEY: &str = "notification-contact-failed";
const CONTACT_INCOMPLETE_KEY: &str = "notification-contact-incomplete";

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(message) => {
                let event = navbar::update(message, &mut self.menu_open);
                self.handle_navbar_event(event)
            }
            Message::Hero(message) => match message {
                hero::Message::Navigate(id) => self.scroll_to(id),
                hero::Message::Hover(hovering) => {
                    self.cursor.set_hovering(hovering);
                    Task::none()
                }
            },
            Message::Gallery(message) => {
                match self.gallery.update(message, self.layout.card_size()) {
                    GalleryEvent::None => Task::none(),
                    GalleryEvent::OpenLightbox(index) => {
                        self.update_lightbox(lightbox::Message::Open(index))
                    }
                    GalleryEvent::Hover(hovering) => {
                        self.cursor.set_hovering(hovering);
                        Task::none()
                    }
                }
            }
            Message::Lightbox(message) => self.update_lightbox(message),
            Message::Contact(message) => self.update_contact(message),
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::PageScrolled(viewport) => {
                let page = PageViewport {
                    offset: viewport.absolute_offset().y,
                    height: viewport.bounds().height,
                };
                self.set_viewport(page, Instant::now());
                Task::none()
            }
            Message::WindowResized(size) => {
                self.resize(size);
                Task::none()
            }
            Message::CursorMoved(position) => {
                self.cursor.pointer_moved(position, Instant::now());
                Task::none()
            }
            Message::CursorLeft => {
                self.cursor.pointer_left();
                Task::none()
            }
            Message::Frame(now) => {
                self.now = now;
                self.cursor.frame(now);
                Task::none()
            }
            Message::StatsTick => {
                self.stats.tick();
                Task::none()
            }
            Message::TypewriterTick => match self.typewriter.as_mut() {
                Some(typewriter) => schedule_typewriter(typewriter.tick()),
                None => Task::none(),
            },
            Message::Tick(now) => {
                self.notifications.tick(now);
                Task::none()
            }
        }
    }

    /// Schedules the first typewriter step after its startup delay.
    pub(super) fn start_typewriter(&self) -> Task<Message> {
        self.typewriter
            .as_ref()
            .map_or_else(Task::none, |typewriter| {
                schedule_typewriter(typewriter.startup_delay())
            })
    }

    /// Records the visible part of the page and runs the scroll-driven
    /// triggers.
    pub(super) fn set_viewport(&mut self, viewport: PageViewport, now: Instant) {
        self.viewport = viewport;
        self.observe_page(now);
    }

    /// Updates the active section, starts reveals and the one-shot stat and
    /// skill animations for whatever is now on screen.
    pub(super) fn observe_page(&mut self, now: Instant) {
        self.now = now;

        let revealed = self
            .sections
            .observe(self.layout.sections(), self.viewport, now);
        if !revealed.is_empty() {
            log::debug!("Revealing sections {revealed:?}");
        }

        if PageLayout::is_visible(self.layout.stats(), self.viewport, COUNTER_VISIBILITY_THRESHOLD)
            && self.stats.start()
        {
            log::debug!("Starting stat counters");
        }

        if PageLayout::is_visible(self.layout.skills(), self.viewport, COUNTER_VISIBILITY_THRESHOLD)
            && self.skill_bars.start(now)
        {
            log::debug!("Starting skill bars");
        }
    }

    fn resize(&mut self, size: Size) {
        self.window = size;
        self.layout = PageLayout::compute(size, ContentCounts::from(&self.portfolio));
        self.lightbox.set_window_size(size);
        if !navbar::is_collapsed(size.width) {
            self.menu_open = false;
        }

        // The page scrollable fills the window.
        let viewport = PageViewport {
            height: size.height,
            ..self.viewport
        };
        self.set_viewport(viewport, Instant::now());
    }

    fn handle_navbar_event(&mut self, event: NavbarEvent) -> Task<Message> {
        match event {
            NavbarEvent::None => Task::none(),
            NavbarEvent::ScrollTo(id) => self.scroll_to(id),
            NavbarEvent::ToggleTheme => {
                self.toggle_theme();
                Task::none()
            }
            NavbarEvent::Hover(hovering) => {
                self.cursor.set_hovering(hovering);
                Task::none()
            }
        }
    }

    fn scroll_to(&mut self, id: SectionId) -> Task<Message> {
        self.menu_open = false;
        if self.scroll_locked {
            return Task::none();
        }

        log::debug!("Scrolling to {id:?}");
        operation::snap_to(
            Id::new(PAGE_SCROLLABLE_ID),
            self.layout.relative_target(id, self.viewport.height),
        )
    }

    fn toggle_theme(&mut self) {
        let mode = self.theme.mode.toggled();
        self.theme = AppTheme::new(mode);
        self.config.general.theme_mode = mode;

        if let Err(err) = config::save(&self.config) {
            log::warn!("Could not save theme preference: {err}");
            self.notifications
                .push(Notification::warning("notification-config-save-error"));
        }
    }

    fn update_lightbox(&mut self, message: lightbox::Message) -> Task<Message> {
        let (effect, task) = self.lightbox.handle_message(message);
        match effect {
            LightboxEffect::None => {}
            LightboxEffect::LockScroll => {
                self.scroll_locked = true;
                self.menu_open = false;
            }
            LightboxEffect::UnlockScroll => self.scroll_locked = false,
        }
        task.map(Message::Lightbox)
    }

    fn update_contact(&mut self, message: contact::Message) -> Task<Message> {
        let (event, task) = self.contact.update(message, &self.relay, Instant::now());
        match event {
            ContactEvent::None => {}
            ContactEvent::Hover(hovering) => self.cursor.set_hovering(hovering),
            ContactEvent::Incomplete => {
                self.notifications
                    .push(Notification::warning(CONTACT_INCOMPLETE_KEY));
            }
            ContactEvent::Sent { name } => {
                self.notifications.clear_key(CONTACT_FAILED_KEY);
                self.notifications
                    .push(Notification::success(CONTACT_SENT_KEY).with_arg("name", name));
            }
            ContactEvent::Failed => {
                self.notifications.push(Notification::error(CONTACT_FAILED_KEY));
            }
        }
        task.map(Message::Contact)
    }
}

fn schedule_typewriter(delay: Duration) -> Task<Message> {
    Task::perform(
        async move { tokio::time::sleep(delay).await },
        |()| Message::TypewriterTick,
    )
}
