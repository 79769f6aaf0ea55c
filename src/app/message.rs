// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::lightbox;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::page::{contact, gallery, hero};
use iced::widget::scrollable::Viewport;
use iced::{Point, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Hero(hero::Message),
    Gallery(gallery::Message),
    Lightbox(lightbox::Message),
    Contact(contact::Message),
    Notification(notifications::NotificationMessage),
    /// The page scrollable moved.
    PageScrolled(Viewport),
    WindowResized(Size),
    CursorMoved(Point),
    CursorLeft,
    /// Animation frame for the cursor, reveals and skill bars.
    Frame(Instant),
    /// One step of the stat counters.
    StatsTick,
    /// The typewriter's current delay elapsed.
    TypewriterTick,
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override (e.g. `fr`).
    pub lang: Option<String>,
    /// Portfolio content file replacing the embedded sample.
    pub content: Option<String>,
    /// Directory holding `settings.toml`.
    pub config_dir: Option<String>,
}
