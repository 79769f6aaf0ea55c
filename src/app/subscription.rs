// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are routed to the lightbox (keyboard), the cursor follower
//! (pointer) and the layout (window size). Timers only run while something
//! is animating.

use super::Message;
use crate::config::{FRAME_INTERVAL_MS, STATS_TICK_MS};
use crate::ui::lightbox;
use iced::{event, keyboard, mouse, time, window, Event, Subscription};
use std::time::Duration;

/// Interval of the toast auto-dismiss check.
const TOAST_TICK_MS: u64 = 100;

/// What currently needs a timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Activity {
    /// The cursor, a reveal, the skill bars or the send spinner is moving.
    pub frames: bool,
    /// The stat counters are counting.
    pub counting: bool,
    /// Toasts are on screen.
    pub toasts: bool,
}

/// Routes keyboard, pointer and window events.
///
/// Keys reach the lightbox only when no widget (such as a form field)
/// captured them.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. })
            if matches!(status, event::Status::Ignored) =>
        {
            Some(Message::Lightbox(lightbox::Message::KeyPressed(key)))
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(position))
        }
        Event::Mouse(mouse::Event::CursorLeft) => Some(Message::CursorLeft),
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Creates the timers needed by `activity`.
pub fn create_tick_subscription(activity: Activity) -> Subscription<Message> {
    let mut subscriptions = Vec::new();

    if activity.frames {
        subscriptions.push(
            time::every(Duration::from_millis(FRAME_INTERVAL_MS)).map(Message::Frame),
        );
    }
    if activity.counting {
        subscriptions
            .push(time::every(Duration::from_millis(STATS_TICK_MS)).map(|_| Message::StatsTick));
    }
    if activity.toasts {
        subscriptions.push(time::every(Duration::from_millis(TOAST_TICK_MS)).map(Message::Tick));
    }

    Subscription::batch(subscriptions)
}
