// SPDX-License-Identifier: MPL-2.0
//! Lightbox component encapsulating state and update logic.

use super::state::{Lightbox, SwapTicket};
use crate::config::LIGHTBOX_SWAP_DELAY_MS;
use crate::content::GalleryItem;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::state::zoom::ZoomOrigin;
use iced::keyboard::{self, key::Named};
use iced::widget::image::Handle;
use iced::widget::{operation, Id};
use iced::{Point, Size, Task};
use std::time::Duration;

/// Identifier of the scrollable that pans the zoomed image.
pub const IMAGE_SCROLLABLE_ID: &str = "lightbox-image";

/// Messages emitted by the lightbox overlay.
#[derive(Debug, Clone)]
pub enum Message {
    Open(usize),
    Close,
    Next,
    Previous,
    /// The staged swap delay elapsed.
    Reveal(SwapTicket),
    /// The pointer moved over the image frame (frame-relative position).
    PointerMoved(Point),
    /// The image frame was clicked.
    ImagePressed,
    /// A key was pressed while no widget captured it.
    KeyPressed(keyboard::Key),
}

/// Side effects the application should perform after a lightbox message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The overlay opened; background scrolling must stop.
    LockScroll,
    /// The overlay closed; background scrolling may resume.
    UnlockScroll,
}

/// Lightbox plus the pointer and frame geometry needed to turn clicks into
/// zoom origins.
#[derive(Debug, Clone)]
pub struct State {
    lightbox: Lightbox,
    /// One handle per project; `None` when the image file is missing.
    images: Vec<Option<Handle>>,
    pointer: Point,
    frame: Size,
}

impl State {
    #[must_use]
    pub fn new(items: Vec<GalleryItem>) -> Self {
        let images = items
            .iter()
            .map(|item| {
                if item.image.is_file() {
                    Some(Handle::from_path(&item.image))
                } else {
                    log::warn!("Project image not found: {}", item.image.display());
                    None
                }
            })
            .collect();

        Self {
            lightbox: Lightbox::new(items),
            images,
            pointer: Point::ORIGIN,
            frame: image_frame_size(Size::new(1280.0, 800.0)),
        }
    }

    /// Image of project `index`, if its file exists.
    #[must_use]
    pub fn image(&self, index: usize) -> Option<&Handle> {
        self.images.get(index).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.lightbox.is_open()
    }

    /// Size of the image frame inside the panel.
    #[must_use]
    pub fn frame(&self) -> Size {
        self.frame
    }

    /// Recomputes the image frame after a window resize.
    pub fn set_window_size(&mut self, window: Size) {
        self.frame = image_frame_size(window);
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Open(index) => {
                let was_open = self.lightbox.is_open();
                let Some(ticket) = self.lightbox.open(index) else {
                    return (Effect::None, Task::none());
                };
                let effect = if was_open {
                    Effect::None
                } else {
                    Effect::LockScroll
                };
                (effect, schedule_reveal(ticket))
            }
            Message::Close => {
                if self.lightbox.close() {
                    (Effect::UnlockScroll, Task::none())
                } else {
                    (Effect::None, Task::none())
                }
            }
            Message::Next => (
                Effect::None,
                self.lightbox.next().map_or_else(Task::none, schedule_reveal),
            ),
            Message::Previous => (
                Effect::None,
                self.lightbox.previous().map_or_else(Task::none, schedule_reveal),
            ),
            Message::Reveal(ticket) => {
                if !self.lightbox.reveal(ticket) {
                    log::debug!("Discarding stale lightbox reveal {ticket:?}");
                }
                (Effect::None, Task::none())
            }
            Message::PointerMoved(position) => {
                self.pointer = position;
                let origin = ZoomOrigin::from_pointer(position, self.frame);
                if self.lightbox.track_zoom_pointer(origin) {
                    (Effect::None, snap_to_origin(origin))
                } else {
                    (Effect::None, Task::none())
                }
            }
            Message::ImagePressed => {
                let origin = ZoomOrigin::from_pointer(self.pointer, self.frame);
                match self.lightbox.toggle_zoom(origin) {
                    Some(true) => (Effect::None, snap_to_origin(origin)),
                    _ => (Effect::None, Task::none()),
                }
            }
            Message::KeyPressed(key) => match key_action(&key) {
                Some(action) if self.lightbox.is_open() => self.handle_message(action),
                _ => (Effect::None, Task::none()),
            },
        }
    }
}

/// Keys the lightbox responds to while open.
#[must_use]
pub fn key_action(key: &keyboard::Key) -> Option<Message> {
    match key {
        keyboard::Key::Named(Named::Escape) => Some(Message::Close),
        keyboard::Key::Named(Named::ArrowRight) => Some(Message::Next),
        keyboard::Key::Named(Named::ArrowLeft) => Some(Message::Previous),
        _ => None,
    }
}

/// Panel width and image frame height for a window size.
#[must_use]
pub fn image_frame_size(window: Size) -> Size {
    let panel_width = (window.width * 0.9).min(sizing::LIGHTBOX_MAX_WIDTH);
    let width = (panel_width - 2.0 * spacing::LG).max(1.0);
    let height = (window.height * 0.6).min(width * 0.625).max(1.0);
    Size::new(width, height)
}

fn schedule_reveal(ticket: SwapTicket) -> Task<Message> {
    Task::perform(
        async move {
            tokio::time::sleep(Duration::from_millis(LIGHTBOX_SWAP_DELAY_MS)).await;
            ticket
        },
        Message::Reveal,
    )
}

fn snap_to_origin(origin: ZoomOrigin) -> Task<Message> {
    operation::snap_to(Id::new(IMAGE_SCROLLABLE_ID), origin.as_relative_offset())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn state(count: usize) -> State {
        let items = (0..count)
            .map(|index| GalleryItem {
                image: PathBuf::from(format!("{index}.png")),
                title: format!("Project {index}"),
                description: String::new(),
                tags: Vec::new(),
            })
            .collect();
        State::new(items)
    }

    #[test]
    fn opening_locks_scroll_once() {
        let mut state = state(3);
        let (effect, _) = state.handle_message(Message::Open(0));
        assert_eq!(effect, Effect::LockScroll);

        let (effect, _) = state.handle_message(Message::Open(2));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.lightbox().current_index(), 2);
    }

    #[test]
    fn closing_unlocks_scroll_once() {
        let mut state = state(3);
        state.handle_message(Message::Open(1));

        let (effect, _) = state.handle_message(Message::Close);
        assert_eq!(effect, Effect::UnlockScroll);
        let (effect, _) = state.handle_message(Message::Close);
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn invalid_open_has_no_effect() {
        let mut state = state(2);
        let (effect, _) = state.handle_message(Message::Open(5));
        assert_eq!(effect, Effect::None);
        assert!(!state.is_open());
    }

    #[test]
    fn keys_are_ignored_while_closed() {
        let mut state = state(3);
        state.handle_message(Message::KeyPressed(keyboard::Key::Named(Named::ArrowRight)));
        assert_eq!(state.lightbox().current_index(), 0);
    }

    #[test]
    fn keys_navigate_and_close_while_open() {
        let mut state = state(3);
        state.handle_message(Message::Open(0));

        state.handle_message(Message::KeyPressed(keyboard::Key::Named(Named::ArrowRight)));
        assert_eq!(state.lightbox().current_index(), 1);
        state.handle_message(Message::KeyPressed(keyboard::Key::Named(Named::ArrowLeft)));
        state.handle_message(Message::KeyPressed(keyboard::Key::Named(Named::ArrowLeft)));
        assert_eq!(state.lightbox().current_index(), 2);

        let (effect, _) =
            state.handle_message(Message::KeyPressed(keyboard::Key::Named(Named::Escape)));
        assert_eq!(effect, Effect::UnlockScroll);
        assert!(!state.is_open());
    }

    #[test]
    fn click_zooms_at_last_pointer_position() {
        let mut state = state(1);
        state.set_window_size(Size::new(1000.0, 1000.0));
        state.handle_message(Message::Open(0));

        let frame = state.frame();
        state.handle_message(Message::PointerMoved(Point::new(
            frame.width / 4.0,
            frame.height,
        )));
        state.handle_message(Message::ImagePressed);

        assert!(state.lightbox().is_zoomed());
        let origin = state.lightbox().zoom_origin();
        assert!((origin.x() - 25.0).abs() < 1e-3);
        assert!((origin.y() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn pointer_moves_pan_only_when_zoomed() {
        let mut state = state(1);
        state.handle_message(Message::Open(0));
        state.handle_message(Message::PointerMoved(Point::ORIGIN));
        assert_eq!(state.lightbox().zoom_origin(), ZoomOrigin::center());

        state.handle_message(Message::ImagePressed);
        let frame = state.frame();
        state.handle_message(Message::PointerMoved(Point::new(frame.width, 0.0)));
        assert_eq!(state.lightbox().zoom_origin(), ZoomOrigin::new(100.0, 0.0));
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        assert!(key_action(&keyboard::Key::Character("a".into())).is_none());
        assert!(matches!(
            key_action(&keyboard::Key::Named(Named::Escape)),
            Some(Message::Close)
        ));
    }

    #[test]
    fn missing_images_have_no_handle() {
        let state = state(2);
        assert!(state.image(0).is_none());
        assert!(state.image(7).is_none());
    }

    #[test]
    fn frame_fits_small_and_large_windows() {
        let small = image_frame_size(Size::new(400.0, 300.0));
        assert!(small.width < 400.0 && small.height <= 180.0);

        let large = image_frame_size(Size::new(4000.0, 3000.0));
        assert!(large.width <= sizing::LIGHTBOX_MAX_WIDTH);
    }
}
