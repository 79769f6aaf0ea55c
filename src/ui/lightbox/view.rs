// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay rendering.
//!
//! The overlay is a [`Stack`] of a scrim that closes on press and the
//! centered panel. The panel swallows presses so only clicks outside it
//! reach the scrim.

use super::component::{Message, State, IMAGE_SCROLLABLE_ID};
use super::state::PanelPhase;
use crate::config::{LIGHTBOX_HIDDEN_SCALE, LIGHTBOX_ZOOM_FACTOR};
use crate::content::GalleryItem;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::image::{self, Handle};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{
    button, mouse_area, opaque, Column, Container, Id, Row, Scrollable, Space, Stack,
    Text,
};
use iced::{alignment, mouse, ContentFit, Element, Length, Size, Theme};

/// Contextual data needed to render the lightbox.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub window: Size,
}

/// Renders the overlay, or `None` while the lightbox is closed.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    let lightbox = state.lightbox();
    if !lightbox.is_open() {
        return None;
    }

    let scrim = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::scrim),
    )
    .on_press(Message::Close)
    .interaction(mouse::Interaction::Idle);

    let frame = state.frame();
    let panel_width = frame.width + 2.0 * spacing::LG;

    let panel: Element<'a, Message> = match (lightbox.phase(), lightbox.shown_item()) {
        (PanelPhase::Visible, Some((index, item))) => {
            let body = panel_body(state, &ctx, index, item);
            Container::new(body)
                .width(Length::Fixed(panel_width))
                .padding(spacing::LG)
                .style(styles::container::lightbox_panel(opacity::OPAQUE))
                .into()
        }
        _ => Container::new(Space::new())
            .width(Length::Fixed(panel_width * LIGHTBOX_HIDDEN_SCALE))
            .height(Length::Fixed(frame.height * LIGHTBOX_HIDDEN_SCALE))
            .style(styles::container::lightbox_panel(opacity::TRANSPARENT))
            .into(),
    };

    let centered = Container::new(opaque(panel))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::MD);

    Some(
        Stack::new()
            .push(scrim)
            .push(centered)
            .width(Length::Fixed(ctx.window.width))
            .height(Length::Fixed(ctx.window.height))
            .into(),
    )
}

fn panel_body<'a>(
    state: &'a State,
    ctx: &ViewContext<'a>,
    index: usize,
    item: &'a GalleryItem,
) -> Element<'a, Message> {
    let total = state.lightbox().len().to_string();
    let position = (index + 1).to_string();
    let counter = ctx.i18n.tr_with_args(
        "lightbox-counter",
        &[("current", position.as_str()), ("total", total.as_str())],
    );

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .spacing(spacing::SM)
        .push(
            Text::new(item.title.as_str())
                .size(typography::TITLE_MD)
                .width(Length::Fill),
        )
        .push(
            Text::new(counter)
                .size(typography::CAPTION)
                .style(styles::text::faint),
        )
        .push(chrome_button("×", Message::Close));

    let image_area = Stack::new().push(image_frame(state, index)).push(
        Container::new(
            Row::new()
                .align_y(alignment::Vertical::Center)
                .push(chrome_button("‹", Message::Previous))
                .push(Space::new().width(Length::Fill))
                .push(chrome_button("›", Message::Next)),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::XS),
    );

    let tags = item.tags.iter().fold(
        Row::new().spacing(spacing::XS),
        |row, tag| {
            row.push(
                Container::new(Text::new(tag.as_str()).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::container::tag),
            )
        },
    );

    Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(image_area)
        .push(
            Text::new(item.description.as_str())
                .size(typography::BODY)
                .style(styles::text::muted),
        )
        .push(tags)
        .into()
}

/// The image inside a scrollable that is panned by snapping it to the
/// zoom origin. Unzoomed, the content is exactly the frame size so there is
/// nothing to scroll.
fn image_frame(state: &State, index: usize) -> Element<'_, Message> {
    let frame = state.frame();
    let zoomed = state.lightbox().is_zoomed();
    let factor = if zoomed { LIGHTBOX_ZOOM_FACTOR } else { 1.0 };
    let content_size = Size::new(frame.width * factor, frame.height * factor);

    let content: Element<'_, Message> = match state.image(index) {
        Some(handle) => image_element(handle.clone(), content_size),
        None => Container::new(Text::new("◇").size(typography::DISPLAY))
            .width(Length::Fixed(content_size.width))
            .height(Length::Fixed(content_size.height))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::image_placeholder)
            .into(),
    };

    let scrollable = Scrollable::new(content)
        .id(Id::new(IMAGE_SCROLLABLE_ID))
        .direction(Direction::Both {
            vertical: Scrollbar::hidden(),
            horizontal: Scrollbar::hidden(),
        })
        .width(Length::Fixed(frame.width))
        .height(Length::Fixed(frame.height));

    mouse_area(
        Container::new(scrollable)
            .width(Length::Fixed(frame.width))
            .height(Length::Fixed(frame.height))
            .style(styles::container::image_frame),
    )
    .on_move(Message::PointerMoved)
    .on_press(Message::ImagePressed)
    .into()
}

fn image_element<'a>(handle: Handle, size: Size) -> Element<'a, Message> {
    image::Image::new(handle)
        .content_fit(ContentFit::Contain)
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height))
        .into()
}

fn chrome_button(glyph: &str, message: Message) -> Element<'_, Message> {
    button(
        Text::new(glyph)
            .size(typography::TITLE_MD)
            .style(styles::text::overlay)
            .align_x(alignment::Horizontal::Center),
    )
    .on_press(message)
    .padding([spacing::XXS, spacing::SM])
    .style(|theme: &Theme, status| {
        let colors = ColorScheme::for_theme(theme);
        styles::button::overlay(
            colors.overlay_text,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_STRONG,
        )(theme, status)
    })
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::path::PathBuf;

    fn state() -> State {
        State::new(vec![GalleryItem {
            image: PathBuf::from("missing.png"),
            title: "Orbit".to_string(),
            description: "A dashboard".to_string(),
            tags: vec!["Rust".to_string()],
        }])
    }

    fn ctx(i18n: &I18n) -> ViewContext<'_> {
        ViewContext {
            i18n,
            window: Size::new(1280.0, 800.0),
        }
    }

    #[test]
    fn closed_lightbox_renders_nothing() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert!(view(&state(), ctx(&i18n)).is_none());
    }

    #[test]
    fn open_lightbox_renders_while_hidden() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let mut state = state();

        let _ = state.handle_message(Message::Open(0));

        assert_eq!(state.lightbox().phase(), PanelPhase::Hidden);
        assert!(view(&state, ctx(&i18n)).is_some());
    }
}
