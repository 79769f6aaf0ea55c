// SPDX-License-Identifier: MPL-2.0
//! Navigation bar pinned above the page.
//!
//! Wide windows show one link per section; below
//! [`NAVBAR_COLLAPSE_WIDTH`] the links move into a dropdown behind a
//! hamburger button. Choosing a link closes the dropdown and asks the
//! application to scroll to that section.

use crate::config::{NAVBAR_COLLAPSE_WIDTH, NAVBAR_SCROLLED_THRESHOLD};
use crate::i18n::fluent::I18n;
use crate::ui::cursor::hover_zone;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::sections::SectionId;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub brand: &'a str,
    pub active: SectionId,
    /// Current page scroll offset.
    pub scroll_offset: f32,
    pub window_width: f32,
    pub menu_open: bool,
    pub is_dark: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    Navigate(SectionId),
    ToggleTheme,
    Hover(bool),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    ScrollTo(SectionId),
    ToggleTheme,
    Hover(bool),
}

/// Whether the navbar draws its scrolled (opaque, shadowed) style.
#[must_use]
pub fn is_scrolled(scroll_offset: f32) -> bool {
    scroll_offset > NAVBAR_SCROLLED_THRESHOLD
}

/// Whether links collapse into the hamburger menu.
#[must_use]
pub fn is_collapsed(window_width: f32) -> bool {
    window_width < NAVBAR_COLLAPSE_WIDTH
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::Navigate(section) => {
            *menu_open = false;
            Event::ScrollTo(section)
        }
        Message::ToggleTheme => Event::ToggleTheme,
        Message::Hover(hovering) => Event::Hover(hovering),
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let collapsed = is_collapsed(ctx.window_width);

    let mut bar = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            Text::new(ctx.brand)
                .size(typography::TITLE_SM)
                .style(styles::text::brand),
        )
        .push(Space::new().width(Length::Fill));

    if collapsed {
        bar = bar.push(hover_zone(
            button(Text::new("☰").size(typography::TITLE_SM))
                .on_press(Message::ToggleMenu)
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::ghost),
            Message::Hover,
        ));
    } else {
        bar = SectionId::ALL
            .into_iter()
            .fold(bar, |bar, section| bar.push(link(&ctx, section)));
    }

    let theme_label = if ctx.is_dark {
        ctx.i18n.tr("navbar-theme-light")
    } else {
        ctx.i18n.tr("navbar-theme-dark")
    };
    bar = bar.push(hover_zone(
        button(Text::new(theme_label).size(typography::BODY_SM))
            .on_press(Message::ToggleTheme)
            .padding([spacing::XXS, spacing::XS])
            .style(styles::button::ghost),
        Message::Hover,
    ));

    let top_bar = Container::new(
        Container::new(bar)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
    .padding([0.0, spacing::LG])
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::navbar(is_scrolled(ctx.scroll_offset)));

    let mut content = Column::new().width(Length::Fill).push(top_bar);

    if collapsed && ctx.menu_open {
        let menu = SectionId::ALL
            .into_iter()
            .fold(Column::new().spacing(spacing::XXS), |column, section| {
                column.push(link(&ctx, section))
            });
        content = content.push(
            Container::new(menu)
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::container::panel),
        );
    }

    content.into()
}

fn link<'a>(ctx: &ViewContext<'a>, section: SectionId) -> Element<'a, Message> {
    hover_zone(
        button(Text::new(ctx.i18n.tr(section.label_key())).size(typography::BODY))
            .on_press(Message::Navigate(section))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::button::nav_link(section == ctx.active)),
        Message::Hover,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_menu_flips_state() {
        let mut menu_open = false;
        assert_eq!(update(Message::ToggleMenu, &mut menu_open), Event::None);
        assert!(menu_open);
        update(Message::ToggleMenu, &mut menu_open);
        assert!(!menu_open);
    }

    #[test]
    fn navigating_closes_menu() {
        let mut menu_open = true;
        let event = update(Message::Navigate(SectionId::Portfolio), &mut menu_open);

        assert_eq!(event, Event::ScrollTo(SectionId::Portfolio));
        assert!(!menu_open);
    }

    #[test]
    fn scrolled_style_starts_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(NAVBAR_SCROLLED_THRESHOLD));
        assert!(is_scrolled(NAVBAR_SCROLLED_THRESHOLD + 1.0));
    }

    #[test]
    fn links_collapse_on_narrow_windows() {
        assert!(is_collapsed(NAVBAR_COLLAPSE_WIDTH - 1.0));
        assert!(!is_collapsed(NAVBAR_COLLAPSE_WIDTH));
    }

    #[test]
    fn hover_is_forwarded() {
        let mut menu_open = false;
        assert_eq!(update(Message::Hover(true), &mut menu_open), Event::Hover(true));
    }
}
