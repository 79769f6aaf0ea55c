// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a stack of layers: the scrolling page, the navbar pinned
//! above it, the lightbox overlay, toasts, and the cursor follower on top.

use super::{App, Message, PAGE_SCROLLABLE_ID};
use crate::ui::lightbox;
use crate::ui::navbar;
use crate::ui::notifications::Toast;
use crate::ui::page::{about, contact, gallery, hero, skills, timeline};
use crate::ui::state::SectionId;
use crate::ui::styles;
use crate::ui::widgets::scroll_lock;
use iced::widget::{scrollable, Column, Container, Id, Scrollable, Stack};
use iced::{Element, Length};

/// Renders the whole window.
pub fn view(app: &App) -> Element<'_, Message> {
    let navbar = navbar::view(navbar::ViewContext {
        i18n: &app.i18n,
        brand: &app.portfolio.owner.name,
        active: app.sections.active(),
        scroll_offset: app.viewport.offset,
        window_width: app.window.width,
        menu_open: app.menu_open,
        is_dark: app.theme.is_dark(),
    })
    .map(Message::Navbar);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page(app))
        .push(navbar);

    let overlay = lightbox::view::view(
        &app.lightbox,
        lightbox::view::ViewContext {
            i18n: &app.i18n,
            window: app.window,
        },
    );
    if let Some(overlay) = overlay {
        layers = layers.push(overlay.map(Message::Lightbox));
    }

    if app.notifications.has_notifications() {
        layers = layers
            .push(Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification));
    }

    if let Some(cursor) = app.cursor.layer(app.now) {
        layers = layers.push(cursor.into_element());
    }

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}

/// The scrolling column of sections, sized by the precomputed layout.
fn page(app: &App) -> Element<'_, Message> {
    let layout = &app.layout;
    let portfolio = &app.portfolio;
    let now = app.now;
    let height = |id| layout.section(id).height;
    let reveal = |id| app.sections.reveal_progress(id, now);
    let content_width = layout.content_width();

    let hero = hero::view(hero::ViewContext {
        i18n: &app.i18n,
        name: &portfolio.owner.name,
        typewriter: app.typewriter.as_ref(),
        height: height(SectionId::Home),
    })
    .map(Message::Hero);

    let about = about::view(about::ViewContext {
        i18n: &app.i18n,
        owner: &portfolio.owner,
        stats: &portfolio.stats,
        counters: &app.stats,
        height: height(SectionId::About),
        content_width,
        reveal: reveal(SectionId::About),
    });

    let skills = skills::view(skills::ViewContext {
        i18n: &app.i18n,
        skills: &portfolio.skills,
        bars: app.skill_bars,
        now,
        columns: layout.skill_columns(),
        height: height(SectionId::Skills),
        content_width,
        reveal: reveal(SectionId::Skills),
    });

    let gallery = gallery::view(gallery::ViewContext {
        i18n: &app.i18n,
        gallery: &app.gallery,
        lightbox: &app.lightbox,
        columns: layout.project_columns(),
        card: layout.card_size(),
        height: height(SectionId::Portfolio),
        content_width,
        reveal: reveal(SectionId::Portfolio),
    })
    .map(Message::Gallery);

    let timeline = timeline::view(timeline::ViewContext {
        i18n: &app.i18n,
        entries: &portfolio.timeline,
        height: height(SectionId::Experience),
        content_width,
        reveal: reveal(SectionId::Experience),
    });

    let contact = contact::view(contact::ViewContext {
        i18n: &app.i18n,
        form: &app.contact,
        owner: &portfolio.owner,
        now,
        height: height(SectionId::Contact),
        content_width,
        reveal: reveal(SectionId::Contact),
    })
    .map(Message::Contact);

    let column = Column::new()
        .width(Length::Fill)
        .push(hero)
        .push(about)
        .push(skills)
        .push(gallery)
        .push(timeline)
        .push(contact);

    let scrollable = Scrollable::new(column)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new().width(6.0).scroller_width(6.0),
        ))
        .on_scroll(Message::PageScrolled)
        .width(Length::Fill)
        .height(Length::Fill);

    scroll_lock(scrollable, app.scroll_locked).into()
}
