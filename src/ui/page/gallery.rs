// SPDX-License-Identifier: MPL-2.0
//! Portfolio section: a grid of project cards that tilt under the pointer
//! and open the lightbox when clicked.

use super::SectionFrame;
use crate::config::CARD_TILT_DIVISOR;
use crate::content::GalleryItem;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::layout::GRID_GAP;
use crate::ui::lightbox;
use crate::ui::styles;
use iced::widget::{image, mouse_area, Column, Container, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length, Point, Size, Vector};

/// Shadow offset, in pixels, per degree of tilt.
const LIFT_PER_DEGREE: f32 = 0.8;

/// Tags shown on a card; the lightbox lists all of them.
const CARD_TAG_LIMIT: usize = 3;

/// Card rotation in degrees derived from the pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f32,
    pub rotate_y: f32,
}

impl Tilt {
    /// `rotate_x = (y - h/2) / 20`, `rotate_y = (w/2 - x) / 20`.
    #[must_use]
    pub fn from_pointer(position: Point, card: Size) -> Self {
        Self {
            rotate_x: (position.y - card.height / 2.0) / CARD_TILT_DIVISOR,
            rotate_y: (card.width / 2.0 - position.x) / CARD_TILT_DIVISOR,
        }
    }

    /// Shadow offset standing in for the 3D rotation: the shadow falls away
    /// from the edge that tilts toward the viewer.
    #[must_use]
    pub fn lift(self) -> Vector {
        Vector::new(
            -self.rotate_y * LIFT_PER_DEGREE,
            self.rotate_x * LIFT_PER_DEGREE,
        )
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    CardEntered,
    CardMoved(usize, Point),
    CardLeft(usize),
    CardPressed(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    None,
    OpenLightbox(usize),
    Hover(bool),
}

/// Which card is tilted, and by how much.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    tilted: Option<(usize, Tilt)>,
}

impl Gallery {
    pub fn update(&mut self, message: Message, card: Size) -> Event {
        match message {
            Message::CardEntered => Event::Hover(true),
            Message::CardMoved(index, position) => {
                self.tilted = Some((index, Tilt::from_pointer(position, card)));
                Event::None
            }
            Message::CardLeft(index) => {
                if self.tilt(index).is_some() {
                    self.tilted = None;
                }
                Event::Hover(false)
            }
            Message::CardPressed(index) => Event::OpenLightbox(index),
        }
    }

    #[must_use]
    pub fn tilt(&self, index: usize) -> Option<Tilt> {
        self.tilted
            .filter(|(tilted, _)| *tilted == index)
            .map(|(_, tilt)| tilt)
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
    pub lightbox: &'a lightbox::State,
    pub columns: usize,
    pub card: Size,
    pub height: f32,
    pub content_width: f32,
    pub reveal: f32,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let items = ctx.lightbox.lightbox().items();
    let columns = ctx.columns.max(1);

    let grid = items
        .chunks(columns)
        .enumerate()
        .fold(Column::new().spacing(GRID_GAP), |grid, (row_index, chunk)| {
            let row = chunk.iter().enumerate().fold(
                Row::new().spacing(GRID_GAP),
                |row, (column_index, item)| {
                    let index = row_index * columns + column_index;
                    row.push(card(&ctx, index, item))
                },
            );
            grid.push(row)
        });

    SectionFrame {
        title: ctx.i18n.tr("portfolio-title"),
        subtitle: ctx.i18n.tr("portfolio-subtitle"),
        body: grid.into(),
        height: ctx.height,
        content_width: ctx.content_width,
        alternate: true,
        reveal: ctx.reveal,
    }
    .view()
}

fn card<'a>(ctx: &ViewContext<'a>, index: usize, item: &'a GalleryItem) -> Element<'a, Message> {
    let lift = ctx.gallery.tilt(index).map_or(Vector::ZERO, Tilt::lift);
    let image_width = ctx.card.width - 2.0 * spacing::SM;

    let picture: Element<'a, Message> = match ctx.lightbox.image(index) {
        Some(handle) => image::Image::new(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fixed(image_width))
            .height(Length::Fixed(sizing::PROJECT_IMAGE_HEIGHT))
            .into(),
        None => Container::new(Text::new("◇").size(typography::TITLE_LG))
            .width(Length::Fixed(image_width))
            .height(Length::Fixed(sizing::PROJECT_IMAGE_HEIGHT))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::image_placeholder)
            .into(),
    };

    let tags = item.tags.iter().take(CARD_TAG_LIMIT).fold(
        Row::new().spacing(spacing::XXS),
        |row, tag| {
            row.push(
                Container::new(Text::new(tag.as_str()).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::container::tag),
            )
        },
    );

    let body = Column::new()
        .spacing(spacing::SM)
        .push(picture)
        .push(Text::new(item.title.as_str()).size(typography::TITLE_SM))
        .push(Space::new().height(Length::Fill))
        .push(tags);

    let framed = Container::new(body)
        .width(Length::Fixed(ctx.card.width))
        .height(Length::Fixed(ctx.card.height))
        .padding(spacing::SM)
        .style(styles::container::card(lift));

    mouse_area(framed)
        .on_enter(Message::CardEntered)
        .on_move(move |position| Message::CardMoved(index, position))
        .on_exit(Message::CardLeft(index))
        .on_press(Message::CardPressed(index))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Size = Size {
        width: 300.0,
        height: 340.0,
    };

    #[test]
    fn center_has_no_tilt() {
        let tilt = Tilt::from_pointer(Point::new(150.0, 170.0), CARD);
        assert_eq!(tilt, Tilt::default());
        assert_eq!(tilt.lift(), Vector::ZERO);
    }

    #[test]
    fn corners_follow_the_tilt_formula() {
        let tilt = Tilt::from_pointer(Point::new(0.0, 0.0), CARD);
        assert_eq!(tilt.rotate_x, -170.0 / CARD_TILT_DIVISOR);
        assert_eq!(tilt.rotate_y, 150.0 / CARD_TILT_DIVISOR);
    }

    #[test]
    fn leaving_resets_the_card() {
        let mut gallery = Gallery::default();
        gallery.update(Message::CardMoved(2, Point::new(10.0, 10.0)), CARD);
        assert!(gallery.tilt(2).is_some());
        assert!(gallery.tilt(1).is_none());

        let event = gallery.update(Message::CardLeft(2), CARD);
        assert_eq!(event, Event::Hover(false));
        assert!(gallery.tilt(2).is_none());
    }

    #[test]
    fn leaving_a_stale_card_keeps_the_current_tilt() {
        let mut gallery = Gallery::default();
        gallery.update(Message::CardMoved(1, Point::new(10.0, 10.0)), CARD);
        gallery.update(Message::CardLeft(0), CARD);
        assert!(gallery.tilt(1).is_some());
    }

    #[test]
    fn pressing_opens_the_lightbox() {
        let mut gallery = Gallery::default();
        assert_eq!(
            gallery.update(Message::CardPressed(4), CARD),
            Event::OpenLightbox(4)
        );
    }
}
