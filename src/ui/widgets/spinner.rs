// SPDX-License-Identifier: MPL-2.0
//! Small rotating arc shown on the submit button while a message is sent.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

const ARC_SEGMENTS: u16 = 24;
const STROKE_WIDTH: f32 = 2.0;

/// Spinner drawn at a fixed rotation; the caller advances the angle each
/// frame.
#[derive(Debug, Clone, Copy)]
pub struct Spinner {
    rotation: f32,
    color: Color,
}

impl Spinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self { rotation, color }
    }

    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fixed(sizing::SPINNER))
            .height(Length::Fixed(sizing::SPINNER))
            .into()
    }
}

/// Points along a half circle starting at `rotation` (measured from the top).
fn arc_points(center: Point, radius: f32, rotation: f32) -> Vec<Point> {
    let start = rotation - PI / 2.0;

    (0..=ARC_SEGMENTS)
        .map(|i| {
            let angle = start + PI * f32::from(i) / f32::from(ARC_SEGMENTS);
            Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect()
}

impl<Message> canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default().with_width(STROKE_WIDTH).with_color(Color {
                a: 0.3,
                ..self.color
            }),
        );

        let points = arc_points(center, radius, self.rotation);
        let arc = Path::new(|builder| {
            if let Some((first, rest)) = points.split_first() {
                builder.move_to(*first);
                for point in rest {
                    builder.line_to(*point);
                }
            }
        });
        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arc_starts_at_the_top_without_rotation() {
        let points = arc_points(Point::new(10.0, 10.0), 5.0, 0.0);
        let first = points[0];
        assert!((first.x - 10.0).abs() < 1e-4);
        assert!((first.y - 5.0).abs() < 1e-4);
    }

    #[test]
    fn arc_spans_half_a_circle() {
        let points = arc_points(Point::new(0.0, 0.0), 1.0, 0.0);
        let last = points[points.len() - 1];
        assert_eq!(points.len(), usize::from(ARC_SEGMENTS) + 1);
        assert!((last.y - 1.0).abs() < 1e-4);
    }
}
