// SPDX-License-Identifier: MPL-2.0
//! Custom pointer: a ring and a dot that chase the system cursor, plus a
//! fading trail.
//!
//! [`Cursor`] holds the positions and is advanced once per frame; the
//! [`CursorLayer`] canvas draws a snapshot of it over the whole window.

use crate::config::{
    CURSOR_DOT_SMOOTHING, CURSOR_RING_SMOOTHING, CURSOR_TRAIL_LIFETIME_MS,
    CURSOR_TRAIL_THROTTLE_MS,
};
use crate::ui::design_tokens::{border, sizing};
use crate::ui::theming::ColorScheme;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::widget::mouse_area;
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use std::time::{Duration, Instant};

/// Distance under which a follower counts as having caught up.
const SETTLE_DISTANCE: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
struct TrailParticle {
    position: Point,
    born: Instant,
}

/// Ring, dot and trail state.
#[derive(Debug, Clone)]
pub struct Cursor {
    enabled: bool,
    target: Option<Point>,
    ring: Point,
    dot: Point,
    hovering: bool,
    trail: Vec<TrailParticle>,
    last_particle: Option<Instant>,
}

impl Cursor {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            target: None,
            ring: Point::ORIGIN,
            dot: Point::ORIGIN,
            hovering: false,
            trail: Vec::new(),
            last_particle: None,
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Records a new pointer position. The first position snaps both
    /// followers so they do not fly in from the corner.
    pub fn pointer_moved(&mut self, position: Point, now: Instant) {
        if !self.enabled {
            return;
        }

        if self.target.is_none() {
            self.ring = position;
            self.dot = position;
        }
        self.target = Some(position);

        let throttle = Duration::from_millis(CURSOR_TRAIL_THROTTLE_MS);
        let due = self
            .last_particle
            .is_none_or(|last| now.saturating_duration_since(last) >= throttle);
        if due {
            self.trail.push(TrailParticle {
                position,
                born: now,
            });
            self.last_particle = Some(now);
        }
    }

    /// The pointer left the window; the cursor is hidden until it returns.
    pub fn pointer_left(&mut self) {
        self.target = None;
        self.hovering = false;
    }

    /// Sets the hover state used over links, buttons and cards.
    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Advances the followers one frame and drops expired trail particles.
    pub fn frame(&mut self, now: Instant) {
        if let Some(target) = self.target {
            self.ring = approach(self.ring, target, CURSOR_RING_SMOOTHING);
            self.dot = approach(self.dot, target, CURSOR_DOT_SMOOTHING);
        }

        let lifetime = Duration::from_millis(CURSOR_TRAIL_LIFETIME_MS);
        self.trail
            .retain(|particle| now.saturating_duration_since(particle.born) < lifetime);
    }

    /// Whether another frame would change anything.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        if !self.enabled {
            return false;
        }
        let settled = self.target.is_none_or(|target| {
            distance(self.ring, target) < SETTLE_DISTANCE
                && distance(self.dot, target) < SETTLE_DISTANCE
        });
        !settled || !self.trail.is_empty()
    }

    #[must_use]
    pub fn ring(&self) -> Point {
        self.ring
    }

    #[must_use]
    pub fn dot(&self) -> Point {
        self.dot
    }

    #[must_use]
    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    /// Snapshot for drawing at `now`, or `None` while hidden.
    #[must_use]
    pub fn layer(&self, now: Instant) -> Option<CursorLayer> {
        if !self.enabled {
            return None;
        }
        self.target?;

        let lifetime = CURSOR_TRAIL_LIFETIME_MS as f32;
        let trail = self
            .trail
            .iter()
            .map(|particle| {
                let age = now.saturating_duration_since(particle.born).as_millis() as f32;
                (particle.position, (1.0 - age / lifetime).clamp(0.0, 1.0))
            })
            .collect();

        Some(CursorLayer {
            ring: self.ring,
            dot: self.dot,
            ring_diameter: if self.hovering {
                sizing::CURSOR_RING_HOVER
            } else {
                sizing::CURSOR_RING
            },
            hovering: self.hovering,
            trail,
        })
    }
}

/// Wraps an interactive element so entering and leaving it toggle the
/// ring's hover state.
pub fn hover_zone<'a, Message: Clone + 'a>(
    content: impl Into<Element<'a, Message>>,
    hover: fn(bool) -> Message,
) -> Element<'a, Message> {
    mouse_area(content)
        .on_enter(hover(true))
        .on_exit(hover(false))
        .into()
}

fn approach(from: Point, to: Point, factor: f32) -> Point {
    Point::new(
        from.x + (to.x - from.x) * factor,
        from.y + (to.y - from.y) * factor,
    )
}

fn distance(a: Point, b: Point) -> f32 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Canvas program drawing one cursor frame.
#[derive(Debug, Clone)]
pub struct CursorLayer {
    ring: Point,
    dot: Point,
    ring_diameter: f32,
    hovering: bool,
    /// Particle positions with their remaining opacity.
    trail: Vec<(Point, f32)>,
}

impl CursorLayer {
    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for CursorLayer {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let colors = ColorScheme::for_theme(theme);
        let mut frame = Frame::new(renderer, bounds.size());

        for (position, alpha) in &self.trail {
            frame.fill(
                &Path::circle(*position, sizing::CURSOR_TRAIL / 2.0 * alpha.max(0.2)),
                Color {
                    a: alpha * 0.5,
                    ..colors.accent
                },
            );
        }

        let ring = Path::circle(self.ring, self.ring_diameter / 2.0);
        if self.hovering {
            frame.fill(
                &ring,
                Color {
                    a: 0.15,
                    ..colors.brand_primary
                },
            );
        }
        frame.stroke(
            &ring,
            Stroke::default()
                .with_width(border::WIDTH_MD)
                .with_color(colors.brand_primary),
        );
        frame.fill(
            &Path::circle(self.dot, sizing::CURSOR_DOT / 2.0),
            colors.accent,
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn first_move_snaps_followers() {
        let mut cursor = Cursor::new(true);
        cursor.pointer_moved(Point::new(40.0, 60.0), Instant::now());

        assert_eq!(cursor.ring(), Point::new(40.0, 60.0));
        assert_eq!(cursor.dot(), Point::new(40.0, 60.0));
    }

    #[test]
    fn followers_close_the_gap_at_their_own_rate() {
        let now = Instant::now();
        let mut cursor = Cursor::new(true);
        cursor.pointer_moved(Point::ORIGIN, now);
        cursor.pointer_moved(Point::new(100.0, 0.0), now + ms(40));

        cursor.frame(now + ms(40));

        assert!((cursor.ring().x - 15.0).abs() < 1e-4);
        assert!((cursor.dot().x - 30.0).abs() < 1e-4);
    }

    #[test]
    fn trail_is_throttled_and_expires() {
        let now = Instant::now();
        let mut cursor = Cursor::new(true);

        cursor.pointer_moved(Point::new(1.0, 1.0), now);
        cursor.pointer_moved(Point::new(2.0, 2.0), now + ms(10));
        assert_eq!(cursor.trail_len(), 1);

        cursor.pointer_moved(Point::new(3.0, 3.0), now + ms(30));
        assert_eq!(cursor.trail_len(), 2);

        cursor.frame(now + ms(610));
        assert_eq!(cursor.trail_len(), 1);
        cursor.frame(now + ms(700));
        assert_eq!(cursor.trail_len(), 0);
    }

    #[test]
    fn disabled_cursor_ignores_input() {
        let mut cursor = Cursor::new(false);
        cursor.pointer_moved(Point::new(5.0, 5.0), Instant::now());

        assert_eq!(cursor.trail_len(), 0);
        assert!(!cursor.is_animating());
        assert!(cursor.layer(Instant::now()).is_none());
    }

    #[test]
    fn hover_enlarges_ring() {
        let now = Instant::now();
        let mut cursor = Cursor::new(true);
        cursor.pointer_moved(Point::new(5.0, 5.0), now);

        let idle = cursor.layer(now).map(|layer| layer.ring_diameter);
        cursor.set_hovering(true);
        let hover = cursor.layer(now).map(|layer| layer.ring_diameter);

        assert_eq!(idle, Some(sizing::CURSOR_RING));
        assert_eq!(hover, Some(sizing::CURSOR_RING_HOVER));
    }

    #[test]
    fn leaving_hides_and_clears_hover() {
        let now = Instant::now();
        let mut cursor = Cursor::new(true);
        cursor.pointer_moved(Point::new(5.0, 5.0), now);
        cursor.set_hovering(true);

        cursor.pointer_left();

        assert!(!cursor.is_hovering());
        assert!(cursor.layer(now).is_none());
    }
}
