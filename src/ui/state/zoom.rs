// SPDX-License-Identifier: MPL-2.0
//! Zoom origin for the lightbox image.
//!
//! While zoomed, the image is magnified around a point expressed as a
//! percentage of its displayed size. Moving the pointer moves that point,
//! which pans the magnified image.

use iced::widget::scrollable::RelativeOffset;
use iced::{Point, Size};

/// Lowest percentage on either axis.
pub const MIN_ORIGIN_PERCENT: f32 = 0.0;

/// Highest percentage on either axis.
pub const MAX_ORIGIN_PERCENT: f32 = 100.0;

/// Percentage used for a centered origin.
pub const CENTER_PERCENT: f32 = 50.0;

/// A point inside the image as percentages of its width and height,
/// guaranteed to lie within `[0, 100]` on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomOrigin {
    x: f32,
    y: f32,
}

impl ZoomOrigin {
    /// Creates an origin, clamping both axes into range.
    ///
    /// NaN components fall back to the center.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: clamp_percent(x),
            y: clamp_percent(y),
        }
    }

    /// The image center (50%, 50%).
    #[must_use]
    pub fn center() -> Self {
        Self {
            x: CENTER_PERCENT,
            y: CENTER_PERCENT,
        }
    }

    /// Converts a pointer position, relative to the image's top-left corner,
    /// into an origin. A degenerate size yields the center.
    #[must_use]
    pub fn from_pointer(position: Point, displayed: Size) -> Self {
        if displayed.width <= 0.0 || displayed.height <= 0.0 {
            return Self::center();
        }

        Self::new(
            position.x / displayed.width * 100.0,
            position.y / displayed.height * 100.0,
        )
    }

    #[must_use]
    pub fn x(self) -> f32 {
        self.x
    }

    #[must_use]
    pub fn y(self) -> f32 {
        self.y
    }

    /// The scroll offset that keeps this origin under the pointer once the
    /// image is magnified inside a scrollable.
    #[must_use]
    pub fn as_relative_offset(self) -> RelativeOffset {
        RelativeOffset {
            x: self.x / 100.0,
            y: self.y / 100.0,
        }
    }
}

impl Default for ZoomOrigin {
    fn default() -> Self {
        Self::center()
    }
}

fn clamp_percent(value: f32) -> f32 {
    if value.is_nan() {
        CENTER_PERCENT
    } else {
        value.clamp(MIN_ORIGIN_PERCENT, MAX_ORIGIN_PERCENT)
    }
}
