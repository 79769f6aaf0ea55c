// SPDX-License-Identifier: MPL-2.0
//! Page geometry.
//!
//! Iced does not report where a widget ended up, so section positions are
//! computed up front from the window size and the amount of content. The
//! section views render at exactly these heights, which keeps the numbers
//! here and the pixels on screen in agreement.

use crate::config::NAVBAR_SCROLL_OFFSET;
use crate::content::Portfolio;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::state::sections::{Band, PageViewport, SectionId};
use iced::widget::scrollable::RelativeOffset;
use iced::Size;

/// Horizontal gap between grid cells (project cards, skill columns).
pub const GRID_GAP: f32 = spacing::LG;

/// Maximum number of project columns.
const MAX_PROJECT_COLUMNS: usize = 3;

/// Content width at which skills are laid out in two columns.
const SKILLS_TWO_COLUMN_WIDTH: f32 = 640.0;

/// How much of each kind of content the page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentCounts {
    pub stats: usize,
    pub skills: usize,
    pub projects: usize,
    pub timeline: usize,
}

impl From<&Portfolio> for ContentCounts {
    fn from(portfolio: &Portfolio) -> Self {
        Self {
            stats: portfolio.stats.len(),
            skills: portfolio.skills.len(),
            projects: portfolio.projects.len(),
            timeline: portfolio.timeline.len(),
        }
    }
}

/// Vertical layout of the page for one window size.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    sections: [(SectionId, Band); 6],
    stats: Band,
    skills: Band,
    content_width: f32,
    project_columns: usize,
    skill_columns: usize,
    total_height: f32,
}

impl PageLayout {
    #[must_use]
    pub fn compute(window: Size, counts: ContentCounts) -> Self {
        let content_width = (window.width - 2.0 * spacing::LG)
            .min(sizing::CONTENT_MAX_WIDTH)
            .max(sizing::PROJECT_CARD_MIN_WIDTH);

        let project_columns = columns_for(content_width);
        let skill_columns = if content_width >= SKILLS_TWO_COLUMN_WIDTH {
            2
        } else {
            1
        };

        let home = window.height.max(sizing::HERO_MIN_HEIGHT);
        let about = section_height(sizing::ABOUT_BODY_HEIGHT + sizing::STATS_ROW_HEIGHT);
        let skills_list = rows(counts.skills, skill_columns) as f32 * sizing::SKILL_ROW_HEIGHT;
        let skills = section_height(skills_list);
        let portfolio = section_height(grid_height(
            rows(counts.projects, project_columns),
            sizing::PROJECT_CARD_HEIGHT,
        ));
        let experience =
            section_height(counts.timeline as f32 * sizing::TIMELINE_ENTRY_HEIGHT);
        let contact = section_height(sizing::CONTACT_BODY_HEIGHT);

        let mut top = 0.0;
        let mut place = |id: SectionId, height: f32| {
            let band = Band::new(top, height);
            top += height;
            (id, band)
        };

        let sections = [
            place(SectionId::Home, home),
            place(SectionId::About, about),
            place(SectionId::Skills, skills),
            place(SectionId::Portfolio, portfolio),
            place(SectionId::Experience, experience),
            place(SectionId::Contact, contact),
        ];

        let about_band = sections[1].1;
        let skills_band = sections[2].1;
        let stats = Band::new(
            about_band.top + sizing::SECTION_HEADER_HEIGHT + sizing::ABOUT_BODY_HEIGHT,
            if counts.stats == 0 {
                0.0
            } else {
                sizing::STATS_ROW_HEIGHT
            },
        );
        let skills_list_band =
            Band::new(skills_band.top + sizing::SECTION_HEADER_HEIGHT, skills_list);

        Self {
            sections,
            stats,
            skills: skills_list_band,
            content_width,
            project_columns,
            skill_columns,
            total_height: top,
        }
    }

    /// Every section with its band, in page order.
    #[must_use]
    pub fn sections(&self) -> &[(SectionId, Band)] {
        &self.sections
    }

    #[must_use]
    pub fn section(&self, id: SectionId) -> Band {
        self.sections
            .iter()
            .find(|(section, _)| *section == id)
            .map_or(Band::new(0.0, 0.0), |(_, band)| *band)
    }

    /// The row of stat counters inside the about section.
    #[must_use]
    pub fn stats(&self) -> Band {
        self.stats
    }

    /// The skill bar list inside the skills section.
    #[must_use]
    pub fn skills(&self) -> Band {
        self.skills
    }

    /// Width of the centered content column.
    #[must_use]
    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    #[must_use]
    pub fn project_columns(&self) -> usize {
        self.project_columns
    }

    #[must_use]
    pub fn skill_columns(&self) -> usize {
        self.skill_columns
    }

    /// Size of one project card.
    #[must_use]
    pub fn card_size(&self) -> Size {
        let columns = self.project_columns as f32;
        let width = (self.content_width - GRID_GAP * (columns - 1.0)) / columns;
        Size::new(width, sizing::PROJECT_CARD_HEIGHT)
    }

    #[must_use]
    pub fn total_height(&self) -> f32 {
        self.total_height
    }

    /// Scroll offset that brings a section to the top, leaving room for the
    /// fixed navbar.
    #[must_use]
    pub fn scroll_target(&self, id: SectionId) -> f32 {
        (self.section(id).top - NAVBAR_SCROLL_OFFSET).max(0.0)
    }

    /// [`scroll_target`](Self::scroll_target) as a relative offset of the
    /// page scrollable for a viewport of `viewport_height`.
    #[must_use]
    pub fn relative_target(&self, id: SectionId, viewport_height: f32) -> RelativeOffset {
        let scrollable = self.total_height - viewport_height;
        let y = if scrollable <= 0.0 {
            0.0
        } else {
            (self.scroll_target(id) / scrollable).clamp(0.0, 1.0)
        };
        RelativeOffset { x: 0.0, y }
    }

    /// Whether at least `threshold` of `band` is visible, or the band
    /// fills the whole viewport.
    #[must_use]
    pub fn is_visible(band: Band, viewport: PageViewport, threshold: f32) -> bool {
        let root = viewport.band();
        band.height > 0.0 && (band.intersection_ratio(root) >= threshold || band.covers(root))
    }
}

/// Height of a section whose body is `body` pixels tall.
fn section_height(body: f32) -> f32 {
    sizing::SECTION_HEADER_HEIGHT + body + sizing::SECTION_PADDING
}

fn rows(count: usize, columns: usize) -> usize {
    count.div_ceil(columns.max(1))
}

fn grid_height(rows: usize, row_height: f32) -> f32 {
    if rows == 0 {
        return 0.0;
    }
    rows as f32 * row_height + (rows - 1) as f32 * GRID_GAP
}

fn columns_for(content_width: f32) -> usize {
    let fit = ((content_width + GRID_GAP) / (sizing::PROJECT_CARD_MIN_WIDTH + GRID_GAP)).floor();
    (fit as usize).clamp(1, MAX_PROJECT_COLUMNS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts() -> ContentCounts {
        ContentCounts {
            stats: 3,
            skills: 6,
            projects: 6,
            timeline: 3,
        }
    }

    #[test]
    fn sections_are_contiguous_and_ordered() {
        let layout = PageLayout::compute(Size::new(1280.0, 800.0), counts());

        let mut expected_top = 0.0;
        for ((id, band), expected_id) in layout.sections().iter().zip(SectionId::ALL) {
            assert_eq!(*id, expected_id);
            assert_eq!(band.top, expected_top);
            assert!(band.height > 0.0);
            expected_top = band.bottom();
        }
        assert_eq!(layout.total_height(), expected_top);
    }

    #[test]
    fn hero_fills_the_window() {
        let layout = PageLayout::compute(Size::new(1280.0, 900.0), counts());
        assert_eq!(layout.section(SectionId::Home).height, 900.0);

        let short = PageLayout::compute(Size::new(1280.0, 400.0), counts());
        assert_eq!(short.section(SectionId::Home).height, sizing::HERO_MIN_HEIGHT);
    }

    #[test]
    fn project_columns_follow_width() {
        assert_eq!(
            PageLayout::compute(Size::new(1400.0, 800.0), counts()).project_columns(),
            3
        );
        assert_eq!(
            PageLayout::compute(Size::new(700.0, 800.0), counts()).project_columns(),
            2
        );
        assert_eq!(
            PageLayout::compute(Size::new(360.0, 800.0), counts()).project_columns(),
            1
        );
    }

    #[test]
    fn narrow_window_has_taller_portfolio() {
        let wide = PageLayout::compute(Size::new(1400.0, 800.0), counts());
        let narrow = PageLayout::compute(Size::new(360.0, 800.0), counts());
        assert!(
            narrow.section(SectionId::Portfolio).height > wide.section(SectionId::Portfolio).height
        );
    }

    #[test]
    fn scroll_target_leaves_room_for_navbar() {
        let layout = PageLayout::compute(Size::new(1280.0, 800.0), counts());
        assert_eq!(layout.scroll_target(SectionId::Home), 0.0);
        assert_eq!(
            layout.scroll_target(SectionId::About),
            layout.section(SectionId::About).top - NAVBAR_SCROLL_OFFSET
        );
    }

    #[test]
    fn relative_target_is_clamped() {
        let layout = PageLayout::compute(Size::new(1280.0, 800.0), counts());
        let last = layout.relative_target(SectionId::Contact, 800.0);
        assert!(last.y <= 1.0);
        assert_eq!(layout.relative_target(SectionId::Home, 800.0).y, 0.0);

        // Page shorter than the viewport never scrolls.
        let all = layout.relative_target(SectionId::Contact, layout.total_height() + 1.0);
        assert_eq!(all.y, 0.0);
    }

    #[test]
    fn stats_row_sits_inside_about() {
        let layout = PageLayout::compute(Size::new(1280.0, 800.0), counts());
        let about = layout.section(SectionId::About);
        let stats = layout.stats();
        assert!(stats.top >= about.top);
        assert!(stats.bottom() <= about.bottom());
    }

    #[test]
    fn visibility_uses_threshold_or_cover() {
        let band = Band::new(1000.0, 200.0);
        let half = PageViewport {
            offset: 300.0,
            height: 800.0,
        };
        assert!(PageLayout::is_visible(band, half, 0.5));

        let barely = PageViewport {
            offset: 250.0,
            height: 800.0,
        };
        assert!(!PageLayout::is_visible(band, barely, 0.5));

        let tall = Band::new(0.0, 5000.0);
        assert!(PageLayout::is_visible(
            tall,
            PageViewport {
                offset: 1000.0,
                height: 800.0
            },
            0.5
        ));
    }
}
