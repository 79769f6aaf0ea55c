// SPDX-License-Identifier: MPL-2.0
//! Page sections, their vertical extents, and scroll-driven section state.
//!
//! The page is a single vertical scrollable. Each section occupies a
//! [`Band`] of it; comparing bands with the visible part of the page gives
//! the intersection ratios that drive the active nav link, the one-shot
//! reveal of each section, and the start of the stats and skill animations.

use crate::config::{
    REVEAL_BOTTOM_MARGIN, REVEAL_DURATION_MS, REVEAL_THRESHOLD, SECTION_ACTIVE_MARGIN,
    SECTION_ACTIVE_THRESHOLD,
};
use crate::ui::state::transition::Transition;
use std::time::{Duration, Instant};

/// A section of the portfolio page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Portfolio,
    Experience,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Portfolio,
        SectionId::Experience,
        SectionId::Contact,
    ];

    /// i18n key of the nav link label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            SectionId::Home => "nav-home",
            SectionId::About => "nav-about",
            SectionId::Skills => "nav-skills",
            SectionId::Portfolio => "nav-portfolio",
            SectionId::Experience => "nav-experience",
            SectionId::Contact => "nav-contact",
        }
    }

    fn index(self) -> usize {
        match self {
            SectionId::Home => 0,
            SectionId::About => 1,
            SectionId::Skills => 2,
            SectionId::Portfolio => 3,
            SectionId::Experience => 4,
            SectionId::Contact => 5,
        }
    }

    /// The hero is on screen at startup and never fades in.
    #[must_use]
    pub fn reveals_on_scroll(self) -> bool {
        self != SectionId::Home
    }
}

/// A vertical extent in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub top: f32,
    pub height: f32,
}

impl Band {
    #[must_use]
    pub fn new(top: f32, height: f32) -> Self {
        Self {
            top,
            height: height.max(0.0),
        }
    }

    #[must_use]
    pub fn bottom(self) -> f32 {
        self.top + self.height
    }

    /// Length of the overlap with `other`.
    #[must_use]
    pub fn overlap(self, other: Band) -> f32 {
        (self.bottom().min(other.bottom()) - self.top.max(other.top)).max(0.0)
    }

    /// Fraction of this band that lies inside `root`, in `[0, 1]`.
    #[must_use]
    pub fn intersection_ratio(self, root: Band) -> f32 {
        if self.height <= 0.0 {
            return 0.0;
        }
        (self.overlap(root) / self.height).min(1.0)
    }

    /// Whether this band covers `root` entirely.
    #[must_use]
    pub fn covers(self, root: Band) -> bool {
        root.height > 0.0 && self.top <= root.top && self.bottom() >= root.bottom()
    }
}

/// The visible part of the page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageViewport {
    /// Scroll offset from the top of the page.
    pub offset: f32,
    /// Height of the visible area.
    pub height: f32,
}

impl PageViewport {
    #[must_use]
    pub fn band(self) -> Band {
        Band::new(self.offset, self.height)
    }

    /// The viewport shrunk by `margin` on top and bottom.
    #[must_use]
    pub fn inset(self, top: f32, bottom: f32) -> Band {
        Band::new(self.offset + top, self.height - top - bottom)
    }
}

/// Picks the section that should be highlighted in the navbar.
///
/// A section qualifies when at least [`SECTION_ACTIVE_THRESHOLD`] of it lies
/// inside the viewport shrunk by [`SECTION_ACTIVE_MARGIN`], or when it
/// covers that whole area (sections taller than the viewport). The highest
/// ratio wins; with no qualifying section, `previous` stays active.
#[must_use]
pub fn active_section(
    sections: &[(SectionId, Band)],
    viewport: PageViewport,
    previous: SectionId,
) -> SectionId {
    let root = viewport.inset(SECTION_ACTIVE_MARGIN, SECTION_ACTIVE_MARGIN);
    if root.height <= 0.0 {
        return previous;
    }

    sections
        .iter()
        .filter_map(|(id, band)| {
            let ratio = band.intersection_ratio(root);
            (ratio >= SECTION_ACTIVE_THRESHOLD || band.covers(root)).then_some((*id, ratio))
        })
        .fold(None, |best: Option<(SectionId, f32)>, candidate| match best {
            Some((_, best_ratio)) if best_ratio >= candidate.1 => best,
            _ => Some(candidate),
        })
        .map_or(previous, |(id, _)| id)
}

/// Scroll-driven state shared by all sections: the active nav link and the
/// one-shot reveal transitions.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    active: SectionId,
    reveals: [Option<Transition>; 6],
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self {
            active: SectionId::Home,
            reveals: [None; 6],
        }
    }
}

impl SectionTracker {
    #[must_use]
    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Updates the active section and starts reveals for sections that just
    /// became visible. Returns the sections revealed by this call.
    pub fn observe(
        &mut self,
        sections: &[(SectionId, Band)],
        viewport: PageViewport,
        now: Instant,
    ) -> Vec<SectionId> {
        self.active = active_section(sections, viewport, self.active);

        let root = viewport.inset(0.0, REVEAL_BOTTOM_MARGIN);
        let mut revealed = Vec::new();

        for (id, band) in sections {
            if !id.reveals_on_scroll() || self.reveals[id.index()].is_some() {
                continue;
            }
            let ratio = band.intersection_ratio(root);
            if ratio > 0.0 && ratio >= REVEAL_THRESHOLD.min(root.height / band.height.max(1.0)) {
                self.reveals[id.index()] = Some(Transition::start(
                    now,
                    Duration::from_millis(REVEAL_DURATION_MS),
                ));
                revealed.push(*id);
            }
        }

        revealed
    }

    /// Reveal progress of a section in `[0, 1]`.
    #[must_use]
    pub fn reveal_progress(&self, id: SectionId, now: Instant) -> f32 {
        if !id.reveals_on_scroll() {
            return 1.0;
        }
        self.reveals[id.index()].map_or(0.0, |transition| transition.progress(now))
    }

    #[must_use]
    pub fn is_revealed(&self, id: SectionId) -> bool {
        !id.reveals_on_scroll() || self.reveals[id.index()].is_some()
    }

    /// Whether any reveal is still animating.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.reveals
            .iter()
            .flatten()
            .any(|transition| !transition.is_finished(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<(SectionId, Band)> {
        vec![
            (SectionId::Home, Band::new(0.0, 800.0)),
            (SectionId::About, Band::new(800.0, 600.0)),
            (SectionId::Skills, Band::new(1400.0, 500.0)),
            (SectionId::Portfolio, Band::new(1900.0, 3000.0)),
            (SectionId::Experience, Band::new(4900.0, 500.0)),
            (SectionId::Contact, Band::new(5400.0, 700.0)),
        ]
    }

    fn viewport(offset: f32) -> PageViewport {
        PageViewport {
            offset,
            height: 800.0,
        }
    }

    #[test]
    fn overlap_and_ratio() {
        let band = Band::new(100.0, 200.0);
        assert_eq!(band.overlap(Band::new(200.0, 500.0)), 100.0);
        assert_eq!(band.intersection_ratio(Band::new(200.0, 500.0)), 0.5);
        assert_eq!(band.intersection_ratio(Band::new(400.0, 10.0)), 0.0);
        assert_eq!(Band::new(0.0, 0.0).intersection_ratio(band), 0.0);
    }

    #[test]
    fn home_is_active_at_top() {
        assert_eq!(
            active_section(&page(), viewport(0.0), SectionId::Contact),
            SectionId::Home
        );
    }

    #[test]
    fn largest_ratio_wins() {
        // Root is [900, 1500]: About 500/600, Skills 100/500.
        assert_eq!(
            active_section(&page(), viewport(800.0), SectionId::Home),
            SectionId::About
        );
    }

    #[test]
    fn tall_section_covering_viewport_is_active() {
        assert_eq!(
            active_section(&page(), viewport(3000.0), SectionId::Skills),
            SectionId::Portfolio
        );
    }

    #[test]
    fn previous_section_stays_without_candidates() {
        let sections = vec![(SectionId::About, Band::new(0.0, 10_000.0))];
        let tiny = PageViewport {
            offset: 0.0,
            height: 150.0,
        };
        assert_eq!(
            active_section(&sections, tiny, SectionId::Skills),
            SectionId::Skills
        );
    }

    #[test]
    fn reveal_is_one_shot() {
        let mut tracker = SectionTracker::default();
        let now = Instant::now();

        assert!(tracker.observe(&page(), viewport(0.0), now).is_empty());
        assert!(!tracker.is_revealed(SectionId::About));

        let revealed = tracker.observe(&page(), viewport(300.0), now);
        assert_eq!(revealed, vec![SectionId::About]);

        let again = tracker.observe(&page(), viewport(0.0), now);
        assert!(again.is_empty());
        assert!(tracker.is_revealed(SectionId::About));
    }

    #[test]
    fn reveal_respects_bottom_margin() {
        let mut tracker = SectionTracker::default();
        // About starts at 800; a 40 px peek stays inside the 50 px margin.
        let revealed = tracker.observe(&page(), viewport(40.0), Instant::now());
        assert!(revealed.is_empty());
    }

    #[test]
    fn reveal_progress_animates() {
        let mut tracker = SectionTracker::default();
        let now = Instant::now();
        tracker.observe(&page(), viewport(300.0), now);

        assert_eq!(tracker.reveal_progress(SectionId::Home, now), 1.0);
        assert_eq!(tracker.reveal_progress(SectionId::Skills, now), 0.0);
        assert!(tracker.is_animating(now + Duration::from_millis(100)));
        assert_eq!(
            tracker.reveal_progress(SectionId::About, now + Duration::from_millis(600)),
            1.0
        );
        assert!(!tracker.is_animating(now + Duration::from_millis(700)));
    }

    #[test]
    fn very_tall_section_still_reveals() {
        let mut tracker = SectionTracker::default();
        let sections = vec![(SectionId::Portfolio, Band::new(0.0, 20_000.0))];
        let revealed = tracker.observe(&sections, viewport(0.0), Instant::now());
        assert_eq!(revealed, vec![SectionId::Portfolio]);
    }
}
