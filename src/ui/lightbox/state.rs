// SPDX-License-Identifier: MPL-2.0
//! Lightbox state: which project is shown, whether the overlay is open,
//! and the zoom of the displayed image.
//!
//! Changing the displayed project is a staged swap. The panel first goes to
//! [`PanelPhase::Hidden`]; after a fixed delay the caller hands back the
//! [`SwapTicket`] it received and the new project is revealed. Every swap
//! (and every close) bumps a generation counter, so a ticket from an older
//! swap no longer matches and its reveal is dropped. The latest navigation
//! always wins.

use crate::content::GalleryItem;
use crate::ui::state::zoom::ZoomOrigin;

/// Visual phase of the lightbox panel during a content swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
    /// Transparent and scaled down while the content is being replaced.
    Hidden,
    /// Opaque at full scale, showing the current project.
    Visible,
}

/// Proof that a content swap was started; redeemed by [`Lightbox::reveal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapTicket(u64);

/// Modal gallery state.
///
/// Invariants: `current_index < items.len()` whenever items exist, and
/// `is_zoomed()` is false while closed.
#[derive(Debug, Clone)]
pub struct Lightbox {
    items: Vec<GalleryItem>,
    current_index: usize,
    open: bool,
    zoomed: bool,
    zoom_origin: ZoomOrigin,
    phase: PanelPhase,
    /// Project whose data the panel currently renders.
    shown_index: Option<usize>,
    generation: u64,
}

impl Lightbox {
    #[must_use]
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self {
            items,
            current_index: 0,
            open: false,
            zoomed: false,
            zoom_origin: ZoomOrigin::center(),
            phase: PanelPhase::Hidden,
            shown_index: None,
            generation: 0,
        }
    }

    /// Opens the lightbox on `index`, or switches to it when already open.
    ///
    /// Out-of-range indices are ignored. Returns the ticket of the swap that
    /// was started.
    pub fn open(&mut self, index: usize) -> Option<SwapTicket> {
        if index >= self.items.len() {
            log::warn!(
                "Ignoring lightbox open at {index}, gallery has {} item(s)",
                self.items.len()
            );
            return None;
        }

        self.current_index = index;
        self.open = true;
        Some(self.begin_swap())
    }

    /// Closes the lightbox. Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        if !self.open {
            return false;
        }

        self.open = false;
        self.reset_zoom();
        self.phase = PanelPhase::Hidden;
        self.generation = self.generation.wrapping_add(1);
        true
    }

    /// Shows the following project, wrapping after the last one.
    pub fn next(&mut self) -> Option<SwapTicket> {
        if !self.open || self.items.is_empty() {
            return None;
        }

        self.current_index = (self.current_index + 1) % self.items.len();
        Some(self.begin_swap())
    }

    /// Shows the preceding project, wrapping before the first one.
    pub fn previous(&mut self) -> Option<SwapTicket> {
        if !self.open || self.items.is_empty() {
            return None;
        }

        let len = self.items.len();
        self.current_index = (self.current_index + len - 1) % len;
        Some(self.begin_swap())
    }

    /// Flips the zoom. Entering zoom centers it on `origin`; leaving it
    /// recenters the origin. Returns the new zoom flag, or `None` while
    /// closed.
    pub fn toggle_zoom(&mut self, origin: ZoomOrigin) -> Option<bool> {
        if !self.open {
            return None;
        }

        if self.zoomed {
            self.reset_zoom();
        } else {
            self.zoomed = true;
            self.zoom_origin = origin;
        }
        Some(self.zoomed)
    }

    /// Moves the zoom origin while zoomed. Returns whether it moved.
    pub fn track_zoom_pointer(&mut self, origin: ZoomOrigin) -> bool {
        if !self.zoomed || self.zoom_origin == origin {
            return false;
        }
        self.zoom_origin = origin;
        true
    }

    /// Completes the swap identified by `ticket`. Stale tickets, and tickets
    /// redeemed after a close, are ignored. Returns whether the panel was
    /// revealed.
    pub fn reveal(&mut self, ticket: SwapTicket) -> bool {
        if !self.open || ticket.0 != self.generation {
            return false;
        }

        self.shown_index = Some(self.current_index);
        self.phase = PanelPhase::Visible;
        true
    }

    fn begin_swap(&mut self) -> SwapTicket {
        self.reset_zoom();
        self.phase = PanelPhase::Hidden;
        self.generation = self.generation.wrapping_add(1);
        SwapTicket(self.generation)
    }

    fn reset_zoom(&mut self) {
        self.zoomed = false;
        self.zoom_origin = ZoomOrigin::center();
    }

    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    #[must_use]
    pub fn zoom_origin(&self) -> ZoomOrigin {
        self.zoom_origin
    }

    #[must_use]
    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    /// The project the panel renders, with its index. Lags behind
    /// `current_index` until the pending swap is revealed.
    #[must_use]
    pub fn shown_item(&self) -> Option<(usize, &GalleryItem)> {
        self.shown_index
            .and_then(|index| self.items.get(index).map(|item| (index, item)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn items(titles: &[&str]) -> Vec<GalleryItem> {
        titles
            .iter()
            .map(|title| GalleryItem {
                image: PathBuf::from(format!("{title}.png")),
                title: (*title).to_string(),
                description: String::new(),
                tags: vec!["Tag".to_string()],
            })
            .collect()
    }

    fn gallery() -> Lightbox {
        Lightbox::new(items(&["A", "B", "C"]))
    }

    #[test]
    fn starts_closed_and_unzoomed() {
        let lightbox = gallery();
        assert!(!lightbox.is_open());
        assert!(!lightbox.is_zoomed());
        assert_eq!(lightbox.phase(), PanelPhase::Hidden);
        assert!(lightbox.shown_item().is_none());
    }

    #[test]
    fn open_sets_index_and_starts_hidden_swap() {
        let mut lightbox = gallery();
        let ticket = lightbox.open(1).expect("index in range");

        assert!(lightbox.is_open());
        assert_eq!(lightbox.current_index(), 1);
        assert!(!lightbox.is_zoomed());
        assert_eq!(lightbox.phase(), PanelPhase::Hidden);

        assert!(lightbox.reveal(ticket));
        assert_eq!(lightbox.phase(), PanelPhase::Visible);
        assert_eq!(lightbox.shown_item().map(|(index, _)| index), Some(1));
    }

    #[test]
    fn open_out_of_range_is_ignored() {
        let mut lightbox = gallery();
        assert!(lightbox.open(3).is_none());
        assert!(!lightbox.is_open());
    }

    #[test]
    fn close_when_closed_is_noop() {
        let mut lightbox = gallery();
        assert!(!lightbox.close());
        assert!(!lightbox.is_open());
    }

    #[test]
    fn close_resets_zoom() {
        let mut lightbox = gallery();
        lightbox.open(0);
        lightbox.toggle_zoom(ZoomOrigin::new(10.0, 20.0));
        assert!(lightbox.close());
        assert!(!lightbox.is_zoomed());
        assert_eq!(lightbox.zoom_origin(), ZoomOrigin::center());
    }

    #[test]
    fn next_and_previous_wrap() {
        let mut lightbox = gallery();
        lightbox.open(0);
        lightbox.next();
        assert_eq!(lightbox.current_index(), 1);
        lightbox.next();
        assert_eq!(lightbox.current_index(), 2);
        lightbox.next();
        assert_eq!(lightbox.current_index(), 0);
        lightbox.previous();
        assert_eq!(lightbox.current_index(), 2);
    }

    #[test]
    fn previous_from_last_steps_back_one() {
        let mut lightbox = gallery();
        lightbox.open(2);
        lightbox.previous();
        assert_eq!(lightbox.current_index(), 1);
    }

    #[test]
    fn navigation_requires_open() {
        let mut lightbox = gallery();
        assert!(lightbox.next().is_none());
        assert!(lightbox.previous().is_none());
        assert_eq!(lightbox.current_index(), 0);
    }

    #[test]
    fn single_item_wraps_to_itself_but_still_swaps() {
        let mut lightbox = Lightbox::new(items(&["Only"]));
        let first = lightbox.open(0).expect("in range");
        lightbox.reveal(first);

        let ticket = lightbox.next().expect("open");
        assert_eq!(lightbox.current_index(), 0);
        assert_eq!(lightbox.phase(), PanelPhase::Hidden);
        assert!(lightbox.reveal(ticket));
    }

    #[test]
    fn navigation_resets_zoom() {
        let mut lightbox = gallery();
        lightbox.open(0);
        lightbox.toggle_zoom(ZoomOrigin::new(80.0, 80.0));
        lightbox.next();
        assert!(!lightbox.is_zoomed());
        assert_eq!(lightbox.zoom_origin(), ZoomOrigin::center());
    }

    #[test]
    fn toggle_zoom_twice_restores_state() {
        let mut lightbox = gallery();
        lightbox.open(0);

        assert_eq!(lightbox.toggle_zoom(ZoomOrigin::new(25.0, 75.0)), Some(true));
        assert_eq!(lightbox.zoom_origin(), ZoomOrigin::new(25.0, 75.0));
        assert_eq!(lightbox.toggle_zoom(ZoomOrigin::new(90.0, 90.0)), Some(false));
        assert_eq!(lightbox.zoom_origin(), ZoomOrigin::center());
    }

    #[test]
    fn toggle_zoom_requires_open() {
        let mut lightbox = gallery();
        assert_eq!(lightbox.toggle_zoom(ZoomOrigin::center()), None);
        assert!(!lightbox.is_zoomed());
    }

    #[test]
    fn tracking_only_moves_origin_while_zoomed() {
        let mut lightbox = gallery();
        lightbox.open(0);
        assert!(!lightbox.track_zoom_pointer(ZoomOrigin::new(10.0, 10.0)));
        assert_eq!(lightbox.zoom_origin(), ZoomOrigin::center());

        lightbox.toggle_zoom(ZoomOrigin::new(50.0, 50.0));
        assert!(lightbox.track_zoom_pointer(ZoomOrigin::new(10.0, 90.0)));
        assert_eq!(lightbox.zoom_origin(), ZoomOrigin::new(10.0, 90.0));
    }

    #[test]
    fn stale_ticket_is_discarded() {
        let mut lightbox = gallery();
        let first = lightbox.open(0).expect("in range");
        let second = lightbox.next().expect("open");

        assert!(!lightbox.reveal(first));
        assert_eq!(lightbox.phase(), PanelPhase::Hidden);
        assert!(lightbox.reveal(second));
        assert_eq!(lightbox.shown_item().map(|(index, _)| index), Some(1));
    }

    #[test]
    fn reveal_after_close_is_discarded() {
        let mut lightbox = gallery();
        let ticket = lightbox.open(2).expect("in range");
        lightbox.close();
        assert!(!lightbox.reveal(ticket));
        assert_eq!(lightbox.phase(), PanelPhase::Hidden);
    }

    #[test]
    fn reopen_while_open_switches_index() {
        let mut lightbox = gallery();
        lightbox.open(0);
        lightbox.open(2);
        assert!(lightbox.is_open());
        assert_eq!(lightbox.current_index(), 2);
    }

    #[test]
    fn empty_gallery_never_opens() {
        let mut lightbox = Lightbox::new(Vec::new());
        assert!(lightbox.open(0).is_none());
        assert!(lightbox.is_empty());
    }
}
