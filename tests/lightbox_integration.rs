// SPDX-License-Identifier: MPL-2.0
//! Lightbox navigation scenarios driven through the public state machine.

use iced::{Point, Size};
use iced_folio::content::GalleryItem;
use iced_folio::ui::lightbox::{Lightbox, PanelPhase};
use iced_folio::ui::state::ZoomOrigin;
use std::path::PathBuf;

fn items(count: usize) -> Vec<GalleryItem> {
    (0..count)
        .map(|index| GalleryItem {
            image: PathBuf::from(format!("project-{index}.png")),
            title: format!("Project {index}"),
            description: String::new(),
            tags: vec!["Branding".to_string()],
        })
        .collect()
}

#[test]
fn quick_navigation_only_reveals_the_last_item() {
    let mut lightbox = Lightbox::new(items(4));

    let opened = lightbox.open(1).expect("index in range");
    let after_next = lightbox.next().expect("open");
    let after_second_next = lightbox.next().expect("open");

    assert!(!lightbox.reveal(opened));
    assert!(!lightbox.reveal(after_next));
    assert_eq!(lightbox.phase(), PanelPhase::Hidden);

    assert!(lightbox.reveal(after_second_next));
    assert_eq!(lightbox.phase(), PanelPhase::Visible);
    let (index, item) = lightbox.shown_item().expect("revealed");
    assert_eq!(index, 3);
    assert_eq!(item.title, "Project 3");
}

#[test]
fn navigation_wraps_both_ways() {
    let mut lightbox = Lightbox::new(items(3));
    lightbox.open(0);

    lightbox.previous();
    assert_eq!(lightbox.current_index(), 2);
    lightbox.next();
    lightbox.next();
    assert_eq!(lightbox.current_index(), 1);
}

#[test]
fn zoom_follows_pointer_and_resets_on_navigation() {
    let frame = Size::new(800.0, 500.0);
    let mut lightbox = Lightbox::new(items(2));
    let ticket = lightbox.open(0).expect("index in range");
    lightbox.reveal(ticket);

    let corner = ZoomOrigin::from_pointer(Point::new(800.0, 0.0), frame);
    assert_eq!(lightbox.toggle_zoom(corner), Some(true));
    assert_eq!(lightbox.zoom_origin(), corner);

    let middle = ZoomOrigin::from_pointer(Point::new(400.0, 250.0), frame);
    assert!(lightbox.track_zoom_pointer(middle));
    assert_eq!(lightbox.zoom_origin(), ZoomOrigin::center());

    lightbox.next();
    assert!(!lightbox.is_zoomed());
}

#[test]
fn close_discards_pending_reveal() {
    let mut lightbox = Lightbox::new(items(2));
    let ticket = lightbox.open(1).expect("index in range");
    assert!(lightbox.close());

    assert!(!lightbox.reveal(ticket));
    assert!(!lightbox.is_open());
    assert!(lightbox.next().is_none());
}

#[test]
fn out_of_range_open_is_ignored() {
    let mut lightbox = Lightbox::new(items(2));
    assert!(lightbox.open(5).is_none());
    assert!(!lightbox.is_open());
}

#[test]
fn full_cycle_returns_to_start_for_every_index() {
    for len in [1, 2, 3, 7] {
        for start in 0..len {
            let mut lightbox = Lightbox::new(items(len));
            lightbox.open(start).expect("index in range");

            for _ in 0..len {
                lightbox.next().expect("open");
            }
            assert_eq!(lightbox.current_index(), start, "next, len {len}");

            for _ in 0..len {
                lightbox.previous().expect("open");
            }
            assert_eq!(lightbox.current_index(), start, "previous, len {len}");
        }
    }
}
