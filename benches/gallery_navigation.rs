// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for per-frame page work.
//!
//! Measures the performance of:
//! - Lightbox navigation (next/previous with reveal)
//! - Page layout and section observation on scroll
//! - Typewriter stepping

use criterion::{criterion_group, criterion_main, Criterion};
use iced::Size;
use iced_folio::config::TypewriterTimings;
use iced_folio::content::Portfolio;
use iced_folio::ui::layout::{ContentCounts, PageLayout};
use iced_folio::ui::lightbox::Lightbox;
use iced_folio::ui::state::{PageViewport, SectionTracker, Typewriter};
use std::hint::black_box;
use std::time::Instant;

fn sample() -> Portfolio {
    Portfolio::embedded().expect("embedded sample parses")
}

/// Benchmark lightbox navigation including the staged reveal.
fn bench_lightbox_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");
    let mut lightbox = Lightbox::new(sample().projects);
    lightbox.open(0);

    group.bench_function("next_and_reveal", |b| {
        b.iter(|| {
            if let Some(ticket) = lightbox.next() {
                black_box(lightbox.reveal(ticket));
            }
        });
    });

    group.bench_function("previous_and_reveal", |b| {
        b.iter(|| {
            if let Some(ticket) = lightbox.previous() {
                black_box(lightbox.reveal(ticket));
            }
        });
    });

    group.finish();
}

/// Benchmark the work done on every scroll event.
fn bench_scroll_observation(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");
    let counts = ContentCounts::from(&sample());
    let window = Size::new(1280.0, 800.0);

    group.bench_function("compute_layout", |b| {
        b.iter(|| black_box(PageLayout::compute(black_box(window), counts)));
    });

    let layout = PageLayout::compute(window, counts);
    let total = layout.total_height();
    group.bench_function("observe_sections", |b| {
        let mut tracker = SectionTracker::default();
        let mut offset = 0.0;
        b.iter(|| {
            offset = (offset + 37.0) % total;
            let viewport = PageViewport {
                offset,
                height: window.height,
            };
            black_box(tracker.observe(layout.sections(), viewport, Instant::now()));
        });
    });

    group.finish();
}

/// Benchmark typewriter stepping over a full phrase cycle.
fn bench_typewriter(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");
    let phrases = sample().owner.phrases;

    group.bench_function("typewriter_tick", |b| {
        let mut typewriter =
            Typewriter::new(phrases.clone(), TypewriterTimings::default()).expect("phrases");
        b.iter(|| {
            black_box(typewriter.tick());
            black_box(typewriter.displayed().len());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lightbox_navigation,
    bench_scroll_observation,
    bench_typewriter
);
criterion_main!(benches);
