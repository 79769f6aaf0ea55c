// SPDX-License-Identifier: MPL-2.0
//! Full typewriter cycles with configured timings.

use iced_folio::config::{TypewriterConfig, TypewriterTimings};
use iced_folio::ui::state::typewriter::{Phase, Typewriter};
use std::time::Duration;

fn timings() -> TypewriterTimings {
    TypewriterConfig {
        startup_delay_ms: Some(10),
        typing_interval_ms: Some(100),
        delete_interval_ms: Some(50),
        pause_full_ms: Some(2000),
        pause_empty_ms: Some(500),
    }
    .timings()
}

#[test]
fn one_full_cycle_returns_to_the_next_phrase() {
    let phrases = vec!["Café".to_string(), "Web".to_string()];
    let mut typewriter = Typewriter::new(phrases, timings()).expect("phrases given");
    let mut shown = Vec::new();
    let mut waited = Duration::ZERO;

    while typewriter.phrase_index() == 0 || typewriter.char_count() == 0 {
        waited += typewriter.tick();
        shown.push(typewriter.displayed().to_string());
    }

    assert_eq!(
        shown,
        ["C", "Ca", "Caf", "Café", "Caf", "Ca", "C", "", "W"]
    );
    // 3 typing steps, one full pause, 3 delete steps, one empty pause, then
    // the first step of the next phrase.
    let expected = Duration::from_millis(3 * 100 + 2000 + 3 * 50 + 500 + 100);
    assert_eq!(waited, expected);
    assert_eq!(typewriter.phase(), Phase::Typing);
}

#[test]
fn single_phrase_cycles_forever() {
    let mut typewriter =
        Typewriter::new(vec!["Hi".to_string()], timings()).expect("phrase given");
    for _ in 0..20 {
        typewriter.tick();
        assert!(typewriter.char_count() <= 2);
        assert_eq!(typewriter.phrase_index(), 0);
    }
}

#[test]
fn empty_phrase_list_disables_the_typewriter() {
    assert!(Typewriter::new(Vec::new(), timings()).is_none());
}
