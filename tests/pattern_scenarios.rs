//! End-to-end detector scenarios with known windows.

use roulette_engine::domain::outcome::{Color, Parity, history_from_numbers};
use roulette_engine::domain::prediction::DetectedPattern;
use roulette_engine::engine::patterns;

#[test]
fn four_reds_suggest_black() {
    let history = history_from_numbers(&[1, 3, 5, 7]).unwrap();
    let pattern = patterns::color_sequence(&history).unwrap();
    match pattern {
        DetectedPattern::ColorSequence {
            target,
            probability,
            confidence,
            ..
        } => {
            assert_eq!(target, Color::Black);
            assert_eq!(probability, 0.78);
            assert_eq!(confidence, 0.85);
        }
        other => panic!("unexpected pattern {other:?}"),
    }
}

#[test]
fn eight_evens_suggest_odd() {
    let history = history_from_numbers(&[2, 4, 6, 8, 10, 12, 14, 16]).unwrap();
    let pattern = patterns::parity_trend(&history).unwrap();
    match pattern {
        DetectedPattern::ParityTrend { target, .. } => assert_eq!(target, Parity::Odd),
        other => panic!("unexpected pattern {other:?}"),
    }
}

#[test]
fn repeated_seventeen_is_the_hot_number() {
    // 17 four times in twenty spins, the rest one hit each.
    let history = history_from_numbers(&[
        17, 1, 2, 3, 17, 4, 5, 6, 17, 7, 8, 9, 17, 10, 11, 12, 13, 14, 15, 16,
    ])
    .unwrap();
    let pattern = patterns::hot_number(&history).unwrap();
    match pattern {
        DetectedPattern::HotNumber {
            number,
            probability,
            ..
        } => {
            assert_eq!(number, 17);
            // min(4/20 * 3, 0.75)
            assert!((probability - 0.6).abs() < 1e-12);
        }
        other => panic!("unexpected pattern {other:?}"),
    }
}

#[test]
fn dozen_detector_silent_below_ten_events() {
    let history = history_from_numbers(&[1, 13, 25, 2, 14, 26, 3, 15, 27]).unwrap();
    assert!(patterns::dozen_hot(&history).is_none());
}

#[test]
fn detectors_tolerate_all_zero_history() {
    let history = history_from_numbers(&[0; 30]).unwrap();
    // No colors, dozens or parities to latch onto.
    assert!(patterns::color_sequence(&history).is_none());
    assert!(patterns::dozen_hot(&history).is_none());
    assert!(patterns::parity_trend(&history).is_none());
    // Zero itself repeats, which the hot-number scan does report.
    let hot = patterns::hot_number(&history).unwrap();
    match hot {
        DetectedPattern::HotNumber { number, hits, .. } => {
            assert_eq!(number, 0);
            assert_eq!(hits, 20);
        }
        other => panic!("unexpected pattern {other:?}"),
    }
}
