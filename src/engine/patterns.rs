//! Categorical pattern detectors over recent history.
//!
//! Each detector is independent, has its own minimum-sample gate, and
//! returns at most one pattern. Below the gate it returns `None` rather
//! than erroring; downstream consumers key off the absence.

use crate::domain::outcome::{Color, OutcomeRecord, Parity};
use crate::domain::prediction::DetectedPattern;
use crate::domain::wheel::NUMBER_COUNT;
use crate::engine::features::tail;

/// Color runs need three same-color spins plus one spin of context.
const COLOR_MIN_HISTORY: usize = 4;
const COLOR_RUN_LENGTH: usize = 3;
const COLOR_PROBABILITY: f64 = 0.78;
const COLOR_CONFIDENCE: f64 = 0.85;

const DOZEN_WINDOW: usize = 10;
/// At least 40% of the window concentrated in one dozen.
const DOZEN_MIN_HITS: usize = 4;
const DOZEN_BOOST: f64 = 1.5;
const DOZEN_PROBABILITY_CAP: f64 = 0.85;
const DOZEN_CONFIDENCE: f64 = 0.80;

const HOT_WINDOW: usize = 20;
const HOT_MIN_HITS: usize = 3;
/// Count must exceed this multiple of the uniform expectation.
const HOT_EXPECTED_RATIO: f64 = 1.5;
const HOT_BOOST: f64 = 3.0;
const HOT_PROBABILITY_CAP: f64 = 0.75;
const HOT_CONFIDENCE: f64 = 0.70;

const PARITY_WINDOW: usize = 8;
const PARITY_MIN_NONZERO: usize = 6;
const PARITY_MIN_COUNT: usize = 5;
const PARITY_PROBABILITY: f64 = 0.72;
const PARITY_CONFIDENCE: f64 = 0.75;

/// Run all four detectors; the hits come back sorted by probability
/// descending.
pub fn analyze_all(history: &[OutcomeRecord]) -> Vec<DetectedPattern> {
    let mut patterns: Vec<DetectedPattern> = [
        color_sequence(history),
        dozen_hot(history),
        hot_number(history),
        parity_trend(history),
    ]
    .into_iter()
    .flatten()
    .collect();
    patterns.sort_by(|a, b| b.probability().total_cmp(&a.probability()));
    patterns
}

/// Three most recent spins all one non-green color: suggest the opposite.
pub fn color_sequence(history: &[OutcomeRecord]) -> Option<DetectedPattern> {
    if history.len() < COLOR_MIN_HISTORY {
        return None;
    }
    let recent = tail(history, COLOR_RUN_LENGTH);
    let color = recent[0].color;
    if color == Color::Green || recent.iter().any(|r| r.color != color) {
        return None;
    }
    Some(DetectedPattern::ColorSequence {
        run: recent.iter().map(|r| r.color).collect(),
        target: color.opposite(),
        probability: COLOR_PROBABILITY,
        confidence: COLOR_CONFIDENCE,
    })
}

/// One dozen holding at least 40% of the last ten spins: suggest it.
pub fn dozen_hot(history: &[OutcomeRecord]) -> Option<DetectedPattern> {
    if history.len() < DOZEN_WINDOW {
        return None;
    }
    let recent = tail(history, DOZEN_WINDOW);
    let mut counts = [0usize; 3];
    for record in recent {
        if let Some(dozen) = record.dozen {
            counts[dozen as usize - 1] += 1;
        }
    }
    // First dozen wins ties: only a strictly greater count replaces it.
    let (best, hits) = counts
        .iter()
        .enumerate()
        .fold((0, 0), |acc, (i, &c)| if c > acc.1 { (i, c) } else { acc });
    if hits < DOZEN_MIN_HITS {
        return None;
    }
    Some(DetectedPattern::DozenHot {
        dozen: best as u8 + 1,
        hits,
        window: DOZEN_WINDOW,
        probability: (hits as f64 / DOZEN_WINDOW as f64 * DOZEN_BOOST).min(DOZEN_PROBABILITY_CAP),
        confidence: DOZEN_CONFIDENCE,
    })
}

/// A single number repeating at better than 1.5x the uniform expectation
/// over the last twenty spins: suggest it. Ties break by the order numbers
/// first appear in the window.
pub fn hot_number(history: &[OutcomeRecord]) -> Option<DetectedPattern> {
    if history.len() < HOT_WINDOW {
        return None;
    }
    let recent = tail(history, HOT_WINDOW);
    let mut counts = [0usize; NUMBER_COUNT];
    for record in recent {
        counts[record.number as usize] += 1;
    }

    let mut visited = [false; NUMBER_COUNT];
    let mut best: Option<(u8, usize)> = None;
    for record in recent {
        let index = record.number as usize;
        if visited[index] {
            continue;
        }
        visited[index] = true;
        if best.is_none_or(|(_, hits)| counts[index] > hits) {
            best = Some((record.number, counts[index]));
        }
    }

    let (number, hits) = best?;
    let expected = HOT_WINDOW as f64 / NUMBER_COUNT as f64;
    if (hits as f64) <= HOT_EXPECTED_RATIO * expected || hits < HOT_MIN_HITS {
        return None;
    }
    Some(DetectedPattern::HotNumber {
        number,
        hits,
        window: HOT_WINDOW,
        probability: (hits as f64 / HOT_WINDOW as f64 * HOT_BOOST).min(HOT_PROBABILITY_CAP),
        confidence: HOT_CONFIDENCE,
    })
}

/// Five or more of the last eight spins sharing one parity (with at least
/// six non-zero spins among them): suggest the opposite parity.
pub fn parity_trend(history: &[OutcomeRecord]) -> Option<DetectedPattern> {
    if history.len() < PARITY_WINDOW {
        return None;
    }
    let recent = tail(history, PARITY_WINDOW);
    let even = recent
        .iter()
        .filter(|r| r.parity == Some(Parity::Even))
        .count();
    let odd = recent
        .iter()
        .filter(|r| r.parity == Some(Parity::Odd))
        .count();
    if even + odd < PARITY_MIN_NONZERO {
        return None;
    }
    let target = if even >= PARITY_MIN_COUNT {
        Parity::Odd
    } else if odd >= PARITY_MIN_COUNT {
        Parity::Even
    } else {
        return None;
    };
    Some(DetectedPattern::ParityTrend {
        even,
        odd,
        target,
        probability: PARITY_PROBABILITY,
        confidence: PARITY_CONFIDENCE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::outcome::history_from_numbers;

    #[test]
    fn test_color_run_suggests_opposite() {
        let history = history_from_numbers(&[1, 3, 5, 7]).unwrap();
        let pattern = color_sequence(&history).unwrap();
        assert_eq!(
            pattern,
            DetectedPattern::ColorSequence {
                run: vec![Color::Red; 3],
                target: Color::Black,
                probability: 0.78,
                confidence: 0.85,
            }
        );
    }

    #[test]
    fn test_color_run_rejects_mixed_or_green() {
        // Mixed colors.
        let history = history_from_numbers(&[1, 3, 5, 8]).unwrap();
        assert!(color_sequence(&history).is_none());
        // A zero in the run.
        let history = history_from_numbers(&[1, 3, 0, 7]).unwrap();
        assert!(color_sequence(&history).is_none());
        // Too short.
        let history = history_from_numbers(&[1, 3, 5]).unwrap();
        assert!(color_sequence(&history).is_none());
    }

    #[test]
    fn test_dozen_gate_below_ten_events() {
        let history = history_from_numbers(&[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
        assert!(dozen_hot(&history).is_none());
    }

    #[test]
    fn test_dozen_concentration() {
        // Five of the last ten in the second dozen (13..=24).
        let history = history_from_numbers(&[13, 1, 14, 2, 15, 3, 16, 4, 17, 0]).unwrap();
        let pattern = dozen_hot(&history).unwrap();
        match pattern {
            DetectedPattern::DozenHot {
                dozen,
                hits,
                probability,
                ..
            } => {
                assert_eq!(dozen, 2);
                assert_eq!(hits, 5);
                assert!((probability - 0.75).abs() < 1e-12);
            }
            other => panic!("unexpected pattern {other:?}"),
        }
    }

    #[test]
    fn test_dozen_below_forty_percent_is_ignored() {
        // Three hits per dozen plus a zero: max 4 needed, only 3 seen.
        let history = history_from_numbers(&[1, 2, 3, 13, 14, 15, 25, 26, 27, 0]).unwrap();
        assert!(dozen_hot(&history).is_none());
    }

    #[test]
    fn test_hot_number_scenario() {
        // 17 hits four times in twenty spins, everything else once.
        let history = history_from_numbers(&[
            17, 1, 2, 3, 17, 4, 5, 6, 17, 7, 8, 9, 17, 10, 11, 12, 13, 14, 15, 16,
        ])
        .unwrap();
        let pattern = hot_number(&history).unwrap();
        match pattern {
            DetectedPattern::HotNumber {
                number,
                hits,
                probability,
                confidence,
                ..
            } => {
                assert_eq!(number, 17);
                assert_eq!(hits, 4);
                assert!((probability - 0.6).abs() < 1e-12);
                assert!((confidence - 0.70).abs() < 1e-12);
            }
            other => panic!("unexpected pattern {other:?}"),
        }
    }

    #[test]
    fn test_hot_number_requires_three_hits() {
        // Evenly spread window: max count 1 never qualifies.
        let numbers: Vec<u8> = (0..20).collect();
        let history = history_from_numbers(&numbers).unwrap();
        assert!(hot_number(&history).is_none());
    }

    #[test]
    fn test_parity_trend_scenario() {
        let history = history_from_numbers(&[2, 4, 6, 8, 10, 12, 14, 16]).unwrap();
        let pattern = parity_trend(&history).unwrap();
        assert_eq!(
            pattern,
            DetectedPattern::ParityTrend {
                even: 8,
                odd: 0,
                target: Parity::Odd,
                probability: 0.72,
                confidence: 0.75,
            }
        );
    }

    #[test]
    fn test_parity_trend_needs_six_nonzero() {
        // Three zeros leave only five non-zero spins.
        let history = history_from_numbers(&[0, 0, 0, 2, 4, 6, 8, 10]).unwrap();
        assert!(parity_trend(&history).is_none());
    }

    #[test]
    fn test_parity_trend_balanced_window() {
        let history = history_from_numbers(&[2, 1, 4, 3, 6, 5, 8, 7]).unwrap();
        assert!(parity_trend(&history).is_none());
    }

    #[test]
    fn test_analyze_all_sorted_by_probability() {
        // A window that triggers several detectors at once.
        let history = history_from_numbers(&[
            5, 9, 1, 3, 17, 2, 17, 4, 17, 6, 17, 8, 10, 12, 14, 16, 18, 12, 14, 16,
        ])
        .unwrap();
        let patterns = analyze_all(&history);
        assert!(!patterns.is_empty());
        for pair in patterns.windows(2) {
            assert!(pair[0].probability() >= pair[1].probability());
        }
    }
}
