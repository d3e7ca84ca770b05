//! Per-number descriptive statistics over a trailing history window.
//!
//! All formulas degrade to neutral/zero values on short or empty windows
//! rather than failing; see each helper for its own minimum.

use crate::domain::outcome::OutcomeRecord;
use crate::domain::prediction::FeatureVector;
use crate::domain::wheel::{self, NUMBER_COUNT};

/// Default trailing window for feature extraction.
pub const DEFAULT_WINDOW: usize = 50;

/// Momentum needs at least this many spins to split into halves.
const MOMENTUM_MIN_WINDOW: usize = 10;

/// Neighbor activity only looks at the tail of the window.
const NEIGHBOR_LOOKBACK: usize = 10;

/// Block length for the repeating-sequence heuristic.
const PATTERN_BLOCK: usize = 5;

#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    window_size: usize,
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl FeatureExtractor {
    pub fn new(window_size: usize) -> Self {
        Self { window_size }
    }

    /// Compute the full feature vector for `number` over the trailing
    /// window of `history` (chronological, newest-last).
    pub fn extract(&self, number: u8, history: &[OutcomeRecord]) -> FeatureVector {
        let window = tail(history, self.window_size);
        FeatureVector {
            last_seen: last_seen(number, window),
            frequency: frequency(number, window),
            momentum: momentum(number, window),
            neighbor_activity: neighbor_activity(number, window),
            sequence_pattern: sequence_pattern(number, window),
            entropy: entropy(window),
        }
    }
}

/// The most recent `len` records of `history`.
pub(crate) fn tail(history: &[OutcomeRecord], len: usize) -> &[OutcomeRecord] {
    &history[history.len().saturating_sub(len)..]
}

/// Spins since `number` last appeared (0 = most recent spin), or the
/// window length if it never did.
fn last_seen(number: u8, window: &[OutcomeRecord]) -> usize {
    window
        .iter()
        .rev()
        .position(|r| r.number == number)
        .unwrap_or(window.len())
}

fn count(number: u8, window: &[OutcomeRecord]) -> usize {
    window.iter().filter(|r| r.number == number).count()
}

fn frequency(number: u8, window: &[OutcomeRecord]) -> f64 {
    if window.is_empty() {
        return 0.0;
    }
    count(number, window) as f64 / window.len() as f64
}

/// Newer-half frequency minus older-half frequency, in [-1, 1].
fn momentum(number: u8, window: &[OutcomeRecord]) -> f64 {
    if window.len() < MOMENTUM_MIN_WINDOW {
        return 0.0;
    }
    let mid = window.len() / 2;
    frequency(number, &window[mid..]) - frequency(number, &window[..mid])
}

/// Fraction of the number's four wheel neighbors that hit in the last
/// [`NEIGHBOR_LOOKBACK`] spins of the window.
fn neighbor_activity(number: u8, window: &[OutcomeRecord]) -> f64 {
    let recent = tail(window, NEIGHBOR_LOOKBACK);
    let neighbors = wheel::wheel_neighbors(number);
    let active = neighbors
        .iter()
        .filter(|n| recent.iter().any(|r| r.number == **n))
        .count();
    active as f64 / neighbors.len() as f64
}

/// Repeating-block heuristic: each adjacent pair of identical
/// [`PATTERN_BLOCK`]-length blocks containing the target adds 0.1,
/// capped at 1.0.
fn sequence_pattern(number: u8, window: &[OutcomeRecord]) -> f64 {
    if window.len() < 2 * PATTERN_BLOCK {
        return 0.0;
    }
    let mut score: f64 = 0.0;
    for start in PATTERN_BLOCK..=window.len() - PATTERN_BLOCK {
        let block = &window[start..start + PATTERN_BLOCK];
        let previous = &window[start - PATTERN_BLOCK..start];
        let repeated = block
            .iter()
            .zip(previous)
            .all(|(a, b)| a.number == b.number);
        if repeated && block.iter().any(|r| r.number == number) {
            score += 0.1;
        }
    }
    score.min(1.0)
}

/// Shannon entropy of the window's number distribution, normalized by
/// log2(37) into [0, 1]. A property of the window as a whole.
fn entropy(window: &[OutcomeRecord]) -> f64 {
    if window.is_empty() {
        return 0.0;
    }
    let mut counts = [0usize; NUMBER_COUNT];
    for record in window {
        counts[record.number as usize] += 1;
    }
    let len = window.len() as f64;
    let raw: f64 = counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / len;
            -p * p.log2()
        })
        .sum();
    raw / (NUMBER_COUNT as f64).log2()
}
