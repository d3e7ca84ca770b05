//! Builds a multi-type betting portfolio from ranked predictions and
//! recent history.
//!
//! Percentages are fixed per bet kind and an empty candidate set simply
//! drops its allocation without rebalancing the rest, so a portfolio's
//! percentages need not sum to 100. That mirrors the behavior the rest of
//! the stack is tuned against; normalizing here would silently change
//! expected-return figures downstream.

use crate::domain::outcome::{Color, OutcomeRecord};
use crate::domain::prediction::{CombinedStrategy, Prediction, RiskLevel, StrategyAllocation};
use crate::domain::wheel::{self, NUMBER_COUNT};
use crate::engine::features::tail;
use crate::engine::ranker;
use rand::Rng;
use tracing::debug;

/// Below this many events no portfolio is produced.
pub const MIN_STRATEGY_HISTORY: usize = 25;

const STRAIGHT_UP_PERCENTAGE: u8 = 50;
const NEIGHBORS_PERCENTAGE: u8 = 25;
const DOZENS_PERCENTAGE: u8 = 15;
const COLORS_PERCENTAGE: u8 = 10;

const STRAIGHT_UP_COUNT: usize = 5;
const NEIGHBOR_ANCHOR_COUNT: usize = 2;
const DOZEN_WINDOW: usize = 15;
const COLOR_WINDOW: usize = 10;

/// Confidence reported when no predictions are available.
const DEFAULT_CONFIDENCE: f64 = 0.5;

/// Window a number must be absent from to count as cold for the fallback.
const FALLBACK_LOOKBACK: usize = 20;

/// Build the combined portfolio, or `None` below the history gate.
/// `predictions` must already be ranked (probability descending).
pub fn allocate(
    history: &[OutcomeRecord],
    predictions: &[Prediction],
) -> Option<CombinedStrategy> {
    if history.len() < MIN_STRATEGY_HISTORY {
        debug!(
            events = history.len(),
            required = MIN_STRATEGY_HISTORY,
            "history below strategy gate"
        );
        return None;
    }

    let mut allocations = Vec::with_capacity(4);

    // Straight-up: the top five hot numbers, in rank order.
    let hot_numbers: Vec<u8> = ranker::hot(predictions)
        .take(STRAIGHT_UP_COUNT)
        .map(|p| p.number)
        .collect();
    if !hot_numbers.is_empty() {
        allocations.push(StrategyAllocation::StraightUp {
            reasoning: format!("top {} hot numbers by ensemble probability", hot_numbers.len()),
            numbers: hot_numbers,
            percentage: STRAIGHT_UP_PERCENTAGE,
        });
    }

    // Neighbors: the top two cold numbers widened to their wheel sectors.
    let anchors: Vec<u8> = ranker::cold(predictions)
        .take(NEIGHBOR_ANCHOR_COUNT)
        .map(|p| p.number)
        .collect();
    if !anchors.is_empty() {
        let mut numbers = Vec::new();
        let mut seen = [false; NUMBER_COUNT];
        for &anchor in &anchors {
            for candidate in std::iter::once(anchor).chain(wheel::wheel_neighbors(anchor)) {
                if !seen[candidate as usize] {
                    seen[candidate as usize] = true;
                    numbers.push(candidate);
                }
            }
        }
        allocations.push(StrategyAllocation::Neighbors {
            reasoning: "overdue numbers covered with their wheel sectors".to_string(),
            anchors,
            numbers,
            percentage: NEIGHBORS_PERCENTAGE,
        });
    }

    // Dozens: the densest dozen over the last fifteen spins; the first
    // dozen wins ties. Skipped when the window held only zeros.
    let recent = tail(history, DOZEN_WINDOW);
    let mut counts = [0usize; 3];
    for record in recent {
        if let Some(dozen) = record.dozen {
            counts[dozen as usize - 1] += 1;
        }
    }
    let (best, hits) = counts
        .iter()
        .enumerate()
        .fold((0, 0), |acc, (i, &c)| if c > acc.1 { (i, c) } else { acc });
    if hits > 0 {
        let dozen = best as u8 + 1;
        allocations.push(StrategyAllocation::Dozens {
            reasoning: format!("dozen {dozen} hit {hits} of the last {DOZEN_WINDOW} spins"),
            dozen,
            numbers: wheel::dozen_numbers(dozen),
            percentage: DOZENS_PERCENTAGE,
        });
    }

    // Colors: majority color of the last ten spins, black on ties.
    let recent = tail(history, COLOR_WINDOW);
    let red = recent.iter().filter(|r| r.is_red()).count();
    let black = recent.iter().filter(|r| r.is_black()).count();
    let (color, numbers) = if red > black {
        (Color::Red, wheel::red_numbers())
    } else {
        (Color::Black, wheel::black_numbers())
    };
    allocations.push(StrategyAllocation::Colors {
        reasoning: format!("{color} led {red}-{black} red-black over the last {COLOR_WINDOW} spins"),
        color,
        numbers,
        percentage: COLORS_PERCENTAGE,
    });

    let expected_return = allocations
        .iter()
        .map(|a| {
            (f64::from(a.percentage()) / 100.0)
                * (a.numbers().len() as f64 / NUMBER_COUNT as f64)
                * f64::from(a.expected_payout())
        })
        .sum();

    let confidence = if predictions.is_empty() {
        DEFAULT_CONFIDENCE
    } else {
        let top = ranker::top(predictions, 5);
        top.iter().map(|p| p.confidence).sum::<f64>() / top.len() as f64
    };

    debug!(allocations = allocations.len(), expected_return, "built strategy");
    Some(CombinedStrategy {
        allocations,
        expected_return,
        confidence,
        // The single generator always reports medium risk; there is no
        // branching to vary it yet.
        risk_level: RiskLevel::Medium,
    })
}

/// Non-deterministic straight-up fallback for callers with no ranked
/// predictions: samples `count` distinct numbers, preferring pockets that
/// have not hit in the last [`FALLBACK_LOOKBACK`] spins. The RNG is
/// injected so tests can seed it and assert exact output.
pub fn fallback_straight_up<R: Rng + ?Sized>(
    history: &[OutcomeRecord],
    count: usize,
    rng: &mut R,
) -> Vec<u8> {
    let recent = tail(history, FALLBACK_LOOKBACK);
    let mut pool: Vec<u8> = (0..=36)
        .filter(|n| !recent.iter().any(|r| r.number == *n))
        .collect();
    if pool.len() < count {
        pool = (0..=36).collect();
    }
    let mut picks = Vec::with_capacity(count);
    for _ in 0..count.min(pool.len()) {
        let index = rng.random_range(0..pool.len());
        picks.push(pool.swap_remove(index));
    }
    picks
}
