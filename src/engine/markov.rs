//! Fixed-order Markov chain over the outcome sequence.

use crate::domain::outcome::OutcomeRecord;
use crate::domain::wheel::UNIFORM_PROBABILITY;
use std::collections::HashMap;

/// Chain order: conditional on the three most recent outcomes.
pub const MARKOV_ORDER: usize = 3;

/// Transition table built once per analysis pass from the full history.
/// Querying a target is then a scan over the stored contexts.
#[derive(Debug, Clone)]
pub struct MarkovEstimator {
    /// Counts of every length-(order+1) contiguous subsequence.
    transitions: HashMap<[u8; MARKOV_ORDER + 1], u32>,
    /// The current order-length suffix of the history, if long enough.
    context: Option<[u8; MARKOV_ORDER]>,
}

impl MarkovEstimator {
    pub fn from_history(history: &[OutcomeRecord]) -> Self {
        let mut transitions: HashMap<[u8; MARKOV_ORDER + 1], u32> = HashMap::new();
        for window in history.windows(MARKOV_ORDER + 1) {
            let key = std::array::from_fn(|i| window[i].number);
            *transitions.entry(key).or_insert(0) += 1;
        }
        let context = (history.len() >= MARKOV_ORDER).then(|| {
            let suffix = &history[history.len() - MARKOV_ORDER..];
            std::array::from_fn(|i| suffix[i].number)
        });
        Self {
            transitions,
            context,
        }
    }

    /// Conditional probability of `target` given the current context, or
    /// the uniform prior 1/37 when the history is shorter than order+1 or
    /// the context was never observed.
    pub fn probability(&self, target: u8) -> f64 {
        let Some(context) = self.context else {
            return UNIFORM_PROBABILITY;
        };
        let mut total = 0u32;
        let mut hits = 0u32;
        for (sequence, count) in &self.transitions {
            if sequence[..MARKOV_ORDER] == context {
                total += count;
                if sequence[MARKOV_ORDER] == target {
                    hits += count;
                }
            }
        }
        if total == 0 {
            UNIFORM_PROBABILITY
        } else {
            f64::from(hits) / f64::from(total)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::outcome::history_from_numbers;
    use crate::domain::wheel::UNIFORM_PROBABILITY;

    #[test]
    fn test_short_history_falls_back_to_uniform() {
        let history = history_from_numbers(&[4, 8, 15]).unwrap();
        let estimator = MarkovEstimator::from_history(&history);
        for number in 0..=36 {
            assert_eq!(estimator.probability(number), UNIFORM_PROBABILITY);
        }
    }

    #[test]
    fn test_repeating_cycle_is_learned() {
        // Suffix (3,1,2) has only ever been followed by 3.
        let history = history_from_numbers(&[1, 2, 3, 1, 2, 3, 1, 2]).unwrap();
        let estimator = MarkovEstimator::from_history(&history);
        assert_eq!(estimator.probability(3), 1.0);
        assert_eq!(estimator.probability(1), 0.0);
    }

    #[test]
    fn test_unseen_context_falls_back_to_uniform() {
        // The table holds (1,2,3,4) but the suffix (2,3,4) never recurs
        // as a context.
        let history = history_from_numbers(&[1, 2, 3, 4]).unwrap();
        let estimator = MarkovEstimator::from_history(&history);
        assert_eq!(estimator.probability(9), UNIFORM_PROBABILITY);
    }

    #[test]
    fn test_split_context_divides_counts() {
        // Context (1,2,3) is followed by 4 twice and 5 once.
        let history =
            history_from_numbers(&[1, 2, 3, 4, 1, 2, 3, 5, 1, 2, 3, 4, 9, 9, 1, 2, 3]).unwrap();
        let estimator = MarkovEstimator::from_history(&history);
        assert!((estimator.probability(4) - 2.0 / 3.0).abs() < 1e-12);
        assert!((estimator.probability(5) - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(estimator.probability(6), 0.0);
    }
}
