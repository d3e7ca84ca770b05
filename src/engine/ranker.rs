//! Runs the estimator pipeline for all 37 numbers and ranks the results.

use crate::domain::outcome::OutcomeRecord;
use crate::domain::prediction::{Category, Prediction};
use crate::engine::features::FeatureExtractor;
use crate::engine::markov::MarkovEstimator;
use crate::engine::{bayes, ensemble};
use tracing::debug;

/// Below this many events the whole prediction pipeline stays silent so
/// downstream consumers can show a waiting state.
pub const MIN_PREDICTION_HISTORY: usize = 20;

#[derive(Debug, Clone, Default)]
pub struct PredictionRanker {
    features: FeatureExtractor,
}

impl PredictionRanker {
    pub fn new() -> Self {
        Self::default()
    }

    /// One prediction per number 0..=36, sorted by probability descending.
    /// Ties break by ascending number so the order is fully deterministic.
    /// Empty when the history is below [`MIN_PREDICTION_HISTORY`].
    pub fn rank(&self, history: &[OutcomeRecord]) -> Vec<Prediction> {
        if history.len() < MIN_PREDICTION_HISTORY {
            debug!(
                events = history.len(),
                required = MIN_PREDICTION_HISTORY,
                "history below prediction gate"
            );
            return Vec::new();
        }

        let markov = MarkovEstimator::from_history(history);
        let mut predictions: Vec<Prediction> = (0..=36u8)
            .map(|number| {
                let features = self.features.extract(number, history);
                let markov_probability = markov.probability(number);
                let bayesian_probability = bayes::posterior(&features);
                let score = ensemble::combine(&features, markov_probability, bayesian_probability);
                Prediction {
                    number,
                    probability: score.probability,
                    confidence: score.confidence,
                    category: ensemble::classify(score.probability, &features),
                    reasoning: ensemble::reasoning(&features, markov_probability),
                }
            })
            .collect();

        predictions.sort_by(|a, b| {
            b.probability
                .total_cmp(&a.probability)
                .then(a.number.cmp(&b.number))
        });
        debug!(events = history.len(), "ranked 37 predictions");
        predictions
    }
}

/// The `k` highest-probability predictions of an already ranked slice.
pub fn top(predictions: &[Prediction], k: usize) -> &[Prediction] {
    &predictions[..k.min(predictions.len())]
}

/// Ranked predictions classified hot, in rank order.
pub fn hot(predictions: &[Prediction]) -> impl Iterator<Item = &Prediction> {
    predictions.iter().filter(|p| p.category == Category::Hot)
}

/// Ranked predictions classified cold, in rank order.
pub fn cold(predictions: &[Prediction]) -> impl Iterator<Item = &Prediction> {
    predictions.iter().filter(|p| p.category == Category::Cold)
}
