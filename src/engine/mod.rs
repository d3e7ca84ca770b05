//! The analysis pipeline: feature extraction, Markov and Bayesian
//! estimation, ensemble scoring, pattern detection and portfolio
//! allocation.
//!
//! Everything here is a pure function of the history slice it is handed
//! (plus fixed constants): no interior state, no I/O, no locking. Callers
//! own snapshot discipline — a slice must not change for the duration of
//! one call.

pub mod bayes;
pub mod ensemble;
pub mod features;
pub mod markov;
pub mod patterns;
pub mod ranker;
pub mod strategy;

pub use ensemble::EnsembleScore;
pub use features::FeatureExtractor;
pub use markov::MarkovEstimator;
pub use ranker::{MIN_PREDICTION_HISTORY, PredictionRanker};
pub use strategy::MIN_STRATEGY_HISTORY;

use crate::domain::outcome::OutcomeRecord;
use crate::domain::prediction::{CombinedStrategy, DetectedPattern, Prediction};

/// Stateless facade over the full pipeline. Cheap to construct and clone;
/// concurrent use over different (or identical) history snapshots is safe
/// because nothing is mutated.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    ranker: PredictionRanker,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ranked per-number predictions; empty below 20 events.
    pub fn predict(&self, history: &[OutcomeRecord]) -> Vec<Prediction> {
        self.ranker.rank(history)
    }

    /// All triggered categorical patterns, sorted by probability.
    pub fn detect_patterns(&self, history: &[OutcomeRecord]) -> Vec<DetectedPattern> {
        patterns::analyze_all(history)
    }

    /// Full portfolio build: predictions feed the allocator. `None` below
    /// 25 events.
    pub fn build_strategy(&self, history: &[OutcomeRecord]) -> Option<CombinedStrategy> {
        let predictions = self.predict(history);
        strategy::allocate(history, &predictions)
    }
}
