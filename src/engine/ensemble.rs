//! Weighted combination of the independent estimators into one probability
//! plus an agreement-based confidence, with the hot/cold classification and
//! the human-readable reasoning strings.

use crate::domain::prediction::{Category, FeatureVector};

const WEIGHT_MARKOV: f64 = 0.4;
const WEIGHT_BAYESIAN: f64 = 0.3;
const WEIGHT_FREQUENCY: f64 = 0.2;
const WEIGHT_MOMENTUM: f64 = 0.1;

const HOT_PROBABILITY: f64 = 0.035;
const HOT_FREQUENCY: f64 = 0.03;
const COLD_PROBABILITY: f64 = 0.020;
const COLD_LAST_SEEN: usize = 30;

const REASON_FREQUENCY: f64 = 0.03;
const REASON_LAST_SEEN: usize = 25;
const REASON_MOMENTUM: f64 = 0.3;
const REASON_NEIGHBORS: f64 = 0.3;
const REASON_MARKOV: f64 = 0.04;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnsembleScore {
    pub probability: f64,
    pub confidence: f64,
}

/// Combine the component estimates. Inputs are clamped into [0, 1] first
/// (the Bayesian posterior is unnormalized and can exceed 1); confidence
/// is high when the four component scores agree.
pub fn combine(features: &FeatureVector, markov: f64, bayesian: f64) -> EnsembleScore {
    let markov = markov.clamp(0.0, 1.0);
    let bayesian = bayesian.clamp(0.0, 1.0);
    let frequency_score = (features.frequency * 37.0).clamp(0.0, 1.0);
    let momentum_score = (features.momentum + 1.0) / 2.0;

    let raw = WEIGHT_MARKOV * markov
        + WEIGHT_BAYESIAN * bayesian
        + WEIGHT_FREQUENCY * frequency_score
        + WEIGHT_MOMENTUM * momentum_score;

    let spread = variance(&[markov, bayesian, frequency_score, momentum_score]);
    EnsembleScore {
        probability: raw.clamp(0.0, 1.0),
        confidence: (1.0 - 2.0 * spread).max(0.0),
    }
}

/// Hot/cold/neutral classification from the clamped ensemble probability.
pub fn classify(probability: f64, features: &FeatureVector) -> Category {
    if probability > HOT_PROBABILITY && features.frequency > HOT_FREQUENCY {
        Category::Hot
    } else if probability < COLD_PROBABILITY && features.last_seen > COLD_LAST_SEEN {
        Category::Cold
    } else {
        Category::Neutral
    }
}

/// Ordered justification strings; a generic fallback when nothing triggers.
pub fn reasoning(features: &FeatureVector, markov: f64) -> Vec<String> {
    let mut reasons = Vec::new();
    if features.frequency > REASON_FREQUENCY {
        reasons.push(format!(
            "hitting {:.1}% of recent spins, above the uniform rate",
            features.frequency * 100.0
        ));
    }
    if features.last_seen > REASON_LAST_SEEN {
        reasons.push(format!("overdue: {} spins since last hit", features.last_seen));
    }
    if features.momentum > REASON_MOMENTUM {
        reasons.push("hit rate accelerating across the window".to_string());
    }
    if features.neighbor_activity > REASON_NEIGHBORS {
        reasons.push(format!(
            "{:.0}% of its wheel neighbors hit in the last 10 spins",
            features.neighbor_activity * 100.0
        ));
    }
    if markov > REASON_MARKOV {
        reasons.push(format!(
            "recent sequence context favors it ({:.1}%)",
            markov * 100.0
        ));
    }
    if reasons.is_empty() {
        reasons.push("no strong statistical signal; near-uniform expectation".to_string());
    }
    reasons
}

fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}
