//! Simplified Bayesian update over the feature vector.
//!
//! A uniform prior is scaled by coarse likelihood multipliers keyed off the
//! extracted features. The evidence term is a fixed approximation of the
//! uniform rate rather than a recomputed normalizing constant, so the
//! posterior is intentionally unnormalized and can exceed 1.0; the ensemble
//! stage clamps it. Downstream weights are tuned to this scale, so the
//! shortcut is load-bearing and must not be "corrected" here.

use crate::domain::prediction::FeatureVector;
use crate::domain::wheel::UNIFORM_PROBABILITY;

/// Fixed evidence constant, an approximation of the uniform rate.
const EVIDENCE: f64 = 0.027;

/// Frequency above the uniform rate boosts the likelihood.
const FREQUENCY_HIGH: f64 = 0.027;
/// Frequency well below the uniform rate dampens it.
const FREQUENCY_LOW: f64 = 0.020;
const MOMENTUM_HIGH: f64 = 0.5;
const MOMENTUM_LOW: f64 = -0.5;
const NEIGHBOR_ACTIVE: f64 = 0.3;

/// Unnormalized posterior probability for the number the features describe.
pub fn posterior(features: &FeatureVector) -> f64 {
    let mut likelihood = 1.0;
    if features.frequency > FREQUENCY_HIGH {
        likelihood *= 1.2;
    }
    if features.frequency < FREQUENCY_LOW {
        likelihood *= 0.8;
    }
    if features.momentum > MOMENTUM_HIGH {
        likelihood *= 1.15;
    }
    if features.momentum < MOMENTUM_LOW {
        likelihood *= 0.85;
    }
    if features.neighbor_activity > NEIGHBOR_ACTIVE {
        likelihood *= 1.1;
    }
    (likelihood * UNIFORM_PROBABILITY) / EVIDENCE
}
