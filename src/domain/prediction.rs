use crate::domain::outcome::{Color, Parity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Descriptive statistics for one candidate number over a trailing window.
/// Computed on demand, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Spins since the number last appeared; window length if absent.
    pub last_seen: usize,
    /// Occurrence count divided by window length.
    pub frequency: f64,
    /// Newer-half frequency minus older-half frequency, in [-1, 1].
    pub momentum: f64,
    /// Fraction of the number's four wheel neighbors seen in the last 10 spins.
    pub neighbor_activity: f64,
    /// Repeating-block heuristic score in [0, 1].
    pub sequence_pattern: f64,
    /// Shannon entropy of the window's number distribution, normalized by
    /// log2(37). A property of the window, identical across candidates.
    pub entropy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Hot,
    Cold,
    Neutral,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Hot => write!(f, "hot"),
            Category::Cold => write!(f, "cold"),
            Category::Neutral => write!(f, "neutral"),
        }
    }
}

/// Per-number output of the ensemble pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub number: u8,
    pub probability: f64,
    pub confidence: f64,
    pub category: Category,
    /// Ordered human-readable justifications, never empty.
    pub reasoning: Vec<String>,
}

/// One detected categorical pattern. Closed sum over the four detector
/// kinds; each variant carries only its own evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DetectedPattern {
    /// A same-color run; suggests the opposite color.
    ColorSequence {
        run: Vec<Color>,
        target: Color,
        probability: f64,
        confidence: f64,
    },
    /// One dozen concentrating recent spins; suggests that dozen.
    DozenHot {
        dozen: u8,
        hits: usize,
        window: usize,
        probability: f64,
        confidence: f64,
    },
    /// A single number repeating above expectation; suggests that number.
    HotNumber {
        number: u8,
        hits: usize,
        window: usize,
        probability: f64,
        confidence: f64,
    },
    /// Recent spins dominated by one parity; suggests the opposite.
    ParityTrend {
        even: usize,
        odd: usize,
        target: Parity,
        probability: f64,
        confidence: f64,
    },
}

impl DetectedPattern {
    pub fn probability(&self) -> f64 {
        match self {
            DetectedPattern::ColorSequence { probability, .. }
            | DetectedPattern::DozenHot { probability, .. }
            | DetectedPattern::HotNumber { probability, .. }
            | DetectedPattern::ParityTrend { probability, .. } => *probability,
        }
    }

    pub fn confidence(&self) -> f64 {
        match self {
            DetectedPattern::ColorSequence { confidence, .. }
            | DetectedPattern::DozenHot { confidence, .. }
            | DetectedPattern::HotNumber { confidence, .. }
            | DetectedPattern::ParityTrend { confidence, .. } => *confidence,
        }
    }
}

/// One slice of a betting portfolio. Closed sum over the four bet kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StrategyAllocation {
    StraightUp {
        numbers: Vec<u8>,
        percentage: u8,
        reasoning: String,
    },
    Neighbors {
        /// The overdue numbers the sectors were built around.
        anchors: Vec<u8>,
        numbers: Vec<u8>,
        percentage: u8,
        reasoning: String,
    },
    Dozens {
        dozen: u8,
        numbers: Vec<u8>,
        percentage: u8,
        reasoning: String,
    },
    Colors {
        color: Color,
        numbers: Vec<u8>,
        percentage: u8,
        reasoning: String,
    },
}

impl StrategyAllocation {
    pub fn numbers(&self) -> &[u8] {
        match self {
            StrategyAllocation::StraightUp { numbers, .. }
            | StrategyAllocation::Neighbors { numbers, .. }
            | StrategyAllocation::Dozens { numbers, .. }
            | StrategyAllocation::Colors { numbers, .. } => numbers,
        }
    }

    pub fn percentage(&self) -> u8 {
        match self {
            StrategyAllocation::StraightUp { percentage, .. }
            | StrategyAllocation::Neighbors { percentage, .. }
            | StrategyAllocation::Dozens { percentage, .. }
            | StrategyAllocation::Colors { percentage, .. } => *percentage,
        }
    }

    /// Payout multiple for a winning unit on this bet kind.
    pub fn expected_payout(&self) -> u32 {
        match self {
            StrategyAllocation::StraightUp { .. } | StrategyAllocation::Neighbors { .. } => 35,
            StrategyAllocation::Dozens { .. } => 2,
            StrategyAllocation::Colors { .. } => 1,
        }
    }

    pub fn reasoning(&self) -> &str {
        match self {
            StrategyAllocation::StraightUp { reasoning, .. }
            | StrategyAllocation::Neighbors { reasoning, .. }
            | StrategyAllocation::Dozens { reasoning, .. }
            | StrategyAllocation::Colors { reasoning, .. } => reasoning,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// A multi-type betting portfolio built from one analysis pass.
///
/// Allocation percentages are not rebalanced when a bet kind has no
/// candidates, so they need not sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedStrategy {
    pub allocations: Vec<StrategyAllocation>,
    pub expected_return: f64,
    pub confidence: f64,
    pub risk_level: RiskLevel,
}
