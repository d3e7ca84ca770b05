use crate::domain::errors::OutcomeError;
use crate::domain::wheel;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
    Green,
}

impl Color {
    pub fn of(number: u8) -> Color {
        if number == 0 {
            Color::Green
        } else if wheel::is_red(number) {
            Color::Red
        } else {
            Color::Black
        }
    }

    /// The other even-money color. Green has no opposite.
    pub fn opposite(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
            Color::Green => Color::Green,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Black => write!(f, "black"),
            Color::Green => write!(f, "green"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Half {
    Low,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn opposite(self) -> Parity {
        match self {
            Parity::Even => Parity::Odd,
            Parity::Odd => Parity::Even,
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Even => write!(f, "even"),
            Parity::Odd => write!(f, "odd"),
        }
    }
}

/// One spin result with its derived table fields, computed once at
/// construction. Histories are chronological slices of these records,
/// **newest-last**: "the most recent k spins" is always the tail
/// `&history[len - k..]`. Every component applies that convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutcomeRecord {
    pub number: u8,
    pub color: Color,
    /// 1..=3, absent for zero.
    pub dozen: Option<u8>,
    /// 1..=3, absent for zero.
    pub column: Option<u8>,
    pub half: Option<Half>,
    pub parity: Option<Parity>,
    /// Epoch seconds; non-decreasing along a history.
    pub timestamp: i64,
}

impl OutcomeRecord {
    /// Validating constructor — this is the ingestion boundary. Nothing
    /// downstream re-checks the number range; the derivation formulas
    /// assume 0..=36.
    pub fn new(number: u8, timestamp: i64) -> Result<OutcomeRecord, OutcomeError> {
        if number > 36 {
            return Err(OutcomeError::NumberOutOfRange { number });
        }
        let derived = if number == 0 {
            (None, None, None, None)
        } else {
            (
                Some((number - 1) / 12 + 1),
                Some((number - 1) % 3 + 1),
                Some(if number <= 18 { Half::Low } else { Half::High }),
                Some(if number % 2 == 0 {
                    Parity::Even
                } else {
                    Parity::Odd
                }),
            )
        };
        Ok(OutcomeRecord {
            number,
            color: Color::of(number),
            dozen: derived.0,
            column: derived.1,
            half: derived.2,
            parity: derived.3,
            timestamp,
        })
    }

    pub fn is_zero(&self) -> bool {
        self.number == 0
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }
}

/// Build a chronological history from raw spin numbers, stamping each
/// record one second apart starting from the current clock.
pub fn history_from_numbers(numbers: &[u8]) -> Result<Vec<OutcomeRecord>, OutcomeError> {
    let base = chrono::Utc::now().timestamp();
    numbers
        .iter()
        .enumerate()
        .map(|(i, &n)| OutcomeRecord::new(n, base + i as i64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_has_no_table_fields() {
        let record = OutcomeRecord::new(0, 0).unwrap();
        assert_eq!(record.color, Color::Green);
        assert_eq!(record.dozen, None);
        assert_eq!(record.column, None);
        assert_eq!(record.half, None);
        assert_eq!(record.parity, None);
    }

    #[test]
    fn test_derived_fields() {
        let record = OutcomeRecord::new(17, 0).unwrap();
        assert_eq!(record.color, Color::Black);
        assert_eq!(record.dozen, Some(2));
        assert_eq!(record.column, Some(2));
        assert_eq!(record.half, Some(Half::Low));
        assert_eq!(record.parity, Some(Parity::Odd));

        let record = OutcomeRecord::new(36, 0).unwrap();
        assert_eq!(record.color, Color::Red);
        assert_eq!(record.dozen, Some(3));
        assert_eq!(record.column, Some(3));
        assert_eq!(record.half, Some(Half::High));
        assert_eq!(record.parity, Some(Parity::Even));
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(
            OutcomeRecord::new(37, 0),
            Err(OutcomeError::NumberOutOfRange { number: 37 })
        );
    }

    #[test]
    fn test_history_timestamps_increase() {
        let history = history_from_numbers(&[4, 0, 19]).unwrap();
        assert_eq!(history.len(), 3);
        assert!(history[0].timestamp < history[1].timestamp);
        assert!(history[1].timestamp < history[2].timestamp);
    }

    #[test]
    fn test_color_opposites() {
        assert_eq!(Color::Red.opposite(), Color::Black);
        assert_eq!(Color::Green.opposite(), Color::Green);
        assert_eq!(Parity::Odd.opposite(), Parity::Even);
    }
}
