use thiserror::Error;

/// Errors raised at the ingestion boundary. The analysis pipeline itself
/// never errors: below its minimum-sample gates it returns empty results,
/// and records built through [`crate::domain::outcome::OutcomeRecord::new`]
/// are valid by construction.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeError {
    #[error("outcome number {number} is outside the wheel range 0-36")]
    NumberOutOfRange { number: u8 },
}
