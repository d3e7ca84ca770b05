// Wheel layout and shared number-set constants
pub mod wheel;

// Outcome records with derived table fields
pub mod outcome;

// Engine output types (predictions, patterns, strategies)
pub mod prediction;

// Boundary error types
pub mod errors;
