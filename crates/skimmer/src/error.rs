//! Error types for the skimmer library
//!
//! Skimmer uses a unified error type that wraps errors from the automaton
//! core while keeping the facade's own input rejections distinct.

use thiserror::Error;

/// Main error type for skimmer operations
#[derive(Error, Debug)]
pub enum SkimmerError {
    /// Error from automaton construction
    #[error(transparent)]
    Automaton(#[from] skimmer_ac::ACError),

    /// Malformed request rejected at the facade boundary
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for skimmer operations
pub type Result<T> = std::result::Result<T, SkimmerError>;

// Convenient conversions for boundary rejections
impl From<String> for SkimmerError {
    fn from(s: String) -> Self {
        SkimmerError::InvalidInput(s)
    }
}

impl From<&str> for SkimmerError {
    fn from(s: &str) -> Self {
        SkimmerError::InvalidInput(s.to_string())
    }
}

// Re-export the core error type for users who need it
pub use skimmer_ac::ACError;
