// src/error.rs
use crate::payoff::PayoffKind;
use std::fmt;

/// Custom error types for the option-analytics library
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Payoff selector string does not name one of the six supported variants
    InvalidPayoff { selector: String },
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidPayoff { selector } => {
                write!(f, "Invalid payoff type '{}'. Should be one of: ", selector)?;
                for (i, kind) in PayoffKind::ALL.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "'{}'", kind.as_str())?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Result type alias for option-analytics operations
pub type PricingResult<T> = Result<T, PricingError>;
