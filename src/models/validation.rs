//! Validation outcome models handed to the rendering surface

use super::transaction::TransactionKind;

/// Why a raw amount field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    Required,
    NotANumber,
    Negative,
    BelowMinimum,
}

impl InputError {
    /// User-facing message for the rejection
    pub fn message(&self, kind: TransactionKind) -> String {
        match self {
            InputError::Required => format!("Error: {} is required", kind.action()),
            InputError::NotANumber => format!("Error NaN: {} must be a number.", kind.label()),
            InputError::Negative => format!("Error: {} cannot be negative.", kind.label()),
            InputError::BelowMinimum => format!("Error: {} is less than minimum.", kind.label()),
        }
    }
}

/// Result of validating a raw amount field
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub error: Option<InputError>,
    /// Rejection reason, or an advisory on a valid outcome
    pub message: Option<String>,
    /// Parsed amount, present only when the outcome is valid
    pub amount: Option<f64>,
}

impl ValidationOutcome {
    pub fn rejected(kind: TransactionKind, error: InputError) -> Self {
        ValidationOutcome {
            valid: false,
            error: Some(error),
            message: Some(error.message(kind)),
            amount: None,
        }
    }

    pub fn accepted(amount: f64) -> Self {
        ValidationOutcome {
            valid: true,
            error: None,
            message: None,
            amount: Some(amount),
        }
    }

    /// Valid, but with a warning the surface should still display
    pub fn advisory(amount: f64, message: impl Into<String>) -> Self {
        ValidationOutcome {
            valid: true,
            error: None,
            message: Some(message.into()),
            amount: Some(amount),
        }
    }
}
