//! # Error Types
//!
//! Domain-specific error types for kiosk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kiosk-core errors (this file)                                         │
//! │  ├── CoreError        - Ordering and balance rule violations           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  kiosk-cli errors (in app)                                             │
//! │  └── KioskError       - Terminal closed, I/O, configuration            │
//! │                                                                         │
//! │  Flow: ValidationError → re-prompt (never leaves the prompt)           │
//! │        CoreError       → message to the user, flow continues           │
//! │        KioskError      → ends the session                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (topping name, amounts, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent ordering or balance rule violations.
/// The console flows turn each one into a message and keep going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A size index outside the catalog.
    #[error("Unknown pizza size: {0}")]
    UnknownSize(usize),

    /// A topping index outside the catalog.
    #[error("Unknown topping: {0}")]
    UnknownTopping(usize),

    /// Topping is already on the pizza.
    ///
    /// ## User Workflow
    /// ```text
    /// Select "Ham"  ──► added, cost 3.80
    ///      │
    ///      ▼
    /// Select "Ham" again
    ///      │
    ///      ▼
    /// DuplicateTopping { name: "Ham" }
    ///      │
    ///      ▼
    /// UI shows: "You have already added Ham to your pizza!"
    /// ```
    #[error("{name} is already on this pizza")]
    DuplicateTopping { name: String },

    /// Balance does not cover the order.
    #[error("Insufficient funds: balance {balance}, cost {cost}")]
    InsufficientFunds { balance: Money, cost: Money },

    /// Catalog definition is unusable.
    #[error("Invalid catalog: {reason}")]
    InvalidCatalog { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used by the prompts to decide whether to re-ask.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g., letters where a number was expected).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., the same topping name twice in a catalog).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientFunds {
            balance: Money::zero(),
            cost: Money::from_cents(380),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: balance 0.00, cost 3.80"
        );

        let err = CoreError::DuplicateTopping {
            name: "Ham".to_string(),
        };
        assert_eq!(err.to_string(), "Ham is already on this pizza");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::OutOfRange {
            field: "choice".to_string(),
            min: 1,
            max: 3,
        };
        assert_eq!(err.to_string(), "choice must be between 1 and 3");

        let err = ValidationError::Required {
            field: "amount".to_string(),
        };
        assert_eq!(err.to_string(), "amount is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Negative {
            field: "price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
