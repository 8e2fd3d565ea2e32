//! # Validation Module
//!
//! Decides whether a token typed at the kiosk is an acceptable answer.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Validation Happens                           │
//! │                                                                         │
//! │  Terminal token ("2", "abc", "4.50")                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  THIS MODULE: parse + range check                                      │
//! │  ├── Ok(value)  → flow continues                                       │
//! │  └── Err(_)     → prompt discards the line and re-asks                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Session / Order: business rules (duplicates, funds)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kiosk_core::validation::{parse_menu_choice, parse_top_up};
//!
//! assert_eq!(parse_menu_choice("2", 3), Ok(2));
//! assert!(parse_menu_choice("4", 3).is_err());
//! assert_eq!(parse_top_up("4.00").unwrap().cents(), 400);
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_TOP_UP, MIN_MENU_CHOICE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Menu Choices
// =============================================================================

/// Parses a numbered menu choice in `1..=max`.
///
/// ## Rules
/// - Must be an integer (leading `+` allowed, surrounding spaces ignored)
/// - Must be at least 1 and at most `max`
pub fn parse_menu_choice(token: &str, max: usize) -> ValidationResult<usize> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ValidationError::Required {
            field: "choice".to_string(),
        });
    }

    let value: i64 = token.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "choice".to_string(),
        reason: "must be a whole number".to_string(),
    })?;

    validate_menu_choice(value, max)
}

/// Checks that a numeric choice lies in `1..=max`.
pub fn validate_menu_choice(value: i64, max: usize) -> ValidationResult<usize> {
    let out_of_range = || ValidationError::OutOfRange {
        field: "choice".to_string(),
        min: MIN_MENU_CHOICE as i64,
        max: max as i64,
    };

    let choice = usize::try_from(value).map_err(|_| out_of_range())?;
    if choice < MIN_MENU_CHOICE || choice > max {
        return Err(out_of_range());
    }

    Ok(choice)
}

// =============================================================================
// Top-Up Amounts
// =============================================================================

/// Parses a top-up amount in `0..=MAX_TOP_UP`. Zero means "cancel".
pub fn parse_top_up(token: &str) -> ValidationResult<Money> {
    let amount = Money::parse_decimal(token)?;
    validate_top_up(amount)?;
    Ok(amount)
}

/// Checks that a top-up lies in `0..=MAX_TOP_UP`.
///
/// ## Example
/// ```rust
/// use kiosk_core::money::Money;
/// use kiosk_core::validation::validate_top_up;
///
/// assert!(validate_top_up(Money::zero()).is_ok());
/// assert!(validate_top_up(Money::from_cents(100_00)).is_ok());
/// assert!(validate_top_up(Money::from_cents(100_01)).is_err());
/// ```
pub fn validate_top_up(amount: Money) -> ValidationResult<()> {
    if amount.is_negative() || amount > MAX_TOP_UP {
        return Err(ValidationError::OutOfRange {
            field: "top-up".to_string(),
            min: 0,
            max: MAX_TOP_UP.dollars(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
