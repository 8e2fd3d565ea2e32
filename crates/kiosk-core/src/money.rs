//! # Money Module
//!
//! Provides the `Money` type for handling credit amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floats:                                                    │
//! │    3.00 + 0.80 = 3.8000000000000003  ❌ WRONG!                          │
//! │    4.00 - 3.80 = 0.19999999999999973 ❌ balance drifts                  │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    300 + 80 = 380 cents, 400 - 380 = 20 cents                           │
//! │    Balances never drift, however many top-ups and purchases happen      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kiosk_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(550); // 5.50 credits
//!
//! // Or parse what the customer typed
//! let top_up = Money::parse_decimal("4.5").unwrap();
//! assert_eq!(top_up.cents(), 450);
//!
//! let total = price + top_up;
//! assert_eq!(total.to_string(), "10.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::error::ValidationError;

/// Digits after the decimal point that an amount may carry.
const FRACTION_DIGITS: usize = 2;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a credit amount in hundredths of a credit ("cents").
///
/// ## Design Decisions
/// - **i64 (signed)**: Subtraction is total; callers decide whether a
///   negative result is allowed (the session never lets one stick)
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for receipt serialization
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Catalog price ──► Order.cost ──► Session.purchase ──► Receipt.total    │
/// │                                                                         │
/// │  Typed "4.00" ──► parse_decimal ──► Session.deposit ──► balance         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest credit unit).
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_core::money::Money;
    ///
    /// let price = Money::from_cents(725); // 7.25 credits
    /// assert_eq!(price.cents(), 725);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole credits and hundredths.
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_core::money::Money;
    ///
    /// let price = Money::from_major_minor(5, 50);
    /// assert_eq!(price.cents(), 550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -5.50, not -4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Parses a non-negative decimal amount as typed at the terminal.
    ///
    /// ## Accepted Forms
    /// `4`, `4.`, `4.5`, `4.50`, `.5`, `+4.50`. At most two digits after
    /// the point; no exponents, no thousands separators. A minus sign is
    /// only accepted on zero (`-0`, `-0.00`).
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("0.8").unwrap().cents(), 80);
    /// assert_eq!(Money::parse_decimal("100").unwrap().cents(), 10_000);
    /// assert!(Money::parse_decimal("1.005").is_err());
    /// assert!(Money::parse_decimal("ten").is_err());
    /// ```
    pub fn parse_decimal(text: &str) -> Result<Self, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::Required {
                field: "amount".to_string(),
            });
        }

        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid_amount("no digits"));
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid_amount("must be a decimal number"));
        }
        if fraction.len() > FRACTION_DIGITS {
            return Err(invalid_amount("at most two decimal places"));
        }

        let whole_value: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid_amount("too large"))?
        };
        // "5" means 50 hundredths, "05" means 5
        let fraction_value: i64 = format!("{:0<width$}", fraction, width = FRACTION_DIGITS)
            .parse()
            .map_err(|_| invalid_amount("must be a decimal number"))?;

        let amount = whole_value
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(fraction_value))
            .map(Money)
            .ok_or_else(|| invalid_amount("too large"))?;

        // "-0" and "-0.00" are zero, not a negative amount
        if negative && !amount.is_zero() {
            return Err(ValidationError::Negative {
                field: "amount".to_string(),
            });
        }
        Ok(amount)
    }

    /// Returns the value in cents (smallest credit unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-credit portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the hundredths portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

fn invalid_amount(reason: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: "amount".to_string(),
        reason: reason.to_string(),
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount with exactly two decimals and no unit.
///
/// ## Note
/// The kiosk appends its configured unit label ("credits") when printing.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
