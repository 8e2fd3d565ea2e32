//! # Session
//!
//! The customer's prepaid balance, alive for the whole kiosk run.
//!
//! ## Balance Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Session::new() ── balance 0.00                                        │
//! │        │                                                                │
//! │        ├── deposit(4.00) ─────────► balance 4.00                        │
//! │        │                                                                │
//! │        ├── purchase(order 3.80) ──► balance 0.20, Receipt               │
//! │        │                                                                │
//! │        └── purchase(order 7.25) ──► InsufficientFunds (balance 0.20)    │
//! │                                                                         │
//! │   The balance is never left negative.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::order::Order;
use crate::validation::validate_top_up;

// =============================================================================
// Receipt
// =============================================================================

/// Record of a completed purchase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub order_id: Uuid,
    pub size_inches: u32,
    pub toppings: Vec<String>,
    pub total: Money,
    pub remaining_balance: Money,
    pub ordered_at: DateTime<Utc>,
    pub purchased_at: DateTime<Utc>,
}

impl Receipt {
    /// Renders the receipt as a single JSON line.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

// =============================================================================
// Session
// =============================================================================

/// Prepaid credit for one kiosk run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    balance: Money,
}

impl Session {
    /// Creates a session with an empty balance.
    pub fn new() -> Self {
        Session {
            balance: Money::zero(),
        }
    }

    /// Creates a session with a starting balance.
    ///
    /// Negative amounts are clamped to zero.
    pub fn with_balance(balance: Money) -> Self {
        Session {
            balance: if balance.is_negative() { Money::zero() } else { balance },
        }
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Adds a top-up and returns the new balance.
    ///
    /// A zero amount is accepted and changes nothing.
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_core::{Money, Session};
    ///
    /// let mut session = Session::new();
    /// assert_eq!(session.deposit(Money::from_cents(400)).unwrap().cents(), 400);
    /// assert!(session.deposit(Money::from_cents(100_01)).is_err());
    /// assert_eq!(session.balance().cents(), 400);
    /// ```
    pub fn deposit(&mut self, amount: Money) -> CoreResult<Money> {
        validate_top_up(amount)?;
        self.balance += amount;
        Ok(self.balance)
    }

    pub fn can_afford(&self, order: &Order) -> bool {
        self.balance >= order.cost()
    }

    /// How much more credit the order needs (zero when affordable).
    pub fn shortfall(&self, order: &Order) -> Money {
        if self.can_afford(order) {
            Money::zero()
        } else {
            order.cost() - self.balance
        }
    }

    /// Pays for the order.
    ///
    /// ## Errors
    /// `InsufficientFunds` when the balance does not cover the cost. The
    /// balance is untouched in that case.
    pub fn purchase(&mut self, order: &Order) -> CoreResult<Receipt> {
        if !self.can_afford(order) {
            return Err(CoreError::InsufficientFunds {
                balance: self.balance,
                cost: order.cost(),
            });
        }

        self.balance -= order.cost();

        Ok(Receipt {
            order_id: order.id(),
            size_inches: order.size().diameter_inches,
            toppings: order.toppings().map(|t| t.name.clone()).collect(),
            total: order.cost(),
            remaining_balance: self.balance,
            ordered_at: order.created_at(),
            purchased_at: Utc::now(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
