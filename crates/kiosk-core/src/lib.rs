//! # kiosk-core: Pure Ordering Logic for the Pizza Kiosk
//!
//! This crate holds every rule the kiosk enforces, as plain functions and
//! value types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pizza Kiosk Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Terminal (stdin / stdout)                    │   │
//! │  │    Main Menu ──► Top-Up ──► Order Flow ──► Exit Confirmation    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    kiosk-cli (flows)                            │   │
//! │  │    prompt_choice, run_top_up, run_order_flow, run_main_menu     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kiosk-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ │   │
//! │  │   │ money   │ │ catalog │ │  order  │ │ session │ │validation│ │   │
//! │  │   │ Money   │ │ Sizes   │ │ Order   │ │ Balance │ │ choices  │ │   │
//! │  │   │ parsing │ │Toppings │ │ cost    │ │ Receipt │ │ top-ups  │ │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └──────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TERMINAL • NO ENVIRONMENT • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Credit amounts with integer arithmetic (no floating point!)
//! - [`catalog`] - The fixed menu of sizes and toppings
//! - [`order`] - One pizza being configured, with set semantics for toppings
//! - [`session`] - The prepaid balance and purchase completion
//! - [`validation`] - Menu choice and top-up validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use kiosk_core::{Catalog, Money, Order, Session, SizeId, ToppingId};
//!
//! let catalog = Catalog::standard();
//! let mut session = Session::new();
//!
//! // 7" pizza with ham
//! let mut order = Order::new(SizeId(0), &catalog).unwrap();
//! order.add_topping(ToppingId(0), &catalog).unwrap();
//! assert_eq!(order.cost(), Money::from_cents(380));
//!
//! // Not enough credit yet
//! assert!(session.purchase(&order).is_err());
//!
//! session.deposit(Money::from_cents(400)).unwrap();
//! let receipt = session.purchase(&order).unwrap();
//! assert_eq!(receipt.remaining_balance, Money::from_cents(20));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod order;
pub mod session;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, PizzaSize, SizeId, Topping, ToppingId};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::Order;
pub use session::{Receipt, Session};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest amount that can be added to the balance in a single top-up.
///
/// ## Business Reason
/// Caps mistyped amounts (e.g. 1000 instead of 10). A top-up of exactly
/// this amount is accepted.
pub const MAX_TOP_UP: Money = Money::from_cents(100_00);

/// Smallest value any numbered menu accepts. Menus are always `1..=max`.
pub const MIN_MENU_CHOICE: usize = 1;
