//! # Flows
//!
//! The menus the customer walks through.
//!
//! ```text
//! Main Menu ──┬── 1) Top-Up ──────────────┐
//!             ├── 2) Order Flow (repeat) ─┤──► back to Main Menu
//!             └── 3) Exit Confirmation ───┘     (until exit confirmed)
//! ```
//!
//! Every flow takes the terminal and the session explicitly; nothing here
//! holds state between calls.

pub mod menu;
pub mod order;
pub mod top_up;

use kiosk_core::{Catalog, Money};

use crate::config::KioskConfig;

/// Printed between screens.
pub const SEPARATOR: &str = "+-----+";

/// Read-only data every flow needs.
#[derive(Debug, Clone, Default)]
pub struct KioskContext {
    pub config: KioskConfig,
    pub catalog: Catalog,
}

impl KioskContext {
    pub fn new(config: KioskConfig, catalog: Catalog) -> Self {
        KioskContext { config, catalog }
    }

    /// Formats an amount with the configured unit, e.g. "3.80 credits".
    pub fn amount(&self, money: Money) -> String {
        format!("{} {}", money, self.config.unit_label)
    }
}
