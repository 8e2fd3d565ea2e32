//! # Kiosk Error Type
//!
//! Errors that end a kiosk session.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Kiosk                              │
//! │                                                                         │
//! │  Bad token ("abc", "9")  ──► handled inside the prompt, re-asked       │
//! │                                                                         │
//! │  Duplicate topping       ──► handled inside the order flow, re-asked   │
//! │                                                                         │
//! │  stdin closed            ──► KioskError::InputClosed ──► exit 0        │
//! │                                                                         │
//! │  write/read failure      ──► KioskError::Io ──────────► exit 1        │
//! │                                                                         │
//! │  bad environment config  ──► KioskError::Config ──────► exit 1        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use kiosk_core::CoreError;
use thiserror::Error;

use crate::config::ConfigError;

/// Error that unwinds the dialogue back to `run`.
#[derive(Debug, Error)]
pub enum KioskError {
    /// Standard input reached end of file while a prompt was waiting.
    #[error("input closed before the session ended")]
    InputClosed,

    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A business rule was violated in a way the flow does not recover from.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Convenience type alias for Results with KioskError.
pub type KioskResult<T> = Result<T, KioskError>;

#[cfg(test)]
mod tests {
    use super::*;
    use kiosk_core::Money;

    #[test]
    fn test_core_error_is_transparent() {
        let err: KioskError = CoreError::InsufficientFunds {
            balance: Money::zero(),
            cost: Money::from_cents(300),
        }
        .into();
        assert_eq!(err.to_string(), "Insufficient funds: balance 0.00, cost 3.00");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: KioskError = io.into();
        assert!(matches!(err, KioskError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
