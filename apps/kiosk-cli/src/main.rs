//! # Pizza Kiosk Entry Point
//!
//! Interactive prepaid pizza ordering over stdin/stdout. Takes no arguments.
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    kiosk_cli::run()
}
