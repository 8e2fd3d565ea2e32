//! # Kiosk CLI Library
//!
//! Console front end for the pizza kiosk. `main.rs` only calls [`run`].
//!
//! ## Module Organization
//! ```text
//! kiosk_cli/
//! ├── lib.rs          ◄─── You are here (startup, logging, run)
//! ├── config.rs       ◄─── Display configuration from environment
//! ├── error.rs        ◄─── KioskError (what ends a session)
//! ├── terminal.rs     ◄─── Token reader and bounded integer prompt
//! └── flows/
//!     ├── mod.rs      ◄─── KioskContext, shared formatting
//!     ├── menu.rs     ◄─── Main menu and exit confirmation
//!     ├── top_up.rs   ◄─── Balance top-up
//!     └── order.rs    ◄─── Order state machine
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (stderr, so the dialogue on stdout stays clean)
//! 2. Load configuration from environment
//! 3. Lock stdin/stdout into a [`Terminal`]
//! 4. Run the main menu until exit is confirmed or input closes

pub mod config;
pub mod error;
pub mod flows;
pub mod terminal;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use kiosk_core::{Catalog, Session};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub use config::{ConfigError, KioskConfig};
pub use error::{KioskError, KioskResult};
pub use flows::KioskContext;
pub use terminal::Terminal;

use flows::menu::run_main_menu;

/// Runs the kiosk on the process terminal and maps the result to an exit code.
///
/// ## Exit Codes
/// - `0`: exit confirmed, or input closed
/// - `1`: configuration or terminal I/O failure
pub fn run() -> ExitCode {
    init_tracing();

    match start() {
        Ok(session) => {
            info!(balance = %session.balance(), "kiosk session ended");
            ExitCode::SUCCESS
        }
        Err(KioskError::InputClosed) => {
            info!("input closed, shutting down");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "kiosk stopped");
            ExitCode::FAILURE
        }
    }
}

fn start() -> KioskResult<Session> {
    let config = KioskConfig::from_env()?;
    info!(?config, "Starting pizza kiosk");

    let context = KioskContext::new(config, Catalog::standard());
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut terminal = Terminal::new(stdin.lock(), stdout.lock());

    run_kiosk(&mut terminal, &context)
}

/// Runs one complete kiosk session on the given terminal.
///
/// Prints the welcome banner, walks the main menu, and prints the goodbye
/// message once exit is confirmed. Returns the final session.
pub fn run_kiosk<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    context: &KioskContext,
) -> KioskResult<Session> {
    let mut session = Session::new();

    writeln!(terminal.out(), "\nWelcome to the {}.", context.config.machine_name)?;
    run_main_menu(terminal, context, &mut session)?;
    write!(
        terminal.out(),
        "\nExit confirmed.\nThank you for using the {}.\n",
        context.config.machine_name
    )?;
    terminal.out().flush()?;

    Ok(session)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=info` - Show top-ups, orders, purchases
/// - `RUST_LOG=kiosk_cli=debug` - Also show rejected input
/// - Default: WARN level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
