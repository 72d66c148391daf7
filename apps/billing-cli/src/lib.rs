//! # billing-cli: Invoice Builder for the Terminal
//!
//! Every run loads the saved invoice, applies one command, saves, and
//! prints the refreshed invoice.
//!
//! ## Run Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  1. Initialize logging (stderr, EnvFilter)                             │
//! │  2. Load AppConfig (env > billing.toml > defaults)                     │
//! │  3. Open the SQLite store, run migrations                              │
//! │  4. Load the document; stamp date + number if empty                    │
//! │  5. Execute the command                                                │
//! │       edit:   mutate ──► save ──► "Last saved: ..." ──► editor view    │
//! │       read:   show / print / totals / export                           │
//! │  6. Close the store, print the output                                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod state;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use commands::App;
use error::CliResult;
use state::AppConfig;

/// Default log filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn,billing_cli=info,sqlx=warn";

/// Runs one command line and returns what goes to stdout.
///
/// Without a subcommand the invoice is shown.
pub async fn run(cli: Cli) -> CliResult<String> {
    let config = AppConfig::load(cli.config)?;
    let app = App::open(config).await?;

    let command = cli.command.unwrap_or(Command::Show);
    let result = commands::execute(&app, command).await;

    app.close().await;
    result
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=billing=debug` - Debug for the billing crates only
/// - Default: warnings, plus the CLI's own info lines ("Last saved")
///
/// Logs go to stderr so stdout only carries command output.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    debug!(version = env!("CARGO_PKG_VERSION"), "billing starting");
}
