//! # billing Entry Point
//!
//! ```text
//! billing [--config PATH] <command>
//!
//!   show | print | totals
//!   customer | meta | tax | terms
//!   add-item | edit-item | remove-item
//!   new | clear
//!   export-csv | export-json | import-json
//! ```

use std::process::ExitCode;

use clap::Parser;

use billing_cli::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    billing_cli::init_tracing();

    let cli = Cli::parse();

    match billing_cli::run(cli).await {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e.message);
            ExitCode::FAILURE
        }
    }
}
